//! Basic logger usage example
//!
//! Logs a few lines to stdout, including one below the configured band.
//!
//! Run with: cargo run --example basic_usage

use minlog::prelude::*;
use minlog::info;

fn main() -> Result<()> {
    let mut logger = Logger::builder()
        .min_level(Severity::Info)
        .target(std::io::stdout())
        .build()?;

    logger.log(Severity::Info, "hello, world!", NO_ARGS);
    logger.info("foo, bar");
    logger.infof("foo, bar%s", &[&"!"]);
    logger.debug("below the band, never written");
    logger.warn("something looks off");
    info!(logger, "", "joined", "without", "a", "template");

    if !logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
        eprintln!("Warning: Logger shutdown timed out");
    }

    let metrics = logger.metrics();
    eprintln!(
        "written: {}, filtered: {}, failed: {}",
        metrics.written(),
        metrics.filtered(),
        metrics.write_failures()
    );

    Ok(())
}
