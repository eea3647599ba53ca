//! Message composition
//!
//! Turns a printf-style template plus trailing arguments into the final log
//! message. There are exactly three cases:
//!
//! 1. No arguments: the template is the message, untouched.
//! 2. A non-empty template: each `%<verb>` is replaced by the next argument.
//! 3. An empty template with arguments: the arguments joined by spaces.
//!
//! Placeholder/argument count mismatches never fail. They produce degraded
//! markers in the output instead:
//!
//! | Situation            | Output              |
//! |----------------------|---------------------|
//! | missing argument     | `%!d(MISSING)`      |
//! | `%` at end of input  | `%!(NOVERB)`        |
//! | unused arguments     | `%!(EXTRA a, b)`    |
//!
//! # Examples
//!
//! ```
//! use minlog::core::compose;
//!
//! assert_eq!(compose("plain %d", &[]), "plain %d");
//! assert_eq!(compose("run %d of %s", &[&3, &"five"]), "run 3 of five");
//! assert_eq!(compose("", &[&"a", &1, &'c']), "a 1 c");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

/// Empty argument list, for calls that pass only a template
pub const NO_ARGS: &[&dyn Display] = &[];

/// Compose a message into a new string.
///
/// Borrows `template` when there are no arguments.
pub fn compose<'a>(template: &'a str, args: &[&dyn Display]) -> Cow<'a, str> {
    if args.is_empty() {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    // Writing into a String only fails if an argument's Display impl does;
    // whatever was written up to that point is kept.
    let _ = compose_into(&mut out, template, args);
    Cow::Owned(out)
}

/// Compose a message directly into `out`.
pub fn compose_into<W>(out: &mut W, template: &str, args: &[&dyn Display]) -> fmt::Result
where
    W: Write + ?Sized,
{
    if args.is_empty() {
        return out.write_str(template);
    }
    if template.is_empty() {
        return join_args(out, args, " ");
    }
    substitute(out, template, args)
}

fn join_args<W>(out: &mut W, args: &[&dyn Display], separator: &str) -> fmt::Result
where
    W: Write + ?Sized,
{
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.write_str(separator)?;
        }
        write!(out, "{}", arg)?;
    }
    Ok(())
}

#[inline]
fn is_flag(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'#' | b' ' | b'.' | b'0'..=b'9')
}

fn substitute<W>(out: &mut W, template: &str, args: &[&dyn Display]) -> fmt::Result
where
    W: Write + ?Sized,
{
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.write_str(&rest[..pos])?;

        // Flags, width and precision are accepted but not applied.
        let directive = &rest[pos + 1..];
        let flags_len = directive.bytes().take_while(|b| is_flag(*b)).count();
        let directive = &directive[flags_len..];

        let Some(verb) = directive.chars().next() else {
            out.write_str("%!(NOVERB)")?;
            rest = "";
            break;
        };

        if verb == '%' {
            out.write_char('%')?;
        } else {
            match args.get(next_arg) {
                Some(arg) => {
                    write!(out, "{}", arg)?;
                    next_arg += 1;
                }
                None => write!(out, "%!{}(MISSING)", verb)?,
            }
        }
        rest = &directive[verb.len_utf8()..];
    }
    out.write_str(rest)?;

    if next_arg < args.len() {
        out.write_str("%!(EXTRA ")?;
        join_args(out, &args[next_arg..], ", ")?;
        out.write_char(')')?;
    }
    Ok(())
}

/// `fmt::Write` adapter over a byte buffer
pub(crate) struct BytesWriter<'a>(pub(crate) &'a mut Vec<u8>);

impl Write for BytesWriter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.extend_from_slice(s.as_bytes());
        Ok(())
    }
}
