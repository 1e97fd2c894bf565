//! Printf-style positional interpolation over rendered text.
//!
//! Placeholders:
//!
//! - `%s`, `%v`, `%d`: the next argument, formatted with `Display`
//! - `%%`: a literal `%`
//!
//! Any other `%` is kept as-is, so text like `100%` or `50% off` needs no
//! escaping. Interpolation runs after tags are rendered, which means
//! argument text is never scanned for tags.

use std::fmt;

use crate::error::FormatError;

/// Substitutes `args` into the placeholders of `text`.
///
/// Every argument must be consumed: a placeholder with no argument left
/// fails with [`FormatError::MissingArgument`], and leftover arguments fail
/// with [`FormatError::ExtraArguments`].
pub fn interpolate(text: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
    if args.is_empty() && !text.contains('%') {
        return Ok(text.to_string());
    }

    let mut output = String::with_capacity(text.len() + args.len() * 8);
    let mut next_arg = 0;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                output.push('%');
            }
            Some('s' | 'v' | 'd') => {
                chars.next();
                let arg = args
                    .get(next_arg)
                    .ok_or(FormatError::MissingArgument { index: next_arg })?;
                output.push_str(&arg.to_string());
                next_arg += 1;
            }
            _ => output.push('%'),
        }
    }

    if next_arg < args.len() {
        return Err(FormatError::ExtraArguments {
            count: args.len() - next_arg,
        });
    }

    Ok(output)
}
