//! crates/otlog/src/format.rs
//! Rendering of forwarded arguments for the engines bundled with this crate.
//!
//! The dispatch layer never formats anything itself; it hands the raw format
//! string and arguments to a [`LogEngine`](crate::LogEngine). Engines that need
//! text use these helpers so captured and traced output agree.

use std::fmt::{self, Write as _};
use std::iter::{self, Peekable};
use std::str::Chars;

/// Joins displayed arguments with single spaces.
#[must_use]
pub fn join(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out
}

/// Upper bound applied to widths and precisions.
const MAX_WIDTH: usize = 1_000_000;

/// Renders a `%`-verb format string.
///
/// Each `%` followed by an ASCII letter consumes the next argument, whatever
/// the letter. Flags (`-+# 0`), a width and a `.precision` may sit between
/// the `%` and the letter: `-` pads on the right, `0` pads numbers with
/// zeros, and the precision is handed to the argument's `Display` impl, so
/// it rounds floats and truncates strings. `%%` produces a literal percent
/// sign. A verb with no argument left renders as `%!<verb>(MISSING)`, and
/// arguments left over after the format string is exhausted are appended,
/// separated by spaces.
///
/// # Examples
///
/// ```
/// use otlog::format::render;
///
/// assert_eq!(render("value=%d", &[&42]), "value=42");
/// assert_eq!(render("%5d|%.2f|%x", &[&3, &1.5, &255]), "    3|1.50|255");
/// assert_eq!(render("100%%", &[]), "100%");
/// assert_eq!(render("%s and %s", &[&"a"]), "a and %!s(MISSING)");
/// ```
#[must_use]
pub fn render(format: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut remaining = args.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut lookahead = chars.clone();
        let Some(directive) = Directive::parse(&mut lookahead) else {
            out.push('%');
            continue;
        };
        chars = lookahead;
        match remaining.next() {
            Some(arg) => directive.write(&mut out, *arg),
            None => {
                let _ = write!(out, "%!{}(MISSING)", directive.verb);
            }
        }
    }

    for arg in remaining {
        let _ = write!(out, " {arg}");
    }
    out
}

/// A parsed `%[flags][width][.precision]verb` directive.
#[derive(Debug, Default, PartialEq, Eq)]
struct Directive {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

impl Directive {
    /// Parses the text after a `%`; `None` when no verb letter follows.
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Option<Self> {
        let mut directive = Self::default();

        while let Some(flag) = chars.next_if(|c| matches!(*c, '-' | '+' | '#' | ' ' | '0')) {
            match flag {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                _ => {}
            }
        }
        directive.width = parse_number(chars);
        if chars.next_if_eq(&'.').is_some() {
            directive.precision = Some(parse_number(chars).unwrap_or(0));
        }

        directive.verb = chars.next_if(char::is_ascii_alphabetic)?;
        Some(directive)
    }

    fn write(&self, out: &mut String, arg: &dyn fmt::Display) {
        let text = match self.precision {
            Some(precision) => format!("{arg:.precision$}"),
            None => arg.to_string(),
        };
        let pad = self
            .width
            .unwrap_or(0)
            .saturating_sub(text.chars().count());

        if self.left {
            out.push_str(&text);
            out.extend(iter::repeat_n(' ', pad));
        } else if self.zero && is_numeric(&text) {
            let digits = text.trim_start_matches(['-', '+']);
            out.push_str(&text[..text.len() - digits.len()]);
            out.extend(iter::repeat_n('0', pad));
            out.push_str(digits);
        } else {
            out.extend(iter::repeat_n(' ', pad));
            out.push_str(&text);
        }
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        let digit = digit.to_digit(10).unwrap_or(0) as usize;
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit)
                .min(MAX_WIDTH),
        );
    }
    value
}

fn is_numeric(text: &str) -> bool {
    let digits = text.trim_start_matches(['-', '+']);
    digits.starts_with(|c: char| c.is_ascii_digit())
}
