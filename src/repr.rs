//! Native textual representations.
//!
//! Pure helpers producing the repr-style forms shared by the scalar rule,
//! [`Value`](crate::Value) display and mapping-key rendering. Snapshots
//! written with these forms stay byte-identical across runs, platforms and
//! process restarts, so the exact shapes here (quote preference, float
//! decimal points, the sentinel address) are load-bearing.

use regex::Regex;
use std::sync::OnceLock;

/// Fixed placeholder substituted for any memory-identity address found in a
/// native representation.
pub const SENTINEL_ADDRESS: &str = "0x100000000";

static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();

fn address_re() -> &'static Regex {
    ADDRESS_RE.get_or_init(|| Regex::new(r"0x[0-9a-fA-F]+").expect("valid address pattern"))
}

/// Replaces any embedded memory-address-style substring with
/// [`SENTINEL_ADDRESS`].
///
/// Default representations of opaque values often embed a raw identity
/// address, which differs on every process run and would make snapshots
/// permanently unstable. Substituting a constant keeps the rest of the
/// representation's structure while restoring determinism.
///
/// # Examples
///
/// ```rust
/// use snapfmt::repr::scrub_identity;
///
/// let scrubbed = scrub_identity("<Widget object at 0x7f3a9c04e2d0>");
/// assert_eq!(scrubbed, "<Widget object at 0x100000000>");
/// ```
#[must_use]
pub fn scrub_identity(repr: &str) -> String {
    address_re().replace_all(repr, SENTINEL_ADDRESS).into_owned()
}

/// Quotes text as a single-line literal.
///
/// Prefers single quotes, switching to double quotes when the text contains a
/// single quote but no double quote. Line terminators and other control
/// characters are escaped so the output never spans multiple lines, which
/// avoids line-ending normalization mismatches when a stored snapshot is
/// re-read on another platform.
#[must_use]
pub fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Quotes a byte sequence as a `b'...'` literal.
///
/// Printable ASCII passes through; everything else is escaped as `\xhh`.
#[must_use]
pub fn quote_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };
    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push(quote as char);
    out
}

/// Formats a float in its native repr form.
///
/// Finite whole numbers keep a trailing `.0` so they never collide with
/// integer renderings in a stored snapshot.
#[must_use]
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if f == f.trunc() && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}

/// Formats a complex number in its native repr form: `2j` when the real part
/// is zero, `(1+2j)` / `(1-2j)` otherwise. Whole-number parts drop the
/// decimal point, matching the host repr of complex components.
#[must_use]
pub fn format_complex(re: f64, im: f64) -> String {
    if re == 0.0 {
        format!("{}j", complex_part(im))
    } else if im < 0.0 {
        format!("({}-{}j)", complex_part(re), complex_part(-im))
    } else {
        format!("({}+{}j)", complex_part(re), complex_part(im))
    }
}

fn complex_part(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        // Rust's Display already prints whole floats without a decimal point.
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_identity_replaces_address() {
        assert_eq!(
            scrub_identity("<Thing object at 0x7fa8b2c43d90>"),
            "<Thing object at 0x100000000>"
        );
    }

    #[test]
    fn test_scrub_identity_replaces_every_address() {
        let scrubbed = scrub_identity("<A at 0x1f00> wraps <B at 0x2e00>");
        assert_eq!(scrubbed, "<A at 0x100000000> wraps <B at 0x100000000>");
    }

    #[test]
    fn test_scrub_identity_leaves_plain_text() {
        assert_eq!(scrub_identity("Point { x: 1 }"), "Point { x: 1 }");
    }

    #[test]
    fn test_quote_str_plain() {
        assert_eq!(quote_str("hello"), "'hello'");
    }

    #[test]
    fn test_quote_str_escapes_newline() {
        assert_eq!(quote_str("a\nb"), "'a\\nb'");
    }

    #[test]
    fn test_quote_str_quote_preference() {
        assert_eq!(quote_str("it's"), "\"it's\"");
        assert_eq!(quote_str("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote_str("both ' and \""), "'both \\' and \"'");
    }

    #[test]
    fn test_quote_str_control_chars() {
        assert_eq!(quote_str("a\x00b"), "'a\\x00b'");
        assert_eq!(quote_str("tab\there"), "'tab\\there'");
    }

    #[test]
    fn test_quote_bytes() {
        assert_eq!(quote_bytes(b"abc"), "b'abc'");
        assert_eq!(quote_bytes(b"\x00\xff"), "b'\\x00\\xff'");
        assert_eq!(quote_bytes(b"it's"), "b\"it's\"");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(-2.0), "-2.0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn test_format_complex() {
        assert_eq!(format_complex(1.0, 2.0), "(1+2j)");
        assert_eq!(format_complex(0.0, 2.0), "2j");
        assert_eq!(format_complex(1.0, -2.0), "(1-2j)");
        assert_eq!(format_complex(1.5, 0.5), "(1.5+0.5j)");
        assert_eq!(format_complex(-1.0, 0.0), "(-1+0j)");
    }
}
