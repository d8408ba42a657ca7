use std::fmt::{self, Display, Formatter};

use atoi::FromRadix10Checked;

/// The port component of a parsed DSN.
///
/// The grammar never rejects a connection string, so a port segment that is
/// not a number still has to be represented. Keeping the raw text distinct
/// from "no port at all" lets a caller reject `host:junk` without mistaking
/// it for `host`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Port {
    /// A base-10 port number.
    Number(u16),
    /// A port segment that held no number, kept verbatim.
    Invalid(String),
}

impl Port {
    /// Converts a raw port segment, taking leading base-10 digits and
    /// ignoring anything after them. A segment with no leading digit, or
    /// whose digits overflow `u16`, becomes the `Invalid` sentinel.
    pub(crate) fn from_segment(raw: &str) -> Self {
        match u16::from_radix_10_checked(raw.as_bytes()) {
            (Some(n), used) if used > 0 => Port::Number(n),
            _ => Port::Invalid(raw.to_owned()),
        }
    }

    /// Returns the parsed number, or `None` for the invalid sentinel.
    pub fn as_number(&self) -> Option<u16> {
        match self {
            Port::Number(n) => Some(*n),
            Port::Invalid(_) => None,
        }
    }

    /// Whether this is the not-a-number sentinel.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Port::Invalid(_))
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Port::Number(n) => Display::fmt(n, f),
            Port::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[test]
fn it_converts_leading_digits() {
    assert_eq!(Port::Number(5432), Port::from_segment("5432"));
    assert_eq!(Port::Number(5432), Port::from_segment("5432x"));
}

#[test]
fn it_preserves_text_without_a_leading_digit() {
    assert_eq!(Port::Invalid("notaport".to_owned()), Port::from_segment("notaport"));
    assert_eq!(Port::Invalid(String::new()), Port::from_segment(""));
}

#[test]
fn it_treats_an_oversized_number_as_invalid() {
    assert_eq!(Port::Invalid("70000".to_owned()), Port::from_segment("70000"));
}

#[test]
fn as_number_is_none_for_the_sentinel() {
    assert_eq!(Some(80), Port::Number(80).as_number());
    assert_eq!(None, Port::from_segment("x").as_number());
    assert!(Port::from_segment("x").is_invalid());
}
