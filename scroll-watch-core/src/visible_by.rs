//! The extra depth an element has to reach into the viewport before it qualifies.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// How far past an element's top edge the bottom of the viewport has to be.
///
/// Strings follow the usual option conventions: anything containing a `%` is a percentage of the
/// viewport height, everything else is a pixel count. Both take the leading integer of the string,
/// so `"40px"` is 40 pixels and `"12.5%"` is 12 percent.
///
/// A value without a leading integer is kept as [`VisibleBy::Unparsable`]. It resolves to no depth
/// at all and elements never qualify against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Raw", from = "Raw"))]
pub enum VisibleBy {
    Pixels(i64),
    Percent(i64),
    Unparsable(SmolStr),
}

impl VisibleBy {
    /// The depth in pixels for a viewport of the given height.
    ///
    /// `None` means the value could not be parsed.
    pub fn depth(&self, window_height: f64) -> Option<f64> {
        match *self {
            VisibleBy::Pixels(pixels) => Some(pixels as f64),
            VisibleBy::Percent(percent) => Some(window_height * (percent as f64 / 100.0)),
            VisibleBy::Unparsable(_) => None,
        }
    }
}

impl Default for VisibleBy {
    fn default() -> Self {
        VisibleBy::Pixels(0)
    }
}

impl From<i32> for VisibleBy {
    fn from(pixels: i32) -> Self {
        VisibleBy::Pixels(pixels.into())
    }
}

impl From<u32> for VisibleBy {
    fn from(pixels: u32) -> Self {
        VisibleBy::Pixels(pixels.into())
    }
}

impl From<i64> for VisibleBy {
    fn from(pixels: i64) -> Self {
        VisibleBy::Pixels(pixels)
    }
}

impl From<f64> for VisibleBy {
    /// Takes the leading integer of the number as JavaScript prints it.
    ///
    /// That is the value truncated toward zero, except for magnitudes below `1e-6` or from `1e21`
    /// up. Those print in exponent form, so only the first digit of the mantissa counts and
    /// `1e21` becomes `1`. Non-finite values are unparsable.
    fn from(pixels: f64) -> Self {
        if !pixels.is_finite() {
            return VisibleBy::Unparsable(SmolStr::new(pixels.to_string()));
        }

        let magnitude = pixels.abs();
        if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
            format!("{pixels:e}").as_str().into()
        } else {
            VisibleBy::Pixels(pixels.trunc() as i64)
        }
    }
}

impl From<&str> for VisibleBy {
    fn from(value: &str) -> Self {
        let parsed = leading_integer(value);
        match parsed {
            Some(n) if value.contains('%') => VisibleBy::Percent(n),
            Some(n) => VisibleBy::Pixels(n),
            None => VisibleBy::Unparsable(SmolStr::new(value)),
        }
    }
}

impl FromStr for VisibleBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for VisibleBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibleBy::Pixels(pixels) => write!(f, "{pixels}"),
            VisibleBy::Percent(percent) => write!(f, "{percent}%"),
            VisibleBy::Unparsable(raw) => f.write_str(raw),
        }
    }
}

/// Integer prefix of `s`: whitespace, an optional sign, then hex (`0x`) or decimal digits.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = i64::from_str_radix(&s[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<Raw> for VisibleBy {
    fn from(raw: Raw) -> Self {
        match raw {
            Raw::Number(n) => n.into(),
            Raw::Text(s) => s.as_str().into(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<VisibleBy> for Raw {
    fn from(value: VisibleBy) -> Self {
        match value {
            VisibleBy::Pixels(pixels) => Raw::Number(pixels as f64),
            other => Raw::Text(other.to_string()),
        }
    }
}
