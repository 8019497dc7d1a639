//! Font-size token classification for free-text input

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Root font size used to convert `rem`/`em` to pixels
const ROOT_PX: f64 = 16.0;

/// `<number><unit>` with no space between. The number must start at an
/// ASCII word boundary so `1e5px` is not read as `5px`; Korean text may
/// directly precede it.
static SIZE_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(\d+(?:\.\d+)?)(px|rem|em)").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Px,
    Rem,
    Em,
}

impl SizeUnit {
    fn as_str(self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Rem => "rem",
            SizeUnit::Em => "em",
        }
    }
}

/// A size like `16px` or `1.25rem` found somewhere in the message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeToken {
    pub value: f64,
    pub unit: SizeUnit,
}

impl SizeToken {
    /// First size token in `input`, if any
    pub fn find(input: &str) -> Option<SizeToken> {
        let captures = SIZE_TOKEN.as_ref()?.captures(input)?;
        let value: f64 = captures.get(1)?.as_str().parse().ok()?;
        let unit = match captures.get(2)?.as_str() {
            "px" => SizeUnit::Px,
            "rem" => SizeUnit::Rem,
            _ => SizeUnit::Em,
        };
        Some(SizeToken { value, unit })
    }

    pub fn px(self) -> f64 {
        match self.unit {
            SizeUnit::Px => self.value,
            SizeUnit::Rem | SizeUnit::Em => self.value * ROOT_PX,
        }
    }

    pub fn verdict(self) -> SizeVerdict {
        let px = self.px();
        if px < 14.0 {
            SizeVerdict::TooSmall
        } else if px < 16.0 {
            SizeVerdict::Borderline
        } else if px <= 18.0 {
            SizeVerdict::Body
        } else if px <= 32.0 {
            SizeVerdict::Heading
        } else {
            SizeVerdict::Display
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    /// Under 14px
    TooSmall,
    /// 14px up to 16px
    Borderline,
    /// 16–18px
    Body,
    /// Over 18px up to 32px
    Heading,
    /// Over 32px
    Display,
}
