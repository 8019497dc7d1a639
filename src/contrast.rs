//! WCAG contrast evaluation
//!
//! Relative luminance and contrast ratio per
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>. Pure, no I/O.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Normal text, level AA
pub const AA_NORMAL: f64 = 4.5;
/// Large text (18pt+ or 14pt bold), level AA
pub const AA_LARGE: f64 = 3.0;
/// Normal text, level AAA
pub const AAA_NORMAL: f64 = 7.0;

static HEX_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").ok());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContrastError {
    #[error("Invalid color: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColor(String),
}

/// A validated sRGB color written as `#RGB` or `#RRGGBB`.
///
/// Stored expanded; `Display` always renders uppercase `#RRGGBB`, so two
/// spellings of the same color compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: HexColor = HexColor::rgb(0x00, 0x00, 0x00);
    /// Off-white used as the "light background" reference
    pub const LIGHT_GRAY: HexColor = HexColor::rgb(0xF8, 0xF9, 0xFA);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` / `#RRGGBB` (case-insensitive). Surrounding whitespace is
    /// ignored; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, ContrastError> {
        let trimmed = input.trim();
        if !HEX_PATTERN.as_ref().is_some_and(|re| re.is_match(trimmed)) {
            return Err(ContrastError::InvalidColor(input.to_string()));
        }

        let digits: Vec<u8> = trimmed
            .chars()
            .skip(1)
            .filter_map(|c| c.to_digit(16))
            .filter_map(|d| u8::try_from(d).ok())
            .collect();

        let channels = match digits.as_slice() {
            [r, g, b] => [r * 17, g * 17, b * 17],
            [r1, r2, g1, g2, b1, b2] => [r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2],
            _ => return Err(ContrastError::InvalidColor(input.to_string())),
        };

        Ok(Self::rgb(channels[0], channels[1], channels[2]))
    }

    /// Relative luminance in `[0, 1]`
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn linearize(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, in `[1, 21]`. Order does not matter.
pub fn contrast_ratio(a: HexColor, b: HexColor) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast of one foreground against one background
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    pub background: HexColor,
    pub ratio: f64,
    #[serde(rename = "meetsAA")]
    pub meets_aa: bool,
    #[serde(rename = "meetsAALarge")]
    pub meets_aa_large: bool,
    #[serde(rename = "meetsAAA")]
    pub meets_aaa: bool,
}

impl ContrastReport {
    fn new(foreground: HexColor, background: HexColor) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            background,
            ratio,
            meets_aa: ratio >= AA_NORMAL,
            meets_aa_large: ratio >= AA_LARGE,
            meets_aaa: ratio >= AAA_NORMAL,
        }
    }
}

/// Evaluate `foreground` against each background, preserving order.
pub fn evaluate(foreground: HexColor, backgrounds: &[HexColor]) -> Vec<ContrastReport> {
    backgrounds
        .iter()
        .map(|&background| ContrastReport::new(foreground, background))
        .collect()
}
