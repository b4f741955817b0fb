use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative luminance in `[0, 1]`.
pub type Luminance = f64;

/// Contrast ratio in `[1, 21]`.
pub type ContrastRatio = f64;

/// A color as the user typed it, e.g. `#2563eb`.
///
/// The string is kept verbatim and decoded on every use. Construction never fails;
/// malformed digits decode to 0 (see [`Rgb::parse_lenient`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::parse_lenient(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decodes `RRGGBB` with an optional leading `#`.
    ///
    /// Each channel is the 2-character slice at positions 0, 2 and 4. A slice is read
    /// as its longest leading run of hex digits (after any whitespace); a missing slice
    /// or one with no leading digit yields 0. So `#fff` decodes to `(255, 15, 0)`.
    pub fn parse_lenient(hex: &str) -> Self {
        let digits: Vec<char> = hex.strip_prefix('#').unwrap_or(hex).chars().collect();
        let channel = |start: usize| {
            let end = (start + 2).min(digits.len());
            digits.get(start..end).map(parse_hex_prefix).unwrap_or(0)
        };

        Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }
}

fn parse_hex_prefix(chars: &[char]) -> u8 {
    chars
        .iter()
        .skip_while(|c| c.is_whitespace())
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc * 16 + d) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    /// 18pt regular or 14pt bold and up.
    Large,
}

impl TextSize {
    pub fn from_large_flag(is_large_text: bool) -> Self {
        if is_large_text {
            TextSize::Large
        } else {
            TextSize::Normal
        }
    }

    pub fn is_large(self) -> bool {
        matches!(self, TextSize::Large)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextSize::Normal => f.write_str("normal"),
            TextSize::Large => f.write_str("large"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConformanceLevel {
    Aa,
    Aaa,
}

impl ConformanceLevel {
    pub fn minimum_ratio(self, text_size: TextSize) -> ContrastRatio {
        match (self, text_size) {
            (ConformanceLevel::Aa, TextSize::Normal) => 4.5,
            (ConformanceLevel::Aa, TextSize::Large) => 3.0,
            (ConformanceLevel::Aaa, TextSize::Normal) => 7.0,
            (ConformanceLevel::Aaa, TextSize::Large) => 4.5,
        }
    }
}

/// Every threshold outcome for one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastVerdict {
    pub ratio: ContrastRatio,
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

impl ContrastVerdict {
    pub fn passes(&self, level: ConformanceLevel, text_size: TextSize) -> bool {
        match (level, text_size) {
            (ConformanceLevel::Aa, TextSize::Normal) => self.aa,
            (ConformanceLevel::Aa, TextSize::Large) => self.aa_large,
            (ConformanceLevel::Aaa, TextSize::Normal) => self.aaa,
            (ConformanceLevel::Aaa, TextSize::Large) => self.aaa_large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairReport {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub text_size: TextSize,
    pub ratio: ContrastRatio,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub palette: String,
    pub generated_at: DateTime<Utc>,
    pub pairs: Vec<PairReport>,
    pub passed: usize,
    pub failed: usize,
}

impl AuditReport {
    pub fn all_pass(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &PairReport> {
        self.pairs.iter().filter(|p| !p.passes_aa)
    }
}
