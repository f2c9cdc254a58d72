//! Color format detectors.
//!
//! Each detector takes a normalized name (see [`crate::normalize`]) and either
//! returns the color it encodes or `None`. Detectors never panic on input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use vte::ansi::Rgb;

use crate::error::ResolveError;
use crate::normalize::normalize;
use crate::x11;

/// How a resolved color should be emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Full 24-bit `38;2;r;g;b` escapes.
    Rgb,
    /// xterm-256 indexed `38;5;n` escapes.
    Indexed,
}

impl OutputMode {
    /// Short tag: `"rgb"` or `"256"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Indexed => "256",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An implemented input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    X11,
}

/// Detector order for auto mode. The first detector to succeed wins.
pub const AUTO_ORDER: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::X11];

/// A successful detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub rgb: Rgb,
    pub mode: OutputMode,
    pub format: ColorFormat,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::X11 => "x11",
        }
    }

    /// Hex input renders through the indexed path, everything else as truecolor.
    pub fn output_mode(self) -> OutputMode {
        match self {
            Self::Hex => OutputMode::Indexed,
            Self::Rgb | Self::X11 => OutputMode::Rgb,
        }
    }

    /// Run this format's detector against a normalized name.
    pub fn detect(self, name: &str) -> Option<Detection> {
        let rgb = match self {
            Self::Hex => detect_hex(name),
            Self::Rgb => detect_rgb(name),
            Self::X11 => detect_x11(name),
        }?;
        Some(Detection {
            rgb,
            mode: self.output_mode(),
            format: self,
        })
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `RRGGBB` or `RGB`, optionally prefixed with `#` or `0x`.
///
/// Expects normalized (lower-case) input, but hex digits of either case are
/// accepted.
pub fn detect_hex(s: &str) -> Option<Rgb> {
    let hex = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    let digits = hex
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()?;
    match digits[..] {
        [r1, r0, g1, g0, b1, b0] => Some(Rgb {
            r: (r1 << 4) | r0,
            g: (g1 << 4) | g0,
            b: (b1 << 4) | b0,
        }),
        [r, g, b] => Some(Rgb {
            r: r * 17,
            g: g * 17,
            b: b * 17,
        }),
        _ => None,
    }
}

fn nibble(b: u8) -> Option<u8> {
    char::from(b).to_digit(16).map(|d| d as u8)
}

static RGB_TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+),([0-9]+),([0-9]+)$").expect("RGB triple regex is valid")
});

/// Parse a decimal `r,g,b` triple, optionally wrapped as `rgb(r,g,b)`.
///
/// Components above 255 are rejected rather than wrapped.
pub fn detect_rgb(s: &str) -> Option<Rgb> {
    let inner = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(s);
    let caps = RGB_TRIPLE_RE.captures(inner)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Look the name up in the X11 palette.
pub fn detect_x11(s: &str) -> Option<Rgb> {
    x11::lookup(s)
}

/// Explicit `--type` value.
///
/// `Web`, `Hsv`, `Hsl` and `Lab` are recognized but have no detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHint {
    X11,
    Hex,
    Rgb,
    Web,
    Hsv,
    Hsl,
    Lab,
}

impl FormatHint {
    pub const ALL: [Self; 7] = [
        Self::X11,
        Self::Hex,
        Self::Rgb,
        Self::Web,
        Self::Hsv,
        Self::Hsl,
        Self::Lab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X11 => "x11",
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Web => "web",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
            Self::Lab => "lab",
        }
    }

    /// Human-facing name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::X11 => "X11",
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Web => "Web",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
            Self::Lab => "LAB",
        }
    }

    /// The detector behind this hint, or `None` if the format is not implemented.
    pub fn format(self) -> Option<ColorFormat> {
        match self {
            Self::X11 => Some(ColorFormat::X11),
            Self::Hex => Some(ColorFormat::Hex),
            Self::Rgb => Some(ColorFormat::Rgb),
            Self::Web | Self::Hsv | Self::Hsl | Self::Lab => None,
        }
    }
}

impl FromStr for FormatHint {
    type Err = ResolveError;

    /// Case and whitespace are ignored, like color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|hint| hint.as_str() == key)
            .ok_or_else(|| ResolveError::UnknownType(s.to_owned()))
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
