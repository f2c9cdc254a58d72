//! ANSI presentation of resolved colors.
//!
//! Truecolor output uses `38;2`/`48;2` SGR parameters. Indexed output maps
//! the color onto the xterm-256 palette and uses `38;5`/`48;5`.

use serde::{Deserialize, Serialize};
use vte::ansi::Rgb;

use crate::detect::OutputMode;
use crate::resolve::Resolution;

/// First index of the 6x6x6 color cube.
const CUBE_START: u8 = 16;
/// First index of the 24-step grayscale ramp.
const GRAY_START: u8 = 232;

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Which side of the cell carries the color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Colored text on the terminal's own background.
    Foreground,
    /// Colored swatch with a black or white label on top.
    #[default]
    Background,
}

/// What text is printed in the color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Lower-case, whitespace-free name.
    #[default]
    Normalized,
    /// The input exactly as given.
    Input,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputStyle {
    pub layer: Layer,
    pub label: Label,
}

/// Render one colored line (no trailing newline).
pub fn render(resolution: &Resolution, style: &OutputStyle) -> String {
    let text = match style.label {
        Label::Normalized => &resolution.name,
        Label::Input => &resolution.input,
    };
    let color = sgr_color(resolution.rgb, resolution.mode, style.layer);
    let sgr = match style.layer {
        Layer::Foreground => color,
        Layer::Background => {
            let fg = sgr_color(contrast_label(resolution.rgb), resolution.mode, Layer::Foreground);
            format!("{fg};{color}")
        }
    };
    format!("\x1b[{sgr}m{text}\x1b[0m")
}

/// SGR parameters selecting `rgb` for `layer`, in the escape family of `mode`.
pub fn sgr_color(rgb: Rgb, mode: OutputMode, layer: Layer) -> String {
    let base = match layer {
        Layer::Foreground => 38,
        Layer::Background => 48,
    };
    match mode {
        OutputMode::Rgb => format!("{base};2;{};{};{}", rgb.r, rgb.g, rgb.b),
        OutputMode::Indexed => format!("{base};5;{}", nearest_indexed(rgb)),
    }
}

/// Closest xterm-256 index by squared RGB distance.
///
/// Only the cube (16–231) and grayscale ramp (232–255) are candidates; the
/// first 16 entries vary with the terminal theme. Ties go to the lower index.
pub fn nearest_indexed(rgb: Rgb) -> u8 {
    (CUBE_START..=u8::MAX)
        .min_by_key(|&idx| distance(rgb, indexed_rgb(idx)))
        .unwrap_or(CUBE_START)
}

/// Color of an xterm-256 index at or above 16.
pub fn indexed_rgb(idx: u8) -> Rgb {
    if idx >= GRAY_START {
        let v = 8 + (idx - GRAY_START) * 10;
        return Rgb { r: v, g: v, b: v };
    }
    let i = idx.saturating_sub(CUBE_START);
    let level = |c: u8| if c == 0 { 0 } else { 55 + c * 40 };
    Rgb {
        r: level(i / 36),
        g: level(i / 6 % 6),
        b: level(i % 6),
    }
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
}

/// Black on light colors, white on dark ones.
fn contrast_label(bg: Rgb) -> Rgb {
    if relative_luminance(bg) > 0.179 { BLACK } else { WHITE }
}

/// WCAG relative luminance of an sRGB color.
fn relative_luminance(c: Rgb) -> f32 {
    let lin = |v: u8| srgb_to_linear(f32::from(v) / 255.0);
    0.2126 * lin(c.r) + 0.7152 * lin(c.g) + 0.0722 * lin(c.b)
}

/// Convert an sRGB component (0.0-1.0) to linear light.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests;
