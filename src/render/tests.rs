//! Presentation tests. Output is fed back through a VTE parser so the
//! assertions are about SGR parameters, not escape-string spelling.

use vte::ansi::Rgb;

use super::{Label, Layer, OutputStyle, indexed_rgb, nearest_indexed, render};
use crate::resolve::{ColorQuery, Resolution, resolve};

/// Collects printed text and every SGR parameter list.
#[derive(Default)]
struct SgrCapture {
    text: String,
    sgr: Vec<Vec<u16>>,
}

impl vte::Perform for SgrCapture {
    fn print(&mut self, c: char) {
        self.text.push(c);
    }

    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        _intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        if action == 'm' {
            self.sgr
                .push(params.iter().flat_map(|p| p.iter().copied()).collect());
        }
    }
}

fn parse(output: &str) -> SgrCapture {
    let mut capture = SgrCapture::default();
    let mut parser = vte::Parser::new();
    parser.advance(&mut capture, output.as_bytes());
    capture
}

fn resolved(input: &str) -> Resolution {
    resolve(ColorQuery::new(input, None).expect("query")).expect("resolves")
}

fn style(layer: Layer, label: Label) -> OutputStyle {
    OutputStyle { layer, label }
}

fn fg() -> OutputStyle {
    style(Layer::Foreground, Label::Normalized)
}

#[test]
fn default_style_paints_a_swatch() {
    let out = render(&resolved("red"), &OutputStyle::default());
    let cap = parse(&out);
    assert_eq!(cap.text, "red");
    assert_eq!(cap.sgr, vec![vec![38, 2, 0, 0, 0, 48, 2, 255, 0, 0], vec![0]]);
}

#[test]
fn x11_renders_truecolor_foreground() {
    let out = render(&resolved("red"), &fg());
    let cap = parse(&out);
    assert_eq!(cap.text, "red");
    assert_eq!(cap.sgr, vec![vec![38, 2, 255, 0, 0], vec![0]]);
}

#[test]
fn rgb_triple_renders_truecolor() {
    let cap = parse(&render(&resolved("12,34,56"), &fg()));
    assert_eq!(cap.sgr[0], vec![38, 2, 12, 34, 56]);
    assert_eq!(cap.text, "12,34,56");
}

#[test]
fn hex_renders_indexed() {
    let cap = parse(&render(&resolved("#FF0000"), &fg()));
    assert_eq!(cap.text, "#ff0000");
    assert_eq!(cap.sgr, vec![vec![38, 5, 196], vec![0]]);
}

#[test]
fn hex_default_style_is_indexed_swatch() {
    let cap = parse(&render(&resolved("#FF0000"), &OutputStyle::default()));
    assert_eq!(cap.sgr[0], vec![38, 5, 16, 48, 5, 196]);
}

#[test]
fn background_on_light_color_uses_black_label() {
    let out = render(&resolved("white"), &style(Layer::Background, Label::Normalized));
    let cap = parse(&out);
    assert_eq!(cap.sgr[0], vec![38, 2, 0, 0, 0, 48, 2, 255, 255, 255]);
}

#[test]
fn background_on_dark_color_uses_white_label() {
    let out = render(&resolved("navy"), &style(Layer::Background, Label::Normalized));
    let cap = parse(&out);
    assert_eq!(cap.sgr[0], vec![38, 2, 255, 255, 255, 48, 2, 0, 0, 128]);
}

#[test]
fn indexed_background_stays_in_indexed_family() {
    let out = render(&resolved("000"), &style(Layer::Background, Label::Normalized));
    let cap = parse(&out);
    assert_eq!(cap.sgr[0], vec![38, 5, 231, 48, 5, 16]);
}

#[test]
fn input_label_keeps_original_spelling() {
    let out = render(
        &resolved("Dark Slate Gray"),
        &style(Layer::Foreground, Label::Input),
    );
    let cap = parse(&out);
    assert_eq!(cap.text, "Dark Slate Gray");
    assert_eq!(cap.sgr[0], vec![38, 2, 47, 79, 79]);
}

#[test]
fn output_ends_with_reset() {
    let out = render(&resolved("gold"), &OutputStyle::default());
    assert!(out.ends_with("\x1b[0m"));
    assert!(!out.ends_with('\n'));
}

#[test]
fn indexed_rgb_matches_xterm_formulas() {
    assert_eq!(indexed_rgb(16), Rgb { r: 0, g: 0, b: 0 });
    assert_eq!(indexed_rgb(196), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(indexed_rgb(110), Rgb { r: 135, g: 175, b: 215 });
    assert_eq!(indexed_rgb(231), Rgb { r: 255, g: 255, b: 255 });
    assert_eq!(indexed_rgb(232), Rgb { r: 8, g: 8, b: 8 });
    assert_eq!(indexed_rgb(255), Rgb { r: 238, g: 238, b: 238 });
}

#[test]
fn nearest_indexed_exact_hits() {
    for idx in 16..=255u8 {
        assert_eq!(nearest_indexed(indexed_rgb(idx)), idx, "index {idx}");
    }
}

#[test]
fn nearest_indexed_approximations() {
    assert_eq!(nearest_indexed(Rgb { r: 128, g: 128, b: 128 }), 244);
    assert_eq!(nearest_indexed(Rgb { r: 30, g: 144, b: 255 }), 33);
    assert_eq!(nearest_indexed(Rgb { r: 250, g: 2, b: 3 }), 196);
}

#[test]
fn nearest_indexed_skips_theme_colors() {
    for (_, rgb) in crate::x11::entries() {
        assert!(nearest_indexed(rgb) >= 16);
    }
}
