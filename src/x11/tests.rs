//! Tests for the X11 palette.

use std::collections::HashSet;

use vte::ansi::Rgb;

use super::{entries, len, lookup, names_for};
use crate::normalize::normalize;

fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

#[test]
fn base_colors() {
    assert_eq!(lookup("red"), Some(rgb(255, 0, 0)));
    assert_eq!(lookup("black"), Some(rgb(0, 0, 0)));
    assert_eq!(lookup("white"), Some(rgb(255, 255, 255)));
    assert_eq!(lookup("lightgoldenrodyellow"), Some(rgb(250, 250, 210)));
    assert_eq!(lookup("darkslategray"), Some(rgb(47, 79, 79)));
}

#[test]
fn x11_and_web_disambiguation() {
    assert_eq!(lookup("gray"), Some(rgb(190, 190, 190)));
    assert_eq!(lookup("x11gray"), Some(rgb(190, 190, 190)));
    assert_eq!(lookup("webgray"), Some(rgb(128, 128, 128)));
    assert_eq!(lookup("maroon"), Some(rgb(176, 48, 96)));
    assert_eq!(lookup("webmaroon"), Some(rgb(128, 0, 0)));
    assert_eq!(lookup("green"), Some(rgb(0, 255, 0)));
    assert_eq!(lookup("webgreen"), Some(rgb(0, 128, 0)));
    assert_eq!(lookup("purple"), Some(rgb(160, 32, 240)));
    assert_eq!(lookup("webpurple"), Some(rgb(128, 0, 128)));
}

#[test]
fn british_and_american_spellings_agree() {
    for (name, color) in entries() {
        if name.contains("gray") {
            // rgb.txt has no "grey" spelling for the numbered slate-gray tones.
            if let Some(other) = lookup(&name.replace("gray", "grey")) {
                assert_eq!(other, color, "{name} spellings differ");
            }
        }
    }
    assert_eq!(lookup("grey"), lookup("gray"));
    assert_eq!(lookup("dimgrey"), lookup("dimgray"));
    assert_eq!(lookup("lightslategrey"), lookup("lightslategray"));
    assert_eq!(lookup("grey42"), lookup("gray42"));
    assert_eq!(lookup("slategrey1"), None);
}

#[test]
fn web_aliases() {
    assert_eq!(lookup("navy"), Some(rgb(0, 0, 128)));
    assert_eq!(lookup("navyblue"), lookup("navy"));
    assert_eq!(lookup("aqua"), lookup("cyan"));
    assert_eq!(lookup("fuchsia"), lookup("magenta"));
    assert_eq!(lookup("lime"), lookup("green"));
}

#[test]
fn tonal_series() {
    assert_eq!(lookup("red1"), Some(rgb(255, 0, 0)));
    assert_eq!(lookup("red2"), Some(rgb(238, 0, 0)));
    assert_eq!(lookup("red3"), Some(rgb(205, 0, 0)));
    assert_eq!(lookup("red4"), Some(rgb(139, 0, 0)));
    assert_eq!(lookup("red5"), None);
    assert_eq!(lookup("red0"), None);
}

#[test]
fn gray_ramp_is_complete() {
    for i in 0..=100 {
        assert!(lookup(&format!("gray{i}")).is_some(), "gray{i} missing");
        assert!(lookup(&format!("grey{i}")).is_some(), "grey{i} missing");
    }
    assert_eq!(lookup("gray0"), Some(rgb(0, 0, 0)));
    assert_eq!(lookup("gray50"), Some(rgb(127, 127, 127)));
    assert_eq!(lookup("gray100"), Some(rgb(255, 255, 255)));
    assert_eq!(lookup("gray101"), None);
}

#[test]
fn gray_ramp_is_monotonic() {
    let mut prev = 0u8;
    for i in 0..=100 {
        let c = lookup(&format!("gray{i}")).unwrap();
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert!(c.r >= prev, "gray{i} darker than gray{}", i - 1);
        prev = c.r;
    }
}

#[test]
fn keys_are_normalized_and_unique() {
    let mut seen = HashSet::new();
    for (name, _) in entries() {
        assert_eq!(normalize(name), name, "key {name:?} is not normalized");
        assert!(seen.insert(name), "duplicate key {name:?}");
    }
    assert_eq!(seen.len(), len());
}

#[test]
fn exact_match_only() {
    assert_eq!(lookup("Red"), None);
    assert_eq!(lookup("dark slate gray"), None);
    assert_eq!(lookup("re"), None);
    assert_eq!(lookup("redd"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn alias_groups() {
    let names = names_for(rgb(0, 0, 128));
    assert!(names.contains(&"navy"));
    assert!(names.contains(&"navyblue"));
    assert!(names_for(rgb(1, 2, 3)).is_empty());
}
