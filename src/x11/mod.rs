//! X11 named-color palette.
//!
//! An immutable map from normalized color name to RGB, built once on first
//! access and shared read-only afterwards.

mod table;

pub use table::{X11_COLOR_COUNT, X11_COLORS};

use std::collections::HashMap;
use std::sync::LazyLock;

use vte::ansi::Rgb;

static X11_INDEX: LazyLock<HashMap<&'static str, Rgb>> =
    LazyLock::new(|| X11_COLORS.iter().copied().collect());

/// Look up an already-normalized X11 color name. Exact match only.
pub fn lookup(name: &str) -> Option<Rgb> {
    X11_INDEX.get(name).copied()
}

/// All palette entries in `rgb.txt` order.
pub fn entries() -> impl Iterator<Item = (&'static str, Rgb)> {
    X11_COLORS.iter().copied()
}

/// Number of named colors.
pub fn len() -> usize {
    X11_COLOR_COUNT
}

/// Every name that maps to `rgb`, in table order.
pub fn names_for(rgb: Rgb) -> Vec<&'static str> {
    entries()
        .filter(|&(_, c)| c == rgb)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests;
