//! Color name normalization.

/// Lower-case `s` (ASCII) and drop every whitespace character.
///
/// `"Dark Slate Gray"`, `"darkslategray"` and `"DARK SLATE   GRAY"` all map
/// to `"darkslategray"`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
