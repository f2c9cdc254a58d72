//! Resolution driver.
//!
//! A [`ColorQuery`] either names a format explicitly, in which case exactly
//! one detector runs, or leaves it open and the detectors in [`AUTO_ORDER`]
//! are tried until one matches.

use log::{debug, trace};
use vte::ansi::Rgb;

use crate::detect::{AUTO_ORDER, ColorFormat, Detection, FormatHint, OutputMode};
use crate::error::ResolveError;
use crate::normalize::normalize;

/// Raw user input plus an optional format hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorQuery {
    input: String,
    normalized: String,
    hint: Option<FormatHint>,
}

impl ColorQuery {
    /// Build a query from CLI strings.
    ///
    /// Input that is empty after normalization is [`ResolveError::MissingInput`].
    /// A hint that normalizes to the empty string means auto mode; any other
    /// unrecognized hint is [`ResolveError::UnknownType`].
    pub fn new(input: &str, hint: Option<&str>) -> Result<Self, ResolveError> {
        let normalized = normalized_input(input)?;
        let hint = match hint.map(normalize) {
            Some(h) if !h.is_empty() => Some(h.parse::<FormatHint>()?),
            _ => None,
        };
        Ok(Self {
            input: input.to_owned(),
            normalized,
            hint,
        })
    }

    pub fn with_hint(input: &str, hint: Option<FormatHint>) -> Result<Self, ResolveError> {
        Ok(Self {
            input: input.to_owned(),
            normalized: normalized_input(input)?,
            hint,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn hint(&self) -> Option<FormatHint> {
        self.hint
    }
}

fn normalized_input(input: &str) -> Result<String, ResolveError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(ResolveError::MissingInput);
    }
    Ok(normalized)
}

/// A resolved color ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub rgb: Rgb,
    pub mode: OutputMode,
    pub format: ColorFormat,
    /// Normalized name.
    pub name: String,
    /// Input as the user typed it.
    pub input: String,
}

impl Resolution {
    fn new(query: ColorQuery, detection: Detection) -> Self {
        Self {
            rgb: detection.rgb,
            mode: detection.mode,
            format: detection.format,
            name: query.normalized,
            input: query.input,
        }
    }
}

/// Resolve a query into a color.
pub fn resolve(query: ColorQuery) -> Result<Resolution, ResolveError> {
    let detection = match query.hint {
        Some(hint) => resolve_explicit(&query, hint)?,
        None => resolve_auto(&query)?,
    };
    debug!(
        "resolved {:?} as {} -> ({}, {}, {}) via {} output",
        query.input,
        detection.format,
        detection.rgb.r,
        detection.rgb.g,
        detection.rgb.b,
        detection.mode,
    );
    Ok(Resolution::new(query, detection))
}

fn resolve_explicit(query: &ColorQuery, hint: FormatHint) -> Result<Detection, ResolveError> {
    let format = hint.format().ok_or(ResolveError::NotImplemented(hint))?;
    trace!("explicit {format} detector for {:?}", query.normalized);
    format
        .detect(&query.normalized)
        .ok_or_else(|| ResolveError::InvalidColor {
            format,
            input: query.input.clone(),
        })
}

fn resolve_auto(query: &ColorQuery) -> Result<Detection, ResolveError> {
    AUTO_ORDER
        .into_iter()
        .find_map(|format| {
            let hit = format.detect(&query.normalized);
            trace!(
                "{format} detector {} {:?}",
                if hit.is_some() { "matched" } else { "rejected" },
                query.normalized,
            );
            hit
        })
        .ok_or_else(|| ResolveError::Undetected(query.input.clone()))
}
