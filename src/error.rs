//! Resolution errors and their process exit codes.

use thiserror::Error;

use crate::detect::{ColorFormat, FormatHint};

/// Exit status for an unknown `--type` or an undetectable color.
pub const EXIT_UNKNOWN_TYPE: u8 = 1;
/// Exit status for a missing or invalid color value.
pub const EXIT_INVALID_COLOR: u8 = 2;
/// Exit status for a recognized but unimplemented format.
pub const EXIT_NOT_IMPLEMENTED: u8 = 99;

/// Why a color could not be resolved. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Color name is required")]
    MissingInput,
    #[error("Unknown color type: {0}")]
    UnknownType(String),
    #[error("Could not detect colortype: {0}")]
    Undetected(String),
    #[error("{} color not implemented", .0.label())]
    NotImplemented(FormatHint),
    #[error("Invalid {format} color: {input}")]
    InvalidColor { format: ColorFormat, input: String },
}

impl ResolveError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownType(_) | Self::Undetected(_) => EXIT_UNKNOWN_TYPE,
            Self::MissingInput | Self::InvalidColor { .. } => EXIT_INVALID_COLOR,
            Self::NotImplemented(_) => EXIT_NOT_IMPLEMENTED,
        }
    }
}
