//! Resolve color names and encoded values to RGB and preview them with ANSI
//! escapes.
//!
//! Input goes through [`normalize`], then either one explicitly requested
//! detector or the auto-detection chain (hex, decimal RGB, X11 name). The
//! result is rendered as truecolor or xterm-256 escapes depending on which
//! detector matched.

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod render;
pub mod resolve;
pub mod x11;

pub use detect::{ColorFormat, FormatHint, OutputMode};
pub use error::ResolveError;
pub use normalize::normalize;
pub use resolve::{ColorQuery, Resolution, resolve};
pub use vte::ansi::Rgb;
