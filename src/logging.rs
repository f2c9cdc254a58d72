//! Log output on stderr.
//!
//! Library code logs through the `log` facade; `init` installs a
//! `tracing-subscriber` formatter, which also picks up `log` records. The
//! filter comes from `-v` flags unless `COLORVIEW_LOG` holds directives.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "COLORVIEW_LOG";

/// Map a `-v` count to a level: none is `warn`, then `info`, `debug`, `trace`.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter from `COLORVIEW_LOG` directives when they parse, else from `verbose`.
pub fn filter(env_value: Option<&str>, verbose: u8) -> EnvFilter {
    env_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| {
            EnvFilter::default().add_directive(level_for_verbosity(verbose).into())
        })
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let env_value = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(env_value.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
