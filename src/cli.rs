//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, OutputConfig};
use crate::error::ResolveError;
use crate::render::{Layer, OutputStyle, render};
use crate::resolve::{ColorQuery, resolve};

#[derive(Parser, Debug)]
#[command(
    name = "colorview",
    version,
    about = "Preview a color name, hex code or RGB triple in the terminal"
)]
pub struct Cli {
    /// Color to show: an X11 name ("dark slate gray"), hex ("#ff8800") or
    /// RGB triple ("255,128,0"). Several words are joined.
    #[arg(value_name = "COLOR")]
    pub color: Vec<String>,
    /// Color type: x11, hex or rgb (web, hsv, hsl and lab are reserved).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub color_type: Option<String>,
    /// Paint the color as a background swatch (the default; overrides the
    /// config file).
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "fg")]
    pub bg: bool,
    /// Paint the color as text instead of a swatch.
    #[arg(long, action = ArgAction::SetTrue)]
    pub fg: bool,
    /// Config file to use instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Print the default configuration to stdout and exit.
    #[arg(long, action = ArgAction::SetTrue)]
    pub print_config: bool,
    /// More log output on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Positional words joined with single spaces.
    pub fn color_input(&self) -> String {
        self.color.join(" ")
    }

    /// Config output style with `--bg`/`--fg` applied on top.
    pub fn style(&self, output: &OutputConfig) -> OutputStyle {
        let mut style = output.style();
        if self.bg {
            style.layer = Layer::Background;
        } else if self.fg {
            style.layer = Layer::Foreground;
        }
        style
    }
}

/// Resolve the requested color and render it. `--type` wins over the
/// configured default type.
pub fn run(cli: &Cli, config: &Config) -> Result<String, ResolveError> {
    let hint = cli
        .color_type
        .as_deref()
        .or_else(|| config.resolve.default_hint());
    let query = ColorQuery::new(&cli.color_input(), hint)?;
    let resolution = resolve(query)?;
    Ok(render(&resolution, &cli.style(&config.output)))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::config::ResolveConfig;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("colorview").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_words_are_joined() {
        let cli = parse(&["dark", "slate", "gray"]);
        assert_eq!(cli.color_input(), "dark slate gray");
        let out = run(&cli, &Config::default()).expect("resolves");
        assert!(out.contains("darkslategray"));
    }

    #[test]
    fn no_color_is_missing_input() {
        let cli = parse(&[]);
        assert_eq!(
            run(&cli, &Config::default()),
            Err(ResolveError::MissingInput)
        );
    }

    #[test]
    fn type_flag_forms() {
        assert_eq!(parse(&["-t", "hex", "fff"]).color_type.as_deref(), Some("hex"));
        assert_eq!(parse(&["--type", "rgb", "1,2,3"]).color_type.as_deref(), Some("rgb"));
        assert_eq!(parse(&["--type=x11", "red"]).color_type.as_deref(), Some("x11"));
    }

    #[test]
    fn explicit_type_overrides_config_default() {
        let config = Config {
            resolve: ResolveConfig {
                default_type: "hex".into(),
            },
            ..Config::default()
        };
        assert!(run(&parse(&["red"]), &config).is_err());
        assert!(run(&parse(&["--type", "x11", "red"]), &config).is_ok());
    }

    #[test]
    fn exit_codes_through_run() {
        let config = Config::default();
        let code = |args: &[&str]| run(&parse(args), &config).map_err(|e| e.exit_code());
        assert!(code(&["red"]).is_ok());
        assert_eq!(code(&["notacolor"]), Err(1));
        assert_eq!(code(&["--type", "cmyk", "red"]), Err(1));
        assert_eq!(code(&["--type", "hex", "zzzzzz"]), Err(2));
        assert_eq!(code(&["--type", "hsv", "red"]), Err(99));
        assert_eq!(code(&[]), Err(2));
    }

    #[test]
    fn bg_and_fg_flags() {
        let output = OutputConfig::default();
        assert_eq!(parse(&["red"]).style(&output).layer, Layer::Background);
        assert_eq!(parse(&["--fg", "red"]).style(&output).layer, Layer::Foreground);
        assert_eq!(parse(&["--bg", "red"]).style(&output).layer, Layer::Background);
        assert_eq!(parse(&["-b", "red"]).style(&output).layer, Layer::Background);

        let configured = OutputConfig {
            layer: Layer::Foreground,
            ..OutputConfig::default()
        };
        assert_eq!(parse(&["--bg", "red"]).style(&configured).layer, Layer::Background);
        assert_eq!(parse(&["red"]).style(&configured).layer, Layer::Foreground);
    }

    #[test]
    fn bg_conflicts_with_fg() {
        assert!(Cli::try_parse_from(["colorview", "--bg", "--fg", "red"]).is_err());
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vv", "red"]).verbose, 2);
        assert_eq!(parse(&["red"]).verbose, 0);
    }
}
