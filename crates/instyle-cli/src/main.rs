//! `instyle` - render tag markup from the command line.
//!
//! All arguments are joined with spaces, rendered, and printed:
//!
//! ```text
//! $ instyle '[~bold+red]error:[/] something broke'
//! ```
//!
//! Set `INSTYLE_STYLESHEET` to a YAML stylesheet to add custom styles, and
//! `RUST_LOG=debug` to see why a tag was left as literal text.

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use console::Term;
use instyle::Styler;

/// Environment variable naming a YAML stylesheet to load.
const STYLESHEET_ENV: &str = "INSTYLE_STYLESHEET";

const NO_ARGS_WARNING: &str = "[~bold+red]no command line arguments provided";

/// Render instyle tag markup to ANSI escape codes.
///
/// Every argument is treated as text, including ones that look like flags.
#[derive(Parser, Debug)]
#[command(name = "instyle", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Text to render; arguments are joined with single spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Cli {
    /// Parses `args` (binary name first) with every user argument taken as text.
    ///
    /// An end-of-options marker is placed ahead of the user's arguments, so a
    /// `--` of their own is kept rather than consumed by clap.
    fn parse_text<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("instyle"));
        Self::try_parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}

/// Where a rendered line goes.
#[derive(Debug, PartialEq, Eq)]
enum Output {
    Stdout(String),
    Stderr(String),
}

fn build_styler(stylesheet: Option<OsString>) -> anyhow::Result<Styler> {
    let mut styler = Styler::new();

    if let Some(path) = stylesheet.filter(|p| !p.is_empty()) {
        let count = styler
            .load_stylesheet_file(&path)
            .with_context(|| format!("loading {} from {}", STYLESHEET_ENV, path.to_string_lossy()))?;
        log::debug!("loaded {} styles from {}", count, path.to_string_lossy());
    }

    Ok(styler)
}

fn run(cli: &Cli, styler: &Styler) -> Output {
    if cli.words.is_empty() {
        Output::Stderr(styler.render(NO_ARGS_WARNING))
    } else {
        Output::Stdout(styler.render(&cli.words.join(" ")))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_text(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let styler = build_styler(std::env::var_os(STYLESHEET_ENV))?;

    match run(&cli, &styler) {
        Output::Stdout(line) => Term::stdout().write_line(&line)?,
        Output::Stderr(line) => Term::stderr().write_line(&line)?,
    }

    Ok(())
}
