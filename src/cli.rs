//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::backends::walk::SerializeConfig;
use crate::core::file_reader::{EncodingStrategy, FileReadConfig, NewlineMode};
use crate::core::paths::PathStyle;
use crate::core::render::RenderConfig;

/// dirjson - serialize a directory tree into one JSON object.
#[derive(Parser, Debug)]
#[command(name = "dirjson")]
#[command(
    author,
    version,
    about,
    long_about = r#"dirjson walks a directory recursively, reads every file as UTF-8 text and
prints a single JSON object mapping each file path to its content.

The operation is all-or-nothing: any unreadable or undecodable file aborts the
run, prints a diagnostic on stderr and leaves stdout empty.

Examples:
    dirjson
    dirjson assets --path-style relative
    dirjson shaders --pretty > shaders.json
    dirjson docs --on-invalid skip
"#
)]
pub struct Cli {
    /// Directory to walk.
    #[arg(
        value_name = "ROOT",
        default_value = ".",
        long_help = "Directory to walk (defaults to the current directory).\n\n\
With the default path style every key starts with ROOT exactly as given."
    )]
    pub root: PathBuf,

    /// How keys are spelled (joined/relative).
    #[arg(
        long,
        default_value = "joined",
        value_parser = ["joined", "relative"],
        value_name = "STYLE",
        long_help = "Select how file paths are written as keys.\n\n\
Supported values:\n\
- joined (default): ROOT joined with the path below it, e.g. ./sub/a.txt\n\
- relative: path relative to ROOT with '/' separators, e.g. sub/a.txt"
    )]
    pub path_style: String,

    /// What to do with files that are not valid UTF-8 (error/skip/lossy).
    #[arg(
        long,
        default_value = "error",
        value_parser = ["error", "skip", "lossy"],
        value_name = "POLICY",
        long_help = "Policy for files whose content is not valid UTF-8.\n\n\
Supported values:\n\
- error (default): abort the whole run with no output\n\
- skip: leave the file out and log a warning\n\
- lossy: replace invalid sequences with U+FFFD"
    )]
    pub on_invalid: String,

    /// Line ending handling (keep/universal).
    #[arg(
        long,
        default_value = "keep",
        value_parser = ["keep", "universal"],
        value_name = "MODE",
        long_help = "Line ending handling.\n\n\
Supported values:\n\
- keep (default): content is emitted byte-for-byte\n\
- universal: \\r\\n and lone \\r are translated to \\n"
    )]
    pub newlines: String,

    /// Descend into symlinked directories.
    #[arg(
        long,
        long_help = "Descend into directories reached through symbolic links.\n\n\
By default symlinked files are read through but symlinked directories are not walked."
    )]
    pub follow_links: bool,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print the JSON object with indentation for human readability.\n\n\
The default is compact output."
    )]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored diagnostics. This is useful when stderr is captured\n\
to a file or your terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only).
    #[arg(
        short,
        long,
        long_help = "Only log errors on stderr. RUST_LOG overrides this when set."
    )]
    pub quiet: bool,

    /// Verbose mode (log every file read).
    #[arg(
        short,
        long,
        long_help = "Log every file read and a summary on stderr. RUST_LOG overrides this\n\
when set."
    )]
    pub verbose: bool,
}

impl Cli {
    /// Build the serializer options from parsed arguments
    pub fn serialize_config(&self) -> Result<SerializeConfig> {
        let path_style: PathStyle = self.path_style.parse().map_err(anyhow::Error::msg)?;
        let encoding_strategy: EncodingStrategy =
            self.on_invalid.parse().map_err(anyhow::Error::msg)?;
        let newline_mode: NewlineMode = self.newlines.parse().map_err(anyhow::Error::msg)?;

        Ok(SerializeConfig {
            path_style,
            read: FileReadConfig {
                encoding_strategy,
                newline_mode,
            },
            follow_links: self.follow_links,
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::core::logging::init(cli.verbose, cli.quiet, cli.no_color)?;

    let config = cli.serialize_config()?;
    let render_config = RenderConfig::with_pretty(cli.pretty);

    tracing::debug!(root = %cli.root.display(), ?config, "starting walk");

    crate::backends::walk::run_dump(&cli.root, &config, render_config)
}
