//! CLI argument parsing for ide-bridge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ide-bridge: use a VS Code derivative as the external script editor of a
/// Unity project.
///
/// - Finds installed Antigravity, Cursor, Kiro, Qoder, Trae CN and Windsurf
/// - Opens a script at a line and column
/// - Keeps the project's .vscode files converged without clobbering edits
#[derive(Parser, Debug)]
#[command(name = "ide-bridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: <config dir>/ide-bridge/config.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). IDE_BRIDGE_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ide-bridge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported editors.
    Editors,

    /// Find installed editors.
    ///
    /// Probes the well-known install locations of every supported editor
    /// (or only `--editor`), plus any `extra_paths` from the config.
    Discover(DiscoverArgs),

    /// Check whether a path is an editor installation.
    Probe(ProbeArgs),

    /// Show the installed Unity tools extension and its analyzers.
    Analyzers(AnalyzersArgs),

    /// Create or patch the project's .vscode files.
    ///
    /// Missing files are written from defaults. Existing files only gain the
    /// entries the editor needs; everything else is preserved.
    Sync(SyncArgs),

    /// Open the project (and optionally a file) in an editor.
    Open(OpenArgs),
}

/// Arguments for the `discover` command.
#[derive(Parser, Debug)]
pub struct DiscoverArgs {
    /// Only look for this editor (id or name, e.g. `cursor`, `"Trae CN"`).
    #[arg(long)]
    pub editor: Option<String>,

    /// Print installations as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `probe` command.
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Executable (Windows/Linux) or app bundle (macOS) to test.
    pub path: PathBuf,

    /// Only test against this editor.
    #[arg(long)]
    pub editor: Option<String>,

    /// Print the installation as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `analyzers` command.
#[derive(Parser, Debug)]
pub struct AnalyzersArgs {
    /// Look in ~/.vscode-insiders instead of ~/.vscode.
    #[arg(long)]
    pub prerelease: bool,
}

/// Arguments for the `sync` command.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Project root (default: current directory).
    pub project: Option<PathBuf>,

    /// Solution file name for `dotnet.defaultSolution`.
    #[arg(long)]
    pub solution: Option<String>,
}

/// Arguments for the `open` command.
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// File to open. Without it only the project is opened.
    pub file: Option<PathBuf>,

    /// Project root (default: current directory).
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Editor to use (id or name). Defaults to the config's `default_editor`,
    /// then the first installation found.
    #[arg(long, conflicts_with = "install")]
    pub editor: Option<String>,

    /// Use this installation path directly.
    #[arg(long)]
    pub install: Option<PathBuf>,

    /// 1-based line.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub line: i64,

    /// 0-based column.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub column: i64,

    /// Print the command instead of running it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
