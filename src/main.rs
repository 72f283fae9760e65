//! CLI entry point for deptree

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use deptree::output::write_json_value;
use deptree::tree::STDIN_PATH;
use deptree::{
    OutputConfig, Pkg, TreeFormatter, load_tree, print_json, summarize, write_explain,
    write_summary,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(about = "Render resolved package dependency trees")]
#[command(version)]
struct Args {
    /// Resolved dependency trees in JSON form ("-" reads stdin)
    #[arg(default_value = STDIN_PATH)]
    inputs: Vec<PathBuf>,

    /// Output the dependency tree in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Show every import path leading to the given package
    #[arg(long = "explain", value_name = "PKG")]
    explain: Option<String>,

    /// Print only the dependency summary line
    #[arg(long = "summary", conflicts_with = "explain")]
    summary: bool,

    /// Omit the summary line after the tree
    #[arg(long = "no-summary", conflicts_with = "summary")]
    no_summary: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Rendering mode chosen for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode<'a> {
    Json,
    SummaryJson,
    Summary,
    Explain(&'a str),
    Tree,
}

impl Args {
    fn mode(&self) -> Mode<'_> {
        // --json wins over --explain, matching the resolver's own CLI.
        match (self.json, self.summary, self.explain.as_deref()) {
            (true, true, _) => Mode::SummaryJson,
            (true, false, _) => Mode::Json,
            (false, true, _) => Mode::Summary,
            (false, false, Some(target)) => Mode::Explain(target),
            (false, false, None) => Mode::Tree,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn render(tree: &Pkg, mode: Mode<'_>, formatter: &TreeFormatter) -> io::Result<()> {
    match mode {
        Mode::Json => print_json(tree),
        Mode::SummaryJson => {
            let mut stdout = io::stdout().lock();
            write_json_value(&summarize(tree), &mut stdout)?;
            stdout.flush()
        }
        Mode::Summary => {
            let mut stdout = io::stdout().lock();
            write_summary(tree, &mut stdout)?;
            stdout.flush()
        }
        Mode::Explain(target) => {
            let mut stdout = io::stdout().lock();
            let found = write_explain(tree, target, &mut stdout)?;
            debug!(target_pkg = target, paths = found, "explained");
            stdout.flush()
        }
        Mode::Tree => formatter.print(tree),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mode = args.mode();
    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        show_summary: !args.no_summary,
    });

    for input in &args.inputs {
        let tree = match load_tree(input) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("deptree: {}", e);
                process::exit(1);
            }
        };
        info!(input = %input.display(), root = %tree.name, ?mode, "rendering");

        if let Err(e) = render(&tree, mode, &formatter) {
            // A closed pipe (e.g. `deptree | head`) is not worth reporting.
            if e.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            eprintln!("deptree: error writing output: {}", e);
            process::exit(1);
        }
    }
}
