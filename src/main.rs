//! CLI entry point for grove

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use grove::{
    OutputConfig, StreamingFormatter, TraversalConfig, TreeRenderer, print_json,
    prompt_for_config,
    tree::{absolutize, parse_exclude_list},
};

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
#[command(name = "grove")]
#[command(about = "Project tree visualizer with smart folder exclusion")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden files and folders
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep (0 = root only)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Exclude entries with this exact name (repeatable, or comma-separated)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not start from the built-in exclusion list
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Print a "Project Structure" banner above the tree
    #[arg(long = "header", conflicts_with = "json")]
    header: bool,

    /// Print directory and file counts after the tree
    #[arg(short = 's', long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Ask for path and options interactively
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["all", "level", "exclude", "no_default_excludes"]
    )]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grove={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn config_from_args(args: &Args) -> grove::Result<TraversalConfig> {
    let mut builder = TraversalConfig::builder();
    if args.no_default_excludes {
        builder = builder.clear_excludes();
    }
    builder
        .excludes(args.exclude.iter().flat_map(|e| parse_exclude_list(e)))
        .show_hidden(args.all)
        .max_depth(args.level)
        .build()
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let (path, config) = if args.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stdout = io::stdout();
        match prompt_for_config(&mut input, &mut stdout, &cwd) {
            Ok(prompted) => {
                println!();
                (prompted.root, prompted.config)
            }
            Err(e) => {
                eprintln!("grove: {}", e);
                process::exit(1);
            }
        }
    } else {
        match config_from_args(&args) {
            Ok(config) => (args.path.clone(), config),
            Err(e) => {
                eprintln!("grove: {}", e);
                process::exit(1);
            }
        }
    };

    tracing::debug!(?config, path = %path.display(), "resolved configuration");

    // Like abspath: "." gets a real name, symlinked roots keep theirs
    let root = absolutize(&cwd, &path);
    if !root.exists() {
        eprintln!(
            "grove: cannot access '{}': No such file or directory",
            path.display()
        );
        process::exit(1);
    }

    let renderer = TreeRenderer::new(config);

    let result = if args.json {
        match renderer.build(&root) {
            Some(tree) => print_json(&tree),
            None => {
                eprintln!("grove: '{}' is hidden or excluded", path.display());
                process::exit(1);
            }
        }
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            summary: args.summary,
        };
        let mut formatter = StreamingFormatter::new(output_config);
        let header = if args.header {
            formatter.write_header(&path.display().to_string())
        } else {
            Ok(())
        };
        header.and_then(|_| renderer.render_to(&root, &mut formatter).map(|_| ()))
    };

    if let Err(e) = result {
        eprintln!("grove: error writing output: {}", e);
        process::exit(1);
    }
}
