//! CLI entry point for sizetree

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use sizetree::{OutputConfig, TreeFormatter, TreeWalker, WalkerConfig, print_json, report_line};

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
#[command(name = "sizetree")]
#[command(about = "List a directory tree with the size of every entry in bytes")]
#[command(version)]
struct Args {
    /// File or directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (sizes still count everything below)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Omit the directory/file count line after the tree
    #[arg(long = "no-report")]
    no_report: bool,

    /// Log traversal details to stderr (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if !args.path.exists() {
        eprintln!(
            "sizetree: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    // Resolve relative roots so "." prints the directory's own name.
    let mut root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // "..", or a path ending in it, still has no name to show.
    if root.file_name().is_none() {
        root = fs::canonicalize(&root).unwrap_or(root);
    }

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.level,
    });
    let walk = match walker.walk(&root) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("sizetree: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&walk.root)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&walk.root).map(|()| {
            if !args.no_report {
                println!();
                println!("{}", report_line(&walk));
            }
        })
    };

    if let Err(e) = result {
        eprintln!("sizetree: error writing output: {}", e);
        process::exit(1);
    }
}
