use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use strand::corpus::{load_documents, LoadOptions};
use strand::output::{print_json, print_report, print_stats, Report};
use strand::tree::SuffixTree;
use strand::utils::progress;
use strand::utils::{get_config_path, AppConfig};
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "strand")]
#[command(about = "Find the longest strand of bytes shared by two or more files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files or directories to compare
    paths: Vec<PathBuf>,

    /// Hex-encode file contents before searching
    #[arg(long)]
    hex: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Only keep matching files when walking directories (repeatable)
    #[arg(long = "glob", value_name = "GLOB")]
    globs: Vec<String>,

    /// Include hidden files when walking directories
    #[arg(long)]
    hidden: bool,

    /// Skip files larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Bytes of the strand to print
    #[arg(long, value_name = "BYTES")]
    preview: Option<usize>,

    /// Do not show progress spinners
    #[arg(short, long)]
    quiet: bool,

    /// Print suffix tree statistics to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration
    Config {
        /// Write the current configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn choice(self) -> ColorChoice {
        match self {
            ColorWhen::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorWhen::Auto => ColorChoice::Never,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("warning: {:#}; using default configuration", e);
        AppConfig::default()
    });

    match cli.command {
        Some(Commands::Config { write }) => show_config(&config, write),
        None => run_search(cli, config),
    }
}

fn show_config(config: &AppConfig, write: bool) -> Result<()> {
    if write {
        config.save()?;
    }
    println!("Config file: {}", get_config_path()?.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn run_search(cli: Cli, config: AppConfig) -> Result<()> {
    if cli.paths.is_empty() {
        bail!("No input files given (see --help)");
    }

    let options = LoadOptions {
        hex: cli.hex || config.hex,
        max_file_size: cli.max_file_size.unwrap_or(config.max_file_size),
        hidden: cli.hidden || config.include_hidden,
        globs: cli.globs,
    };
    let preview_bytes = cli.preview.unwrap_or(config.preview_bytes);

    // Phase 1: read inputs
    let spinner = progress::spinner("Reading files...", cli.quiet);
    let corpus = load_documents(&cli.paths, &options)?;
    progress::finish(spinner);

    for skipped in &corpus.skipped {
        eprintln!("warning: skipping {}: {}", skipped.path.display(), skipped.reason);
    }
    if corpus.documents.len() < 2 {
        bail!(
            "Need at least two files to compare, found {}",
            corpus.documents.len()
        );
    }

    // Phase 2: build and label the tree
    let spinner = progress::spinner("Building suffix tree...", cli.quiet);
    let mut tree = SuffixTree::build(&corpus.documents)?;
    progress::finish(spinner);

    let spinner = progress::spinner("Labeling nodes...", cli.quiet);
    tree.label();
    progress::finish(spinner);

    if cli.stats {
        print_stats(&tree.stats());
    }

    // Phase 3: query
    let spinner = progress::spinner("Searching...", cli.quiet);
    let found = tree.longest_common_substring()?;
    progress::finish(spinner);

    let names: Vec<PathBuf> = corpus.documents.iter().map(|d| d.name.clone()).collect();
    let report = Report::new(&tree, &found, &names);

    if cli.json {
        print_json(&report)?;
    } else {
        print_report(&report, cli.color.choice(), preview_bytes)?;
    }

    Ok(())
}
