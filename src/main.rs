use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use wordsearch::engine::Engine;
use wordsearch::index::{BuildReport, IndexConfig, ReadErrorPolicy};
use wordsearch::server;
use wordsearch::vfs::DiskFs;

#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(about = "Index a directory of text files and look up words")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    index: IndexArgs,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080", global = true)]
    addr: SocketAddr,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args, Clone)]
struct IndexArgs {
    /// Directory to index
    #[arg(short, long, default_value = "./files", global = true)]
    root: PathBuf,

    /// Leave unreadable files out instead of failing the build
    #[arg(long, global = true)]
    skip_unreadable: bool,

    /// Index the empty word produced by leading or trailing punctuation
    #[arg(long, global = true)]
    keep_empty_tokens: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and serve lookups over HTTP
    Serve,
    /// Build the index and print the files containing a word
    Search {
        /// Word to look up
        word: String,
    },
    /// Build the index and show its statistics
    Stats,
}

impl IndexArgs {
    fn config(&self, show_progress: bool) -> IndexConfig {
        IndexConfig {
            on_read_error: if self.skip_unreadable {
                ReadErrorPolicy::Skip
            } else {
                ReadErrorPolicy::Abort
            },
            keep_empty_tokens: self.keep_empty_tokens,
            show_progress,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

/// Build the engine for `args`, failing before anything is served
fn build_engine(args: &IndexArgs, show_progress: bool) -> Result<(Engine, BuildReport)> {
    let engine = Engine::with_config(DiskFs::new(&args.root), args.config(show_progress));
    let report = engine
        .init()
        .with_context(|| format!("Failed to index {}", args.root.display()))?;

    if !report.skipped.is_empty() {
        eprintln!("({} files could not be read)", report.skipped.len());
    }

    Ok((engine, report))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Serve) | None => run_server(&cli.index, cli.addr)?,
        Some(Commands::Search { word }) => {
            let (engine, _) = build_engine(&cli.index, false)?;
            print_results(&word, &engine.search(&word))?;
        }
        Some(Commands::Stats) => {
            let (engine, report) = build_engine(&cli.index, true)?;
            println!("Root:             {}", cli.index.root.display());
            if let Some(stats) = engine.stats() {
                println!("{}", stats);
            }
            println!("Skipped:          {}", report.skipped.len());
            println!("Build time:       {:.2?}", report.elapsed);
        }
    }

    Ok(())
}

fn run_server(args: &IndexArgs, addr: SocketAddr) -> Result<()> {
    println!("Indexing: {}", args.root.display());
    let (engine, report) = build_engine(args, true)?;
    println!(
        "Indexed {} files ({} words) in {:.2?}",
        report.files_indexed, report.token_count, report.elapsed
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::serve(Arc::new(engine), addr))
}

fn print_results(word: &str, files: &[String]) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    if files.is_empty() {
        writeln!(stdout, "No files contain {:?}", word)?;
        return Ok(());
    }

    for file in files {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", file)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_addr_before_subcommand() {
        let cli = parse(&["wordsearch", "--addr", "0.0.0.0:9000", "serve"]);
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert_eq!(cli.addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_addr_after_subcommand() {
        let cli = parse(&["wordsearch", "serve", "--addr", "0.0.0.0:9001"]);
        assert_eq!(cli.addr, "0.0.0.0:9001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = parse(&["wordsearch"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cli.index.root, PathBuf::from("./files"));
        assert_eq!(cli.index.config(false).on_read_error, ReadErrorPolicy::Abort);
    }

    #[test]
    fn test_skip_unreadable_flag() {
        let cli = parse(&["wordsearch", "search", "hello", "--skip-unreadable"]);
        assert!(matches!(cli.command, Some(Commands::Search { ref word }) if word == "hello"));
        assert_eq!(cli.index.config(false).on_read_error, ReadErrorPolicy::Skip);
    }
}
