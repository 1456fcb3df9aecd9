//! longsub - print the longest substring of a word accepted by an automaton
//!
//! Reads the problem (vertex/edge/terminal counts, terminals, edges, word) from
//! a file or stdin and prints the match, or a sentinel when there is none.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use longsub::{LongestSubstringFinder, Problem};

#[derive(Debug, Parser)]
#[command(name = "longsub", version, about)]
struct Args {
    /// Problem file; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Text printed when no non-empty substring is accepted
    #[arg(long, value_name = "TEXT", default_value = "No solution")]
    no_match: String,

    /// Also print the byte offset where the match starts
    #[arg(long)]
    position: bool,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let text = read_input(args.input.as_ref())?;
    let problem = Problem::parse(&text).context("malformed problem")?;
    let automaton = problem.automaton().context("invalid automaton")?;
    let condensed = automaton.condense();

    tracing::info!(
        vertices = automaton.num_vertices(),
        components = condensed.num_vertices(),
        word_len = problem.word.len(),
        "searching"
    );

    let mut finder = LongestSubstringFinder::new(&condensed, &problem.word);
    let mut stdout = io::stdout().lock();
    match finder.find() {
        Some(found) if args.position => writeln!(stdout, "{} {}", found.start, found.text)?,
        Some(found) => writeln!(stdout, "{}", found.text)?,
        None => writeln!(stdout, "{}", args.no_match)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = init_logging(args.verbose).and_then(|()| run(&args));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
