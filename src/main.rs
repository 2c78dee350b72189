use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use pwcrack::config::Config;
use pwcrack::search::{BruteForcer, SearchOutcome};
use pwcrack::stats::Statistics;
use pwcrack::utils::{estimate_remaining, format_number};
use pwcrack::wordlist::{match_dictionary, WordlistLoader};

/// Password recovery tool: dictionary matching with brute-force fallback
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Password to recover (prompted for if omitted)
    target: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Wordlist path (overrides config)
    #[arg(short, long)]
    wordlist: Option<String>,

    /// Candidate length for the brute-force phase (overrides config)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude digits from the brute-force alphabet
    #[arg(long)]
    no_digits: bool,

    /// Include ASCII punctuation in the brute-force alphabet
    #[arg(long)]
    symbols: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    if args.init_config {
        Config::save_default(&args.config)?;
        info!("Wrote default config to: {}", args.config);
        return Ok(());
    }

    display_banner();

    // A missing config file is fine; defaults mirror the classic setup
    // (length 5, digits on, symbols off, passwords.txt)
    let config = if Path::new(&args.config).exists() {
        let config = Config::load(&args.config)?;
        info!("Configuration loaded from: {}", args.config);
        config
    } else {
        info!("No config file at {}, using defaults", args.config);
        Config::default()
    };

    let wordlist_path = args.wordlist.unwrap_or_else(|| config.wordlist.path.clone());
    let length = args.length.unwrap_or(config.search.length);
    let use_digits = config.search.use_digits && !args.no_digits;
    let use_symbols = config.search.use_symbols || args.symbols;

    let target = match args.target {
        Some(t) => t,
        None => prompt_for_target()?,
    };

    info!("Searching...");
    let start = Instant::now();

    let mut recovered = false;

    // Phase 1: dictionary scan. An unreadable wordlist is reported and
    // skipped, never fatal.
    match WordlistLoader::load_limited(&wordlist_path, config.wordlist.limit) {
        Ok(candidates) => {
            if let Some(hit) = match_dictionary(&target, &candidates) {
                println!("Common match: {} (#{})", hit.value, hit.rank);
                recovered = true;
            }
        }
        Err(e) => warn!("Skipping dictionary phase: {}", e),
    }

    // Phase 2: exhaustive search at the configured length
    if !recovered {
        recovered = run_brute_force(&target, length, use_digits, use_symbols);
    }

    if !recovered {
        println!("We could not crack it!");
    }

    println!("{:.2} s", start.elapsed().as_secs_f64());

    Ok(())
}

fn run_brute_force(target: &str, length: usize, use_digits: bool, use_symbols: bool) -> bool {
    let searcher = BruteForcer::new(length, use_digits, use_symbols);
    let space = searcher.space_size();

    info!(
        "Brute-force phase: {} candidates of length {} over a {}-character alphabet",
        format_number(space),
        length,
        searcher.alphabet().len()
    );

    let stats = Statistics::new();

    let progress_bar = indicatif::ProgressBar::new(space);
    progress_bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let outcome = searcher.run_with(target, None, |attempts| {
        if attempts % 100_000 == 0 {
            progress_bar.set_position(attempts);
            stats.set_attempts(attempts);
            debug!(
                "Progress: {} | {:.0} guesses/s | remaining: {}",
                format_number(attempts),
                stats.rate(),
                estimate_remaining(attempts, space, stats.rate())
            );
        }
    });

    progress_bar.finish_and_clear();

    match outcome {
        SearchOutcome::Found { attempts } => {
            println!("{} was cracked in {} attempts", target, format_number(attempts));
            true
        }
        SearchOutcome::Exhausted { attempts } => {
            info!("Exhausted {} candidates without a match", format_number(attempts));
            false
        }
        SearchOutcome::Cancelled { attempts } => {
            warn!("Search cancelled after {} attempts", format_number(attempts));
            false
        }
    }
}

fn prompt_for_target() -> Result<String> {
    print!("Please enter the password to be recovered: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    // Strip the trailing newline only; the password itself may contain spaces
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

fn display_banner() {
    println!(
        "
╔══════════════════════════════════════════════════════╗
║   pwcrack v{}                                      ║
║   Dictionary match + brute-force password recovery   ║
║   Only recover passwords you own                     ║
╚══════════════════════════════════════════════════════╝
",
        pwcrack::VERSION
    );
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .init();

    Ok(())
}
