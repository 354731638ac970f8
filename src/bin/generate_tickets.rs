//! Lottery ticket generator binary.
//!
//! Usage:
//!   cargo run --release --bin generate_tickets -- [OPTIONS]
//!
//! Examples:
//!   generate_tickets --game megasena --quantity 5 --size 6
//!   generate_tickets --game lotofacil --quantity 3 --strategy balanced
//!   generate_tickets --game quina --quantity 10 --batches 8
//!   generate_tickets --list-games

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use lotto_gen::lottery::{
    format_batch, format_stats, generate_parallel_with, BatchReport, GameCatalog,
    GenerationRequest, GeneratorConfig, LotteryError, Strategy, TicketBatch, TicketGenerator,
};

#[derive(Parser)]
#[command(name = "generate_tickets")]
#[command(about = "Generate unique lottery tickets with balanced number distributions")]
struct Cli {
    #[arg(long, help = "Game identifier", default_value_t = String::from("megasena"))]
    game: String,
    #[arg(long, help = "Number of tickets per batch", default_value_t = 5)]
    quantity: usize,
    #[arg(long, help = "Numbers per ticket (default: the game's minimum)")]
    size: Option<usize>,
    #[arg(long, help = "reject | balanced | unconstrained", default_value_t = Strategy::RejectBased)]
    strategy: Strategy,
    #[arg(long, help = "Skip the consecutive-run rule for the balanced strategy", default_value_t = false)]
    skip_runs: bool,
    #[arg(long, help = "Number of independent batches to generate", default_value_t = 1)]
    batches: usize,
    #[arg(long, help = "Random seed (reproducible output, testing only)")]
    seed: Option<u64>,
    #[arg(long, help = "Game catalog JSON file (default: builtin games)")]
    catalog: Option<String>,
    #[arg(long, help = "Write the last batch and its analysis to this JSON file")]
    json: Option<String>,
    #[arg(long, help = "List available games and exit", default_value_t = false)]
    list_games: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), LotteryError> {
    let catalog = match &cli.catalog {
        Some(path) => GameCatalog::from_json_file(path)?,
        None => GameCatalog::builtin(),
    };

    if cli.list_games {
        print_games(&catalog);
        return Ok(());
    }

    let strategy = match cli.strategy {
        Strategy::Balanced { .. } => Strategy::Balanced {
            check_runs: !cli.skip_runs,
        },
        other => other,
    };
    let size = match cli.size {
        Some(size) => size,
        None => catalog.config_for(&cli.game)?.min_count,
    };

    println!("=== Ticket Generator ===\n");
    println!(
        "Game: {} | Tickets: {} | Numbers: {} | Strategy: {}",
        cli.game, cli.quantity, size, strategy
    );
    if let Ok(days) = catalog.draw_days(&cli.game) {
        if !days.is_empty() {
            println!("Draw days: {}", days.join(", "));
        }
    }
    println!();

    let start = Instant::now();
    let batches = if cli.batches <= 1 || cli.seed.is_some() {
        generate_sequential(&catalog, cli, size, strategy)?
    } else {
        generate_batches(&catalog, cli, size, strategy)?
    };

    for (i, batch) in batches.iter().enumerate() {
        if batches.len() > 1 {
            println!("Batch {}/{}", i + 1, batches.len());
        }
        print!("{}", format_batch(&cli.game, batch));
        let report = BatchReport::new(&cli.game, strategy, batch)?;
        print!("{}", format_stats(&report.stats));
        println!();
    }

    println!("Done in {:.3}s", start.elapsed().as_secs_f64());

    if let (Some(path), Some(batch)) = (&cli.json, batches.last()) {
        BatchReport::new(&cli.game, strategy, batch)?.save_json(path)?;
        println!("Saved JSON: {}", path);
    }

    Ok(())
}

/// One generator for every batch; honours `--seed`.
fn generate_sequential(
    catalog: &GameCatalog,
    cli: &Cli,
    size: usize,
    strategy: Strategy,
) -> Result<Vec<TicketBatch>, LotteryError> {
    let mut config = GeneratorConfig::new().with_strategy(strategy);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut generator = TicketGenerator::new(catalog, config);

    let mut batches = Vec::with_capacity(cli.batches.max(1));
    for _ in 0..cli.batches.max(1) {
        batches.push(generator.generate(&cli.game, cli.quantity, size)?);
        let stats = generator.stats();
        println!(
            "Accepted {} in {} attempts ({} duplicates, {} rejected)",
            stats.accepted, stats.attempts, stats.duplicates, stats.rejected
        );
    }
    println!();
    Ok(batches)
}

/// Independent batches in parallel, with a progress bar.
fn generate_batches(
    catalog: &GameCatalog,
    cli: &Cli,
    size: usize,
    strategy: Strategy,
) -> Result<Vec<TicketBatch>, LotteryError> {
    let requests =
        vec![GenerationRequest::new(&cli.game, cli.quantity, size).with_strategy(strategy); cli.batches];

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let results = generate_parallel_with(catalog, &requests, |_| pb.inc(1));
    pb.finish_and_clear();

    results.into_iter().collect()
}

fn print_games(catalog: &GameCatalog) {
    println!("{:<16} {:>9} {:>9}  Draw days", "Game", "Range", "Numbers");
    for id in catalog.game_ids() {
        if let Ok(config) = catalog.config_for(id) {
            println!(
                "{:<16} {:>9} {:>9}  {}",
                id,
                format!("{}-{}", config.min_number, config.max_number),
                format!("{}-{}", config.min_count, config.max_count),
                config.draw_days.join(", ")
            );
        }
    }
}
