use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use fruitbox::{Board, BoardBuilder, BoundingBox, Combination, ComboId, HighlightPlan, Palette, TokenIndex, TokenRecord, Value};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};
use crate::error::AppError;

mod cli;
mod config;
mod error;

#[derive(Serialize)]
struct ReportEntry {
    id: ComboId,
    color: Palette,
    indices: Vec<TokenIndex>,
    values: Vec<Value>,
    boxes: Vec<BoundingBox>,
}

#[derive(Serialize)]
struct Report {
    combinations: Vec<ReportEntry>,
    rejected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<Vec<(TokenIndex, TokenIndex)>>,
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn read_tokens(cli: &Cli) -> Result<Vec<TokenRecord>, AppError> {
    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn edges_of(board: &Board) -> Vec<(TokenIndex, TokenIndex)> {
    let mut edges = board.adjacent_pairs()
        .map(|pair| (pair.0.min(pair.1), pair.0.max(pair.1)))
        .collect::<Vec<_>>();
    edges.sort_unstable();
    edges
}

fn describe(combo: &Combination) -> String {
    let terms = combo.tokens().iter().map(|token| token.value.to_string()).collect::<Vec<_>>();
    format!("{} = {} (tokens {})", terms.join(" + "), combo.sum(), combo.signature())
}

fn print_text(cli: &Cli, board: &Board, combos: &[Combination]) {
    print!("{}", board);
    println!();
    print!("{}", board.render_combinations(combos));
    println!();

    if combos.is_empty() {
        println!("no combinations found");
    }
    for (n, combo) in combos.iter().enumerate() {
        println!("{:>3}. {}", n + 1, describe(combo));
    }

    for reason in board.rejected() {
        println!("rejected: {}", reason);
    }

    if cli.edges {
        println!();
        for (a, b) in edges_of(board) {
            println!("{} - {}", a, b);
        }
    }
}

fn print_json(cli: &Cli, board: &Board, combos: &[Combination]) -> Result<(), AppError> {
    let plan = HighlightPlan::new(combos);
    let report = Report {
        combinations: plan.highlights().iter()
            .zip(combos)
            .map(|(highlight, combo)| ReportEntry {
                id: highlight.id,
                color: highlight.color,
                indices: combo.indices().to_vec(),
                values: combo.tokens().iter().map(|token| token.value).collect(),
                boxes: highlight.boxes.clone(),
            })
            .collect(),
        rejected: board.rejected().iter().map(ToString::to_string).collect(),
        edges: cli.edges.then(|| edges_of(board)),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = config::load(cli)?;
    let records = read_tokens(cli)?;
    info!(tokens = records.len(), "read token list");

    let board = BoardBuilder::with_config(config)
        .extend(TokenRecord::resolve(&records))
        .build()
        .map_err(|reasons| AppError::Invalid(reasons.clone()))?;

    let combos = board.combinations();
    info!(combinations = combos.len(), rejected = board.rejected().len(), "search complete");

    match cli.format {
        OutputFormat::Text => print_text(cli, &board, &combos),
        OutputFormat::Json => print_json(cli, &board, &combos)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "giving up");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
