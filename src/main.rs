//! Command-line front end.
//!
//! Run with: `cargo run -- 0110`
//! With options: `cargo run -- 01101001 8 --engine odometer --all --format expr`

use clap::{Parser, ValueEnum};
use log::info;
use simplelog::LevelFilter;

use nand_superopt::dot::to_dot;
use nand_superopt::error::parse_gate_limit;
use nand_superopt::print::{expression, truth_table};
use nand_superopt::search::Engine;
use nand_superopt::{synthesize, Solution, SynthConfig, TruthTable};

#[derive(Parser, Debug)]
#[command(name = "nand-superopt")]
#[command(about = "Find a minimal NAND-gate circuit for a truth table")]
struct Cli {
    /// Truth table, one character per row (`0`, `1`, or `x` for don't care),
    /// first row first. The length must be a power of two.
    pattern: String,

    /// Largest number of gates to try
    #[arg(value_parser = parse_gate_limit, default_value_t = 6)]
    max_gates: usize,

    /// Enumeration engine (`pruned` or `odometer`)
    #[arg(short, long, default_value_t = Engine::Pruned)]
    engine: Engine,

    /// Print every circuit of the minimal size, not just the first one
    #[arg(short, long)]
    all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Listing)]
    format: Format,

    /// Log level
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Format {
    /// `c = ~(B A); d = ~(c c)`
    Listing,
    /// Nested expressions, single-use gates inlined
    Expr,
    /// Output of every row
    Table,
    /// Graphviz
    Dot,
}

fn render(solution: &Solution, format: Format) -> color_eyre::Result<String> {
    Ok(match format {
        Format::Listing => solution.to_string(),
        Format::Expr => expression(solution),
        Format::Table => truth_table(solution),
        Format::Dot => to_dot(solution)?,
    })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let target: TruthTable = cli.pattern.parse()?;
    info!("Target: {} ({} inputs)", target, target.ninputs());

    let config = SynthConfig {
        max_gates: cli.max_gates,
        engine: cli.engine,
        all_matches: cli.all,
    };

    let time_total = std::time::Instant::now();
    let report = synthesize(&target, &config)?;
    info!(
        "Searched {} candidates in {:.3} s",
        report.total_candidates(),
        time_total.elapsed().as_secs_f64()
    );

    if !report.is_found() {
        println!("No circuit with at most {} gates", report.max_gates);
        return Ok(());
    }

    for solution in &report.solutions {
        println!("{}", render(solution, cli.format)?);
    }

    Ok(())
}
