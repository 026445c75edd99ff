//! Yield Engine CLI
//!
//! Command-line interface for running projections and a demo game playthrough

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use yield_engine::history::{record_outcome, HistoryStore, MemoryStore};
use yield_engine::simulation::{presets, project, SimulationInputs};
use yield_engine::GameSession;

#[derive(Parser)]
#[command(name = "yield_engine", version, about = "Compounding projections and the which-yields-more game")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a projection for a named preset scenario
    Project {
        #[arg(long, value_enum, default_value = "low")]
        preset: Preset,
        /// Emit the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Play through the fixed round set, always picking the first option
    Game,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 2% monthly inflation, 45% nominal rate
    Low,
    /// 5% monthly inflation, 80% nominal rate
    Medium,
    /// Inflation shocks in months 3 and 7, 120% nominal rate
    Shock,
}

impl Preset {
    fn inputs(self) -> SimulationInputs {
        match self {
            Preset::Low => presets::low_inflation(),
            Preset::Medium => presets::medium_inflation(),
            Preset::Shock => presets::high_inflation_with_shock(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project { preset, json } => run_projection(preset.inputs(), json),
        Command::Game => run_game(),
    }
}

fn run_projection(inputs: SimulationInputs, json: bool) -> anyhow::Result<()> {
    let result = project(&inputs).context("projection failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Projection ({} months):", inputs.horizon_months);
    println!(
        "{:>5} {:>14} {:>14} {:>10} {:>14}",
        "Month", "Nominal", "Real", "CumInfl%", "Contributions"
    );
    println!("{}", "-".repeat(62));
    for month in 0..result.nominal.len() {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>10.2} {:>14.2}",
            month,
            result.nominal[month],
            result.real[month],
            result.cumulative_inflation_pct[month],
            result.cumulative_contributions[month],
        );
    }

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Final Nominal:     ${:.2}", summary.final_nominal);
    println!("  Final Real:        ${:.2}", summary.final_real);
    println!("  Fees Paid:         ${:.2}", summary.fees_paid);
    println!("  Nominal Return:    {:.2}%", summary.nominal_return_pct);
    println!("  Real Return:       {:.2}%", summary.real_return_pct);

    Ok(())
}

fn run_game() -> anyhow::Result<()> {
    let mut session = GameSession::new();
    session.start().context("could not build the round set")?;

    println!("Which yields more? ({} rounds)\n", session.rounds().len());

    while let Some(round) = session.current_round() {
        let round_id = round.id.clone();
        let pick = round.options[0].id.clone();
        println!("Round {}:", round_id);
        for option in &round.options {
            println!("  [{}] {}", option.id, option.description);
        }

        let feedback = session.answer(&round_id, &pick)?;
        println!(
            "  Picked [{}]: {}",
            pick,
            if feedback.correct { "correct!" } else { "wrong" }
        );
        println!("  {}\n", feedback.explanation);
        session.advance()?;
    }

    let outcome = session.finish()?;
    println!(
        "Finished: {}/{} correct in {}s, score {}",
        outcome.correct_count, outcome.total_rounds, outcome.elapsed_seconds, outcome.score
    );

    let mut store = MemoryStore::new();
    record_outcome(&mut store, &outcome);
    for badge in store.badges() {
        println!("Badge earned: {} - {}", badge.name, badge.description);
    }

    Ok(())
}
