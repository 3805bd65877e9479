use clap::{Parser, Subcommand};
use puzzlesearch::{
    problems::{ParkingProblem, SokobanProblem},
    search::{validate, Plan, Problem},
};
use std::{error::Error, path::PathBuf, str::FromStr};

#[derive(Parser)]
#[command(version)]
/// Check that a plan file solves a puzzle level.
struct Cli {
    #[command(subcommand)]
    puzzle: Puzzle,
    #[arg(help = "The level file")]
    level: PathBuf,
    #[arg(help = "The plan file to validate, one action per line")]
    plan: PathBuf,
}

#[derive(Subcommand, Clone, Copy)]
enum Puzzle {
    /// Actions are directions: R, U, D or L.
    Sokoban,
    /// Actions are a car letter followed by a direction, e.g. "A R".
    Parking,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let plan_text = std::fs::read_to_string(&cli.plan)?;

    match cli.puzzle {
        Puzzle::Sokoban => check(&SokobanProblem::from_path(&cli.level)?, &plan_text),
        Puzzle::Parking => check(&ParkingProblem::from_path(&cli.level)?, &plan_text),
    }
}

fn check<P>(problem: &P, plan_text: &str) -> Result<(), Box<dyn Error>>
where
    P: Problem,
    P::Action: FromStr,
    <P::Action as FromStr>::Err: Error + 'static,
{
    let plan: Plan<P::Action> = plan_text.parse()?;
    let initial_state = problem.initial_state();
    validate(problem, &initial_state, &plan)?;
    println!("Plan is valid");
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", plan.cost(problem, &initial_state)?);
    Ok(())
}
