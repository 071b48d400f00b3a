//! Play command - Replay the optimal line from a start state

use anyhow::{Result, anyhow};
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{describe_value, print_board, print_kv, print_section},
    solver::build_policy_table,
};

#[derive(Parser, Debug)]
#[command(about = "Show the optimal line of play")]
pub struct PlayArgs {
    /// Start state as 10 comma-separated values (mover, then 9 cells)
    #[arg(long)]
    pub state: Option<String>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let start = parse_state(args.state.as_deref())?;
    let table = build_policy_table(&start)?;
    let line = table.principal_variation(&start)?;

    print_section("Optimal line of play");
    for (ply, state) in line.iter().enumerate() {
        println!("\nPly {ply}:");
        print_board(state);
        if let Some(action) = table.get(state).and_then(|entry| entry.action) {
            println!("    {} plays {action}", state.to_move);
        }
    }

    let last = line
        .last()
        .ok_or_else(|| anyhow!("optimal line is empty"))?;
    println!();
    print_kv("Outcome", describe_value(last.utility()));
    print_kv("Plies", &(line.len() - 1).to_string());

    Ok(())
}
