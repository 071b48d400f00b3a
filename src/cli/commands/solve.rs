//! Solve command - Enumerate the state space and compute the optimal policy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::parse_state;
use crate::{
    cli::output::{
        create_spinner, describe_value, print_board, print_kv, print_section, print_subsection,
    },
    export::PolicyCsvExporter,
    hexapawn::analyze_state_space,
    solver::build_policy_table,
};

#[derive(Parser, Debug)]
#[command(about = "Solve the game from a start state")]
pub struct SolveArgs {
    /// Start state as 10 comma-separated values (mover, then 9 cells)
    #[arg(long)]
    pub state: Option<String>,

    /// Export the policy table to a CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let start = parse_state(args.state.as_deref())?;

    let spinner = create_spinner("Solving game tree...")?;
    let table = build_policy_table(&start)?;
    spinner.finish_and_clear();

    let stats = analyze_state_space(table.states());

    print_section("Hexapawn Solver");
    println!("\nStart state:");
    print_board(&start);

    print_subsection("State space");
    print_kv("Total states", &stats.total_states.to_string());
    print_kv("Terminal states", &stats.terminal_states.to_string());
    print_kv("White wins", &stats.white_wins.to_string());
    print_kv("Black wins", &stats.black_wins.to_string());
    print_kv("Stalemates", &stats.stalemates.to_string());

    print_subsection("States by piece count");
    for (pieces, count) in &stats.by_piece_count {
        print_kv(&format!("{pieces} pieces"), &count.to_string());
    }

    print_subsection("Optimal play");
    if let Some(entry) = table.start_entry() {
        print_kv(
            "Minimax value",
            &format!("{} ({})", entry.value, describe_value(entry.value)),
        );
        let action = entry
            .action
            .map(|action| action.to_string())
            .unwrap_or_else(|| "none (terminal)".to_string());
        print_kv("Best action", &action);
    }

    if let Some(path) = args.export {
        let rows = PolicyCsvExporter::export(&table, &path)?;
        println!("\nPolicy table ({rows} states) exported to: {}", path.display());
    }

    Ok(())
}
