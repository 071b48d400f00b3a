//! Output formatting and progress bars for CLI

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::hexapawn::State;

/// Create a spinner for solver tasks
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| anyhow!("Invalid spinner template: {e}"))?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented under the current section, with the side to move
pub fn print_board(state: &State) {
    for line in state.to_string().lines() {
        println!("    {line}");
    }
    println!("    ({} to move)", state.to_move);
}

/// Human-readable minimax value
pub fn describe_value(value: i8) -> &'static str {
    match value {
        1 => "White wins",
        -1 => "Black wins",
        _ => "draw",
    }
}

/// Format a vector of network outputs with two decimals
pub fn format_outputs(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|v| format!("{v:5.2}")).collect();
    format!("[{}]", cells.join(", "))
}
