use colored::Colorize;
use ntd_core::{DieSet, ProbabilityMatrix};

use crate::table::probability_table;

pub fn run(dice: &DieSet, format: &str) -> Result<(), String> {
    let odds = ProbabilityMatrix::compute(dice);
    tracing::debug!(dice = dice.len(), format, "computed probability matrix");

    match format {
        "table" => print_table(dice, &odds),
        "json" => print_json(dice, &odds),
        other => Err(format!("unknown format '{other}'. Supported: table, json")),
    }
}

fn print_table(dice: &DieSet, odds: &ProbabilityMatrix) -> Result<(), String> {
    println!("  {}", "Probability that the row die beats the column die".bold());
    println!("{}", probability_table(dice, odds));
    println!("  Diagonal cells show the chance of a tie against an identical die.");
    println!();

    for (i, die) in dice.iter().enumerate() {
        if let Some(counter) = odds.best_counter(i) {
            let counter_die = dice.get(counter).map_err(|e| e.to_string())?;
            println!(
                "  Best answer to [{die}]: [{counter_die}] wins {:.4}",
                odds.win(counter, i)
            );
        }
    }
    println!();

    if odds.is_non_transitive() {
        println!("  This set is {}: no die is safe from every other.", "non-transitive".bold());
    } else {
        println!("  This set is transitive: the \"beats\" relation has no cycle.");
    }
    Ok(())
}

fn print_json(dice: &DieSet, odds: &ProbabilityMatrix) -> Result<(), String> {
    let doc = serde_json::json!({
        "dice": dice,
        "win": odds.win_rows(),
        "tie": odds.tie_rows(),
        "non_transitive": odds.is_non_transitive(),
    });
    let json = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
