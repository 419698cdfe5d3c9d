//! List rules command implementation.

use doculint_rules::{all_rules, ViolationKind};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rule sets:\n");

    for rule in all_rules() {
        println!("  {} ({}) - {}", rule.name(), rule.code(), rule.description());
    }

    println!("\n{:<10} Name", "Code");
    println!("{}", "-".repeat(40));
    for kind in ViolationKind::ALL {
        println!("{:<10} {}", kind.code(), kind.name());
    }

    println!("\nDisable or re-grade a rule set in doculint.toml, e.g.:");
    println!("  [rules.doculint]");
    println!("  severity = \"warning\"");
}
