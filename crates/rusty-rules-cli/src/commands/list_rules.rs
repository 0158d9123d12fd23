use anyhow::Result;
use colored::Colorize;
use rusty_rules::RuleSpec;

pub fn execute() -> Result<()> {
    println!("{}", "Available rules:".green().bold());
    for name in RuleSpec::NAMES {
        println!("  {}", name.cyan());
    }
    Ok(())
}
