use anyhow::{Context, Result};
use colored::Colorize;
use rusty_rules::{Config, ValidationErrors, ValuesMap};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Validate the values file against a form. `Ok(true)` when every field passes.
pub fn execute(config_path: &Path, form: &str, values_path: &Path, json: bool) -> Result<bool> {
    let errors = validate_file(config_path, form, values_path)?;

    if json {
        println!("{}", render_json(&errors)?);
    } else {
        print_report(form, &errors);
    }

    Ok(errors.is_valid())
}

/// Load the config, build the form's validator and run it over the values file.
pub fn validate_file(config_path: &Path, form: &str, values_path: &Path) -> Result<ValidationErrors> {
    if !config_path.exists() {
        anyhow::bail!("Config file not found: {:?}", config_path);
    }
    let config = Config::load(config_path)?;
    let validator = config.validator(form)?;

    let raw = read_values(values_path)?;
    let values = parse_values(&raw)
        .with_context(|| format!("Failed to parse values file: {:?}", values_path))?;

    tracing::info!(form, fields = values.len(), "validating");
    Ok(validator.validate(&values))
}

pub fn render_json(errors: &ValidationErrors) -> Result<String> {
    Ok(serde_json::to_string_pretty(errors)?)
}

fn read_values(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read values from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read values file: {:?}", path))
}

pub fn parse_values(raw: &str) -> Result<ValuesMap> {
    let values: ValuesMap = serde_json::from_str(raw)?;
    Ok(values)
}

fn print_report(form: &str, errors: &ValidationErrors) {
    if errors.is_valid() {
        println!("{} {}", "✓".green().bold(), format!("{} is valid", form).green());
        return;
    }

    println!(
        "{} {}",
        "✗".red().bold(),
        format!("{} has {} invalid field(s)", form, errors.len()).red()
    );
    for (field, message) in errors.iter() {
        println!("  {}: {}", field.yellow(), message);
    }
}
