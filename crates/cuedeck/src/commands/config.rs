use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    println!();
    println!("  {}", "cuedeck configuration".bold());
    println!("  {}", path.display().to_string().dimmed());
    println!();
    print_value("defaults.theme", defaults.theme.as_deref(), "light");
    print_value("defaults.start_mode", defaults.start_mode.as_deref(), "first");
    print_value(
        "defaults.autoplay",
        defaults.autoplay.map(|v| v.to_string()).as_deref(),
        "false",
    );
    print_value(
        "defaults.swipe_threshold",
        defaults.swipe_threshold.map(|v| v.to_string()).as_deref(),
        "60",
    );
    println!();
    Ok(())
}

fn print_value(key: &str, value: Option<&str>, default: &str) {
    match value {
        Some(v) => println!("  {:<26} {}", key, v.bold()),
        None => println!("  {:<26} {} {}", key, default, "(default)".dimmed()),
    }
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value}",
        "Saved".green().bold()
    );
    log::debug!("config written to {}", path.display());
    Ok(())
}
