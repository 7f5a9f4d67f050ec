mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod nav;
mod parser;
mod render;
mod theme;
mod watch;

use clap::Parser;
use colored::Colorize;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = cli.run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
