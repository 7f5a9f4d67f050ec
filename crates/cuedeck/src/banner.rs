use colored::Colorize;

pub fn print_banner_with_version() {
    println!();
    println!("  {}", "cuedeck".bold().cyan());
    println!("  {}", "markdown presentations with reveals".dimmed());
    println!();
    println!("  version {}", env!("CARGO_PKG_VERSION").bold());
    println!();
}
