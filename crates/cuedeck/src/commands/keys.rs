use colored::Colorize;

/// Print the keyboard reference, matching the in-app help overlay.
pub fn run() {
    let sections: [(&str, &[(&str, &str)]); 3] = [
        (
            "Navigation",
            &[
                ("N / Right", "Next reveal, then next slide"),
                ("P / Left", "Previous reveal, then previous slide"),
                ("Home / End", "First slide / last slide, fully revealed"),
                ("Alt+Left / Alt+Right", "History back / forward"),
                ("Swipe left / right", "Next / previous (touch)"),
            ],
        ),
        (
            "Views",
            &[
                ("G", "Toggle the grid overview"),
                ("Click", "Select a card in the overview"),
                ("F", "Toggle fullscreen"),
                ("D", "Toggle light/dark theme"),
                ("C", "Toggle the controls row"),
                ("H", "Toggle the diagnostics HUD"),
                ("K", "Toggle the help overlay"),
            ],
        ),
        (
            "Session",
            &[
                ("Q", "Quit"),
                ("Esc Esc", "Quit (double press)"),
                ("Ctrl+C Ctrl+C", "Quit (double press)"),
            ],
        ),
    ];

    println!();
    for (section, entries) in sections {
        println!("  {}", section.bold().cyan());
        for (key, desc) in entries {
            println!("    {:<22} {}", key.bold(), desc);
        }
        println!();
    }
    println!(
        "  {}",
        "Keys are suppressed while a form control, link, or media control has focus.".dimmed()
    );
    println!(
        "  {}",
        "Enter and Space are reserved for native activation and never intercepted.".dimmed()
    );
    println!();
}
