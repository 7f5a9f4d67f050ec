use clap::CommandFactory;
use clap_complete::{Shell as CompletionShell, generate};

use crate::cli::{Cli, Shell};

pub fn run(shell: Shell) {
    let target = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::Powershell => CompletionShell::PowerShell,
    };
    let mut cmd = Cli::command();
    generate(target, &mut cmd, "cuedeck", &mut std::io::stdout());
}
