//! Terminal implementation of the shell effects seam.

use colored::Colorize;
use syd_application::ShellEffects;

/// Shell effects mapped onto a terminal session.
#[derive(Debug, Default)]
pub struct TerminalShell;

impl ShellEffects for TerminalShell {
    fn reset_scroll(&self) {
        // A committed transition starts a fresh block of output.
        println!("{}", "────────────────────────────────".bright_black());
    }

    fn open_url(&self, url: &str) {
        // No embedded browser: surface the link for the user to open.
        println!(
            "{} {}",
            "apri nel browser:".bright_yellow(),
            url.bright_blue().underline()
        );
    }
}
