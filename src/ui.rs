//! Terminal UI helpers.
//!
//! Provides styled output functions for consistent CLI feedback: the steep
//! progress bar, success/info/warning messages, the logo, and tea display.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::catalog::Tea;
use crate::duration;

// -----------------------------------------------------------------------------
// Output Helpers
// -----------------------------------------------------------------------------

const LOGO: &str = r"
      Tea Time(r)
         ____    ,-^-,
      ,|'----'|  * L *
     ((|      |  '-.-'
      \|      |
       |      |
       '------'
     ^^^^^^^^^^^^";

/// Create the 10-cell progress bar for a steep of `total`, positioned in
/// elapsed seconds.
pub fn create_steep_bar(total: Duration) -> ProgressBar {
    let bar = ProgressBar::new(total.as_secs());
    bar.set_style(
        ProgressStyle::default_bar()
            .template("Progress: [{bar:10}] {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    bar
}

/// Print a success message with green checkmark.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print an info message with blue arrow.
pub fn info(msg: &str) {
    println!("{} {}", "→".blue().bold(), msg);
}

/// Print a warning message with yellow exclamation.
pub fn warning(msg: &str) {
    println!("{} {}", "!".yellow().bold(), msg);
}

// -----------------------------------------------------------------------------
// Tea Display
// -----------------------------------------------------------------------------

/// Print the teapot logo.
pub fn print_logo() {
    println!("{LOGO}");
}

/// Print one tea's details.
pub fn print_tea(tea: &Tea) {
    field("ID:", tea.id);
    field("Name:", tea.name.cyan().bold());
    field("Type:", &tea.kind);
    field(
        "Steep time:",
        duration::format_human(tea.steep_duration()).yellow(),
    );
    field("Temperature:", format!("{}\u{b0}", tea.temp));
}

/// Print the whole catalog, one tea per block.
pub fn print_teas(teas: &[Tea]) {
    for (i, tea) in teas.iter().enumerate() {
        if i != 0 {
            println!("------");
        }
        print_tea(tea);
    }
}

fn field(label: &str, value: impl std::fmt::Display) {
    // Pad before coloring; escape codes would throw off the width.
    println!("{} {}", format!("{label:<13}").dimmed(), value);
}
