use std::fmt::Display;

use clap::ValueEnum;
use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when the stream is a terminal that supports it
    #[default]
    Auto,
    Always,
    Never,
}

/// Configures terminal styling. Call once, before anything is printed.
pub fn init(choice: ColorChoice) {
    let enabled = match choice {
        ColorChoice::Auto => return,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

pub fn header(text: impl Display) {
    println!("{}", style(text).blue());
}

pub fn success(text: impl Display) {
    println!("{}", style(format!("✓ {text}")).green());
}

pub fn failure(text: impl Display) {
    println!("{}", style(format!("✗ {text}")).red());
}

pub fn notice(text: impl Display) {
    println!("{}", style(text).yellow().bold());
}

/// Writes `Error: <message>` to stderr.
pub fn error(message: impl Display) {
    eprintln!("{}", style(format!("Error: {message}")).for_stderr().red());
}

pub fn emphasis<D>(value: D) -> console::StyledObject<D> {
    style(value).yellow().bold()
}

pub fn highlight<D>(value: D) -> console::StyledObject<D> {
    style(value).green()
}
