//! Styles command implementation.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::{Style, Theme};

/// List styles, their complexity and whether they can be rendered
#[derive(Args, Debug)]
pub struct StylesArgs {}

pub fn run(_args: StylesArgs, printer: &Printer) -> Result<()> {
    println!("{}", listing());

    let themes: Vec<&str> = Theme::ALL.iter().map(|t| t.name()).collect();
    printer.info("Themes", &themes.join(", "));

    Ok(())
}

/// One line per style: name, complexity, renderer available.
pub fn listing() -> String {
    Style::ALL
        .iter()
        .map(|style| {
            let ready = if style.is_implemented() { "yes" } else { "no" };
            format!("{:<14} {:.1}  {}", style.name(), style.complexity(), ready)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
