//! Terminal output for plan and timeline markdown.
//!
//! Timeline outlines nest rows as headings: `#` for the grouping, `##` for a
//! plant type or location, `###` and deeper for plant rows. Rich output
//! colours each depth differently and keeps the hash marks so the nesting
//! stays readable; body lines go through termimad.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Colour for a heading of the given depth.
fn heading_color(level: usize) -> Color {
    match level {
        1 => Color::Green,
        2 => Color::Cyan,
        _ => Color::White,
    }
}

/// Number of leading `#` marks, or `None` for a body line.
fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|c| *c == '#').count();
    (level > 0).then_some(level)
}

/// Prints markdown either styled or verbatim (`--no-color`).
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match heading_level(line) {
                Some(level) => println!("{}", line.with(heading_color(level)).bold()),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}
