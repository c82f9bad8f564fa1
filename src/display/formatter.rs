//! Report printing using termimad

use std::io::{self, Write};

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print a command report to the terminal with styling (or plain fallback)
pub fn print_report(report: &str) {
    if should_use_colors() {
        if let Err(e) = print_rich(report) {
            tracing::warn!(error = %e, "terminal rendering failed, using plain output");
            print_plain(report);
        }
    } else {
        print_plain(report);
    }
}

/// Print with termimad styling
fn print_rich(report: &str) -> Result<(), termimad::Error> {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.write_text(report)
}

/// Customize termimad skin for the robot persona
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::Color::White;

    skin.paragraph.set_fg(White);
}

fn print_plain(report: &str) {
    if let Err(e) = write_plain(&mut io::stdout().lock(), report) {
        tracing::warn!(error = %e, "failed to write report");
    }
}

fn write_plain(out: &mut impl Write, report: &str) -> io::Result<()> {
    writeln!(out, "{}", report)
}
