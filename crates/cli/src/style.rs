//! Terminal colors for the decorated report.

use colored::Colorize;
use deck_core::{Styler, Tone};

/// Colors report output with ANSI escapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColorStyle;

impl Styler for ColorStyle {
    fn paint(&self, tone: Tone, text: &str) -> String {
        let styled = match tone {
            Tone::Frame => text.cyan(),
            Tone::Title => text.cyan().bold(),
            Tone::Subtitle => text.yellow(),
            Tone::Success => text.green(),
            Tone::Error => text.red(),
            Tone::IssueHeader => text.white().bold(),
            Tone::TypeLabel => text.yellow().bold(),
            Tone::ConflictLabel => text.red().bold(),
            Tone::EvidenceLabel => text.cyan().bold(),
            Tone::Bullet => text.white(),
        };
        styled.to_string()
    }
}
