//! Semantic style builders

use jobdash_app::screen::RunStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Key names in hint lines
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - the selected row of a list
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::STATUS_RED))
        .style(Style::default().bg(palette::POPUP_BG))
}

/// `(icon, label, style)` for a run's stream status
pub fn run_indicator(status: &RunStatus) -> (&'static str, &'static str, Style) {
    match status {
        RunStatus::Connecting => ("○", "Connecting", text_muted()),
        RunStatus::Streaming => (
            "●",
            "Running",
            status_green().add_modifier(Modifier::BOLD),
        ),
        RunStatus::Finished => ("✓", "Finished", Style::default().fg(palette::STATUS_BLUE)),
        RunStatus::Failed(_) => ("✗", "Failed", status_red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_indicator_labels() {
        assert_eq!(run_indicator(&RunStatus::Streaming).1, "Running");
        assert_eq!(run_indicator(&RunStatus::Finished).1, "Finished");
        assert_eq!(run_indicator(&RunStatus::Failed("x".into())).1, "Failed");
    }
}
