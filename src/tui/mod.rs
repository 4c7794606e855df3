//! Terminal User Interface
//!
//! TUI for the mansion mystery using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Notice;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub clue: Color,
    pub warning: Color,
    pub verdict: Color,
    pub dim: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            clue: Color::Green,
            warning: Color::Yellow,
            verdict: Color::Magenta,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a journal notice
pub fn notice_color(notice: &Notice) -> Color {
    match notice {
        Notice::Info => Color::Gray,
        Notice::Discovery => Color::Green,
        Notice::Warning => Color::Yellow,
        Notice::Verdict => Color::Magenta,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔═══════════════════════════════════════════════════╗
║                                                   ║
║      D E T E C T I V E    Q U E S T               ║
║                                                   ║
║      A murder in the mansion on the hill.         ║
║      Search the rooms. Follow the clues.          ║
║      Name the culprit.                            ║
║                                                   ║
╚═══════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓   Navigate the menu                                      ║
║  Enter Select option / Confirm                                ║
║  Esc   Go back / End exploration                              ║
║  ?     Toggle this help                                       ║
║  q     Quit (from the main menu)                              ║
╠═══════════════════════════════════════════════════════════════╣
║                      EXPLORING                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ←/a   Take the left passage                                  ║
║  →/d   Take the right passage                                 ║
║  b     Step back towards the entrance                         ║
║  c     Review collected clues                                 ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the exploration layout (side panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Room panel
            Constraint::Percentage(70),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (feed + journal)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Feed of recent events
            Constraint::Percentage(40),  // Case journal
        ])
        .split(area)
        .to_vec()
}
