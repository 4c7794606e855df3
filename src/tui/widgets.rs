//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A horizontal bar showing how many clues point at one suspect
pub struct TallyBar {
    label: String,
    value: usize,
    max: usize,
    color: Color,
}

impl TallyBar {
    pub fn new(label: &str, value: usize, max: usize) -> Self {
        Self {
            label: label.to_string(),
            value,
            max: max.max(1),
            color: Color::Cyan,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for TallyBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let plural = if self.value == 1 { "clue" } else { "clues" };
        let label = format!("{}: {} {}", self.label, self.value, plural);
        buf.set_string(area.x, area.y, &label, Style::default().fg(self.color));

        // Render bar if there's room
        if area.height > 1 {
            let filled = ((self.value * (area.width as usize - 2)) / self.max) as u16;
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled.min(area.width - 2) {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(self.color));
            }
            for x in filled..(area.width - 2) {
                buf.set_string(
                    area.x + 1 + x,
                    bar_y,
                    "░",
                    Style::default().fg(Color::DarkGray),
                );
            }
        }
    }
}

/// Double-bordered box for the final verdict
pub struct VerdictBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl VerdictBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Magenta,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for VerdictBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let style = Style::default().fg(self.border_color);

        // Top border
        buf.set_string(area.x, area.y, "╔", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y, "═", style);
        }
        buf.set_string(area.x + area.width - 1, area.y, "╗", style);

        // Centered title
        let title_start = (area.width as usize).saturating_sub(self.title.len() + 2) / 2;
        buf.set_string(
            area.x + title_start as u16,
            area.y,
            format!(" {} ", self.title),
            style,
        );

        // Sides
        for y in 1..area.height - 1 {
            buf.set_string(area.x, area.y + y, "║", style);
            buf.set_string(area.x + area.width - 1, area.y + y, "║", style);
        }

        // Bottom border
        buf.set_string(area.x, area.y + area.height - 1, "╚", style);
        for x in 1..area.width - 1 {
            buf.set_string(area.x + x, area.y + area.height - 1, "═", style);
        }
        buf.set_string(area.x + area.width - 1, area.y + area.height - 1, "╝", style);

        // Content
        for (i, line) in self.content.iter().enumerate() {
            if (i as u16) + 1 < area.height - 1 {
                buf.set_string(
                    area.x + 2,
                    area.y + 1 + i as u16,
                    line,
                    Style::default().fg(Color::White),
                );
            }
        }
    }
}
