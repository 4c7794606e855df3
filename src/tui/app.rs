//! Main application state and rendering

use crate::data::Notice;
use crate::game::case::create_manor_case;
use crate::game::{ExploreCommand, Game, GameMessage};
use crate::tui::widgets::{TallyBar, VerdictBox};
use crate::tui::{
    create_content_layout, create_main_area_layout, create_main_layout, notice_color,
    styled_block, Theme, HELP_TEXT, LOGO, SMALL_LOGO,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Entries of the main menu
const MENU_ITEMS: [&str; 5] = [
    "Explore the mansion",
    "Collected clues",
    "Suspect relations",
    "Final analysis",
    "Quit",
];

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    /// Recent lines shown in the exploration feed
    pub feed: Vec<String>,
    verdict_announced: bool,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Exploring,
    Clues,
    Suspects,
    Analysis,
}

impl App {
    pub fn new() -> crate::Result<Self> {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        let game = Game::new(create_manor_case())?;

        Ok(Self {
            game,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            feed: vec!["The case file is open. Choose where to begin.".to_string()],
            verdict_announced: false,
        })
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(true);
                }

                if key.code == KeyCode::Char('?') {
                    self.show_help = !self.show_help;
                    return Ok(true);
                }
                if self.show_help {
                    if key.code == KeyCode::Esc {
                        self.show_help = false;
                    }
                    return Ok(true);
                }

                match self.current_screen {
                    Screen::MainMenu => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            self.running = false;
                            return Ok(false);
                        }
                        KeyCode::Up => self.navigate_up(),
                        KeyCode::Down => self.navigate_down(),
                        KeyCode::Enter => self.select_menu_item(),
                        _ => {}
                    },
                    Screen::Exploring => match key.code {
                        KeyCode::Left | KeyCode::Char('a') => {
                            self.explore(ExploreCommand::GoLeft);
                        }
                        KeyCode::Right | KeyCode::Char('d') => {
                            self.explore(ExploreCommand::GoRight);
                        }
                        KeyCode::Char('b') | KeyCode::Backspace => {
                            self.explore(ExploreCommand::Back);
                        }
                        KeyCode::Char('c') => {
                            self.explore(ExploreCommand::ViewClues);
                        }
                        KeyCode::Esc => {
                            self.explore(ExploreCommand::End);
                            self.current_screen = Screen::MainMenu;
                        }
                        _ => {}
                    },
                    Screen::Clues | Screen::Suspects | Screen::Analysis => match key.code {
                        KeyCode::Esc | KeyCode::Enter => {
                            self.current_screen = Screen::MainMenu;
                        }
                        _ => {}
                    },
                }
            }
        }
        Ok(true)
    }

    fn navigate_up(&mut self) {
        let selected = self.menu_state.selected().unwrap_or(0);
        let next = if selected == 0 {
            MENU_ITEMS.len() - 1
        } else {
            selected - 1
        };
        self.menu_state.select(Some(next));
    }

    fn navigate_down(&mut self) {
        let selected = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some((selected + 1) % MENU_ITEMS.len()));
    }

    fn select_menu_item(&mut self) {
        match self.menu_state.selected() {
            Some(0) => {
                if self.game.exploration.has_ended() {
                    self.game.start_exploration();
                }
                let here = self
                    .game
                    .mansion
                    .room(self.game.exploration.current_room())
                    .name
                    .clone();
                self.push_feed(format!("You are in: {here}"));
                self.current_screen = Screen::Exploring;
            }
            Some(1) => self.current_screen = Screen::Clues,
            Some(2) => self.current_screen = Screen::Suspects,
            Some(3) => {
                if self.game.clues.is_empty() {
                    self.game.add_message(GameMessage::tagged(
                        Notice::Warning,
                        "Analysis",
                        "No clues collected yet. Explore the mansion first.",
                    ));
                } else if !self.verdict_announced {
                    if let Some(prime) = self.game.ledger.prime_suspect() {
                        let note = format!(
                            "Prime suspect: {} ({} clues on file)",
                            prime.suspect, prime.clue_count
                        );
                        self.game
                            .add_message(GameMessage::tagged(Notice::Verdict, "Analysis", &note));
                        self.verdict_announced = true;
                    }
                }
                self.current_screen = Screen::Analysis;
            }
            Some(4) => self.running = false,
            _ => {}
        }
    }

    fn explore(&mut self, command: ExploreCommand) {
        for line in self.game.execute(command) {
            self.push_feed(line);
        }
        if self.game.exploration.has_ended() {
            self.current_screen = Screen::MainMenu;
        }
    }

    fn push_feed(&mut self, line: String) {
        self.feed.push(line);
        // Keep the feed manageable
        while self.feed.len() > 100 {
            self.feed.remove(0);
        }
    }

    /// Render the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = create_main_layout(frame.area());

        self.render_header(frame, chunks[0]);
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame, chunks[1]),
            Screen::Exploring => self.render_exploring(frame, chunks[1]),
            Screen::Clues => self.render_clues(frame, chunks[1]),
            Screen::Suspects => self.render_suspects(frame, chunks[1]),
            Screen::Analysis => self.render_analysis(frame, chunks[1]),
        }
        self.render_status(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default()
                    .fg(self.theme.header)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.game.case_title.clone(),
                Style::default().fg(self.theme.fg),
            ),
        ]);
        let header = Paragraph::new(line)
            .block(styled_block("Case", &self.theme))
            .alignment(Alignment::Left);
        frame.render_widget(header, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.current_screen {
            Screen::MainMenu => "↑/↓ select · Enter confirm · ? help · q quit",
            Screen::Exploring => "←/→ move · b back · c clues · Esc end · ? help",
            Screen::Clues | Screen::Suspects | Screen::Analysis => "Esc back · ? help",
        };
        let line = Line::from(vec![
            Span::styled(self.game.check_status(), Style::default().fg(self.theme.fg)),
            Span::styled(
                format!("   {hint}"),
                Style::default().fg(self.theme.dim),
            ),
        ]);
        let status = Paragraph::new(line).block(styled_block("Status", &self.theme));
        frame.render_widget(status, area);
    }

    fn render_main_menu(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(7)])
            .split(area);

        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let items: Vec<ListItem> = MENU_ITEMS.iter().map(|item| ListItem::new(*item)).collect();
        let menu = List::new(items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("» ");
        frame.render_stateful_widget(menu, body[0], &mut self.menu_state);

        let briefing = Paragraph::new(self.game.briefing.clone())
            .block(styled_block("Briefing", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(briefing, body[1]);
    }

    fn render_exploring(&self, frame: &mut Frame, area: Rect) {
        let chunks = create_content_layout(area);
        self.render_room_panel(frame, chunks[0]);

        let main = create_main_area_layout(chunks[1]);
        self.render_feed(frame, main[0]);
        self.render_journal(frame, main[1]);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let room = self.game.mansion.room(self.game.exploration.current_room());

        let passage = |label: &str, target: Option<crate::data::RoomId>| -> Line<'static> {
            match target {
                Some(id) => Line::from(format!("{label} {}", self.game.mansion.room(id).name)),
                None => Line::from(Span::styled(
                    format!("{label} no passage"),
                    Style::default().fg(self.theme.dim),
                )),
            }
        };

        let mut lines = vec![
            Line::from(Span::styled(
                room.name.clone(),
                Style::default()
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            passage("←", room.left),
            passage("→", room.right),
            Line::from(""),
            Line::from(format!("Depth: {}", self.game.exploration.depth())),
            Line::from(format!("Clues noted: {}", self.game.clues.len())),
        ];
        if self.game.exploration.at_dead_end(&self.game.mansion) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "End of this path",
                Style::default().fg(self.theme.warning),
            )));
        }

        let panel = Paragraph::new(lines)
            .block(styled_block("Room", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }

    fn render_feed(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .feed
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|line| Line::from(line.clone()))
            .collect();

        let feed = Paragraph::new(lines)
            .block(styled_block("Exploration", &self.theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(feed, area);
    }

    fn render_journal(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .game
            .journal
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp.format("%H:%M")),
                        Style::default().fg(self.theme.dim),
                    ),
                    Span::styled(
                        format!("{} ", entry.notice.symbol()),
                        Style::default().fg(notice_color(&entry.notice)),
                    ),
                    Span::styled(
                        format!("[{}] ", entry.source),
                        Style::default().fg(self.theme.accent),
                    ),
                    Span::raw(entry.message.clone()),
                ])
            })
            .collect();

        let journal = Paragraph::new(lines).block(styled_block("Journal", &self.theme));
        frame.render_widget(journal, area);
    }

    fn render_clues(&self, frame: &mut Frame, area: Rect) {
        if self.game.clues.is_empty() {
            let empty = Paragraph::new("No clues collected yet. Explore the mansion first.")
                .block(styled_block("Collected Clues", &self.theme))
                .style(Style::default().fg(self.theme.dim));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .game
            .clues
            .iter()
            .map(|clue| {
                ListItem::new(Line::from(vec![
                    Span::styled("◆ ", Style::default().fg(self.theme.clue)),
                    Span::raw(clue.to_string()),
                ]))
            })
            .collect();

        let title = format!("Collected Clues ({})", self.game.clues.len());
        let list = List::new(items).block(styled_block(&title, &self.theme));
        frame.render_widget(list, area);
    }

    fn render_suspects(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .game
            .ledger
            .iter()
            .map(|(clue, suspect)| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{clue} ")),
                    Span::styled("-> ", Style::default().fg(self.theme.dim)),
                    Span::styled(
                        suspect.to_string(),
                        Style::default().fg(self.theme.accent),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(styled_block("Clues -> Suspects", &self.theme));
        frame.render_widget(list, area);
    }

    fn render_analysis(&self, frame: &mut Frame, area: Rect) {
        let block = styled_block("Final Analysis", &self.theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.game.clues.is_empty() {
            let warning = Paragraph::new("You have not collected any clues yet.\nExplore the mansion first.")
                .style(Style::default().fg(self.theme.warning))
                .alignment(Alignment::Center);
            frame.render_widget(warning, inner);
            return;
        }

        let report = self.game.case_report();
        let max = report
            .tallies
            .iter()
            .map(|tally| tally.clue_count)
            .max()
            .unwrap_or(1);

        let mut constraints: Vec<Constraint> = report
            .tallies
            .iter()
            .map(|_| Constraint::Length(2))
            .collect();
        constraints.push(Constraint::Min(7));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, tally) in report.tallies.iter().enumerate() {
            let is_prime = report
                .prime
                .as_ref()
                .map_or(false, |prime| prime.suspect == tally.suspect);
            let color = if is_prime {
                self.theme.verdict
            } else {
                self.theme.accent
            };
            let bar = TallyBar::new(&tally.suspect, tally.clue_count, max).color(color);
            frame.render_widget(bar, rows[i]);
        }

        if let Some(prime) = &report.prime {
            let verdict = VerdictBox::new("PRIME SUSPECT")
                .content(vec![
                    String::new(),
                    format!("   {}", prime.suspect),
                    format!("   {} clue(s) point this way", prime.clue_count),
                ])
                .border_color(self.theme.verdict);
            frame.render_widget(verdict, rows[report.tallies.len()]);
        }
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(67, 20, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}

/// A rect of the given size, centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
