//! Detective Quest
//!
//! A terminal mansion mystery: explore the rooms, collect the clues,
//! and work out which suspect the evidence points at.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> detective_quest::Result<()> {
    let mut terminal = setup_terminal()?;
    let outcome = run(&mut terminal);
    restore_terminal(terminal)?;
    outcome?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!                   ║");
    println!("║                                                        ║");
    println!("║  The mansion keeps its secrets, detective.             ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}

fn run(terminal: &mut Term) -> detective_quest::Result<()> {
    let mut app = App::new()?;
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}

fn setup_terminal() -> detective_quest::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

// Restore the terminal even when the game loop bails out, so an error
// does not leave the shell in raw mode.
fn restore_terminal(mut terminal: Term) -> detective_quest::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
