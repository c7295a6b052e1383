//! battle_tui - watch battle_core encounters play out in the terminal

mod app;
mod tween;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let mut app = match App::new() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to load scenario: {err}");
            return Ok(());
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Char('a'), _) => app.start_battle(),
                    (KeyCode::Char('s'), _) => app.save_report(),
                    (KeyCode::Char('r'), _) => app.back_to_roster(),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    _ => {}
                }
            }
        }

        // Tick the encounter with real elapsed time
        let now = Instant::now();
        let dt = now - last_frame;
        last_frame = now;
        app.tick(dt);
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
