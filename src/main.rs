use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use multiplication_drill::{
    draw_drill, draw_quit_confirmation, draw_summary, handle_drill_input, logger, AppState,
    Config, QuizSession, CONFIG_FILE,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    logger::init();
    let config = Config::load_or_default(Path::new(CONFIG_FILE));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Drill;
    let mut session = QuizSession::new(config.rounds);
    session.start_round();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Drill => draw_drill(f, &session),
            AppState::GameOver => draw_summary(f, &session),
            AppState::QuitConfirm => draw_quit_confirmation(f),
        })?;

        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Drill => {
                    handle_drill_input(&mut session, key, &mut app_state);
                }
                AppState::GameOver => match key.code {
                    KeyCode::Char('r') => {
                        session.restart();
                        logger::log("restart: score reset");
                        app_state = AppState::Drill;
                    }
                    KeyCode::Char('c') => {
                        session.continue_with_score();
                        logger::log(&format!("continue: keeping score {}", session.score));
                        app_state = AppState::Drill;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::QuitConfirm => match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => break,
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Drill;
                    }
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
