use std::env;
use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::RodioEngine;
use crate::bundle::{Bundle, resolve_bundle_dir};
use crate::playback::Controller;

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.log);

    let bundle_dir = resolve_bundle_dir(env::args().nth(1), &settings.bundle);
    tracing::info!(bundle = %bundle_dir.display(), "starting");
    let bundle = Bundle::new(bundle_dir, &settings.bundle);

    let engine = RodioEngine::open_default()
        .map_err(|e| format!("no audio output device: {e}"))?;
    let labels = settings::selector_labels(&settings.ui);
    let mut app = App::new(Controller::new(engine, bundle), labels, settings.ui.slider_step);
    if !app.controller.has_voice() {
        tracing::warn!("no playable track at startup");
    }

    enable_raw_mode()?;
    let mut terminal = or_restore(enter_terminal(), restore_terminal)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");
    run_result
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best-effort undo of raw mode, alternate screen and mouse capture.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

/// Run `restore` before handing back a failed setup step.
fn or_restore<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_setup_restores_the_terminal() {
        let restored = Cell::new(false);
        let result: Result<(), io::Error> =
            or_restore(Err(io::Error::other("no tty")), || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_the_terminal_alone() {
        let restored = Cell::new(false);
        let result: Result<u8, io::Error> = or_restore(Ok(7), || restored.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
