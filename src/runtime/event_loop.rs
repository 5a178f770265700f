use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Control};
use crate::audio::AudioEngine;
use crate::config;
use crate::ui::{self, ScreenLayout};

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Layout of the last drawn frame; mouse clicks are resolved against it.
    pub layout: ScreenLayout,
}

/// Main terminal event loop: draws the screen and routes keys and clicks to
/// the app. Returns `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::default();

    while !app.should_quit {
        terminal.draw(|f| state.layout = ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, app);
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &state),
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_key_event<E: AudioEngine>(key: KeyEvent, app: &mut App<E>) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => {
            app.activate(Control::PlayPause, 0.0)
        }
        KeyCode::Char('1') => app.activate(Control::Track(0), 0.0),
        KeyCode::Char('2') => app.activate(Control::Track(1), 0.0),
        KeyCode::Left | KeyCode::Char('h') => app.slider_left(),
        KeyCode::Right | KeyCode::Char('l') => app.slider_right(),
        _ => {}
    }
}

fn handle_mouse_event<E: AudioEngine>(mouse: MouseEvent, app: &mut App<E>, state: &EventLoopState) {
    let pressed = matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    );
    if !pressed {
        return;
    }
    if let Some((control, fraction)) = state.layout.hit(mouse.column, mouse.row) {
        // Dragging only makes sense on the slider.
        if control == Control::Slider || matches!(mouse.kind, MouseEventKind::Down(_)) {
            tracing::debug!(?control, "activated");
            app.activate(control, fraction);
        }
    }
}
