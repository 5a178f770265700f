//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the single screen with `ratatui` and returns the
//! layout it used so clicks can be mapped back to controls.

mod layout;

pub use layout::{ScreenLayout, build_layout, viewport};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config::UiSettings;

const CONTROLS: [(&str, &str); 5] = [
    ("space/p", "play/pause"),
    ("1/2", "choose track"),
    ("←/→", "fade"),
    ("click", "tap"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// The row in the vertical middle of `r`, as a one-row rect.
fn middle_row(r: Rect) -> Rect {
    Rect {
        y: r.y + r.height / 2,
        height: r.height.min(1),
        ..r
    }
}

/// Build the slider bar for a track `width` cells wide with the thumb at `fraction`.
fn slider_line(width: u16, fraction: f32) -> Line<'static> {
    if width == 0 {
        return Line::default();
    }
    let last = width - 1;
    let thumb = ((fraction.clamp(0.0, 1.0) * last as f32).round() as u16).min(last);

    Line::from(vec![
        Span::styled("━".repeat(thumb as usize), Style::new().fg(Color::Rgb(255, 165, 0))),
        Span::styled("●", Style::new().fg(Color::Gray)),
        Span::styled(
            "─".repeat((last - thumb) as usize),
            Style::new().fg(Color::DarkGray),
        ),
    ])
}

/// Render the whole screen into `frame` and return the layout used.
pub fn draw<E: AudioEngine>(frame: &mut Frame, app: &App<E>, ui: &UiSettings) -> ScreenLayout {
    let area = frame.area();
    let (body, footer) = if area.height > 1 {
        (
            Rect {
                height: area.height - 1,
                ..area
            },
            Some(Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            }),
        )
    } else {
        (area, None)
    };

    let screen = viewport(body, ui.cell_aspect, ui.portrait_ratio);
    let layout = build_layout(screen, ui.cell_aspect);

    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), screen);

    let button_style = Style::new().bg(Color::DarkGray).fg(Color::Gray);

    // Play button
    let play_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(button_style);
    let inner = play_block.inner(layout.play_button);
    frame.render_widget(play_block, layout.play_button);
    frame.render_widget(
        Paragraph::new(app.title.as_str())
            .bold()
            .alignment(Alignment::Center),
        middle_row(inner),
    );

    // Track selectors; the row backdrop shows through the gap between them.
    frame.render_widget(
        Block::new().style(Style::new().bg(Color::Black)),
        layout.selector_row,
    );
    for (rect, label) in layout.selectors.iter().zip(&app.selector_labels) {
        frame.render_widget(Block::new().style(button_style), *rect);
        frame.render_widget(
            Paragraph::new(label.as_str())
                .style(button_style)
                .alignment(Alignment::Center),
            middle_row(*rect),
        );
    }

    // Fade slider
    frame.render_widget(
        Paragraph::new(slider_line(layout.slider.width, app.fade.fraction())),
        layout.slider,
    );

    if let Some(footer) = footer {
        frame.render_widget(
            Paragraph::new(controls_text()).fg(Color::DarkGray),
            footer,
        );
    }

    layout
}
