//! Screen geometry: where each control sits for a given viewport.
//!
//! Proportions are expressed against a portrait screen of width `W` and
//! height `H` (both in terminal cells). `cell_aspect` corrects for cells
//! being taller than they are wide.

use ratatui::layout::{Position, Rect};

use crate::app::Control;

/// Gap between the two selector buttons, in columns.
const SELECTOR_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub play_button: Rect,
    pub selector_row: Rect,
    pub selectors: [Rect; 2],
    pub slider: Rect,
}

fn scaled(v: u16, factor: f32) -> u16 {
    (v as f32 * factor).round() as u16
}

/// Largest region of `area` whose physical height/width is `portrait_ratio`,
/// centred in `area`.
pub fn viewport(area: Rect, cell_aspect: f32, portrait_ratio: f32) -> Rect {
    let rows_per_col = portrait_ratio / cell_aspect;
    let width = (area.width as f32).min(area.height as f32 / rows_per_col);
    let height = (width * rows_per_col).min(area.height as f32);

    let width = width.floor() as u16;
    let height = height.floor() as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Lay out the play button, the selector row and the slider inside `screen`.
pub fn build_layout(screen: Rect, cell_aspect: f32) -> ScreenLayout {
    let w = screen.width;
    let h = screen.height;
    let gap = scaled(h, 0.05);

    let side = scaled(w, 0.8);
    let side_rows = ((side as f32 / cell_aspect).round() as u16).max(1);
    let play_button = Rect {
        x: screen.x + (w - side) / 2,
        y: screen.y.saturating_add(scaled(h, 0.2)),
        width: side,
        height: side_rows,
    };

    let selector_row = Rect {
        x: screen.x,
        y: play_button.bottom().saturating_add(gap),
        width: w,
        height: gap.max(1),
    };
    // Both buttons get the same width; an odd spare column stays at the right edge.
    let button_width = w.saturating_sub(SELECTOR_GAP) / 2;
    let left = Rect {
        width: button_width,
        ..selector_row
    };
    let right = Rect {
        x: (left.right() + SELECTOR_GAP).min(selector_row.right()),
        width: button_width,
        ..selector_row
    };

    let inset = scaled(w, 0.05);
    let slider = Rect {
        x: screen.x + inset.min(w / 2),
        y: selector_row.bottom().saturating_add(gap),
        width: w.saturating_sub(inset * 2),
        height: 1,
    };

    ScreenLayout {
        play_button: play_button.intersection(screen),
        selector_row: selector_row.intersection(screen),
        selectors: [left.intersection(screen), right.intersection(screen)],
        slider: slider.intersection(screen),
    }
}

impl ScreenLayout {
    /// Which control sits under cell (`column`, `row`), with the horizontal
    /// position inside it as a fraction.
    pub fn hit(&self, column: u16, row: u16) -> Option<(Control, f32)> {
        let pos = Position::new(column, row);
        let targets = [
            (Control::PlayPause, self.play_button),
            (Control::Track(0), self.selectors[0]),
            (Control::Track(1), self.selectors[1]),
            (Control::Slider, self.slider),
        ];
        targets
            .into_iter()
            .find(|(_, rect)| !rect.is_empty() && rect.contains(pos))
            .map(|(control, rect)| {
                let span = rect.width.saturating_sub(1).max(1) as f32;
                (control, (column - rect.x) as f32 / span)
            })
    }
}
