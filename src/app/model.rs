//! Application model types: `App`, `Control`, `ButtonTitle` and `FadeSlider`.

use crate::audio::{AudioEngine, Transport};
use crate::playback::Controller;

/// Identifies one of the on-screen controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    /// A track selector; the payload is its tag (track index).
    Track(usize),
    Slider,
}

/// Text shown on the big play button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ButtonTitle {
    #[default]
    Play,
    Pause,
}

impl ButtonTitle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

impl From<Transport> for ButtonTitle {
    fn from(t: Transport) -> Self {
        match t {
            Transport::Playing => Self::Pause,
            Transport::Stopped => Self::Play,
        }
    }
}

/// The fade-duration slider. Its value is shown but not used by playback.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FadeSlider {
    value: f32,
}

impl FadeSlider {
    pub const MIN: f32 = 2.0;
    pub const MAX: f32 = 10.0;

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(Self::MIN, Self::MAX);
    }

    pub fn nudge(&mut self, delta: f32) {
        self.set(self.value + delta);
    }

    /// Position of the value within the range, `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        (self.value - Self::MIN) / (Self::MAX - Self::MIN)
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        let f = fraction.clamp(0.0, 1.0);
        self.set(Self::MIN + f * (Self::MAX - Self::MIN));
    }
}

impl Default for FadeSlider {
    fn default() -> Self {
        Self { value: Self::MIN }
    }
}

/// The main application model.
pub struct App<E: AudioEngine> {
    pub controller: Controller<E>,
    pub title: ButtonTitle,
    pub fade: FadeSlider,
    pub selector_labels: [String; 2],
    pub slider_step: f32,
    pub should_quit: bool,
}

impl<E: AudioEngine> App<E> {
    /// Create the model and load the first track, paused.
    pub fn new(controller: Controller<E>, selector_labels: [String; 2], slider_step: f32) -> Self {
        let mut app = Self {
            controller,
            title: ButtonTitle::Play,
            fade: FadeSlider::default(),
            selector_labels,
            slider_step,
            should_quit: false,
        };
        app.controller.load(0);
        app
    }

    pub fn on_play_pause(&mut self) {
        self.title = self.controller.toggle().into();
    }

    /// Load track `tag` and start whatever voice is loaded afterwards.
    pub fn on_track_selected(&mut self, tag: usize) {
        self.controller.load(tag);
        self.title = self.controller.play().into();
    }

    /// Route a click on `control`; `fraction` is the horizontal click
    /// position inside the control and only matters for the slider.
    pub fn activate(&mut self, control: Control, fraction: f32) {
        match control {
            Control::PlayPause => self.on_play_pause(),
            Control::Track(tag) => self.on_track_selected(tag),
            Control::Slider => self.fade.set_fraction(fraction),
        }
    }

    pub fn slider_left(&mut self) {
        self.fade.nudge(-self.slider_step);
        tracing::trace!(fade = self.fade.value(), "fade slider moved");
    }

    pub fn slider_right(&mut self) {
        self.fade.nudge(self.slider_step);
        tracing::trace!(fade = self.fade.value(), "fade slider moved");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
