use std::fs;

use tempfile::{TempDir, tempdir};

use super::*;
use crate::audio::Transport;
use crate::audio::fake::FakeEngine;
use crate::bundle::Bundle;
use crate::config::BundleSettings;
use crate::playback::Controller;

fn app_with(names: &[&str]) -> (App<FakeEngine>, TempDir) {
    let dir = tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(format!("{name}.mp3")), b"x").unwrap();
    }
    let bundle = Bundle::new(dir.path(), &BundleSettings::default());
    let controller = Controller::new(FakeEngine::default(), bundle);
    let app = App::new(controller, ["First".into(), "Second".into()], 0.5);
    (app, dir)
}

#[test]
fn startup_loads_first_track_paused() {
    let (app, _dir) = app_with(&["1", "2"]);
    assert_eq!(app.title, ButtonTitle::Play);
    assert_eq!(app.controller.current_index(), 0);
    assert!(app.controller.has_voice());
    assert_eq!(app.controller.transport(), Transport::Stopped);
}

#[test]
fn play_pause_tap_flips_title() {
    let (mut app, _dir) = app_with(&["1", "2"]);

    app.on_play_pause();
    assert_eq!(app.title.as_str(), "Pause");
    assert_eq!(app.controller.transport(), Transport::Playing);

    app.on_play_pause();
    assert_eq!(app.title.as_str(), "Play");
    assert_eq!(app.controller.transport(), Transport::Stopped);
}

#[test]
fn selecting_a_track_always_plays() {
    let (mut app, _dir) = app_with(&["1", "2"]);

    // From stopped.
    app.on_track_selected(1);
    assert_eq!(app.title, ButtonTitle::Pause);
    assert_eq!(app.controller.transport(), Transport::Playing);
    assert_eq!(app.controller.current_track(), "2");

    // From playing.
    app.on_track_selected(0);
    assert_eq!(app.title, ButtonTitle::Pause);
    assert_eq!(app.controller.transport(), Transport::Playing);
    assert_eq!(app.controller.current_track(), "1");
}

#[test]
fn selecting_missing_track_resumes_the_loaded_one() {
    let (mut app, _dir) = app_with(&["1"]);

    app.on_track_selected(1);

    assert_eq!(app.controller.current_index(), 0);
    assert_eq!(app.controller.transport(), Transport::Playing);
    assert_eq!(app.title, ButtonTitle::Pause);
}

#[test]
fn empty_bundle_never_claims_to_play() {
    let (mut app, _dir) = app_with(&[]);

    app.on_play_pause();
    assert_eq!(app.title, ButtonTitle::Play);
    app.on_track_selected(0);
    assert_eq!(app.title, ButtonTitle::Play);
    assert!(app.controller.last_error().is_some());
}

#[test]
fn activate_dispatches_by_control() {
    let (mut app, _dir) = app_with(&["1", "2"]);

    app.activate(Control::Track(1), 0.0);
    assert_eq!(app.controller.current_index(), 1);

    app.activate(Control::PlayPause, 0.0);
    assert_eq!(app.title, ButtonTitle::Play);

    app.activate(Control::Slider, 0.5);
    assert_eq!(app.fade.value(), 6.0);
    // The slider never touches playback.
    assert_eq!(app.controller.transport(), Transport::Stopped);
}

#[test]
fn fade_slider_stays_in_range() {
    let (mut app, _dir) = app_with(&["1", "2"]);
    assert_eq!(app.fade.value(), FadeSlider::MIN);

    app.slider_left();
    assert_eq!(app.fade.value(), FadeSlider::MIN);

    for _ in 0..100 {
        app.slider_right();
    }
    assert_eq!(app.fade.value(), FadeSlider::MAX);
    assert_eq!(app.fade.fraction(), 1.0);

    app.fade.set_fraction(-3.0);
    assert_eq!(app.fade.value(), FadeSlider::MIN);
}
