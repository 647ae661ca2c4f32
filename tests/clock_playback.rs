mod support;

use crossbeam_channel::{Receiver, unbounded};
use encore::{
    PlaybackController, Settings,
    player::{ClockTransport, MediaTransport, TransportEvent},
};
use std::{sync::Arc, time::Duration};
use support::RecordingDisplay;

type ClockController = PlaybackController<ClockTransport, RecordingDisplay>;

fn setup(config: &str) -> (ClockController, Receiver<TransportEvent>) {
    let settings: Settings = toml::from_str(config).unwrap();
    let (tx, rx) = unbounded();

    let transport = ClockTransport::new(tx, settings.source_profiles());
    let catalog = Arc::new(settings.catalog().unwrap());
    let controller = PlaybackController::new(
        transport,
        RecordingDisplay::default(),
        catalog,
        settings.initial_volume,
    );

    (controller, rx)
}

fn step(c: &mut ClockController, rx: &Receiver<TransportEvent>, secs: u64) {
    c.transport_mut().advance(Duration::from_secs(secs));
    pump(c, rx);
}

fn pump(c: &mut ClockController, rx: &Receiver<TransportEvent>) {
    for event in rx.try_iter() {
        c.handle_event(event);
    }
}

const TRACKS: &str = r#"
    [[tracks]]
    title = "Short"
    artist = "Band"
    source = "short.mp3"
    duration_secs = 5.0

    [[tracks]]
    title = "Locked"
    artist = "Band"
    source = "locked.mp3"
    duration_secs = 60.0
    blocked = true

    [[tracks]]
    title = "Broken"
    artist = "Band"
    source = "broken.mp3"
"#;

#[test]
fn plays_a_track_to_the_end() {
    let (mut c, rx) = setup(TRACKS);
    pump(&mut c, &rx);
    assert_eq!(c.display().total, "00:05");

    c.toggle();
    step(&mut c, &rx, 0);
    assert!(c.state().is_playing());

    step(&mut c, &rx, 2);
    assert_eq!(c.display().elapsed, "00:02");

    step(&mut c, &rx, 10);
    assert!(!c.state().is_playing());
    assert_eq!(c.position(), 0.0);
    assert_eq!(c.display().elapsed, "00:00");
}

#[test]
fn quick_double_toggle_never_leaves_transport_paused_while_playing() {
    let (mut c, rx) = setup(TRACKS);
    pump(&mut c, &rx);

    c.toggle();
    c.toggle();
    step(&mut c, &rx, 0);

    assert!(!c.state().is_playing());
    assert!(c.transport().is_paused());

    step(&mut c, &rx, 3);
    assert_eq!(c.position(), 0.0);
}

#[test]
fn blocked_source_surfaces_one_error() {
    let (mut c, rx) = setup(TRACKS);
    c.select_track(1).unwrap();
    pump(&mut c, &rx);

    c.toggle();
    step(&mut c, &rx, 0);

    assert!(!c.state().is_playing());
    assert_eq!(c.display().errors(), 1);
}

#[test]
fn broken_source_reports_load_error_and_stays_usable() {
    let (mut c, rx) = setup(TRACKS);
    c.select_track(2).unwrap();
    pump(&mut c, &rx);
    assert_eq!(c.display().errors(), 1);

    c.select_track(0).unwrap();
    pump(&mut c, &rx);
    c.toggle();
    step(&mut c, &rx, 0);
    assert!(c.state().is_playing());
}

#[test]
fn scrubbing_holds_display_until_released() {
    let (mut c, rx) = setup(TRACKS);
    pump(&mut c, &rx);
    c.toggle();
    step(&mut c, &rx, 0);

    c.seek_begin();
    c.seek_to(4.0);
    step(&mut c, &rx, 0);
    assert_eq!(c.display().elapsed, "00:04");

    c.seek_end();
    step(&mut c, &rx, 0);
    assert_eq!(c.transport().position(), 4.0);
    assert_eq!(c.display().elapsed, "00:04");
}

#[test]
fn unchecked_negative_length_reports_a_load_error() {
    let (mut c, rx) = setup(
        r#"
        [[tracks]]
        title = "Backwards"
        artist = "Band"
        source = "backwards.mp3"
        duration_secs = -5.0
        "#,
    );
    pump(&mut c, &rx);

    assert_eq!(c.duration(), None);
    assert_eq!(c.display().errors(), 1);

    c.toggle();
    step(&mut c, &rx, 0);
    assert!(!c.state().is_playing());
    assert_eq!(c.display().errors(), 2);
}
