//! Integration tests for the playback engine
//!
//! These tests walk through listening sessions across several loads.

use encore_core::TrackId;
use encore_playback::{
    PlaybackConfig, PlaybackContent, PlaybackEngine, PlaybackError, QueueItem, RepeatMode,
    SourceKind,
};
use std::time::Duration;

// ===== Test Helpers =====

fn track(index: usize, title: &str, secs: u64) -> QueueItem {
    QueueItem::track(TrackId::new(index), title, Duration::from_secs(secs))
}

fn episode(title: &str, secs: u64) -> QueueItem {
    QueueItem::episode(title, Duration::from_secs(secs))
}

fn daily_show() -> PlaybackContent {
    PlaybackContent::Podcast {
        name: "Daily Show".to_string(),
        items: vec![episode("Monday", 300), episode("Tuesday", 300), episode("Wednesday", 300)],
    }
}

fn road_trip() -> PlaybackContent {
    PlaybackContent::Playlist {
        name: "Road Trip".to_string(),
        items: vec![
            track(0, "Highway", 180),
            track(1, "Sunset", 200),
            track(2, "Motel", 150),
        ],
    }
}

// ===== Scenarios =====

#[test]
fn podcast_resumes_after_detour() {
    let mut engine = PlaybackEngine::default();
    engine.load(daily_show()).unwrap();
    engine.toggle_pause().unwrap();

    // Monday fully, then 60s into Tuesday
    engine.tick(Duration::from_secs(360));
    assert_eq!(engine.current_item().unwrap().title, "Tuesday");

    engine.load(road_trip()).unwrap();
    engine.toggle_pause().unwrap();
    engine.tick(Duration::from_secs(30));
    assert_eq!(engine.source_kind(), Some(SourceKind::Playlist));

    engine.load(daily_show()).unwrap();
    let stats = engine.stats();
    assert_eq!(stats.name, "Tuesday");
    assert_eq!(stats.remained_time, 240);
    assert!(stats.paused);
}

#[test]
fn playlist_plays_through_and_stops() {
    let mut engine = PlaybackEngine::default();
    engine.load(road_trip()).unwrap();
    engine.toggle_pause().unwrap();

    engine.tick(Duration::from_secs(179));
    assert_eq!(engine.current_item().unwrap().track, Some(TrackId::new(0)));

    engine.tick(Duration::from_secs(1));
    assert_eq!(engine.current_item().unwrap().title, "Sunset");

    engine.tick(Duration::from_secs(1_000));
    assert!(engine.source().is_none());

    let stats = engine.stats();
    assert_eq!(stats.name, "");
    assert!(stats.paused);
    assert_eq!(stats.repeat, RepeatMode::NoRepeat);
}

#[test]
fn repeat_current_song_loops_one_item() {
    let mut engine = PlaybackEngine::default();
    engine.load(road_trip()).unwrap();
    engine.toggle_pause().unwrap();
    engine.next().unwrap();

    engine.cycle_repeat().unwrap();
    assert_eq!(engine.cycle_repeat(), Ok(RepeatMode::RepeatCurrentSong));

    engine.tick(Duration::from_secs(450));
    let stats = engine.stats();
    assert_eq!(stats.name, "Sunset");
    assert_eq!(stats.remained_time, 150);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let walk = |seed: u64| {
        let mut engine = PlaybackEngine::default();
        engine.load(road_trip()).unwrap();
        engine.toggle_pause().unwrap();
        engine.cycle_repeat().unwrap();
        engine.toggle_shuffle(Some(seed)).unwrap();

        (0..6)
            .map(|_| {
                engine.next().unwrap();
                engine.current_item().unwrap().title.clone()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(walk(12), walk(12));
}

#[test]
fn skips_respect_configured_step() {
    let mut engine = PlaybackEngine::new(PlaybackConfig {
        skip_step: Duration::from_secs(120),
    });
    engine.load(daily_show()).unwrap();

    engine.skip_forward().unwrap();
    engine.skip_forward().unwrap();
    assert_eq!(engine.stats().remained_time, 60);
    assert!(!engine.is_paused());

    engine.skip_forward().unwrap();
    assert_eq!(engine.stats().remained_time, 0);

    engine.load(road_trip()).unwrap();
    assert!(matches!(
        engine.skip_backward(),
        Err(PlaybackError::WrongSourceKind { .. })
    ));
}
