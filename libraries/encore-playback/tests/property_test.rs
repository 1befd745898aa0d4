//! Property-based tests for the playback engine
//!
//! Uses proptest to verify invariants across many random inputs.

use encore_playback::{
    PlaybackContent, PlaybackEngine, QueueItem, RepeatMode, ShuffleOrder, SourceKind,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

// ===== Helpers =====

fn arbitrary_items() -> impl Strategy<Value = Vec<QueueItem>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,20}", 1u64..600).prop_map(|(title, secs)| {
            QueueItem::episode(title, Duration::from_secs(secs))
        }),
        1..30,
    )
}

fn playing(content: PlaybackContent) -> PlaybackEngine {
    let mut engine = PlaybackEngine::default();
    engine.load(content).unwrap();
    engine.toggle_pause().unwrap();
    engine
}

fn playlist(items: Vec<QueueItem>) -> PlaybackContent {
    PlaybackContent::Playlist {
        name: "Mix".to_string(),
        items,
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: Same seed and size always give the same permutation of 0..len
    #[test]
    fn shuffle_order_is_deterministic_permutation(len in 0usize..200, seed in any::<u64>()) {
        let first = ShuffleOrder::generate(len, seed);
        let second = ShuffleOrder::generate(len, seed);
        prop_assert_eq!(&first, &second);

        let distinct: HashSet<usize> = first.as_slice().iter().copied().collect();
        prop_assert_eq!(first.len(), len);
        prop_assert_eq!(distinct, (0..len).collect::<HashSet<_>>());
    }

    /// Property: Under RepeatAll, N advances return to the starting item
    #[test]
    fn repeat_all_has_period_n(items in arbitrary_items(), seed in proptest::option::of(any::<u64>())) {
        let len = items.len();
        let mut engine = playing(playlist(items));
        engine.cycle_repeat().unwrap();
        if let Some(seed) = seed {
            engine.toggle_shuffle(Some(seed)).unwrap();
        }
        let start = engine.source().unwrap().index();

        let mut visited = HashSet::new();
        for _ in 0..len {
            engine.next().unwrap();
            visited.insert(engine.source().unwrap().index());
        }

        prop_assert_eq!(engine.source().unwrap().index(), start);
        prop_assert_eq!(visited.len(), len);
        prop_assert!(!engine.is_paused());
    }

    /// Property: Remaining time never exceeds the current item's length
    #[test]
    fn remaining_time_bounded(
        items in arbitrary_items(),
        ops in prop::collection::vec((0u8..5, 0u64..900), 1..40)
    ) {
        let mut engine = playing(PlaybackContent::Podcast {
            name: "Show".to_string(),
            items,
        });

        for (op, secs) in ops {
            match op {
                0 => engine.tick(Duration::from_secs(secs)),
                1 => { engine.skip_forward().ok(); }
                2 => { engine.skip_backward().ok(); }
                3 => { engine.next().ok(); }
                _ => { engine.previous().ok(); }
            }

            if let Some(source) = engine.source() {
                prop_assert!(source.index() < source.len());
                prop_assert!(source.remaining() <= source.current().duration);
            }
        }
    }

    /// Property: Ticks consume exactly the elapsed time while items remain
    #[test]
    fn tick_consumes_elapsed_time(items in arbitrary_items(), elapsed in 0u64..3000) {
        let durations: Vec<u64> = items.iter().map(|item| item.duration.as_secs()).collect();
        let total: u64 = durations.iter().sum();
        let mut engine = playing(playlist(items));

        engine.tick(Duration::from_secs(elapsed));

        match engine.source() {
            Some(source) => {
                let before: u64 = durations[..source.index()].iter().sum();
                let into_current = durations[source.index()] - source.remaining().as_secs();
                prop_assert_eq!(before + into_current, elapsed);
                prop_assert!(source.remaining() > Duration::ZERO);
            }
            None => {
                prop_assert!(elapsed >= total);
                prop_assert!(engine.is_paused());
            }
        }
    }

    /// Property: Toggling shuffle twice restores the flag and the current item
    #[test]
    fn double_shuffle_toggle_is_idempotent(items in arbitrary_items(), seed in any::<u64>()) {
        let mut engine = playing(playlist(items));
        let before = engine.source().map(|source| (source.index(), source.remaining()));

        engine.toggle_shuffle(Some(seed)).unwrap();
        engine.toggle_shuffle(Some(seed)).unwrap();

        prop_assert!(!engine.is_shuffled());
        prop_assert_eq!(engine.source().map(|source| (source.index(), source.remaining())), before);
    }

    /// Property: Repeat cycles have period 3 for every source kind
    #[test]
    fn repeat_cycle_period(kind in prop_oneof![
        Just(SourceKind::SingleTrack),
        Just(SourceKind::Playlist),
        Just(SourceKind::Podcast),
    ]) {
        let mut mode = RepeatMode::NoRepeat;
        for _ in 0..3 {
            mode = mode.cycled(kind);
        }
        prop_assert_eq!(mode, RepeatMode::NoRepeat);
    }
}
