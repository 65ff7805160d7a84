//! # Starfield Scenario Tests
//!
//! Whole-instance schedules replayed on virtual time.

use lib_starfield::rng::seeded;
use lib_starfield::shooting_star::{ANGLE_DEG, SIZE_RANGE, SPEED_RANGE};
use lib_starfield::{
    LayerDepth, Phase, SimulatedStarfield, StarfieldConfig, Variant, Viewport, DISPLAY_MS,
};

fn ambient(seed: u64) -> SimulatedStarfield {
    SimulatedStarfield::new(Variant::Ambient.preset(), Viewport::FALLBACK, seeded(seed))
}

fn parallax(seed: u64) -> SimulatedStarfield {
    SimulatedStarfield::new(Variant::Parallax.preset(), Viewport::FALLBACK, seeded(seed))
}

#[test]
fn test_ambient_schedule() {
    // Arrange
    let mut field = ambient(1);
    field.mount();

    // Act / Assert
    field.advance_to(5_000);
    assert_eq!(field.live().len(), 1, "first star at 5s");

    field.advance_to(7_000);
    assert_eq!(field.live().len(), 0, "first star gone at 7s");

    field.advance_to(65_000);
    assert_eq!(field.live().len(), 1, "interval star at 65s");

    field.advance_to(67_000);
    assert_eq!(field.live().len(), 0);

    field.advance_to(125_000);
    assert_eq!(field.live().len(), 1);
}

#[test]
fn test_star_lives_exactly_display_duration() {
    let mut field = ambient(2);
    field.mount();

    field.advance_to(4_999);
    assert!(field.live().is_empty());

    field.advance_to(5_000);
    let id = field.live().as_slice()[0].id;

    field.advance_to(5_000 + u64::from(DISPLAY_MS) - 1);
    assert!(field.live().contains(id));

    field.advance_to(5_000 + u64::from(DISPLAY_MS));
    assert!(!field.live().contains(id));
}

#[test]
fn test_no_star_outlives_display_window() {
    // Ticks every 500ms with a 2s lifetime keep several stars live at once.
    let config = StarfieldConfig::from_json(
        r#"{ "initial_delay_ms": 0, "interval_ms": 500, "spawn_probability": 1.0 }"#,
    )
    .unwrap();
    let mut field = SimulatedStarfield::new(config, Viewport::FALLBACK, seeded(3));
    field.mount();

    let mut born = std::collections::HashMap::new();
    for now in (0..=20_000).step_by(100) {
        field.advance_to(now);
        for star in field.live() {
            let birth = *born.entry(star.id).or_insert(now);
            assert!(
                now - birth < u64::from(DISPLAY_MS),
                "{} still live {}ms after spawning",
                star.id,
                now - birth
            );
        }
    }

    // Steady state: spawned at t-1500, t-1000, t-500 and t.
    assert_eq!(field.live().len(), 4);
}

#[test]
fn test_concurrent_stars_have_distinct_ids() {
    let config = StarfieldConfig::from_json(
        r#"{ "initial_delay_ms": 0, "interval_ms": 1, "spawn_probability": 1.0 }"#,
    )
    .unwrap();
    let mut field = SimulatedStarfield::new(config, Viewport::FALLBACK, seeded(4));
    field.mount();

    field.advance_to(1_500);

    let mut ids: Vec<_> = field.live().iter().map(|star| star.id).collect();
    let live = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), live);
    assert!(live > 1_000);
}

#[test]
fn test_spawned_stars_respect_bounds() {
    let viewport = Viewport::new(640.0, 480.0);
    let config = StarfieldConfig::from_json(r#"{ "interval_ms": 10, "spawn_probability": 1.0 }"#)
        .unwrap();
    let mut field = SimulatedStarfield::new(config, viewport, seeded(5));
    field.mount();

    for now in (0..=30_000).step_by(50) {
        field.advance_to(now);
        for star in field.live() {
            assert!((0.0..640.0).contains(&star.x));
            assert!((0.0..240.0).contains(&star.y));
            assert!(SPEED_RANGE.contains(&star.speed));
            assert!(SIZE_RANGE.contains(&star.size));
            assert_eq!(star.angle, ANGLE_DEG);
        }
    }
}

#[test]
fn test_unmount_cancels_pending_timers() {
    // Arrange
    let mut field = ambient(6);
    field.mount();
    field.advance_to(5_500);
    assert_eq!(field.live().len(), 1);
    // Expire for the live star plus the spawn tick.
    assert_eq!(field.pending_timers(), 2);

    // Act
    let cancelled = field.unmount();
    let frozen = field.live().clone();
    field.advance_to(1_000_000);

    // Assert
    assert_eq!(cancelled, 2);
    assert_eq!(field.pending_timers(), 0);
    assert_eq!(field.live(), &frozen);
    assert_eq!(field.phase(), Phase::Unmounted);
}

#[test]
fn test_unmount_before_first_star() {
    let mut field = parallax(7);
    field.mount();
    field.advance_to(500);

    // First spawn plus the spawn tick armed at mount.
    assert_eq!(field.unmount(), 2);
    field.advance_to(60_000);

    assert!(field.live().is_empty());
}

#[test]
fn test_parallax_first_star_then_probabilistic_ticks() {
    let mut field = parallax(8);
    field.mount();

    field.advance_to(999);
    assert!(field.live().is_empty());
    field.advance_to(1_000);
    assert_eq!(field.live().len(), 1);

    // Ticks at 2s, 4s, 6s, ... spawn 30% of the time. Once the first star is
    // gone, a 2s lifetime leaves at most one star live just after each tick.
    let mut seen_spawn = false;
    let mut seen_skip = false;
    for tick in 2..=200u64 {
        let at = tick * 2_000;
        field.advance_to(at);
        match field.live().len() {
            0 => seen_skip = true,
            1 => seen_spawn = true,
            n => panic!("{n} stars live at {at}ms"),
        }
    }
    assert!(seen_spawn && seen_skip);
}

#[test]
fn test_parallax_ticks_count_from_mount() {
    // Every tick spawns, so each star's birth marks a tick.
    let config = Variant::Parallax
        .preset()
        .apply_json(r#"{ "spawn_probability": 1.0 }"#)
        .unwrap();
    let mut field = SimulatedStarfield::new(config, Viewport::FALLBACK, seeded(13));
    field.mount();

    field.advance_to(1_000);
    assert_eq!(field.live().len(), 1, "first star at 1s");

    field.advance_to(1_999);
    assert_eq!(field.live().len(), 1);

    field.advance_to(2_000);
    assert_eq!(field.live().len(), 2, "tick at 2s, not 3s");

    field.advance_to(3_000);
    assert_eq!(field.live().len(), 1, "first star expired");

    field.advance_to(4_000);
    assert_eq!(field.live().len(), 1, "2s star expired as the 4s tick spawned");
}

#[test]
fn test_pointer_moves_leave_layers_untouched() {
    let mut field = parallax(9);
    field.mount();
    let layers = field.layers().clone();

    for i in 0..100 {
        field.pointer_move(f64::from(i) * 12.0, f64::from(i) * 7.0);
        field.advance_by(16);
    }

    assert_eq!(field.layers(), &layers);
    assert_eq!(field.layers().get(LayerDepth::Near).points().len(), 150);
}

#[test]
fn test_ambient_scene_ignores_pointer() {
    let mut field = ambient(10);
    field.mount();

    assert!(!field.pointer_move(0.0, 0.0));
    assert!(field.scene().layers.iter().all(|layer| layer.transform.is_none()));
}

#[test]
fn test_scene_tracks_live_collection() {
    let mut field = ambient(11);
    field.mount();

    assert!(field.scene().shooting_stars.is_empty());
    field.advance_to(5_000);
    assert_eq!(field.scene().shooting_stars.len(), 1);
    field.advance_to(7_000);
    assert!(field.scene().shooting_stars.is_empty());
}

#[test]
fn test_spawn_bounds_follow_viewport_at_creation() {
    let mut field = ambient(12);
    field.mount();
    field.set_viewport(Viewport::new(50.0, 20.0));

    field.advance_to(5_000);

    let star = &field.live().as_slice()[0];
    assert!(star.x < 50.0 && star.y < 10.0);
}
