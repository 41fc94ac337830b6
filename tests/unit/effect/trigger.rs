use super::*;
use crate::foundation::core::{Palette, Rgba8};
use crate::inputs::audio::AudioSource;
use crate::inputs::timing::{TimingInterval, TimingSource, TimingTrack};

fn palette() -> Palette {
    Palette::new(vec![
        Rgba8::opaque(255, 0, 0),
        Rgba8::opaque(0, 255, 0),
        Rgba8::opaque(0, 0, 255),
    ])
}

fn ctx<'a>(frame: u64, palette: &'a Palette) -> FrameContext<'a> {
    FrameContext {
        frame,
        effect_start: 0,
        effect_end: 100,
        frame_time_ms: 10,
        palette,
        audio: None,
        timing: None,
    }
}

fn beat_track() -> TimingTrack {
    TimingTrack {
        name: "beats".to_string(),
        intervals: vec![TimingInterval {
            label: String::new(),
            start_ms: 100,
            end_ms: 200,
        }],
    }
}

#[test]
fn resolve_defaults_to_continuous() {
    let palette = palette();
    let cfg = ShapeConfig::default();
    let ctx = ctx(0, &palette);
    assert!(matches!(
        TriggerMode::resolve(&cfg, &ctx),
        TriggerMode::Continuous
    ));
}

#[test]
fn resolve_reads_the_audio_accessor() {
    let palette = palette();
    let cfg = ShapeConfig {
        use_music: true,
        ..Default::default()
    };

    let samples = [0.7f32];
    let audio: &dyn AudioSource = &samples[..];
    let mut ctx = ctx(0, &palette);
    ctx.audio = Some(audio);
    match TriggerMode::resolve(&cfg, &ctx) {
        TriggerMode::Audio { amplitude } => assert_eq!(amplitude, 0.7),
        other => panic!("expected audio mode, got {other:?}"),
    }

    // missing samples are silence
    ctx.frame = 10;
    match TriggerMode::resolve(&cfg, &ctx) {
        TriggerMode::Audio { amplitude } => assert_eq!(amplitude, 0.0),
        other => panic!("expected audio mode, got {other:?}"),
    }
}

#[test]
fn timing_takes_precedence_and_degrades_when_unresolvable() {
    let palette = palette();
    let tracks = [beat_track()];
    let timing: &dyn TimingSource = &tracks[..];

    let mut cfg = ShapeConfig {
        use_music: true,
        fire_timing: true,
        timing_track: "beats".to_string(),
        ..Default::default()
    };
    let mut ctx = ctx(0, &palette);
    ctx.timing = Some(timing);
    assert!(matches!(
        TriggerMode::resolve(&cfg, &ctx),
        TriggerMode::Timing { .. }
    ));

    // configured but unresolvable: continuous for the frame, not audio
    cfg.timing_track = "bridge".to_string();
    assert!(matches!(
        TriggerMode::resolve(&cfg, &ctx),
        TriggerMode::Continuous
    ));

    // an empty name disables timing mode entirely, so audio wins
    cfg.timing_track = String::new();
    assert!(matches!(
        TriggerMode::resolve(&cfg, &ctx),
        TriggerMode::Audio { .. }
    ));
}

#[test]
fn continuous_tops_up_to_the_target_count() {
    let palette = palette();
    let cfg = ShapeConfig {
        count: 5,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);
    let ctx = ctx(0, &palette);

    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Continuous,
        ShapeKind::Circle,
        40,
        20,
    );
    assert_eq!(cache.len(), 5);
    assert!(cache.iter().all(|s| s.age == 0));
    assert!(cache.iter().all(|s| s.size == cfg.start_size));

    // already at target: nothing more spawns
    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Continuous,
        ShapeKind::Circle,
        40,
        20,
    );
    assert_eq!(cache.len(), 5);
}

#[test]
fn spawn_colors_cycle_round_robin() {
    let palette = palette();
    let cfg = ShapeConfig {
        count: 5,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);
    let ctx = ctx(0, &palette);

    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Continuous,
        ShapeKind::Circle,
        40,
        20,
    );
    let colors: Vec<_> = cache.iter().map(|s| s.color).collect();
    let expected: Vec<_> = (0..5).map(|i| palette.color(i)).collect();
    assert_eq!(colors, expected);
}

#[test]
fn fixed_location_spawns_at_the_configured_centre() {
    let palette = palette();
    let cfg = ShapeConfig {
        count: 1,
        random_location: false,
        centre_x_pct: 50,
        centre_y_pct: 25,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);
    let ctx = ctx(0, &palette);

    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Continuous,
        ShapeKind::Circle,
        40,
        20,
    );
    let shape = cache.iter().next().unwrap();
    assert_eq!(shape.centre.x, 20.0);
    assert_eq!(shape.centre.y, 5.0);
}

#[test]
fn random_spawns_stay_inside_the_buffer() {
    let palette = palette();
    let cfg = ShapeConfig {
        count: 50,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(3);
    let ctx = ctx(0, &palette);

    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Continuous,
        ShapeKind::Circle,
        40,
        20,
    );
    for shape in cache.iter() {
        assert!(shape.centre.x >= 0.0 && shape.centre.x < 40.0);
        assert!(shape.centre.y >= 0.0 && shape.centre.y < 20.0);
    }
}

#[test]
fn audio_fires_twice_across_a_25_frame_peak() {
    let palette = palette();
    let cfg = ShapeConfig {
        use_music: true,
        sensitivity: 0.5,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);

    let mut amplitudes = vec![0.0f32];
    amplitudes.extend(vec![0.9f32; 25]);

    for (frame, &amplitude) in amplitudes.iter().enumerate() {
        let ctx = ctx(frame as u64, &palette);
        spawn_for_mode(
            &mut cache,
            &cfg,
            &ctx,
            TriggerMode::Audio { amplitude },
            ShapeKind::Circle,
            40,
            20,
        );
    }
    assert_eq!(cache.len(), 2);
}

#[test]
fn audio_rearms_immediately_after_the_signal_drops() {
    let palette = palette();
    let cfg = ShapeConfig {
        use_music: true,
        sensitivity: 0.5,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);

    for (frame, amplitude) in [0.9f32, 0.9, 0.0, 0.9].into_iter().enumerate() {
        let ctx = ctx(frame as u64, &palette);
        spawn_for_mode(
            &mut cache,
            &cfg,
            &ctx,
            TriggerMode::Audio { amplitude },
            ShapeKind::Circle,
            40,
            20,
        );
    }
    // first rise and the rise after the dip both fire
    assert_eq!(cache.len(), 2);
}

#[test]
fn amplitude_at_the_threshold_does_not_fire() {
    let palette = palette();
    let cfg = ShapeConfig {
        use_music: true,
        sensitivity: 0.5,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(1);
    let ctx = ctx(0, &palette);
    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Audio { amplitude: 0.5 },
        ShapeKind::Circle,
        40,
        20,
    );
    assert!(cache.is_empty());
}

#[test]
fn timing_fires_exactly_on_interval_boundaries() {
    let palette = palette();
    let cfg = ShapeConfig {
        fire_timing: true,
        timing_track: "beats".to_string(),
        ..Default::default()
    };
    let track = beat_track();
    let mut cache = ShapeCache::new(1);

    let mut spawn_frames = Vec::new();
    for frame in 0..=30u64 {
        let before = cache.len();
        let ctx = ctx(frame, &palette);
        spawn_for_mode(
            &mut cache,
            &cfg,
            &ctx,
            TriggerMode::Timing { track: &track },
            ShapeKind::Circle,
            40,
            20,
        );
        if cache.len() > before {
            spawn_frames.push(frame);
        }
    }
    assert_eq!(spawn_frames, vec![10, 20]);
}

#[test]
fn timing_spawns_at_most_once_per_frame() {
    let palette = palette();
    let cfg = ShapeConfig {
        fire_timing: true,
        timing_track: "beats".to_string(),
        ..Default::default()
    };
    // two intervals sharing a boundary frame
    let track = TimingTrack {
        name: "beats".to_string(),
        intervals: vec![
            TimingInterval {
                label: String::new(),
                start_ms: 100,
                end_ms: 150,
            },
            TimingInterval {
                label: String::new(),
                start_ms: 100,
                end_ms: 300,
            },
        ],
    };
    let mut cache = ShapeCache::new(1);
    let ctx = ctx(10, &palette);
    spawn_for_mode(
        &mut cache,
        &cfg,
        &ctx,
        TriggerMode::Timing { track: &track },
        ShapeKind::Circle,
        40,
        20,
    );
    assert_eq!(cache.len(), 1);
}

#[test]
fn burst_fill_randomizes_ages_within_the_lifetime_and_sorts() {
    let palette = palette();
    let cfg = ShapeConfig {
        count: 12,
        start_size: 2.0,
        ..Default::default()
    };
    let mut cache = ShapeCache::new(7);
    let ctx = ctx(0, &palette);

    let lifetime_frames = 10.0;
    let growth_per_frame = 0.5;
    burst_fill(
        &mut cache,
        &cfg,
        &ctx,
        ShapeKind::Circle,
        lifetime_frames,
        growth_per_frame,
        40,
        20,
    );

    assert_eq!(cache.len(), 12);
    let ages: Vec<u32> = cache.iter().map(|s| s.age).collect();
    assert!(ages.iter().all(|&a| f64::from(a) < lifetime_frames));
    assert!(ages.windows(2).all(|w| w[0] >= w[1]));
    for shape in cache.iter() {
        assert_eq!(
            shape.size,
            cfg.start_size + f64::from(shape.age) * growth_per_frame
        );
    }
}
