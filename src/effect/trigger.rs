use crate::effect::cache::ShapeCache;
use crate::effect::config::{ShapeConfig, ShapeKind};
use crate::effect::driver::FrameContext;
use crate::foundation::core::Point;
use crate::foundation::math::Rng64;
use crate::inputs::timing::TimingTrack;

/// Frames a sustained audio peak waits before it may fire again.
pub(crate) const REPEAT_TRIGGER_FRAMES: u32 = 20;

/// Spawn policy for one frame.
///
/// Resolved once per frame from configuration and inputs; precedence is
/// timing-track over audio over continuous. Timing mode with an empty
/// configured name, or a name the [`crate::TimingSource`] cannot resolve,
/// silently degrades to continuous for the frame.
#[derive(Clone, Copy, Debug)]
pub enum TriggerMode<'a> {
    /// Top the population up to the configured target count.
    Continuous,
    /// Spawn on amplitude peaks above the sensitivity threshold.
    Audio {
        /// This frame's amplitude sample in `[0, 1]`; 0 when unavailable.
        amplitude: f32,
    },
    /// Spawn when the frame lands on an interval boundary of the track.
    Timing {
        /// Resolved timing track.
        track: &'a TimingTrack,
    },
}

impl<'a> TriggerMode<'a> {
    /// Resolve the active mode for this frame.
    pub fn resolve(cfg: &ShapeConfig, ctx: &FrameContext<'a>) -> TriggerMode<'a> {
        if cfg.timing_enabled() {
            if let Some(track) = ctx.timing.and_then(|t| t.track(&cfg.timing_track)) {
                return TriggerMode::Timing { track };
            }
            return TriggerMode::Continuous;
        }
        if cfg.use_music {
            let amplitude = ctx
                .audio
                .and_then(|a| a.amplitude(ctx.frame))
                .unwrap_or(0.0);
            return TriggerMode::Audio { amplitude };
        }
        TriggerMode::Continuous
    }
}

/// Burst-fill the initial population with randomized ages so it appears to
/// have pre-existing organic ages, then restore the sort invariant.
#[allow(clippy::too_many_arguments)]
pub(crate) fn burst_fill(
    cache: &mut ShapeCache,
    cfg: &ShapeConfig,
    ctx: &FrameContext<'_>,
    kind: ShapeKind,
    lifetime_frames: f64,
    growth_per_frame: f64,
    width: u32,
    height: u32,
) {
    for _ in cache.len()..cfg.count {
        let centre = spawn_point(cfg, width, height, &mut cache.rng);
        let color = cache.next_color(ctx.palette);
        let age = (cache.rng.next_f64_01() * lifetime_frames) as u32;
        let size = cfg.start_size + f64::from(age) * growth_per_frame;
        cache.add(centre, size, color, age, kind);
    }
    cache.sort_by_age();
    tracing::trace!(frame = ctx.frame, count = cache.len(), "burst-filled population");
}

/// Run the spawn pass for the resolved mode.
pub(crate) fn spawn_for_mode(
    cache: &mut ShapeCache,
    cfg: &ShapeConfig,
    ctx: &FrameContext<'_>,
    mode: TriggerMode<'_>,
    kind: ShapeKind,
    width: u32,
    height: u32,
) {
    match mode {
        TriggerMode::Continuous => {
            // Replace natural expiries, spawning at age 0.
            while cache.len() < cfg.count {
                spawn_one(cache, cfg, ctx, kind, width, height);
            }
        }
        TriggerMode::Audio { amplitude } => {
            if amplitude > cfg.sensitivity {
                // Fire when this burst has not triggered yet, or has held the
                // level past the repeat window.
                if cache.since_last_trigger == 0
                    || cache.since_last_trigger > REPEAT_TRIGGER_FRAMES
                {
                    spawn_one(cache, cfg, ctx, kind, width, height);
                }

                // The counter keeps running while the signal stays high and
                // wraps past the window, permitting one repeat per window.
                cache.since_last_trigger += 1;
                if cache.since_last_trigger > REPEAT_TRIGGER_FRAMES {
                    cache.since_last_trigger = 0;
                }
            } else {
                // Below threshold: re-arm an immediate trigger on the next rise.
                cache.since_last_trigger = 0;
            }
        }
        TriggerMode::Timing { track } => {
            cache.since_last_trigger = 0;
            for interval in &track.intervals {
                if ctx.frame == interval.start_ms / ctx.frame_time_ms
                    || ctx.frame == interval.end_ms / ctx.frame_time_ms
                {
                    spawn_one(cache, cfg, ctx, kind, width, height);
                    break;
                }
            }
        }
    }
}

fn spawn_one(
    cache: &mut ShapeCache,
    cfg: &ShapeConfig,
    ctx: &FrameContext<'_>,
    kind: ShapeKind,
    width: u32,
    height: u32,
) {
    let centre = spawn_point(cfg, width, height, &mut cache.rng);
    let color = cache.next_color(ctx.palette);
    cache.add(centre, cfg.start_size, color, 0, kind);
    tracing::trace!(frame = ctx.frame, x = centre.x, y = centre.y, "spawned shape");
}

fn spawn_point(cfg: &ShapeConfig, width: u32, height: u32, rng: &mut Rng64) -> Point {
    if cfg.random_location {
        Point::new(
            (rng.next_f64_01() * f64::from(width)).floor(),
            (rng.next_f64_01() * f64::from(height)).floor(),
        )
    } else {
        Point::new(
            (u64::from(cfg.centre_x_pct) * u64::from(width) / 100) as f64,
            (u64::from(cfg.centre_y_pct) * u64::from(height) / 100) as f64,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/trigger.rs"]
mod tests;
