use crate::effect::cache::ShapeCache;
use crate::effect::config::{ShapeConfig, ShapeKind};
use crate::effect::trigger::{self, TriggerMode};
use crate::foundation::core::{Palette, Rgba8};
use crate::foundation::error::{ShapeflowError, ShapeflowResult};
use crate::inputs::audio::AudioSource;
use crate::inputs::timing::TimingSource;
use crate::render::shapes::draw_shape;
use crate::render::target::RenderTarget;

/// Read-only external inputs for one frame of one effect occurrence.
///
/// All external data is pulled synchronously through this context at the
/// start of the frame; the core performs no IO of its own.
pub struct FrameContext<'a> {
    /// Current frame index, in time-quantized units.
    pub frame: u64,
    /// First frame of the occurrence.
    pub effect_start: u64,
    /// One past the last frame of the occurrence.
    pub effect_end: u64,
    /// Duration of one frame in milliseconds (used by timing-track mode).
    pub frame_time_ms: u64,
    /// Active color palette.
    pub palette: &'a Palette,
    /// Audio amplitude accessor, when one is attached.
    pub audio: Option<&'a dyn AudioSource>,
    /// Timing track accessor, when one is attached.
    pub timing: Option<&'a dyn TimingSource>,
}

impl FrameContext<'_> {
    /// Occurrence length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.effect_end.saturating_sub(self.effect_start)
    }
}

/// Advance one frame: spawn, age, grow, fade, draw, prune.
///
/// The shape lifetime is derived from the occurrence duration
/// (`lifetime_frames = max(1, duration * lifetime_pct / 100)`), and growth
/// is spread evenly across it. On the first frame (or after
/// [`ShapeCache::reset`]) the population is cleared and, in continuous
/// mode, burst-filled with randomized ages.
#[tracing::instrument(skip(cache, cfg, ctx, target), fields(frame = ctx.frame))]
pub fn render_frame<T: RenderTarget + ?Sized>(
    cache: &mut ShapeCache,
    cfg: &ShapeConfig,
    ctx: &FrameContext<'_>,
    target: &mut T,
) -> ShapeflowResult<()> {
    cfg.validate()?;
    if cfg.timing_enabled() && ctx.frame_time_ms == 0 {
        return Err(ShapeflowError::render(
            "frame_time_ms must be non-zero when timing-track mode is configured",
        ));
    }

    let kind = ShapeKind::decode(&cfg.shape, &mut cache.rng);

    let lifetime_frames = (ctx.duration_frames() as f64 * cfg.lifetime_pct / 100.0).max(1.0);
    let growth_per_frame = cfg.growth / lifetime_frames;

    if cache.take_needs_init() {
        cache.clear();
        if !cfg.timing_enabled() && !cfg.use_music {
            trigger::burst_fill(
                cache,
                cfg,
                ctx,
                kind,
                lifetime_frames,
                growth_per_frame,
                target.width(),
                target.height(),
            );
        }
    }

    let mode = TriggerMode::resolve(cfg, ctx);
    trigger::spawn_for_mode(cache, cfg, ctx, mode, kind, target.width(), target.height());

    let allow_alpha = target.allows_alpha();
    for shape in cache.iter_mut() {
        shape.age += 1;
        shape.size = (shape.size + growth_per_frame).max(0.0);

        let color = if cfg.fade_away {
            faded(shape.color, shape.age, lifetime_frames, allow_alpha)
        } else {
            shape.color
        };

        draw_shape(
            target,
            shape.kind,
            shape.centre,
            shape.size,
            cfg.points,
            color,
            cfg.thickness,
        );
    }

    cache.remove_expired(lifetime_frames);
    Ok(())
}

/// Brightness falls linearly from 1 at spawn to 0 at end of life; over-age
/// shapes clamp to fully faded. Alpha-capable targets fade via the alpha
/// channel, others by scaling RGB.
fn faded(color: Rgba8, age: u32, lifetime_frames: f64, allow_alpha: bool) -> Rgba8 {
    let brightness = ((lifetime_frames - f64::from(age)) / lifetime_frames) as f32;
    if allow_alpha {
        color.with_brightness_alpha(brightness)
    } else {
        color.scaled_rgb(brightness)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effect/driver.rs"]
mod tests;
