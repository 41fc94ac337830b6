//! Shapeflow is a per-frame procedural shape animation engine.
//!
//! An occurrence of the effect owns a [`ShapeCache`]: a small population of
//! parametric shapes (circles, polygons, stars, snowflakes, hearts, trees,
//! candy canes) that is advanced one frame at a time and rasterized onto a
//! caller-supplied pixel buffer.
//!
//! # Frame pipeline
//!
//! 1. **Resolve**: `ShapeConfig + FrameContext -> TriggerMode` (which spawn
//!    policy is active this frame)
//! 2. **Spawn**: the trigger pass inserts new shapes (continuous top-up,
//!    audio peaks, or timing-track boundaries)
//! 3. **Advance**: every live shape ages, grows, and optionally fades
//! 4. **Draw**: each shape is rasterized into a [`RenderTarget`]
//! 5. **Prune**: shapes past their lifetime are removed from the front of
//!    the age-sorted population
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows from the seeded
//!   [`Rng64`] owned by the cache; a given seed replays the same animation.
//! - **No IO in the core**: audio amplitudes and timing tracks are pulled
//!   from caller-supplied accessors at the start of each frame.
//! - **Single-threaded**: one cache belongs to one occurrence on one buffer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effect;
mod foundation;
mod inputs;
mod render;

pub use effect::cache::{ShapeCache, ShapeData};
pub use effect::config::{ShapeConfig, ShapeKind, advisory_warnings};
pub use effect::driver::{FrameContext, render_frame};
pub use effect::trigger::TriggerMode;
pub use foundation::core::{Palette, Point, Rgba8};
pub use foundation::error::{ShapeflowError, ShapeflowResult};
pub use foundation::math::Rng64;
pub use inputs::audio::AudioSource;
pub use inputs::timing::{TimingInterval, TimingSource, TimingTrack};
pub use render::shapes::{
    draw_candy_cane, draw_circle, draw_heart, draw_polygon, draw_shape, draw_snowflake, draw_star,
    draw_tree,
};
pub use render::target::{PixelBuffer, RenderTarget};
