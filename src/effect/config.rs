use crate::foundation::error::{ShapeflowError, ShapeflowResult};
use crate::foundation::math::Rng64;

/// Closed set of drawable shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShapeKind {
    /// Outline circle.
    Circle,
    /// Square (4-sided polygon at 45 degrees).
    Square,
    /// Triangle (3-sided polygon at 90 degrees).
    Triangle,
    /// Pointed star.
    Star,
    /// Pentagon (5-sided polygon at 90 degrees).
    Pentagon,
    /// Hexagon (6-sided polygon).
    Hexagon,
    /// Octagon (8-sided polygon at 22.5 degrees).
    Octagon,
    /// Parametric heart curve.
    Heart,
    /// Fixed-topology fir tree.
    Tree,
    /// Candy cane: stick plus half-circle hook.
    CandyCane,
    /// Radial snowflake spokes.
    Snowflake,
}

impl ShapeKind {
    /// Every kind, in wire order.
    pub const ALL: [ShapeKind; 11] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Heart,
        ShapeKind::Tree,
        ShapeKind::CandyCane,
        ShapeKind::Snowflake,
    ];

    /// Fixed mapping over the closed name set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Circle" => Some(Self::Circle),
            "Square" => Some(Self::Square),
            "Triangle" => Some(Self::Triangle),
            "Star" => Some(Self::Star),
            "Pentagon" => Some(Self::Pentagon),
            "Hexagon" => Some(Self::Hexagon),
            "Octagon" => Some(Self::Octagon),
            "Heart" => Some(Self::Heart),
            "Tree" => Some(Self::Tree),
            "Candy Cane" => Some(Self::CandyCane),
            "Snowflake" => Some(Self::Snowflake),
            _ => None,
        }
    }

    /// Canonical user-facing name (inverse of [`ShapeKind::from_name`]).
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Star => "Star",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Octagon => "Octagon",
            Self::Heart => "Heart",
            Self::Tree => "Tree",
            Self::CandyCane => "Candy Cane",
            Self::Snowflake => "Snowflake",
        }
    }

    /// Decode a shape selector. Unrecognized names map to a pseudo-random
    /// valid kind rather than failing.
    pub fn decode(name: &str, rng: &mut Rng64) -> Self {
        Self::from_name(name)
            .unwrap_or_else(|| Self::ALL[(rng.next_f64_01() * Self::ALL.len() as f64) as usize])
    }
}

/// Effect configuration, read once per frame.
///
/// Tunables arrive as already-evaluated scalars; value-curve evaluation
/// happens outside the core. Serde defaults reproduce the render-time
/// defaults of the effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeConfig {
    /// Shape selector; unrecognized names draw a pseudo-random kind.
    #[serde(default = "default_shape")]
    pub shape: String,
    /// Outline thickness in repaint passes.
    #[serde(default = "default_thickness")]
    pub thickness: u32,
    /// Point count for the star kind.
    #[serde(default = "default_points")]
    pub points: u32,
    /// Spawn at uniformly random buffer positions instead of the fixed centre.
    #[serde(default = "default_true")]
    pub random_location: bool,
    /// Fixed spawn centre X as a percentage of the buffer width.
    #[serde(default = "default_centre_pct")]
    pub centre_x_pct: u32,
    /// Fixed spawn centre Y as a percentage of the buffer height.
    #[serde(default = "default_centre_pct")]
    pub centre_y_pct: u32,
    /// Target live shape count in continuous mode.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Total radius growth over one shape lifetime, in pixels.
    #[serde(default = "default_growth")]
    pub growth: f64,
    /// Shape lifetime as a percentage of the occurrence duration.
    #[serde(default = "default_lifetime")]
    pub lifetime_pct: f64,
    /// Spawn radius in pixels.
    #[serde(default = "default_start_size")]
    pub start_size: f64,
    /// Fade shapes toward transparent (or black) as they age.
    #[serde(default = "default_true")]
    pub fade_away: bool,
    /// Spawn on audio amplitude peaks instead of continuously.
    #[serde(default)]
    pub use_music: bool,
    /// Audio trigger threshold in `[0, 1]`.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    /// Spawn on timing-track interval boundaries instead of continuously.
    #[serde(default)]
    pub fire_timing: bool,
    /// Timing track consulted when `fire_timing` is set; empty disables.
    #[serde(default)]
    pub timing_track: String,
}

fn default_shape() -> String {
    ShapeKind::Circle.name().to_string()
}

fn default_thickness() -> u32 {
    1
}

fn default_points() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_centre_pct() -> u32 {
    50
}

fn default_count() -> usize {
    5
}

fn default_growth() -> f64 {
    10.0
}

fn default_lifetime() -> f64 {
    5.0
}

fn default_start_size() -> f64 {
    5.0
}

fn default_sensitivity() -> f32 {
    0.5
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            thickness: default_thickness(),
            points: default_points(),
            random_location: true,
            centre_x_pct: default_centre_pct(),
            centre_y_pct: default_centre_pct(),
            count: default_count(),
            growth: default_growth(),
            lifetime_pct: default_lifetime(),
            start_size: default_start_size(),
            fade_away: true,
            use_music: false,
            sensitivity: default_sensitivity(),
            fire_timing: false,
            timing_track: String::new(),
        }
    }
}

impl ShapeConfig {
    /// Validate the configuration once at frame start.
    ///
    /// Everything not rejected here is defensively defaulted during the
    /// frame rather than treated as an error.
    pub fn validate(&self) -> ShapeflowResult<()> {
        if self.thickness < 1 {
            return Err(ShapeflowError::validation("thickness must be >= 1"));
        }
        if self.points < 2 {
            return Err(ShapeflowError::validation("points must be >= 2"));
        }
        if self.centre_x_pct > 100 || self.centre_y_pct > 100 {
            return Err(ShapeflowError::validation(
                "centre percentages must be <= 100",
            ));
        }
        if !(0.0..=1.0).contains(&self.sensitivity) {
            return Err(ShapeflowError::validation("sensitivity must be in [0, 1]"));
        }
        if !self.lifetime_pct.is_finite() || self.lifetime_pct <= 0.0 {
            return Err(ShapeflowError::validation("lifetime_pct must be > 0"));
        }
        if !self.growth.is_finite() {
            return Err(ShapeflowError::validation("growth must be finite"));
        }
        if !self.start_size.is_finite() || self.start_size < 0.0 {
            return Err(ShapeflowError::validation("start_size must be >= 0"));
        }
        Ok(())
    }

    /// Rewrite the configured timing track name when it matches `old`.
    pub fn rename_timing_track(&mut self, old: &str, new: &str) {
        if self.timing_track == old {
            self.timing_track = new.to_string();
        }
    }

    /// Timing-track mode counts as configured only with a non-empty track
    /// name.
    pub(crate) fn timing_enabled(&self) -> bool {
        self.fire_timing && !self.timing_track.is_empty()
    }
}

/// Advisory configuration check for hosts.
///
/// Returns human-readable warnings (currently: audio-reactive mode selected
/// without an attached audio source). Advisory only; rendering behavior is
/// unaffected.
pub fn advisory_warnings(cfg: &ShapeConfig, has_audio: bool) -> Vec<String> {
    let mut warnings = Vec::new();
    if cfg.use_music && !has_audio {
        warnings.push(
            "shape effect cannot react to music without an audio source attached".to_string(),
        );
    }
    warnings
}

#[cfg(test)]
#[path = "../../tests/unit/effect/config.rs"]
mod tests;
