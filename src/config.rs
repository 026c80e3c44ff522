//! Emitter configuration.
//!
//! [`EmitterConfig`] enumerates every tunable of an emitter. It is built
//! with chainable `with_*` methods, applied wholesale with
//! [`Emitter::configure`](crate::Emitter::configure), or changed one field
//! at a time through an [`EmitterUpdate`].
//!
//! # Conventions
//!
//! - Angles are in degrees. A direction angle `θ` maps to the unit vector
//!   `(cos θ, -sin θ)`, so 0° points right and 90° points up on a Y-down
//!   screen.
//! - `spread` is the full width of the emission cone; directions are drawn
//!   from `angle ± spread / 2`.
//!
//! # Example
//!
//! ```ignore
//! let config = EmitterConfig::default()
//!     .with_rate(300.0)
//!     .with_lifetime(2.5)
//!     .with_speed(120.0, 180.0)
//!     .with_fade(true)
//!     .with_geometry(SpawnGeometry::new(SpawnOffset::Fixed, ConeSampling::Angular));
//! ```

use crate::bounds::Rect;
use crate::color::Color;
use crate::random::RandomSource;
use glam::Vec2;

/// Hard upper bound on live particles per emitter.
pub const MAX_PARTICLES: usize = 65_535;

/// Unit direction for an angle in degrees (Y-down screen space).
#[inline]
pub fn direction(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), -radians.sin())
}

/// How far from the emitter center a particle appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnOffset {
    /// Always exactly `radius`.
    Fixed,
    /// Uniform in `[radius / 2, radius]`.
    #[default]
    Ranged,
}

impl SpawnOffset {
    pub fn sample(self, radius: f32, rng: &mut RandomSource) -> f32 {
        match self {
            SpawnOffset::Fixed => radius,
            SpawnOffset::Ranged => rng.range(radius * 0.5, radius),
        }
    }
}

/// How spawn directions are drawn from the emission cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConeSampling {
    /// Angle uniform in `[angle - spread/2, angle + spread/2]`.
    #[default]
    Angular,
    /// Cone axis plus a uniformly scaled perpendicular, renormalized.
    ///
    /// Directions stay inside the cone but bunch up around its axis.
    /// Spreads of 180° or more can't be expressed this way and fall back
    /// to [`ConeSampling::Angular`].
    Normalized,
}

impl ConeSampling {
    /// Draw a unit direction from the cone centered on `angle` (degrees).
    pub fn sample(self, angle: f32, spread: f32, rng: &mut RandomSource) -> Vec2 {
        let half = spread * 0.5;
        match self {
            ConeSampling::Normalized if half < 90.0 => {
                let axis = direction(angle);
                let reach = half.to_radians().tan();
                let t = rng.range(-reach, reach);
                (axis + axis.perp() * t).normalize_or(axis)
            }
            _ => direction(rng.around(angle, half)),
        }
    }
}

/// Spawn geometry policy: offset distance and cone sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnGeometry {
    pub offset: SpawnOffset,
    pub cone: ConeSampling,
}

impl SpawnGeometry {
    pub fn new(offset: SpawnOffset, cone: ConeSampling) -> Self {
        Self { offset, cone }
    }
}

/// Complete set of emitter tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Region in which particles are drawn. Never affects particle death.
    pub viewport: Rect,
    /// Live particle cap.
    pub max_particles: usize,
    /// Particles per second.
    pub rate: f32,
    /// Point size handed to the renderer.
    pub particle_size: f32,
    /// Seconds a particle lives.
    pub lifetime: f32,
    /// Linearly fade particles out over their lifetime.
    pub fade: bool,
    /// Spawn offset distance from the emitter center.
    pub radius: f32,
    /// Cone axis in degrees, `[0, 360]`.
    pub angle: f32,
    /// Full cone width in degrees, `[0, 360]`.
    pub spread: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Downward acceleration. Negative values push particles up.
    pub gravity: f32,
    pub color: Color,
    pub geometry: SpawnGeometry,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            viewport: Rect::from_size(200.0, 200.0),
            max_particles: 2048,
            rate: 1.0,
            particle_size: 2.0,
            lifetime: 10.0,
            fade: false,
            radius: 10.0,
            angle: 90.0,
            spread: 30.0,
            min_speed: 0.0,
            max_speed: 0.0,
            gravity: 9.8,
            color: Color::WHITE,
            geometry: SpawnGeometry::default(),
        }
    }
}

impl EmitterConfig {
    // =========================================================================
    // PRESETS
    // =========================================================================

    /// Upward fountain of fading azure points. Matches the settings panel's
    /// start-up values.
    pub fn fountain() -> Self {
        Self {
            max_particles: 2048,
            particle_size: 4.0,
            lifetime: 4.0,
            fade: true,
            rate: 200.0,
            radius: 10.0,
            angle: 90.0,
            spread: 60.0,
            min_speed: 160.0,
            max_speed: 220.0,
            gravity: 196.0,
            color: Color::AZURE,
            ..Self::default()
        }
    }

    /// Short-lived sparks thrown in every direction.
    pub fn sparks() -> Self {
        Self {
            max_particles: 4096,
            particle_size: 2.0,
            lifetime: 0.8,
            fade: true,
            rate: 600.0,
            radius: 4.0,
            angle: 90.0,
            spread: 360.0,
            min_speed: 200.0,
            max_speed: 320.0,
            gravity: 400.0,
            color: Color::rgb(255, 200, 64),
            geometry: SpawnGeometry::new(SpawnOffset::Fixed, ConeSampling::Angular),
            ..Self::default()
        }
    }

    // =========================================================================
    // BUILDER
    // =========================================================================

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max;
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    pub fn with_lifetime(mut self, seconds: f32) -> Self {
        self.lifetime = seconds;
        self
    }

    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    pub fn with_spread(mut self, degrees: f32) -> Self {
        self.spread = degrees;
        self
    }

    /// Set the initial speed range.
    pub fn with_speed(mut self, min: f32, max: f32) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_geometry(mut self, geometry: SpawnGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Construction-time clamping: `max_particles` into
    /// `[1, MAX_PARTICLES]`, `angle` and `spread` into `[0, 360]`.
    /// A NaN angle or spread becomes 0.
    pub fn clamped(mut self) -> Self {
        self.max_particles = self.max_particles.clamp(1, MAX_PARTICLES);
        self.angle = clamp_degrees(self.angle);
        self.spread = clamp_degrees(self.spread);
        self
    }
}

fn clamp_degrees(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 360.0)
    }
}

/// Single-field change to an emitter.
///
/// Values are assigned as given; range checks are the caller's job (see
/// [`Parameter::parse`](crate::settings::Parameter::parse)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmitterUpdate {
    Enabled(bool),
    Color(Color),
    MaxParticles(usize),
    ParticleSize(f32),
    LifeTime(f32),
    Fade(bool),
    Rate(f32),
    Radius(f32),
    Angle(f32),
    Spread(f32),
    MinSpeed(f32),
    MaxSpeed(f32),
    Gravity(f32),
}

impl EmitterUpdate {
    /// Write this change into `config`.
    ///
    /// `Enabled` is emitter state rather than configuration and is ignored
    /// here.
    pub fn apply_to(&self, config: &mut EmitterConfig) {
        match *self {
            EmitterUpdate::Enabled(_) => {}
            EmitterUpdate::Color(v) => config.color = v,
            EmitterUpdate::MaxParticles(v) => config.max_particles = v,
            EmitterUpdate::ParticleSize(v) => config.particle_size = v,
            EmitterUpdate::LifeTime(v) => config.lifetime = v,
            EmitterUpdate::Fade(v) => config.fade = v,
            EmitterUpdate::Rate(v) => config.rate = v,
            EmitterUpdate::Radius(v) => config.radius = v,
            EmitterUpdate::Angle(v) => config.angle = v,
            EmitterUpdate::Spread(v) => config.spread = v,
            EmitterUpdate::MinSpeed(v) => config.min_speed = v,
            EmitterUpdate::MaxSpeed(v) => config.max_speed = v,
            EmitterUpdate::Gravity(v) => config.gravity = v,
        }
    }
}
