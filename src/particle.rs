//! Single emitted particle.
//!
//! A particle is a massless point that ages, falls under its own constant
//! gravity, optionally fades, and dies once its age reaches its lifetime.
//! Every parameter is a snapshot taken by the emitter at spawn time, so
//! later emitter changes never reach particles that are already alive.
//!
//! # Integration
//!
//! Each [`Particle::update`] is one semi-implicit Euler step:
//!
//! ```text
//! age      += dt
//! alpha    -= dt / lifetime          (fade only, floored at 0)
//! velocity += DOWN * gravity * dt
//! position += velocity * dt
//! ```
//!
//! Screen space is Y-down, so positive gravity pulls toward larger `y`.

use crate::bounds::Rect;
use crate::color::Color;
use crate::render::Renderer;
use glam::Vec2;

/// Half-extent of the box outside of which a particle counts as dead.
///
/// This only catches runaway numbers (overflow, NaN); it is not a
/// gameplay boundary.
pub const SAFETY_EXTENT: f32 = 16_777_216.0;

/// Direction gravity pulls in (screen space, Y-down).
pub const DOWN: Vec2 = Vec2::Y;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    lifetime: f32,
    age: f32,
    gravity: f32,
    fade: bool,
    color: Color,
    alpha: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        lifetime: f32,
        gravity: f32,
        fade: bool,
        color: Color,
    ) -> Self {
        Self {
            position,
            velocity,
            lifetime,
            age: 0.0,
            gravity,
            fade,
            color,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.age
    }

    #[inline]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn fades(&self) -> bool {
        self.fade
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Opacity multiplier in `[0, 1]`. Always `1.0` when fade is off.
    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.fade {
            self.alpha
        } else {
            1.0
        }
    }

    /// Advance the particle by `delta_time` seconds.
    ///
    /// Dead particles are left untouched. Negative or NaN deltas count as 0.
    pub fn update(&mut self, delta_time: f32) {
        if self.is_dead() {
            return;
        }
        let dt = delta_time.max(0.0);

        self.age += dt;

        if self.fade {
            // Linear in time and pinned to 0 at the end of life, so
            // accumulated rounding can't leave a visible residue.
            self.alpha = if self.age >= self.lifetime {
                0.0
            } else {
                (self.alpha - dt / self.lifetime).max(0.0)
            };
        }

        self.velocity += DOWN * self.gravity * dt;
        self.position += self.velocity * dt;
    }

    /// True once the age reaches the lifetime or the position leaves the
    /// safety box. Lifetimes `<= 0` (or NaN) are dead from the start.
    pub fn is_dead(&self) -> bool {
        self.lifetime.is_nan() || self.age >= self.lifetime || !self.within_safety_box()
    }

    /// Inclusive viewport test. Used for render culling only.
    #[inline]
    pub fn is_inside(&self, viewport: &Rect) -> bool {
        viewport.contains(self.position)
    }

    fn within_safety_box(&self) -> bool {
        self.position.x.abs() <= SAFETY_EXTENT && self.position.y.abs() <= SAFETY_EXTENT
    }

    /// Draw the particle as one point, alpha scaled by the fade factor.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, size: f32) {
        let color = if self.fade {
            self.color.to_vec4_faded(self.alpha)
        } else {
            self.color.to_vec4()
        };
        renderer.draw_point(self.position, size, color);
    }
}
