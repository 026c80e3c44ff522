//! Draggable point mass that carries an emitter.
//!
//! A [`Body`] owns exactly one [`Emitter`] and pins the emitter's origin to
//! its own position on every tick. Forces added with [`Body::add_force`]
//! accumulate into a resultant that is consumed by the next
//! [`Body::update`]:
//!
//! ```text
//! velocity += resultant * dt / mass
//! position += velocity * dt
//! resultant = 0
//! ```
//!
//! A body at rest with no forces never moves, so the plain "drag it around"
//! use only ever writes [`Body::position`] from the input handler.

use crate::bounds::Rect;
use crate::color::Color;
use crate::emitter::Emitter;
use crate::render::Renderer;
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Body {
    /// Externally writable (drag-to-move). Not validated or clamped here.
    pub position: Vec2,
    pub velocity: Vec2,
    mass: f32,
    resultant: Vec2,
    bounds: Option<Rect>,
    size: f32,
    color: Color,
    emitter: Emitter,
}

impl Body {
    /// Create a body of unit mass at `position`, taking ownership of
    /// `emitter` and moving it onto the body.
    pub fn new(emitter: Emitter, position: Vec2) -> Self {
        let mut emitter = emitter;
        emitter.set_position(position);
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            resultant: Vec2::ZERO,
            bounds: None,
            size: 20.0,
            color: Color::BLACK,
            emitter,
        }
    }

    /// Set the mass. Non-positive or NaN masses are replaced by 1.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.set_mass(mass);
        self
    }

    /// Confine the body to `bounds` after each integration step.
    ///
    /// Hitting an edge clamps the position and zeroes the velocity on that
    /// axis (no bounce).
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Point size and color used by [`Body::render`].
    pub fn with_appearance(mut self, size: f32, color: Color) -> Self {
        self.size = size;
        self.color = color;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = if mass > 0.0 {
            mass
        } else {
            log::debug!("body mass {mass} is not positive, using 1");
            1.0
        };
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Accumulated force not yet consumed by [`Body::update`].
    pub fn resultant(&self) -> Vec2 {
        self.resultant
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.resultant += force;
    }

    /// Integrate forces, apply the boundary, pin the emitter to the body
    /// and advance the emitter.
    pub fn update(&mut self, delta_time: f32) {
        let dt = delta_time.max(0.0);

        self.velocity += self.resultant * dt / self.mass;
        self.position += self.velocity * dt;
        self.resultant = Vec2::ZERO;

        if let Some(bounds) = &self.bounds {
            bounds.confine(&mut self.position, &mut self.velocity);
        }

        self.emitter.set_position(self.position);
        self.emitter.update(dt);
    }

    /// Draw the body as a single point, then its particles.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_point(self.position, self.size, self.color.to_vec4());
        self.emitter.render(renderer);
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Mutable access for UI bindings and input handlers.
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmitterConfig;
    use crate::random::RandomSource;
    use crate::render::PointBatch;

    fn body_at(position: Vec2) -> Body {
        let emitter = Emitter::with_random(Vec2::ZERO, EmitterConfig::default(), RandomSource::seeded(8));
        Body::new(emitter, position)
    }

    #[test]
    fn test_new_pins_emitter() {
        let body = body_at(Vec2::new(30.0, 40.0));
        assert_eq!(body.emitter().position(), Vec2::new(30.0, 40.0));
        assert_eq!(body.mass(), 1.0);
    }

    #[test]
    fn test_force_integration() {
        let mut body = body_at(Vec2::ZERO).with_mass(2.0);
        body.add_force(Vec2::new(10.0, 0.0));
        assert_eq!(body.resultant(), Vec2::new(10.0, 0.0));

        body.update(1.0);
        assert_eq!(body.velocity, Vec2::new(5.0, 0.0));
        assert_eq!(body.position, Vec2::new(5.0, 0.0));
        assert_eq!(body.resultant(), Vec2::ZERO);

        // No new force: coasts at constant velocity
        body.update(1.0);
        assert_eq!(body.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_degenerate_mass() {
        assert_eq!(body_at(Vec2::ZERO).with_mass(0.0).mass(), 1.0);
        assert_eq!(body_at(Vec2::ZERO).with_mass(-3.0).mass(), 1.0);
        assert_eq!(body_at(Vec2::ZERO).with_mass(f32::NAN).mass(), 1.0);
    }

    #[test]
    fn test_dragged_position_reaches_emitter() {
        let mut body = body_at(Vec2::ZERO);
        body.position = Vec2::new(123.0, 45.0);
        body.update(0.016);
        assert_eq!(body.emitter().position(), Vec2::new(123.0, 45.0));
    }

    #[test]
    fn test_bounds_are_inelastic() {
        let mut body = body_at(Vec2::new(790.0, 300.0)).with_bounds(Rect::from_size(800.0, 600.0));
        body.velocity = Vec2::new(100.0, 10.0);
        body.update(1.0);
        assert_eq!(body.position, Vec2::new(800.0, 310.0));
        assert_eq!(body.velocity, Vec2::new(0.0, 10.0));
        assert_eq!(body.emitter().position(), body.position);
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let mut body = body_at(Vec2::new(5.0, 5.0)).with_bounds(Rect::from_origin_size(0.0, 0.0, -10.0, 10.0));
        body.velocity = Vec2::new(1.0, 0.0);
        body.update(0.016);
        assert_eq!(body.position, Vec2::new(0.0, 5.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.emitter().position(), body.position);

        body.set_bounds(Some(Rect {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::ZERO,
        }));
        body.update(0.016);
        assert!(body.position.is_finite());
    }

    #[test]
    fn test_external_position_is_not_clamped_without_bounds() {
        let mut body = body_at(Vec2::ZERO);
        body.position = Vec2::new(-5000.0, 9000.0);
        body.update(0.0);
        assert_eq!(body.position, Vec2::new(-5000.0, 9000.0));
    }

    #[test]
    fn test_render_draws_body_first() {
        let body = body_at(Vec2::new(10.0, 10.0)).with_appearance(12.0, Color::WHITE);
        let mut batch = PointBatch::new();
        body.render(&mut batch);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.vertices()[0].size, 12.0);
        assert_eq!(batch.vertices()[0].color, [1.0, 1.0, 1.0, 1.0]);
    }
}
