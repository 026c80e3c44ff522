//! Particle emitter.
//!
//! An [`Emitter`] owns a bounded, spawn-ordered collection of
//! [`Particle`]s. Every [`Emitter::update`] runs two passes:
//!
//! 1. **Cull** – advance each particle and drop the ones that died.
//! 2. **Spawn** – if enabled, create
//!    `min(ceil(rate * dt), max_particles - live)` new particles.
//!
//! Culling first keeps the live count within `max_particles` at every
//! observation point, including after a long stall where `rate * dt`
//! asks for far more particles than there is room for.
//!
//! # Example
//!
//! ```ignore
//! let mut emitter = Emitter::new(Vec2::new(400.0, 300.0), EmitterConfig::fountain());
//! emitter.set_enabled(true);
//!
//! // In your frame loop:
//! emitter.update(time.delta());
//! emitter.render(&mut batch);
//! ```

use crate::config::{EmitterConfig, EmitterUpdate, MAX_PARTICLES};
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::render::Renderer;
use glam::Vec2;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Emitter {
    position: Vec2,
    particles: VecDeque<Particle>,
    config: EmitterConfig,
    enabled: bool,
    rng: RandomSource,
}

impl Emitter {
    /// Create a disabled emitter with an entropy-seeded random source.
    ///
    /// `max_particles`, `angle` and `spread` are clamped into range.
    pub fn new(position: Vec2, config: EmitterConfig) -> Self {
        Self::with_random(position, config, RandomSource::from_entropy())
    }

    /// Create a disabled emitter drawing from the given random source.
    pub fn with_random(position: Vec2, config: EmitterConfig, rng: RandomSource) -> Self {
        let clamped = config.clone().clamped();
        if clamped != config {
            log::debug!(
                "emitter config clamped: max_particles {} -> {}, angle {} -> {}, spread {} -> {}",
                config.max_particles,
                clamped.max_particles,
                config.angle,
                clamped.angle,
                config.spread,
                clamped.spread
            );
        }

        Self {
            position,
            particles: VecDeque::with_capacity(clamped.max_particles.min(4096)),
            config: clamped,
            enabled: false,
            rng,
        }
    }

    /// Advance the emitter by `delta_time` seconds: cull, then spawn.
    ///
    /// Negative or NaN deltas are treated as 0.
    pub fn update(&mut self, delta_time: f32) {
        let dt = if delta_time >= 0.0 {
            delta_time
        } else {
            log::debug!("emitter update with delta_time {delta_time}, using 0");
            0.0
        };

        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.update(dt);
            !p.is_dead()
        });
        let culled = before - self.particles.len();

        // The cap may have been lowered below the live count since the
        // last tick; evict oldest first.
        let cap = self.config.max_particles;
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
            log::debug!("max_particles lowered to {cap}, evicted {excess} oldest particles");
        }

        let spawned = if self.enabled {
            let budget = self.spawn_budget(dt);
            for _ in 0..budget {
                let particle = self.spawn_one();
                self.particles.push_back(particle);
            }
            budget
        } else {
            0
        };

        log::trace!(
            "emitter tick dt={dt}: culled {culled}, spawned {spawned}, live {}",
            self.particles.len()
        );
    }

    /// Number of particles the next spawn pass may create for `delta_time`.
    ///
    /// Never negative and never more than the remaining capacity.
    pub fn spawn_budget(&self, delta_time: f32) -> usize {
        let room = self.config.max_particles.saturating_sub(self.particles.len());
        let wanted = (self.config.rate * delta_time).ceil();
        if wanted.is_nan() || wanted < 1.0 {
            0
        } else if wanted >= room as f32 {
            room
        } else {
            wanted as usize
        }
    }

    fn spawn_one(&mut self) -> Particle {
        let c = &self.config;
        let dir = c.geometry.cone.sample(c.angle, c.spread, &mut self.rng);
        let speed = self.rng.range(c.min_speed, c.max_speed);
        let offset = c.geometry.offset.sample(c.radius, &mut self.rng);

        Particle::new(
            self.position + dir * offset,
            dir * speed,
            c.lifetime,
            c.gravity,
            c.fade,
            c.color,
        )
    }

    /// Draw every live particle that lies inside the viewport.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let viewport = &self.config.viewport;
        let size = self.config.particle_size;
        for p in &self.particles {
            if !p.is_dead() && p.is_inside(viewport) {
                p.render(renderer, size);
            }
        }
    }

    // ========== Configuration ==========

    /// Apply a single-field change. Values are taken as given, except the
    /// particle cap which always stays within `1..=MAX_PARTICLES`.
    pub fn apply(&mut self, update: EmitterUpdate) {
        match update {
            EmitterUpdate::Enabled(on) => self.enabled = on,
            EmitterUpdate::MaxParticles(max) => {
                self.config.max_particles = max.clamp(1, MAX_PARTICLES);
            }
            other => other.apply_to(&mut self.config),
        }
    }

    /// Replace the whole configuration, clamped as in [`Emitter::new`].
    /// Live particles keep the values they were spawned with.
    pub fn configure(&mut self, config: EmitterConfig) {
        self.config = config.clamped();
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the spawn pass runs. Aging and culling always run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_particles(&self) -> usize {
        self.config.max_particles
    }

    // ========== State ==========

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> impl ExactSizeIterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Discard all live particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
