//! # pe2d - 2D Particle Emitter
//!
//! A CPU particle emitter for 2D scenes, attached to a draggable body and
//! tuned live from a settings panel.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pe2d::prelude::*;
//!
//! let config = EmitterConfig::fountain().with_viewport(Rect::from_size(800.0, 600.0));
//! let mut body = Body::new(Emitter::new(Vec2::ZERO, config), Vec2::new(300.0, 300.0));
//! body.emitter_mut().set_enabled(true);
//!
//! let mut batch = PointBatch::new();
//! loop {
//!     body.update(1.0 / 60.0);
//!     batch.clear();
//!     body.render(&mut batch);
//!     // upload batch.as_bytes() to the GPU
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`Particle`] is a point with velocity, a per-particle gravity, a
//! lifetime and an optional linear fade. Screen space is Y-down, so positive
//! gravity pulls toward larger `y`.
//!
//! ### Emitters
//!
//! An [`Emitter`] owns its particles. Each [`Emitter::update`] first ages
//! and culls every live particle, then spawns up to `ceil(rate * dt)` new
//! ones, never exceeding the configured cap. Configuration changes only
//! affect particles spawned afterwards.
//!
//! ```ignore
//! emitter.apply(EmitterUpdate::Spread(45.0));
//! emitter.apply(EmitterUpdate::Color(Color::rgb(255, 64, 0)));
//! ```
//!
//! ### Bodies
//!
//! A [`Body`] is a point mass that carries one emitter and moves it along on
//! every tick. Drag it with [`DragHandle`] or push it with
//! [`Body::add_force`].
//!
//! ### Settings
//!
//! [`Settings`] mirrors the emitter for a UI and queues every edit as an
//! [`EmitterUpdate`]. With the `egui` feature, [`settings::panel::show`]
//! draws the controls.
//!
//! ## Rendering
//!
//! Drawing goes through the [`Renderer`] trait. [`PointBatch`] collects
//! `#[repr(C)]` point vertices ready for a GPU upload.

pub mod body;
pub mod bounds;
pub mod color;
pub mod config;
pub mod emitter;
pub mod error;
pub mod input;
pub mod particle;
pub mod random;
pub mod render;
pub mod settings;
pub mod time;

pub use body::Body;
pub use bounds::Rect;
pub use color::Color;
pub use config::{
    direction, ConeSampling, EmitterConfig, EmitterUpdate, SpawnGeometry, SpawnOffset, MAX_PARTICLES,
};
pub use emitter::Emitter;
pub use error::ParamError;
pub use glam::{Vec2, Vec4};
pub use input::{DragHandle, Input, MouseButton};
pub use particle::Particle;
pub use random::RandomSource;
pub use render::{PointBatch, PointVertex, Renderer};
pub use settings::{Parameter, Settings};
pub use time::Time;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use pe2d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::Body;
    pub use crate::bounds::Rect;
    pub use crate::color::Color;
    pub use crate::config::{EmitterConfig, EmitterUpdate, SpawnGeometry};
    pub use crate::emitter::Emitter;
    pub use crate::input::{DragHandle, Input, MouseButton};
    pub use crate::render::{PointBatch, Renderer};
    pub use crate::settings::{Parameter, Settings};
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec4};
    #[cfg(feature = "egui")]
    pub use egui;
}
