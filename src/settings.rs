//! Settings panel model.
//!
//! [`Settings`] is the UI-side mirror of an emitter's parameters. Widgets
//! write into it with [`Settings::set`] (or [`Settings::submit`] for typed
//! text); every effective change is queued as an [`EmitterUpdate`] and the
//! simulation loop drains the queue into the emitter once per frame:
//!
//! ```ignore
//! settings.submit(Parameter::Rate, "350")?;
//! settings.apply_pending(body.emitter_mut());
//! settings.sync_status(time.fps(), body.emitter().particle_count());
//! ```
//!
//! The queue has one writer (the UI) and one reader (the simulation), so
//! moving the UI onto its own thread only requires wrapping the queue, not
//! the emitter.
//!
//! # Ranges
//!
//! | Parameter | Range | Kind |
//! |-----------|-------|------|
//! | Max Particles | 1 – 65535 | integer |
//! | Particle Size | 0.1 – 10 | float |
//! | Life Time | 0 – 10 | float |
//! | Rate, Radius, Min/Max Speed | 0 – 1000 | float |
//! | Angle, Spread | 0 – 360 | float |
//! | Gravity | -1000 – 1000 | float |

#[cfg(feature = "egui")]
pub mod panel;

use crate::color::Color;
use crate::config::{EmitterConfig, EmitterUpdate, MAX_PARTICLES};
use crate::emitter::Emitter;
use crate::error::ParamError;
use std::collections::VecDeque;
use std::str::FromStr;

/// Every user-editable emitter parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Enabled,
    Color,
    MaxParticles,
    ParticleSize,
    LifeTime,
    Fade,
    Rate,
    Radius,
    Angle,
    Spread,
    MinSpeed,
    MaxSpeed,
    Gravity,
}

impl Parameter {
    pub const ALL: [Parameter; 13] = [
        Parameter::Enabled,
        Parameter::Color,
        Parameter::MaxParticles,
        Parameter::ParticleSize,
        Parameter::LifeTime,
        Parameter::Fade,
        Parameter::Rate,
        Parameter::Radius,
        Parameter::Angle,
        Parameter::Spread,
        Parameter::MinSpeed,
        Parameter::MaxSpeed,
        Parameter::Gravity,
    ];

    /// Parameters edited with a slider, in panel order.
    pub const NUMERIC: [Parameter; 10] = [
        Parameter::MaxParticles,
        Parameter::ParticleSize,
        Parameter::LifeTime,
        Parameter::Rate,
        Parameter::Radius,
        Parameter::Angle,
        Parameter::Spread,
        Parameter::MinSpeed,
        Parameter::MaxSpeed,
        Parameter::Gravity,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Enabled => "Emission",
            Parameter::Color => "Color",
            Parameter::MaxParticles => "Max Particles",
            Parameter::ParticleSize => "Particle Size",
            Parameter::LifeTime => "Life Time",
            Parameter::Fade => "Fade",
            Parameter::Rate => "Rate",
            Parameter::Radius => "Radius",
            Parameter::Angle => "Angle",
            Parameter::Spread => "Spread",
            Parameter::MinSpeed => "Min Initial Speed",
            Parameter::MaxSpeed => "Max Initial Speed",
            Parameter::Gravity => "Gravity",
        }
    }

    /// Machine name accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Enabled => "enabled",
            Parameter::Color => "color",
            Parameter::MaxParticles => "max_particles",
            Parameter::ParticleSize => "particle_size",
            Parameter::LifeTime => "lifetime",
            Parameter::Fade => "fade",
            Parameter::Rate => "rate",
            Parameter::Radius => "radius",
            Parameter::Angle => "angle",
            Parameter::Spread => "spread",
            Parameter::MinSpeed => "min_speed",
            Parameter::MaxSpeed => "max_speed",
            Parameter::Gravity => "gravity",
        }
    }

    /// Editable `(min, max)` range for numeric parameters.
    pub fn range(self) -> Option<(f32, f32)> {
        match self {
            Parameter::Enabled | Parameter::Color | Parameter::Fade => None,
            Parameter::MaxParticles => Some((1.0, MAX_PARTICLES as f32)),
            Parameter::ParticleSize => Some((0.1, 10.0)),
            Parameter::LifeTime => Some((0.0, 10.0)),
            Parameter::Rate | Parameter::Radius | Parameter::MinSpeed | Parameter::MaxSpeed => {
                Some((0.0, 1000.0))
            }
            Parameter::Angle | Parameter::Spread => Some((0.0, 360.0)),
            Parameter::Gravity => Some((-1000.0, 1000.0)),
        }
    }

    pub fn is_integer(self) -> bool {
        self == Parameter::MaxParticles
    }

    /// Build an update from a numeric value without range checks.
    ///
    /// Returns `None` for non-numeric parameters.
    pub fn with_value(self, value: f32) -> Option<EmitterUpdate> {
        let update = match self {
            Parameter::Enabled | Parameter::Color | Parameter::Fade => return None,
            Parameter::MaxParticles => EmitterUpdate::MaxParticles(value.max(0.0) as usize),
            Parameter::ParticleSize => EmitterUpdate::ParticleSize(value),
            Parameter::LifeTime => EmitterUpdate::LifeTime(value),
            Parameter::Rate => EmitterUpdate::Rate(value),
            Parameter::Radius => EmitterUpdate::Radius(value),
            Parameter::Angle => EmitterUpdate::Angle(value),
            Parameter::Spread => EmitterUpdate::Spread(value),
            Parameter::MinSpeed => EmitterUpdate::MinSpeed(value),
            Parameter::MaxSpeed => EmitterUpdate::MaxSpeed(value),
            Parameter::Gravity => EmitterUpdate::Gravity(value),
        };
        Some(update)
    }

    /// Parse text-box input into an update.
    ///
    /// Numeric parameters accept decimal numbers inside [`Parameter::range`];
    /// empty text means the range minimum. Toggles accept
    /// `true/false/on/off/yes/no/1/0`. Colors accept `#RRGGBB` or
    /// `#RRGGBBAA` (the `#` is optional).
    pub fn parse(self, text: &str) -> Result<EmitterUpdate, ParamError> {
        let text = text.trim();
        match self {
            Parameter::Enabled => parse_toggle(self, text).map(EmitterUpdate::Enabled),
            Parameter::Fade => parse_toggle(self, text).map(EmitterUpdate::Fade),
            Parameter::Color => parse_color(self, text).map(EmitterUpdate::Color),
            _ => {
                let value = self.parse_number(text)?;
                // Every numeric parameter has a value form
                self.with_value(value).ok_or_else(|| ParamError::Invalid {
                    parameter: self.label(),
                    input: text.to_string(),
                    expected: "a number",
                })
            }
        }
    }

    fn parse_number(self, text: &str) -> Result<f32, ParamError> {
        let parameter = self.label();
        let (min, max) = self.range().unwrap_or((f32::MIN, f32::MAX));

        if text.is_empty() {
            return Ok(min);
        }

        let value: f64 = text.parse().map_err(|_| ParamError::Invalid {
            parameter,
            input: text.to_string(),
            expected: "a number",
        })?;

        if !value.is_finite() {
            return Err(ParamError::NotFinite { parameter });
        }
        if self.is_integer() && value.fract() != 0.0 {
            return Err(ParamError::NotAnInteger { parameter, value });
        }
        // Compare in f32 so range ends like 0.1 are themselves accepted
        let narrowed = value as f32;
        if narrowed < min || narrowed > max {
            return Err(ParamError::OutOfRange {
                parameter,
                value,
                min,
                max,
            });
        }
        Ok(narrowed)
    }
}

impl FromStr for Parameter {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Parameter::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParamError::UnknownParameter(s.to_string()))
    }
}

fn parse_toggle(parameter: Parameter, text: &str) -> Result<bool, ParamError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ParamError::Invalid {
            parameter: parameter.label(),
            input: text.to_string(),
            expected: "on or off",
        }),
    }
}

fn parse_color(parameter: Parameter, text: &str) -> Result<Color, ParamError> {
    let invalid = || ParamError::Invalid {
        parameter: parameter.label(),
        input: text.to_string(),
        expected: "a #RRGGBB or #RRGGBBAA color",
    };

    let hex = text.strip_prefix('#').unwrap_or(text);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
}

/// Numeric payload of an update, if it has one.
pub fn numeric_value(update: &EmitterUpdate) -> Option<f32> {
    match *update {
        EmitterUpdate::Enabled(_) | EmitterUpdate::Color(_) | EmitterUpdate::Fade(_) => None,
        EmitterUpdate::MaxParticles(v) => Some(v as f32),
        EmitterUpdate::ParticleSize(v)
        | EmitterUpdate::LifeTime(v)
        | EmitterUpdate::Rate(v)
        | EmitterUpdate::Radius(v)
        | EmitterUpdate::Angle(v)
        | EmitterUpdate::Spread(v)
        | EmitterUpdate::MinSpeed(v)
        | EmitterUpdate::MaxSpeed(v)
        | EmitterUpdate::Gravity(v) => Some(v),
    }
}

/// UI-side parameter state plus the queue of changes for the simulation.
#[derive(Debug, Clone)]
pub struct Settings {
    enabled: bool,
    config: EmitterConfig,
    fps: f32,
    particle_count: usize,
    pending: VecDeque<EmitterUpdate>,
}

impl Settings {
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            enabled: false,
            config,
            fps: 0.0,
            particle_count: 0,
            pending: VecDeque::new(),
        }
    }

    /// Mirror an existing emitter.
    pub fn from_emitter(emitter: &Emitter) -> Self {
        let mut settings = Self::new(emitter.config().clone());
        settings.enabled = emitter.is_enabled();
        settings.particle_count = emitter.particle_count();
        settings
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Current value of `parameter` expressed as an update.
    pub fn current(&self, parameter: Parameter) -> EmitterUpdate {
        let c = &self.config;
        match parameter {
            Parameter::Enabled => EmitterUpdate::Enabled(self.enabled),
            Parameter::Color => EmitterUpdate::Color(c.color),
            Parameter::MaxParticles => EmitterUpdate::MaxParticles(c.max_particles),
            Parameter::ParticleSize => EmitterUpdate::ParticleSize(c.particle_size),
            Parameter::LifeTime => EmitterUpdate::LifeTime(c.lifetime),
            Parameter::Fade => EmitterUpdate::Fade(c.fade),
            Parameter::Rate => EmitterUpdate::Rate(c.rate),
            Parameter::Radius => EmitterUpdate::Radius(c.radius),
            Parameter::Angle => EmitterUpdate::Angle(c.angle),
            Parameter::Spread => EmitterUpdate::Spread(c.spread),
            Parameter::MinSpeed => EmitterUpdate::MinSpeed(c.min_speed),
            Parameter::MaxSpeed => EmitterUpdate::MaxSpeed(c.max_speed),
            Parameter::Gravity => EmitterUpdate::Gravity(c.gravity),
        }
    }

    /// Record a change. Returns `false` (and queues nothing) when the value
    /// is already current.
    ///
    /// The particle cap is clamped to `1..=MAX_PARTICLES` like the emitter
    /// does, so the mirror never shows a cap the emitter doesn't have.
    pub fn set(&mut self, update: EmitterUpdate) -> bool {
        let update = match update {
            EmitterUpdate::MaxParticles(max) => EmitterUpdate::MaxParticles(max.clamp(1, MAX_PARTICLES)),
            other => other,
        };
        if self.current(parameter_of(&update)) == update {
            return false;
        }
        match update {
            EmitterUpdate::Enabled(on) => self.enabled = on,
            other => other.apply_to(&mut self.config),
        }
        self.pending.push_back(update);
        true
    }

    /// Parse `text` for `parameter` and record it.
    ///
    /// On error nothing is recorded and the previous value stays.
    pub fn submit(&mut self, parameter: Parameter, text: &str) -> Result<bool, ParamError> {
        let update = parameter.parse(text).map_err(|e| {
            log::debug!("rejected settings input: {e}");
            e
        })?;
        Ok(self.set(update))
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take queued changes, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = EmitterUpdate> + '_ {
        self.pending.drain(..)
    }

    /// Apply every queued change to `emitter`. Returns how many were applied.
    pub fn apply_pending(&mut self, emitter: &mut Emitter) -> usize {
        let mut applied = 0;
        for update in self.pending.drain(..) {
            emitter.apply(update);
            applied += 1;
        }
        applied
    }

    /// Pull parameters back from `emitter` after it was changed elsewhere.
    /// Queued changes are discarded.
    pub fn sync_from(&mut self, emitter: &Emitter) {
        self.pending.clear();
        self.enabled = emitter.is_enabled();
        self.config = emitter.config().clone();
        self.particle_count = emitter.particle_count();
    }

    /// Update the read-only status values.
    pub fn sync_status(&mut self, fps: f32, particle_count: usize) {
        self.fps = fps;
        self.particle_count = particle_count;
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Text-box rendering of the current value.
    pub fn value_text(&self, parameter: Parameter) -> String {
        match self.current(parameter) {
            EmitterUpdate::Enabled(v) | EmitterUpdate::Fade(v) => {
                String::from(if v { "on" } else { "off" })
            }
            EmitterUpdate::Color(c) => format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a),
            EmitterUpdate::MaxParticles(v) => v.to_string(),
            other => numeric_value(&other).map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(EmitterConfig::fountain())
    }
}

fn parameter_of(update: &EmitterUpdate) -> Parameter {
    match update {
        EmitterUpdate::Enabled(_) => Parameter::Enabled,
        EmitterUpdate::Color(_) => Parameter::Color,
        EmitterUpdate::MaxParticles(_) => Parameter::MaxParticles,
        EmitterUpdate::ParticleSize(_) => Parameter::ParticleSize,
        EmitterUpdate::LifeTime(_) => Parameter::LifeTime,
        EmitterUpdate::Fade(_) => Parameter::Fade,
        EmitterUpdate::Rate(_) => Parameter::Rate,
        EmitterUpdate::Radius(_) => Parameter::Radius,
        EmitterUpdate::Angle(_) => Parameter::Angle,
        EmitterUpdate::Spread(_) => Parameter::Spread,
        EmitterUpdate::MinSpeed(_) => Parameter::MinSpeed,
        EmitterUpdate::MaxSpeed(_) => Parameter::MaxSpeed,
        EmitterUpdate::Gravity(_) => Parameter::Gravity,
    }
}
