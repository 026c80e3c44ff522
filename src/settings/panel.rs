//! Egui rendering of the settings panel.

use super::{numeric_value, Parameter, Settings};
use crate::color::Color;
use crate::config::EmitterUpdate;
use egui::Ui;

/// Draw the emitter settings. Returns `true` if anything changed.
///
/// Changes are recorded in `settings` and reach the emitter on the next
/// [`Settings::apply_pending`].
pub fn show(ui: &mut Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.heading("Settings");
    ui.label(
        "The small circle carries a particle emitter. Drag it with the left mouse button. \
         Changed settings only apply to new particles.",
    );
    ui.separator();

    ui.label(format!("FPS: {:.0}", settings.fps()));
    ui.label(format!("Particles: {}", settings.particle_count()));

    let mut enabled = settings.enabled();
    let caption = if enabled { "Stop" } else { "Start" };
    if ui.toggle_value(&mut enabled, caption).changed() {
        changed |= settings.set(EmitterUpdate::Enabled(enabled));
    }

    let mut rgba = settings.config().color.to_array();
    let color_changed = ui
        .horizontal(|ui| {
            ui.label(Parameter::Color.label());
            ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed()
        })
        .inner;
    if color_changed {
        changed |= settings.set(EmitterUpdate::Color(Color::from(rgba)));
    }

    let mut fade = settings.config().fade;
    if ui.checkbox(&mut fade, Parameter::Fade.label()).changed() {
        changed |= settings.set(EmitterUpdate::Fade(fade));
    }

    ui.separator();

    for parameter in Parameter::NUMERIC {
        let Some((min, max)) = parameter.range() else {
            continue;
        };
        let Some(mut value) = numeric_value(&settings.current(parameter)) else {
            continue;
        };

        let mut slider = egui::Slider::new(&mut value, min..=max).text(parameter.label());
        if parameter.is_integer() {
            slider = slider.integer();
        }

        if ui.add(slider).changed() {
            if let Some(update) = parameter.with_value(value) {
                changed |= settings.set(update);
            }
        }
    }

    changed
}
