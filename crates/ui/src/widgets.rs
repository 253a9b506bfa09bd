//! Small helpers shared by the planner panels.

use bevy_egui::egui;

use planner::furniture::FurnitureKind;
use planner::snap::quantize;

/// Result of a stepped numeric field: the new value when the user changed
/// it, rounded to `step` and kept inside `min..=max`.
pub fn stepped_edit(current: f32, edited: f32, step: f32, min: f32, max: f32) -> Option<f32> {
    let value = quantize(edited, step).clamp(min, max);
    ((value - current).abs() > f32::EPSILON).then_some(value)
}

/// A labelled drag field that rounds its result to `step`.
pub fn stepped_drag_value(
    ui: &mut egui::Ui,
    label: &str,
    current: f32,
    step: f32,
    range: (f32, f32),
) -> Option<f32> {
    let mut edited = current;
    let response = ui
        .horizontal(|ui| {
            ui.label(label);
            ui.add(
                egui::DragValue::new(&mut edited)
                    .speed(step)
                    .range(range.0..=range.1)
                    .max_decimals(2)
                    .suffix(" m"),
            )
        })
        .inner;
    if !response.changed() {
        return None;
    }
    stepped_edit(current, edited, step, range.0, range.1)
}

/// Card fill for a furniture kind.
pub fn kind_color(kind: FurnitureKind) -> egui::Color32 {
    let [r, g, b] = kind.palette_color();
    egui::Color32::from_rgb(r, g, b)
}

/// Dark text used on the pastel cards.
pub const CARD_TEXT: egui::Color32 = egui::Color32::from_rgb(40, 40, 48);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_edit_rounds_to_step() {
        assert_eq!(stepped_edit(6.0, 6.3, 0.5, 1.0, 30.0), Some(6.5));
        let height = stepped_edit(3.0, 3.14, 0.1, 0.5, 10.0).unwrap();
        assert!((height - 3.1).abs() < 1e-5);
        assert_eq!(stepped_edit(3.0, 2.96, 0.1, 0.5, 10.0), None);
    }

    #[test]
    fn test_stepped_edit_unchanged_after_rounding() {
        assert_eq!(stepped_edit(6.0, 6.2, 0.5, 1.0, 30.0), None);
    }

    #[test]
    fn test_stepped_edit_clamps() {
        assert_eq!(stepped_edit(1.0, -4.0, 0.5, 1.0, 30.0), None);
        assert_eq!(stepped_edit(29.0, 99.0, 0.5, 1.0, 30.0), Some(30.0));
    }

    #[test]
    fn test_kind_color_matches_palette() {
        assert_eq!(
            kind_color(FurnitureKind::Chair),
            egui::Color32::from_rgb(0xff, 0xed, 0xd5)
        );
    }
}
