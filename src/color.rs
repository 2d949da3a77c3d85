use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Magnitude color scale
// ---------------------------------------------------------------------------

/// Map a magnitude to a colour on a continuous scale: teal for small events,
/// through yellow, to red at the top of the band.
pub fn magnitude_color(mag: f64) -> Color32 {
    // The scale covers M 0–9; anything outside clamps to the nearest end.
    let t = (mag.clamp(0.0, 9.0) / 9.0) as f32;
    let hue = 180.0 - t * 180.0;
    let hsl = Hsl::new(hue, 0.75, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Reference swatches for the side panel, one per whole magnitude step.
pub fn scale_swatches() -> Vec<(String, Color32)> {
    (0..=9)
        .map(|m| (format!("M {m}"), magnitude_color(m as f64)))
        .collect()
}
