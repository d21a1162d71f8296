use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Number of series that get distinct colours before the palette repeats.
pub const PALETTE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.50);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours: position in the chart → Color32
// ---------------------------------------------------------------------------

/// Assigns colours to series by index, cycling after [`PALETTE_SIZE`].
#[derive(Debug, Clone)]
pub struct SeriesColors {
    palette: Vec<Color32>,
}

impl SeriesColors {
    pub fn new() -> Self {
        SeriesColors {
            palette: generate_palette(PALETTE_SIZE),
        }
    }

    pub fn color_for(&self, index: usize) -> Color32 {
        self.palette[index % self.palette.len()]
    }
}

impl Default for SeriesColors {
    fn default() -> Self {
        Self::new()
    }
}
