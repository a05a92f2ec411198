use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Product;

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
            let hsl = Hsl::new(hue, 0.65, 0.40);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Badge colours: application key → Color32
// ---------------------------------------------------------------------------

/// Background colour for each application badge in the table.
#[derive(Debug, Clone)]
pub struct BadgeColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl BadgeColors {
    /// Assign one hue per distinct application key found in the catalog.
    pub fn for_catalog(products: &[Product]) -> Self {
        let keys: Vec<String> = products
            .iter()
            .flat_map(|p| p.applications.iter().map(|t| t.key().to_string()))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();

        let palette = generate_palette(keys.len());
        let mapping = keys.into_iter().zip(palette).collect();

        BadgeColors {
            mapping,
            default_color: Color32::from_rgb(37, 99, 235),
        }
    }

    /// Look up the colour for an application key.
    pub fn color_for(&self, key: &str) -> Color32 {
        self.mapping.get(key).copied().unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::builtin;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn every_builtin_application_gets_its_own_colour() {
        let colors = BadgeColors::for_catalog(&builtin());
        // general, defense, aerospace, aircraft, vtol, space, launcher
        assert_eq!(colors.mapping.len(), 7);
        let distinct: std::collections::BTreeSet<[u8; 4]> =
            colors.mapping.values().map(|c| c.to_array()).collect();
        assert_eq!(distinct.len(), 7);
        assert_eq!(colors.color_for("unknown"), colors.default_color);
    }
}
