use super::model::{ApplicationTag, Product};

// ---------------------------------------------------------------------------
// Embedded catalog
// ---------------------------------------------------------------------------

/// Component categories listed in the "Showing components for" strip.
/// Only the first one (accelerometers) has products in the catalog.
pub const COMPONENT_CATEGORIES: &[&str] = &[
    "Accelerometer",
    "ADAHRS",
    "AHRS",
    "Antenna",
    "Airspeed",
    "GPS Receiver",
    "Gyroscopes",
    "IMU",
    "Magnetometer",
    "Operating System",
    "Startracker",
];

/// Human-readable name of the embedded catalog.
pub const BUILTIN_SOURCE: &str = "built-in catalog";

struct Row {
    id: u32,
    model: &'static str,
    applications: &'static [&'static str],
    g_range: &'static str,
    bias_inrun: &'static str,
    temperature: i64,
    shock: i64,
}

const MANUFACTURER: &str = "Silicon Designs Inc.";

#[rustfmt::skip]
const ROWS: &[Row] = &[
    Row { id: 1, model: "1522", applications: &["general"], g_range: "2g", bias_inrun: "12µg", temperature: -40, shock: 500 },
    Row { id: 2, model: "1522", applications: &["defense", "general", "aerospace"], g_range: "5g", bias_inrun: "12µg", temperature: -40, shock: 1000 },
    Row { id: 3, model: "1522", applications: &["defense", "general", "aircraft", "aerospace"], g_range: "10g", bias_inrun: "30µg", temperature: -40, shock: 1500 },
    Row { id: 4, model: "1522", applications: &["defense", "general", "aircraft", "aerospace"], g_range: "25g", bias_inrun: "60µg", temperature: -20, shock: 1000 },
    Row { id: 5, model: "1522", applications: &["defense", "general", "aircraft", "vtol", "aerospace"], g_range: "50g", bias_inrun: "60µg", temperature: 0, shock: 1500 },
    Row { id: 6, model: "1522", applications: &["defense", "space", "aerospace"], g_range: "100g", bias_inrun: "60µg", temperature: 25, shock: 2000 },
    Row { id: 7, model: "1522", applications: &["defense", "space", "launcher", "aerospace"], g_range: "200g", bias_inrun: "60µg", temperature: 85, shock: 2000 },
    Row { id: 8, model: "1522", applications: &["defense", "space", "launcher", "aerospace"], g_range: "400g", bias_inrun: "60µg", temperature: 100, shock: 1800 },
    Row { id: 9, model: "2227", applications: &["defense", "aircraft", "vtol", "aerospace"], g_range: "10g", bias_inrun: "12µg", temperature: -40, shock: 1200 },
];

/// The nine accelerometers shipped with the application.
pub fn builtin() -> Vec<Product> {
    ROWS.iter()
        .map(|row| Product {
            id: row.id,
            model: row.model.to_string(),
            manufacturer: MANUFACTURER.to_string(),
            applications: row
                .applications
                .iter()
                .map(|a| ApplicationTag::new(*a))
                .collect(),
            technology: "MEMS".to_string(),
            standards: "Industrial".to_string(),
            axis: "1".to_string(),
            g_range: row.g_range.to_string(),
            bias_inrun: row.bias_inrun.to_string(),
            temperature: row.temperature,
            shock: row.shock,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::MagnitudeField;

    #[test]
    fn nine_records_with_unique_ids_in_order() {
        let products = builtin();
        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        let unique: BTreeSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), products.len());
    }

    #[test]
    fn every_magnitude_is_well_formed() {
        for p in builtin() {
            assert!(p.magnitude(MagnitudeField::GRange).is_ok(), "{p:?}");
            assert!(p.magnitude(MagnitudeField::BiasInrun).is_ok(), "{p:?}");
        }
    }
}
