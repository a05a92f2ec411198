use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::FilterError;
use super::magnitude::{parse_magnitude, G_SUFFIX, MICRO_G_SUFFIX};

// ---------------------------------------------------------------------------
// ApplicationTag – one entry of a product's `applications` list
// ---------------------------------------------------------------------------

/// An application label ("defense", "Space", ...) together with its
/// lower-cased lookup key. The key is computed once so membership tests
/// never re-lower the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ApplicationTag {
    label: String,
    key: String,
}

impl ApplicationTag {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let key = normalize_label(&label);
        Self { label, key }
    }

    /// Label as it appears in the data.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canonical (trimmed, lower-case) form used for comparisons.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<String> for ApplicationTag {
    fn from(label: String) -> Self {
        ApplicationTag::new(label)
    }
}

impl From<&str> for ApplicationTag {
    fn from(label: &str) -> Self {
        ApplicationTag::new(label)
    }
}

impl From<ApplicationTag> for String {
    fn from(tag: ApplicationTag) -> Self {
        tag.label
    }
}

impl fmt::Display for ApplicationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Canonical form of an application label.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// MagnitudeField – the two string-encoded numeric columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagnitudeField {
    GRange,
    BiasInrun,
}

impl MagnitudeField {
    pub fn suffix(self) -> &'static str {
        match self {
            MagnitudeField::GRange => G_SUFFIX,
            MagnitudeField::BiasInrun => MICRO_G_SUFFIX,
        }
    }
}

impl fmt::Display for MagnitudeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagnitudeField::GRange => f.write_str("gRange"),
            MagnitudeField::BiasInrun => f.write_str("biasInrun"),
        }
    }
}

// ---------------------------------------------------------------------------
// Product – one row of the catalog
// ---------------------------------------------------------------------------

/// A single catalog entry. Field names serialize in camelCase so catalogs
/// exported from the web page load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub model: String,
    pub manufacturer: String,
    #[serde(default)]
    pub applications: Vec<ApplicationTag>,
    pub technology: String,
    pub standards: String,
    pub axis: String,
    /// Measurement range, e.g. `"10g"`.
    pub g_range: String,
    /// In-run bias stability, e.g. `"12µg"`.
    pub bias_inrun: String,
    /// Lower operating temperature in °C.
    pub temperature: i64,
    /// Shock rating in g.
    pub shock: i64,
}

impl Product {
    /// Raw text of a magnitude column.
    pub fn magnitude_raw(&self, field: MagnitudeField) -> &str {
        match field {
            MagnitudeField::GRange => &self.g_range,
            MagnitudeField::BiasInrun => &self.bias_inrun,
        }
    }

    /// Parsed value of a magnitude column.
    pub fn magnitude(&self, field: MagnitudeField) -> Result<i64, FilterError> {
        let raw = self.magnitude_raw(field);
        parse_magnitude(raw, field.suffix()).map_err(|source| FilterError::MalformedMagnitude {
            id: self.id,
            field,
            raw: raw.to_string(),
            source,
        })
    }

    /// Whether any application tag has the given canonical key.
    pub fn has_application(&self, key: &str) -> bool {
        self.applications.iter().any(|tag| tag.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::magnitude::MagnitudeError;
    use pretty_assertions::assert_eq;

    fn sample() -> Product {
        Product {
            id: 3,
            model: "1522".to_string(),
            manufacturer: "Silicon Designs Inc.".to_string(),
            applications: vec!["Defense".into(), "aircraft".into()],
            technology: "MEMS".to_string(),
            standards: "Industrial".to_string(),
            axis: "1".to_string(),
            g_range: "10g".to_string(),
            bias_inrun: "30µg".to_string(),
            temperature: -40,
            shock: 1500,
        }
    }

    #[test]
    fn tag_key_is_lowercase() {
        let tag = ApplicationTag::new(" VTOL ");
        assert_eq!(tag.label(), " VTOL ");
        assert_eq!(tag.key(), "vtol");
    }

    #[test]
    fn application_lookup_ignores_case() {
        let p = sample();
        assert!(p.has_application("defense"));
        assert!(p.has_application("aircraft"));
        assert!(!p.has_application("space"));
    }

    #[test]
    fn magnitudes_parse() {
        let p = sample();
        assert_eq!(p.magnitude(MagnitudeField::GRange), Ok(10));
        assert_eq!(p.magnitude(MagnitudeField::BiasInrun), Ok(30));
    }

    #[test]
    fn malformed_magnitude_names_product_and_field() {
        let mut p = sample();
        p.g_range = "abc".to_string();
        let err = p.magnitude(MagnitudeField::GRange).unwrap_err();
        assert_eq!(
            err,
            FilterError::MalformedMagnitude {
                id: 3,
                field: MagnitudeField::GRange,
                raw: "abc".to_string(),
                source: MagnitudeError::MissingSuffix {
                    suffix: "g".to_string()
                },
            }
        );
        assert_eq!(
            err.to_string(),
            "product 3: malformed gRange value 'abc': expected unit suffix 'g'"
        );
    }

    #[test]
    fn json_uses_camel_case_and_plain_string_tags() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["gRange"], "10g");
        assert_eq!(json["biasInrun"], "30µg");
        assert_eq!(json["applications"][0], "Defense");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back.applications[0].key(), "defense");
    }
}
