use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{ApplicationTag, Product};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a product catalog from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "id": 1, "model": "1522", "gRange": "10g", ... }, ...]`
/// * `.csv`  – same column names, `applications` semicolon-separated
///
/// Magnitude strings are kept verbatim; bad ones are reported by the filter.
pub fn load_file(path: &Path) -> Result<Vec<Product>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let products = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    check_unique_ids(&products)?;
    Ok(products)
}

fn check_unique_ids(products: &[Product]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for p in products {
        if !seen.insert(p.id) {
            bail!("Duplicate product id {}", p.id);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<Product>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Product::deserialize(rec).with_context(|| format!("Row {i}: invalid product"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV line before the application list is split.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    id: u32,
    model: String,
    manufacturer: String,
    #[serde(default)]
    applications: String,
    technology: String,
    standards: String,
    axis: String,
    g_range: String,
    bias_inrun: String,
    temperature: i64,
    shock: i64,
}

impl From<CsvRow> for Product {
    fn from(row: CsvRow) -> Self {
        Product {
            id: row.id,
            model: row.model,
            manufacturer: row.manufacturer,
            applications: split_applications(&row.applications),
            technology: row.technology,
            standards: row.standards,
            axis: row.axis,
            g_range: row.g_range,
            bias_inrun: row.bias_inrun,
            temperature: row.temperature,
            shock: row.shock,
        }
    }
}

/// `"defense; space;aerospace"` → three tags. Empty entries are dropped.
fn split_applications(s: &str) -> Vec<ApplicationTag> {
    s.split(';')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(ApplicationTag::new)
        .collect()
}

fn load_csv(path: &Path) -> Result<Vec<Product>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(row_no, result)| {
            result
                .map(Product::from)
                .with_context(|| format!("CSV row {row_no}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const JSON: &str = r#"[
  { "id": 1, "model": "1522", "manufacturer": "Silicon Designs Inc.",
    "applications": ["general"], "technology": "MEMS", "standards": "Industrial",
    "axis": "1", "gRange": "2g", "biasInrun": "12µg", "temperature": -40, "shock": 500 },
  { "id": 6, "model": "1522", "manufacturer": "Silicon Designs Inc.",
    "applications": ["defense", "Space"], "technology": "MEMS", "standards": "Industrial",
    "axis": "1", "gRange": "abc", "biasInrun": "60µg", "temperature": 25, "shock": 2000 }
]"#;

    #[test]
    fn loads_json_records() {
        let file = write_temp(".json", JSON);
        let products = load_file(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, 6);
        assert_eq!(products[1].applications[1].key(), "space");
        // magnitudes are not validated at load time
        assert_eq!(products[1].g_range, "abc");
    }

    #[test]
    fn loads_csv_with_semicolon_applications() {
        let csv = "\
id,model,manufacturer,applications,technology,standards,axis,gRange,biasInrun,temperature,shock
2,1522,Silicon Designs Inc.,defense; general;aerospace,MEMS,Industrial,1,5g,12µg,-40,1000
9,2227,Silicon Designs Inc.,,MEMS,Industrial,1,10g,12µg,-40,1200
";
        let file = write_temp(".csv", csv);
        let products = load_file(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        let labels: Vec<&str> = products[0].applications.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["defense", "general", "aerospace"]);
        assert!(products[1].applications.is_empty());
        assert_eq!(products[1].temperature, -40);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = JSON.replace("\"id\": 6", "\"id\": 1");
        let file = write_temp(".json", &json);
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate product id 1");
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".parquet", "");
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file extension: .parquet");
    }

    #[test]
    fn reports_bad_row_index() {
        let file = write_temp(".json", r#"[{ "id": "x" }]"#);
        let err = load_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Row 0: invalid product");
    }
}
