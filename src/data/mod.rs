/// Data layer: catalog records, loading, and filtering.
///
/// Architecture:
/// ```text
///   built-in rows      .json / .csv
///        │                  │
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │ catalog  │      │  loader  │  parse file → Vec<Product>
///   └──────────┘      └──────────┘
///        │                  │
///        └───────┬──────────┘
///                ▼
///        ┌──────────────┐
///        │   Product    │  raw magnitude strings, application tags
///        └──────────────┘
///                │
///                ▼
///        ┌──────────────┐
///        │    filter    │  parse magnitudes, test ranges → matching rows
///        └──────────────┘
/// ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod magnitude;
pub mod model;
