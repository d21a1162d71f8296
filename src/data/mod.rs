/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  remote .csv / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, NameIndex
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Name == query → matching records
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
