/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → TripDataset (derived month/day/hour/city)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ TripDataset │  Vec<TripRecord> tagged with its City
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → retain matching month / day
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
