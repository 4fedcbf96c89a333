/// Data layer: core types, loading/cleaning, filtering, and statistics.
///
/// Architecture:
/// ```text
///  raw CSV
///     │
///     ▼
///  ┌────────┐
///  │ loader  │  recode gender, diagnostics, persist cleaned CSV
///  └────────┘
///     │
///     ▼
///  ┌──────────────┐
///  │ HealthDataset │  Vec<Record>, typed column access
///  └──────────────┘
///     │                │
///     ▼                ▼
///  ┌────────┐     ┌────────┐
///  │ filter  │     │ stats   │  age range / describe, Pearson r + p
///  └────────┘     └────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
