//! Health & Lifestyle Dashboard: an egui desktop app for exploring a
//! health/lifestyle CSV dataset, plus the standalone data-preparation step
//! (`prepare-data`) that produces the cleaned table it reads.

pub mod app;
pub mod bmi;
pub mod data;
pub mod state;
pub mod ui;
