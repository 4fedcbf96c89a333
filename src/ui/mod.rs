//! UI layer: top bar, the three views, and chart primitives.

pub mod calculator;
pub mod explore;
pub mod panels;
pub mod plot;
