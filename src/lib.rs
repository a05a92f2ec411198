//! Sensor Finder: browse a catalog of sensor components and narrow it down
//! with range sliders and an application filter.
//!
//! The filtering logic lives in [`data::filter`] and is independent of the
//! egui front end in [`app`] and [`ui`].

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
