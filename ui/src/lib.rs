#![warn(clippy::all, rust_2018_idioms)]
//! egui dashboard for payment operations.

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::PayopsApp;
