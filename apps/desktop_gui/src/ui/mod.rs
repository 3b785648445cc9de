//! UI layer for desktop GUI: app shell, routes, pages, widgets, and theme.

pub mod app;
pub mod pages;
pub mod routes;
pub mod theme;
pub mod widgets;

pub use app::{StartupConfig, VisualizerApp};
