// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod form;
pub mod geolocation;
pub mod map_view;
pub mod persistence;
pub mod runtime;
pub mod store;
pub mod ui;
pub mod workout;
