pub mod api;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod logging;
pub mod store;
pub mod ui;
