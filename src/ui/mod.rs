//! Terminal front end: pages, widgets and the event loop.

pub mod app;
pub mod dashboard_view;
pub mod date_picker;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod pagination;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod timer;
pub mod transactions_view;

pub use runtime::run;
