//! Keep In Touch frontend library: models, API client, filtering, validation, UI.

pub mod api;
pub mod app;
pub mod config;
pub mod filter;
pub mod models;
pub mod theme;
pub mod validate;
pub mod widgets;
