pub mod api;
pub mod cli;
pub mod config;
pub mod data_paths;
pub mod display;
pub mod format;
pub mod logging;
pub mod models;
pub mod ui;
