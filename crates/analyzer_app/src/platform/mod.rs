mod app;
mod config;
mod console;
mod effects;
mod logging;
mod picker;
mod render;

pub use app::run_app;
