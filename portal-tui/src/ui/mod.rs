// UI modules
pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;

// Main entry point
pub mod render_loop;

pub use render_loop::run_app;
