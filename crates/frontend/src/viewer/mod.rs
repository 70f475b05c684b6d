pub mod loader;
pub mod state;
pub mod ui;
