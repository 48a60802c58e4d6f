pub mod config;
pub mod directory;
pub mod format;
pub mod state;
