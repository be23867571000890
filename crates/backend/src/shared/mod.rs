pub mod config;
pub mod format;
pub mod relay;
pub mod state;
pub mod upstream;
