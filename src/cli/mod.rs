pub mod commands;
pub mod settings;

pub use commands::Cli;
pub use settings::Settings;
