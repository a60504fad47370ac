/// Command-line parsing and subcommand execution
pub mod cli;
/// Constants and default values
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// JSON puzzle and solution files
pub mod format;
/// Logger initialisation
pub mod logging;
/// Terminal progress display
pub mod progress;
