/// Command-line parsing and job orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image file decoding and encoding
pub mod image;
/// Tile library construction from a directory
pub mod library;
/// Progress display
pub mod progress;
