//! CLI module - Command-line interface for the application.

mod args;

pub use args::{Cli, Commands, ServeArgs};
