//! Interactive text front-end for the warehouse assistant.

pub mod config;
pub mod shell;

pub use config::AppConfig;
pub use shell::{Shell, ShellAction};
