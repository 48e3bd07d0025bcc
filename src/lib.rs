pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod harness;
pub mod hash;
pub mod output;
pub mod project;
pub mod scanner;

pub use error::{Result, StyleGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
