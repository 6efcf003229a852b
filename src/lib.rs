// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod lookup;
pub mod record;

pub mod aggregate;
pub mod check;
pub mod csv;
pub mod file;
pub mod log;
pub mod preview;
pub mod progress;
pub mod runner;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
