// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod schedule;
pub mod scrape;
pub mod specs;

pub use error::{Result, ScrapeError};
pub use schedule::reconstruct;
pub use scrape::{Portal, SchoolSoft};
