// src/specs/mod.rs
//
// One parser per portal page. All of them take the raw page HTML and do no I/O;
// fetching lives in `scrape`.

pub mod lunch;
pub mod preschool;
pub mod schedule;
pub mod students;
