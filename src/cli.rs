//! Command line and interactive questions.

pub mod parser;
pub mod questions;
