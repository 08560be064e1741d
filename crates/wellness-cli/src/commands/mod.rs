pub mod common;
pub mod completions;
pub mod config;
pub mod export;
pub mod path;
pub mod questions;
pub mod record;
