//! Sandbox filesystem conventions.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file};
