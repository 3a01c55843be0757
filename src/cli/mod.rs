//! Command-line interface definitions.

mod args;

pub use args::{usage_exit_code, Args, Job};
