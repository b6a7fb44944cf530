//! Path Configuration Architecture
//!
//! Limits and diagnostics applied while compiling and evaluating paths.

pub mod path;

pub use path::{PathConfig, PathConfigProvider};
