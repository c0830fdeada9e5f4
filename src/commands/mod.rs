//! # CLI Command Implementations
//!
//! Each command lives in its own file with an `Args` struct derived using
//! `clap` and an `execute` function that calls into the `git_organize`
//! library.
//!
//! - `organize`: the default command, run when no subcommand is given
//! - `completions`: shell completion scripts

pub mod completions;
pub mod organize;
