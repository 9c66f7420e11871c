//! Configuration, logging and command line plumbing shared by the tiletools binaries.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod config;
pub mod utils;

pub use config::*;
