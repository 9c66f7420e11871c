//! Tree queries and workspace reconciliation for i3 and sway.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]
pub mod actions;
mod command;
pub mod config;
pub mod errors;
pub mod ipc;
pub mod models;
pub mod queries;
pub mod reconcile;

pub use command::{Command, CommandBatch, Direction};
pub use config::Config;
pub use errors::{Result, TileError};
pub use ipc::{EventStream, Flavor, MsgClient, WindowManager};
pub use reconcile::{fix_number, fix_output, NumberingScheme};
