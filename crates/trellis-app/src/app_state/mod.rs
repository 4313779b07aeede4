//! Application state and the winit event loop.
//!
//! [`TrellisApp`] owns the window and, once the window exists, the
//! [`session::Session`] that drives every pane inside it.

pub mod session;

mod core;
mod event_handler;
mod init;
mod polling;
mod title;
mod types;

pub use core::TrellisApp;
