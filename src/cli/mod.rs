//! Terminal Surface
//!
//! Rendering and the interactive loop. Everything non-deterministic about
//! the program (stdin, stdout, screen clearing) lives here; the modules
//! below only call into the pure engines.
//!
//! - `menu`: session menu and round-result rendering
//! - `table`: N×N outcome table rendering
//! - `session`: session context and the blocking prompt/response loop

pub mod menu;
pub mod session;
pub mod table;

pub use session::{Command, Session};
