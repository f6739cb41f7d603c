//! Text front end for oxo: play against the engine on stdin/stdout.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::PlayError;
pub use session::{Flow, Session, SessionConfig, Tally};
