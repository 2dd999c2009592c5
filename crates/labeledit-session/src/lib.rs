//! labeledit-session - Serialized edit sessions
//!
//! This crate provides the external surface of the labeledit engine: an
//! edit [`Session`] owning a working copy of a label grid, a command queue
//! that executes [`EditCommand`]s one at a time on a dedicated worker, and
//! snapshot-based read access for redisplay.
//!
//! The design rules:
//!
//! - the worker thread is the sole mutator of the grid
//! - callers only enqueue; submissions may come from any thread
//! - a reader never observes a partially applied edit
//! - an accepted command runs to completion; closing drains the queue

mod command;
mod error;
mod session;

pub use command::EditCommand;
pub use error::{SessionError, SessionResult};
pub use session::{Session, Ticket};
