//! Prayer window resolver.
//!
//! Answers "which prayer is it now, which comes next, and how long until
//! then?" from three consecutive daily tables and a clock reading. This is
//! a pure computation: it does no I/O and keeps no state between calls.

mod duration;
mod error;
mod window;


pub use duration::{next_instant, time_until};
pub use error::{ParseStage, ResolveError};
pub use window::{ResolvedWindow, resolve};
