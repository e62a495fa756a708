//! Core application primitives (orchestrator, scheduler, session)

pub mod runtime;
pub mod scheduler;
pub mod session;

pub use runtime::*;
pub use scheduler::*;
pub use session::*;
