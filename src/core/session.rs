//! Run/stop flag owned by the process shell.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Continuous-mode switch. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunSession {
    running: Arc<AtomicBool>,
}

impl RunSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
