//! Ctrl+C handling
//!
//! The handler only records that an interrupt happened. The running child
//! receives the terminal's SIGINT itself and exits; the use case checks the
//! flag when the child returns and stops the run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "user pressed Ctrl+C" flag
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the process-wide Ctrl+C handler; may only be called once
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let raised = Arc::clone(&self.raised);
        ctrlc::set_handler(move || {
            raised.store(true, Ordering::SeqCst);
        })
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}
