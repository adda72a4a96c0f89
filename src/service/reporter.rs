use crate::models::operator_event::OperatorEvent;
use log::{info, warn};

/// Operator-visible channel for per-item outcomes.
pub trait Reporter {
    fn report(&mut self, event: OperatorEvent);
}

/// Forwards events to the `log` facade, failures at warn level.
#[derive(Debug, Default)]
pub struct LogReporter {
    failures: usize,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, event: OperatorEvent) {
        if event.is_failure() {
            self.failures += 1;
            warn!("{}", event);
        } else {
            info!("{}", event);
        }
    }
}
