//! Observable orchestrator status.

use std::fmt;

/// Lifecycle phase of the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Probing,
    Downloading,
    Succeeded,
    Failed,
}

impl Phase {
    /// Terminal phases persist until the next invocation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Probing => write!(f, "probing"),
            Phase::Downloading => write!(f, "downloading"),
            Phase::Succeeded => write!(f, "succeeded"),
            Phase::Failed => write!(f, "failed"),
        }
    }
}

/// User-facing status. Replaced whole on every transition, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrchestratorStatus {
    pub phase: Phase,
    pub message: String,
}

impl OrchestratorStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn new(phase: Phase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_is_idle() {
        let status = OrchestratorStatus::idle();
        assert_eq!(status.phase, Phase::Idle);
        assert!(status.message.is_empty());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Succeeded.is_terminal());
        assert!(Phase::Failed.is_terminal());
        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Probing.is_terminal());
        assert!(!Phase::Downloading.is_terminal());
    }
}
