// Collection error taxonomy: which stage failed and why

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Named sub-collection step a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Interfaces,
    Disk,
    Processes,
    Uptime,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Interfaces => "interfaces",
            Stage::Disk => "disk",
            Stage::Processes => "processes",
            Stage::Uptime => "uptime",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum FailureReason {
    #[error("timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: String },

    #[error("malformed output: {0}")]
    Malformed(String),

    #[error("{0}")]
    Unavailable(String),
}

impl FailureReason {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FailureReason::Timeout(_))
    }
}

/// A single collector failure; aborts the whole snapshot.
#[derive(Debug, Error)]
#[error("{stage} collection failed: {reason}")]
pub struct CollectionError {
    pub stage: Stage,
    #[source]
    pub reason: FailureReason,
}

impl CollectionError {
    pub fn new(stage: Stage, reason: FailureReason) -> Self {
        Self { stage, reason }
    }

    pub fn malformed(stage: Stage, detail: impl Into<String>) -> Self {
        Self::new(stage, FailureReason::Malformed(detail.into()))
    }

    pub fn unavailable(stage: Stage, detail: impl Into<String>) -> Self {
        Self::new(stage, FailureReason::Unavailable(detail.into()))
    }
}
