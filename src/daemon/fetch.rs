//! On-demand fetch trigger.

use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::FetcherConfig;

/// Failure of a fetch run. The `Display` text is what clients see.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no fetch command configured")]
    NotConfigured,

    #[error("failed to start fetch command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("fetch command exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("{0}")]
    Other(String),
}

/// Runs one fetch pass of the daemon.
#[async_trait]
pub trait FetchOperation: Send + Sync {
    async fn fetch(&self, config: &FetcherConfig) -> Result<(), FetchError>;
}

/// Runs `fetch.command` from the config and waits for it to exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandFetch;

#[async_trait]
impl FetchOperation for CommandFetch {
    async fn fetch(&self, config: &FetcherConfig) -> Result<(), FetchError> {
        let (program, args) = config
            .fetch
            .command
            .split_first()
            .ok_or(FetchError::NotConfigured)?;

        tracing::debug!(program = %program, ?args, "Running fetch command");

        let output = Command::new(program).args(args).output().await?;
        if output.status.success() {
            return Ok(());
        }

        Err(FetchError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
