use std::{process::Stdio, time::Duration};

use async_trait::async_trait;
use tokio::{io::AsyncWriteExt, process::Command};

use crate::errors::{AppError, AppResult};

/// One backend call: program, fixed arguments, extra environment and the
/// payload written to stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub stdin: String,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            stdin: String::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn stdin(mut self, payload: impl Into<String>) -> Self {
        self.stdin = payload.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: Invocation) -> AppResult<ProcessOutput>;
}

/// Spawns one child process per call and buffers both output streams until it exits.
pub struct SubprocessRunner {
    timeout: Option<Duration>,
}

impl SubprocessRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    async fn run_to_completion(invocation: &Invocation) -> AppResult<ProcessOutput> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AppError::SpawnFailed {
                program: invocation.program.clone(),
                source,
            })?;

        // Write on a separate task so a child that fills its stdout pipe before
        // reading all of stdin cannot deadlock against us.
        let writer = child.stdin.take().map(|mut stdin| {
            let payload = invocation.stdin.clone().into_bytes();
            tokio::spawn(async move {
                stdin.write_all(&payload).await?;
                stdin.shutdown().await
            })
        });

        let output = child.wait_with_output().await?;

        if let Some(writer) = writer {
            match writer.await {
                Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    log::warn!("Failed to write prompt to {}: {}", invocation.program, e)
                }
                Err(e) => log::warn!("Prompt writer task failed: {}", e),
                _ => {}
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(AppError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run(&self, invocation: Invocation) -> AppResult<ProcessOutput> {
        log::debug!(
            "Spawning {} with {} argument(s)",
            invocation.program,
            invocation.args.len()
        );

        match self.timeout {
            // Dropping the in-flight future drops the child, which kills it.
            Some(limit) => tokio::time::timeout(limit, Self::run_to_completion(&invocation))
                .await
                .map_err(|_| AppError::Timeout(limit))?,
            None => Self::run_to_completion(&invocation).await,
        }
    }
}
