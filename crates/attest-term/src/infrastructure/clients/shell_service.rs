#[cfg(test)]
#[path = "shell_service_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use attest_shell_types::ShellError;
use attest_shell_types::ShellOutput;
use attest_shell_types::ShellRequest;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ExecutorName;
use crate::domain::models::ShellExecutor;

/// HTTP client for the host-side shell service, the process that actually
/// runs commands. The console only carries the wire contract across;
/// command semantics live entirely on the other side.
pub struct ShellService {
    url: String,
    timeout: String,
}

impl Default for ShellService {
    fn default() -> ShellService {
        return ShellService {
            url: Config::get(ConfigKey::ShellServiceUrl),
            timeout: "1000".to_string(),
        };
    }
}

impl ShellService {
    #[cfg(test)]
    fn with_url(url: &str) -> ShellService {
        return ShellService {
            url: url.to_string(),
            timeout: "1000".to_string(),
        };
    }
}

#[async_trait]
impl ShellExecutor for ShellService {
    fn name(&self) -> ExecutorName {
        return ExecutorName::ShellService;
    }

    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Shell service URL is not defined");
        }

        let health_url = format!("{}/health", self.url);
        let res = reqwest::Client::new()
            .get(&health_url)
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "shell service is not reachable");
            bail!("Shell service is not reachable");
        }

        let status = res.unwrap().status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "shell service health check failed");
            bail!("Shell service health check failed");
        }

        return Ok(());
    }

    async fn execute(&self, request: ShellRequest) -> Result<ShellOutput> {
        let execute_url = format!("{}/execute", self.url);

        // No request timeout here: commands may legitimately run for a long
        // time, and the console's gate already serializes submissions.
        let response = reqwest::Client::new()
            .post(&execute_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ShellError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = status.as_u16(), body = %body, "shell service rejected the command");
            return Err(ShellError::Rejected(body).into());
        }

        let output = response
            .json::<ShellOutput>()
            .await
            .map_err(|err| ShellError::MalformedResponse(err.to_string()))?;
        return Ok(output);
    }
}
