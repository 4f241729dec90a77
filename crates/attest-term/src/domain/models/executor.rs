use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use attest_shell_types::ShellOutput;
use attest_shell_types::ShellRequest;
use strum::EnumIter;
use strum_macros::Display;
use strum_macros::EnumString;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ExecutorName {
    ShellService,
}

impl ExecutorName {
    pub fn parse(text: &str) -> Option<ExecutorName> {
        return ExecutorName::from_str(text).ok();
    }
}

/// The external collaborator that actually runs submitted commands. The
/// console never implements command behavior; it hands the line across this
/// boundary and formats whatever comes back.
#[async_trait]
pub trait ShellExecutor: Send + Sync {
    fn name(&self) -> ExecutorName;
    async fn health_check(&self) -> Result<()>;
    async fn execute(&self, request: ShellRequest) -> Result<ShellOutput>;
}

pub type ExecutorBox = Box<dyn ShellExecutor>;
