pub mod shell_service;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::ExecutorBox;
use crate::domain::models::ExecutorName;

pub struct ExecutorManager {}

impl ExecutorManager {
    pub fn get(name: ExecutorName) -> Result<ExecutorBox> {
        if name == ExecutorName::ShellService {
            return Ok(Box::<shell_service::ShellService>::default());
        }

        bail!(format!("No executor implemented for {name}"))
    }
}
