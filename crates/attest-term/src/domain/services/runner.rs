use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::CommandOutcome;
use crate::domain::models::Event;
use crate::domain::models::ExecutorBox;

pub struct RunnerService {}

impl RunnerService {
    /// Drains the action channel, running each submitted command on a worker
    /// task and reporting its settlement back on the event channel. The
    /// console's execution gate guarantees at most one command is outstanding,
    /// so no queueing happens here. A transport failure becomes a settlement
    /// like any other; the session never sees an unhandled fault.
    pub async fn start(
        executor: ExecutorBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let executor_arc = Arc::new(executor);

        loop {
            if let Some(action) = rx.recv().await {
                match action {
                    Action::RunCommand(request) => {
                        let worker_executor = executor_arc.clone();
                        let worker_event_tx = event_tx.clone();
                        tokio::spawn(async move {
                            tracing::debug!(command = %request.command, "running command");
                            let outcome = match worker_executor.execute(request).await {
                                Ok(output) => CommandOutcome::Completed(output),
                                Err(err) => {
                                    tracing::error!(error = ?err, "executor call failed");
                                    CommandOutcome::TransportFailed(err.to_string())
                                }
                            };
                            let _ = worker_event_tx.send(Event::CommandSettled(outcome));
                        });
                    }
                }
            }
        }
    }
}
