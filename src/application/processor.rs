use crate::domain::menu::LineItem;
use crate::domain::ports::{Console, StationBox};
use crate::domain::processing::{ProcessingMessage, ProcessingOutcome};
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handles to a running batch of preparation tasks.
pub struct Dispatch {
    /// Progress from every task. Closes once all tasks have finished.
    pub messages: mpsc::Receiver<ProcessingMessage>,
    /// Task that waits for every preparation task and then closes `messages`.
    pub coordinator: JoinHandle<()>,
}

/// Fans ordered items out to concurrent preparation tasks and waits for their
/// progress under a single deadline.
///
/// Tasks are never cancelled. If the deadline passes, the processor stops
/// listening and the remaining tasks run to completion on their own; their
/// later messages are dropped because nobody receives them.
pub struct OrderProcessor {
    station: StationBox,
    global_timeout: Duration,
}

impl OrderProcessor {
    pub fn new(station: StationBox, global_timeout: Duration) -> Self {
        Self {
            station,
            global_timeout,
        }
    }

    /// Spawns one task per item plus the coordinator. Must be called from
    /// within a Tokio runtime.
    pub fn dispatch(&self, items: Vec<LineItem>) -> Dispatch {
        let (tx, messages) = mpsc::channel(items.len().max(1));
        let mut handles = Vec::with_capacity(items.len());

        for item in items {
            let tx = tx.clone();
            let station = Arc::clone(&self.station);
            handles.push(tokio::spawn(async move {
                let name = item.name.clone();
                let quantity = item.quantity;

                let started = ProcessingMessage::Started {
                    name: name.clone(),
                    quantity,
                };
                if tx.send(started).await.is_err() {
                    tracing::debug!(item = %name, "start message dropped, nobody is listening");
                }

                let elapsed = station.prepare(&item).await;
                tracing::debug!(item = %name, ?elapsed, "item prepared");

                let finished = ProcessingMessage::Finished {
                    name: name.clone(),
                    quantity,
                    elapsed,
                };
                if tx.send(finished).await.is_err() {
                    tracing::debug!(item = %name, "completion message abandoned");
                }
            }));
        }

        let coordinator = tokio::spawn(async move {
            for handle in handles {
                if let Err(e) = handle.await {
                    tracing::error!(error = %e, "preparation task failed");
                }
            }
            // Last sender: dropping it closes the channel.
            drop(tx);
            tracing::debug!("all preparation tasks finished");
        });

        Dispatch {
            messages,
            coordinator,
        }
    }

    /// Passes messages to `on_message` until the channel closes or the global
    /// timeout elapses, whichever comes first. The timeout is measured from
    /// the start of this call and is not reset by incoming messages.
    pub async fn drain<F>(
        &self,
        mut messages: mpsc::Receiver<ProcessingMessage>,
        mut on_message: F,
    ) -> Result<ProcessingOutcome>
    where
        F: FnMut(ProcessingMessage) -> Result<()>,
    {
        let deadline = tokio::time::sleep(self.global_timeout);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                message = messages.recv() => match message {
                    Some(message) => on_message(message)?,
                    None => return Ok(ProcessingOutcome::Completed),
                },
                _ = &mut deadline => {
                    tracing::warn!(timeout = ?self.global_timeout, "stopped waiting for preparation");
                    return Ok(ProcessingOutcome::TimedOut);
                }
            }
        }
    }

    /// Prepares `items` and prints progress to `console`.
    pub async fn process<C: Console + ?Sized>(
        &self,
        items: Vec<LineItem>,
        console: &mut C,
    ) -> Result<ProcessingOutcome> {
        tracing::info!(items = items.len(), "processing order");
        let Dispatch { messages, .. } = self.dispatch(items);

        let outcome = self
            .drain(messages, |message| console.println(&message.to_string()))
            .await?;

        match outcome {
            ProcessingOutcome::Completed => console.println("All orders have been processed.")?,
            ProcessingOutcome::TimedOut => console.println("Sorry for the wait!")?,
        }
        Ok(outcome)
    }
}
