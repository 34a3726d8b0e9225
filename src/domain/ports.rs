use super::menu::LineItem;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Line-oriented conversation with the customer.
pub trait Console {
    /// Reads one line without its terminator. Fails with
    /// [`StallError::InputClosed`](crate::error::StallError::InputClosed) at end of input.
    fn read_line(&mut self) -> Result<String>;
    /// Writes text without a trailing newline, for prompts.
    fn print(&mut self, text: &str) -> Result<()>;
    fn println(&mut self, line: &str) -> Result<()>;

    fn prompt(&mut self, text: &str) -> Result<String> {
        self.print(text)?;
        self.read_line()
    }
}

/// Prepares one ordered item and reports how long it took.
#[async_trait]
pub trait Station: Send + Sync {
    async fn prepare(&self, item: &LineItem) -> Duration;
}

pub type StationBox = Arc<dyn Station>;
