use crate::domain::menu::LineItem;
use crate::domain::ports::Station;
use async_trait::async_trait;
use std::time::Duration;

/// A kitchen station that simulates cooking by sleeping a fixed delay per
/// ordered unit. Reports the planned delay as the preparation time.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedStation {
    unit_delay: Duration,
}

impl SimulatedStation {
    pub fn new(unit_delay: Duration) -> Self {
        Self { unit_delay }
    }

    /// Planned preparation time for `quantity` units.
    pub fn delay_for(&self, quantity: u32) -> Duration {
        self.unit_delay.saturating_mul(quantity)
    }
}

#[async_trait]
impl Station for SimulatedStation {
    async fn prepare(&self, item: &LineItem) -> Duration {
        let delay = self.delay_for(item.quantity);
        tokio::time::sleep(delay).await;
        delay
    }
}
