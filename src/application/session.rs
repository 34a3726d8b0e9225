use super::builder::OrderBuilder;
use super::payment::collect_payment;
use super::processor::OrderProcessor;
use super::summary::{OrderSummary, encode_order};
use crate::config::StallConfig;
use crate::domain::menu::{LineItem, Menu, Price};
use crate::domain::ports::{Console, StationBox};
use crate::domain::processing::ProcessingOutcome;
use crate::error::Result;
use crate::infrastructure::station::SimulatedStation;
use std::sync::Arc;

/// What happened during one order cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub summary: OrderSummary,
    pub change: Price,
    pub outcome: ProcessingOutcome,
}

/// One order cycle at the stall: take the order, show the bill, collect
/// payment, then prepare the food.
///
/// The menu is owned by the session, so quantities never outlive it.
pub struct Session {
    menu: Menu,
    processor: OrderProcessor,
}

impl Session {
    pub fn new(menu: Menu, config: StallConfig) -> Self {
        let station: StationBox = Arc::new(SimulatedStation::new(config.unit_delay));
        Self::with_station(menu, config, station)
    }

    pub fn with_station(menu: Menu, config: StallConfig, station: StationBox) -> Self {
        Self {
            menu,
            processor: OrderProcessor::new(station, config.global_timeout),
        }
    }

    pub async fn run<C: Console + ?Sized>(mut self, console: &mut C) -> Result<SessionReport> {
        let order = OrderBuilder::new(&mut self.menu).run(console)?;
        tracing::info!(items = order.len(), "order taken");

        let summary = OrderSummary::from_order(&order, &self.menu);
        for line in summary.render() {
            console.println(&line)?;
        }
        let encoded = encode_order(&order, &self.menu)?;
        console.println(&format!("Encoded order (base64): {encoded}"))?;

        let change = collect_payment(console, summary.total)?;
        console.println(&format!("Change: {change}"))?;

        let items: Vec<LineItem> = order.lines(&self.menu).into_iter().cloned().collect();
        let outcome = self.processor.process(items, console).await?;

        Ok(SessionReport {
            summary,
            change,
            outcome,
        })
    }
}
