use crate::domain::menu::{LineItem, Menu, Price};
use crate::domain::order::Order;
use crate::error::{Result, StallError};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::collections::BTreeMap;

const DIAGNOSTIC_LABEL: &str = "Order: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: Price,
}

/// Per-item costs and the grand total of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Price,
}

impl OrderSummary {
    /// Every distinct entry contributes exactly one line, in menu order.
    pub fn from_order(order: &Order, menu: &Menu) -> Self {
        let lines: Vec<SummaryLine> = order
            .lines(menu)
            .into_iter()
            .map(|item| SummaryLine {
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();
        let total = lines.iter().map(|line| line.line_total).sum();
        Self { lines, total }
    }

    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push("Your order:".to_string());
        for line in &self.lines {
            out.push(format!(
                "{} x{} = {}",
                line.name, line.quantity, line.line_total
            ));
        }
        out.push(format!("Total = {}", self.total));
        out
    }
}

/// Plain-text rendering of the order mapping: a label followed by JSON keyed
/// by item name.
pub fn describe_order(order: &Order, menu: &Menu) -> Result<String> {
    let mapping: BTreeMap<&str, &LineItem> = order
        .lines(menu)
        .into_iter()
        .map(|item| (item.name.as_str(), item))
        .collect();
    Ok(format!("{DIAGNOSTIC_LABEL}{}", serde_json::to_string(&mapping)?))
}

/// Base64 of [`describe_order`]. This is an encoding for display, not
/// encryption.
pub fn encode_order(order: &Order, menu: &Menu) -> Result<String> {
    Ok(STANDARD.encode(describe_order(order, menu)?))
}

pub fn decode_diagnostic(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| StallError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StallError::Decode(e.to_string()))
}
