use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A monetary value in rupiah.
///
/// Wraps `rust_decimal::Decimal` so totals and change are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Multiplies a unit price by an ordered quantity.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| acc + price)
    }
}

/// One entry of the stall menu together with how much of it has been ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: 0,
        }
    }

    /// Adds to the running quantity. Quantities only ever grow.
    pub fn add_quantity(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The stall's catalog. Item positions never change during an order cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<LineItem>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(vec![
            LineItem::new("Nasi Goreng", Price::new(dec!(20000))),
            LineItem::new("Mie Goreng", Price::new(dec!(18000))),
            LineItem::new("Ayam Bakar", Price::new(dec!(25000))),
        ])
    }
}

impl Menu {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&LineItem> {
        self.items.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut LineItem> {
        self.items.get_mut(position)
    }
}
