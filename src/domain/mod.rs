//! Domain types of the stall: the menu, the order, preparation progress and
//! the ports the application layer talks through.

pub mod menu;
pub mod order;
pub mod ports;
pub mod processing;
pub mod validation;
