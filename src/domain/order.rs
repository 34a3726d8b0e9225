use super::menu::{LineItem, Menu};
use std::collections::HashMap;

/// The distinct items a customer has chosen, keyed by item name.
///
/// Each entry points at the item's position in the [`Menu`] rather than
/// holding a copy, so later quantity changes on the menu are visible here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    entries: HashMap<String, usize>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or refreshes) the entry for the item at `position`.
    ///
    /// Returns `false` and leaves the order untouched if the position is out
    /// of range or the item has nothing ordered yet.
    pub fn register(&mut self, menu: &Menu, position: usize) -> bool {
        match menu.get(position) {
            Some(item) if item.quantity > 0 => {
                self.entries.insert(item.name.clone(), position);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resolves the entries against the menu, in menu order.
    pub fn lines<'a>(&self, menu: &'a Menu) -> Vec<&'a LineItem> {
        let mut positions: Vec<usize> = self.entries.values().copied().collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| menu.get(position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_quantity() {
        let menu = Menu::default();
        let mut order = Order::new();

        assert!(!order.register(&menu, 0));
        assert!(order.is_empty());
    }

    #[test]
    fn test_register_is_keyed_by_name() {
        let mut menu = Menu::default();
        let mut order = Order::new();

        menu.get_mut(1).unwrap().add_quantity(1);
        assert!(order.register(&menu, 1));
        menu.get_mut(1).unwrap().add_quantity(2);
        assert!(order.register(&menu, 1));

        assert_eq!(order.len(), 1);
        assert!(order.contains("Mie Goreng"));
    }

    #[test]
    fn test_lines_follow_menu_and_see_updates() {
        let mut menu = Menu::default();
        let mut order = Order::new();

        menu.get_mut(2).unwrap().add_quantity(1);
        order.register(&menu, 2);
        menu.get_mut(0).unwrap().add_quantity(1);
        order.register(&menu, 0);

        // Quantity changed after registration is still observed.
        menu.get_mut(2).unwrap().add_quantity(4);

        let lines = order.lines(&menu);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Nasi Goreng");
        assert_eq!(lines[1].name, "Ayam Bakar");
        assert_eq!(lines[1].quantity, 5);
    }

    #[test]
    fn test_register_out_of_range() {
        let menu = Menu::default();
        let mut order = Order::new();
        assert!(!order.register(&menu, 7));
    }
}
