use super::prompt::prompt_count;
use crate::domain::menu::Menu;
use crate::domain::order::Order;
use crate::domain::ports::Console;
use crate::domain::validation::parse_count;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Selecting,
    Done,
}

/// Interactive loop that turns menu selections into an [`Order`].
///
/// Quantities are accumulated directly on the menu; the order only records
/// which items were chosen.
pub struct OrderBuilder<'a> {
    menu: &'a mut Menu,
    order: Order,
    state: BuilderState,
}

impl<'a> OrderBuilder<'a> {
    pub fn new(menu: &'a mut Menu) -> Self {
        Self {
            menu,
            order: Order::new(),
            state: BuilderState::Selecting,
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Runs until the customer selects 0.
    pub fn run<C: Console + ?Sized>(mut self, console: &mut C) -> Result<Order> {
        while self.state == BuilderState::Selecting {
            self.step(console)?;
        }
        Ok(self.order)
    }

    /// One pass of the loop: show the menu, read a selection and apply it.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<BuilderState> {
        if self.state == BuilderState::Done {
            return Ok(self.state);
        }

        self.show_menu(console)?;
        let raw = console.prompt("Choose a menu item (0 to finish): ")?;
        let selection = match parse_count(&raw) {
            Ok(n) if (n as usize) <= self.menu.len() => n as usize,
            _ => {
                console.println("Invalid selection, please try again.")?;
                return Ok(self.state);
            }
        };

        if selection == 0 {
            self.state = BuilderState::Done;
            return Ok(self.state);
        }

        let position = selection - 1;
        let quantity = prompt_count(console, "Enter quantity: ")?;
        let Some(item) = self.menu.get_mut(position) else {
            return Ok(self.state);
        };
        item.add_quantity(quantity);
        let confirmation = format!("You have ordered {} {}.", item.quantity, item.name);

        if self.order.register(&*self.menu, position) {
            tracing::debug!(position, quantity, "order entry updated");
        }
        console.println(&confirmation)?;
        Ok(self.state)
    }

    fn show_menu<C: Console + ?Sized>(&self, console: &mut C) -> Result<()> {
        console.println("Menu:")?;
        for (i, item) in self.menu.items().iter().enumerate() {
            console.println(&format!(
                "{}. {} - {} (ordered: {})",
                i + 1,
                item.name,
                item.unit_price,
                item.quantity
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StallError;
    use crate::interfaces::terminal::TerminalConsole;

    fn build(input: &str, menu: &mut Menu) -> (Result<Order>, String) {
        let mut console = TerminalConsole::new(input.as_bytes(), Vec::new());
        let result = OrderBuilder::new(menu).run(&mut console);
        let printed = String::from_utf8(console.into_output()).unwrap();
        (result, printed)
    }

    #[test]
    fn test_immediate_finish_yields_empty_order() {
        let mut menu = Menu::default();
        let (order, printed) = build("0\n", &mut menu);

        assert!(order.unwrap().is_empty());
        assert!(printed.contains("1. Nasi Goreng - Rp20000.00 (ordered: 0)"));
    }

    #[test]
    fn test_repeat_selection_accumulates() {
        let mut menu = Menu::default();
        let (order, printed) = build("1\n2\n3\n1\n1\n3\n0\n", &mut menu);
        let order = order.unwrap();

        assert_eq!(order.len(), 2);
        assert_eq!(menu.get(0).unwrap().quantity, 5);
        assert_eq!(menu.get(2).unwrap().quantity, 1);
        assert!(printed.contains("You have ordered 2 Nasi Goreng."));
        assert!(printed.contains("You have ordered 5 Nasi Goreng."));
        assert!(printed.contains("(ordered: 5)"));
    }

    #[test]
    fn test_invalid_selections_reprompt() {
        let mut menu = Menu::default();
        let (order, printed) = build("4\nx\n-1\n2\n1\n0\n", &mut menu);

        assert_eq!(order.unwrap().len(), 1);
        assert_eq!(
            printed.matches("Invalid selection, please try again.").count(),
            3
        );
    }

    #[test]
    fn test_zero_quantity_is_not_registered() {
        let mut menu = Menu::default();
        let (order, _) = build("2\n0\n0\n", &mut menu);

        assert!(order.unwrap().is_empty());
        assert_eq!(menu.get(1).unwrap().quantity, 0);
    }

    #[test]
    fn test_bad_quantity_reprompts() {
        let mut menu = Menu::default();
        let (order, printed) = build("3\n1.5\n2\n0\n", &mut menu);

        assert!(order.unwrap().contains("Ayam Bakar"));
        assert!(printed.contains("Please try again."));
        assert_eq!(menu.get(2).unwrap().quantity, 2);
    }

    #[test]
    fn test_step_state_transitions() {
        let mut menu = Menu::default();
        let mut console = TerminalConsole::new("1\n1\n0\n".as_bytes(), Vec::new());
        let mut builder = OrderBuilder::new(&mut menu);

        assert_eq!(builder.step(&mut console).unwrap(), BuilderState::Selecting);
        assert_eq!(builder.step(&mut console).unwrap(), BuilderState::Done);
        assert_eq!(builder.state(), BuilderState::Done);
        // Done is terminal and reads nothing further.
        assert_eq!(builder.step(&mut console).unwrap(), BuilderState::Done);
    }

    #[test]
    fn test_end_of_input_while_selecting() {
        let mut menu = Menu::default();
        let (order, _) = build("1\n", &mut menu);
        assert!(matches!(order, Err(StallError::InputClosed)));
    }
}
