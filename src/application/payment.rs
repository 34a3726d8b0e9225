use super::prompt::prompt_amount;
use crate::domain::menu::Price;
use crate::domain::ports::Console;
use crate::error::Result;

/// Change due for a payment, or `None` if the payment does not cover the total.
pub fn change_for(paid: Price, total: Price) -> Option<Price> {
    (paid >= total).then(|| paid - total)
}

/// Asks for payment until it covers `total` and returns the change.
///
/// There is no attempt limit.
pub fn collect_payment<C: Console + ?Sized>(console: &mut C, total: Price) -> Result<Price> {
    loop {
        let paid = Price::new(prompt_amount(console, "Enter amount paid: ")?);
        match change_for(paid, total) {
            Some(change) => return Ok(change),
            None => {
                tracing::debug!(%paid, %total, "insufficient payment");
                console.println("Insufficient payment, please try again.")?;
            }
        }
    }
}
