use crate::domain::ports::Console;
use crate::domain::validation::{parse_amount, parse_count};
use crate::error::{Result, StallError};
use rust_decimal::Decimal;

/// Re-prompts until `parse` accepts the line. Only `NonNumeric` is retried;
/// I/O failures and end of input are returned to the caller.
fn prompt_until<C, T>(console: &mut C, text: &str, parse: fn(&str) -> Result<T>) -> Result<T>
where
    C: Console + ?Sized,
{
    loop {
        let raw = console.prompt(text)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(StallError::NonNumeric) => {
                tracing::debug!(input = %raw, "rejected numeric input");
                console.println(&StallError::NonNumeric.to_string())?;
                console.println("Please try again.")?;
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn prompt_count<C: Console + ?Sized>(console: &mut C, text: &str) -> Result<u32> {
    prompt_until(console, text, parse_count)
}

pub fn prompt_amount<C: Console + ?Sized>(console: &mut C, text: &str) -> Result<Decimal> {
    prompt_until(console, text, parse_amount)
}
