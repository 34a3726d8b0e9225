use std::fmt;
use std::time::Duration;

/// Progress reported by a preparation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingMessage {
    Started {
        name: String,
        quantity: u32,
    },
    Finished {
        name: String,
        quantity: u32,
        elapsed: Duration,
    },
}

impl ProcessingMessage {
    pub fn name(&self) -> &str {
        match self {
            Self::Started { name, .. } | Self::Finished { name, .. } => name,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
}

impl fmt::Display for ProcessingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { name, quantity } => {
                write!(f, "Processing order for {quantity} {name} ...")
            }
            Self::Finished {
                name,
                quantity,
                elapsed,
            } => write!(
                f,
                "Order of {quantity} {name} finished in {} seconds.",
                elapsed.as_secs_f64()
            ),
        }
    }
}

/// How a processing run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// Every task reported back before the deadline.
    Completed,
    /// The global deadline passed first. Tasks may still be running.
    TimedOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_rendering() {
        let started = ProcessingMessage::Started {
            name: "Ayam Bakar".to_string(),
            quantity: 2,
        };
        assert_eq!(started.to_string(), "Processing order for 2 Ayam Bakar ...");
        assert!(!started.is_finished());

        let finished = ProcessingMessage::Finished {
            name: "Ayam Bakar".to_string(),
            quantity: 2,
            elapsed: Duration::from_secs(4),
        };
        assert_eq!(
            finished.to_string(),
            "Order of 2 Ayam Bakar finished in 4 seconds."
        );
        assert_eq!(finished.name(), "Ayam Bakar");
    }

    #[test]
    fn test_fractional_elapsed() {
        let finished = ProcessingMessage::Finished {
            name: "Mie Goreng".to_string(),
            quantity: 1,
            elapsed: Duration::from_millis(1500),
        };
        assert!(finished.to_string().ends_with("in 1.5 seconds."));
    }
}
