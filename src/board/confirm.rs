use crate::error::Result;

/// Asks the user a yes/no question before something irreversible happens.
pub trait Confirm {
    fn confirm(&self, message: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok(self(message))
    }
}

/// Gives the same answer every time. `FixedAnswer(true)` backs `--force`.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}
