/// Default ceiling for the debt payoff simulation: one hundred years.
pub const DEFAULT_MAX_TERM_MONTHS: u32 = 1200;

/// Tunables for a [`Calculator`](crate::application::calculator::Calculator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    max_term_months: u32,
}

impl CalculatorConfig {
    /// Longest debt payoff the simulator will run before giving up.
    pub fn max_term_months(&self) -> u32 {
        self.max_term_months
    }

    /// A zero ceiling is raised to one month.
    pub fn with_max_term_months(mut self, months: u32) -> Self {
        self.max_term_months = months.max(1);
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_term_months: DEFAULT_MAX_TERM_MONTHS,
        }
    }
}
