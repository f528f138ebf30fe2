use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// default maximum number of local search steps of a feasibility search
pub const DEFAULT_STEP_LIMIT:usize = 50_000;
/// default number of failed feasibility searches allowed for a given number of colors
pub const DEFAULT_RETRY_LIMIT:usize = 100;
/// default ratio between the number of vertices and the tabu list size
pub const DEFAULT_TABU_RATIO:usize = 10;

/**
Parameters of the color reduction.

```
use tabu_color::config::TabuColConfig;

let config = TabuColConfig::default()
    .with_step_limit(1000)
    .with_seed(42);
assert_eq!(config.step_limit, 1000);
assert_eq!(config.retry_limit, 100);
```
*/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuColConfig {
    /// maximum number of steps of a feasibility search
    pub step_limit: usize,
    /// failed feasibility searches allowed for a given number of colors
    pub retry_limit: usize,
    /// the tabu list keeps max(n / tabu_ratio, 1) vertices
    pub tabu_ratio: usize,
    /// random seed (None: seeded from the system entropy)
    pub seed: Option<u64>,
    /// time limit in seconds (checked between two feasibility searches)
    pub time_limit: Option<f32>,
}

impl Default for TabuColConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            retry_limit: DEFAULT_RETRY_LIMIT,
            tabu_ratio: DEFAULT_TABU_RATIO,
            seed: None,
            time_limit: None,
        }
    }
}

impl TabuColConfig {
    /// sets the maximum number of steps of a feasibility search
    pub fn with_step_limit(mut self, n:usize) -> Self {
        self.step_limit = n;
        self
    }

    /// sets the number of retries per number of colors
    pub fn with_retry_limit(mut self, n:usize) -> Self {
        self.retry_limit = n;
        self
    }

    /// sets the tabu ratio
    pub fn with_tabu_ratio(mut self, ratio:usize) -> Self {
        self.tabu_ratio = ratio;
        self
    }

    /// sets the random seed
    pub fn with_seed(mut self, seed:u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// sets the time limit (seconds)
    pub fn with_time_limit(mut self, t:f32) -> Self {
        self.time_limit = Some(t);
        self
    }

    /** checks that the parameters are usable */
    pub fn validate(&self) -> Result<()> {
        if self.step_limit == 0 {
            return Err(ColorError::InvalidParameter("step limit must be positive".to_string()));
        }
        if self.retry_limit == 0 {
            return Err(ColorError::InvalidParameter("retry limit must be positive".to_string()));
        }
        if self.tabu_ratio == 0 {
            return Err(ColorError::InvalidParameter("tabu ratio must be positive".to_string()));
        }
        match self.time_limit {
            Some(t) if !(t >= 0.) => Err(ColorError::InvalidParameter(
                format!("time limit must be non-negative (got {})", t)
            )),
            _ => Ok(()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = TabuColConfig::default();
        assert_eq!(c.step_limit, 50000);
        assert_eq!(c.retry_limit, 100);
        assert_eq!(c.tabu_ratio, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(TabuColConfig::default().with_step_limit(0).validate().is_err());
        assert!(TabuColConfig::default().with_retry_limit(0).validate().is_err());
        assert!(TabuColConfig::default().with_tabu_ratio(0).validate().is_err());
        assert!(TabuColConfig::default().with_time_limit(-1.).validate().is_err());
        assert!(TabuColConfig::default().with_time_limit(2.5).validate().is_ok());
    }
}
