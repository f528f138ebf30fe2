use std::time::Instant;

/** decides when a search must stop (checked between two feasibility searches) */
pub trait StoppingCriterion {
    /// true iff the search should stop
    fn is_finished(&self) -> bool;
}

/** never stops: the search ends on its own limits */
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStopping;

impl StoppingCriterion for NoStopping {
    fn is_finished(&self) -> bool { false }
}

/** stops after a given amount of time (in seconds) */
#[derive(Debug, Clone, Copy)]
pub struct TimeStoppingCriterion {
    /// time limit in seconds
    time_limit: f32,
    /// time at which the criterion was created
    start: Instant,
}

impl TimeStoppingCriterion {
    /// creates a criterion stopping `time_limit` seconds from now
    pub fn new(time_limit:f32) -> Self {
        Self { time_limit, start: Instant::now() }
    }

    /// seconds elapsed since the creation
    pub fn elapsed(&self) -> f32 { self.start.elapsed().as_secs_f32() }
}

impl StoppingCriterion for TimeStoppingCriterion {
    fn is_finished(&self) -> bool { self.elapsed() >= self.time_limit }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria() {
        assert!(!NoStopping.is_finished());
        assert!(TimeStoppingCriterion::new(0.).is_finished());
        assert!(!TimeStoppingCriterion::new(3600.).is_finished());
    }
}
