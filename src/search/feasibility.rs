use rand::Rng;

use crate::color::{Color, Graph};
use crate::search::local_search::{Move, SearchState};


/// status of a feasibility search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// still looking for a conflict-free coloring
    Running,
    /// the coloring has no conflict (terminal)
    Feasible,
    /// the step limit was reached, or no move could be selected (terminal)
    StepLimitReached,
}

/// outcome of a complete feasibility search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeasibilityOutcome {
    /// a conflict-free coloring was found
    Feasible {
        /// the coloring (uses colors in [0, nb_colors))
        colors: Vec<Color>,
        /// number of steps performed
        nb_steps: usize,
    },
    /// the search gave up
    StepLimitReached {
        /// number of steps performed
        nb_steps: usize,
    },
}

impl FeasibilityOutcome {
    /// number of local search steps performed
    pub fn nb_steps(&self) -> usize {
        match self {
            FeasibilityOutcome::Feasible { nb_steps, .. } => *nb_steps,
            FeasibilityOutcome::StepLimitReached { nb_steps } => *nb_steps,
        }
    }
}


/**
Tries to remove every conflict of a coloring while keeping a fixed number of colors.
Local search steps are performed until the coloring has no conflict (Feasible) or the
step limit is reached (StepLimitReached).
*/
#[derive(Debug, Clone)]
pub struct FeasibilitySearch<'a> {
    /// coloring, conflicts and tabu list
    state: SearchState<'a>,
    /// maximum number of steps
    step_limit: usize,
    /// number of steps performed so far
    nb_steps: usize,
    /// current status
    status: SearchStatus,
}

impl<'a> FeasibilitySearch<'a> {
    /** creates a feasibility search from a coloring using colors in [0, nb_colors) */
    pub fn new(graph:&'a Graph, colors:Vec<Color>, nb_colors:usize, tabu_bound:usize, step_limit:usize) -> Self {
        Self {
            state: SearchState::new(graph, colors, nb_colors, tabu_bound),
            step_limit,
            nb_steps: 0,
            status: SearchStatus::Running,
        }
    }

    /// current status
    pub fn status(&self) -> SearchStatus { self.status }

    /// number of steps performed so far
    pub fn nb_steps(&self) -> usize { self.nb_steps }

    /// underlying search state
    pub fn state(&self) -> &SearchState<'a> { &self.state }

    /** performs one transition of the search. Returns the move applied, if any. */
    pub fn advance<R:Rng>(&mut self, rng:&mut R) -> Option<Move> {
        if self.status != SearchStatus::Running {
            return None;
        }
        if self.state.total_conflicts() == 0 {
            self.status = SearchStatus::Feasible;
            return None;
        }
        if self.nb_steps >= self.step_limit {
            self.status = SearchStatus::StepLimitReached;
            return None;
        }
        match self.state.step(rng) {
            None => {
                tracing::debug!(
                    nb_steps = self.nb_steps,
                    conflicts = self.state.total_conflicts(),
                    "no vertex can be selected, giving up"
                );
                self.status = SearchStatus::StepLimitReached;
                None
            }
            Some(m) => {
                self.nb_steps += 1;
                Some(m)
            }
        }
    }

    /** runs the search until a terminal status is reached */
    pub fn run<R:Rng>(mut self, rng:&mut R) -> FeasibilityOutcome {
        while self.status == SearchStatus::Running {
            self.advance(rng);
        }
        match self.status {
            SearchStatus::Feasible => FeasibilityOutcome::Feasible {
                nb_steps: self.nb_steps,
                colors: self.state.into_colors(),
            },
            _ => FeasibilityOutcome::StepLimitReached { nb_steps: self.nb_steps },
        }
    }
}
