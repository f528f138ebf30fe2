use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::checkpoint::CheckpointSink;
use crate::color::{checker, count_violating_edges, CheckerResult, Color, Graph};
use crate::config::TabuColConfig;
use crate::error::Result;
use crate::gc::InitialColoring;
use crate::search::feasibility::{FeasibilityOutcome, FeasibilitySearch};
use crate::search::remap::remove_color;
use crate::search::tabu::TabuList;
use crate::stopping::{NoStopping, StoppingCriterion, TimeStoppingCriterion};


/// reason why the color reduction stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// every number of colors down to 2 was tried successfully
    ColorsExhausted,
    /// the retry limit was reached for some number of colors
    RetryLimit,
    /// the stopping criterion was met
    TimeLimit,
}

/// a successful color reduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// number of colors of the conflict-free coloring found
    pub nb_colors: usize,
    /// steps of the successful feasibility search
    pub nb_steps: usize,
    /// failed feasibility searches before the success
    pub nb_retries: usize,
}

/// result of the color reduction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescentResult {
    /// number of colors of the best coloring
    pub nb_colors: usize,
    /// best coloring: colors[v] is the color of v
    pub colors: Vec<Color>,
    /// successful reductions (strictly decreasing number of colors)
    pub reductions: Vec<Reduction>,
    /// number of feasibility searches performed
    pub nb_feasibility_searches: usize,
    /// total number of local search steps
    pub total_steps: usize,
    /// why the search stopped
    pub termination: Termination,
    /// time spent (seconds)
    pub time_searched: f32,
}


/** random initial coloring: a random permutation of [0, n) (n colors, no conflict) */
pub fn random_initial_coloring<R:Rng>(n:usize, rng:&mut R) -> Vec<Color> {
    let mut colors:Vec<Color> = (0..n).collect();
    colors.shuffle(rng);
    colors
}


/**
Color reduction by tabu search. Starting from a coloring considered feasible with
init_nb_colors colors, for each number of colors k from init_nb_colors down to 2:
 1. run a feasibility search with k colors on the working coloring
 2. if it succeeds: the coloring becomes the best one, is sent to the checkpoint sink,
   and the working coloring for k-1 colors is obtained by removing a random color from it
 3. otherwise: rebuild the working coloring by removing a random color from the best
   coloring and retry. After retry_limit failures, the search stops.

No search is performed with a single color: the coloring obtained by removing a color
from a 2-coloring is accepted if it has no conflict (edgeless graph).

The stopping criterion is checked before each feasibility search.

# Errors
 - if the configuration is invalid
 - if initial_colors does not give a color in [0, init_nb_colors) to each vertex
 - if the checkpoint sink fails
*/
pub fn color_reduction<R, C, S>(
    graph:&Graph,
    initial_colors:Vec<Color>,
    init_nb_colors:usize,
    config:&TabuColConfig,
    checkpoint:&mut C,
    stopping:&S,
    rng:&mut R,
) -> Result<DescentResult>
where R:Rng, C:CheckpointSink + ?Sized, S:StoppingCriterion + ?Sized {
    config.validate()?;
    let initial = InitialColoring { nb_colors: init_nb_colors, colors: initial_colors };
    initial.validate(graph)?;
    let time_start = Instant::now();
    let tabu_bound = TabuList::bound_for(graph.nb_vertices(), config.tabu_ratio);
    let mut best_colors = initial.colors;
    let mut best_nb_colors = init_nb_colors;
    let mut working = best_colors.clone();
    let mut reductions:Vec<Reduction> = Vec::new();
    let mut nb_feasibility_searches = 0;
    let mut total_steps = 0;
    let mut termination = Termination::ColorsExhausted;
    let mut nb_colors = init_nb_colors;
    'colors: while nb_colors >= 2 {
        let mut nb_retries = 0;
        loop {
            if stopping.is_finished() {
                termination = Termination::TimeLimit;
                break 'colors;
            }
            let search = FeasibilitySearch::new(
                graph, std::mem::take(&mut working), nb_colors, tabu_bound, config.step_limit
            );
            let outcome = search.run(rng);
            nb_feasibility_searches += 1;
            total_steps += outcome.nb_steps();
            match outcome {
                FeasibilityOutcome::Feasible { colors, nb_steps } => {
                    tracing::info!(nb_colors, nb_steps, nb_retries, "feasible coloring found");
                    checkpoint.on_feasible(nb_colors, &colors)?;
                    reductions.push(Reduction { nb_colors, nb_steps, nb_retries });
                    best_colors = colors;
                    best_nb_colors = nb_colors;
                    working = remove_color(&best_colors, best_nb_colors, rng).1;
                    break;
                }
                FeasibilityOutcome::StepLimitReached { nb_steps } => {
                    nb_retries += 1;
                    if nb_retries >= config.retry_limit {
                        tracing::info!(nb_colors, nb_retries, "retry limit reached");
                        termination = Termination::RetryLimit;
                        break 'colors;
                    }
                    tracing::debug!(nb_colors, nb_steps, nb_retries, "reinitializing colors");
                    working = remove_color(&best_colors, best_nb_colors, rng).1;
                }
            }
        }
        nb_colors -= 1;
    }
    if termination == Termination::ColorsExhausted && best_nb_colors == 2
    && count_violating_edges(graph, &working) == 0 {
        tracing::info!(nb_colors = 1, "graph has no edge, single color accepted");
        checkpoint.on_feasible(1, &working)?;
        reductions.push(Reduction { nb_colors: 1, nb_steps: 0, nb_retries: 0 });
        best_colors = working;
        best_nb_colors = 1;
    }
    if let CheckerResult::Conflict(u, v) = checker(graph, &best_colors) {
        tracing::warn!(u, v, "the initial coloring was never repaired, the result has conflicts");
    }
    let time_searched = time_start.elapsed().as_secs_f32();
    tracing::info!(
        nb_colors = best_nb_colors, total_steps, nb_feasibility_searches, ?termination, time_searched,
        "color reduction finished"
    );
    Ok(DescentResult {
        nb_colors: best_nb_colors,
        colors: best_colors,
        reductions,
        nb_feasibility_searches,
        total_steps,
        termination,
        time_searched,
    })
}


/**
Runs the color reduction with the parameters of the configuration (seed, time limit).
Without an initial coloring, a random permutation of the vertices is used
(as many colors as vertices).

# Errors
 - if the configuration is invalid
 - if the initial coloring does not match the graph
 - if the checkpoint sink fails
*/
pub fn tabucol<C:CheckpointSink + ?Sized>(
    graph:&Graph,
    initial:Option<InitialColoring>,
    config:&TabuColConfig,
    checkpoint:&mut C,
) -> Result<DescentResult> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (colors, nb_colors) = match initial {
        Some(init) => {
            init.validate(graph)?;
            (init.colors, init.nb_colors)
        },
        None => (random_initial_coloring(graph.nb_vertices(), &mut rng), graph.nb_vertices()),
    };
    match config.time_limit {
        Some(t) => color_reduction(
            graph, colors, nb_colors, config, checkpoint, &TimeStoppingCriterion::new(t), &mut rng
        ),
        None => color_reduction(graph, colors, nb_colors, config, checkpoint, &NoStopping, &mut rng),
    }
}
