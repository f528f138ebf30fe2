use rand::SeedableRng;
use rand::rngs::StdRng;

use tabu_color::checkpoint::NoCheckpoint;
use tabu_color::color::{checker, count_violating_edges, CheckerResult, Color, Graph};
use tabu_color::config::TabuColConfig;
use tabu_color::gc::InitialColoring;
use tabu_color::search::descent::{color_reduction, tabucol, Termination};
use tabu_color::search::feasibility::{FeasibilityOutcome, FeasibilitySearch, SearchStatus};
use tabu_color::search::greedy_dsatur::greedy_dsatur;
use tabu_color::stopping::NoStopping;

fn square() -> Graph {
    Graph::from_edges(4, &[(0,1),(1,2),(2,3),(3,0)]).unwrap()
}

fn triangle() -> Graph {
    Graph::from_edges(3, &[(0,1),(1,2),(2,0)]).unwrap()
}

/// random graph with n vertices, each pair being adjacent with probability p
fn random_graph(n:usize, p:f64, seed:u64) -> Graph {
    use rand::Rng;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..u {
            if rng.gen_bool(p) { edges.push((u,v)); }
        }
    }
    Graph::from_edges(n, &edges).unwrap()
}

#[test]
fn test_square_reaches_two_colors() {
    let g = square();
    let config = TabuColConfig::default().with_seed(1).with_retry_limit(10);
    let mut sink:Vec<(usize, Vec<Color>)> = Vec::new();
    let res = tabucol(&g, None, &config, &mut sink).unwrap();
    assert_eq!(res.nb_colors, 2);
    assert_eq!(checker(&g, &res.colors), CheckerResult::Ok(2));
    assert_eq!(res.termination, Termination::ColorsExhausted);
    let checkpointed:Vec<usize> = sink.iter().map(|(k,_)| *k).collect();
    assert_eq!(checkpointed, vec![4,3,2]);
}

#[test]
fn test_triangle_never_below_three_colors() {
    let g = triangle();
    let config = TabuColConfig::default().with_seed(2).with_retry_limit(5).with_step_limit(200);
    let mut sink:Vec<(usize, Vec<Color>)> = Vec::new();
    let res = tabucol(&g, None, &config, &mut sink).unwrap();
    assert_eq!(res.nb_colors, 3);
    assert_eq!(res.termination, Termination::RetryLimit);
    assert_eq!(checker(&g, &res.colors), CheckerResult::Ok(3));
    // one success with 3 colors, then 5 failures with 2 colors
    assert_eq!(res.nb_feasibility_searches, 6);
    assert_eq!(res.total_steps, 5*200);
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_edgeless_graph_single_color() {
    let g = Graph::from_edges(5, &[]).unwrap();
    let mut sink:Vec<(usize, Vec<Color>)> = Vec::new();
    let res = tabucol(&g, None, &TabuColConfig::default().with_seed(3), &mut sink).unwrap();
    assert_eq!(res.nb_colors, 1);
    assert_eq!(res.colors, vec![0 ; 5]);
    assert_eq!(res.total_steps, 0);
    assert_eq!(sink.last().map(|(k,_)| *k), Some(1));
}

#[test]
fn test_checkpoints_strictly_decreasing_and_feasible() {
    let g = random_graph(40, 0.3, 17);
    let config = TabuColConfig::default().with_seed(4).with_retry_limit(3).with_step_limit(5000);
    let mut sink:Vec<(usize, Vec<Color>)> = Vec::new();
    let res = tabucol(&g, None, &config, &mut sink).unwrap();
    assert!(!sink.is_empty());
    for w in sink.windows(2) {
        assert!(w[1].0 < w[0].0);
    }
    for (k, colors) in sink.iter() {
        assert_eq!(count_violating_edges(&g, colors), 0);
        assert!(colors.iter().all(|c| c < k));
    }
    assert_eq!(sink.last().map(|(k,_)| *k), Some(res.nb_colors));
    assert_eq!(res.reductions.iter().map(|r| r.nb_colors).collect::<Vec<_>>(),
        sink.iter().map(|(k,_)| *k).collect::<Vec<_>>());
}

#[test]
fn test_starting_from_dsatur() {
    let g = random_graph(30, 0.2, 5);
    let init = greedy_dsatur(&g);
    let init_nb_colors = init.nb_colors;
    let config = TabuColConfig::default().with_seed(6).with_retry_limit(3).with_step_limit(2000);
    let res = tabucol(&g, Some(init), &config, &mut NoCheckpoint).unwrap();
    assert!(res.nb_colors <= init_nb_colors);
    assert!(matches!(checker(&g, &res.colors), CheckerResult::Ok(k) if k <= res.nb_colors));
}

#[test]
fn test_infeasible_initial_coloring_is_repaired() {
    let g = square();
    let init = InitialColoring { nb_colors: 3, colors: vec![0,0,0,0] };
    let config = TabuColConfig::default().with_seed(8).with_retry_limit(10);
    let res = tabucol(&g, Some(init), &config, &mut NoCheckpoint).unwrap();
    assert_eq!(checker(&g, &res.colors), CheckerResult::Ok(2));
}

#[test]
fn test_same_seed_same_result() {
    let g = random_graph(30, 0.4, 9);
    let config = TabuColConfig::default().with_seed(10).with_retry_limit(2).with_step_limit(1000);
    let mut sink1:Vec<(usize, Vec<Color>)> = Vec::new();
    let mut sink2:Vec<(usize, Vec<Color>)> = Vec::new();
    let res1 = tabucol(&g, None, &config, &mut sink1).unwrap();
    let res2 = tabucol(&g, None, &config, &mut sink2).unwrap();
    assert_eq!(res1.colors, res2.colors);
    assert_eq!(res1.nb_colors, res2.nb_colors);
    assert_eq!(res1.reductions, res2.reductions);
    assert_eq!(res1.total_steps, res2.total_steps);
    assert_eq!(sink1, sink2);
}

#[test]
fn test_same_seed_same_moves() {
    let g = random_graph(25, 0.5, 12);
    let run = |seed:u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut search = FeasibilitySearch::new(&g, vec![0 ; 25], 4, 2, 300);
        let mut moves = Vec::new();
        while search.status() == SearchStatus::Running {
            if let Some(m) = search.advance(&mut rng) {
                moves.push(m);
            }
        }
        moves
    };
    let moves = run(13);
    assert!(!moves.is_empty());
    assert_eq!(moves, run(13));
}

#[test]
fn test_color_reduction_with_explicit_rng() {
    let g = square();
    let mut rng = StdRng::seed_from_u64(14);
    let res = color_reduction(
        &g, vec![0,1,2,3], 4, &TabuColConfig::default(), &mut NoCheckpoint, &NoStopping, &mut rng
    ).unwrap();
    assert_eq!(res.nb_colors, 2);
}

#[test]
fn test_feasible_outcome_has_no_conflict() {
    for seed in 0..5 {
        let g = random_graph(20, 0.3, 100+seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = FeasibilitySearch::new(&g, vec![0 ; 20], 8, 2, 50000).run(&mut rng);
        if let FeasibilityOutcome::Feasible { colors, .. } = outcome {
            assert_eq!(count_violating_edges(&g, &colors), 0);
            assert!(colors.iter().all(|c| *c < 8));
        }
    }
}
