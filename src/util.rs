use std::str::FromStr;

use clap::ArgMatches;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::{
    color::{checker, CheckerResult, Graph},
    config::TabuColConfig,
    dimacs::read_dimacs_file,
    error::{ColorError, Result},
    gc::{read_coloring_file, read_graph_file, write_solution, InitialColoring},
    search::{descent::DescentResult, greedy_dsatur::greedy_dsatur},
};

/// where the initial coloring of the tabu search comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSource {
    /// random permutation of the vertices
    Random,
    /// greedy DSATUR coloring
    Dsatur,
    /// coloring read from a file (exchange format)
    File(String),
}

impl InitialSource {
    /** builds the initial coloring (None for a random one) */
    pub fn build(&self, graph:&Graph) -> Result<Option<InitialColoring>> {
        match self {
            InitialSource::Random => Ok(None),
            InitialSource::Dsatur => {
                let init = greedy_dsatur(graph);
                tracing::info!(nb_colors = init.nb_colors, "greedy coloring built");
                Ok(Some(init))
            },
            InitialSource::File(filename) => {
                let init = read_coloring_file(filename)?;
                init.validate(graph)?;
                Ok(Some(init))
            }
        }
    }
}

/// parameters read from the command line
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance
    pub graph: Graph,
    /// initial coloring
    pub initial: InitialSource,
    /// search parameters
    pub config: TabuColConfig,
    /// file in which the final solution is written
    pub sol_file: Option<String>,
    /// file in which the search statistics are written (json)
    pub perf_file: Option<String>,
    /// directory in which intermediate solutions are written
    pub checkpoint_dir: Option<String>,
}

/** installs the log subscriber (filter given by RUST_LOG, "info" by default). Logs go to stderr. */
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// parses an optional argument
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_|
            ColorError::InvalidParameter(format!("unable to parse {} ('{}')", name, s))
        ),
    }
}

/** reads a graph given its format ("plain" or "dimacs") */
pub fn read_graph(filename:&str, format:&str) -> Result<Graph> {
    match format {
        "plain" => read_graph_file(filename),
        "dimacs" => read_dimacs_file(filename),
        _ => Err(ColorError::InvalidParameter(format!(
            "instance format unknown {} (valid: 'plain', 'dimacs')", format
        )))
    }
}

/** reads command line input and returns the instance and the search parameters */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("instance")
        .ok_or_else(|| ColorError::InvalidParameter("missing instance".to_string()))?;
    let format = main_args.value_of("format").unwrap_or("plain");
    let initial = match main_args.value_of("init") {
        None | Some("random") => InitialSource::Random,
        Some("dsatur") => InitialSource::Dsatur,
        Some(filename) => InitialSource::File(filename.to_string()),
    };
    let mut config = TabuColConfig::default();
    if let Some(n) = parse_arg(main_args, "steps")? { config = config.with_step_limit(n); }
    if let Some(n) = parse_arg(main_args, "retries")? { config = config.with_retry_limit(n); }
    if let Some(r) = parse_arg(main_args, "tabu_ratio")? { config = config.with_tabu_ratio(r); }
    if let Some(seed) = parse_arg(main_args, "seed")? { config = config.with_seed(seed); }
    if let Some(t) = parse_arg(main_args, "time")? { config = config.with_time_limit(t); }
    config.validate()?;
    let sol_file = main_args.value_of("solution").map(|e| {
        tracing::info!(file = e, "printing solutions");
        e.to_string()
    });
    let perf_file = main_args.value_of("perf").map(|e| {
        tracing::info!(file = e, "printing perfs");
        e.to_string()
    });
    let checkpoint_dir = main_args.value_of("checkpoints").map(|e| e.to_string());
    tracing::info!(instance = inst_filename, format, "reading instance");
    let graph = read_graph(inst_filename, format)?;
    graph.display_statistics();
    Ok(Params {
        inst_filename: inst_filename.to_string(),
        graph,
        initial,
        config,
        sol_file,
        perf_file,
        checkpoint_dir,
    })
}

/// exports search results to files
pub fn export_results(
    graph:&Graph,
    inst_filename:&str,
    result:&DescentResult,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    if let Some(filename) = perf_file {
        let stats = json!({
            "inst_name": inst_filename,
            "primal_list": result.reductions.iter().map(|r| r.nb_colors).collect::<Vec<usize>>(),
            "time_searched": result.time_searched,
            "result": result,
        });
        std::fs::write(filename, serde_json::to_string(&stats)?)?;
    }
    if let Some(filename) = sol_file {
        let checker_result = checker(graph, &result.colors);
        if !matches!(checker_result, CheckerResult::Ok(_)) {
            tracing::warn!(reason = ?checker_result, "invalid solution");
        }
        write_solution(filename, result.nb_colors, &result.colors)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::checkpoint::NoCheckpoint;
    use crate::search::descent::tabucol;

    fn tmp_file(name:&str) -> String {
        std::env::temp_dir()
            .join(format!("tabu_color_util_{}_{}", std::process::id(), name))
            .to_string_lossy().to_string()
    }

    #[test]
    fn test_read_graph_unknown_format() {
        assert!(read_graph("whatever", "json").is_err());
    }

    #[test]
    fn test_initial_source() {
        let g = Graph::from_edges(3, &[(0,1),(1,2)]).unwrap();
        assert_eq!(InitialSource::Random.build(&g).unwrap(), None);
        let init = InitialSource::Dsatur.build(&g).unwrap().unwrap();
        assert_eq!(init.nb_colors, 2);
    }

    #[test]
    fn test_export_results() {
        let g = Graph::from_edges(3, &[(0,1),(1,2)]).unwrap();
        let result = tabucol(&g, None, &TabuColConfig::default().with_seed(3), &mut NoCheckpoint).unwrap();
        let perf = tmp_file("perf.json");
        let sol = tmp_file("sol.txt");
        export_results(&g, "path3", &result, Some(perf.as_str()), Some(sol.as_str())).unwrap();
        let stats:serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&perf).unwrap()).unwrap();
        assert_eq!(stats["inst_name"], "path3");
        assert_eq!(stats["result"]["nb_colors"], 2);
        assert!(std::fs::read_to_string(&sol).unwrap().starts_with("2 0\n"));
        std::fs::remove_file(perf).unwrap();
        std::fs::remove_file(sol).unwrap();
    }
}
