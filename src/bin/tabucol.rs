use clap::{App, ArgMatches, load_yaml};

use tabu_color::checkpoint::{CheckpointSink, DirCheckpoint, NoCheckpoint};
use tabu_color::error::Result;
use tabu_color::gc::solution_to_string;
use tabu_color::search::descent::tabucol;
use tabu_color::util::{export_results, init_logging, read_params};


/** reads the instance and the initial coloring, reduces the number of colors, exports the results.
The solution is the only output on stdout, logs go to stderr.
*/
fn run(main_args:&ArgMatches) -> Result<()> {
    let params = read_params(main_args)?;
    let initial = params.initial.build(&params.graph)?;
    let mut checkpoint:Box<dyn CheckpointSink> = match &params.checkpoint_dir {
        None => Box::new(NoCheckpoint),
        Some(dir) => {
            tracing::info!(dir = dir.as_str(), "printing intermediate solutions");
            Box::new(DirCheckpoint::new(dir)?)
        }
    };
    let result = tabucol(&params.graph, initial, &params.config, checkpoint.as_mut())?;
    tracing::info!(
        nb_colors = result.nb_colors, total_steps = result.total_steps,
        nb_feasibility_searches = result.nb_feasibility_searches, time_searched = result.time_searched,
        "tabu search finished"
    );
    print!("{}", solution_to_string(result.nb_colors, &result.colors));
    export_results(
        &params.graph,
        &params.inst_filename,
        &result,
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    )
}

/** solves a coloring instance using the tabu search color reduction */
pub fn main() {
    init_logging();
    let yaml = load_yaml!("tabucol.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
