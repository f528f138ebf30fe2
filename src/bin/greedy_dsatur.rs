use clap::{App, ArgMatches, load_yaml};

use tabu_color::error::Result;
use tabu_color::gc::coloring_to_string;
use tabu_color::search::greedy_dsatur::greedy_dsatur;
use tabu_color::util::{init_logging, read_graph};


fn run(main_args:&ArgMatches) -> Result<()> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let format = main_args.value_of("format").unwrap_or("plain");
    let graph = read_graph(inst_filename, format)?;
    let init = greedy_dsatur(&graph);
    tracing::info!(nb_colors = init.nb_colors, "greedy coloring built");
    let output = coloring_to_string(init.nb_colors, &init.colors);
    match main_args.value_of("output") {
        None => print!("{}", output),
        Some(filename) => std::fs::write(filename, output)?,
    }
    Ok(())
}

/** builds an initial coloring using a DSATUR greedy (exchange format) */
pub fn main() {
    init_logging();
    let yaml = load_yaml!("greedy_dsatur.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
