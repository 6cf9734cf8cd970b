use std::env;
use std::process::ExitCode;

use bsp_engine_core::algorithms::bfs::{Bfs, BfsInit};
use cli::driver::{self, ShortestPathArgs};
use cli::output::render_bfs;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => driver::report_and_exit(e),
    }
}

fn run(argv: &[String]) -> Result<(), cli::error::Error> {
    let args = ShortestPathArgs::parse(argv, "bfs")?;
    let graph = driver::load_graph(&args.graph_path)?;

    if args.samples > 1 {
        return driver::run_samples(&graph, &Bfs, args.samples, |source| BfsInit { source });
    }

    let init = BfsInit {
        source: args.source,
    };
    driver::run_single(&graph, &Bfs, &init, &args.output_path, "level", render_bfs)
}
