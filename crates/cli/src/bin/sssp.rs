use std::env;
use std::process::ExitCode;

use bsp_engine_core::algorithms::sssp::{Sssp, SsspInit};
use cli::driver::{self, ShortestPathArgs};
use cli::output::render_sssp;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => driver::report_and_exit(e),
    }
}

fn run(argv: &[String]) -> Result<(), cli::error::Error> {
    let args = ShortestPathArgs::parse(argv, "sssp")?;
    let graph = driver::load_graph(&args.graph_path)?;

    if args.samples > 1 {
        return driver::run_samples(&graph, &Sssp, args.samples, |source| SsspInit { source });
    }

    let init = SsspInit {
        source: args.source,
    };
    driver::run_single(&graph, &Sssp, &init, &args.output_path, "dist", render_sssp)
}
