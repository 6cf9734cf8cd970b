use std::env;
use std::process::ExitCode;

use bsp_engine_core::algorithms::wcc::{Wcc, WccInit};
use bsp_engine_core::engine::Engine;
use cli::driver::{self, NoSourceArgs};
use cli::error::Error;
use cli::output::{self, render_cc};
use common::types::Payload;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => driver::report_and_exit(e),
    }
}

fn run(argv: &[String]) -> Result<(), Error> {
    let args = NoSourceArgs::parse(argv, "cc")?;
    let graph = driver::load_graph(&args.graph_path)?;

    let mut engine: Engine<Payload> = Engine::new(&graph);
    engine.init(&WccInit)?;
    engine.run(&Wcc);

    output::write_results(&args.output_path, "component", engine.values(), render_cc)?;
    println!("wrote results to {}", args.output_path);
    Ok(())
}
