use std::process::ExitCode;
use std::time::{Duration, Instant};

use bsp_engine_core::engine::Engine;
use bsp_engine_core::graph::GraphCsr;
use bsp_engine_core::program::{Initializer, VertexProgram};
use common::types::{Payload, VertexId, UNREACHED};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::output;

/// Positional + `--samples` argv shape shared by `bfs` and `sssp`:
/// `<program> <graph-file> <source> <output-file> [--samples N]`.
pub struct ShortestPathArgs {
    pub graph_path: String,
    pub source: VertexId,
    pub output_path: String,
    pub samples: usize,
}

impl ShortestPathArgs {
    pub fn parse(argv: &[String], program_name: &str) -> Result<Self, Error> {
        let usage = || {
            Error::Usage(format!(
                "{program_name} <graph-file> <source> <output-file> [--samples N]"
            ))
        };

        if argv.len() < 3 {
            return Err(usage());
        }

        let graph_path = argv[0].clone();
        let source: VertexId = argv[1].parse().map_err(|_| usage())?;
        let output_path = argv[2].clone();

        let mut samples = 1;
        let mut rest = &argv[3..];
        while !rest.is_empty() {
            match rest[0].as_str() {
                "--samples" => {
                    let n = rest.get(1).ok_or_else(usage)?;
                    samples = n.parse().map_err(|_| usage())?;
                    if samples == 0 {
                        return Err(usage());
                    }
                    rest = &rest[2..];
                }
                _ => return Err(usage()),
            }
        }

        Ok(Self {
            graph_path,
            source,
            output_path,
            samples,
        })
    }
}

/// `<program> <graph-file> <output-file>` — connected components needs no
/// source vertex.
pub struct NoSourceArgs {
    pub graph_path: String,
    pub output_path: String,
}

impl NoSourceArgs {
    pub fn parse(argv: &[String], program_name: &str) -> Result<Self, Error> {
        let usage = || Error::Usage(format!("{program_name} <graph-file> <output-file>"));
        if argv.len() != 2 {
            return Err(usage());
        }
        Ok(Self {
            graph_path: argv[0].clone(),
            output_path: argv[1].clone(),
        })
    }
}

/// Loads a graph and reports its size the way the reference drivers do.
pub fn load_graph(path: &str) -> Result<GraphCsr, Error> {
    let graph = GraphCsr::load_edgelist(path)?;
    println!(
        "loaded {} nodes and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Runs `program` to quiescence once from `source` and writes the result to
/// `output_path`. This is the single-sample path `--samples` defaults to.
pub fn run_single<P, I>(
    graph: &GraphCsr,
    program: &P,
    init: &I,
    output_path: &str,
    column: &str,
    render: impl Fn(Payload) -> String,
) -> Result<(), Error>
where
    P: VertexProgram<Payload>,
    I: Initializer<Payload>,
{
    let mut engine: Engine<Payload> = Engine::new(graph);
    engine.init(init)?;
    engine.run(program);

    output::write_results(output_path, column, engine.values(), render)?;
    println!("wrote results to {output_path}");
    Ok(())
}

/// `--samples N` benchmarking mode: times `N` runs from uniformly sampled
/// random source vertices and reports min/max/average wall-clock time and
/// vertices-reached, instead of writing an output file. `make_init` builds
/// the algorithm's initializer for a given sampled source.
pub fn run_samples<P, I>(
    graph: &GraphCsr,
    program: &P,
    samples: usize,
    make_init: impl Fn(VertexId) -> I,
) -> Result<(), Error>
where
    P: VertexProgram<Payload>,
    I: Initializer<Payload>,
{
    let num_vertices = graph.num_vertices();
    if num_vertices == 0 {
        println!("graph has no vertices; nothing to sample");
        return Ok(());
    }

    let mut rng = SmallRng::from_os_rng();
    let mut durations = Vec::with_capacity(samples);
    let mut reached_counts = Vec::with_capacity(samples);

    for i in 0..samples {
        let source = rng.random_range(0..num_vertices);
        let init = make_init(source);
        let mut engine: Engine<Payload> = Engine::new(graph);

        let start = Instant::now();
        engine.init(&init)?;
        engine.run(program);
        durations.push(start.elapsed());

        let reached = engine
            .values()
            .filter(|&(_, value)| value != UNREACHED)
            .count();
        reached_counts.push(reached);
        println!("sample {}/{samples}: source={source} reached={reached}", i + 1);
    }

    let min = durations.iter().min().copied().unwrap();
    let max = durations.iter().max().copied().unwrap();
    let avg = durations.iter().sum::<Duration>() / samples as u32;
    let avg_reached = reached_counts.iter().sum::<usize>() / samples;

    println!("samples: {samples}");
    println!("wall time: min={min:?} max={max:?} avg={avg:?}");
    println!("avg vertices reached: {avg_reached}");
    Ok(())
}

/// Converts a driver error into the usage-message-then-exit behavior of the
/// reference binaries: print to stderr, exit non-zero.
pub fn report_and_exit(err: Error) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}
