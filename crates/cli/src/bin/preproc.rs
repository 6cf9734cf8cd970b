use std::env;
use std::process::ExitCode;

use cli::error::Error;
use cli::preprocess;

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().skip(1).collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(argv: &[String]) -> Result<(), Error> {
    let usage = || {
        Error::Usage("preproc <input-edgelist> <output-edgelist> <weighted:0|1> [seed]".into())
    };

    if argv.len() < 3 {
        return Err(usage());
    }

    let input_path = &argv[0];
    let output_path = &argv[1];
    let weighted = match argv[2].as_str() {
        "0" => false,
        "1" => true,
        _ => return Err(usage()),
    };
    let seed: u64 = match argv.get(3) {
        Some(s) => s.parse().map_err(|_| usage())?,
        None => 1,
    };

    let edges = preprocess::preprocess(input_path, weighted, seed)?;
    println!("preprocessed {} edges", edges.len());
    preprocess::write_edgelist(output_path, &edges)?;
    println!("wrote {output_path}");
    Ok(())
}
