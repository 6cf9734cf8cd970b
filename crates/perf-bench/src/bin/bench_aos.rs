use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let table: VertexTableAos = generate_benchmark_vertices_aos();

    let start_time = Instant::now();
    let mut total_out_edges: u64 = 0;

    // Each active vertex touches `value`, `active`, and `degree` together,
    // even though only `active` and `degree` are read here.
    for v in &table {
        if v.active {
            total_out_edges += v.degree as u64;
        }
    }

    let elapsed_time = start_time.elapsed();
    let result = black_box(total_out_edges);

    println!("--- AoS Benchmark Results ({NUM_VERTICES} Vertices) ---");
    println!("Active out-edge total: {result}");
    println!("Elapsed Time: {elapsed_time:?}");
}
