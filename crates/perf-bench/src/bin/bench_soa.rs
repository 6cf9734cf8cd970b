use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;

fn main() {
    let table: VertexTableSoa = generate_benchmark_vertices_aos().into();

    let start_time = Instant::now();
    let mut total_out_edges: u64 = 0;

    // Only the `active` and `degree` arrays are ever touched; `value` never
    // enters cache.
    for (active, degree) in table.active.iter().zip(&table.degree) {
        if *active {
            total_out_edges += *degree as u64;
        }
    }

    let elapsed_time = start_time.elapsed();
    let result = black_box(total_out_edges);

    println!("--- SoA Benchmark Results ({NUM_VERTICES} Vertices) ---");
    println!("Active out-edge total: {result}");
    println!("Elapsed Time: {elapsed_time:?}");
}
