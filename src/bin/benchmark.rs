//! Serial vs parallel generation stepping on random soups

use std::time::Instant;
use infinite_life::domain::{Cell, CellSet, engine};

fn soup(size: i64) -> CellSet {
    let mut cells = CellSet::new();
    cells.randomize_region(Cell::new(0, 0), Cell::new(size - 1, size - 1), 0.3);
    cells
}

fn benchmark(size: i64, iterations: u32, step: fn(&CellSet) -> engine::Generation) -> (f64, usize) {
    let mut cells = soup(size);

    let start = Instant::now();
    for _ in 0..iterations {
        cells = step(&cells).cells;
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, cells.len())
}

fn main() {
    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [32, 64, 128, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Soup", "Population", "Serial", "Parallel", "Speedup");
    println!("{:-<62}", "");

    for size in sizes {
        let (serial_ms, population) = benchmark(size, iterations, engine::step);
        let (parallel_ms, _) = benchmark(size, iterations, engine::step_parallel);

        println!(
            "{:>10} {:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            population,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON)
        );
    }

    let cells = 1024 * 1024;
    let (ms, _) = benchmark(1024, iterations, engine::step_parallel);
    println!("\nParallel at 1024x1024: {:.2} ms/gen, {:.1}M cells/sec",
        ms, (cells as f64) / (ms / 1000.0) / 1_000_000.0);
}
