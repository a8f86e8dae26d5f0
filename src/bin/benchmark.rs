//! Performance benchmark: serial vs parallel generations, plus audio planning

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sonic_life::Grid;
use sonic_life::domain::GridError;
use sonic_life::audio::BirthHistogram;

fn seeded_grid(size: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), 0.3);
    Ok(grid)
}

fn benchmark_serial(size: usize, iterations: u32) -> Result<f64, GridError> {
    let mut grid = seeded_grid(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.update();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_parallel(size: usize, iterations: u32) -> Result<f64, GridError> {
    let mut grid = seeded_grid(size)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid.update_parallel();
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Time spent turning a report into voices, per generation
fn benchmark_voice_planning(size: usize, iterations: u32) -> Result<f64, GridError> {
    let mut grid = seeded_grid(size)?;
    let reports: Vec<_> = (0..iterations).map(|_| grid.update()).collect();

    let start = Instant::now();
    let mut voices = 0;
    for report in &reports {
        voices += BirthHistogram::from_report(report).plan_voices().len();
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    std::hint::black_box(voices);
    Ok(elapsed)
}

fn main() -> anyhow::Result<()> {
    println!("=== Sonic Life Performance Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10} {:>12}", "Size", "Serial", "Parallel", "Speedup", "Voices");
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark_serial(size, iterations)?;
        let parallel_ms = benchmark_parallel(size, iterations)?;
        let voices_ms = benchmark_voice_planning(size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>12.4}",
            format!("{size}x{size}"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms.max(f64::EPSILON),
            voices_ms
        );
    }

    let size = 2048;
    let parallel_ms = benchmark_parallel(size, iterations)?;
    let cells = (size * size) as f64;
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells / parallel_ms / 1000.0
    );
    Ok(())
}
