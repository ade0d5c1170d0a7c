//! Command line driver: estimate the percolation threshold of an n-by-n grid
//! over a number of Monte Carlo trials.

use std::{env, process};

use percolate::PercolationStats;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let stats = match run(&args) {
        Ok(stats) => stats,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("usage: threshold <grid size> <trials>");
            process::exit(1);
        }
    };
    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
}

fn run(args: &[String]) -> Result<PercolationStats, &'static str> {
    if args.len() != 2 {
        return Err("Expected exactly two arguments");
    }
    let n: usize = args[0].parse().or(Err("Grid size must be a positive integer"))?;
    let trials: usize = args[1].parse().or(Err("Trial count must be a positive integer"))?;
    PercolationStats::run(n, trials, &mut rand::rng())
}
