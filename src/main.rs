use std::env;
use std::process;
use std::time::Instant;

use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortkernels::config::QUADRATIC_LIMIT;
use sortkernels::patterns::{is_sorted, random};
use sortkernels::{sort, Algorithm, SortError, ALL_ALGORITHMS};

const USAGE: &str = "Usage: sortkernels <size> [seed] [algorithm...]";

fn parse_args() -> Result<(usize, u64, Vec<Algorithm>), String> {
    let mut args = env::args();
    args.next();

    let size = match args.next() {
        Some(arg) => arg.parse::<usize>().map_err(|e| format!("invalid size '{arg}': {e}"))?,
        None => return Err(USAGE.to_string()),
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().map_err(|e| format!("invalid seed '{arg}': {e}"))?,
        None => {
            info!("No seed specified. Using 12345");
            12345
        }
    };

    let algorithms = args
        .map(|name| name.parse::<Algorithm>())
        .collect::<Result<Vec<_>, SortError>>()
        .map_err(|e| e.to_string())?;
    let algorithms = if algorithms.is_empty() {
        ALL_ALGORITHMS.to_vec()
    } else {
        algorithms
    };

    Ok((size, seed, algorithms))
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let (size, seed, algorithms) = match parse_args() {
        Ok(parsed) => parsed,
        Err(msg) => {
            error!("{msg}");
            process::exit(2);
        }
    };

    let input = random(&mut StdRng::seed_from_u64(seed), size);
    println!("{:<16} {:>14}", "algorithm", "time");

    for algo in algorithms {
        if algo.is_quadratic() && size > QUADRATIC_LIMIT {
            info!("Skipping {algo}: {size} elements is above the quadratic limit of {QUADRATIC_LIMIT}");
            continue;
        }

        let mut data = input.clone();
        let start = Instant::now();
        sort(algo, &mut data);
        let duration = start.elapsed();

        if !is_sorted(&data) {
            error!("{algo} produced unsorted output. Seed: {seed}");
            process::exit(1);
        }
        println!("{:<16} {:>14}", algo.name(), format!("{duration:?}"));
    }
}
