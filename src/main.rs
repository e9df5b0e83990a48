use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::life::Board;

mod args;
mod engine;
mod life;
mod patterns;
mod render;

fn mk_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?)
}

fn usage() {
    println!("Usage: life-rs <pattern> <iterations>, e.g. life-rs rpentomino 50");
    println!("known patterns: {}", patterns::names().join(", "));
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(_) => {
            usage();
            return Ok(());
        }
    };
    let pattern = match patterns::find(&args.pattern) {
        Some(pattern) => pattern,
        None => {
            usage();
            return Ok(());
        }
    };
    let initial = Board::seed(pattern.cells.iter().copied());
    let threads = args.threads.unwrap_or_else(num_cpus::get);
    let states = mk_pool(threads)?.install(|| engine::iterate(initial, args.iterations));
    for state in &states {
        println!("{}", render::print_cells(state));
    }
    Ok(())
}
