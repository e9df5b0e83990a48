use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    pub pattern: String,
    pub iterations: u64,
    #[arg(short, long)]
    pub threads: Option<usize>,
}
