use clap::Parser;
use lomuto::ctx::{Context, Strategy};
use std::io::{self, Write};
use std::process;

/// Sorts a fixed demo array with quicksort and prints it before and after sorting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The sort driver: `recursive` or `stack`
    #[arg(long, default_value = "recursive", value_parser = parse_strategy)]
    strategy: Strategy,
}

fn parse_strategy(name: &str) -> Result<Strategy, String> {
    Strategy::from_name(name).ok_or_else(|| format!("unknown strategy '{}'", name))
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let ctx = Context::new(args.strategy);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = lomuto::demo::run(&mut out, &ctx).and_then(|_| out.flush()) {
        log::error!("unable to write the report: {}", err);
        process::exit(1);
    }
}
