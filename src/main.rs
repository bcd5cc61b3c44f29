// src/main.rs

use coursegraph::{RunStatus, cli, logging, run};

fn main() {
    match run_main() {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::CyclesFound) => std::process::exit(2),
        Err(err) => {
            eprintln!("coursegraph error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<RunStatus> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}
