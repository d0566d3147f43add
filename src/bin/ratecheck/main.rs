use anyhow::Result;
use log::{info, LevelFilter};
use std::io;
use structopt::StructOpt;

mod options;
mod prompt;
mod stats;

use crate::options::{Config, RatecheckOptions};
use crate::stats::color_attempt;

use ratecheck::{RunConfig, Runner, RATE_LIMIT_NOTICE};

fn main() -> Result<()> {
    let mut opts = RatecheckOptions::from_args();

    // Load a potentially existing config file and merge it into the config from the CLI
    if let Some(c) = Config::load_from_file(&opts.config_file)? {
        opts.config.merge(c)
    }
    let cfg = &opts.config;
    init_logging(cfg.verbose);

    let run_config = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt::resolve(cfg, &mut input, &mut io::stdout())?
    };

    // Requests are strictly sequential, so a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(run_config))
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    };
    // Dependencies (hyper, reqwest) only get to report warnings
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("ratecheck", level)
        .init();
}

async fn run(run_config: RunConfig) -> Result<()> {
    let runner = Runner::new(run_config)?;
    println!(
        "Making {} requests to {}...",
        runner.config().request_count,
        runner.config().url
    );

    let result = runner
        .run(|attempt| {
            println!("{}", color_attempt(attempt));
            if attempt.outcome.is_rate_limited() {
                println!("{}", RATE_LIMIT_NOTICE);
            }
        })
        .await;

    if result.is_rate_limited() {
        info!(
            "Server rate limited after {} of {} requests",
            result.issued, result.total
        );
    }

    // The summary ends with a newline
    print!("{}", result);
    Ok(())
}
