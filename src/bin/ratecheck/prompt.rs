use anyhow::{Context, Result};
use log::warn;
use std::io::{BufRead, Write};

use crate::options::Config;
use ratecheck::{RunConfig, DEFAULT_DELAY, DEFAULT_REQUEST_COUNT, DEFAULT_URL};

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    // End of input reads as an empty answer
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Cannot read answer from stdin")?;
    Ok(answer)
}

/// Target URL from a prompt answer. Only an empty line gives the default;
/// anything else is used as typed and left to the transport to reject.
pub(crate) fn parse_url(answer: &str) -> String {
    match answer.trim_end_matches(&['\r', '\n'][..]) {
        "" => DEFAULT_URL.to_string(),
        url => url.to_string(),
    }
}

/// Request count from a prompt answer. Anything that is not a non-negative
/// integer gives the default.
pub(crate) fn parse_request_count(answer: &str) -> usize {
    let answer = answer.trim();
    if answer.is_empty() {
        return DEFAULT_REQUEST_COUNT;
    }
    answer.parse().unwrap_or_else(|_| {
        warn!(
            "Invalid number of requests {:?}, using {}",
            answer, DEFAULT_REQUEST_COUNT
        );
        DEFAULT_REQUEST_COUNT
    })
}

/// Build the run configuration, prompting for every value the command line
/// and config file left open
pub(crate) fn resolve<R: BufRead, W: Write>(
    cfg: &Config,
    input: &mut R,
    output: &mut W,
) -> Result<RunConfig> {
    let url = match &cfg.url {
        Some(url) => url.clone(),
        None => parse_url(&ask(
            input,
            output,
            &format!("Enter server URL (default: {}): ", DEFAULT_URL),
        )?),
    };

    let request_count = match cfg.requests {
        Some(requests) => requests,
        None => parse_request_count(&ask(
            input,
            output,
            &format!(
                "Enter number of requests to make (default: {}): ",
                DEFAULT_REQUEST_COUNT
            ),
        )?),
    };

    Ok(RunConfig {
        url,
        request_count,
        delay: DEFAULT_DELAY,
    })
}
