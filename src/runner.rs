use crate::{
    error::Result,
    stats::RunResult,
    types::{Attempt, Outcome, RunConfig, DEFAULT_DELAY, DEFAULT_REQUEST_COUNT, DEFAULT_URL},
};
use derive_builder::Builder;
use log::{debug, info, warn};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Sends the requests of a run, one after the other
#[derive(Debug, Clone)]
pub struct Runner {
    reqwest_client: reqwest::Client,
    config: RunConfig,
}

/// Sequential GET requests against a single URL,
/// stopping at the first 429.
#[derive(Builder, Debug)]
#[allow(dead_code)]
#[builder(build_fn(skip))]
#[builder(name = "RunnerBuilder")]
pub struct RunnerBuilderInternal {
    #[builder(setter(into))]
    url: String,
    request_count: usize,
    delay: Duration,
}

impl RunnerBuilder {
    /// Build the runner. Unset fields fall back to their defaults.
    pub fn build(&self) -> Result<Runner> {
        Runner::new(RunConfig {
            url: self.url.clone().unwrap_or_else(|| DEFAULT_URL.to_string()),
            request_count: self.request_count.unwrap_or(DEFAULT_REQUEST_COUNT),
            delay: self.delay.unwrap_or(DEFAULT_DELAY),
        })
    }
}

impl Runner {
    /// Create a runner for an already resolved configuration
    pub fn new(config: RunConfig) -> Result<Self> {
        // No default headers, no timeout and no retries: every request goes
        // out exactly as the plain client sends it.
        let reqwest_client = reqwest::ClientBuilder::new().build()?;
        Ok(Runner {
            reqwest_client,
            config,
        })
    }

    /// Settings this runner was built with
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    async fn check(&self) -> Outcome {
        let url = &self.config.url;
        let start = Instant::now();
        let res = self.reqwest_client.get(url.as_str()).send().await;
        match res {
            Ok(response) => {
                debug!(
                    "GET {} answered {} after {:?}",
                    url,
                    response.status(),
                    start.elapsed()
                );
                Outcome::new(response.status())
            }
            Err(e) => {
                warn!("Request to {} failed: {:?}", url, e);
                e.into()
            }
        }
    }

    /// Run the configured number of requests.
    ///
    /// `report` is called once per attempt, right after its outcome is
    /// known. The run ends early on the first rate-limited response; all
    /// other failures are only counted.
    pub async fn run<F>(&self, mut report: F) -> RunResult
    where
        F: FnMut(&Attempt),
    {
        let count = self.config.request_count;
        let mut result = RunResult::new(count);
        info!("Starting run of {} requests against {}", count, self.config.url);

        for index in 1..=count {
            let attempt = Attempt::new(index, self.check().await);
            result.add(&attempt);
            report(&attempt);

            if attempt.outcome.is_rate_limited() {
                info!("Rate limited after {} requests, stopping", index);
                break;
            }
            if index < count {
                sleep(self.config.delay).await;
            }
        }

        info!(
            "Run finished: {} of {} requests issued",
            result.issued, result.total
        );
        result
    }
}
