use pad::{Alignment, PadStr};
use std::fmt::{self, Display};

use crate::types::{Attempt, Outcome};

// Width of the label column in the summary block
const LABEL_WIDTH: usize = 17;

/// Counters for a single run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Number of requests the run was configured with
    pub total: usize,
    /// Number of requests actually sent
    pub issued: usize,
    /// Responses with status 200
    pub successful: usize,
    /// Responses with status 429 (at most one, since the run stops there)
    pub rate_limited: usize,
    /// Other status codes and transport failures
    pub errors: usize,
}

impl RunResult {
    /// Empty result for a run of `total` requests
    pub fn new(total: usize) -> Self {
        RunResult {
            total,
            ..Default::default()
        }
    }

    /// Record the outcome of one attempt
    pub fn add(&mut self, attempt: &Attempt) {
        self.issued += 1;
        match attempt.outcome {
            Outcome::Success(_) => self.successful += 1,
            Outcome::RateLimited => self.rate_limited += 1,
            Outcome::Failed(_) | Outcome::Error(_) => self.errors += 1,
        }
    }

    /// Whether the run was cut short by the server
    pub fn is_rate_limited(&self) -> bool {
        self.rate_limited > 0
    }
}

fn write_stat(f: &mut fmt::Formatter, title: &str, stat: usize) -> fmt::Result {
    f.write_str(&title.pad(LABEL_WIDTH, ' ', Alignment::Left, false))?;
    writeln!(f, "{}", stat)
}

impl Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "----- RESULTS -----")?;
        write_stat(f, "Total requests:", self.total)?;
        write_stat(f, "Successful:", self.successful)?;
        write_stat(f, "Rate limited:", self.rate_limited)?;
        write_stat(f, "Other errors:", self.errors)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http::StatusCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stats() {
        let mut result = RunResult::new(5);
        result.add(&Attempt::new(1, Outcome::Success(StatusCode::OK)));
        result.add(&Attempt::new(2, Outcome::Failed(StatusCode::BAD_GATEWAY)));
        result.add(&Attempt::new(3, Outcome::Error("timed out".to_string())));
        result.add(&Attempt::new(4, Outcome::RateLimited));

        assert_eq!(
            result,
            RunResult {
                total: 5,
                issued: 4,
                successful: 1,
                rate_limited: 1,
                errors: 2,
            }
        );
        assert!(result.is_rate_limited());
    }

    #[test]
    fn test_summary_block() {
        let result = RunResult {
            total: 5,
            issued: 3,
            successful: 2,
            rate_limited: 1,
            errors: 0,
        };
        assert_eq!(
            result.to_string(),
            "\n----- RESULTS -----\n\
             Total requests:  5\n\
             Successful:      2\n\
             Rate limited:    1\n\
             Other errors:    0\n"
        );
    }
}
