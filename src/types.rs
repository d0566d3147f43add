use std::{fmt::Display, time::Duration};

/// Target used when none is given on the command line, in the config file
/// or at the prompt
pub const DEFAULT_URL: &str = "http://localhost:3000/api/users";

/// Number of requests used when none is given or the input is unusable
pub const DEFAULT_REQUEST_COUNT: usize = 150;

/// Pause between two consecutive requests
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Printed right after the progress line of a rate-limited request
pub const RATE_LIMIT_NOTICE: &str = "Server has became angry so exiting...";

/// Settings for a single run. Fixed once the run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Target of every request. Not validated; a bad URL surfaces as a
    /// transport error on each attempt.
    pub url: String,
    /// How many requests to issue at most
    pub request_count: usize,
    /// Pause between two requests
    pub delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            url: DEFAULT_URL.to_string(),
            request_count: DEFAULT_REQUEST_COUNT,
            delay: DEFAULT_DELAY,
        }
    }
}

/// Classified result of one request
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// Server answered with 200
    Success(http::StatusCode),
    /// Server answered with 429; the run stops here
    RateLimited,
    /// Server answered with any other status code
    Failed(http::StatusCode),
    /// The request never got a response (connection refused, DNS, ...)
    Error(String),
}

impl Outcome {
    /// Classify a status code received from the server
    pub fn new(statuscode: http::StatusCode) -> Self {
        match statuscode {
            http::StatusCode::OK => Outcome::Success(statuscode),
            http::StatusCode::TOO_MANY_REQUESTS => Outcome::RateLimited,
            _ => Outcome::Failed(statuscode),
        }
    }

    /// Only a plain 200 counts as success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether the server signalled rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Outcome::RateLimited)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success(c) => write!(f, "Success ({})", c.as_u16()),
            Outcome::RateLimited => write!(
                f,
                "RATE LIMITED ({})",
                http::StatusCode::TOO_MANY_REQUESTS.as_u16()
            ),
            Outcome::Failed(c) => write!(f, "Error ({})", c.as_u16()),
            Outcome::Error(e) => write!(f, "Failed with error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Outcome {
    fn from(e: reqwest::Error) -> Self {
        Outcome::Error(e.to_string())
    }
}

/// One request of a run, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Position of the request within the run
    pub index: usize,
    /// What happened
    pub outcome: Outcome,
}

impl Attempt {
    /// Create a new attempt record
    pub fn new(index: usize, outcome: Outcome) -> Self {
        Attempt { index, outcome }
    }
}

impl Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request {}: {}", self.index, self.outcome)
    }
}
