//! `ratecheck` checks how an HTTP endpoint reacts to a steady stream of
//! requests. It sends sequential GET requests and stops as soon as the server
//! answers with `429 Too Many Requests`.
//!
//! The main struct of this crate is `RunnerBuilder`, which configures a
//! `Runner`. Running it yields a `RunResult` with the counters of the run.
//!
//! ```no_run
//! use ratecheck::RunnerBuilder;
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!   let runner = RunnerBuilder::default()
//!     .url("http://localhost:3000/api/users")
//!     .request_count(10)
//!     .build()?;
//!   let result = runner.run(|attempt| println!("{}", attempt)).await;
//!   print!("{}", result);
//!   Ok(())
//! }
//! ```
mod error;
mod runner;
mod stats;
mod types;

mod test_utils;

pub use error::{ErrorKind, Result};
pub use runner::{Runner, RunnerBuilder};
pub use stats::RunResult;
pub use types::*;
