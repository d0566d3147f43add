use anyhow::{Context, Error, Result};
use serde::Deserialize;
use std::{fs, io::ErrorKind};
use structopt::StructOpt;

const CONFIG_FILE: &str = "./ratecheck.toml";

// Macro for merging configuration values
macro_rules! fold_in {
    ( $cli:ident , $toml:ident ; $( $key:ident : $default:expr; )* ) => {
        $(
            if $cli.$key == $default && $toml.$key != $default {
                $cli.$key = $toml.$key;
            }
        )*
    };
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ratecheck",
    about = "Send sequential GET requests to a server until it rate limits.\n\n\
             Values missing from the command line and the config file are asked for interactively."
)]
pub(crate) struct RatecheckOptions {
    /// Configuration file to use
    #[structopt(short, long = "config", default_value = CONFIG_FILE)]
    pub config_file: String,

    #[structopt(flatten)]
    pub config: Config,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize, StructOpt)]
pub struct Config {
    /// Server URL to send the requests to
    #[structopt(short, long)]
    #[serde(default)]
    pub url: Option<String>,

    /// Number of requests to make
    #[structopt(short = "n", long)]
    #[serde(default)]
    pub requests: Option<usize>,

    /// Verbose program output (debug logs on stderr)
    #[structopt(short, long)]
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from a file
    pub(crate) fn load_from_file(path: &str) -> Result<Option<Config>> {
        // Read configuration file
        let result = fs::read(path);

        // Ignore a file not found error
        let contents = match result {
            Ok(c) => c,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::NotFound => Ok(None),
                    _ => Err(Error::from(e)),
                }
            }
        };

        let config = toml::from_slice(&contents)
            .with_context(|| format!("Cannot parse config file {}", path))?;
        Ok(Some(config))
    }

    /// Merge the configuration from TOML into the CLI configuration
    pub(crate) fn merge(&mut self, toml: Config) {
        fold_in! {
            // Destination and source configs
            self, toml;

            // Keys with defaults to assign
            url: None;
            requests: None;
            verbose: false;
        }
    }
}
