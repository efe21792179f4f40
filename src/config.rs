//! Run configuration for [`Proposition`](crate::Proposition).

use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const MAX_TESTS_ENV: &str = "PROPOSITION_MAX_TESTS";
pub const CHUNK_SIZE_ENV: &str = "PROPOSITION_CHUNK_SIZE";
pub const SEED_ENV: &str = "PROPOSITION_SEED";

/// Configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropositionConfig {
    /// Number of hypothesis invocations per `call`.
    pub max_tests: usize,

    /// Chunk size of the reshuffle stage wrapped around every registration.
    pub reshuffle_chunk_size: usize,

    /// Seed for the harness entropy. `None` draws a fresh seed per harness.
    pub seed: Option<u64>,
}

impl Default for PropositionConfig {
    fn default() -> Self {
        Self {
            max_tests: 100,
            reshuffle_chunk_size: 10,
            seed: None,
        }
    }
}

impl PropositionConfig {
    pub fn with_max_tests(mut self, max_tests: usize) -> Self {
        self.max_tests = max_tests;
        self
    }

    pub fn with_reshuffle_chunk_size(mut self, chunk_size: usize) -> Self {
        self.reshuffle_chunk_size = chunk_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject zero test counts and chunk sizes.
    pub fn validate(&self) -> Result<()> {
        if self.max_tests == 0 {
            return Err(Error::NonPositive {
                parameter: "max_tests",
                value: 0,
            });
        }
        if self.reshuffle_chunk_size == 0 {
            return Err(Error::NonPositive {
                parameter: "reshuffle_chunk_size",
                value: 0,
            });
        }
        Ok(())
    }

    /// Defaults overridden by `PROPOSITION_MAX_TESTS`, `PROPOSITION_CHUNK_SIZE`
    /// and `PROPOSITION_SEED` when they are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(max_tests) = parse_var(&lookup, MAX_TESTS_ENV)? {
            config.max_tests = max_tests;
        }
        if let Some(chunk_size) = parse_var(&lookup, CHUNK_SIZE_ENV)? {
            config.reshuffle_chunk_size = chunk_size;
        }
        config.seed = parse_var(&lookup, SEED_ENV)?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::InvalidConfig {
                key: key.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
