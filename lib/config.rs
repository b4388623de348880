use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

#[cfg(test)]
use proptest::prelude::*;

/// Runtime settings of a vote chess game.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// How long each team has to vote before its turn is resolved.
    #[cfg_attr(test, strategy((1u64..1_000_000).prop_map(Duration::from_secs)))]
    #[serde(with = "humantime_serde")]
    pub period: Duration,

    /// How many of the leading moves to show in the standings.
    #[cfg_attr(test, strategy(1usize..10))]
    pub standings: usize,

    /// Seeds the random tie-breaker, which is otherwise seeded from the operating system.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            period: Duration::from_secs(24 * 60 * 60),
            standings: 3,
            seed: None,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Config`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
