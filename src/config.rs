use std::env;

use log::LevelFilter;
use thiserror::Error as DeriveError;

use crate::prelude::*;

#[derive(Debug, DeriveError)]
pub enum Error {
  #[error("Invalid value for {var}: {value:?}")]
  InvalidVar { var: String, value: String },
}

/// Runtime settings for the `bmi` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub elevated_log: LevelFilter,
}

impl Default for Config {
  fn default() -> Self {
    Self { elevated_log: LevelFilter::Warn }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, Error> {
    Self::from_lookup(|k| env::var(k).ok())
  }

  /// Build from `lookup`, falling back to defaults for unset variables.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
    let mut config = Self::default();

    macro_rules! set_from_env {
      ($k:ident) => {
        match lookup(std::stringify!($k).to_uppercase().as_str()) {
          | Some(v) => {
            let var = std::stringify!($k).to_uppercase();
            v.parse()
             .map(|parsed| config.$k = parsed)
             .map_err(|_| Error::InvalidVar { var, value: v.clone() })
          },
          | None => Ok(()),
        }
      };
    }

    set_from_env!(elevated_log)?;

    Ok(config).tap(|c| log::trace!("config: {:?}", c))
  }
}
