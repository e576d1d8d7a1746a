//! Source codes — the tokens naming each statistical dataset family.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// A statistical dataset a raw batch was downloaded from.
///
/// The token form (`"IPC"`, `"TASA_PARO"`, ...) is what appears in
/// configuration files and on the command line.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceCode {
  /// Consumer price index.
  Ipc,
  /// Housing price index.
  Ipv,
  /// Quarterly labour cost survey, broken down by sector.
  Etcl,
  /// Annual wage structure survey, by occupation.
  EaesOcupacion,
  /// Annual wage structure survey, by wage percentile.
  EaesPercentiles,
  /// Unemployment rate from the labour force survey.
  TasaParo,
  /// Share of employees on temporary contracts.
  Temporalidad,
}

/// The normaliser family a source code is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
  Prices,
  Wages,
  Employment,
}

impl SourceCode {
  /// Parse a token, mapping failure onto [`Error::UnknownSourceCode`].
  pub fn parse_token(token: &str) -> Result<Self> {
    token
      .parse()
      .map_err(|_| Error::UnknownSourceCode(token.to_owned()))
  }

  pub fn family(self) -> Family {
    match self {
      Self::Ipc | Self::Ipv => Family::Prices,
      Self::Etcl | Self::EaesOcupacion | Self::EaesPercentiles => {
        Family::Wages
      }
      Self::TasaParo | Self::Temporalidad => Family::Employment,
    }
  }

  pub fn as_str(self) -> &'static str { self.into() }
}
