//! Per-source-code segment layouts.
//!
//! Adding a source code is a table edit: give it a row in [`layout`].

use ine_core::source::SourceCode;
use strum::{Display, EnumIter};

/// A named dimension carried inside a series name.
///
/// Displays as the metadata key used by the statistics publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Field {
  #[strum(serialize = "Geografia")]
  Geography,
  #[strum(serialize = "Sexo")]
  Sex,
  #[strum(serialize = "Grupo_Edad")]
  AgeGroup,
  #[strum(serialize = "Tipo_Contrato")]
  ContractType,
  #[strum(serialize = "Tipo_Jornada")]
  ScheduleType,
  #[strum(serialize = "Categoria")]
  Category,
  #[strum(serialize = "Tipo_Dato")]
  DataType,
  #[strum(serialize = "Sector")]
  Sector,
  #[strum(serialize = "Indicador")]
  Indicator,
  #[strum(serialize = "Ocupacion")]
  Occupation,
}

/// `(field, segment index)` pairs, in extraction order.
pub type Layout = &'static [(Field, usize)];

const TASA_PARO: Layout =
  &[(Field::Sex, 1), (Field::Geography, 2), (Field::AgeGroup, 3)];

const TEMPORALIDAD: Layout = &[
  (Field::Geography, 0),
  (Field::Sex, 2),
  (Field::ContractType, 3),
  (Field::ScheduleType, 4),
];

const PRICE_INDEX: Layout =
  &[(Field::Geography, 0), (Field::Category, 1), (Field::DataType, 2)];

const ETCL: Layout =
  &[(Field::Geography, 0), (Field::Sector, 1), (Field::Indicator, 2)];

const EAES_OCUPACION: Layout =
  &[(Field::Occupation, 0), (Field::Sex, 1), (Field::Geography, 2)];

const EAES_PERCENTILES: Layout =
  &[(Field::Sex, 0), (Field::Geography, 1), (Field::Indicator, 3)];

pub fn layout(code: SourceCode) -> Layout {
  match code {
    SourceCode::TasaParo => TASA_PARO,
    SourceCode::Temporalidad => TEMPORALIDAD,
    SourceCode::Ipc | SourceCode::Ipv => PRICE_INDEX,
    SourceCode::Etcl => ETCL,
    SourceCode::EaesOcupacion => EAES_OCUPACION,
    SourceCode::EaesPercentiles => EAES_PERCENTILES,
  }
}

/// Minimum segment count a well-formed name for `code` must have.
pub fn min_segments(code: SourceCode) -> usize {
  layout(code)
    .iter()
    .map(|&(_, index)| index + 1)
    .max()
    .unwrap_or(0)
}
