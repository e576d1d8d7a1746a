//! Series-name decoding.
//!
//! A series name is a dot-delimited list of dimension values, e.g.
//! `"Nacional. Índice general. Índice. "`. Segments are trimmed and empty
//! ones dropped before positional extraction.

use ine_core::source::SourceCode;

use crate::{
  Error, Result,
  layout::{Field, layout},
};

/// Dimension values decoded from one series name. Fields the code's layout
/// does not place are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesMetadata {
  pub geography:     Option<String>,
  pub sex:           Option<String>,
  pub age_group:     Option<String>,
  pub contract_type: Option<String>,
  pub schedule_type: Option<String>,
  pub category:      Option<String>,
  pub data_type:     Option<String>,
  pub sector:        Option<String>,
  pub indicator:     Option<String>,
  pub occupation:    Option<String>,
}

impl SeriesMetadata {
  pub fn get(&self, field: Field) -> Option<&str> {
    match field {
      Field::Geography => self.geography.as_deref(),
      Field::Sex => self.sex.as_deref(),
      Field::AgeGroup => self.age_group.as_deref(),
      Field::ContractType => self.contract_type.as_deref(),
      Field::ScheduleType => self.schedule_type.as_deref(),
      Field::Category => self.category.as_deref(),
      Field::DataType => self.data_type.as_deref(),
      Field::Sector => self.sector.as_deref(),
      Field::Indicator => self.indicator.as_deref(),
      Field::Occupation => self.occupation.as_deref(),
    }
  }

  fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
    match field {
      Field::Geography => &mut self.geography,
      Field::Sex => &mut self.sex,
      Field::AgeGroup => &mut self.age_group,
      Field::ContractType => &mut self.contract_type,
      Field::ScheduleType => &mut self.schedule_type,
      Field::Category => &mut self.category,
      Field::DataType => &mut self.data_type,
      Field::Sector => &mut self.sector,
      Field::Indicator => &mut self.indicator,
      Field::Occupation => &mut self.occupation,
    }
  }

  /// Every field that holds a value, keyed by its metadata name.
  pub fn fields(&self) -> Vec<(Field, &str)> {
    use strum::IntoEnumIterator;
    Field::iter()
      .filter_map(|f| self.get(f).map(|v| (f, v)))
      .collect()
  }

  pub fn is_empty(&self) -> bool { self.fields().is_empty() }
}

/// Trimmed, non-empty segments of `name`.
pub(crate) fn segments(name: &str) -> Vec<&str> {
  name
    .split('.')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect()
}

pub(crate) fn decode(code: SourceCode, name: &str) -> Result<SeriesMetadata> {
  let parts = segments(name);
  let mut meta = SeriesMetadata::default();

  for &(field, index) in layout(code) {
    let value = parts.get(index).ok_or_else(|| Error::MalformedSeriesName {
      code,
      name: name.to_owned(),
      index,
      segments: parts.len(),
    })?;
    *meta.slot_mut(field) = Some((*value).to_owned());
  }

  Ok(meta)
}
