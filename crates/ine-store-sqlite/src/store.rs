//! [`SqliteStore`] — the SQLite implementation of [`DimensionStore`] and
//! [`FactSink`].

use std::path::Path;

use ine_core::{
  dimension::{DimensionKind, NewDimension, Period},
  fact::{FactRows, FactTable},
  store::{DimensionStore, FactSink},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  encode::RawPeriod,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An INE star schema backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone funnels its calls through the same worker thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// Number of rows in a dimension table.
  pub async fn count(&self, kind: DimensionKind) -> Result<i64> {
    self.count_table(kind.table()).await
  }

  /// Number of rows in a fact table.
  pub async fn fact_count(&self, table: FactTable) -> Result<i64> {
    self.count_table(table.table()).await
  }

  async fn count_table(&self, table: &'static str) -> Result<i64> {
    let n = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| {
          r.get(0)
        })?)
      })
      .await?;
    Ok(n)
  }

  /// The stored unit of an indicator, or `None` if no such indicator exists.
  pub async fn indicator_unit(&self, name: &str) -> Result<Option<String>> {
    let name = name.to_owned();

    let unit: Option<Option<String>> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT unidad FROM tbl_indicador WHERE nombre = ?1",
              rusqlite::params![name],
              |r| r.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    Ok(unit.flatten())
  }

  /// Look a period up by its `YYYY-MM-01` identity.
  pub async fn period_by_iso(&self, iso_date: &str) -> Result<Option<Period>> {
    let iso_date = iso_date.to_owned();

    let raw: Option<RawPeriod> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id_periodo, anio, mes, trimestre, fecha_iso
               FROM tbl_periodo WHERE fecha_iso = ?1",
              rusqlite::params![iso_date],
              |row| {
                Ok(RawPeriod {
                  period_id: row.get(0)?,
                  year:      row.get(1)?,
                  month:     row.get(2)?,
                  quarter:   row.get(3)?,
                  iso_date:  row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPeriod::into_period).transpose()
  }
}

/// Insert `dimension` unless its lookup value is already present, then return
/// the row id. `Ok((id, true))` when a row was inserted.
fn get_or_insert(
  conn: &mut rusqlite::Connection,
  dimension: &NewDimension,
) -> rusqlite::Result<(i64, bool)> {
  let kind = dimension.kind();
  let lookup = dimension.lookup_value();
  let select = format!(
    "SELECT {} FROM {} WHERE {} = ?1",
    kind.id_column(),
    kind.table(),
    kind.lookup_column(),
  );

  let tx = conn.transaction()?;

  if let Some(id) = tx
    .query_row(&select, rusqlite::params![lookup], |r| r.get(0))
    .optional()?
  {
    return Ok((id, false));
  }

  let inserted = match dimension {
    NewDimension::Geography { name } => tx.execute(
      "INSERT INTO tbl_geografia (nombre) VALUES (?1)
       ON CONFLICT (nombre) DO NOTHING",
      rusqlite::params![name],
    )?,
    NewDimension::Indicator { name, unit } => tx.execute(
      "INSERT INTO tbl_indicador (nombre, unidad) VALUES (?1, ?2)
       ON CONFLICT (nombre) DO NOTHING",
      rusqlite::params![name, unit],
    )?,
    NewDimension::Period(p) => tx.execute(
      "INSERT INTO tbl_periodo (anio, mes, trimestre, fecha_iso)
       VALUES (?1, ?2, ?3, ?4)
       ON CONFLICT (fecha_iso) DO NOTHING",
      rusqlite::params![p.year, p.month, p.quarter, lookup],
    )?,
  };

  let id = if inserted == 1 {
    tx.last_insert_rowid()
  } else {
    tx.query_row(&select, rusqlite::params![lookup], |r| r.get(0))?
  };

  tx.commit()?;
  Ok((id, inserted == 1))
}

/// Append `rows` inside one transaction; returns the number written.
fn append_facts(
  conn: &mut rusqlite::Connection,
  rows: &FactRows,
) -> rusqlite::Result<usize> {
  let tx = conn.transaction()?;
  let mut written = 0;

  {
    match rows {
      FactRows::Empty => {}
      FactRows::Prices(facts) => {
        let mut stmt = tx.prepare(
          "INSERT INTO T_precios (
             id_periodo, id_indicador, id_geografia, categoria_gasto, valor
           ) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for f in facts {
          written += stmt.execute(rusqlite::params![
            f.period_id,
            f.indicator_id,
            f.geography_id,
            f.category,
            f.value,
          ])?;
        }
      }
      FactRows::Wages(facts) => {
        let mut stmt = tx.prepare(
          "INSERT INTO T_salarios (
             id_periodo, id_indicador, id_geografia,
             sexo, sector_cnae, ocupacion, valor
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for f in facts {
          written += stmt.execute(rusqlite::params![
            f.period_id,
            f.indicator_id,
            f.geography_id,
            f.sex,
            f.sector,
            f.occupation,
            f.value,
          ])?;
        }
      }
      FactRows::Employment(facts) => {
        let mut stmt = tx.prepare(
          "INSERT INTO T_empleo (
             id_periodo, id_indicador, id_geografia,
             sexo, grupo_edad, tipo_jornada, tipo_contrato, valor
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        for f in facts {
          written += stmt.execute(rusqlite::params![
            f.period_id,
            f.indicator_id,
            f.geography_id,
            f.sex,
            f.age_group,
            f.schedule_type,
            f.contract_type,
            f.value,
          ])?;
        }
      }
    }
  }

  tx.commit()?;
  Ok(written)
}

// ─── DimensionStore impl ─────────────────────────────────────────────────────

impl DimensionStore for SqliteStore {
  type Error = crate::Error;

  async fn get_or_create(&self, dimension: NewDimension) -> Result<i64> {
    let kind = dimension.kind();
    let lookup = dimension.lookup_value();

    let (id, inserted) = self
      .conn
      .call(move |conn| Ok(get_or_insert(conn, &dimension)?))
      .await?;

    if inserted {
      tracing::debug!(
        table = kind.table(),
        id,
        value = %lookup,
        "created dimension row"
      );
    }

    Ok(id)
  }
}

// ─── FactSink impl ───────────────────────────────────────────────────────────

impl FactSink for SqliteStore {
  type Error = crate::Error;

  async fn insert_facts(&self, rows: FactRows) -> Result<usize> {
    let Some(table) = rows.table() else {
      return Ok(0);
    };
    if rows.is_empty() {
      return Ok(0);
    }

    let written = self
      .conn
      .call(move |conn| Ok(append_facts(conn, &rows)?))
      .await?;

    tracing::debug!(table = table.table(), rows = written, "appended facts");
    Ok(written)
  }
}
