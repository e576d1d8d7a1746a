//! Pipeline tests against a counting in-memory store and the SQLite backend.

use std::{
  collections::HashMap,
  convert::Infallible,
  sync::Mutex,
};

use ine_core::{
  dimension::{DimensionKind, NewDimension},
  fact::{FactRows, FactTable},
  series::{Observation, RawSeries},
  source::SourceCode,
  store::{DimensionStore, FactSink},
};
use ine_store_sqlite::SqliteStore;

use crate::{Error, process, process_code, resolve_period};

// ─── Test stores ─────────────────────────────────────────────────────────────

/// Records every insert so tests can assert on exact write counts.
#[derive(Default)]
struct MemoryStore {
  ids:     Mutex<HashMap<(DimensionKind, String), i64>>,
  inserts: Mutex<Vec<NewDimension>>,
}

impl MemoryStore {
  fn inserts(&self) -> Vec<NewDimension> { self.inserts.lock().unwrap().clone() }

  fn inserts_of(&self, kind: DimensionKind) -> usize {
    self.inserts().iter().filter(|d| d.kind() == kind).count()
  }
}

impl DimensionStore for MemoryStore {
  type Error = Infallible;

  async fn get_or_create(&self, dimension: NewDimension) -> Result<i64, Infallible> {
    let mut ids = self.ids.lock().unwrap();
    let key = (dimension.kind(), dimension.lookup_value());
    if let Some(id) = ids.get(&key) {
      return Ok(*id);
    }
    let id = ids.len() as i64 + 1;
    ids.insert(key, id);
    self.inserts.lock().unwrap().push(dimension);
    Ok(id)
  }
}

/// Fails every call, as an unreachable database would.
struct DownStore;

impl DimensionStore for DownStore {
  type Error = std::io::Error;

  async fn get_or_create(&self, _: NewDimension) -> Result<i64, std::io::Error> {
    Err(std::io::Error::new(
      std::io::ErrorKind::ConnectionRefused,
      "store unavailable",
    ))
  }
}

async fn sqlite() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn series(name: &str, data: &[(i32, Option<i64>, f64)]) -> RawSeries {
  RawSeries::new(
    name,
    data
      .iter()
      .map(|&(y, p, v)| Observation::new(y, p, Some(v)))
      .collect(),
  )
}

const ALL_TOKENS: [&str; 7] = [
  "IPC",
  "IPV",
  "ETCL",
  "EAES_OCUPACION",
  "EAES_PERCENTILES",
  "TASA_PARO",
  "TEMPORALIDAD",
];

// ─── Dispatcher ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_batch_is_a_no_op_for_every_code() {
  let store = MemoryStore::default();
  for token in ALL_TOKENS.iter().chain(&["UNKNOWN"]) {
    let rows = process(&store, token, &[]).await.unwrap();
    assert_eq!(rows, FactRows::Empty, "{token}");
  }
  assert!(store.inserts().is_empty());
}

#[tokio::test]
async fn unmapped_code_returns_empty_without_touching_the_store() {
  let store = MemoryStore::default();
  let batch = [series("Nacional. General. Índice", &[(2024, Some(19), 1.0)])];

  let rows = process(&store, "EPA_NUEVA", &batch).await.unwrap();

  assert!(rows.is_empty());
  assert!(store.inserts().is_empty());
}

#[tokio::test]
async fn codes_route_to_their_family() {
  let store = MemoryStore::default();

  let prices = process(
    &store,
    "IPV",
    &[series("Nacional. General. Índice", &[(2024, Some(19), 1.0)])],
  )
  .await
  .unwrap();
  assert_eq!(prices.table(), Some(FactTable::Prices));

  let wages = process(
    &store,
    "ETCL",
    &[series("Total Nacional. Industria. Coste salarial", &[(2024, Some(20), 1.0)])],
  )
  .await
  .unwrap();
  assert_eq!(wages.table(), Some(FactTable::Wages));

  let employment = process(
    &store,
    "TASA_PARO",
    &[series("Tasa de paro. Hombres. Nacional. Total", &[(2024, Some(21), 1.0)])],
  )
  .await
  .unwrap();
  assert_eq!(employment.table(), Some(FactTable::Employment));
}

// ─── Dimension resolution ────────────────────────────────────────────────────

#[tokio::test]
async fn dimensions_resolve_once_per_series_periods_once_per_date() {
  let store = MemoryStore::default();
  let batch = [
    series(
      "Nacional. IPC General. Indice",
      &[(2024, Some(19), 105.3), (2024, Some(20), 106.0), (2024, Some(19), 105.3)],
    ),
    series("Nacional. Alimentos. Indice", &[(2024, Some(19), 110.2)]),
  ];

  let rows = process_code(&store, SourceCode::Ipc, &batch).await.unwrap();

  assert_eq!(rows.len(), 4);
  assert_eq!(store.inserts_of(DimensionKind::Geography), 1);
  assert_eq!(store.inserts_of(DimensionKind::Indicator), 1);
  assert_eq!(store.inserts_of(DimensionKind::Period), 2);
}

#[tokio::test]
async fn resolve_period_collapses_codes_sharing_a_date() {
  let store = MemoryStore::default();

  let q1 = resolve_period(&store, 2024, Some(19)).await.unwrap();
  let annual = resolve_period(&store, 2024, Some(28)).await.unwrap();
  let none = resolve_period(&store, 2024, None).await.unwrap();
  let q4 = resolve_period(&store, 2024, Some(22)).await.unwrap();

  assert_eq!(q1, annual);
  assert_eq!(q1, none);
  assert_ne!(q1, q4);
  assert_eq!(store.inserts_of(DimensionKind::Period), 2);

  match &store.inserts()[0] {
    NewDimension::Period(p) => {
      assert_eq!(p.iso_date(), "2024-01-01");
      assert_eq!(p.quarter, Some(19));
    }
    other => panic!("unexpected insert: {other:?}"),
  }
}

// ─── Normalisers ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn wage_rows_leave_sector_empty_and_default_geography() {
  let store = MemoryStore::default();
  let batch = [series(
    "Directores y gerentes. Mujeres. Total Nacional",
    &[(2022, None, 52_000.0)],
  )];

  let FactRows::Wages(rows) =
    process_code(&store, SourceCode::EaesOcupacion, &batch).await.unwrap()
  else {
    panic!("expected wage rows");
  };

  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].sex.as_deref(), Some("Mujeres"));
  assert_eq!(rows[0].occupation.as_deref(), Some("Directores y gerentes"));
  assert_eq!(rows[0].sector, None);
  assert_eq!(rows[0].value, Some(52_000.0));
  assert!(store.inserts().contains(&NewDimension::indicator(
    "Salario_Anual_Ocupacion",
    "Euros"
  )));
}

#[tokio::test]
async fn percentile_series_do_not_carry_an_occupation() {
  let store = MemoryStore::default();
  let batch = [series(
    "Hombres. Andalucía. Todas las edades. Mediana",
    &[(2021, None, 21_000.0)],
  )];

  let FactRows::Wages(rows) =
    process_code(&store, SourceCode::EaesPercentiles, &batch).await.unwrap()
  else {
    panic!("expected wage rows");
  };

  assert_eq!(rows[0].occupation, None);
  assert!(store.inserts().contains(&NewDimension::geography("Andalucía")));
}

#[tokio::test]
async fn employment_indicator_depends_on_code() {
  let store = MemoryStore::default();

  process_code(
    &store,
    SourceCode::TasaParo,
    &[series("Tasa de paro. Hombres. Nacional. Total", &[(2024, Some(19), 11.4)])],
  )
  .await
  .unwrap();
  process_code(
    &store,
    SourceCode::Temporalidad,
    &[series("Nacional. X. Mujeres. Temporal. Parcial", &[(2024, Some(19), 17.9)])],
  )
  .await
  .unwrap();

  let inserts = store.inserts();
  assert!(inserts.contains(&NewDimension::indicator("Tasa_Paro", "%")));
  assert!(inserts.contains(&NewDimension::indicator("Temporalidad", "%")));
}

#[tokio::test]
async fn values_pass_through_unvalidated() {
  let store = MemoryStore::default();
  let batch = [RawSeries::new(
    "Nacional. General. Variación",
    vec![
      Observation::new(2024, Some(19), Some(-3.5)),
      Observation::new(2024, Some(20), Some(0.0)),
      Observation::new(2024, Some(21), None),
    ],
  )];

  let FactRows::Prices(rows) =
    process_code(&store, SourceCode::Ipv, &batch).await.unwrap()
  else {
    panic!("expected price rows");
  };

  let values: Vec<_> = rows.iter().map(|r| r.value).collect();
  assert_eq!(values, vec![Some(-3.5), Some(0.0), None]);
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_series_name_aborts_the_batch() {
  let store = MemoryStore::default();
  let batch = [
    series("Nacional. General. Índice", &[(2024, Some(19), 1.0)]),
    series("Nacional. General", &[(2024, Some(19), 1.0)]),
  ];

  let err = process(&store, "IPC", &batch).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Decode(ine_series::Error::MalformedSeriesName { index: 2, segments: 2, .. })
  ));
}

#[tokio::test]
async fn store_failures_propagate() {
  let batch = [series("Nacional. General. Índice", &[(2024, Some(19), 1.0)])];

  let err = process(&DownStore, "IPC", &batch).await.unwrap_err();
  assert!(matches!(err, Error::Store(_)));
  assert!(err.to_string().contains("store unavailable"));
}

// ─── End-to-end against SQLite ───────────────────────────────────────────────

#[tokio::test]
async fn price_series_end_to_end() {
  let store = sqlite().await;
  let batch = [series("Nacional . IPC General . Indice", &[(2024, Some(19), 105.3)])];

  let rows = process(&store, "IPC", &batch).await.unwrap();
  let FactRows::Prices(facts) = &rows else {
    panic!("expected price rows");
  };

  let period = store.period_by_iso("2024-01-01").await.unwrap().unwrap();
  let indicator = store
    .get_or_create(NewDimension::indicator("IPC", "ignored"))
    .await
    .unwrap();
  let geography = store
    .get_or_create(NewDimension::geography("Nacional"))
    .await
    .unwrap();

  assert_eq!(facts.len(), 1);
  assert_eq!(facts[0].period_id, period.period_id);
  assert_eq!(facts[0].indicator_id, indicator);
  assert_eq!(facts[0].geography_id, geography);
  assert_eq!(facts[0].category.as_deref(), Some("IPC General"));
  assert_eq!(facts[0].value, Some(105.3));
  assert_eq!(
    store.indicator_unit("IPC").await.unwrap().as_deref(),
    Some("Índice")
  );

  assert_eq!(store.insert_facts(rows).await.unwrap(), 1);
  assert_eq!(store.fact_count(FactTable::Prices).await.unwrap(), 1);
}

#[tokio::test]
async fn geography_is_shared_across_calls() {
  let store = sqlite().await;

  let prices = process(
    &store,
    "IPC",
    &[series("Nacional. IPC General. Indice", &[(2024, Some(19), 105.3)])],
  )
  .await
  .unwrap();
  let employment = process(
    &store,
    "TEMPORALIDAD",
    &[series("Nacional. X. Hombres. Indefinido. Completa", &[(2024, Some(19), 8.1)])],
  )
  .await
  .unwrap();

  let (FactRows::Prices(p), FactRows::Employment(e)) = (&prices, &employment)
  else {
    panic!("unexpected row shapes");
  };

  assert_eq!(p[0].geography_id, e[0].geography_id);
  assert_eq!(p[0].period_id, e[0].period_id);
  assert_ne!(p[0].indicator_id, e[0].indicator_id);
  assert_eq!(store.count(DimensionKind::Geography).await.unwrap(), 1);
  assert_eq!(store.count(DimensionKind::Period).await.unwrap(), 1);
  assert_eq!(store.count(DimensionKind::Indicator).await.unwrap(), 2);
}

#[tokio::test]
async fn temporary_contract_series_end_to_end() {
  let store = sqlite().await;
  let batch = [series(
    "Temporalidad.X.Hombres.Indefinido.Completa",
    &[(2023, Some(22), 74.2)],
  )];

  let FactRows::Employment(facts) =
    process(&store, "TEMPORALIDAD", &batch).await.unwrap()
  else {
    panic!("expected employment rows");
  };

  let geography = store
    .get_or_create(NewDimension::geography("Temporalidad"))
    .await
    .unwrap();

  assert_eq!(facts[0].geography_id, geography);
  assert_eq!(facts[0].sex.as_deref(), Some("Hombres"));
  assert_eq!(facts[0].contract_type.as_deref(), Some("Indefinido"));
  assert_eq!(facts[0].schedule_type.as_deref(), Some("Completa"));
  assert_eq!(facts[0].age_group, None);
  assert!(store.period_by_iso("2023-10-01").await.unwrap().is_some());
  assert_eq!(store.count(DimensionKind::Geography).await.unwrap(), 1);
}

#[tokio::test]
async fn reprocessing_dedupes_dimensions_but_appends_facts() {
  let store = sqlite().await;
  let json = r#"[{"Nombre": "Nacional. IPC General. Indice",
                  "Data": [{"Anyo": 2024, "FK_Periodo": 19, "Valor": 105.3},
                           {"Anyo": 2024, "FK_Periodo": 20, "Valor": 106.1}]}]"#;
  let batch: Vec<RawSeries> = serde_json::from_str(json).unwrap();

  for _ in 0..2 {
    let rows = process(&store, "IPC", &batch).await.unwrap();
    store.insert_facts(rows).await.unwrap();
  }

  assert_eq!(store.count(DimensionKind::Geography).await.unwrap(), 1);
  assert_eq!(store.count(DimensionKind::Indicator).await.unwrap(), 1);
  assert_eq!(store.count(DimensionKind::Period).await.unwrap(), 2);
  assert_eq!(store.fact_count(FactTable::Prices).await.unwrap(), 4);
}
