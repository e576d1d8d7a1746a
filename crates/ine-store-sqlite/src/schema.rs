//! SQL schema for the INE star schema.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Dimension tables. Rows are created on first reference and never updated;
-- the UNIQUE lookup column is the natural key.
CREATE TABLE IF NOT EXISTS tbl_geografia (
    id_geografia INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre       TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS tbl_indicador (
    id_indicador INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre       TEXT NOT NULL UNIQUE,
    unidad       TEXT              -- fixed by the first insert
);

CREATE TABLE IF NOT EXISTS tbl_periodo (
    id_periodo INTEGER PRIMARY KEY AUTOINCREMENT,
    anio       INTEGER NOT NULL,
    mes        INTEGER NOT NULL CHECK (mes BETWEEN 1 AND 12),
    trimestre  INTEGER,            -- raw period code, NULL for annual data
    fecha_iso  TEXT    NOT NULL UNIQUE   -- YYYY-MM-01
);

-- Fact tables are strictly append-only.
-- No UPDATE or DELETE is ever issued against them.
CREATE TABLE IF NOT EXISTS T_precios (
    id_periodo      INTEGER NOT NULL REFERENCES tbl_periodo(id_periodo),
    id_indicador    INTEGER NOT NULL REFERENCES tbl_indicador(id_indicador),
    id_geografia    INTEGER NOT NULL REFERENCES tbl_geografia(id_geografia),
    categoria_gasto TEXT,
    valor           REAL
);

CREATE TABLE IF NOT EXISTS T_salarios (
    id_periodo   INTEGER NOT NULL REFERENCES tbl_periodo(id_periodo),
    id_indicador INTEGER NOT NULL REFERENCES tbl_indicador(id_indicador),
    id_geografia INTEGER NOT NULL REFERENCES tbl_geografia(id_geografia),
    sexo         TEXT,
    sector_cnae  TEXT,
    ocupacion    TEXT,
    valor        REAL
);

CREATE TABLE IF NOT EXISTS T_empleo (
    id_periodo    INTEGER NOT NULL REFERENCES tbl_periodo(id_periodo),
    id_indicador  INTEGER NOT NULL REFERENCES tbl_indicador(id_indicador),
    id_geografia  INTEGER NOT NULL REFERENCES tbl_geografia(id_geografia),
    sexo          TEXT,
    grupo_edad    TEXT,
    tipo_jornada  TEXT,
    tipo_contrato TEXT,
    valor         REAL
);

CREATE INDEX IF NOT EXISTS precios_periodo_idx  ON T_precios(id_periodo);
CREATE INDEX IF NOT EXISTS salarios_periodo_idx ON T_salarios(id_periodo);
CREATE INDEX IF NOT EXISTS empleo_periodo_idx   ON T_empleo(id_periodo);

PRAGMA user_version = 1;
";
