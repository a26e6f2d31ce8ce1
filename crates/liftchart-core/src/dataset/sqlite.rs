//! SQLite output for a [`Dataset`].
//!
//! Every write starts from a fresh schema: the three tables are dropped and
//! recreated, then all rows are inserted in one transaction with the ids the
//! dataset already assigned.

use super::Dataset;
use crate::error::LiftchartError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Default database file written by `build`.
pub const DEFAULT_DB_FILE: &str = "cranes.db";

const SCHEMA: &str = r#"
DROP TABLE IF EXISTS load_chart_points;
DROP TABLE IF EXISTS crane_configurations;
DROP TABLE IF EXISTS crane_manuals;

CREATE TABLE crane_manuals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL,
    manufacturer TEXT,
    model TEXT,
    estimated_page_count INTEGER NOT NULL,
    file_size_bytes INTEGER NOT NULL,
    sha256 TEXT NOT NULL,
    extracted_text_sample TEXT NOT NULL
);

CREATE TABLE crane_configurations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    manual_id INTEGER NOT NULL,
    config_code TEXT NOT NULL,
    description TEXT NOT NULL,
    FOREIGN KEY(manual_id) REFERENCES crane_manuals(id)
);

CREATE TABLE load_chart_points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    manual_id INTEGER NOT NULL,
    config_code TEXT NOT NULL,
    boom_length_m REAL,
    radius_m REAL,
    capacity_t REAL NOT NULL,
    raw_snippet TEXT NOT NULL,
    FOREIGN KEY(manual_id) REFERENCES crane_manuals(id)
);

CREATE INDEX idx_cfg_manual ON crane_configurations(manual_id);
CREATE INDEX idx_points_manual ON load_chart_points(manual_id);
CREATE INDEX idx_points_cfg ON load_chart_points(config_code)
"#;

/// Open (creating if needed) the database at `path`.
pub async fn open(path: &Path) -> Result<SqlitePool, LiftchartError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?)
}

/// Drop and recreate the dataset tables and indexes.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
        sqlx::query(statement.trim()).execute(pool).await?;
    }
    Ok(())
}

/// Replace the contents of `pool` with `dataset`.
pub async fn write_dataset(pool: &SqlitePool, dataset: &Dataset) -> Result<(), sqlx::Error> {
    reset_schema(pool).await?;

    let mut tx = pool.begin().await?;

    for manual in &dataset.manuals {
        sqlx::query(
            "INSERT INTO crane_manuals (id, file_name, manufacturer, model, estimated_page_count, \
             file_size_bytes, sha256, extracted_text_sample) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(manual.id as i64)
        .bind(&manual.file_name)
        .bind(manual.manufacturer.as_deref())
        .bind(&manual.model)
        .bind(manual.estimated_page_count as i64)
        .bind(manual.file_size_bytes as i64)
        .bind(&manual.sha256)
        .bind(&manual.extracted_text_sample)
        .execute(&mut *tx)
        .await?;
    }

    for config in &dataset.configurations {
        sqlx::query(
            "INSERT INTO crane_configurations (id, manual_id, config_code, description) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(config.id as i64)
        .bind(config.manual_id as i64)
        .bind(&config.config_code)
        .bind(&config.description)
        .execute(&mut *tx)
        .await?;
    }

    for point in &dataset.load_points {
        sqlx::query(
            "INSERT INTO load_chart_points (id, manual_id, config_code, boom_length_m, radius_m, \
             capacity_t, raw_snippet) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(point.id as i64)
        .bind(point.manual_id as i64)
        .bind(&point.config_code)
        .bind(point.boom_length_m.and_then(|v| v.to_f64()))
        .bind(point.radius_m.and_then(|v| v.to_f64()))
        .bind(real(point.capacity_t))
        .bind(&point.raw_snippet)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    log::debug!(
        "wrote {} manual(s), {} configuration(s), {} load point(s) to SQLite",
        dataset.manuals.len(),
        dataset.configurations.len(),
        dataset.load_points.len()
    );

    Ok(())
}

/// Open `path`, write `dataset` into it and close the pool.
pub async fn write_file(path: &Path, dataset: &Dataset) -> Result<(), LiftchartError> {
    let pool = open(path).await?;
    write_dataset(&pool, dataset).await?;
    pool.close().await;
    Ok(())
}

fn real(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
