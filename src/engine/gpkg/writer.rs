//! Write one batch of records as a GeoPackage feature table.

use anyhow::{Context, Result};
use log::debug;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

use super::connection::{ensure_srs, open_gpkg};
use super::geometry::encode_polygon;
use super::{GEOMETRY_COLUMN, RTREE_EXTENSION};
use crate::RasterRecord;
use crate::engine::catalogue_writer::CatalogueWriter;
use crate::utils::{discard_stale_temp, rename_temp_to_final, temp_path_for};

/// [`CatalogueWriter`] producing GeoPackage 1.3 files.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoPackageWriter;

impl CatalogueWriter for GeoPackageWriter {
    fn write(
        &self,
        records: &[RasterRecord],
        crs_target: &str,
        destination: &Path,
    ) -> Result<PathBuf> {
        write_geopackage(records, crs_target, destination)
    }
}

/// Feature table name for an artifact: its file stem with anything outside `[A-Za-z0-9_]`
/// replaced by `_`.
pub fn feature_table_name(destination: &Path) -> String {
    let stem = destination
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    match name.chars().next() {
        None => "catalogue".to_string(),
        Some(c) if c.is_ascii_digit() => format!("t_{name}"),
        Some(_) => name,
    }
}

/// Spatial index table backing `table`'s geometry column.
pub fn rtree_table_name(table: &str) -> String {
    format!("rtree_{table}_{GEOMETRY_COLUMN}")
}

/// Union of the record footprints, `None` for no records.
fn extent(records: &[RasterRecord]) -> Option<(f64, f64, f64, f64)> {
    records.iter().map(|r| r.geometry.envelope()).reduce(|a, b| {
        (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
    })
}

fn create_feature_table(conn: &Connection, table: &str) -> Result<()> {
    conn.execute_batch(&format!(
        r#"CREATE TABLE "{table}" (
            fid INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            {GEOMETRY_COLUMN} POLYGON,
            filepath TEXT NOT NULL,
            filename TEXT NOT NULL,
            crs TEXT,
            minx DOUBLE,
            miny DOUBLE,
            maxx DOUBLE,
            maxy DOUBLE
        );"#
    ))
    .with_context(|| format!("create feature table {table}"))?;
    conn.execute_batch(&format!(
        r#"CREATE VIRTUAL TABLE "{}" USING rtree(id, minx, maxx, miny, maxy);"#,
        rtree_table_name(table)
    ))
    .with_context(|| format!("create spatial index for {table}"))
}

fn populate(
    conn: &mut Connection,
    records: &[RasterRecord],
    crs_target: &str,
    table: &str,
) -> Result<()> {
    let srs_id = ensure_srs(conn, crs_target)?;
    create_feature_table(conn, table)?;

    let tx = conn.transaction().context("begin transaction")?;
    {
        let mut stmt = tx
            .prepare(&format!(
                r#"INSERT INTO "{table}" ({GEOMETRY_COLUMN}, filepath, filename, crs, minx, miny, maxx, maxy)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#
            ))
            .context("prepare insert")?;
        let mut index = tx
            .prepare(&format!(
                r#"INSERT INTO "{}" (id, minx, maxx, miny, maxy) VALUES (?1, ?2, ?3, ?4, ?5)"#,
                rtree_table_name(table)
            ))
            .context("prepare spatial index insert")?;
        for r in records {
            let fid = stmt
                .insert(params![
                    encode_polygon(&r.geometry, srs_id),
                    r.filepath.to_string_lossy().into_owned(),
                    r.filename,
                    r.crs,
                    r.minx,
                    r.miny,
                    r.maxx,
                    r.maxy,
                ])
                .context("insert record")?;
            // Record bounds can be inverted for unusual transforms; the index needs min <= max.
            let (min_x, min_y, max_x, max_y) = r.geometry.envelope();
            index
                .execute(params![fid, min_x, max_x, min_y, max_y])
                .context("index record")?;
        }
    }

    let (min_x, min_y, max_x, max_y) = extent(records).unwrap_or_default();
    tx.execute(
        "INSERT INTO gpkg_contents
            (table_name, data_type, identifier, description, min_x, min_y, max_x, max_y, srs_id)
         VALUES (?1, 'features', ?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            table,
            format!("Raster footprints declared in {crs_target}"),
            min_x,
            min_y,
            max_x,
            max_y,
            srs_id
        ],
    )
    .context("register gpkg_contents")?;
    tx.execute(
        "INSERT INTO gpkg_geometry_columns
            (table_name, column_name, geometry_type_name, srs_id, z, m)
         VALUES (?1, ?2, 'POLYGON', ?3, 0, 0)",
        params![table, GEOMETRY_COLUMN, srs_id],
    )
    .context("register gpkg_geometry_columns")?;
    tx.execute(
        "INSERT INTO gpkg_extensions (table_name, column_name, extension_name, definition, scope)
         VALUES (?1, ?2, ?3, 'http://www.geopackage.org/spec120/#extension_rtree', 'write-only')",
        params![table, GEOMETRY_COLUMN, RTREE_EXTENSION],
    )
    .context("register spatial index extension")?;
    tx.commit().context("commit transaction")?;
    Ok(())
}

/// Write `records` to `destination` as a GeoPackage declaring `crs_target`.
///
/// Built at `{destination}.tmp` and renamed into place, so a half-written artifact never has the
/// final name. An existing file at `destination` is replaced.
pub fn write_geopackage(
    records: &[RasterRecord],
    crs_target: &str,
    destination: &Path,
) -> Result<PathBuf> {
    let temp = temp_path_for(destination);
    discard_stale_temp(&temp)?;
    let table = feature_table_name(destination);

    let built = open_gpkg(&temp).and_then(|mut conn| {
        populate(&mut conn, records, crs_target, &table)?;
        conn.close().map_err(|(_, e)| e).context("close geopackage")
    });
    if let Err(e) = built {
        let _ = discard_stale_temp(&temp);
        return Err(e);
    }

    rename_temp_to_final(&temp, destination)?;
    debug!("Wrote {} records to {}", records.len(), destination.display());
    Ok(destination.to_path_buf())
}
