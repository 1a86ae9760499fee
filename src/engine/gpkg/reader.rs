//! Read a catalogue artifact back into records.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

use super::geometry::decode_polygon;
use super::{GEOMETRY_COLUMN, GPKG_APPLICATION_ID};
use crate::RasterRecord;

/// Everything one artifact holds.
#[derive(Clone, Debug)]
pub struct Catalogue {
    pub table: String,
    /// srs_id declared for the geometry column.
    pub srs_id: i32,
    /// Rows in `fid` order.
    pub records: Vec<RasterRecord>,
}

/// Records stored in the artifact at `path`, in insertion order.
pub fn read_catalogue(path: &Path) -> Result<Vec<RasterRecord>> {
    Ok(read_catalogue_full(path)?.records)
}

pub fn read_catalogue_full(path: &Path) -> Result<Catalogue> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("open catalogue at {}", path.display()))?;
    let app: i32 = conn
        .query_row("PRAGMA application_id", [], |r| r.get(0))
        .context("read application_id")?;
    if app != GPKG_APPLICATION_ID {
        return Err(anyhow!("{} is not a GeoPackage", path.display()));
    }

    let (table, srs_id): (String, i32) = conn
        .query_row(
            "SELECT c.table_name, g.srs_id FROM gpkg_contents c
             JOIN gpkg_geometry_columns g ON g.table_name = c.table_name
             WHERE c.data_type = 'features' ORDER BY c.table_name LIMIT 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .context("find feature table")?;

    let mut stmt = conn
        .prepare(&format!(
            r#"SELECT {GEOMETRY_COLUMN}, filepath, filename, crs, minx, miny, maxx, maxy
               FROM "{table}" ORDER BY fid"#
        ))
        .context("prepare select")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, Vec<u8>>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            [
                r.get::<_, f64>(4)?,
                r.get::<_, f64>(5)?,
                r.get::<_, f64>(6)?,
                r.get::<_, f64>(7)?,
            ],
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (blob, filepath, filename, crs, [minx, miny, maxx, maxy]) = row?;
        let (_, geometry) = decode_polygon(&blob)
            .with_context(|| format!("decode geometry of {filepath}"))?;
        records.push(RasterRecord {
            filepath: PathBuf::from(filepath),
            filename,
            crs: crs.unwrap_or_default(),
            minx,
            miny,
            maxx,
            maxy,
            geometry,
        });
    }
    Ok(Catalogue {
        table,
        srs_id,
        records,
    })
}
