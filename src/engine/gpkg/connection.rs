//! Open a GeoPackage and register spatial reference systems.

use anyhow::{Context, Result};
use log::{debug, warn};
use rusqlite::{Connection, params};
use std::path::Path;

use super::{GPKG_APPLICATION_ID, GPKG_USER_VERSION, SCHEMA, SEED_SRS, UNDEFINED_GEOGRAPHIC_SRS};
use crate::engine::crs::{epsg_number, proj_string_for, wkt_for, wkt_name};

/// Stamp the GeoPackage header pragmas and create the metadata tables (idempotent).
fn apply_gpkg_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "application_id", GPKG_APPLICATION_ID)
        .context("set application_id")?;
    conn.pragma_update(None, "user_version", GPKG_USER_VERSION)
        .context("set user_version")?;
    conn.execute_batch(SCHEMA).context("create gpkg schema")?;
    conn.execute_batch(SEED_SRS).context("seed gpkg_spatial_ref_sys")?;
    Ok(())
}

/// Open or create a GeoPackage file with the core tables in place.
pub fn open_gpkg(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("open geopackage at {}", path.display()))?;
    apply_gpkg_schema(&conn)?;
    Ok(conn)
}

/// In-memory GeoPackage with the same schema (tests and scratch work).
pub fn open_gpkg_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("open in-memory geopackage")?;
    apply_gpkg_schema(&conn)?;
    Ok(conn)
}

/// Make sure `crs_target` has a row in `gpkg_spatial_ref_sys` and return its srs_id.
///
/// Only EPSG references resolve. Anything else (or a code `crs-definitions` does not know)
/// falls back to srs_id 0, the undefined geographic SRS.
pub fn ensure_srs(conn: &Connection, crs_target: &str) -> Result<i32> {
    let Some(code) = epsg_number(crs_target) else {
        warn!("Target CRS {crs_target:?} is not an EPSG reference; declaring undefined SRS");
        return Ok(UNDEFINED_GEOGRAPHIC_SRS);
    };
    let Ok(srs_id) = i32::try_from(code) else {
        warn!("EPSG code {code} out of range; declaring undefined SRS");
        return Ok(UNDEFINED_GEOGRAPHIC_SRS);
    };
    if srs_id == 4326 {
        return Ok(srs_id);
    }
    let (Some(wkt), Some(proj)) = (wkt_for(code), proj_string_for(code)) else {
        warn!("Unknown EPSG code {code}; declaring undefined SRS");
        return Ok(UNDEFINED_GEOGRAPHIC_SRS);
    };
    let name = wkt_name(wkt).map_or_else(|| format!("EPSG:{code}"), str::to_string);
    conn.execute(
        "INSERT OR IGNORE INTO gpkg_spatial_ref_sys
            (srs_name, srs_id, organization, organization_coordsys_id, definition, description)
         VALUES (?1, ?2, 'EPSG', ?2, ?3, ?4)",
        params![name, srs_id, wkt, proj],
    )
    .context("register target srs")?;
    debug!("Registered srs_id {srs_id} ({name})");
    Ok(srs_id)
}
