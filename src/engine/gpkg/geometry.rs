//! GeoPackage geometry blobs: `GP` header with an XY envelope, then little-endian ISO WKB.

use anyhow::{Result, bail};

use crate::types::{Coord, Footprint};

const MAGIC: &[u8; 2] = b"GP";
const VERSION: u8 = 0;
/// Little-endian byte order, envelope code 1 ([minx, maxx, miny, maxy]), not empty.
const FLAGS_LE_XY_ENVELOPE: u8 = 0b0000_0011;
const WKB_LITTLE_ENDIAN: u8 = 1;
const WKB_POLYGON: u32 = 3;
const HEADER_LEN: usize = 8 + 4 * 8;

/// Encode a footprint as a single-ring polygon blob tagged with `srs_id`.
pub fn encode_polygon(footprint: &Footprint, srs_id: i32) -> Vec<u8> {
    let ring = footprint.ring();
    let (min_x, min_y, max_x, max_y) = footprint.envelope();
    let mut out = Vec::with_capacity(HEADER_LEN + 13 + ring.len() * 16);

    out.extend_from_slice(MAGIC);
    out.push(VERSION);
    out.push(FLAGS_LE_XY_ENVELOPE);
    out.extend_from_slice(&srs_id.to_le_bytes());
    for v in [min_x, max_x, min_y, max_y] {
        out.extend_from_slice(&v.to_le_bytes());
    }

    out.push(WKB_LITTLE_ENDIAN);
    out.extend_from_slice(&WKB_POLYGON.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&(ring.len() as u32).to_le_bytes());
    for c in ring {
        out.extend_from_slice(&c.x.to_le_bytes());
        out.extend_from_slice(&c.y.to_le_bytes());
    }
    out
}

/// Cursor over a blob; every read is bounds-checked.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let Some(bytes) = self.buf.get(self.pos..self.pos + n) else {
            bail!("geometry blob truncated at byte {}", self.pos);
        };
        self.pos += n;
        Ok(bytes)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self, little_endian: bool) -> Result<u32> {
        let b: [u8; 4] = self.take(4)?.try_into()?;
        Ok(if little_endian {
            u32::from_le_bytes(b)
        } else {
            u32::from_be_bytes(b)
        })
    }

    fn f64(&mut self, little_endian: bool) -> Result<f64> {
        let b: [u8; 8] = self.take(8)?.try_into()?;
        Ok(if little_endian {
            f64::from_le_bytes(b)
        } else {
            f64::from_be_bytes(b)
        })
    }
}

/// Envelope length in bytes for a GeoPackage envelope indicator.
fn envelope_len(indicator: u8) -> Result<usize> {
    Ok(match indicator {
        0 => 0,
        1 => 32,
        2 | 3 => 48,
        4 => 64,
        other => bail!("invalid envelope indicator {other}"),
    })
}

/// Decode a polygon blob back into `(srs_id, footprint)`. Only single-ring XY polygons are
/// accepted, which is all this crate writes.
pub fn decode_polygon(blob: &[u8]) -> Result<(i32, Footprint)> {
    let mut cur = Cursor { buf: blob, pos: 0 };
    if cur.take(2)? != MAGIC {
        bail!("missing GP magic");
    }
    let version = cur.u8()?;
    if version != VERSION {
        bail!("unsupported geopackage blob version {version}");
    }
    let flags = cur.u8()?;
    let header_le = flags & 1 == 1;
    let srs_bytes: [u8; 4] = cur.take(4)?.try_into()?;
    let srs_id = if header_le {
        i32::from_le_bytes(srs_bytes)
    } else {
        i32::from_be_bytes(srs_bytes)
    };
    cur.take(envelope_len((flags >> 1) & 0b111)?)?;

    let wkb_le = cur.u8()? == WKB_LITTLE_ENDIAN;
    let geom_type = cur.u32(wkb_le)?;
    if geom_type != WKB_POLYGON {
        bail!("expected WKB polygon, found type {geom_type}");
    }
    let rings = cur.u32(wkb_le)?;
    if rings != 1 {
        bail!("expected one ring, found {rings}");
    }
    let points = cur.u32(wkb_le)? as usize;
    let mut ring = Vec::with_capacity(points.min(16));
    for _ in 0..points {
        let x = cur.f64(wkb_le)?;
        let y = cur.f64(wkb_le)?;
        ring.push(Coord::new(x, y));
    }
    match Footprint::from_ring(&ring) {
        Some(footprint) => Ok((srs_id, footprint)),
        None => bail!("ring has {} points, expected a closed quadrilateral", ring.len()),
    }
}
