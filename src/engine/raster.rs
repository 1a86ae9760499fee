//! Raster reading: dimensions and affine geotransform of GeoTIFF and PNG files.
//!
//! The default [`FileRasterReader`] reads GeoTIFF model tags with `tiff`, PNG dimensions with
//! `image`, and falls back to an ESRI world file beside the raster when the image itself carries
//! no transform.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::debug;
use tiff::decoder::Decoder;
use tiff::tags::Tag;

use crate::engine::tools::{dotted_extension, world_file_candidates};
use crate::error::RasterError;
use crate::{GeoTransform, RasterInfo};

/// Opens a raster and reports its size and transform. Implementations must be shareable across
/// worker threads.
pub trait RasterReader: Send + Sync {
    fn open(&self, path: &Path) -> Result<RasterInfo, RasterError>;
}

/// Pure-Rust reader for `.tif`/`.tiff` and `.png`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileRasterReader;

impl RasterReader for FileRasterReader {
    fn open(&self, path: &Path) -> Result<RasterInfo, RasterError> {
        match dotted_extension(path).as_deref() {
            Some(".tif") | Some(".tiff") => open_tiff(path),
            Some(".png") => open_png(path),
            other => Err(RasterError::Unsupported {
                reason: format!("no raster driver for extension {:?}", other.unwrap_or("")),
            }),
        }
    }
}

fn unsupported(err: impl std::fmt::Display) -> RasterError {
    RasterError::Unsupported {
        reason: err.to_string(),
    }
}

fn open_tiff(path: &Path) -> Result<RasterInfo, RasterError> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file)).map_err(unsupported)?;
    let (width, height) = decoder.dimensions().map_err(unsupported)?;
    let geotransform = match geotransform_from_tags(&mut decoder)? {
        Some(gt) => Some(gt),
        None => read_world_file(path)?,
    };
    Ok(RasterInfo {
        width,
        height,
        geotransform,
    })
}

fn open_png(path: &Path) -> Result<RasterInfo, RasterError> {
    let (width, height) = image::image_dimensions(path).map_err(unsupported)?;
    Ok(RasterInfo {
        width,
        height,
        geotransform: read_world_file(path)?,
    })
}

fn optional_f64_vec<R: Read + Seek>(
    decoder: &mut Decoder<R>,
    tag: Tag,
) -> Result<Option<Vec<f64>>, RasterError> {
    match decoder.find_tag(tag).map_err(unsupported)? {
        Some(value) => value.into_f64_vec().map(Some).map_err(unsupported),
        None => Ok(None),
    }
}

/// `GTRasterTypeGeoKey` and its `RasterPixelIsPoint` value.
const GT_RASTER_TYPE_GEO_KEY: u16 = 1025;
const RASTER_PIXEL_IS_POINT: u16 = 2;

/// GeoTIFF model tags → geotransform. `ModelTransformationTag` (4×4 row-major) wins; otherwise
/// the first tiepoint plus `ModelPixelScaleTag`. Pixel-is-point rasters tie model coordinates to
/// pixel centres and are moved to the corner convention.
fn geotransform_from_tags<R: Read + Seek>(
    decoder: &mut Decoder<R>,
) -> Result<Option<GeoTransform>, RasterError> {
    let Some(gt) = model_transform(decoder)? else {
        return Ok(None);
    };
    if pixel_is_point(decoder)? {
        debug!("PixelIsPoint raster; shifting origin by half a pixel");
        return Ok(Some(gt.centre_to_corner()));
    }
    Ok(Some(gt))
}

fn model_transform<R: Read + Seek>(
    decoder: &mut Decoder<R>,
) -> Result<Option<GeoTransform>, RasterError> {
    if let Some(m) = optional_f64_vec(decoder, Tag::ModelTransformationTag)?
        && m.len() >= 16
    {
        return Ok(Some(GeoTransform([m[3], m[0], m[1], m[7], m[4], m[5]])));
    }
    let tiepoint = optional_f64_vec(decoder, Tag::ModelTiepointTag)?;
    let scale = optional_f64_vec(decoder, Tag::ModelPixelScaleTag)?;
    match (tiepoint, scale) {
        (Some(t), Some(s)) if t.len() >= 6 && s.len() >= 2 => {
            let (sx, sy) = (s[0], s[1]);
            // Tiepoint (I, J, K, X, Y, Z) ties raster (I, J) to model (X, Y).
            Ok(Some(GeoTransform([
                t[3] - t[0] * sx,
                sx,
                0.0,
                t[4] + t[1] * sy,
                0.0,
                -sy,
            ])))
        }
        _ => Ok(None),
    }
}

/// Scan the GeoKey directory (4-short header, then 4-short entries) for an inline
/// `GTRasterTypeGeoKey = RasterPixelIsPoint`.
fn pixel_is_point<R: Read + Seek>(decoder: &mut Decoder<R>) -> Result<bool, RasterError> {
    let Some(value) = decoder
        .find_tag(Tag::GeoKeyDirectoryTag)
        .map_err(unsupported)?
    else {
        return Ok(false);
    };
    let keys = value.into_u16_vec().map_err(unsupported)?;
    let count = keys.get(3).copied().map_or(0, usize::from);
    Ok(keys
        .get(4..)
        .unwrap_or_default()
        .chunks_exact(4)
        .take(count)
        .any(|k| k[0] == GT_RASTER_TYPE_GEO_KEY && k[1] == 0 && k[3] == RASTER_PIXEL_IS_POINT))
}

/// First existing world file beside `path`, converted to a corner-based geotransform.
pub fn read_world_file(path: &Path) -> Result<Option<GeoTransform>, RasterError> {
    for candidate in world_file_candidates(path) {
        if candidate.is_file() {
            debug!("World file for {}: {}", path.display(), candidate.display());
            let text = std::fs::read_to_string(&candidate)?;
            return parse_world_file(&text)
                .map(Some)
                .map_err(|reason| RasterError::WorldFile {
                    path: candidate,
                    reason,
                });
        }
    }
    Ok(None)
}

/// Parse the six lines of a world file (A, D, B, E, C, F). C/F address the centre of the
/// top-left pixel, so the origin is moved back half a pixel in both directions.
pub fn parse_world_file(text: &str) -> Result<GeoTransform, String> {
    let values: Vec<f64> = text
        .split_whitespace()
        .take(6)
        .map(|v| v.parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<_, _>>()?;
    let &[a, d, b, e, c, f] = values.as_slice() else {
        return Err(format!("expected 6 values, found {}", values.len()));
    };
    Ok(GeoTransform([c, a, b, f, d, e]).centre_to_corner())
}
