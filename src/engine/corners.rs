//! Corner extraction: pixel size + affine geotransform → four geographic corners.

use crate::error::ProcessingError;
use crate::{Coord, GeoTransform, RasterInfo};

/// Corners of a `width` × `height` raster under `gt`, in the order
/// `(minx, miny)`, `(minx, maxy)`, `(maxx, maxy)`, `(maxx, miny)`.
///
/// `minx`/`maxy` are the origin; `maxx`/`miny` walk the full width and height through the
/// transform, rotation terms included. Nothing is reordered, so a south-up or rotated raster
/// yields "min" values larger than "max" ones.
pub fn corners(width: u32, height: u32, gt: &GeoTransform) -> [Coord; 4] {
    let (w, h) = (f64::from(width), f64::from(height));
    let minx = gt.origin_x();
    let maxx = gt.origin_x() + w * gt.pixel_width() + h * gt.row_rotation();
    let maxy = gt.origin_y();
    let miny = gt.origin_y() + w * gt.column_rotation() + h * gt.pixel_height();
    [
        Coord::new(minx, miny),
        Coord::new(minx, maxy),
        Coord::new(maxx, maxy),
        Coord::new(maxx, miny),
    ]
}

/// [`corners`] for an opened raster; fails when it exposes no affine transform.
pub fn corners_of(info: &RasterInfo) -> Result<[Coord; 4], ProcessingError> {
    let gt = info
        .geotransform
        .as_ref()
        .ok_or(ProcessingError::NoGeoTransform)?;
    Ok(corners(info.width, info.height, gt))
}

/// Coarse georeferencing check: a raster whose min-x corner sits at x = 0 and max-y corner at
/// y = 0 is treated as having no real transform. A genuinely zero-origin raster is misclassified.
pub fn is_georeferenced(corners: &[Coord; 4]) -> bool {
    !(corners[0].x == 0.0 && corners[2].y == 0.0)
}
