use log::trace;

use crate::bbox::BoundingBox;
use crate::error::Error;
use crate::haversine::haversine_distance_with_radius;

/// Relative tolerance below which two aspect ratios are considered equal
const ASPECT_EPSILON: f64 = 1e-12;

/// Pixel size of the destination raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> ImageSize {
        ImageSize { width, height }
    }

    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::new(600, 700)
    }
}

/// Ground distances along the bottom and left edge of `bbox`, as `(width, height)`
pub fn ground_size(bbox: &BoundingBox, earth_radius: f64) -> (f64, f64) {
    let bottom_left = (bbox.long_min, bbox.lat_min);
    let bottom_right = (bbox.long_max, bbox.lat_min);
    let top_left = (bbox.long_min, bbox.lat_max);

    let width = haversine_distance_with_radius(&bottom_left, &bottom_right, earth_radius);
    let height = haversine_distance_with_radius(&bottom_left, &top_left, earth_radius);

    (width, height)
}

/// Ratio of ground width to ground height.
///
/// Fails with `Error::DegenerateRoute` when either side has no extent.
pub fn ground_aspect(bbox: &BoundingBox, earth_radius: f64) -> Result<f64, Error> {
    let (ground_width, ground_height) = ground_size(bbox, earth_radius);

    let aspect = ground_width / ground_height;
    if ground_width == 0. || ground_height == 0. || !aspect.is_finite() {
        return Err(Error::DegenerateRoute { ground_width, ground_height });
    }

    Ok(aspect)
}

/// Grows exactly one axis of `bbox` around its center, so that its ground
/// aspect ratio matches the aspect ratio of `image`.
///
/// The other axis is returned untouched. The correction is a single step:
/// the ground width is measured along `lat_min`, so growing the latitude
/// range moves that edge and leaves a residual of roughly `tan(lat) * Δlat`
/// (about 4e-4 relative at 52°N for a few km). Growing the longitude range
/// leaves well below 1e-5. Recompute with `ground_aspect` if a tighter match
/// is needed.
pub fn correct_aspect(bbox: &BoundingBox, image: ImageSize, earth_radius: f64) -> Result<BoundingBox, Error> {
    if image.width == 0 || image.height == 0 {
        return Err(Error::InvalidImageSize { width: image.width, height: image.height });
    }
    if !earth_radius.is_finite() || earth_radius <= 0. {
        return Err(Error::InvalidEarthRadius(earth_radius));
    }

    let map_aspect = image.aspect();
    let ground_aspect = ground_aspect(bbox, earth_radius)?;
    trace!("ground aspect {:.6}, map aspect {:.6}", ground_aspect, map_aspect);

    let geo_width = bbox.width();
    let geo_height = bbox.height();

    let mut result = *bbox;
    if (ground_aspect - map_aspect).abs() <= ASPECT_EPSILON * map_aspect {
        return Ok(result);
    }

    if ground_aspect > map_aspect {
        let lat_height = geo_height * (ground_aspect / map_aspect);
        let lat_middle = bbox.lat_min + geo_height / 2.;

        result.lat_min = lat_middle - lat_height / 2.;
        result.lat_max = lat_middle + lat_height / 2.;
    } else {
        let long_width = geo_width * (map_aspect / ground_aspect);
        let long_middle = bbox.long_min + geo_width / 2.;

        result.long_min = long_middle - long_width / 2.;
        result.long_max = long_middle + long_width / 2.;
    }

    Ok(result)
}
