use ord_subset::OrdSubsetIterExt;

use crate::error::Error;
use crate::extract::Coordinates;

/// Rectangle in longitude/latitude space, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub long_min: f64,
    pub long_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    pub fn new(long_min: f64, long_max: f64, lat_min: f64, lat_max: f64) -> BoundingBox {
        BoundingBox { long_min, long_max, lat_min, lat_max }
    }

    /// Raw extent of the coordinates, without any margin
    pub fn from_coordinates(coordinates: &Coordinates) -> Result<BoundingBox, Error> {
        BoundingBox::from_extent(&coordinates.longitudes, &coordinates.latitudes)
    }

    pub fn from_extent(longitudes: &[f64], latitudes: &[f64]) -> Result<BoundingBox, Error> {
        let long_min = longitudes.iter().cloned().ord_subset_min().ok_or(Error::EmptyRoute)?;
        let long_max = longitudes.iter().cloned().ord_subset_max().ok_or(Error::EmptyRoute)?;
        let lat_min = latitudes.iter().cloned().ord_subset_min().ok_or(Error::EmptyRoute)?;
        let lat_max = latitudes.iter().cloned().ord_subset_max().ok_or(Error::EmptyRoute)?;

        Ok(BoundingBox { long_min, long_max, lat_min, lat_max })
    }

    pub fn width(&self) -> f64 {
        self.long_max - self.long_min
    }

    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// `(longitude, latitude)` of the box center
    pub fn center(&self) -> (f64, f64) {
        (self.long_min + self.width() / 2., self.lat_min + self.height() / 2.)
    }

    /// Pads the longitude range by `margin` times its width on both sides.
    ///
    /// `lat_max` is lowered and raised again by the same amount and `lat_min`
    /// is left alone, so the latitude range keeps its raw extent. Plots made
    /// with earlier releases depend on this, see `apply_symmetric_margin`.
    pub fn apply_margin(self, margin: f64) -> BoundingBox {
        let mut result = self;

        let long_range = self.long_max - self.long_min;
        result.long_min -= long_range * margin;
        result.long_max += long_range * margin;

        let lat_range = self.lat_max - self.lat_min;
        result.lat_max -= lat_range * margin;
        result.lat_max += lat_range * margin;

        result
    }

    /// Pads both axes by `margin` times their extent on every side
    pub fn apply_symmetric_margin(self, margin: f64) -> BoundingBox {
        let long_pad = self.width() * margin;
        let lat_pad = self.height() * margin;

        BoundingBox {
            long_min: self.long_min - long_pad,
            long_max: self.long_max + long_pad,
            lat_min: self.lat_min - lat_pad,
            lat_max: self.lat_max + lat_pad,
        }
    }
}
