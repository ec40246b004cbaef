use crate::aspect::ImageSize;
use crate::bbox::BoundingBox;
use crate::error::Error;
use crate::haversine::EARTH_RADIUS_KM;

/// How the margin is applied to the latitude range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginMode {
    /// Pads only the longitude range and keeps the raw latitude extent,
    /// matching plots rendered by earlier releases.
    Original,
    /// Pads both ranges on every side.
    Symmetric,
}

impl Default for MarginMode {
    fn default() -> Self {
        MarginMode::Original
    }
}

/// Parameters of a single pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Padding around the route, as a fraction of its extent
    pub margin: f64,
    pub margin_mode: MarginMode,
    /// Pixel size of the background image
    pub image: ImageSize,
    /// Earth radius for ground distances, in kilometers
    pub earth_radius: f64,
    /// Mapbox style id, e.g. `mapbox/light-v11`
    pub style: String,
    /// Requests the background image at twice the pixel density
    pub retina: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            margin: 0.1,
            margin_mode: MarginMode::default(),
            image: ImageSize::default(),
            earth_radius: EARTH_RADIUS_KM,
            style: "mapbox/light-v11".to_string(),
            retina: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if !self.margin.is_finite() || self.margin < 0. {
            return Err(Error::InvalidMargin(self.margin));
        }

        if self.image.width == 0 || self.image.height == 0 {
            return Err(Error::InvalidImageSize { width: self.image.width, height: self.image.height });
        }

        if !self.earth_radius.is_finite() || self.earth_radius <= 0. {
            return Err(Error::InvalidEarthRadius(self.earth_radius));
        }

        Ok(())
    }

    pub fn apply_margin(&self, bbox: BoundingBox) -> BoundingBox {
        match self.margin_mode {
            MarginMode::Original => bbox.apply_margin(self.margin),
            MarginMode::Symmetric => bbox.apply_symmetric_margin(self.margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.margin, 0.1);
        assert_eq!(config.image, ImageSize::new(600, 700));
        assert_eq!(config.earth_radius, 6367.);
        assert_eq!(config.margin_mode, MarginMode::Original);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_margin() {
        let config = Config { margin: -0.1, ..Config::default() };
        assert_eq!(config.validate(), Err(Error::InvalidMargin(-0.1)));
    }

    #[test]
    fn rejects_empty_image() {
        let config = Config { image: ImageSize::new(0, 700), ..Config::default() };
        assert_eq!(config.validate(), Err(Error::InvalidImageSize { width: 0, height: 700 }));
    }

    #[test]
    fn rejects_invalid_earth_radius() {
        for &radius in [0., -6367., std::f64::INFINITY].iter() {
            let config = Config { earth_radius: radius, ..Config::default() };
            assert_eq!(config.validate(), Err(Error::InvalidEarthRadius(radius)));
        }

        let config = Config { earth_radius: std::f64::NAN, ..Config::default() };
        match config.validate() {
            Err(Error::InvalidEarthRadius(radius)) => assert!(radius.is_nan()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn margin_mode_selects_padding() {
        let bbox = BoundingBox::new(5.0, 5.1, 52.0, 52.05);

        let original = Config::default().apply_margin(bbox);
        assert_eq!(original.lat_min, 52.0);

        let config = Config { margin_mode: MarginMode::Symmetric, ..Config::default() };
        let symmetric = config.apply_margin(bbox);
        assert!(symmetric.lat_min < 52.0);
        assert!(symmetric.lat_max > 52.05);
    }
}
