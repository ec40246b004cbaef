/// A geographic position in decimal degrees (WGS84 assumed, not validated).
pub trait Point: Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl TrackPoint {
    pub fn new(longitude: f64, latitude: f64) -> TrackPoint {
        TrackPoint { longitude, latitude }
    }
}

impl Point for TrackPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// `(longitude, latitude)` pairs, the order the track parsers hand them out
impl Point for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.1
    }
    fn longitude(&self) -> f64 {
        self.0
    }
}
