use crate::Point;

/// Mean earth radius in kilometers used for ground distances
pub const EARTH_RADIUS_KM: f64 = 6367.;

pub fn haversine_distance(fix1: &dyn Point, fix2: &dyn Point) -> f64 {
    haversine_distance_with_radius(fix1, fix2, EARTH_RADIUS_KM)
}

/// Great circle distance between two points, in the unit of `earth_radius`.
///
/// No special handling for the antimeridian or the poles.
pub fn haversine_distance_with_radius(fix1: &dyn Point, fix2: &dyn Point, earth_radius: f64) -> f64 {
    let phi1 = fix1.latitude().to_radians();
    let phi2 = fix2.latitude().to_radians();
    let delta_phi = (fix2.latitude() - fix1.latitude()).to_radians();
    let delta_rho = (fix2.longitude() - fix1.longitude()).to_radians();

    let a = (delta_phi / 2.).sin().powi(2) +
        phi1.cos() * phi2.cos() * (delta_rho / 2.).sin().powi(2);

    let c = 2. * a.sqrt().asin();

    earth_radius * c
}
