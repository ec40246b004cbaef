use log::{debug, warn};

use crate::Point;
use crate::aspect::correct_aspect;
use crate::bbox::BoundingBox;
use crate::config::Config;
use crate::error::Error;
use crate::extract::{extract_coordinates, Coordinates};
use crate::parallel::map_routes;

/// Computes the final, aspect corrected bounding box of a route
pub fn compute_bounds<T: Point>(route: &[T], config: &Config) -> Result<BoundingBox, Error> {
    debug!("Extracting coordinates of {} points", route.len());
    let coordinates = extract_coordinates(route)?;

    bounds_for_coordinates(&coordinates, config)
}

pub fn bounds_for_coordinates(coordinates: &Coordinates, config: &Config) -> Result<BoundingBox, Error> {
    config.validate()?;

    let raw = BoundingBox::from_coordinates(coordinates)?;
    debug!("Raw extent: {:?}", raw);

    let margined = config.apply_margin(raw);
    debug!("Extent with {} margin ({:?}): {:?}", config.margin, config.margin_mode, margined);

    let corrected = correct_aspect(&margined, config.image, config.earth_radius)?;
    debug!("Extent corrected for {}x{} image: {:?}", config.image.width, config.image.height, corrected);

    Ok(corrected)
}

/// Computes the bounds of several independent routes.
///
/// Returns one result per route in input order. A failing route does not
/// affect the others; the caller decides whether to skip or abort.
pub fn compute_bounds_for_routes<R, T>(routes: &[R], config: &Config) -> Vec<Result<BoundingBox, Error>>
    where R: AsRef<[T]> + Sync, T: Point
{
    map_routes(routes, |route| {
        let result = compute_bounds(route.as_ref(), config);
        if let Err(ref error) = result {
            warn!("Skipping route with {} points: {}", route.as_ref().len(), error);
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::TrackPoint;
    use crate::aspect::ground_aspect;
    use crate::config::MarginMode;

    fn route() -> Vec<TrackPoint> {
        vec![
            TrackPoint::new(5.0, 52.0),
            TrackPoint::new(5.0, 52.0),
            TrackPoint::new(5.1, 52.05),
        ]
    }

    #[test]
    fn end_to_end() {
        let config = Config::default();
        let bbox = compute_bounds(&route(), &config).unwrap();

        // the margin widens longitude only, the latitude axis is then grown around 52.025
        assert_approx_eq!(bbox.long_min, 4.99, 1e-12);
        assert_approx_eq!(bbox.long_max, 5.11, 1e-12);
        assert_approx_eq!(bbox.center().1, 52.025, 1e-12);
        assert!(bbox.lat_min < 52.0);
        assert!(bbox.lat_max > 52.05);

        let aspect = ground_aspect(&bbox, config.earth_radius).unwrap();
        assert_approx_eq!(aspect, 600. / 700., 600. / 700. * 1e-3);
    }

    #[test]
    fn symmetric_margin() {
        let config = Config { margin_mode: MarginMode::Symmetric, ..Config::default() };
        let bbox = compute_bounds(&route(), &config).unwrap();

        let aspect = ground_aspect(&bbox, config.earth_radius).unwrap();
        assert_approx_eq!(aspect, 600. / 700., 600. / 700. * 1e-3);
    }

    #[test]
    fn empty_route() {
        let route: Vec<TrackPoint> = vec![];
        assert_eq!(compute_bounds(&route, &Config::default()), Err(Error::EmptyRoute));
    }

    #[test]
    fn single_point() {
        let route = vec![TrackPoint::new(5.0, 52.0); 3];
        match compute_bounds(&route, &Config::default()) {
            Err(Error::DegenerateRoute { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_config() {
        let config = Config { margin: std::f64::NAN, ..Config::default() };
        match compute_bounds(&route(), &config) {
            Err(Error::InvalidMargin(margin)) => assert!(margin.is_nan()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_earth_radius_is_not_blamed_on_the_route() {
        let config = Config { earth_radius: 0., ..Config::default() };
        let results = compute_bounds_for_routes(&[route(), route()], &config);
        assert_eq!(results, vec![Err(Error::InvalidEarthRadius(0.)); 2]);
    }

    #[test]
    fn batch_keeps_order_and_failures() {
        let routes = vec![
            route(),
            vec![],
            vec![TrackPoint::new(9.3, 62.0), TrackPoint::new(9.4, 62.1)],
        ];

        let results = compute_bounds_for_routes(&routes, &Config::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], compute_bounds(&routes[0], &Config::default()));
        assert_eq!(results[1], Err(Error::EmptyRoute));
        assert!(results[2].is_ok());
    }
}
