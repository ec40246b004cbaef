use failure::{Error, Fail};
use log::debug;

use crate::Point;
use crate::bbox::BoundingBox;
use crate::config::Config;
use crate::extract::{extract_coordinates, Coordinates};
use crate::pipeline::bounds_for_coordinates;
use crate::static_map::StaticMapRequest;

pub const ATTRIBUTION: &str = "map data by © Mapbox and © OpenStreetMap";

/// Non-success response of a map image service
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
#[fail(display = "map image service responded with status {}", status)]
pub struct ExternalServiceError {
    pub status: u16,
}

/// Fetches the background raster for a bounding box
pub trait MapImageSource {
    fn fetch(&self, request: &StaticMapRequest) -> Result<Vec<u8>, Error>;
}

/// Draws the route and labels onto the background raster and encodes the result
pub trait RouteRenderer {
    fn render(&self, route: &Coordinates, bbox: &BoundingBox, background: &[u8], labels: &[Label]) -> Result<Vec<u8>, Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Title,
    Attribution,
}

/// Horizontally centered text anchored at a position inside the bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub kind: LabelKind,
    pub text: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Title at 10% and attribution at 5% of the box height, both centered.
pub fn labels_for(bbox: &BoundingBox, title: &str) -> Vec<Label> {
    let (longitude, _) = bbox.center();
    let height = bbox.height();

    vec![
        Label {
            kind: LabelKind::Title,
            text: title.to_string(),
            longitude,
            latitude: bbox.lat_min + height * 0.1,
        },
        Label {
            kind: LabelKind::Attribution,
            text: ATTRIBUTION.to_string(),
            longitude,
            latitude: bbox.lat_min + height * 0.05,
        },
    ]
}

/// Runs the whole chain for one route: bounds, background image and rendering.
///
/// Errors of either collaborator are passed through unchanged, nothing is retried.
pub fn plot_route<T, S, R>(route: &[T], title: &str, config: &Config, source: &S, renderer: &R) -> Result<Vec<u8>, Error>
    where T: Point, S: MapImageSource + ?Sized, R: RouteRenderer + ?Sized
{
    let coordinates = extract_coordinates(route)?;
    let bbox = bounds_for_coordinates(&coordinates, config)?;

    let request = StaticMapRequest::new(bbox, config);
    debug!("Fetching background image {}", request.resolution_param());
    let background = source.fetch(&request)?;
    debug!("Received {} bytes of background image", background.len());

    let labels = labels_for(&bbox, title);
    renderer.render(&coordinates, &bbox, &background, &labels)
}
