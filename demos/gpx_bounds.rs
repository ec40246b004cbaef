#[macro_use]
extern crate serde_json;

extern crate failure;
extern crate gpx;
extern crate reqwest;
extern crate trackbox;

use std::env;
use std::fs::{self, File};
use std::io::BufReader;

use failure::Error;
use trackbox::{BoundingBox, Config, TrackPoint};
use trackbox::extract::Coordinates;
use trackbox::overlay::{plot_route, ExternalServiceError, Label, MapImageSource, RouteRenderer};
use trackbox::static_map::StaticMapRequest;

struct Mapbox {
    access_token: String,
    client: reqwest::blocking::Client,
}

impl MapImageSource for Mapbox {
    fn fetch(&self, request: &StaticMapRequest) -> Result<Vec<u8>, Error> {
        let response = self.client.get(request.url(&self.access_token)).send()?;
        if !response.status().is_success() {
            return Err(ExternalServiceError { status: response.status().as_u16() }.into());
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Used when no access token is configured
struct NoBackground;

impl MapImageSource for NoBackground {
    fn fetch(&self, _request: &StaticMapRequest) -> Result<Vec<u8>, Error> {
        Ok(vec![])
    }
}

/// Writes the background next to the output and emits the route as GeoJSON
struct GeoJson {
    background_path: String,
}

impl RouteRenderer for GeoJson {
    fn render(&self, route: &Coordinates, bbox: &BoundingBox, background: &[u8], labels: &[Label]) -> Result<Vec<u8>, Error> {
        if !background.is_empty() {
            fs::write(&self.background_path, background)?;
        }

        let mut features = vec![
            json!({
                "id": "gps-track",
                "type": "Feature",
                "properties": { "stroke": "#F14F54" },
                "geometry": {
                    "type": "LineString",
                    "coordinates": route.iter().collect::<Vec<_>>(),
                },
            }),
            json!({
                "id": "bounds",
                "type": "Feature",
                "properties": { "stroke": "#444444", "fill-opacity": 0 },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        (bbox.long_min, bbox.lat_min),
                        (bbox.long_max, bbox.lat_min),
                        (bbox.long_max, bbox.lat_max),
                        (bbox.long_min, bbox.lat_max),
                        (bbox.long_min, bbox.lat_min),
                    ]],
                },
            }),
        ];

        features.extend(labels.iter().map(|label| json!({
            "type": "Feature",
            "properties": { "text": label.text, "kind": format!("{:?}", label.kind) },
            "geometry": { "type": "Point", "coordinates": (label.longitude, label.latitude) },
        })));

        let json = json!({ "type": "FeatureCollection", "features": features });
        Ok(json.to_string().into_bytes())
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return help();
    }

    let title = args.get(2).map(|s| s.as_str()).unwrap_or("");
    if let Err(error) = analyze(&args[1], title) {
        eprintln!("{}: {}", args[1], error);
        std::process::exit(1);
    }
}

fn analyze(path: &str, title: &str) -> Result<(), Error> {
    let gpx = gpx::read(BufReader::new(File::open(path)?))?;

    let route = gpx.tracks.iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .map(|waypoint| TrackPoint::new(waypoint.point().x(), waypoint.point().y()))
        .collect::<Vec<_>>();

    let config = Config::default();
    let renderer = GeoJson { background_path: "plot_background.jpg".to_string() };

    let output = match env::var("MAPBOX_ACCESS_TOKEN") {
        Ok(access_token) => {
            let client = reqwest::blocking::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?;
            plot_route(&route, title, &config, &Mapbox { access_token, client }, &renderer)?
        }
        Err(_) => plot_route(&route, title, &config, &NoBackground, &renderer)?,
    };

    println!("{}", String::from_utf8(output)?);
    Ok(())
}

fn help() {
    println!("usage: gpx_bounds <gpx-file> [title]");
}
