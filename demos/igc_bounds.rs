extern crate failure;
extern crate igc;
extern crate trackbox;

use std::env;
use std::io::prelude::*;
use std::io::BufReader;
use std::fs::File;

use failure::Error;
use trackbox::{Config, ImageSize};
use trackbox::static_map::StaticMapRequest;

struct Point {
    latitude: f64,
    longitude: f64,
}

impl trackbox::Point for Point {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return help();
    }

    let config = Config { image: ImageSize::new(900, 700), ..Config::default() };

    let mut paths = vec![];
    let mut routes = vec![];
    for path in &args[1..] {
        match load(path) {
            Ok(route) => {
                paths.push(path);
                routes.push(route);
            }
            Err(error) => println!("--- {}\nfailed to read: {}", path, error),
        }
    }

    let results = trackbox::compute_bounds_for_routes(&routes, &config);

    for (path, result) in paths.into_iter().zip(results) {
        println!("--- {}", path);
        match result {
            Ok(bbox) => {
                println!("bounds: {:?}", bbox);
                println!("image:  {}", StaticMapRequest::new(bbox, &config).url("<token>"));
            }
            Err(error) => println!("skipped: {}", error),
        }
    }
}

fn load(path: &str) -> Result<Vec<Point>, Error> {
    let file = File::open(&path)?;

    let fixes = BufReader::new(file)
        .lines()
        .filter_map(|l| l.ok())
        .filter(|l| l.starts_with('B'))
        .filter_map(|line| igc::records::BRecord::parse(&line).ok()
            .map(|record| Point {
                latitude: record.pos.lat.into(),
                longitude: record.pos.lon.into(),
            }))
        .collect();

    Ok(fixes)
}

fn help() {
    println!("usage: igc_bounds <igc-file>...");
}
