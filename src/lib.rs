#[macro_use] extern crate cfg_if;

extern crate failure;
extern crate ord_subset;

#[cfg(feature = "rayon")]
extern crate rayon;

pub mod aspect;
pub mod bbox;
pub mod config;
pub mod error;
pub mod extract;
pub mod haversine;
pub mod overlay;
pub mod pipeline;
pub mod static_map;

mod parallel;
mod point;

pub use crate::aspect::ImageSize;
pub use crate::bbox::BoundingBox;
pub use crate::config::{Config, MarginMode};
pub use crate::error::Error;
pub use crate::pipeline::{compute_bounds, compute_bounds_for_routes};
pub use crate::point::{Point, TrackPoint};
