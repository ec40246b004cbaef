use failure::Fail;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    #[fail(display = "route contains no points")]
    EmptyRoute,

    #[fail(display = "route is degenerate (ground width {} km, ground height {} km)", ground_width, ground_height)]
    DegenerateRoute { ground_width: f64, ground_height: f64 },

    #[fail(display = "invalid image size {}x{}", width, height)]
    InvalidImageSize { width: u32, height: u32 },

    #[fail(display = "invalid margin fraction {}", _0)]
    InvalidMargin(f64),

    #[fail(display = "invalid earth radius {}", _0)]
    InvalidEarthRadius(f64),
}
