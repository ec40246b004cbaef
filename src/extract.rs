use crate::Point;
use crate::error::Error;

/// Flat longitude and latitude sequences of a route, in track order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    pub longitudes: Vec<f64>,
    pub latitudes: Vec<f64>,
}

impl Coordinates {
    pub fn len(&self) -> usize {
        self.longitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudes.is_empty()
    }

    /// Iterates the `(longitude, latitude)` pairs in track order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.longitudes.iter().cloned().zip(self.latitudes.iter().cloned())
    }
}

pub fn extract_coordinates<T: Point>(route: &[T]) -> Result<Coordinates, Error> {
    extract_segments(std::iter::once(route))
}

/// Concatenates the points of all segments (of all tracks) in order.
///
/// Fails with `Error::EmptyRoute` if there is not a single point in total.
pub fn extract_segments<'a, T, I>(segments: I) -> Result<Coordinates, Error>
    where T: Point + 'a, I: IntoIterator<Item = &'a [T]>
{
    let mut coordinates = Coordinates::default();

    for segment in segments {
        coordinates.longitudes.extend(segment.iter().map(|fix| fix.longitude()));
        coordinates.latitudes.extend(segment.iter().map(|fix| fix.latitude()));
    }

    if coordinates.is_empty() {
        return Err(Error::EmptyRoute);
    }

    Ok(coordinates)
}
