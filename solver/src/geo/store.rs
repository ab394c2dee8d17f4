use std::collections::HashMap;

use super::coordinate::Coordinate;

/// Coordinates keyed by location name, read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct CoordinateStore {
    coordinates: HashMap<String, Coordinate>,
}

impl CoordinateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the coordinate previously registered under `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, coordinate: Coordinate) -> Option<Coordinate> {
        self.coordinates.insert(name.into(), coordinate)
    }

    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.coordinates.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    fn require(&self, name: &str) -> eyre::Result<Coordinate> {
        self.get(name)
            .ok_or_else(|| eyre::eyre!("no coordinates for location: {}", name))
    }

    /// Straight-line distance between two registered locations.
    pub fn distance(&self, a: &str, b: &str) -> eyre::Result<f64> {
        Ok(self.require(a)?.euclidean_distance(self.require(b)?))
    }

    /// Sum of the straight-line distances between consecutive stops. Zero for
    /// an empty or single-stop path.
    pub fn path_length<S: AsRef<str>>(&self, path: &[S]) -> eyre::Result<f64> {
        path.windows(2).try_fold(0.0, |total, pair| {
            Ok(total + self.distance(pair[0].as_ref(), pair[1].as_ref())?)
        })
    }
}

impl<S: Into<String>> FromIterator<(S, Coordinate)> for CoordinateStore {
    fn from_iter<I: IntoIterator<Item = (S, Coordinate)>>(iter: I) -> Self {
        Self {
            coordinates: iter
                .into_iter()
                .map(|(name, coordinate)| (name.into(), coordinate))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CoordinateStore {
        [
            ("A", Coordinate::new(0.0, 0.0)),
            ("B", Coordinate::new(0.0, 1.0)),
            ("C", Coordinate::new(1.0, 0.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn short_paths_have_zero_length() {
        let store = triangle();

        assert_eq!(store.path_length::<&str>(&[]).unwrap(), 0.0);
        assert_eq!(store.path_length(&["A"]).unwrap(), 0.0);
    }

    #[test]
    fn direct_edge_length() {
        assert_eq!(triangle().path_length(&["A", "C"]).unwrap(), 1.0);
    }

    #[test]
    fn length_sums_segments_and_ignores_direction() {
        let store = triangle();
        let forward = store.path_length(&["A", "B", "C"]).unwrap();
        let backward = store.path_length(&["C", "B", "A"]).unwrap();

        assert!((forward - (1.0 + 2f64.sqrt())).abs() < 1e-12);
        assert_eq!(forward, backward);
    }

    #[test]
    fn missing_coordinate_is_an_error() {
        let err = triangle().path_length(&["A", "Q"]).unwrap_err();
        assert_eq!(err.to_string(), "no coordinates for location: Q");
    }

    #[test]
    fn insert_reports_replaced_coordinate() {
        let mut store = CoordinateStore::new();

        assert!(store.insert("A", Coordinate::new(1.0, 1.0)).is_none());
        assert_eq!(
            store.insert("A", Coordinate::new(2.0, 2.0)),
            Some(Coordinate::new(1.0, 1.0))
        );
        assert_eq!(store.len(), 1);
    }
}
