#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// straight-line distance in raw degree units, no earth curvature
    pub fn euclidean_distance(self, other: Self) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_norm() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);

        assert_eq!(a.euclidean_distance(b), 5.0);
        assert_eq!(b.euclidean_distance(a), 5.0);
        assert_eq!(a.euclidean_distance(a), 0.0);
    }
}
