use pathgrid_core::Point;

/// Cardinal step offsets in expansion order: south, east, north, west.
///
/// Y grows downward, so south is `(0, +1)`. Changing this order changes which
/// of several equal-cost paths is returned and the order of expansions.
pub const CARDINALS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a grid point in [`CARDINALS`]
/// order, filtered by a predicate.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(CARDINALS.len()),
        }
    }

    /// Return 4-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINALS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_south_east_north_west() {
        let mut nb = Neighbors::new();
        let p = Point::new(5, 5);
        assert_eq!(
            nb.cardinal(p, |_| true),
            &[
                Point::new(5, 6),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn cardinal_filters_and_reuses_buffer() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::ZERO, |q| q.x >= 0 && q.y >= 0).to_vec();
        assert_eq!(got, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert!(nb.cardinal(Point::ZERO, |_| false).is_empty());
    }
}
