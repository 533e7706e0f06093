/// The coordinates of a single field.
///
/// `x` is the first index into the serialized board (the row), `y` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

/// A unit step `(dx, dy)` along a row, column or diagonal.
pub type Direction = (i8, i8);

/// The eight directions a tower can travel in.
///
/// This is also the order in which [`Board::neighbours()`](crate::Board::neighbours)
/// reports its results: `dy` varies slowest.
#[rustfmt::skip]
pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The field that is `steps` fields away in direction `dir`.
    ///
    /// Returns `None` if the result is not representable, which implies that it
    /// is off the board.
    pub fn offset(self, (dx, dy): Direction, steps: usize) -> Option<Pos> {
        let steps = i32::try_from(steps).ok()?;
        let x = i32::from(self.x).checked_add(i32::from(dx).checked_mul(steps)?)?;
        let y = i32::from(self.y).checked_add(i32::from(dy).checked_mul(steps)?)?;
        Some(Pos {
            x: i8::try_from(x).ok()?,
            y: i8::try_from(y).ok()?,
        })
    }

    /// The direction and distance from `self` to `other`, provided both lie on
    /// a common row, column or diagonal and are distinct.
    pub fn direction_to(self, other: Pos) -> Option<(Direction, usize)> {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let distance = dx.abs().max(dy.abs()) as usize;
        Some(((dx.signum() as i8, dy.signum() as i8), distance))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_representable() {
        assert_eq!(Pos::new(2, 2).offset((-1, 1), 2), Some(Pos::new(0, 4)));
        assert_eq!(Pos::new(0, 0).offset((-1, 0), 1), Some(Pos::new(-1, 0)));
        assert_eq!(Pos::new(120, 0).offset((1, 0), 10), None);
        assert_eq!(Pos::new(0, 0).offset((1, 1), usize::MAX), None);
    }

    #[test]
    fn direction_to_lines_only() {
        assert_eq!(Pos::new(0, 0).direction_to(Pos::new(2, 2)), Some(((1, 1), 2)));
        assert_eq!(Pos::new(3, 1).direction_to(Pos::new(0, 1)), Some(((-1, 0), 3)));
        assert_eq!(Pos::new(0, 0).direction_to(Pos::new(1, 2)), None);
        assert_eq!(Pos::new(1, 1).direction_to(Pos::new(1, 1)), None);
    }
}
