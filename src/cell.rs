/// Identifier of a cell in a square grid.
///
/// `x` is the column and `y` the row, both in `0..resolution` for a grid of
/// side `resolution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    pub x: u32,
    pub y: u32,
}

impl CellId {
    /// Create a cell identifier from its column and row.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Create a cell identifier from a 3-component dispatch-style id.
    ///
    /// The third component addresses layers or volume slices in such ids and
    /// carries no meaning for a 2D grid; it is ignored.
    #[inline]
    pub fn from_xyz(x: u32, y: u32, _z: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_xyz_ignores_third_component() {
        assert_eq!(CellId::from_xyz(3, 7, 0), CellId::new(3, 7));
        assert_eq!(CellId::from_xyz(3, 7, 42), CellId::new(3, 7));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_round_trip() {
        let id = CellId::new(5, 9);
        let s = toml::to_string(&id).unwrap();
        let back: CellId = toml::from_str(&s).unwrap();
        assert_eq!(back, id);
    }
}
