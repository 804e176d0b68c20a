use crate::cell::CellId;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Report whether `id` lies strictly inside a square grid of side `resolution`.
///
/// Valid coordinates run from 0 to `resolution - 1`. Row/column 0 and
/// row/column `resolution - 1` form a one-cell border: an interior cell has an
/// addressable neighbor in every axis direction, which is what
/// finite-difference and erosion stencils require of the cells they visit.
/// Grids with `resolution < 2` have no interior, so every cell reports
/// `false`; that is a consequence of the rule, not an error.
#[inline]
pub fn is_inside(id: CellId, resolution: u32) -> bool {
    resolution >= 2
        && id.x > 0
        && id.y > 0
        && id.x < resolution - 1
        && id.y < resolution - 1
}

/// Report whether `id` lies on the border of a square grid of side `resolution`.
///
/// Exact complement of [`is_inside`] on every input.
#[inline]
pub fn is_border(id: CellId, resolution: u32) -> bool {
    !is_inside(id, resolution)
}

/// Report whether the cell at offset `(dx, dy)` from `id` is addressable,
/// i.e. stays within `0..resolution` on both axes.
///
/// This tests bounds, not interiority: a border cell is still addressable.
/// The arithmetic is widened to `i64`, so no combination of coordinate and
/// offset can wrap.
#[inline]
pub fn is_neighbor_inside(id: CellId, dx: i32, dy: i32, resolution: u32) -> bool {
    let nx = id.x as i64 + dx as i64;
    let ny = id.y as i64 + dy as i64;
    nx >= 0 && ny >= 0 && nx < resolution as i64 && ny < resolution as i64
}

/// Classify every cell of a `resolution` x `resolution` grid.
///
/// Entry `y * resolution + x` of the returned mask is [`is_inside`] for cell
/// `(x, y)`. With the `parallel` feature the rows are classified with rayon;
/// the output is identical either way. `resolution` 0 yields an empty mask.
pub fn interior_mask(resolution: u32) -> Vec<bool> {
    let row = |y: u32| (0..resolution).map(move |x| is_inside(CellId::new(x, y), resolution));

    #[cfg(feature = "parallel")]
    let mask = (0..resolution).into_par_iter().flat_map_iter(row).collect();

    #[cfg(not(feature = "parallel"))]
    let mask = (0..resolution).flat_map(row).collect();

    mask
}
