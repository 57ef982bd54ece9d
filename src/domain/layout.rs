use crate::error::*;
use crate::util::*;
use std::ops::Range;

/// Width of the border around the interior that the stepper never writes.
/// The 9 tap stencil reaches 8 cells in each direction.
pub const HALO: usize = 8;

/// Shape of a padded, row-major wavefield buffer.
///
/// `nx` is the row stride, `ny` the number of rows (halo included),
/// `nxi` the number of interior columns updated in each row.
/// Interior rows are `[HALO, ny - HALO)`, interior columns `[HALO, nxi + HALO)`.
/// Columns past `nxi + 2 * HALO` are stride padding.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridLayout {
    nx: usize,
    ny: usize,
    nxi: usize,
}

impl std::fmt::Display for GridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} (interior {}x{})",
            self.ny,
            self.nx,
            self.nyi(),
            self.nxi
        )
    }
}

impl GridLayout {
    pub fn new(nx: usize, ny: usize, nxi: usize) -> Result<Self> {
        if ny <= 2 * HALO || nxi == 0 || nxi + 2 * HALO > nx {
            return Err(PreconditionError::GridTooSmall { nx, ny, nxi });
        }
        Ok(GridLayout { nx, ny, nxi })
    }

    /// Layout for an `ny x nxi` interior with the halo on every side
    /// and no extra stride padding.
    pub fn with_interior(nyi: usize, nxi: usize) -> Result<Self> {
        GridLayout::new(nxi + 2 * HALO, nyi + 2 * HALO, nxi)
    }

    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    #[inline]
    pub fn nxi(&self) -> usize {
        self.nxi
    }

    /// Number of interior rows.
    #[inline]
    pub fn nyi(&self) -> usize {
        self.ny - 2 * HALO
    }

    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(self.ny, self.nx)
    }

    #[inline]
    pub fn interior_rows(&self) -> Range<usize> {
        HALO..self.ny - HALO
    }

    #[inline]
    pub fn interior_cols(&self) -> Range<usize> {
        HALO..self.nxi + HALO
    }

    /// Linear range covering every interior row, halo columns included.
    #[inline]
    pub fn interior_row_span(&self) -> Range<usize> {
        HALO * self.nx..(self.ny - HALO) * self.nx
    }

    #[inline]
    pub fn coord_to_linear(&self, coord: &Coord) -> usize {
        debug_assert!(coord[0] < self.ny, "{:?} outside {}", coord, self);
        coord_to_linear(coord, self.nx)
    }

    #[inline]
    pub fn linear_to_coord(&self, linear_index: usize) -> Coord {
        debug_assert!(linear_index < self.buffer_size());
        linear_to_coord(linear_index, self.nx)
    }

    /// Does the padded coordinate belong to the region the stepper writes?
    pub fn interior_contains(&self, coord: &Coord) -> bool {
        self.interior_rows().contains(&coord[0])
            && self.interior_cols().contains(&coord[1])
    }

    /// Shift an interior `(y, x)` coordinate into padded coordinates.
    #[inline]
    pub fn to_padded(&self, interior: &Coord) -> Coord {
        interior.add_scalar(HALO)
    }

    pub fn check_buffer(&self, name: &'static str, buffer: &[f32]) -> Result<()> {
        if buffer.len() != self.buffer_size() {
            return Err(PreconditionError::BufferSize {
                name,
                expected: self.buffer_size(),
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}
