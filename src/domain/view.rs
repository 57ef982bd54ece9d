use super::*;
use crate::util::*;

/// Read-only row/column access to a padded wavefield buffer.
#[derive(Copy, Clone, Debug)]
pub struct FieldView<'a> {
    layout: GridLayout,
    buffer: &'a [f32],
}

impl<'a> FieldView<'a> {
    pub fn new(layout: GridLayout, buffer: &'a [f32]) -> Self {
        debug_assert_eq!(buffer.len(), layout.buffer_size());
        FieldView { layout, buffer }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &'a [f32] {
        self.buffer
    }

    /// Full padded row `i`, stride padding included.
    pub fn row(&self, i: usize) -> &'a [f32] {
        let nx = self.layout.nx();
        &self.buffer[i * nx..(i + 1) * nx]
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord) -> f32 {
        self.buffer[self.layout.coord_to_linear(coord)]
    }

    /// Interior value at interior coordinate `(y, x)`.
    pub fn interior(&self, y: usize, x: usize) -> f32 {
        self.view(&self.layout.to_padded(&vector![y, x]))
    }

    /// The `nxi` interior samples of each interior row, top to bottom.
    pub fn interior_rows(&self) -> impl Iterator<Item = &'a [f32]> + '_ {
        let cols = self.layout.interior_cols();
        self.layout
            .interior_rows()
            .map(move |i| &self.row(i)[cols.clone()])
    }

    /// Copy the interior into a dense `nyi x nxi` row-major vector.
    pub fn interior_to_vec(&self) -> Vec<f32> {
        let mut result =
            Vec::with_capacity(self.layout.nyi() * self.layout.nxi());
        for row in self.interior_rows() {
            result.extend_from_slice(row);
        }
        result
    }

    /// Largest absolute value in the interior, handy for image scaling.
    pub fn interior_max_abs(&self) -> f32 {
        self.interior_rows()
            .flat_map(|row| row.iter())
            .fold(0.0_f32, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn interior_access() {
        let layout = GridLayout::new(20, 18, 3).unwrap();
        let buffer: Vec<f32> =
            (0..layout.buffer_size()).map(|l| l as f32).collect();
        let view = FieldView::new(layout, &buffer);

        assert_eq!(view.row(1)[0], 20.0);
        assert_eq!(view.interior(0, 0), (8 * 20 + 8) as f32);
        assert_eq!(view.interior(1, 2), (9 * 20 + 10) as f32);

        let rows: Vec<&[f32]> = view.interior_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[188.0, 189.0, 190.0]);
        assert_eq!(
            view.interior_to_vec(),
            vec![168.0, 169.0, 170.0, 188.0, 189.0, 190.0]
        );
        assert_eq!(view.interior_max_abs(), 190.0);
    }
}
