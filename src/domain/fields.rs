use super::*;

/// Which of the two buffers passed to the stepper holds the newest time level.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimeLevel {
    /// The buffer passed as `current`.
    Current,
    /// The buffer passed as `previous`.
    Previous,
}

impl TimeLevel {
    /// Each step writes into the older buffer, then the roles swap.
    pub fn after_steps(num_steps: usize) -> Self {
        if num_steps % 2 == 0 {
            TimeLevel::Current
        } else {
            TimeLevel::Previous
        }
    }
}

/// Two owned wavefield buffers and a selector naming the current one.
///
/// Swapping roles flips the selector, buffers never move or get copied.
pub struct WaveFields {
    layout: GridLayout,
    buffers: [Vec<f32>; 2],
    active: usize,
}

impl WaveFields {
    /// Zero initialized pair.
    pub fn new(layout: GridLayout) -> Self {
        let n = layout.buffer_size();
        WaveFields {
            layout,
            buffers: [vec![0.0; n], vec![0.0; n]],
            active: 0,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn current(&self) -> FieldView<'_> {
        FieldView::new(self.layout, &self.buffers[self.active])
    }

    pub fn previous(&self) -> FieldView<'_> {
        FieldView::new(self.layout, &self.buffers[1 - self.active])
    }

    pub fn current_mut(&mut self) -> &mut [f32] {
        &mut self.buffers[self.active]
    }

    pub fn previous_mut(&mut self) -> &mut [f32] {
        &mut self.buffers[1 - self.active]
    }

    /// Mutable `(current, previous)` pair, in that order.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.active == 0 {
            (first[0].as_mut_slice(), second[0].as_mut_slice())
        } else {
            (second[0].as_mut_slice(), first[0].as_mut_slice())
        }
    }

    /// Record that `level` now holds the newest time level.
    pub fn advance(&mut self, level: TimeLevel) {
        if level == TimeLevel::Previous {
            self.active = 1 - self.active;
        }
    }

    pub fn reset(&mut self) {
        for b in self.buffers.iter_mut() {
            b.fill(0.0);
        }
        self.active = 0;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn parity() {
        assert_eq!(TimeLevel::after_steps(0), TimeLevel::Current);
        assert_eq!(TimeLevel::after_steps(1), TimeLevel::Previous);
        assert_eq!(TimeLevel::after_steps(2), TimeLevel::Current);
        assert_eq!(TimeLevel::after_steps(7), TimeLevel::Previous);
    }

    #[test]
    fn swap_test() {
        let layout = GridLayout::with_interior(2, 2).unwrap();
        let mut fields = WaveFields::new(layout);
        fields.current_mut()[0] = 1.0;
        fields.previous_mut()[0] = 2.0;
        let a_ptr = fields.current().buffer().as_ptr();
        let b_ptr = fields.previous().buffer().as_ptr();

        fields.advance(TimeLevel::Current);
        assert_eq!(fields.current().buffer().as_ptr(), a_ptr);

        fields.advance(TimeLevel::Previous);
        assert_eq!(fields.current().buffer().as_ptr(), b_ptr);
        assert_eq!(fields.previous().buffer().as_ptr(), a_ptr);
        assert_eq!(fields.current().buffer()[0], 2.0);

        let (current, previous) = fields.split_mut();
        assert_eq!(current[0], 2.0);
        assert_eq!(previous[0], 1.0);

        fields.reset();
        assert_eq!(fields.current().buffer()[0], 0.0);
        assert_eq!(fields.current().buffer().as_ptr(), a_ptr);
    }
}
