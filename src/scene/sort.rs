//! Bubble sort played out over the bars of the algorithms step.
//!
//! The animation owns the ordering of bar indices into slots; bars only move
//! horizontally between slot positions while a swap is in flight.

use std::f32::consts::PI;

use super::shape::Shape;

/// Frames between two comparisons.
pub const COMPARE_INTERVAL: u32 = 6;
/// Frames a single swap takes.
pub const SWAP_FRAMES: u32 = 20;
/// Frames the finished arrangement is held before starting over.
pub const RESTART_PAUSE: u32 = 90;

const SWAP_LIFT: f32 = 0.4;

#[derive(Clone, Debug, PartialEq)]
pub struct SortAnimation {
    /// Shape index occupying each slot, left to right.
    order: Vec<usize>,
    initial: Vec<usize>,
    slots: Vec<f32>,
    outer: usize,
    inner: usize,
    pause: u32,
    swap: Option<Swap>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Swap {
    left: usize,
    progress: f32,
}

impl SortAnimation {
    /// Collects the sortable bars among `shapes`, ordered by their x position.
    /// Returns `None` when there is nothing to sort.
    pub fn from_shapes(shapes: &[Shape]) -> Option<Self> {
        let mut order: Vec<usize> = shapes
            .iter()
            .enumerate()
            .filter(|(_, s)| s.sort_value().is_some())
            .map(|(i, _)| i)
            .collect();
        if order.len() < 2 {
            return None;
        }
        order.sort_by(|&a, &b| shapes[a].anchor.x.total_cmp(&shapes[b].anchor.x));
        let slots = order.iter().map(|&i| shapes[i].anchor.x).collect();

        Some(Self {
            initial: order.clone(),
            order,
            slots,
            outer: 0,
            inner: 0,
            pause: 0,
            swap: None,
        })
    }

    /// Values of the bars in slot order.
    pub fn values(&self, shapes: &[Shape]) -> Vec<u32> {
        self.order
            .iter()
            .filter_map(|&i| shapes.get(i).and_then(Shape::sort_value))
            .collect()
    }

    /// True once every pass has run and the sorted bars are on hold.
    pub fn pass_complete(&self) -> bool {
        self.outer + 1 >= self.order.len()
    }

    pub fn is_swapping(&self) -> bool {
        self.swap.is_some()
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self, shapes: &mut [Shape]) {
        if self.pause > 0 {
            self.pause -= 1;
            return;
        }
        if self.pass_complete() {
            self.restart(shapes);
            return;
        }
        if let Some(swap) = self.swap {
            self.step_swap(swap, shapes);
            return;
        }

        let (Some(a), Some(b)) = (self.value_at(self.inner, shapes), self.value_at(self.inner + 1, shapes)) else {
            self.advance();
            return;
        };
        if a > b {
            self.swap = Some(Swap {
                left: self.inner,
                progress: 0.0,
            });
        } else {
            self.pause = COMPARE_INTERVAL;
            self.advance();
        }
    }

    fn value_at(&self, slot: usize, shapes: &[Shape]) -> Option<u32> {
        self.order
            .get(slot)
            .and_then(|&i| shapes.get(i))
            .and_then(Shape::sort_value)
    }

    fn step_swap(&mut self, mut swap: Swap, shapes: &mut [Shape]) {
        swap.progress = (swap.progress + 1.0 / SWAP_FRAMES as f32).min(1.0);
        let eased = swap.progress * swap.progress * (3.0 - 2.0 * swap.progress);
        let lift = (PI * eased).sin() * SWAP_LIFT;

        let (left_slot, right_slot) = (swap.left, swap.left + 1);
        let (Some(&from), Some(&to)) = (self.slots.get(left_slot), self.slots.get(right_slot)) else {
            self.swap = None;
            return;
        };
        let moving = [
            (self.order[left_slot], from, to, lift),
            (self.order[right_slot], to, from, -lift),
        ];
        for (index, start, end, z) in moving {
            if let Some(shape) = shapes.get_mut(index) {
                shape.position.x = start + (end - start) * eased;
                shape.position.z = shape.anchor.z + z;
            }
        }

        if swap.progress >= 1.0 {
            self.order.swap(left_slot, right_slot);
            for slot in [left_slot, right_slot] {
                if let Some(shape) = shapes.get_mut(self.order[slot]) {
                    shape.position.x = self.slots[slot];
                    shape.position.z = shape.anchor.z;
                }
            }
            self.swap = None;
            self.pause = COMPARE_INTERVAL;
            self.advance();
        } else {
            self.swap = Some(swap);
        }
    }

    fn advance(&mut self) {
        self.inner += 1;
        let n = self.order.len();
        if self.inner + 1 >= n.saturating_sub(self.outer) {
            self.inner = 0;
            self.outer += 1;
            if self.pass_complete() {
                self.pause = RESTART_PAUSE;
            }
        }
    }

    fn restart(&mut self, shapes: &mut [Shape]) {
        self.order.clone_from(&self.initial);
        for (slot, &index) in self.order.iter().enumerate() {
            if let Some(shape) = shapes.get_mut(index) {
                shape.position.x = self.slots[slot];
                shape.position.z = shape.anchor.z;
            }
        }
        self.outer = 0;
        self.inner = 0;
        self.swap = None;
        self.pause = COMPARE_INTERVAL;
        tracing::trace!("sort animation restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::steps::{build_shapes, SORT_VALUES};

    fn run_until_complete(sort: &mut SortAnimation, shapes: &mut [Shape]) -> usize {
        let mut frames = 0;
        while !sort.pass_complete() {
            sort.tick(shapes);
            frames += 1;
            assert!(frames < 100_000, "sort never finished");
        }
        frames
    }

    #[test]
    fn nothing_to_sort_without_bars() {
        assert!(SortAnimation::from_shapes(&build_shapes(0)).is_none());
    }

    #[test]
    fn starts_in_the_initial_arrangement() {
        let shapes = build_shapes(3);
        let sort = SortAnimation::from_shapes(&shapes).unwrap();
        assert_eq!(sort.values(&shapes), SORT_VALUES);
    }

    #[test]
    fn sorts_ascending_and_lands_bars_on_slots() {
        let mut shapes = build_shapes(3);
        let mut sort = SortAnimation::from_shapes(&shapes).unwrap();
        run_until_complete(&mut sort, &mut shapes);

        assert_eq!(sort.values(&shapes), [1, 2, 3, 4, 6, 7, 8, 9]);
        let xs: Vec<f32> = sort.order.iter().map(|&i| shapes[i].position.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(shapes.iter().all(|s| s.position.z == s.anchor.z));
    }

    #[test]
    fn holds_then_restarts_from_initial_arrangement() {
        let mut shapes = build_shapes(3);
        let mut sort = SortAnimation::from_shapes(&shapes).unwrap();
        run_until_complete(&mut sort, &mut shapes);

        for _ in 0..RESTART_PAUSE {
            sort.tick(&mut shapes);
            assert!(sort.pass_complete());
        }
        sort.tick(&mut shapes);
        assert!(!sort.pass_complete());
        assert_eq!(sort.values(&shapes), SORT_VALUES);
        for (slot, &index) in sort.order.iter().enumerate() {
            assert_eq!(shapes[index].position.x, sort.slots[slot]);
        }
    }

    #[test]
    fn swap_lifts_bars_apart_mid_flight() {
        let mut shapes = build_shapes(3);
        let mut sort = SortAnimation::from_shapes(&shapes).unwrap();
        // 6 > 2, so the first comparison starts a swap.
        sort.tick(&mut shapes);
        assert!(sort.is_swapping());
        for _ in 0..SWAP_FRAMES / 2 {
            sort.tick(&mut shapes);
        }
        let (left, right) = (sort.order[0], sort.order[1]);
        assert!(shapes[left].position.z > shapes[left].anchor.z);
        assert!(shapes[right].position.z < shapes[right].anchor.z);
    }
}
