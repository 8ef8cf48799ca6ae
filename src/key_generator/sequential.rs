use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the keys `0..num`, in ascending or descending order
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    position: usize,
    num: usize,
    order: SequentialOrder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialKeys {
        SequentialKeys {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let key = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(key as u64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
