use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};
use std::vec;

/// An iterator over a random permutation of the keys `0..num`.
/// The same seed always produces the same permutation
#[derive(Debug, Clone)]
pub struct RandomKeys {
    keys: vec::IntoIter<u64>,
}

impl RandomKeys {
    pub fn new(num: usize, seed: u64) -> RandomKeys {
        let mut keys: Vec<u64> = (0..num as u64).collect();
        keys.shuffle(&mut Pcg64::seed_from_u64(seed));
        RandomKeys {
            keys: keys.into_iter(),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}

/// An iterator that will generate `num` random floats uniformly drawn from [0, 1).
/// Values are wrapped so that they can be used as ordered keys
#[derive(Debug, Clone)]
pub struct RandomFloatKeys {
    remaining: usize,
    rng: Pcg64,
}

impl RandomFloatKeys {
    pub fn new(num: usize, seed: u64) -> RandomFloatKeys {
        RandomFloatKeys {
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomFloatKeys {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(OrderedFloat(self.rng.gen()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomFloatKeys {}

impl ExactSizeIterator for RandomFloatKeys {}
