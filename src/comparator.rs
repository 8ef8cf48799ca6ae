use std::cmp::Ordering;

/// A three-way comparison defining a total order over `T`.
/// Both trees use it for positioning and for equality checks, so it must be consistent:
/// `compare(a, b) == Equal` is the only notion of equality they know
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Delegate to the `Ord` implementation of the key type
#[derive(Debug, Default, Copy, Clone)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn closure() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);

        // Compare strings by length only
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"xyz"), Ordering::Equal);
    }
}
