use core::iter::FusedIterator;
use std::collections::vec_deque;

use crate::ArrayList;

/// A mutable iterator over the elements of an `ArrayList`.
///
/// This struct is created by `ArrayList::iter_mut()`.
pub struct IterMut<'a, T> {
    delegate: vec_deque::IterMut<'a, T>,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self {
            delegate: Default::default(),
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list<E>(list: &'a mut ArrayList<T, E>) -> Self {
        Self {
            delegate: list.elements.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut").field(&self.delegate).finish()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::ArrayList;

    use super::IterMut;

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: IterMut<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut list = ArrayList::from([1, 2, 3]);
        list.iter_mut().for_each(|value| *value *= 10);
        assert_eq!(list, [10, 20, 30]);

        if let Some(last) = list.iter_mut().next_back() {
            *last = 0;
        }
        assert_eq!(list, [10, 20, 0]);
    }

    #[quickcheck]
    fn test_iter_mut_behavioural(seed: Vec<i32>) {
        let mut expected = seed.clone();
        let mut list = ArrayList::from(seed);

        for (a, b) in expected.iter_mut().zip(list.iter_mut()) {
            assert_eq!(a, b);
            *a = a.wrapping_add(1);
            *b = b.wrapping_add(1);
        }

        assert_eq!(list, expected);
        assert_eq!(list.iter_mut().len(), expected.len());
    }
}
