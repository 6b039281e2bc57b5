use core::iter::FusedIterator;
use std::collections::{VecDeque, vec_deque};

use crate::ArrayList;

/// An owning iterator over the elements of an `ArrayList`.
///
/// This struct is created by `ArrayList::into_iter()`.
#[derive(Clone)]
pub struct IntoIter<T> {
    delegate: vec_deque::IntoIter<T>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: VecDeque::new().into_iter(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list<E>(list: ArrayList<T, E>) -> Self {
        Self {
            delegate: list.elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn last(self) -> Option<Self::Item> {
        self.delegate.last()
    }

    fn count(self) -> usize {
        self.delegate.count()
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

impl<T> DoubleEndedIterator for IntoIter<T> {
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

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.delegate).finish()
    }
}
