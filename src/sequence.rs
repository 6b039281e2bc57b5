use core::iter::FusedIterator;
use std::collections::VecDeque;

use crate::ArrayList;

/// A collection that is ordered, indexable and knows its length.
///
/// This is the capability the sequence helpers operate on. It is implemented
/// for slices, arrays, `Vec`, `VecDeque`, [`ArrayList`] and references to any
/// of them.
///
/// # Example
/// ```rust
/// use list_utils::Sequence;
///
/// fn middle<S: Sequence + ?Sized>(seq: &S) -> Option<&S::Item> {
///     seq.get(seq.len() / 2)
/// }
///
/// assert_eq!(middle(&[1, 2, 3][..]), Some(&2));
/// assert_eq!(middle(&Vec::<i32>::new()), None);
/// ```
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn iter(&self) -> SeqIter<'_, Self> {
        SeqIter::new(self)
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T, E> Sequence for ArrayList<T, E> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        S::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&S::Item> {
        S::get(self, index)
    }
}

/// An iterator over the elements of any [`Sequence`].
///
/// This struct is created by `Sequence::iter()`.
pub struct SeqIter<'a, S>
where
    S: Sequence + ?Sized,
{
    seq: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S> SeqIter<'a, S>
where
    S: Sequence + ?Sized,
{
    pub(crate) fn new(seq: &'a S) -> Self {
        Self {
            seq,
            front: 0,
            back: seq.len(),
        }
    }
}

impl<S> Clone for SeqIter<'_, S>
where
    S: Sequence + ?Sized,
{
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, S> Iterator for SeqIter<'a, S>
where
    S: Sequence + ?Sized,
{
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let out = self.seq.get(self.front);
        self.front += 1;
        out
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<S> DoubleEndedIterator for SeqIter<'_, S>
where
    S: Sequence + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        self.seq.get(self.back)
    }
}

impl<S> ExactSizeIterator for SeqIter<'_, S> where S: Sequence + ?Sized {}

impl<S> FusedIterator for SeqIter<'_, S> where S: Sequence + ?Sized {}
