//! # list_utils
//!
//! `list_utils` provides a dynamically resizable, Java-style [`ArrayList`] and a
//! handful of free-standing helpers that work over any ordered collection.
//!
//! ## Features
//! - Positional insertion and removal with explicit, checked errors instead of panics.
//! - Value based lookups (`index_of`, `remove`, ...) driven by a pluggable
//!   [`Equivalence`], structural equality by default.
//! - Cheap appends *and* prepends; only middle insertions splice.
//! - [`Sequence`] helpers: `map`, `select`, `contains`, `combination` and `compact`.
//! - A type-erased [`Value`](dynamic::Value) with runtime checked helpers for
//!   heterogeneous data.
//!
//! ## Concurrency
//! Nothing in this crate synchronizes. An `ArrayList` shared between threads
//! must be guarded by an external lock; the helpers are pure and reentrant.
//!
//! ## Example
//! ```rust
//! use list_utils::{ArrayList, Error};
//!
//! let mut list = ArrayList::new();
//! list.add(2);
//! list.add_first(0);
//! list.add_at(1, 1)?;
//!
//! assert_eq!(list.get(0), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.get(2), Ok(&2));
//! assert_eq!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
//!
//! assert_eq!(list.remove(&1), Ok(1));
//! assert_eq!(list.remove_at(1), Ok(2));
//! assert_eq!(list.to_vec(), [0]);
//! # Ok::<(), Error>(())
//! ```

mod equivalence;
mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod sequence;

pub mod dynamic;
pub mod helpers;

pub use equivalence::{Equivalence, Structural};
pub use error::{Error, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;
pub use sequence::{SeqIter, Sequence};

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

/// A mutable, ordered, 0-indexed list of elements.
///
/// # Features
/// - **Checked positions**: every positional operation validates its index and
///   reports [`Error::IndexOutOfRange`] instead of clamping or panicking. A failed
///   operation leaves the list untouched.
/// - **Equivalence driven lookups**: `index_of`, `last_index_of`, `contains` and
///   `remove` compare with `E`, which defaults to [`Structural`] equality.
/// - **Snapshots**: `to_vec` returns an independently owned copy.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
/// - `E`: The [`Equivalence`] used by value based lookups.
///
/// # Thread safety
/// `ArrayList` does no internal locking. It is `Send`/`Sync` whenever `T` and
/// `E` are, and concurrent mutation requires an external lock.
///
/// # Example
/// ```rust
/// use list_utils::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add("b");
/// list.add_first("a");
/// list.add_all(["c", "a"]);
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 4);
///
/// assert_eq!(list.index_of(&"a"), Some(0));
/// assert_eq!(list.last_index_of(&"a"), Some(3));
/// assert_eq!(list.index_of(&"z"), None);
/// ```
pub struct ArrayList<T, E = Structural> {
    elements: VecDeque<T>,
    equivalence: E,
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            elements: VecDeque::from(values),
            equivalence: Structural,
        }
    }
}

impl<T, E> FromIterator<T> for ArrayList<T, E>
where
    E: Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::with_equivalence(E::default());
        this.extend(iter);
        this
    }
}

impl<T, E> Extend<T> for ArrayList<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T, E> Extend<&'a T> for ArrayList<T, E>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, E> Default for ArrayList<T, E>
where
    E: Default,
{
    fn default() -> Self {
        Self::with_equivalence(E::default())
    }
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` using structural equality for lookups.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
            equivalence: Structural,
        }
    }
}

impl<T, E> ArrayList<T, E> {
    /// Creates a new, empty `ArrayList` whose value based lookups use `equivalence`.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::with_equivalence(|a: &f64, b: &f64| (a - b).abs() < 1e-9);
    /// list.add(0.1 + 0.2);
    ///
    /// assert!(list.contains(&0.3));
    /// ```
    pub const fn with_equivalence(equivalence: E) -> Self {
        Self {
            elements: VecDeque::new(),
            equivalence,
        }
    }

    /// Appends an element to the end of the list.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add(10);
    /// list.add(20);
    ///
    /// assert_eq!(list, [10, 20]);
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) {
        self.elements.push_back(value);
    }

    /// Appends all of the given elements, in iteration order, to the end of the list.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([1]);
    /// list.add_all([2, 3]);
    ///
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(values);
    }

    /// Inserts an element before every existing element.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add_first(10);
    /// list.add_first(20);
    ///
    /// assert_eq!(list, [20, 10]);
    /// ```
    #[inline]
    pub fn add_first(&mut self, value: T) {
        self.elements.push_front(value);
    }

    /// Inserts all of the given elements before every existing element,
    /// preserving their relative order.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([3]);
    /// list.add_all_first([1, 2]);
    ///
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn add_all_first<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        self.elements.reserve(values.len());
        values
            .into_iter()
            .rev()
            .for_each(|value| self.elements.push_front(value));
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// `index` may equal `len()`, in which case the element is appended.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`; the list is left unchanged.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 30]);
    /// list.add_at(1, 20)?;
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(list.add_at(4, 40), Err(Error::IndexOutOfRange { index: 4, len: 3 }));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_insert_index(index)?;

        match index {
            0 => self.add_first(value),
            i if i == self.len() => self.add(value),
            _ => self.elements.insert(index, value),
        }

        Ok(())
    }

    /// Inserts all of the given elements starting at `index`, shifting subsequent
    /// elements to the right. The inserted elements keep their relative order.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`; the list is left unchanged
    ///   and no element of `values` is inserted.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 4]);
    /// list.add_all_at(1, [2, 3])?;
    ///
    /// assert_eq!(list, [1, 2, 3, 4]);
    /// # Ok::<(), list_utils::Error>(())
    /// ```
    pub fn add_all_at<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insert_index(index)?;

        match index {
            0 => self.add_all_first(values),
            i if i == self.len() => self.add_all(values),
            _ => self.splice_at(index, values),
        }

        Ok(())
    }

    fn splice_at<I>(&mut self, index: usize, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        debug_assert!(0 < index && index < self.len());

        let mut suffix = self.elements.split_off(index);
        self.elements.extend(values);
        self.elements.append(&mut suffix);
    }

    /// Removes every element from the list.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::{ArrayList, Error};
    ///
    /// let list = ArrayList::from([10, 20]);
    ///
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.elements
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([10, 20]);
    /// *list.get_mut(0)? += 1;
    ///
    /// assert_eq!(list, [11, 20]);
    /// # Ok::<(), list_utils::Error>(())
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len();
        self.elements
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`; the list is left unchanged.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove_at(1), Ok(20));
    /// assert_eq!(list, [10, 30]);
    /// assert_eq!(list.remove_at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        match index {
            0 => self.elements.pop_front(),
            i if i == len - 1 => self.elements.pop_back(),
            _ => self.elements.remove(index),
        }
        .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Checks whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a newly allocated copy of every element, in list order.
    ///
    /// The copy is independent: mutating it does not affect the list and later
    /// mutations of the list do not show up in it.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2]);
    /// let mut snapshot = list.to_vec();
    ///
    /// snapshot[0] = 100;
    /// list.add(3);
    ///
    /// assert_eq!(snapshot, [100, 2]);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Provides an iterator over the list's elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over the list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        Ok(())
    }
}

impl<T, E> ArrayList<T, E>
where
    E: Equivalence<T>,
{
    /// Returns the index of the first element equivalent to `value`, or `None`.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let list = ArrayList::from([vec![1], vec![2], vec![1]]);
    ///
    /// assert_eq!(list.index_of(&vec![1]), Some(0));
    /// assert_eq!(list.index_of(&vec![3]), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| self.equivalence.equivalent(element, value))
    }

    /// Returns the index of the last element equivalent to `value`, or `None`.
    ///
    /// The list is scanned from the back, stopping at the first match.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::ArrayList;
    ///
    /// let list = ArrayList::from([vec![1], vec![2], vec![1]]);
    ///
    /// assert_eq!(list.last_index_of(&vec![1]), Some(2));
    /// assert_eq!(list.last_index_of(&vec![3]), None);
    /// ```
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|element| self.equivalence.equivalent(element, value))
    }

    /// Checks whether any element is equivalent to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes and returns the first element equivalent to `value`.
    ///
    /// # Errors
    /// - [`Error::ElementNotFound`] if no element matches; the list is left unchanged.
    ///
    /// # Example
    /// ```rust
    /// use list_utils::{ArrayList, Error};
    ///
    /// let mut list = ArrayList::from(["a", "b", "a"]);
    ///
    /// assert_eq!(list.remove(&"a"), Ok("a"));
    /// assert_eq!(list, ["b", "a"]);
    /// assert_eq!(list.remove(&"z"), Err(Error::ElementNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let index = self.index_of(value).ok_or(Error::ElementNotFound)?;
        self.remove_at(index)
    }
}

impl<T, E> Clone for ArrayList<T, E>
where
    T: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<T, E, const M: usize> PartialEq<[T; M]> for ArrayList<T, E>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, E> PartialEq<&[T]> for ArrayList<T, E>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, E> PartialEq<[T]> for ArrayList<T, E>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, E> PartialEq<Vec<T>> for ArrayList<T, E>
where
    T: PartialEq,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, E> PartialEq for ArrayList<T, E>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, E> Eq for ArrayList<T, E> where T: Eq {}

impl<T, E> PartialOrd for ArrayList<T, E>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T, E> Ord for ArrayList<T, E>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, E> Hash for ArrayList<T, E>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, E> std::fmt::Debug for ArrayList<T, E>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, E> IntoIterator for ArrayList<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T, E> IntoIterator for &'a ArrayList<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T, E> IntoIterator for &'a mut ArrayList<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::VecDeque;
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

    use quickcheck_macros::quickcheck;

    use crate::{ArrayList, Error};

    #[derive(Debug, Clone, PartialEq)]
    struct Payload {
        name: String,
        values: Vec<u8>,
    }

    fn payload(name: &str, values: &[u8]) -> Payload {
        Payload {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }

    fn elements(count: usize) -> ArrayList<String> {
        (0..count).map(|i| format!("Element {i}")).collect()
    }

    #[test]
    fn test_new_creates_empty_array_list() {
        let sut: ArrayList<i64> = ArrayList::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_default_creates_empty_array_list() {
        let sut: ArrayList<i64> = ArrayList::default();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn test_add_appends_elements() {
        let mut sut = ArrayList::new();

        sut.add("First Element");
        assert_eq!(sut.len(), 1);

        sut.add("Second Element");
        assert_eq!(sut.len(), 2);
        assert_eq!(sut, ["First Element", "Second Element"]);
    }

    #[test]
    fn test_add_all_appends_in_order() {
        let mut sut = ArrayList::new();
        sut.add_all((0..10).map(|i| format!("Element {i}")));

        assert_eq!(sut.len(), 10);
        assert_eq!(sut, elements(10));

        sut.add_all([]);
        assert_eq!(sut.len(), 10);
    }

    #[test]
    fn test_add_at_inserts_element_at_correct_index() {
        let mut sut = elements(10);

        sut.add_at(7, "Inserted Element".to_string()).unwrap();
        assert_eq!(sut.len(), 11);
        assert_eq!(sut.get(7).unwrap(), "Inserted Element");
        assert_eq!(sut.get(6).unwrap(), "Element 6");
        assert_eq!(sut.get(8).unwrap(), "Element 7");

        assert_eq!(
            sut.add_at(20, "Not Inserted".to_string()),
            Err(Error::IndexOutOfRange { index: 20, len: 11 })
        );
        assert_eq!(sut.len(), 11);

        sut.add_at(0, "First Element".to_string()).unwrap();
        assert_eq!(sut.len(), 12);
        assert_eq!(sut.get(0).unwrap(), "First Element");

        sut.add_at(sut.len(), "Last Element".to_string()).unwrap();
        assert_eq!(sut.len(), 13);
        assert_eq!(sut.get(12).unwrap(), "Last Element");
    }

    #[test]
    fn test_add_at_on_empty_list() {
        let mut sut = ArrayList::new();
        assert_eq!(
            sut.add_at(1, 10),
            Err(Error::IndexOutOfRange { index: 1, len: 0 })
        );

        sut.add_at(0, 10).unwrap();
        assert_eq!(sut, [10]);
    }

    #[test]
    fn test_add_all_at_inserts_run_at_correct_index() {
        let mut sut = elements(10);

        sut.add_all_at(
            7,
            ["Element 10", "Element 11", "Element 12"].map(String::from),
        )
        .unwrap();
        assert_eq!(sut.len(), 13);

        for i in 0..3 {
            assert_eq!(sut.get(7 + i).unwrap(), &format!("Element {}", 10 + i));
        }
        assert_eq!(sut.get(10).unwrap(), "Element 7");

        assert_eq!(
            sut.add_all_at(20, ["Not Inserted".to_string()]),
            Err(Error::IndexOutOfRange { index: 20, len: 13 })
        );
        assert_eq!(sut.len(), 13);

        sut.add_all_at(0, ["A", "B"].map(String::from)).unwrap();
        assert_eq!(sut.get(0).unwrap(), "A");
        assert_eq!(sut.get(1).unwrap(), "B");
        assert_eq!(sut.get(2).unwrap(), "Element 0");

        let len = sut.len();
        sut.add_all_at(len, ["Y", "Z"].map(String::from)).unwrap();
        assert_eq!(sut.get(len).unwrap(), "Y");
        assert_eq!(sut.get(len + 1).unwrap(), "Z");
        assert_eq!(sut.len(), 17);
    }

    #[test]
    fn test_add_first_prepends() {
        let mut sut = ArrayList::from([3]);
        sut.add_first(2);
        sut.add_first(1);
        assert_eq!(sut, [1, 2, 3]);

        sut.add_all_first([-1, 0]);
        assert_eq!(sut, [-1, 0, 1, 2, 3]);

        sut.add_all_first([]);
        assert_eq!(sut.len(), 5);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut sut = elements(4);
        sut.clear();
        assert!(sut.is_empty());

        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_get_out_of_range_reports_error() {
        let sut = elements(3);
        assert_eq!(sut.get(2).unwrap(), "Element 2");
        assert_eq!(sut.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(
            sut.get(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
    }

    #[test]
    fn test_get_mut_modifies_element() {
        let mut sut = ArrayList::from([1, 2, 3]);
        *sut.get_mut(1).unwrap() = 20;
        assert_eq!(sut, [1, 20, 3]);
        assert_eq!(
            sut.get_mut(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_index_of_uses_structural_equality() {
        let sut = ArrayList::from([
            payload("a", &[1, 2]),
            payload("b", &[3]),
            payload("a", &[1, 2]),
        ]);

        assert_eq!(sut.index_of(&payload("a", &[1, 2])), Some(0));
        assert_eq!(sut.last_index_of(&payload("a", &[1, 2])), Some(2));
        assert_eq!(sut.index_of(&payload("b", &[3])), Some(1));
        assert_eq!(sut.last_index_of(&payload("b", &[3])), Some(1));

        assert_eq!(sut.index_of(&payload("a", &[1])), None);
        assert_eq!(sut.last_index_of(&payload("a", &[1])), None);
        assert!(!sut.contains(&payload("c", &[])));
    }

    #[test]
    fn test_lookups_use_custom_equivalence() {
        let mut sut = ArrayList::with_equivalence(|a: &Payload, b: &Payload| a.name == b.name);
        sut.add(payload("a", &[1]));
        sut.add(payload("b", &[2]));

        assert_eq!(sut.index_of(&payload("b", &[])), Some(1));
        assert_eq!(sut.remove(&payload("a", &[9])), Ok(payload("a", &[1])));
        assert_eq!(sut, [payload("b", &[2])]);
    }

    #[test]
    fn test_remove_removes_only_first_match() {
        let mut sut = ArrayList::from(["A", "B", "A"]);

        assert_eq!(sut.remove(&"A"), Ok("A"));
        assert_eq!(sut, ["B", "A"]);

        assert_eq!(sut.remove(&"C"), Err(Error::ElementNotFound));
        assert_eq!(sut, ["B", "A"]);

        assert_eq!(sut.remove(&"A"), Ok("A"));
        assert_eq!(sut.remove(&"B"), Ok("B"));
        assert!(sut.is_empty());
        assert_eq!(sut.remove(&"B"), Err(Error::ElementNotFound));
    }

    #[test]
    fn test_remove_at_shifts_elements_left() {
        let mut sut = elements(5);

        assert_eq!(sut.remove_at(2).unwrap(), "Element 2");
        assert_eq!(sut.len(), 4);
        assert_eq!(sut.get(1).unwrap(), "Element 1");
        assert_eq!(sut.get(2).unwrap(), "Element 3");

        assert_eq!(sut.remove_at(0).unwrap(), "Element 0");
        assert_eq!(sut.remove_at(2).unwrap(), "Element 4");
        assert_eq!(sut.len(), 2);

        assert_eq!(
            sut.remove_at(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn test_remove_at_on_empty_list() {
        let mut sut: ArrayList<i32> = ArrayList::new();
        assert_eq!(
            sut.remove_at(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_to_vec_returns_snapshot() {
        let mut sut = ArrayList::from([payload("a", &[1])]);

        let mut snapshot = sut.to_vec();
        snapshot[0].values.push(2);
        snapshot.push(payload("b", &[]));

        assert_eq!(sut.get(0), Ok(&payload("a", &[1])));
        assert_eq!(sut.len(), 1);

        sut.add(payload("c", &[]));
        sut.get_mut(0).unwrap().name.push('!');
        assert_eq!(snapshot[0].name, "a");
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let sut = ArrayList::from([1, 2, 3]);
        let mut clone = sut.clone();
        clone.add(4);
        assert_eq!(sut, [1, 2, 3]);
        assert_eq!(clone, [1, 2, 3, 4]);
    }

    #[test]
    fn test_eq_against_other_collections() {
        let sut = ArrayList::from([1, 2, 3]);
        assert_eq!(sut, [1, 2, 3]);
        assert_eq!(sut, vec![1, 2, 3]);
        assert_eq!(sut, &[1, 2, 3][..]);
        assert_ne!(sut, [1, 2]);
        assert_ne!(sut, ArrayList::from([1, 2, 4]));
    }

    #[test]
    fn test_ord_is_lexicographic() {
        let a = ArrayList::from([1, 2]);
        let b = ArrayList::from([1, 3]);
        let c = ArrayList::from([1, 2, 0]);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&c), Ordering::Less);
        assert_eq!(b.partial_cmp(&c), Some(Ordering::Greater));
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_hash_matches_for_equal_lists() {
        let hasher = BuildHasherDefault::<DefaultHasher>::default();

        let a = ArrayList::from([1, 2, 3]);
        let mut b = ArrayList::from([2, 3]);
        b.add_first(1);

        assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));
        assert_ne!(hasher.hash_one(&a), hasher.hash_one(ArrayList::from([3, 2, 1])));
    }

    #[test]
    fn test_debug_prints_as_list() {
        let sut = ArrayList::from(["Oscar"]);
        assert_eq!(format!("{sut:?}"), r#"["Oscar"]"#);
    }

    #[test]
    fn test_extend_by_reference_clones() {
        let source = vec![1, 2];
        let mut sut: ArrayList<i32> = ArrayList::new();
        sut.extend(&source);
        sut.extend(source.iter().map(|v| v * 10));
        assert_eq!(sut, [1, 2, 10, 20]);
    }

    #[test]
    fn test_into_iterator_for_references() {
        let mut sut = ArrayList::from([1, 2, 3]);

        for value in &mut sut {
            *value += 1;
        }

        let mut sum = 0;
        for value in &sut {
            sum += value;
        }
        assert_eq!(sum, 9);
    }

    #[quickcheck]
    fn test_add_at_then_get_returns_inserted(seed: Vec<i32>, value: i32) {
        for index in 0..=seed.len() {
            let mut sut = ArrayList::from(seed.clone());
            sut.add_at(index, value).unwrap();

            assert_eq!(sut.len(), seed.len() + 1);
            assert_eq!(sut.get(index), Ok(&value));
            assert!(sut.iter().take(index).eq(seed[..index].iter()));
            assert!(sut.iter().skip(index + 1).eq(seed[index..].iter()));
        }
    }

    #[quickcheck]
    fn test_add_at_past_end_leaves_list_unmodified(seed: Vec<i32>, offset: u8) {
        let mut sut = ArrayList::from(seed.clone());
        let index = seed.len() + 1 + offset as usize;

        assert_eq!(
            sut.add_at(index, 0),
            Err(Error::IndexOutOfRange {
                index,
                len: seed.len()
            })
        );
        assert_eq!(
            sut.add_all_at(index, [0, 1]),
            Err(Error::IndexOutOfRange {
                index,
                len: seed.len()
            })
        );
        assert_eq!(sut, seed);
    }

    #[quickcheck]
    fn test_remove_at_shifts_by_one(seed: Vec<i32>) {
        for index in 0..seed.len() {
            let mut sut = ArrayList::from(seed.clone());
            assert_eq!(sut.remove_at(index), Ok(seed[index]));

            assert_eq!(sut.len(), seed.len() - 1);
            assert!(sut.iter().take(index).eq(seed[..index].iter()));
            assert!(sut.iter().skip(index).eq(seed[index + 1..].iter()));
        }
    }

    #[quickcheck]
    fn test_absent_value_has_no_index(seed: Vec<i32>) {
        let sut = ArrayList::from(seed.iter().map(|v| i64::from(*v)).collect::<Vec<_>>());
        let absent = i64::from(i32::MAX) + 1;

        assert_eq!(sut.index_of(&absent), None);
        assert_eq!(sut.last_index_of(&absent), None);
    }

    #[quickcheck]
    fn test_index_of_matches_model(seed: Vec<u8>, value: u8) {
        let sut = ArrayList::from(seed.clone());
        assert_eq!(sut.index_of(&value), seed.iter().position(|v| *v == value));
        assert_eq!(
            sut.last_index_of(&value),
            seed.iter().rposition(|v| *v == value)
        );
    }

    #[quickcheck]
    fn test_array_list_behavioural(seed: VecDeque<i32>) {
        let mut expected = seed.clone();
        let mut actual: ArrayList<i32> = seed.into_iter().collect();

        for _ in 0..32 {
            let len = expected.len();

            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());
            assert_eq!(expected.get(0), actual.get(0).ok());
            assert_eq!(expected.get(len / 2), actual.get(len / 2).ok());

            let value: i32 = rand::random();
            match rand::random_range(0..6) {
                0 => {
                    expected.push_back(value);
                    actual.add(value);
                }
                1 => {
                    expected.push_front(value);
                    actual.add_first(value);
                }
                2 => {
                    let index = rand::random_range(0..=len);
                    expected.insert(index, value);
                    actual.add_at(index, value).unwrap();
                }
                3 => {
                    let index = rand::random_range(0..=len);
                    expected.insert(index, value);
                    expected.insert(index + 1, value.wrapping_add(1));
                    actual
                        .add_all_at(index, [value, value.wrapping_add(1)])
                        .unwrap();
                }
                4 if len > 0 => {
                    let index = rand::random_range(0..len);
                    assert_eq!(expected.remove(index), actual.remove_at(index).ok());
                }
                _ => {
                    let probe = expected.get(len / 2).copied().unwrap_or(value);
                    match expected.iter().position(|v| *v == probe) {
                        Some(index) => {
                            expected.remove(index);
                            assert_eq!(actual.remove(&probe), Ok(probe));
                        }
                        None => assert_eq!(actual.remove(&probe), Err(Error::ElementNotFound)),
                    }
                }
            }

            assert!(expected.iter().eq(actual.iter()));
        }
    }
}
