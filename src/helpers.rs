//! Pure helpers over any [`Sequence`].
//!
//! None of these mutate their input; each one builds and returns a new `Vec`.
//! For heterogeneous, runtime-typed data see [`crate::dynamic`].

use crate::{Equivalence, Error, Result, Sequence, Structural};

/// Checks whether `seq` holds an element structurally equal to `value`.
///
/// # Example
/// ```rust
/// use list_utils::helpers::contains;
///
/// assert!(contains(&["a", "b"], &"b"));
/// assert!(!contains(&["a", "b"], &"c"));
/// ```
pub fn contains<S>(seq: &S, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    contains_by(seq, value, &Structural)
}

/// Like [`contains`], comparing with the given [`Equivalence`].
pub fn contains_by<S, E>(seq: &S, value: &S::Item, equivalence: &E) -> bool
where
    S: Sequence + ?Sized,
    E: Equivalence<S::Item> + ?Sized,
{
    seq.iter()
        .any(|element| equivalence.equivalent(element, value))
}

/// Membership test that reports absence as an error.
///
/// # Errors
/// - [`Error::ElementNotFound`] if no element of `seq` equals `value`.
///
/// # Example
/// ```rust
/// use list_utils::Error;
/// use list_utils::helpers::is_included;
///
/// assert_eq!(is_included(&vec![1, 2, 3], &2), Ok(()));
/// assert_eq!(is_included(&vec![1, 2, 3], &4), Err(Error::ElementNotFound));
/// ```
pub fn is_included<S>(seq: &S, value: &S::Item) -> Result<()>
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    if contains(seq, value) {
        Ok(())
    } else {
        Err(Error::ElementNotFound)
    }
}

/// Applies `f` to every element, returning the results in order.
///
/// # Example
/// ```rust
/// use list_utils::helpers::map;
///
/// assert_eq!(map(&["a", "bb", "ccc"], |s| s.len()), [1, 2, 3]);
/// ```
pub fn map<S, U, F>(seq: &S, f: F) -> Vec<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Example
/// ```rust
/// use list_utils::helpers::select;
///
/// assert_eq!(select(&[1, 2, 3, 4, 5], |v| v % 2 == 1), [1, 3, 5]);
/// ```
pub fn select<S, F>(seq: &S, mut predicate: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    seq.iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Builds the Cartesian product of `seqs`.
///
/// Tuples come out in lexicographic order: the first sequence is the most
/// significant position and the last one varies fastest. The result holds the
/// product of all input lengths, so it is empty when any input is empty or when
/// no inputs are given.
///
/// # Example
/// ```rust
/// use list_utils::helpers::combination;
///
/// assert_eq!(
///     combination(&[vec![1, 2], vec![3, 4]]),
///     [[1, 3], [1, 4], [2, 3], [2, 4]]
/// );
/// assert_eq!(combination(&[vec![1, 2]]), [[1], [2]]);
/// assert!(combination(&[Vec::<i32>::new()]).is_empty());
/// ```
pub fn combination<S>(seqs: &[S]) -> Vec<Vec<S::Item>>
where
    S: Sequence,
    S::Item: Clone,
{
    if seqs.is_empty() || seqs.iter().any(Sequence::is_empty) {
        return Vec::new();
    }

    let total = seqs.iter().map(Sequence::len).product();
    let mut tuples = Vec::with_capacity(total);
    let mut cursor = vec![0usize; seqs.len()];

    loop {
        tuples.push(
            seqs.iter()
                .zip(&cursor)
                .filter_map(|(seq, &index)| seq.get(index))
                .cloned()
                .collect(),
        );

        // odometer step, last position first
        let mut position = seqs.len();
        loop {
            if position == 0 {
                debug_assert_eq!(tuples.len(), total);
                return tuples;
            }
            position -= 1;

            cursor[position] += 1;
            if cursor[position] < seqs[position].len() {
                break;
            }
            cursor[position] = 0;
        }
    }
}

/// Drops every absent entry, keeping the present ones in order.
///
/// # Example
/// ```rust
/// use list_utils::helpers::compact;
///
/// assert_eq!(compact(&[Some(1), None, Some(2), None, Some(3)]), [1, 2, 3]);
/// ```
pub fn compact<S, T>(seq: &S) -> Vec<T>
where
    S: Sequence<Item = Option<T>> + ?Sized,
    T: Clone,
{
    seq.iter().flatten().cloned().collect()
}
