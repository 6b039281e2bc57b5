/// Decides whether two values should be treated as the same element.
///
/// `ArrayList` consults its equivalence for every value based lookup
/// (`index_of`, `last_index_of`, `contains`, `remove`). The default,
/// [`Structural`], compares full contents rather than identity.
///
/// Any `Fn(&T, &T) -> bool` closure is an equivalence as well.
///
/// # Example
/// ```rust
/// use list_utils::ArrayList;
///
/// let mut list = ArrayList::with_equivalence(|a: &String, b: &String| {
///     a.eq_ignore_ascii_case(b)
/// });
/// list.add("Oscar".to_string());
///
/// assert_eq!(list.index_of(&"OSCAR".to_string()), Some(0));
/// ```
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` when `a` and `b` count as the same element.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Deep structural equality, delegated to `PartialEq`.
///
/// Owned nested data (`Vec`, `String`, `Box`, structs and enums deriving
/// `PartialEq`) compares recursively by content.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Structural;

impl<T> Equivalence<T> for Structural
where
    T: PartialEq + ?Sized,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T, F> Equivalence<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
