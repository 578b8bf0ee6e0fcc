//! Side-effect free checks behind every assertion.
//!
//! These functions never report anything; they only answer the question.
//! Use them directly when a plain `bool` is all that is needed.

pub mod chain;
pub mod container;
pub mod json;
pub mod numeric;
pub mod reference;

pub use chain::{Joined, error_is, join};
pub use container::{Container, Lookup, Measure, Shape};
pub use numeric::{Numeric, equal_delta};
pub use reference::{Reference, same};

use std::error::Error as StdError;

/// Structural equality
pub fn equal<T: PartialEq + ?Sized>(actual: &T, expected: &T) -> bool {
    actual == expected
}

/// Element count, or `None` when the value has no length
pub fn length<S: Measure + ?Sized>(object: &S) -> Option<usize> {
    object.measure()
}

/// Containment lookup
pub fn contains<S, E>(object: &S, element: &E) -> Lookup
where
    S: Container<E> + ?Sized,
    E: ?Sized,
{
    object.lookup(element)
}

/// Iterate the plain `source()` chain of an error, starting with itself
pub fn sources<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equal_is_structural() {
        assert!(equal(&vec![1, 2, 3], &vec![1, 2, 3]));
        assert!(!equal(&vec![1, 2, 3], &vec![1, 2]));
        assert!(equal(&Box::new(1), &Box::new(1)));
        assert!(equal::<Option<i32>>(&None, &None));
        assert!(!equal(&Some(0), &None));

        let a: HashMap<&str, i32> = [("a", 1), ("b", 2)].into();
        let b: HashMap<&str, i32> = [("b", 2), ("a", 1)].into();
        assert!(equal(&a, &b));
    }

    #[test]
    fn test_equal_unsized() {
        assert!(equal("Hello World", "Hello World"));
        assert!(!equal("Hello World", "Hello World!"));
        assert!(equal(&b"abc"[..], &b"abc"[..]));
    }

    #[test]
    fn test_length_and_contains() {
        assert_eq!(length("Hello"), Some(5));
        assert_eq!(length(&[1, 2, 3][..]), Some(3));
        assert_eq!(contains(&vec![1, 2, 3], &2), Lookup::Found);
        assert_eq!(contains("Hello", "x"), Lookup::Missing);
    }

    #[test]
    fn test_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::other("inner"));
        let messages: Vec<String> = sources(&err).map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["outer", "inner"]);
    }
}
