use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Values with an identity notion.
///
/// Reference kinds return the address they point at. Value kinds return
/// `None`, which identity checks treat as a contract violation rather
/// than a mismatch. The kind belongs to the type, so an empty `Option`
/// of a reference kind is a null address.
pub trait Reference {
    /// Whether the type is a reference kind
    const POINTER: bool = true;

    fn address(&self) -> Option<*const ()>;
}

// Fat pointers are reduced to their data pointer, so two views of the same
// storage starting at the same element are identical whatever their length.
impl<T: ?Sized> Reference for &T {
    fn address(&self) -> Option<*const ()> {
        Some((*self as *const T).cast())
    }
}

impl<T: ?Sized> Reference for &mut T {
    fn address(&self) -> Option<*const ()> {
        Some((&**self as *const T).cast())
    }
}

impl<T: ?Sized> Reference for *const T {
    fn address(&self) -> Option<*const ()> {
        Some(self.cast())
    }
}

impl<T: ?Sized> Reference for *mut T {
    fn address(&self) -> Option<*const ()> {
        Some(self.cast_const().cast())
    }
}

impl<T: ?Sized> Reference for NonNull<T> {
    fn address(&self) -> Option<*const ()> {
        Some(self.as_ptr().cast_const().cast())
    }
}

impl<T: ?Sized> Reference for Rc<T> {
    fn address(&self) -> Option<*const ()> {
        Some(Rc::as_ptr(self).cast())
    }
}

impl<T: ?Sized> Reference for Arc<T> {
    fn address(&self) -> Option<*const ()> {
        Some(Arc::as_ptr(self).cast())
    }
}

impl<R: Reference> Reference for Option<R> {
    const POINTER: bool = R::POINTER;

    fn address(&self) -> Option<*const ()> {
        match self {
            Some(inner) => inner.address(),
            None if R::POINTER => Some(std::ptr::null()),
            None => None,
        }
    }
}

macro_rules! impl_value_kind {
    ($($t:ty),* $(,)?) => {$(
        impl Reference for $t {
            const POINTER: bool = false;

            fn address(&self) -> Option<*const ()> {
                None
            }
        }
    )*};
}

impl_value_kind!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
);

/// Whether both values are references to the same address.
///
/// Returns `None` when either side is not a reference kind.
pub fn same<T: Reference>(actual: &T, expected: &T) -> Option<bool> {
    match (actual.address(), expected.address()) {
        (Some(a), Some(e)) => Some(std::ptr::eq(a, e)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_variable() {
        let v = 1;
        let p = &v;
        assert_eq!(same(&&v, &&v), Some(true));
        assert_eq!(same(&p, &&v), Some(true));
    }

    #[test]
    fn test_distinct_allocations() {
        let a = Box::new(1);
        let b = Box::new(1);
        assert_eq!(same(&&*a, &&*b), Some(false));
    }

    #[test]
    fn test_slice_views() {
        let s = vec![1, 2, 3];
        assert_eq!(same(&&s[..], &&s[..1]), Some(true));
        assert_eq!(same(&&s[..], &&s[1..]), Some(false));
    }

    #[test]
    fn test_shared_pointers() {
        let rc = Rc::new("x".to_string());
        assert_eq!(same(&rc, &Rc::clone(&rc)), Some(true));
        assert_eq!(same(&rc, &Rc::new("x".to_string())), Some(false));

        let arc: Arc<[u8]> = Arc::from(&b"abc"[..]);
        assert_eq!(same(&arc, &Arc::clone(&arc)), Some(true));
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(same(&123, &123), None);
        assert_eq!(same(&"a".to_string(), &"a".to_string()), None);
        assert_eq!(same::<Option<i32>>(&Some(1), &Some(1)), None);
        assert_eq!(same::<Option<String>>(&None, &None), None);
    }

    #[test]
    fn test_empty_options_are_null() {
        let v = 7;
        assert_eq!(same::<Option<&i32>>(&None, &None), Some(true));
        assert_eq!(same(&None, &Some(&v)), Some(false));
        assert_eq!(same(&None::<*const i32>, &Some(std::ptr::null())), Some(true));
    }
}
