use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::json;

/// The closed set of shapes a dynamic value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Absent,
    Scalar,
    Text,
    Sequence,
    Mapping,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Absent,
            Value::Bool(_) | Value::Number(_) => Shape::Scalar,
            Value::String(_) => Shape::Text,
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Mapping,
        }
    }

    pub fn is_iterable(self) -> bool {
        matches!(self, Shape::Text | Shape::Sequence | Shape::Mapping)
    }
}

/// Outcome of a containment lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    Missing,
    NotIterable,
}

impl Lookup {
    fn from_found(found: bool) -> Self {
        if found { Lookup::Found } else { Lookup::Missing }
    }
}

/// Values with an element count
pub trait Measure {
    /// `None` when the value has no notion of length
    fn measure(&self) -> Option<usize>;
}

/// Values that can be searched for an element of type `E`
pub trait Container<E: ?Sized> {
    fn lookup(&self, element: &E) -> Lookup;
}

// Strings

impl Measure for str {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl Measure for String {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<E: AsRef<str> + ?Sized> Container<E> for str {
    fn lookup(&self, element: &E) -> Lookup {
        Lookup::from_found(self.contains(element.as_ref()))
    }
}

impl<E: AsRef<str> + ?Sized> Container<E> for String {
    fn lookup(&self, element: &E) -> Lookup {
        self.as_str().lookup(element)
    }
}

// Sequences and sets

macro_rules! impl_scan {
    ($([$($g:ident),*] $t:ty),* $(,)?) => {$(
        impl<$($g),*> Measure for $t {
            fn measure(&self) -> Option<usize> {
                Some(self.len())
            }
        }

        impl<$($g),*> Container<T> for $t
        where
            T: PartialEq,
        {
            fn lookup(&self, element: &T) -> Lookup {
                Lookup::from_found(self.iter().any(|item| item == element))
            }
        }
    )*};
}

impl_scan!(
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
);

impl<T, const N: usize> Measure for [T; N] {
    fn measure(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T: PartialEq, const N: usize> Container<T> for [T; N] {
    fn lookup(&self, element: &T) -> Lookup {
        self.as_slice().lookup(element)
    }
}

// Mappings: membership is tested against values, never keys

impl<K, V, S> Measure for HashMap<K, V, S> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V: PartialEq, S> Container<V> for HashMap<K, V, S> {
    fn lookup(&self, element: &V) -> Lookup {
        Lookup::from_found(self.values().any(|value| value == element))
    }
}

impl<K, V> Measure for BTreeMap<K, V> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V: PartialEq> Container<V> for BTreeMap<K, V> {
    fn lookup(&self, element: &V) -> Lookup {
        Lookup::from_found(self.values().any(|value| value == element))
    }
}

// Wrappers

impl<C: Measure> Measure for Option<C> {
    fn measure(&self) -> Option<usize> {
        self.as_ref().and_then(Measure::measure)
    }
}

impl<E: ?Sized, C: Container<E>> Container<E> for Option<C> {
    fn lookup(&self, element: &E) -> Lookup {
        match self {
            Some(inner) => inner.lookup(element),
            None => Lookup::NotIterable,
        }
    }
}

macro_rules! impl_deref {
    ($($t:ty),* $(,)?) => {$(
        impl<C: Measure + ?Sized> Measure for $t {
            fn measure(&self) -> Option<usize> {
                (**self).measure()
            }
        }

        impl<E: ?Sized, C: Container<E> + ?Sized> Container<E> for $t {
            fn lookup(&self, element: &E) -> Lookup {
                (**self).lookup(element)
            }
        }
    )*};
}

impl_deref!(&C, &mut C, Box<C>, Rc<C>, Arc<C>);

// Dynamic JSON

impl Measure for Value {
    fn measure(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Array(items) => Some(items.len()),
            Value::Object(map) => Some(map.len()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }
}

impl Container<Value> for Value {
    fn lookup(&self, element: &Value) -> Lookup {
        match self {
            Value::String(text) => match element {
                Value::String(needle) => Lookup::from_found(text.contains(needle.as_str())),
                _ => Lookup::Missing,
            },
            Value::Array(items) => {
                Lookup::from_found(items.iter().any(|item| json::equivalent(item, element)))
            }
            Value::Object(map) => {
                Lookup::from_found(map.values().any(|value| json::equivalent(value, element)))
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => Lookup::NotIterable,
        }
    }
}
