use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// An append-only arena of `Value`s which can only be indexed by `Key`.
///
/// A key handed out by [`KeyedVec::push`] stays valid for as long as the arena lives; elements
/// are never removed.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    elements: Vec<Value>,
    key: PhantomData<Key>,
}

/// A typed index into a [`KeyedVec`].
pub trait StorageKey: Copy {
    fn index(self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        KeyedVec {
            elements: Vec::new(),
            key: PhantomData,
        }
    }
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        KeyedVec {
            elements: self.elements.clone(),
            key: PhantomData,
        }
    }
}

impl<Key, Value> FromIterator<Value> for KeyedVec<Key, Value> {
    fn from_iter<Iter: IntoIterator<Item = Value>>(iter: Iter) -> Self {
        KeyedVec {
            elements: iter.into_iter().collect(),
            key: PhantomData,
        }
    }
}

impl<Key, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.elements.iter()
    }

    /// Consumes the arena, returning the values in key order.
    pub fn into_vec(self) -> Vec<Value> {
        self.elements
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    /// Appends `value` and returns the key under which it is stored.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.elements.len());
        self.elements.push(value);
        key
    }

    /// Returns [`None`] if `key` was not handed out by this arena.
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }

    pub fn key_values(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.keys().zip(self.elements.iter())
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// Creates an arena which holds `value` for each of the first `len` keys.
    pub fn filled(len: usize, value: Value) -> Self {
        KeyedVec {
            elements: vec![value; len],
            key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: Key) -> &Value {
        &self.elements[key.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, key: Key) -> &mut Value {
        &mut self.elements[key.index()]
    }
}
