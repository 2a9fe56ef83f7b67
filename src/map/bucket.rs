// MIT License
//
// Copyright (c) 2020 Gregory Meyer
//
// Permission is hereby granted, free of charge, to any person
// obtaining a copy of this software and associated documentation files
// (the "Software"), to deal in the Software without restriction,
// including without limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS
// BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN
// ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{mem, slice};

/// One stored key-value pair.
#[derive(Debug)]
pub(crate) struct Entry<V> {
    key: Box<[u8]>,
    value: V,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: &[u8], value: V) -> Entry<V> {
        Entry {
            key: key.into(),
            value,
        }
    }

    pub(crate) fn key(&self) -> &[u8] {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }
}

/// The chain of entries whose keys map to one bucket index.
///
/// Entries are kept in insertion order and keys are unique within a chain.
/// An empty chain is the "absent" state; `Vec::new` does not allocate, so a
/// bucket costs nothing until its first insertion.
#[derive(Debug)]
pub(crate) struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Bucket<V> {
    pub(crate) fn new() -> Bucket<V> {
        Bucket {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, key: &[u8]) -> Option<&Entry<V>> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    /// Replaces the value of the entry with a matching key, or appends a new
    /// entry to the end of the chain. Returns the replaced value, if any.
    pub(crate) fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        match self.entries.iter_mut().find(|entry| entry.key() == key) {
            Some(entry) => Some(entry.replace_value(value)),
            None => {
                self.entries.push(Entry::new(key, value));

                None
            }
        }
    }

    pub(crate) fn entries(&self) -> slice::Iter<'_, Entry<V>> {
        self.entries.iter()
    }
}
