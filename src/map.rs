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

//! A hash map over byte-sequence keys, implemented with separate chaining
//! across a fixed number of buckets.

mod bucket;


use crate::index::{bucket_index, DefaultDigest, BUCKET_COUNT};
use bucket::{Bucket, Entry};

use std::{array, fmt, marker::PhantomData};

use sha2::digest::Digest;
use thiserror::Error;

/// The error type for [`insert`].
///
/// No value of this type can currently be constructed: insertion succeeds
/// for any key and value, bounded only by available memory. The type exists
/// so that the signature of [`insert`] already carries an error channel if a
/// bounded-capacity or fallible-allocation mode is introduced, and it is
/// non-exhaustive so that adding such a failure is not a breaking change.
/// Callers should not assume insertion is infallible at the interface level.
///
/// [`insert`]: HashMap::insert
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InsertError {}

/// A hash map over byte-sequence keys, implemented with separate chaining
/// across a fixed array of [`BUCKET_COUNT`] buckets.
///
/// Keys are raw byte sequences of any length, including empty. Each key is
/// assigned to a bucket by [`bucket_index`]: its digest is interpreted as an
/// unsigned big-endian integer and reduced modulo the bucket count. All keys
/// whose digests land on the same index share that bucket's chain, in
/// insertion order. The bucket array never grows or shrinks, so memory
/// overhead is bounded and predictable; long chains degrade lookups to a
/// linear scan of the colliding keys.
///
/// The digest algorithm defaults to [`DefaultDigest`] and can be chosen on a
/// per-`HashMap` basis using [`with_digest`].
///
/// Mutation requires `&mut self`, so a `HashMap` shared between threads is
/// read-only; callers that need shared mutation must wrap the table in a
/// lock.
///
/// [`bucket_index`]: crate::index::bucket_index
/// [`BUCKET_COUNT`]: crate::index::BUCKET_COUNT
/// [`DefaultDigest`]: crate::index::DefaultDigest
/// [`with_digest`]: #method.with_digest
pub struct HashMap<V, D: Digest = DefaultDigest> {
    buckets: [Bucket<V>; BUCKET_COUNT],
    len: usize,
    digest: PhantomData<D>,
}

impl<V> HashMap<V, DefaultDigest> {
    /// Creates an empty `HashMap`.
    ///
    /// All buckets start empty. No hashing is performed and no chain storage
    /// is allocated until the first insertion touches a bucket.
    pub fn new() -> HashMap<V, DefaultDigest> {
        HashMap::with_digest()
    }
}

impl<V, D: Digest> HashMap<V, D> {
    /// Creates an empty `HashMap` that will derive bucket indices using the
    /// digest algorithm `D`.
    ///
    /// Two tables using different digest algorithms will distribute the same
    /// keys differently, but every operation's contract is independent of
    /// the algorithm chosen.
    pub fn with_digest() -> HashMap<V, D> {
        HashMap {
            buckets: array::from_fn(|_| Bucket::new()),
            len: 0,
            digest: PhantomData,
        }
    }

    /// Returns the number of entries in this map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if this map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// The addressed bucket's chain is scanned in insertion order; the first
    /// entry whose key is byte-for-byte equal to `key` is returned. [`None`]
    /// is the normal outcome for a key that is not present, not an error.
    ///
    /// [`None`]: https://doc.rust-lang.org/std/option/enum.Option.html#variant.None
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.buckets[bucket_index::<D>(key)]
            .get(key)
            .map(Entry::value)
    }

    /// Returns references to the stored key and the value associated with
    /// `key`.
    pub fn get_key_value(&self, key: &[u8]) -> Option<(&[u8], &V)> {
        self.buckets[bucket_index::<D>(key)]
            .get(key)
            .map(|entry| (entry.key(), entry.value()))
    }

    /// Returns true if this map contains an entry for `key`.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the map, returning the value previously
    /// associated with `key`.
    ///
    /// If `key` was already present, its value is replaced and the previous
    /// value is returned: last write wins, and the map still holds exactly
    /// one entry for `key`. Otherwise a new entry is appended to the end of
    /// the addressed bucket's chain and `Ok(None)` is returned. Afterwards,
    /// [`get`] on the same key observes the new value.
    ///
    /// Insertion cannot currently fail; see [`InsertError`] for why the
    /// result channel is nevertheless part of the signature.
    ///
    /// [`get`]: #method.get
    pub fn insert(&mut self, key: &[u8], value: V) -> Result<Option<V>, InsertError> {
        let previous = self.buckets[bucket_index::<D>(key)].insert(key, value);

        if previous.is_none() {
            self.len += 1;
        }

        Ok(previous)
    }

    /// Returns an iterator over all entries in the map.
    ///
    /// Entries are yielded bucket by bucket, in insertion order within each
    /// bucket. The order in which buckets are visited is an artifact of the
    /// index derivation and carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(Bucket::entries)
            .map(|entry| (entry.key(), entry.value()))
    }

    /// Returns the number of entries in each bucket.
    ///
    /// The lengths sum to [`len`]. Useful for inspecting how evenly the
    /// digest algorithm spreads a given key population.
    ///
    /// [`len`]: #method.len
    pub fn chain_lengths(&self) -> [usize; BUCKET_COUNT] {
        array::from_fn(|index| self.buckets[index].len())
    }
}

impl<V, D: Digest> Default for HashMap<V, D> {
    fn default() -> HashMap<V, D> {
        HashMap::with_digest()
    }
}

impl<V: fmt::Debug, D: Digest> fmt::Debug for HashMap<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(key, value)| (String::from_utf8_lossy(key), value)),
            )
            .finish()
    }
}
