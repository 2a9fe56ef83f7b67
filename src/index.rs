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

//! Derivation of bucket indices from byte-sequence keys.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use sha2::{digest::Digest, Sha256};

/// The number of buckets in a [`HashMap`].
///
/// Fixed for the lifetime of a table; there is no resizing or rehashing.
///
/// [`HashMap`]: crate::map::HashMap
pub const BUCKET_COUNT: usize = 16;

/// Default digest algorithm for `HashMap`.
///
/// This is currently [SHA-256]. A cryptographic digest is heavier than the
/// usual fast table hashes, but its avalanche property gives an effectively
/// uniform spread over the buckets and leaves no room for attacker-chosen
/// key clustering. Any other implementation of [`Digest`] may be substituted
/// on a per-`HashMap` basis using [`with_digest`]; the index derivation
/// contract below holds regardless of the algorithm chosen.
///
/// [SHA-256]: https://docs.rs/sha2
/// [`Digest`]: https://docs.rs/digest/latest/digest/trait.Digest.html
/// [`with_digest`]: crate::map::HashMap::with_digest
pub type DefaultDigest = Sha256;

/// Maps `key` to a bucket index in `[0, BUCKET_COUNT)`.
///
/// The digest of `key` is interpreted as an unsigned big-endian integer and
/// reduced modulo [`BUCKET_COUNT`]; the remainder is the index. The mapping
/// is a pure function: the same key always yields the same index for a given
/// digest algorithm, and every byte sequence, including the empty one, has
/// an index.
pub fn bucket_index<D: Digest>(key: &[u8]) -> usize {
    let digest = D::digest(key);
    let digest_int = BigUint::from_bytes_be(digest.as_slice());

    let index = digest_int % BUCKET_COUNT as u64;

    // the remainder is strictly less than BUCKET_COUNT
    index.to_usize().expect("remainder must fit in usize")
}
