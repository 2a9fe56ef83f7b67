// MIT License
//
// Copyright (c) 2019 Gregory Meyer
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

use crate::index::DefaultDigest;
use crate::map::{HashMap, InsertError};

use sha2::digest::Digest;

pub struct HashSet<D: Digest = DefaultDigest> {
    map: HashMap<(), D>,
}

impl HashSet<DefaultDigest> {
    pub fn new() -> HashSet<DefaultDigest> {
        HashSet::with_digest()
    }
}

impl<D: Digest> HashSet<D> {
    pub fn with_digest() -> HashSet<D> {
        HashSet {
            map: HashMap::with_digest(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }

    pub fn insert(&mut self, key: &[u8]) -> Result<bool, InsertError> {
        self.map.insert(key, ()).map(|previous| previous.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.map.iter().map(|(key, _)| key)
    }
}
