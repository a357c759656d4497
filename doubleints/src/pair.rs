/*
Copyright 2024 NetApp, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    https://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use crate::splitter::{join_bits, ligate, split, split_bits};
use bincode::config::{self, Configuration, Fixint, LittleEndian};
use bincode::error::{DecodeError, EncodeError};
use bincode::{Decode, Encode};
use std::fmt::{Display, Formatter};

/// Bincode settings for a pair. Fixed width so each half always takes 4 bytes.
pub struct BinConfig;

impl BinConfig {
    pub fn get() -> Configuration<LittleEndian, Fixint> {
        // Little endian and fixed int encoding
        config::standard().with_fixed_int_encoding()
    }
}

/// The two 32-bit halves of an `f64` bit pattern.
#[derive(Encode, Decode, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitPair {
    /// Bits [0, 32)
    pub low: i32,
    /// Bits [32, 64)
    pub high: i32,
}

impl SplitPair {
    pub fn new(low: i32, high: i32) -> Self {
        SplitPair { low, high }
    }

    /// Builds a pair straight from a 64-bit pattern
    pub fn from_bits(bits: u64) -> Self {
        let (low, high) = split_bits(bits);
        SplitPair {
            low: low as i32,
            high: high as i32,
        }
    }

    pub fn to_bits(&self) -> u64 {
        join_bits(self.low_bits(), self.high_bits())
    }

    pub fn low_bits(&self) -> u32 {
        self.low as u32
    }

    pub fn high_bits(&self) -> u32 {
        self.high as u32
    }

    /// Rebuilds the double this pair was split from
    pub fn to_f64(&self) -> f64 {
        ligate(self.low, self.high)
    }

    /// Encodes the pair as 8 bytes, low half first
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        bincode::encode_to_vec(self, BinConfig::get())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (pair, _) = bincode::decode_from_slice(bytes, BinConfig::get())?;
        Ok(pair)
    }
}

impl From<f64> for SplitPair {
    fn from(value: f64) -> Self {
        let (low, high) = split(value);
        SplitPair { low, high }
    }
}

impl From<SplitPair> for f64 {
    fn from(pair: SplitPair) -> Self {
        pair.to_f64()
    }
}

impl From<[i32; 2]> for SplitPair {
    fn from(halves: [i32; 2]) -> Self {
        SplitPair::new(halves[0], halves[1])
    }
}

impl From<SplitPair> for [i32; 2] {
    fn from(pair: SplitPair) -> Self {
        [pair.low, pair.high]
    }
}

impl From<(i32, i32)> for SplitPair {
    fn from((low, high): (i32, i32)) -> Self {
        SplitPair::new(low, high)
    }
}

impl From<SplitPair> for (i32, i32) {
    fn from(pair: SplitPair) -> Self {
        (pair.low, pair.high)
    }
}

impl Display for SplitPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "low=0x{:08x} high=0x{:08x}",
            self.low_bits(),
            self.high_bits()
        )
    }
}
