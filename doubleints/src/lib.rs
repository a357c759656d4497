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

//! Carries `f64` values through channels that only hold 32-bit integers.
//!
//! A double is split into the low and high halves of its bit pattern and
//! ligated back bit for bit.

pub mod pair;
pub mod splitter;

pub use pair::SplitPair;
pub use splitter::{join_bits, ligate, split, split_bits, LOW_MASK};
