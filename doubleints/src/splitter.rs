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

//! Splits an `f64` into its two 32-bit halves and joins them back.
//!
//! Every conversion here is a bit reinterpretation. Floats are never cast
//! numerically, so NaN payloads, signed zeros and infinities survive.

/// Mask selecting the low 32 bits of a 64-bit pattern.
pub const LOW_MASK: u64 = u32::MAX as u64;

/// Splits a 64-bit pattern into `(low, high)` 32-bit groups.
pub const fn split_bits(bits: u64) -> (u32, u32) {
    let low = bits & LOW_MASK;
    let high = (bits >> 32) & LOW_MASK;
    (low as u32, high as u32)
}

/// Joins `(low, high)` 32-bit groups into a 64-bit pattern.
pub const fn join_bits(low: u32, high: u32) -> u64 {
    ((high as u64) << 32) | (low as u64 & LOW_MASK)
}

/// Splits `value` into `(low, high)`.
///
/// `low` holds bits [0, 32) of the value's bit pattern and `high` bits
/// [32, 64). A half whose top bit is set comes back as a negative `i32`
/// with the same bits.
///
/// # Examples
///
/// ```
/// let (low, high) = doubleints::split(1.0);
/// assert_eq!(low, 0);
/// assert_eq!(high, 0x3FF0_0000);
/// ```
pub fn split(value: f64) -> (i32, i32) {
    let (low, high) = split_bits(value.to_bits());
    (low as i32, high as i32)
}

/// Rebuilds the `f64` whose bit pattern is `high:low`.
///
/// Both halves are taken as raw 32-bit groups. A negative `low` does not
/// sign extend into the high half.
///
/// # Examples
///
/// ```
/// let value = doubleints::ligate(0, 0x3FF0_0000);
/// assert_eq!(value, 1.0);
/// ```
pub fn ligate(low: i32, high: i32) -> f64 {
    f64::from_bits(join_bits(low as u32, high as u32))
}
