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

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid floating point value: {0}")]
    InvalidFloat(String),

    #[error("Invalid 32-bit integer: {0}")]
    InvalidInteger(String),

    #[error("Hex literal {literal} is wider than {max_digits} digits")]
    HexTooWide { literal: String, max_digits: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Returns the digits after a `0x` prefix, if there is one
fn hex_digits(literal: &str) -> Option<&str> {
    literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
}

fn check_width(literal: &str, digits: &str, max_digits: usize) -> Result<()> {
    if digits.len() > max_digits {
        return Err(Error::HexTooWide {
            literal: literal.to_string(),
            max_digits,
        });
    }
    Ok(())
}

/// parse_value reads a double either as a decimal float (`inf`, `NaN` and
/// `-0` included) or as a raw 64-bit pattern written `0x...`.
pub fn parse_value(literal: &str) -> Result<f64> {
    let literal = literal.trim();
    match hex_digits(literal) {
        Some(digits) => {
            check_width(literal, digits, 16)?;
            let bits = u64::from_str_radix(digits, 16)
                .map_err(|_| Error::InvalidFloat(literal.to_string()))?;
            Ok(f64::from_bits(bits))
        }
        None => literal
            .parse::<f64>()
            .map_err(|_| Error::InvalidFloat(literal.to_string())),
    }
}

/// parse_half reads one half of a pair, either as a decimal `i32` or as raw
/// bits written `0x...` (so `0xFFFFFFFF` is -1).
pub fn parse_half(literal: &str) -> Result<i32> {
    let literal = literal.trim();
    match hex_digits(literal) {
        Some(digits) => {
            check_width(literal, digits, 8)?;
            let bits = u32::from_str_radix(digits, 16)
                .map_err(|_| Error::InvalidInteger(literal.to_string()))?;
            Ok(bits as i32)
        }
        None => literal
            .parse::<i32>()
            .map_err(|_| Error::InvalidInteger(literal.to_string())),
    }
}
