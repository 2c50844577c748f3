//! Integer to Roman numeral conversion.
//!
//! The narrow routine only knows I, V and X and is exact for 1..=10.
//! [`ConversionMode`] decides what happens outside that range.

use crate::domain::model::ConversionMode;
use crate::utils::error::{Result, RomanError};

pub const STRICT_MIN: i64 = 1;
pub const STRICT_MAX: i64 = 10;
/// Legacy output grows linearly with the input, so it stops here.
pub const LEGACY_MAX: i64 = 1_000;
pub const STANDARD_MIN: i64 = 1;
pub const STANDARD_MAX: i64 = 3_999;

const STANDARD_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumeralConverter {
    mode: ConversionMode,
}

impl NumeralConverter {
    pub fn new(mode: ConversionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// Convert `number` under this converter's mode.
    ///
    /// All modes agree on 1..=10. Outside their domain they return
    /// [`RomanError::OutOfRange`] with the bounds of that mode.
    pub fn convert(&self, number: i64) -> Result<String> {
        match self.mode {
            ConversionMode::Strict => {
                check_range(number, STRICT_MIN, STRICT_MAX)?;
                Ok(narrow_numeral(number))
            }
            ConversionMode::Legacy => {
                if number > LEGACY_MAX {
                    return Err(RomanError::OutOfRange {
                        value: number,
                        min: i64::MIN,
                        max: LEGACY_MAX,
                    });
                }
                Ok(narrow_numeral(number))
            }
            ConversionMode::Standard => {
                check_range(number, STANDARD_MIN, STANDARD_MAX)?;
                Ok(standard_numeral(number))
            }
        }
    }
}

/// Convert `number` in strict mode (1..=10).
pub fn convert(number: i64) -> Result<String> {
    NumeralConverter::default().convert(number)
}

fn check_range(number: i64, min: i64, max: i64) -> Result<()> {
    if number < min || number > max {
        return Err(RomanError::OutOfRange {
            value: number,
            min,
            max,
        });
    }
    Ok(())
}

// 9 and 4 are bumped to 10 and 5 after emitting their leading I.
fn narrow_numeral(mut number: i64) -> String {
    let mut numeral = String::new();

    if number >= 9 {
        if number < 10 {
            numeral.push('I');
            number += 1;
        }
        numeral.push('X');
        number -= 10;
    }

    if number >= 4 {
        if number < 5 {
            numeral.push('I');
            number += 1;
        }
        numeral.push('V');
        number -= 5;
    }

    if number > 0 {
        numeral.push_str(&"I".repeat(number as usize));
    }

    numeral
}

fn standard_numeral(mut number: i64) -> String {
    let mut numeral = String::new();
    for (value, symbol) in STANDARD_TABLE {
        while number >= value {
            numeral.push_str(symbol);
            number -= value;
        }
    }
    numeral
}
