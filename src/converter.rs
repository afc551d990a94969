//! Numeral conversion between decimal, binary and hexadecimal.
//!
//! Values are parsed into an arbitrary-precision [`BigInt`], so inputs are
//! never truncated at machine word size.
//!
//! Accepted input grammar is `[+-]? digit+`, where every digit must be valid
//! in the input radix. Hex digits are case-insensitive. Whitespace, `_`
//! separators and `0x`/`0b` prefixes are rejected.
//!
//! ```text
//! convert("1010", "bin", "dec") => "10"
//! convert("-FF",  "hex", "bin") => "-11111111"
//! ```

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use strum::{Display, EnumString};

use crate::error::ConvertError;

/// Radix named by a format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Radix {
    /// Base 10.
    #[strum(serialize = "dec")]
    Dec,
    /// Base 2.
    #[strum(serialize = "bin")]
    Bin,
    /// Base 16.
    #[strum(serialize = "hex")]
    Hex,
}

impl Radix {
    /// All supported radixes, in tag order of the usage guide.
    pub const ALL: [Radix; 3] = [Radix::Dec, Radix::Bin, Radix::Hex];

    /// Numeric base of this radix.
    pub fn base(self) -> u32 {
        match self {
            Radix::Dec => 10,
            Radix::Bin => 2,
            Radix::Hex => 16,
        }
    }
}

/// Parse `value` as a signed numeral in `radix`.
pub fn parse_numeral(value: &str, radix: Radix) -> Result<BigInt, ConvertError> {
    let invalid = || ConvertError::ParseError {
        value: value.to_string(),
        format: radix.to_string(),
    };

    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &value[1..]),
        Some(b'+') => (Sign::Plus, &value[1..]),
        _ => (Sign::Plus, value),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(invalid());
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix.base()).ok_or_else(invalid)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Render `n` in `radix`: lowercase, unprefixed, minimal digits.
pub fn render_numeral(n: &BigInt, radix: Radix) -> String {
    n.to_str_radix(radix.base())
}

/// Convert `value` from the radix named by `input_format` to the one named
/// by `output_format`.
///
/// Both tags are resolved before the value is parsed.
pub fn convert(value: &str, input_format: &str, output_format: &str) -> Result<String, ConvertError> {
    let input = Radix::from_str(input_format)
        .map_err(|_| ConvertError::InvalidInputFormat(input_format.to_string()))?;
    let output = Radix::from_str(output_format)
        .map_err(|_| ConvertError::InvalidOutputFormat(output_format.to_string()))?;

    let n = parse_numeral(value, input)?;
    Ok(render_numeral(&n, output))
}
