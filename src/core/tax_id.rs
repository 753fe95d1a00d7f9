//! Unified business number (統一編號) checksum validation.

use thiserror::Error;

/// Per-position weights of the 8-digit checksum.
const WEIGHTS: [u32; 8] = [1, 2, 1, 2, 1, 2, 4, 1];

/// Error returned when a tax ID fails validation.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum TaxIdFormatError {
    /// The input is not exactly 8 characters long.
    #[error("invalid tax ID '{value}': expected 8 digits, got {len} characters")]
    WrongLength { value: String, len: usize },

    /// The input contains a character that is not a decimal digit.
    #[error("invalid tax ID '{value}': non-digit character '{ch}'")]
    NonDigit { value: String, ch: char },

    /// Well-formed but the weighted digit sum does not check out.
    #[error("invalid tax ID '{value}': checksum mismatch (weighted sum {sum})")]
    ChecksumMismatch { value: String, sum: u32 },
}

/// Validate a unified business number, reporting why it is invalid.
///
/// Surrounding whitespace is trimmed. The input must then be exactly
/// 8 ASCII decimal digits with a valid checksum.
///
/// The checksum multiplies each digit by its positional weight
/// (`1,2,1,2,1,2,4,1`), reduces any two-digit product to the sum of its own
/// digits, and accepts when the total is divisible by 10. A historical
/// numbering series is also accepted: when the 7th digit is 7, a remainder
/// of 1 passes as well (that digit's product 28 may count as 2+8 or as 10).
pub fn validate_tax_id(input: &str) -> Result<(), TaxIdFormatError> {
    let input = input.trim();

    if input.chars().count() != 8 {
        return Err(TaxIdFormatError::WrongLength {
            value: input.into(),
            len: input.chars().count(),
        });
    }

    let mut digits = [0u32; 8];
    for (i, ch) in input.chars().enumerate() {
        match ch.to_digit(10) {
            Some(d) => digits[i] = d,
            None => {
                return Err(TaxIdFormatError::NonDigit {
                    value: input.into(),
                    ch,
                });
            }
        }
    }

    let sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| {
            let p = d * w;
            if p > 9 { p / 10 + p % 10 } else { p }
        })
        .sum();

    if sum % 10 == 0 || (digits[6] == 7 && sum % 10 == 1) {
        Ok(())
    } else {
        Err(TaxIdFormatError::ChecksumMismatch {
            value: input.into(),
            sum,
        })
    }
}

/// Check a unified business number, returning a plain bool.
///
/// This is [`validate_tax_id`] without the diagnostics; any malformed input
/// is simply `false`.
pub fn is_valid_tax_id(input: &str) -> bool {
    validate_tax_id(input).is_ok()
}

/// Check a tax ID given as a number, via its decimal string form.
///
/// Note that numbers below 10,000,000 are fewer than 8 digits once
/// formatted and therefore always invalid — leading zeros are significant
/// in a unified business number.
pub fn is_valid_tax_id_number(input: u64) -> bool {
    is_valid_tax_id(&input.to_string())
}
