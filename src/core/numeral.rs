//! Traditional-Chinese numeral rendering of invoice totals.
//!
//! The total-in-words line of a uniform invoice uses the fraud-resistant
//! banker's glyphs (大寫數字): 壹貳參… rather than 一二三…. A rendered
//! number is a run of tagged tokens so callers can style digit and
//! order-of-magnitude glyphs differently.

use serde::{Deserialize, Serialize};

/// Digit glyphs for 0–9.
const DIGIT_GLYPHS: [char; 10] = ['零', '壹', '貳', '參', '肆', '伍', '陸', '柒', '捌', '玖'];

/// Order-of-magnitude glyphs by decimal position. Position 0 (units) has no
/// marker; the slot is a filler and is never emitted.
const ORDER_GLYPHS: [char; 9] = [' ', '拾', '佰', '仟', '萬', '拾', '佰', '仟', '億'];

/// Glyph emitted for numbers outside the representable range.
pub const OUT_OF_RANGE_GLYPH: char = '∞';

/// Role of a glyph within a numeral run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralKind {
    /// One of the ten digit glyphs.
    Digit,
    /// An order-of-magnitude marker (拾, 佰, 仟, 萬, 億).
    Order,
    /// The out-of-range placeholder.
    Placeholder,
}

/// A single glyph of a rendered numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralToken {
    /// What the glyph is.
    pub kind: NumeralKind,
    /// The glyph itself.
    pub glyph: char,
}

/// Render an amount as a run of traditional-Chinese numeral tokens.
///
/// Only numbers expressible in at most 9 decimal digits (up to the 億 place)
/// are defined; anything longer, and any negative number, renders as a
/// single placeholder token.
///
/// Zero digits are skipped rather than read out (so 105 is 壹佰伍, not
/// 壹佰零伍), and an order marker appears only next to a nonzero digit —
/// except the group markers at every 4th position (萬), which are kept
/// whenever a more significant nonzero group exists beyond a zero gap.
/// The number 0 itself is the single digit token 零.
///
/// ```rust
/// use fapiao::core::{numeral_string, to_chinese_numeral};
///
/// assert_eq!(numeral_string(1050), "壹仟伍拾");
/// assert_eq!(numeral_string(0), "零");
/// assert_eq!(numeral_string(10_000_000_000), "∞");
/// assert_eq!(to_chinese_numeral(7).len(), 1);
/// ```
pub fn to_chinese_numeral(n: i64) -> Vec<NumeralToken> {
    let placeholder = vec![NumeralToken {
        kind: NumeralKind::Placeholder,
        glyph: OUT_OF_RANGE_GLYPH,
    }];

    if n < 0 {
        return placeholder;
    }

    // Decimal digits, least significant first.
    let mut digits = Vec::new();
    let mut rest = n;
    loop {
        digits.push((rest % 10) as usize);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    if digits.len() > ORDER_GLYPHS.len() {
        return placeholder;
    }

    let mut run = Vec::new();
    for pos in (0..digits.len()).rev() {
        let d = digits[pos];

        if d != 0 || digits.len() == 1 {
            run.push(NumeralToken {
                kind: NumeralKind::Digit,
                glyph: DIGIT_GLYPHS[d],
            });
        }

        let group_carries = pos % 4 == 0
            && (1..=3).any(|k| digits.get(pos + k).copied().unwrap_or(0) != 0);
        if pos != 0 && (d != 0 || group_carries) {
            run.push(NumeralToken {
                kind: NumeralKind::Order,
                glyph: ORDER_GLYPHS[pos],
            });
        }
    }
    run
}

/// Render an amount as a plain string of numeral glyphs.
pub fn numeral_string(n: i64) -> String {
    to_chinese_numeral(n).iter().map(|t| t.glyph).collect()
}
