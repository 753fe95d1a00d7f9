//! Bidirectional price / tax / total reconciliation.
//!
//! A uniform-invoice form has three coupled money fields. Whichever one the
//! user touched last is authoritative; the other two are recomputed from it
//! and the tax rate. Article 14 of the Business Tax Act prescribes
//! round-half-up for tax remainders below one currency unit, and the
//! total-edited branch back-solves the input tax the same way
//! (`tax = round(total · r / (1 + r))`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::numeral::{NumeralToken, to_chinese_numeral};

/// Which field the user edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditedField {
    /// Net price (pre-tax amount).
    Price,
    /// Tax rate percentage.
    TaxRate,
    /// Gross total.
    Total,
}

/// Current values of the coupled form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    /// Net price in whole currency units.
    pub price: i64,
    /// Tax rate as a percentage (e.g. `dec!(5)` for 5%).
    pub tax_rate: Decimal,
    /// Gross total in whole currency units.
    pub total: i64,
}

/// Consistent price / tax / total triple produced by [`reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciled {
    /// Net price.
    pub price: i64,
    /// Tax amount.
    pub tax: i64,
    /// Gross total, always `price + tax`.
    pub total: i64,
}

impl Reconciled {
    /// Render the gross total as a traditional-Chinese numeral run.
    pub fn total_numeral(&self) -> Vec<NumeralToken> {
        to_chinese_numeral(self.total)
    }
}

/// Round to a whole currency unit, half away from zero.
///
/// For the non-negative amounts of ordinary invoicing this is exactly the
/// statutory round-half-up. Amounts outside the `i64` range collapse to 0
/// rather than overflowing.
fn round_to_unit(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Recompute the two non-edited fields from the edited one and the tax rate.
///
/// - `Price` or `TaxRate` edited: `tax = round(price · r)`,
///   `total = price + tax`.
/// - `Total` edited: `tax = round(total · r / (1 + r))`,
///   `price = total - tax`.
///
/// A zero tax rate yields zero tax. A degenerate rate of −100% would divide
/// by zero in the back-solve; it also yields zero tax. Negative amounts are
/// not validated and flow through the arithmetic as-is; a derived field that
/// does not fit `i64` coerces to 0 like any other unrepresentable amount.
pub fn reconcile(edited: EditedField, fields: &FieldValues) -> Reconciled {
    let rate = fields.tax_rate / Decimal::ONE_HUNDRED;

    match edited {
        EditedField::Price | EditedField::TaxRate => {
            let price = fields.price;
            let tax = round_to_unit(Decimal::from(price) * rate);
            Reconciled {
                price,
                tax,
                total: price.checked_add(tax).unwrap_or(0),
            }
        }
        EditedField::Total => {
            let total = fields.total;
            let tax = (Decimal::from(total) * rate)
                .checked_div(Decimal::ONE + rate)
                .map(round_to_unit)
                .unwrap_or(0);
            Reconciled {
                price: total.checked_sub(tax).unwrap_or(0),
                tax,
                total,
            }
        }
    }
}

/// Reconcile directly from raw form-field strings.
///
/// Applies [`parse_amount`] to the money fields and [`parse_rate`] to the
/// rate field, then delegates to [`reconcile`]. This is the whole coercion
/// policy: anything unparsable is 0, and the call never fails.
pub fn reconcile_raw(edited: EditedField, price: &str, tax_rate: &str, total: &str) -> Reconciled {
    reconcile(
        edited,
        &FieldValues {
            price: parse_amount(price),
            tax_rate: parse_rate(tax_rate),
            total: parse_amount(total),
        },
    )
}

/// Coerce a raw money field to a whole amount.
///
/// Every non-digit character is dropped (so `"1,234"` is 1234), then the
/// remaining digits are parsed. An empty result, or one too large for `i64`,
/// is 0.
pub fn parse_amount(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Coerce a raw rate field to a percentage.
///
/// Parses the longest leading numeric prefix after trimming — `"5.5%"` is
/// 5.5 and `"5e2"` is 500 — so trailing junk is ignored the way `parseFloat`
/// ignores it. No usable prefix, or an exponent outside the decimal range,
/// means 0.
pub fn parse_rate(raw: &str) -> Decimal {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut i = 0;

    let sign = if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
        &s[..1]
    } else {
        ""
    };

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_part = &s[int_start..i];

    let mut frac_part = "";
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        i = frac_start;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_part = &s[frac_start..i];
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return Decimal::ZERO;
    }

    // Exponent suffix, consumed only when complete ("5e" is just 5).
    let mut exp_part = "";
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let digit_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digit_start {
            exp_part = &s[i + 1..j];
        }
    }

    let mantissa = format!(
        "{sign}{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
    );
    if exp_part.is_empty() {
        mantissa.parse().unwrap_or(Decimal::ZERO)
    } else {
        Decimal::from_scientific(&format!("{mantissa}e{exp_part}")).unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fields(price: i64, rate: Decimal, total: i64) -> FieldValues {
        FieldValues {
            price,
            tax_rate: rate,
            total,
        }
    }

    #[test]
    fn price_edited_standard_rate() {
        let r = reconcile(EditedField::Price, &fields(100, dec!(5), 0));
        assert_eq!(r.price, 100);
        assert_eq!(r.tax, 5);
        assert_eq!(r.total, 105);
    }

    #[test]
    fn price_edited_rounds_half_up() {
        // 30 · 5% = 1.5 → 2
        let r = reconcile(EditedField::Price, &fields(30, dec!(5), 0));
        assert_eq!(r.tax, 2);
        assert_eq!(r.total, 32);
    }

    #[test]
    fn rate_edited_recomputes_from_price() {
        let r = reconcile(EditedField::TaxRate, &fields(200, dec!(10), 999));
        assert_eq!(r.price, 200);
        assert_eq!(r.tax, 20);
        assert_eq!(r.total, 220);
    }

    #[test]
    fn total_edited_back_solves() {
        // 105 / 1.05 · 0.05 = 5
        let r = reconcile(EditedField::Total, &fields(0, dec!(5), 105));
        assert_eq!(r.tax, 5);
        assert_eq!(r.price, 100);
        assert_eq!(r.total, 105);
    }

    #[test]
    fn total_edited_midpoint() {
        // 3 · 100% back-solve: 3/2 = 1.5 → 2
        let r = reconcile(EditedField::Total, &fields(0, dec!(100), 3));
        assert_eq!(r.tax, 2);
        assert_eq!(r.price, 1);
    }

    #[test]
    fn zero_rate_zero_tax() {
        let r = reconcile(EditedField::Price, &fields(100, dec!(0), 0));
        assert_eq!(r.tax, 0);
        assert_eq!(r.total, 100);

        let r = reconcile(EditedField::Total, &fields(0, dec!(0), 100));
        assert_eq!(r.tax, 0);
        assert_eq!(r.price, 100);
    }

    #[test]
    fn degenerate_rate_does_not_divide_by_zero() {
        let r = reconcile(EditedField::Total, &fields(0, dec!(-100), 500));
        assert_eq!(r.tax, 0);
        assert_eq!(r.price, 500);
    }

    #[test]
    fn negative_price_flows_through() {
        let r = reconcile(EditedField::Price, &fields(-100, dec!(5), 0));
        assert_eq!(r.tax, -5);
        assert_eq!(r.total, -105);
    }

    #[test]
    fn round_trip_within_one_unit() {
        for price in [0, 1, 7, 19, 100, 1234, 99_999] {
            let forward = reconcile(EditedField::Price, &fields(price, dec!(5), 0));
            let back = reconcile(EditedField::Total, &fields(0, dec!(5), forward.total));
            assert!(
                (back.price - price).abs() <= 1,
                "price {price} came back as {}",
                back.price
            );
        }
    }

    // --- coercion ---

    #[test]
    fn parse_amount_strips_separators() {
        assert_eq!(parse_amount("1,234,567"), 1_234_567);
        assert_eq!(parse_amount(" 42 "), 42);
    }

    #[test]
    fn parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("abc"), 0);
        assert_eq!(parse_amount("NT$"), 0);
    }

    #[test]
    fn parse_amount_drops_sign() {
        // the digit filter removes '-'; the widget fields never carry signs
        assert_eq!(parse_amount("-50"), 50);
    }

    #[test]
    fn parse_rate_prefix() {
        assert_eq!(parse_rate("5"), dec!(5));
        assert_eq!(parse_rate("5.5"), dec!(5.5));
        assert_eq!(parse_rate("5.5%"), dec!(5.5));
        assert_eq!(parse_rate(".5"), dec!(0.5));
        assert_eq!(parse_rate("-2.5"), dec!(-2.5));
    }

    #[test]
    fn parse_rate_exponent() {
        assert_eq!(parse_rate("5e2"), dec!(500));
        assert_eq!(parse_rate("5E-1"), dec!(0.5));
        assert_eq!(parse_rate("1.5e+1"), dec!(15));
        // a dangling 'e' is not part of the numeric prefix
        assert_eq!(parse_rate("5e"), dec!(5));
        assert_eq!(parse_rate("5e-"), dec!(5));
        // exponent beyond the decimal range
        assert_eq!(parse_rate("1e1000"), Decimal::ZERO);
    }

    #[test]
    fn parse_rate_garbage_is_zero() {
        assert_eq!(parse_rate(""), Decimal::ZERO);
        assert_eq!(parse_rate("abc"), Decimal::ZERO);
        assert_eq!(parse_rate("-"), Decimal::ZERO);
        assert_eq!(parse_rate("."), Decimal::ZERO);
    }

    #[test]
    fn reconcile_raw_coerces_everything() {
        let r = reconcile_raw(EditedField::Price, "1,000", "5%", "");
        assert_eq!(r.price, 1000);
        assert_eq!(r.tax, 50);
        assert_eq!(r.total, 1050);

        let r = reconcile_raw(EditedField::Total, "", "junk", "oops");
        assert_eq!(r.price, 0);
        assert_eq!(r.tax, 0);
        assert_eq!(r.total, 0);
    }

    #[test]
    fn edited_field_serde_names() {
        assert_eq!(
            serde_json::to_string(&EditedField::TaxRate).unwrap(),
            "\"taxRate\""
        );
        assert_eq!(
            serde_json::from_str::<EditedField>("\"price\"").unwrap(),
            EditedField::Price
        );
    }
}
