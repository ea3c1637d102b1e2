//! Discounted price and discount amount calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::DiscountError;
use super::types::{Discount, Voucher};

/// Round a money amount to 2 decimal places, half up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the price after applying `voucher` to `base_price`.
///
/// `unit_price` is only consulted for UNIT vouchers, where it is
/// required. The result never drops below zero and is rounded to
/// 2 decimal places via [`round_money`].
///
/// # Errors
///
/// Returns the matching [`DiscountError`] for an out-of-range discount
/// magnitude, a UNIT voucher without a unit price, or a voucher without
/// a discount.
pub fn calculate_price(
    base_price: Decimal,
    voucher: &Voucher,
    unit_price: Option<Decimal>,
) -> Result<Decimal, DiscountError> {
    let Some(discount) = voucher.discount else {
        return Err(DiscountError::UnsupportedVoucherType);
    };

    match discount {
        Discount::Percent { percent_off } => {
            validate_percent(percent_off)?;
            let off = base_price * percent_off / Decimal::ONE_HUNDRED;
            Ok(round_money(base_price - off))
        }
        Discount::Amount { amount_off } => {
            validate_amount(amount_off)?;
            let off = minor_to_major(amount_off);
            Ok(round_money((base_price - off).max(Decimal::ZERO)))
        }
        Discount::Unit { unit_off } => {
            validate_unit(unit_off)?;
            let unit_price = unit_price.ok_or(DiscountError::MissingUnitPrice)?;
            let off = unit_price * unit_off;
            Ok(round_money((base_price - off).max(Decimal::ZERO)))
        }
    }
}

/// Compute the amount `voucher` takes off `base_price`.
///
/// For AMOUNT and UNIT vouchers the returned amount is capped at
/// `base_price` (what a 10.00-off voucher takes off a 4.00 item is
/// 4.00). Rounded to 2 decimal places via [`round_money`].
///
/// # Errors
///
/// Same conditions as [`calculate_price`].
pub fn calculate_discount(
    base_price: Decimal,
    voucher: &Voucher,
    unit_price: Option<Decimal>,
) -> Result<Decimal, DiscountError> {
    let Some(discount) = voucher.discount else {
        return Err(DiscountError::UnsupportedVoucherType);
    };

    match discount {
        Discount::Percent { percent_off } => {
            validate_percent(percent_off)?;
            Ok(round_money(base_price * percent_off / Decimal::ONE_HUNDRED))
        }
        Discount::Amount { amount_off } => {
            validate_amount(amount_off)?;
            let off = minor_to_major(amount_off);
            Ok(round_money(off.min(base_price)))
        }
        Discount::Unit { unit_off } => {
            validate_unit(unit_off)?;
            let unit_price = unit_price.ok_or(DiscountError::MissingUnitPrice)?;
            let off = unit_price * unit_off;
            Ok(round_money(off.min(base_price)))
        }
    }
}

/// Convert minor units (cents) to major units.
fn minor_to_major(amount_off: u64) -> Decimal {
    Decimal::from(amount_off) / Decimal::ONE_HUNDRED
}

fn validate_percent(percent_off: Decimal) -> Result<(), DiscountError> {
    if percent_off <= Decimal::ZERO || percent_off > Decimal::ONE_HUNDRED {
        return Err(DiscountError::InvalidPercent(percent_off));
    }
    Ok(())
}

fn validate_amount(amount_off: u64) -> Result<(), DiscountError> {
    if amount_off == 0 {
        return Err(DiscountError::InvalidAmount);
    }
    Ok(())
}

fn validate_unit(unit_off: Decimal) -> Result<(), DiscountError> {
    if unit_off <= Decimal::ZERO {
        return Err(DiscountError::InvalidUnit(unit_off));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_ten_off_hundred() {
        let v = Voucher::percent_off("P10", dec!(10));
        assert_eq!(calculate_price(dec!(100), &v, None).unwrap(), dec!(90.00));
        assert_eq!(calculate_discount(dec!(100), &v, None).unwrap(), dec!(10.00));
    }

    #[test]
    fn amount_five_off_hundred() {
        let v = Voucher::amount_off("A500", 500);
        assert_eq!(calculate_price(dec!(100), &v, None).unwrap(), dec!(95.00));
        assert_eq!(calculate_discount(dec!(100), &v, None).unwrap(), dec!(5.00));
    }

    #[test]
    fn unit_price_floors_at_zero() {
        let v = Voucher::unit_off("U3", dec!(3));
        assert_eq!(calculate_price(dec!(10), &v, Some(dec!(5))).unwrap(), dec!(0));
        assert_eq!(
            calculate_discount(dec!(10), &v, Some(dec!(5))).unwrap(),
            dec!(10.00)
        );
    }

    #[test]
    fn round_money_half_up() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(87.49125)), dec!(87.49));
    }

    #[test]
    fn percent_out_of_range() {
        for pct in [dec!(0), dec!(-5), dec!(100.01)] {
            let v = Voucher::percent_off("P", pct);
            assert_eq!(
                calculate_price(dec!(100), &v, None),
                Err(DiscountError::InvalidPercent(pct))
            );
        }
    }

    #[test]
    fn unit_without_unit_price() {
        let v = Voucher::unit_off("U", dec!(2));
        assert_eq!(
            calculate_price(dec!(100), &v, None),
            Err(DiscountError::MissingUnitPrice)
        );
    }

    #[test]
    fn voucher_without_discount() {
        let v = Voucher {
            discount: None,
            ..Voucher::percent_off("X", dec!(10))
        };
        assert_eq!(
            calculate_price(dec!(100), &v, None),
            Err(DiscountError::UnsupportedVoucherType)
        );
    }
}
