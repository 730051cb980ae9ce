//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating prices.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Multiplying a unit price by a quantity overflowed the minor unit range.
    #[error("price of {0} minor units multiplied by {1} overflowed")]
    Overflow(i64, u32),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Multiplies a unit price by a whole quantity.
///
/// Arithmetic happens in minor units, so no rounding is introduced.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn extended_price(
    unit: &Money<'static, Currency>,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let minor = unit.to_minor_units();

    let total = minor
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow(minor, quantity))?;

    Ok(Money::from_minor(total, unit.currency()))
}

/// Sums a sequence of prices, starting from zero in the given currency.
///
/// # Errors
///
/// Returns [`PricingError::Money`] if any price has a different currency.
pub fn sum_prices<I>(
    prices: I,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError>
where
    I: IntoIterator<Item = Money<'static, Currency>>,
{
    let total = prices
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, price| acc.add(price))?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn extended_price_multiplies_minor_units() -> TestResult {
        let unit = Money::from_minor(2499, USD);

        assert_eq!(extended_price(&unit, 2)?, Money::from_minor(4998, USD));

        Ok(())
    }

    #[test]
    fn extended_price_of_zero_quantity_is_zero() -> TestResult {
        let unit = Money::from_minor(1500, USD);

        assert_eq!(extended_price(&unit, 0)?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn extended_price_reports_overflow() {
        let unit = Money::from_minor(i64::MAX, USD);

        assert_eq!(
            extended_price(&unit, 2),
            Err(PricingError::Overflow(i64::MAX, 2))
        );
    }

    #[test]
    fn sum_prices_adds_everything() -> TestResult {
        let prices = [Money::from_minor(4998, USD), Money::from_minor(1299, USD)];

        assert_eq!(sum_prices(prices, USD)?, Money::from_minor(6297, USD));

        Ok(())
    }

    #[test]
    fn sum_prices_of_nothing_is_zero() -> TestResult {
        assert_eq!(sum_prices([], GBP)?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn sum_prices_rejects_mixed_currencies() {
        let prices = [Money::from_minor(100, USD)];

        assert!(matches!(
            sum_prices(prices, GBP),
            Err(PricingError::Money(MoneyError::CurrencyMismatch { .. }))
        ));
    }
}
