use rust_decimal::Decimal;

use crate::error::RetirementError;
use crate::types::{Money, Rate};
use crate::RetirementResult;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Present Value of a level ordinary annuity plus a terminal lump sum.
///
/// Sign convention: payments and terminal values are outflows, so a
/// negative `pmt` with a positive rate yields a positive present value.
/// Zero rate degenerates to the linear form `-(pmt * n + fv)`.
pub fn pv(rate: Rate, nper: u32, pmt: Money, fv: Money) -> RetirementResult<Money> {
    if rate.is_zero() {
        return Ok(-(pmt * Decimal::from(nper) + fv));
    }

    let factor = compound(rate, nper);
    if factor.is_zero() {
        return Err(RetirementError::DivisionByZero {
            context: "PV compounding factor".into(),
        });
    }

    let annuity_factor = (Decimal::ONE - Decimal::ONE / factor) / rate;
    Ok(-(pmt * annuity_factor + fv / factor))
}

/// Future Value of a present sum plus a level ordinary annuity.
///
/// Same outflow convention: a negative `present_value` grows into a
/// positive future value. Zero rate degenerates to the linear form.
pub fn fv(rate: Rate, nper: u32, pmt: Money, present_value: Money) -> RetirementResult<Money> {
    if rate.is_zero() {
        return Ok(-(present_value + pmt * Decimal::from(nper)));
    }

    let factor = compound(rate, nper);
    let annuity_factor = (factor - Decimal::ONE) / rate;

    Ok(-(present_value * factor + pmt * annuity_factor))
}

/// Payment (PMT) amortizing a present and/or future value target over
/// `nper` level periods.
///
/// Outflow convention: a positive `future_value` target produces a negative
/// payment. Zero rate degenerates to `-(pv + fv) / n`.
pub fn pmt(
    rate: Rate,
    nper: u32,
    present_value: Money,
    future_value: Money,
) -> RetirementResult<Money> {
    if nper == 0 {
        return Err(RetirementError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(-(present_value + future_value) / Decimal::from(nper));
    }

    let factor = compound(rate, nper);
    let annuity_factor = (factor - Decimal::ONE) / rate;

    if annuity_factor.is_zero() {
        return Err(RetirementError::DivisionByZero {
            context: "PMT annuity factor".into(),
        });
    }

    Ok(-(present_value * factor + future_value) / annuity_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_basic() {
        // 1.1^3 = 1.331
        assert_eq!(compound(dec!(0.10), 3), dec!(1.331));
    }

    #[test]
    fn test_compound_zero_periods() {
        assert_eq!(compound(dec!(0.065), 0), Decimal::ONE);
    }

    #[test]
    fn test_pv_annuity() {
        // PV of 1000/yr for 10 years at 5%: 1000 * (1 - 1.05^-10) / 0.05 ≈ 7721.73
        let result = pv(dec!(0.05), 10, dec!(-1000), Decimal::ZERO).unwrap();
        assert!((result - dec!(7721.73)).abs() < dec!(0.01), "got {}", result);
    }

    #[test]
    fn test_pv_zero_rate_linear() {
        let result = pv(dec!(0), 5, dec!(-100), dec!(-500)).unwrap();
        assert_eq!(result, dec!(1000));
    }

    #[test]
    fn test_pv_rate_of_minus_one_is_division_by_zero() {
        assert!(pv(dec!(-1), 10, dec!(-100), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_fv_single_sum_growth() {
        // 610000 at 6.5% for 11 years: 610000 * 1.065^11 ≈ 1219482.35
        let result = fv(dec!(0.065), 11, Decimal::ZERO, dec!(-610000)).unwrap();
        assert!(
            (result - dec!(1219482.35)).abs() < dec!(0.01),
            "got {}",
            result
        );
    }

    #[test]
    fn test_fv_zero_rate_linear() {
        let result = fv(dec!(0), 7, dec!(-50), dec!(-1000)).unwrap();
        assert_eq!(result, dec!(1350));
    }

    #[test]
    fn test_pmt_future_value_target() {
        // Reach 100000 in 10 years at 5%: 100000 * 0.05 / (1.05^10 - 1) ≈ 7950.46
        let result = pmt(dec!(0.05), 10, Decimal::ZERO, dec!(100000)).unwrap();
        assert!(
            (-result - dec!(7950.46)).abs() < dec!(0.01),
            "got {}",
            result
        );
    }

    #[test]
    fn test_pmt_zero_rate_linear() {
        let result = pmt(dec!(0), 4, Decimal::ZERO, dec!(1000)).unwrap();
        assert_eq!(result, dec!(-250));
    }

    #[test]
    fn test_pmt_zero_periods_rejected() {
        assert!(pmt(dec!(0.05), 0, Decimal::ZERO, dec!(1000)).is_err());
    }
}
