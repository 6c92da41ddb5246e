use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value::{compound, fv, pmt, pv};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::RetirementResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input assumptions for the shortfall projection. All values are fixed for
/// the duration of one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortfallInput {
    /// Current annual salary.
    pub current_salary: Money,
    /// Retirement income goal as a share of current salary (0.7 = 70%).
    pub replacement_rate: Rate,
    pub inflation_rate: Rate,
    pub years_to_retirement: u32,
    /// Years the retirement income must last.
    pub retirement_duration: u32,
    pub annual_rate_of_return: Rate,
    /// Amount already saved.
    pub current_savings: Money,
    /// Contribution per month.
    pub current_contributions: Money,
    /// Annual growth applied to contributions, starting at year 0.
    pub contribution_escalation_rate: Rate,
}

/// The four-figure result record. Serialized field names are the report
/// labels; every figure is rounded to 2 decimal places on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortfallOutput {
    /// Present value at retirement of the income goal.
    #[serde(rename = "Required Savings")]
    pub required_savings: Money,
    /// Projected savings plus contributions at retirement.
    #[serde(rename = "Future Value")]
    pub future_value: Money,
    /// Required savings minus future value. Negative means a surplus.
    #[serde(rename = "Shortfall")]
    pub shortfall: Money,
    /// Level monthly contribution that closes the shortfall by retirement.
    /// Carries the shortfall's sign: a surplus comes through negative.
    #[serde(rename = "Required Monthly Contributions")]
    pub required_monthly_contributions: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Estimate the savings gap at retirement and the monthly contribution
/// needed to close it.
///
/// The projection runs in four stages: inflation-adjust the income goal to
/// retirement, price the goal as the present value of a level ordinary
/// annuity over the retirement years, grow current savings and escalating
/// start-of-year contributions forward to retirement, then amortize the gap
/// over the remaining months.
///
/// Inputs are taken as supplied; economically nonsensical values (rates at
/// or below -100%) surface as explicit division-by-zero errors rather than
/// being validated away.
pub fn calculate_shortfall(
    input: &ShortfallInput,
) -> RetirementResult<ComputationOutput<ShortfallOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // 1 - required savings at retirement
    let monthly_goal_today = input.current_salary * input.replacement_rate;
    let future_monthly_goal =
        monthly_goal_today * compound(input.inflation_rate, input.years_to_retirement);
    // Present value of the annualized goal as a level annuity, zero residual
    let required_savings = pv(
        input.annual_rate_of_return,
        input.retirement_duration,
        -(future_monthly_goal * MONTHS_PER_YEAR),
        Decimal::ZERO,
    )?;

    // 2a - future value of current savings
    let future_value_savings = fv(
        input.annual_rate_of_return,
        input.years_to_retirement,
        Decimal::ZERO,
        -input.current_savings,
    )?;

    // 2b - future value of contributions: start-of-year deposits escalating
    // from year 0, each compounding until retirement
    let annual_contribution = input.current_contributions * MONTHS_PER_YEAR;
    let mut future_value_contributions = Decimal::ZERO;
    for year in 0..input.years_to_retirement {
        future_value_contributions += annual_contribution
            * compound(input.contribution_escalation_rate, year)
            * compound(
                input.annual_rate_of_return,
                input.years_to_retirement - year,
            );
    }

    // 3 - shortfall (negative = surplus)
    let future_value_total = future_value_savings + future_value_contributions;
    let shortfall = required_savings - future_value_total;

    // 4 - level monthly payment that amortizes the shortfall as a future
    // value target over the remaining months
    let required_monthly = if input.years_to_retirement == 0 {
        warnings.push(
            "No contribution periods remain (years_to_retirement is 0); \
             required monthly contribution set to 0"
                .into(),
        );
        Decimal::ZERO
    } else {
        let monthly_rate = input.annual_rate_of_return / MONTHS_PER_YEAR;
        let months = input.years_to_retirement * 12;
        -pmt(monthly_rate, months, Decimal::ZERO, shortfall)?
    };

    if shortfall < Decimal::ZERO {
        warnings.push(format!(
            "Projected future value exceeds the goal by {} (surplus)",
            (-shortfall).round_dp(2)
        ));
    }

    let output = ShortfallOutput {
        required_savings: required_savings.round_dp(2),
        future_value: future_value_total.round_dp(2),
        shortfall: shortfall.round_dp(2),
        required_monthly_contributions: required_monthly.round_dp(2),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Retirement Shortfall (inflation-adjusted income goal, level-annuity PV, escalating contributions)",
        &serde_json::json!({
            "years_to_retirement": input.years_to_retirement,
            "retirement_duration": input.retirement_duration,
            "replacement_rate": input.replacement_rate.to_string(),
            "inflation_rate": input.inflation_rate.to_string(),
            "annual_rate_of_return": input.annual_rate_of_return.to_string(),
            "contribution_escalation_rate": input.contribution_escalation_rate.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
