use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use retirement_core::wealth::shortfall::{self, ShortfallInput};

use crate::input;

/// Arguments for the shortfall projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ShortfallArgs {
    /// Current annual salary
    #[arg(long)]
    pub current_salary: Option<Decimal>,

    /// Retirement income goal as a share of salary (e.g. 0.7 for 70%)
    #[arg(long)]
    pub replacement_rate: Option<Decimal>,

    /// Annual inflation rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub inflation_rate: Option<Decimal>,

    /// Years until retirement
    #[arg(long)]
    pub years_to_retirement: Option<u32>,

    /// Years retirement income must last
    #[arg(long)]
    pub retirement_duration: Option<u32>,

    /// Annual investment rate of return (e.g. 0.065 for 6.5%)
    #[arg(long)]
    pub annual_rate_of_return: Option<Decimal>,

    /// Amount already saved
    #[arg(long)]
    pub current_savings: Option<Decimal>,

    /// Contribution per month
    #[arg(long)]
    pub current_contributions: Option<Decimal>,

    /// Annual growth applied to contributions (e.g. 0.04 for 4%)
    #[arg(long)]
    pub contribution_escalation_rate: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_shortfall(args: ShortfallArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let shortfall_input: ShortfallInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ShortfallInput {
            current_salary: args
                .current_salary
                .ok_or("--current-salary is required (or provide --input)")?,
            replacement_rate: args
                .replacement_rate
                .ok_or("--replacement-rate is required (or provide --input)")?,
            inflation_rate: args
                .inflation_rate
                .ok_or("--inflation-rate is required (or provide --input)")?,
            years_to_retirement: args
                .years_to_retirement
                .ok_or("--years-to-retirement is required (or provide --input)")?,
            retirement_duration: args
                .retirement_duration
                .ok_or("--retirement-duration is required (or provide --input)")?,
            annual_rate_of_return: args
                .annual_rate_of_return
                .ok_or("--annual-rate-of-return is required (or provide --input)")?,
            current_savings: args
                .current_savings
                .ok_or("--current-savings is required (or provide --input)")?,
            current_contributions: args
                .current_contributions
                .ok_or("--current-contributions is required (or provide --input)")?,
            contribution_escalation_rate: args
                .contribution_escalation_rate
                .ok_or("--contribution-escalation-rate is required (or provide --input)")?,
        }
    };

    let result = shortfall::calculate_shortfall(&shortfall_input)?;
    Ok(serde_json::to_value(result)?)
}
