use napi::Result as NapiResult;
use napi_derive::napi;

use retirement_core::wealth::shortfall::{calculate_shortfall, ShortfallInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Project the retirement savings shortfall from a JSON-encoded input and
/// return the JSON-encoded result envelope.
#[napi]
pub fn retirement_shortfall(input_json: String) -> NapiResult<String> {
    let input: ShortfallInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = calculate_shortfall(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
