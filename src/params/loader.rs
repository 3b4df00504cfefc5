//! Load run parameters from a JSON document
//!
//! Omitted fields fall back to the default fleet model values; malformed
//! fields are parse errors, never silently coerced to zero.

use super::Parameters;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load and validate parameters from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Parameters, Box<dyn Error>> {
    let file = File::open(path)?;
    parameters_from_reader(BufReader::new(file))
}

/// Load and validate parameters from any reader producing JSON
pub fn parameters_from_reader<R: std::io::Read>(reader: R) -> Result<Parameters, Box<dyn Error>> {
    let params: Parameters = serde_json::from_reader(reader)?;
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AccrualMode, ActivationRule};

    #[test]
    fn partial_document_uses_defaults() {
        let json = r#"{ "horizon_days": 365, "accrual_mode": "interest_only" }"#;
        let params = parameters_from_reader(json.as_bytes()).unwrap();
        assert_eq!(params.horizon_days, 365);
        assert_eq!(params.accrual_mode, AccrualMode::InterestOnly);
        assert_eq!(params.unit_value, 6_216_000);
        assert_eq!(params.activation_rule, ActivationRule::NextMonth);
    }

    #[test]
    fn invalid_document_is_rejected_not_coerced() {
        let json = r#"{ "horizon_days": "lots" }"#;
        assert!(parameters_from_reader(json.as_bytes()).is_err());
    }

    #[test]
    fn out_of_range_document_fails_validation() {
        let json = r#"{ "unit_value": -5 }"#;
        assert!(parameters_from_reader(json.as_bytes()).is_err());
    }
}
