use anyhow::{anyhow, Result};

use crate::model::config::AmountField;

const AMOUNT_KEYS: [(&str, AmountField); 6] = [
    ("salary", AmountField::Salary),
    ("refectory_daily", AmountField::RefectoryDaily),
    ("health_plan", AmountField::HealthPlan),
    ("life_insurance", AmountField::LifeInsurance),
    ("plr_annual", AmountField::PlrAnnual),
    ("va_monthly", AmountField::VaMonthly),
];

#[derive(Debug, PartialEq)]
pub struct BenefitInput {
    pub name: String,
    pub value: String,
}

/// Splits `"Name=Value"` or `"Some name 12,50"` (value as the last word) into parts.
/// Validation of the parts is left to the store.
pub fn parse_benefit_input(input: &str) -> Option<BenefitInput> {
    let input = input.trim();
    let (name, value) = match input.rsplit_once('=') {
        Some(parts) => parts,
        None => input.rsplit_once(char::is_whitespace)?,
    };
    Some(BenefitInput {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
    })
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Resolves an amount field by name or unambiguous prefix (`sal` -> salary).
pub fn parse_amount_field(key: &str) -> Result<AmountField> {
    let names: Vec<&str> = AMOUNT_KEYS.iter().map(|(name, _)| *name).collect();
    let full = expand_key(&key.to_lowercase().replace('-', "_"), &names)?;
    AMOUNT_KEYS.iter()
        .find(|(name, _)| *name == full)
        .map(|(_, field)| *field)
        .ok_or_else(|| anyhow!("Unknown key: '{}'", key))
}
