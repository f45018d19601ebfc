//! Raw pressure parsing.
//!
//! A raw pressure is a number with an optional unit tag (`"5.025"`,
//! `"50 kPa"`, `"14.7psia"`). Untagged values are already in the table unit
//! (MPa). Anything that does not yield a finite number is `InvalidInput`,
//! and the table is never consulted for it.

use pc_core::{PressureUnit, to_table_unit};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A pressure as it arrives from a request: JSON number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PressureInput {
    Number(f64),
    Text(String),
}

impl PressureInput {
    /// Resolve to a finite pressure in the table unit.
    pub fn resolve(&self) -> AppResult<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Ok(*v),
            Self::Number(v) => Err(AppError::InvalidInput(format!(
                "Invalid pressure value: {v}"
            ))),
            Self::Text(text) => parse_pressure(text),
        }
    }
}

impl From<f64> for PressureInput {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PressureInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Parse raw pressure text into the table unit (MPa).
pub fn parse_pressure(raw: &str) -> AppResult<f64> {
    let (value, unit) = split_value_and_unit(raw)?;

    let pressure = match unit {
        "" => value,
        tag => match PressureUnit::from_tag(tag) {
            // already in table unit; skip the round trip so tabulated values match exactly
            Some(PressureUnit::Megapascal) => value,
            Some(u) => to_table_unit(u.quantity(value)),
            None => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown pressure unit '{tag}'"
                )));
            }
        },
    };

    if !pressure.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "Invalid pressure value: '{}'",
            raw.trim()
        )));
    }
    Ok(pressure)
}

fn split_value_and_unit(input: &str) -> AppResult<(f64, &str)> {
    let trimmed = input.trim();

    let split_idx = trimmed
        .find(|c: char| {
            !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E'
        })
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);

    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid pressure value: '{trimmed}'")))?;

    Ok((value, unit_part.trim()))
}
