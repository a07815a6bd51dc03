//! Lenient field deserializers for hand-edited or legacy JSON records.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse a label string, mapping `null` and blank strings to `None`.
pub(crate) fn label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()).map(T::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

/// A JSON number or a numeric string. `null` and blank strings are `None`.
fn numeric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Numeric>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Numeric::Number(value)) => Ok(Some(value)),
        Some(Numeric::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse()
                .map(Some)
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &"a number"))
        }
    }
}

/// Decimal field written either as a number or as numeric text.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(numeric(deserializer)?.unwrap_or_default())
}

/// Count field that also accepts fractional values and numeric text.
/// Fractions are truncated.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = numeric(deserializer)? else {
        return Ok(0);
    };
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::invalid_value(
            Unexpected::Float(value),
            &"a non-negative whole number",
        ));
    }
    Ok(value.trunc() as u32)
}
