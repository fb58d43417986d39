//! Environment variable validation
//!
//! Invalid values fall back to a default and are logged as a warning with a
//! Levenshtein-based "did you mean" hint.

use tracing::warn;

use crate::domain::value_objects::levenshtein;

/// Rejected environment variable value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var_name} value '{value}'{suggestion}; valid values: {valid}")]
pub struct InvalidEnvValue {
    var_name: String,
    value: String,
    suggestion: String,
    valid: String,
}

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` (and logging a warning) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match self.try_parse(value, parser) {
            Ok(parsed) => parsed,
            Err(invalid) => {
                warn!(var = self.var_name, "{}", invalid);
                default
            }
        }
    }

    pub fn try_parse<T, F>(&self, value: &str, parser: F) -> Result<T, InvalidEnvValue>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| InvalidEnvValue {
            var_name: self.var_name.to_string(),
            value: value.to_string(),
            suggestion: self.suggest(value),
            valid: self.valid_values.join(", "),
        })
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist);

        // Only suggest if distance is reasonable (≤ 2 edits)
        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}
