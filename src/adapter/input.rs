use serde_json::Value;

use super::{AdapterProblem, PROPERTY_MAP};

/// The selector used when the caller does not name any properties
pub const WILDCARD: &str = "*";

/// The normalized list of properties a caller asked for.
///
/// Every name is trimmed and lowercased, and none is empty. A selector of
/// exactly `*` stands for every known property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySelector {
    names: Vec<String>,
}

impl PropertySelector {
    /// Reads the raw adapter input: a JSON array whose first element is the
    /// `properties` parameter. Blank input selects everything.
    pub fn parse(raw: &str) -> Result<PropertySelector, AdapterProblem> {
        if raw.trim().is_empty() {
            return Ok(PropertySelector::wildcard());
        }
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| AdapterProblem::input_format(format!("It is not valid JSON: {err}")))?;
        match value {
            Value::Array(params) => PropertySelector::from_params(params),
            other => Err(AdapterProblem::input_format(format!(
                "Found {} instead.",
                describe(&other)
            ))),
        }
    }

    /// Binds the positional parameters. Only the first one, `properties`, is
    /// declared; anything after it is ignored.
    pub fn from_params(params: Vec<Value>) -> Result<PropertySelector, AdapterProblem> {
        let extra = params.len().saturating_sub(1);
        if extra > 0 {
            tracing::debug!(extra, "ignoring undeclared trailing parameters");
        }
        match params.into_iter().next() {
            None => Ok(PropertySelector::wildcard()),
            Some(properties) => PropertySelector::from_value(properties),
        }
    }

    /// Coerces the `properties` parameter: a comma separated string, or a list
    /// of strings where nested lists are spliced in.
    pub fn from_value(properties: Value) -> Result<PropertySelector, AdapterProblem> {
        let raw_names = match properties {
            Value::String(names) => names.split(',').map(str::to_string).collect(),
            Value::Array(items) => flatten(items)?,
            other => {
                return Err(AdapterProblem::validation(format!(
                    "Expected a string or a list of strings, found {}.",
                    describe(&other)
                )));
            }
        };
        PropertySelector::normalize(raw_names)
    }

    fn normalize(raw_names: Vec<String>) -> Result<PropertySelector, AdapterProblem> {
        let names: Vec<String> = raw_names
            .iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(AdapterProblem::validation("No property names were given."));
        }
        Ok(PropertySelector { names })
    }

    /// Selects every known property
    pub fn wildcard() -> PropertySelector {
        PropertySelector {
            names: vec![WILDCARD.to_string()],
        }
    }

    /// Whether this selector is exactly `*`
    pub fn is_wildcard(&self) -> bool {
        matches!(self.names.as_slice(), [only] if only == WILDCARD)
    }

    /// The normalized names, as given
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The header of the result table: the canonical property names for `*`,
    /// otherwise the normalized names in the order they were asked for.
    pub fn header(&self) -> Vec<String> {
        if self.is_wildcard() {
            PROPERTY_MAP.canonical_names().map(str::to_string).collect()
        } else {
            self.names.clone()
        }
    }
}

fn flatten(items: Vec<Value>) -> Result<Vec<String>, AdapterProblem> {
    let mut names = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(name) => names.push(name),
            Value::Array(nested) => {
                for inner in nested {
                    match inner {
                        Value::String(name) => names.push(name),
                        other => return Err(not_a_name(&other)),
                    }
                }
            }
            other => return Err(not_a_name(&other)),
        }
    }
    Ok(names)
}

fn not_a_name(value: &Value) -> AdapterProblem {
    AdapterProblem::validation(format!(
        "Every property name must be a string, found {}.",
        describe(value)
    ))
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
