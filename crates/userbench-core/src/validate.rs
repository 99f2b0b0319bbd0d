//! User payload validation (write path).
//!
//! Rules run in a fixed order and the first failing rule wins. The validator
//! works on the raw JSON value so type mismatches (`"age": "20"`) are judged
//! the same way as missing fields.

use std::fmt;

use serde_json::{Number, Value};

use crate::model::UserInput;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_AGE: f64 = 18.0;

/// The first rule a candidate payload broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    Name,
    Email,
    Age,
}

impl ValidationFailure {
    /// Reason surfaced verbatim to the caller.
    pub fn reason(self) -> &'static str {
        match self {
            ValidationFailure::Name => "Name must be at least 2 characters",
            ValidationFailure::Email => "Valid email required",
            ValidationFailure::Age => "Age must be 18 or older",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Validate a candidate user payload.
///
/// On success the accepted fields are returned as a [`UserInput`]; extra
/// fields in `body` are ignored. A non-object body behaves like an object
/// with no fields.
pub fn validate_user(body: &Value) -> Result<UserInput, ValidationFailure> {
    let name = check_name(body.get("name"))?;
    let email = check_email(body.get("email"))?;
    let age = check_age(body.get("age"))?;
    Ok(UserInput { name, email, age })
}

fn check_name(v: Option<&Value>) -> Result<String, ValidationFailure> {
    match v {
        // length counts UTF-16 code units, same as the browser-side check
        Some(Value::String(s)) if s.encode_utf16().count() >= MIN_NAME_LEN => Ok(s.clone()),
        _ => Err(ValidationFailure::Name),
    }
}

fn check_email(v: Option<&Value>) -> Result<String, ValidationFailure> {
    match v {
        Some(Value::String(s)) if s.contains('@') => Ok(s.clone()),
        _ => Err(ValidationFailure::Email),
    }
}

fn check_age(v: Option<&Value>) -> Result<Number, ValidationFailure> {
    let Some(Value::Number(n)) = v else {
        return Err(ValidationFailure::Age);
    };
    match n.as_f64() {
        Some(age) if age != 0.0 && age >= MIN_AGE => Ok(n.clone()),
        _ => Err(ValidationFailure::Age),
    }
}
