use serde::{Deserialize, Serialize};
use std::fmt;

/// The 4-digit confirmation code the recipient holds. Carried as data only;
/// nothing in the core validates it against user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn new(value: String) -> Result<Self, String> {
        if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err("OTP must be exactly 4 digits".to_string());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
