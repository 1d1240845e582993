//! # Input validation
//!
//! Client-side checks run before any request leaves the browser. The backend
//! validates everything again; these exist so the user gets an inline message
//! instead of a round trip.
//!
//! Every check returns `Result<(), ValidationError>`. The error's `Display`
//! text is the message shown under the form.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid phone regex"));
static OTP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("valid otp regex"));
static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid pan regex"));
static IFSC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid ifsc regex"));
static GSTIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid gstin regex")
});
static ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,18}$").expect("valid account regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").expect("valid url regex"));

/// A rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    Email,
    #[error("Please enter a valid 10-digit mobile number")]
    Phone,
    #[error(
        "Password must be at least 8 characters and include an uppercase letter, a lowercase letter, a number and a symbol"
    )]
    Password,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Enter the 6-digit code")]
    Otp,
    #[error("Invalid PAN (expected format ABCDE1234F)")]
    Pan,
    #[error("Invalid GSTIN")]
    Gstin,
    #[error("Invalid IFSC code")]
    Ifsc,
    #[error("Bank account number must be 9 to 18 digits")]
    AccountNumber,
    #[error("Please enter a valid URL starting with http:// or https://")]
    Url,
    #[error("Price for {0} must be greater than zero")]
    ZeroPrice(String),
    #[error("{0} is listed more than once")]
    DuplicateRate(String),
}

/// Reject empty (or whitespace-only) values.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::Email);
    }
    Ok(())
}

/// Strip separators and the country/trunk prefix from a mobile number.
///
/// `"+91 98765-43210"`, `"919876543210"` and `"09876543210"` all become
/// `"9876543210"`.
pub fn normalize_phone(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();
    let digits = digits.strip_prefix('+').unwrap_or(digits.as_str());
    if digits.len() == 12 && digits.starts_with("91") {
        digits[2..].to_string()
    } else if digits.len() == 11 && digits.starts_with('0') {
        digits[1..].to_string()
    } else {
        digits.to_string()
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::Required("Phone number"));
    }
    if !PHONE_RE.is_match(&normalize_phone(phone)) {
        return Err(ValidationError::Phone);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());
    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(ValidationError::Password)
    }
}

/// Check a password and its confirmation together.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), ValidationError> {
    validate_password(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if !OTP_RE.is_match(otp.trim()) {
        return Err(ValidationError::Otp);
    }
    Ok(())
}

pub fn validate_pan(pan: &str) -> Result<(), ValidationError> {
    if !PAN_RE.is_match(&pan.trim().to_uppercase()) {
        return Err(ValidationError::Pan);
    }
    Ok(())
}

pub fn validate_gstin(gstin: &str) -> Result<(), ValidationError> {
    if !GSTIN_RE.is_match(&gstin.trim().to_uppercase()) {
        return Err(ValidationError::Gstin);
    }
    Ok(())
}

pub fn validate_ifsc(ifsc: &str) -> Result<(), ValidationError> {
    if !IFSC_RE.is_match(&ifsc.trim().to_uppercase()) {
        return Err(ValidationError::Ifsc);
    }
    Ok(())
}

pub fn validate_account_number(number: &str) -> Result<(), ValidationError> {
    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if !ACCOUNT_RE.is_match(&compact) {
        return Err(ValidationError::AccountNumber);
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if !URL_RE.is_match(url.trim()) {
        return Err(ValidationError::Url);
    }
    Ok(())
}

/// Validate an optional field: blank passes, anything else must satisfy `check`.
pub fn validate_optional(
    value: Option<&str>,
    check: fn(&str) -> Result<(), ValidationError>,
) -> Result<(), ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => check(v),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("creator@example.com").is_ok());
        assert!(validate_email("  first.last+tag@mail.co.in ").is_ok());

        assert_eq!(validate_email(""), Err(ValidationError::Required("Email")));
        assert_eq!(validate_email("no-at-sign.com"), Err(ValidationError::Email));
        assert_eq!(validate_email("a@b"), Err(ValidationError::Email));
        assert_eq!(validate_email("a b@c.com"), Err(ValidationError::Email));
        assert_eq!(validate_email("a@.com"), Err(ValidationError::Email));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+91 98765-43210"), "9876543210");
        assert_eq!(normalize_phone("919876543210"), "9876543210");
        assert_eq!(normalize_phone("09876543210"), "9876543210");
        assert_eq!(normalize_phone("(987) 654 3210"), "9876543210");
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+91 6123456789").is_ok());

        assert_eq!(validate_phone(" "), Err(ValidationError::Required("Phone number")));
        // Indian mobiles start with 6-9
        assert_eq!(validate_phone("5876543210"), Err(ValidationError::Phone));
        assert_eq!(validate_phone("98765"), Err(ValidationError::Phone));
        assert_eq!(validate_phone("98765432101"), Err(ValidationError::Phone));
        assert_eq!(validate_phone("98765abcde"), Err(ValidationError::Phone));
    }

    #[test]
    fn test_password() {
        assert!(validate_password("Str0ng!pass").is_ok());

        assert_eq!(validate_password("Sh0rt!"), Err(ValidationError::Password));
        assert_eq!(validate_password("alllower1!"), Err(ValidationError::Password));
        assert_eq!(validate_password("ALLUPPER1!"), Err(ValidationError::Password));
        assert_eq!(validate_password("NoDigits!!"), Err(ValidationError::Password));
        assert_eq!(validate_password("NoSymbol123"), Err(ValidationError::Password));
    }

    #[test]
    fn test_password_pair() {
        assert!(validate_password_pair("Str0ng!pass", "Str0ng!pass").is_ok());
        assert_eq!(
            validate_password_pair("Str0ng!pass", "Str0ng!pas"),
            Err(ValidationError::PasswordMismatch)
        );
        // Strength is checked before the match
        assert_eq!(validate_password_pair("weak", "weak"), Err(ValidationError::Password));
    }

    #[test]
    fn test_otp() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp(" 000000 ").is_ok());
        assert_eq!(validate_otp("12345"), Err(ValidationError::Otp));
        assert_eq!(validate_otp("1234567"), Err(ValidationError::Otp));
        assert_eq!(validate_otp("12a456"), Err(ValidationError::Otp));
    }

    #[test]
    fn test_kyc_identifiers() {
        assert!(validate_pan("ABCDE1234F").is_ok());
        assert!(validate_pan("abcde1234f").is_ok());
        assert_eq!(validate_pan("ABCD1234F"), Err(ValidationError::Pan));

        assert!(validate_ifsc("HDFC0001234").is_ok());
        assert!(validate_ifsc("sbin0ABC123").is_ok());
        assert_eq!(validate_ifsc("HDFC1001234"), Err(ValidationError::Ifsc));

        assert!(validate_gstin("27ABCDE1234F1Z5").is_ok());
        assert_eq!(validate_gstin("27ABCDE1234F1X5"), Err(ValidationError::Gstin));

        assert!(validate_account_number("123456789").is_ok());
        assert!(validate_account_number("1234 5678 9012").is_ok());
        assert_eq!(validate_account_number("12345678"), Err(ValidationError::AccountNumber));
        assert_eq!(validate_account_number("12345678A"), Err(ValidationError::AccountNumber));
    }

    #[test]
    fn test_url_and_optional() {
        assert!(validate_url("https://brand.example.com/about").is_ok());
        assert_eq!(validate_url("brand.example.com"), Err(ValidationError::Url));

        assert!(validate_optional(None, validate_url).is_ok());
        assert!(validate_optional(Some("  "), validate_url).is_ok());
        assert_eq!(validate_optional(Some("nope"), validate_url), Err(ValidationError::Url));
    }
}
