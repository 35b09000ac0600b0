//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, installment bounds) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::{ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

/// Smallest number of installments a credit may be split into.
pub const MIN_INSTALLMENTS: i32 = 1;
/// Largest number of installments a credit may be split into.
pub const MAX_INSTALLMENTS: i32 = 48;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Tax id is not a well-formed CPF.
    #[error("invalid tax id")]
    InvalidTaxId,
    /// Monetary amount below zero.
    #[error("amount cannot be negative")]
    NegativeAmount,
    /// Installment count outside the accepted bounds.
    #[error("number of installments must be between 1 and 48")]
    InstallmentsOutOfRange,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CustomerId, "Unique identifier for a customer.");
id_newtype!(CreditId, "Unique identifier for a credit.");

/// Lower-cased and validated customer email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CustomerEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CustomerEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerEmail> for String {
    fn from(value: CustomerEmail) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(FirstName, "Customer first name, trimmed and non-empty.");
non_empty_string_newtype!(LastName, "Customer last name, trimmed and non-empty.");
non_empty_string_newtype!(ZipCode, "Postal code of a customer address.");
non_empty_string_newtype!(Street, "Street line of a customer address, stored as submitted.");


/// Computes a CPF check digit over the given digits.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    let rest = sum * 10 % 11;
    if rest == 10 { 0 } else { rest }
}

/// Brazilian individual taxpayer number (CPF), stored as its 11 bare digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TaxId(String);

impl TaxId {
    /// Strips punctuation and verifies length and both check digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let digits: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | ' '))
            .collect();

        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        let numbers: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
        if numbers.iter().all(|d| *d == numbers[0]) {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        let first = cpf_check_digit(&numbers[..9]);
        let second = cpf_check_digit(&numbers[..10]);
        if numbers[9] != first || numbers[10] != second {
            return Err(TypeConstraintError::InvalidTaxId);
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TaxId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaxId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque customer credential. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Accepts any non-blank secret as-is.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Non-negative monetary amount.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, TypeConstraintError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(TypeConstraintError::NegativeAmount);
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> Decimal {
        self.0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| TypeConstraintError::InvalidValue(format!("not a decimal: {s}")))?;
        Self::new(value)
    }
}

/// Number of installments a credit is split into, within
/// [`MIN_INSTALLMENTS`]..=[`MAX_INSTALLMENTS`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstallmentCount(i32);

impl InstallmentCount {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (MIN_INSTALLMENTS..=MAX_INSTALLMENTS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InstallmentsOutOfRange)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for InstallmentCount {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Public random identifier of a credit, used in URLs instead of the surrogate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditCode(Uuid);

impl CreditCode {
    /// Generate a new random credit code
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CreditCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CreditCode {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            Uuid::parse_str(s.trim()).map_err(|_| TypeConstraintError::InvalidUuid)?,
        ))
    }
}

impl Default for CreditCode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(CustomerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CreditId::new(-4), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CustomerId::new(7).map(i32::from), Ok(7));
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = CustomerEmail::new("  Ana@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
        assert!(CustomerEmail::new("not-an-email").is_err());
    }

    #[test]
    fn tax_id_accepts_formatted_and_bare_digits() {
        assert_eq!(TaxId::new("529.982.247-25").unwrap().as_str(), "52998224725");
        assert_eq!(TaxId::new("11144477735").unwrap().as_str(), "11144477735");
    }

    #[test]
    fn tax_id_rejects_bad_check_digits_and_repeated_digits() {
        assert_eq!(TaxId::new("52998224726"), Err(TypeConstraintError::InvalidTaxId));
        assert_eq!(TaxId::new("11111111111"), Err(TypeConstraintError::InvalidTaxId));
        assert_eq!(TaxId::new("1234"), Err(TypeConstraintError::InvalidTaxId));
        assert_eq!(TaxId::new("5299822472a"), Err(TypeConstraintError::InvalidTaxId));
    }

    #[test]
    fn street_keeps_special_characters() {
        let street = Street::new("  Rua Silva & Filhos <3 ").unwrap();
        assert_eq!(street.as_str(), "Rua Silva & Filhos <3");
        assert_eq!(Street::new("<b></b>").unwrap().as_str(), "<b></b>");
        assert!(Street::new("   ").is_err());
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
        assert!(Password::new("   ").is_err());
    }

    #[test]
    fn money_rejects_negative_amounts() {
        assert!(Money::new(Decimal::new(-1, 2)).is_err());
        assert!(Money::new(Decimal::ZERO).is_ok());
        assert_eq!("1000.50".parse::<Money>().unwrap().get(), Decimal::new(100050, 2));
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn installment_count_bounds() {
        for count in MIN_INSTALLMENTS..=MAX_INSTALLMENTS {
            assert!(InstallmentCount::new(count).is_ok());
        }
        assert_eq!(
            InstallmentCount::new(0),
            Err(TypeConstraintError::InstallmentsOutOfRange)
        );
        assert_eq!(
            InstallmentCount::new(49),
            Err(TypeConstraintError::InstallmentsOutOfRange)
        );
    }

    #[test]
    fn credit_code_parses_its_display_form() {
        let code = CreditCode::new();
        let parsed: CreditCode = code.to_string().parse().unwrap();
        assert_eq!(parsed, code);
        assert_eq!(
            "nope".parse::<CreditCode>(),
            Err(TypeConstraintError::InvalidUuid)
        );
    }
}
