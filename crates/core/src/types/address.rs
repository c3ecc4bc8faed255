//! Shipping address types.

use serde::{Deserialize, Serialize};

use super::id::AddressId;
use crate::digits;

/// Errors that can occur when validating an [`AddressDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A required field is empty or whitespace.
    #[error("{field} cannot be empty")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },
    /// The phone number is not an Iranian mobile number.
    #[error("phone must be an 11-digit mobile number starting with 09")]
    InvalidPhone,
    /// The postal code is not exactly 10 digits.
    #[error("postal code must be exactly {len} digits")]
    InvalidPostalCode {
        /// Required number of digits.
        len: usize,
    },
}

/// A saved shipping address.
///
/// At most one address in an address book has `is_default` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    /// Short label chosen by the user (e.g., "خانه", "محل کار").
    pub title: String,
    pub full_name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub is_default: bool,
}

/// Address fields as entered by the user, before an ID is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub title: String,
    pub full_name: String,
    pub phone: String,
    pub province: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Address {
    /// Build an address from a draft and an ID.
    #[must_use]
    pub fn from_draft(id: AddressId, draft: AddressDraft) -> Self {
        Self {
            id,
            title: draft.title,
            full_name: draft.full_name,
            phone: draft.phone,
            province: draft.province,
            city: draft.city,
            address: draft.address,
            postal_code: draft.postal_code,
            is_default: draft.is_default,
        }
    }

    /// The editable fields of this address.
    #[must_use]
    pub fn to_draft(&self) -> AddressDraft {
        AddressDraft {
            title: self.title.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            postal_code: self.postal_code.clone(),
            is_default: self.is_default,
        }
    }

    /// One-line form used on order confirmations.
    #[must_use]
    pub fn one_line(&self) -> String {
        format!(
            "{}، {}، {} - کد پستی {}",
            self.province, self.city, self.address, self.postal_code
        )
    }
}

impl AddressDraft {
    /// Required length of an Iranian postal code.
    pub const POSTAL_CODE_LENGTH: usize = 10;

    /// Required length of an Iranian mobile number.
    pub const PHONE_LENGTH: usize = 11;

    /// Validate the fields needed to ship an order.
    ///
    /// Persian and Arabic-Indic digits are accepted in the phone number and
    /// postal code.
    ///
    /// # Errors
    ///
    /// Returns the first problem found:
    /// - A blank name, province, city, or street address
    /// - A phone number that is not `09` followed by nine digits
    /// - A postal code that is not exactly ten digits
    pub fn validate(&self) -> Result<(), AddressError> {
        let required = [
            ("full name", &self.full_name),
            ("province", &self.province),
            ("city", &self.city),
            ("address", &self.address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AddressError::MissingField { field });
            }
        }

        let phone = digits::to_western(self.phone.trim());
        if phone.len() != Self::PHONE_LENGTH
            || !phone.starts_with("09")
            || !phone.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AddressError::InvalidPhone);
        }

        let postal_code = digits::to_western(self.postal_code.trim());
        if postal_code.len() != Self::POSTAL_CODE_LENGTH
            || !postal_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AddressError::InvalidPostalCode {
                len: Self::POSTAL_CODE_LENGTH,
            });
        }

        Ok(())
    }
}
