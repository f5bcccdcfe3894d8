use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Salutation {
    Mr,
    Ms,
    Mrs,
    Dr,
    Other,
}

/// Guest details captured on the wizard's first step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    pub salutation: Salutation,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 7, message = "Phone number is required"))]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Card and billing details captured on the payment step. Format validation
/// only; a real deployment would tokenize at the gateway and never hand raw
/// card data to this service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[validate(length(min = 1, message = "Cardholder name is required"))]
    pub card_holder_name: String,
    #[validate(custom(function = validate_card_number))]
    pub card_number: String,
    #[validate(custom(function = validate_expiry_date))]
    pub expiry_date: String,
    #[validate(custom(function = validate_cvv))]
    pub cvv: String,
    #[validate(nested)]
    pub billing_address: BillingAddress,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    #[validate(length(min = 1, message = "Street address is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if card_number.len() == 16 && card_number.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("card_number")
            .with_message("Card number must be 16 digits".into()))
    }
}

// MM/YY with month 01-12. No expiry-in-the-past check, matching the original.
fn validate_expiry_date(expiry_date: &str) -> Result<(), ValidationError> {
    let bytes = expiry_date.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b'/'
        && [bytes[0], bytes[1], bytes[3], bytes[4]]
            .iter()
            .all(u8::is_ascii_digit)
        && {
            let month = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
            (1..=12).contains(&month)
        };
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("expiry_date").with_message("Expiry date must be MM/YY".into()))
    }
}

fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if (3..=4).contains(&cvv.len()) && cvv.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("cvv").with_message("CVV must be 3 or 4 digits".into()))
    }
}

/// Display-safe derivative of a card number, exposing only the last four
/// digits. The only form that may appear in logs.
pub fn mask_card_number(card_number: &str) -> String {
    let tail = card_number.len().saturating_sub(4);
    format!("**** **** **** {}", &card_number[tail..])
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn valid_guest() -> GuestInfo {
        GuestInfo {
            salutation: Salutation::Mr,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: "+33123456789".to_string(),
            special_requests: None,
        }
    }

    pub(crate) fn valid_payment() -> PaymentInfo {
        PaymentInfo {
            card_holder_name: "John Doe".to_string(),
            card_number: "4242424242424242".to_string(),
            expiry_date: "02/27".to_string(),
            cvv: "123".to_string(),
            billing_address: BillingAddress {
                street: "1 Champs-Élysées".to_string(),
                city: "Paris".to_string(),
                postal_code: "75008".to_string(),
                country: "France".to_string(),
            },
        }
    }

    #[test]
    fn valid_forms_pass() {
        assert!(valid_guest().validate().is_ok());
        assert!(valid_payment().validate().is_ok());
    }

    #[test]
    fn guest_info_rejects_bad_fields() {
        let mut guest = valid_guest();
        guest.email = "not-an-email".to_string();
        let errors = guest.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let mut guest = valid_guest();
        guest.first_name = String::new();
        assert!(guest.validate().is_err());

        let mut guest = valid_guest();
        guest.phone_number = "123456".to_string();
        assert!(guest.validate().is_err());
    }

    #[test]
    fn card_number_must_be_exactly_16_digits() {
        let mut payment = valid_payment();
        payment.card_number = "424242424242424".to_string(); // 15 digits
        let errors = payment.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("card_number"));

        payment.card_number = "42424242424242421".to_string(); // 17 digits
        assert!(payment.validate().is_err());

        payment.card_number = "4242 4242 4242 42".to_string(); // non-digits
        assert!(payment.validate().is_err());
    }

    #[test]
    fn expiry_date_must_be_mm_yy() {
        for bad in ["13/25", "00/25", "1/25", "02-27", "02/272"] {
            let mut payment = valid_payment();
            payment.expiry_date = bad.to_string();
            assert!(payment.validate().is_err(), "expected {bad:?} to fail");
        }

        for good in ["01/25", "12/99"] {
            let mut payment = valid_payment();
            payment.expiry_date = good.to_string();
            assert!(payment.validate().is_ok(), "expected {good:?} to pass");
        }
    }

    #[test]
    fn cvv_is_3_or_4_digits() {
        for bad in ["12", "12345", "12a"] {
            let mut payment = valid_payment();
            payment.cvv = bad.to_string();
            assert!(payment.validate().is_err(), "expected {bad:?} to fail");
        }

        let mut payment = valid_payment();
        payment.cvv = "1234".to_string();
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn billing_address_fields_are_required() {
        let mut payment = valid_payment();
        payment.billing_address.city = String::new();
        assert!(payment.validate().is_err());
    }

    #[test]
    fn masked_card_shows_last_four_only() {
        assert_eq!(
            mask_card_number("4242424242421234"),
            "**** **** **** 1234"
        );
    }
}
