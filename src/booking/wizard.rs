use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::forms::GuestInfo;

/// The three wizard states, in order. Successful submission exits the wizard
/// to the confirmation view; it is not a fourth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Details,
    Review,
    Payment,
}

impl BookingStep {
    pub fn ordinal(self) -> u8 {
        match self {
            BookingStep::Details => 0,
            BookingStep::Review => 1,
            BookingStep::Payment => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardEvent {
    Next,
    Back,
}

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Please check your details.")]
    InvalidGuestInfo(ValidationErrors),
    #[error("Guest details are required to continue.")]
    MissingGuestInfo,
    #[error("There is no step before guest details.")]
    NoPreviousStep,
    #[error("The payment step is submitted, not advanced.")]
    NoNextStep,
}

/// The wizard's transition function. Invalid moves are rejected here rather
/// than relying on disabled buttons; on failure the caller keeps its current
/// step.
///
/// Advancing past Details is gated by guest-info validation. Review is
/// read-only, so advancing past it is unconditional. Going back never
/// validates.
pub fn transition(
    step: BookingStep,
    event: WizardEvent,
    guest_info: Option<&GuestInfo>,
) -> Result<BookingStep, TransitionError> {
    match (step, event) {
        (BookingStep::Details, WizardEvent::Next) => {
            let guest = guest_info.ok_or(TransitionError::MissingGuestInfo)?;
            guest
                .validate()
                .map_err(TransitionError::InvalidGuestInfo)?;
            Ok(BookingStep::Review)
        }
        (BookingStep::Review, WizardEvent::Next) => Ok(BookingStep::Payment),
        (BookingStep::Payment, WizardEvent::Next) => Err(TransitionError::NoNextStep),
        (BookingStep::Details, WizardEvent::Back) => Err(TransitionError::NoPreviousStep),
        (BookingStep::Review, WizardEvent::Back) => Ok(BookingStep::Details),
        (BookingStep::Payment, WizardEvent::Back) => Ok(BookingStep::Review),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::forms::tests::valid_guest;

    #[test]
    fn steps_are_ordered() {
        assert_eq!(BookingStep::Details.ordinal(), 0);
        assert_eq!(BookingStep::Review.ordinal(), 1);
        assert_eq!(BookingStep::Payment.ordinal(), 2);
    }

    #[test]
    fn valid_guest_info_advances_from_details() {
        let guest = valid_guest();
        let next = transition(BookingStep::Details, WizardEvent::Next, Some(&guest)).unwrap();
        assert_eq!(next, BookingStep::Review);
    }

    #[test]
    fn invalid_guest_info_blocks_details() {
        let mut guest = valid_guest();
        guest.email = "not-an-email".to_string();
        let err = transition(BookingStep::Details, WizardEvent::Next, Some(&guest)).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidGuestInfo(_)));

        let err = transition(BookingStep::Details, WizardEvent::Next, None).unwrap_err();
        assert!(matches!(err, TransitionError::MissingGuestInfo));
    }

    #[test]
    fn review_advances_unconditionally() {
        let next = transition(BookingStep::Review, WizardEvent::Next, None).unwrap();
        assert_eq!(next, BookingStep::Payment);
    }

    #[test]
    fn back_retreats_one_step_without_validation() {
        assert_eq!(
            transition(BookingStep::Payment, WizardEvent::Back, None).unwrap(),
            BookingStep::Review
        );
        assert_eq!(
            transition(BookingStep::Review, WizardEvent::Back, None).unwrap(),
            BookingStep::Details
        );
    }

    #[test]
    fn boundary_transitions_are_rejected() {
        assert!(matches!(
            transition(BookingStep::Details, WizardEvent::Back, None),
            Err(TransitionError::NoPreviousStep)
        ));
        assert!(matches!(
            transition(BookingStep::Payment, WizardEvent::Next, None),
            Err(TransitionError::NoNextStep)
        ));
    }
}
