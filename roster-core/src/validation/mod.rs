// Draft validation value objects
// These types mirror the add/edit form's validators. They are validated on
// creation and hand back trimmed values ready for submission.

mod email_address;
mod person_name;

pub use email_address::{EmailAddress, EmailAddressError};
pub use person_name::{PersonName, PersonNameError};

use roster_model::{UserDraft, UserUpdate};

/// The first field of a draft that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("First name: {0}")]
    FirstName(#[source] PersonNameError),

    #[error("Last name: {0}")]
    LastName(#[source] PersonNameError),

    #[error("Email: {0}")]
    Email(#[source] EmailAddressError),
}

/// Validate and trim a create draft
pub fn validate_draft(draft: UserDraft) -> Result<UserDraft, DraftError> {
    let (first_name, last_name, email) =
        validate_fields(&draft.first_name, &draft.last_name, &draft.email)?;

    Ok(UserDraft {
        first_name,
        last_name,
        email,
        ..draft
    })
}

/// Validate and trim an edit
pub fn validate_update(update: UserUpdate) -> Result<UserUpdate, DraftError> {
    let (first_name, last_name, email) =
        validate_fields(&update.first_name, &update.last_name, &update.email)?;

    Ok(UserUpdate {
        first_name,
        last_name,
        email,
        role: update.role,
    })
}

fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(String, String, String), DraftError> {
    let email = EmailAddress::new(email).map_err(DraftError::Email)?;
    let first_name = PersonName::new(first_name).map_err(DraftError::FirstName)?;
    let last_name = PersonName::new(last_name).map_err(DraftError::LastName)?;

    Ok((
        first_name.into_string(),
        last_name.into_string(),
        email.into_string(),
    ))
}
