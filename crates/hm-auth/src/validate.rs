//! Field validation. Runs before any side effect in both flows; field names
//! match the wire format so the API can surface them directly.

use crate::error::{AuthError, Result as AuthResult};
use crate::login::LoginRequest;
use crate::provisioning::RegistrationRequest;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;
const MIN_HOTEL_CODE_LEN: usize = 2;
const MAX_EMAIL_LEN: usize = 254;

pub(crate) fn registration(request: &RegistrationRequest) -> AuthResult<()> {
    min_len("fullName", &request.full_name, MIN_NAME_LEN)?;
    min_len("hotelName", &request.hotel_name, MIN_NAME_LEN)?;
    email("email", &request.email)?;
    min_len("password", &request.password, MIN_PASSWORD_LEN)?;

    Ok(())
}

pub(crate) fn login(request: &LoginRequest) -> AuthResult<()> {
    email("email", &request.email)?;
    min_len("password", &request.password, 1)?;
    min_len("hotelCode", &request.hotel_code, MIN_HOTEL_CODE_LEN)?;

    Ok(())
}

fn min_len(field: &str, value: &str, min: usize) -> AuthResult<()> {
    if value.trim().chars().count() < min {
        let message = if min == 1 {
            format!("{} is required", field)
        } else {
            format!("{} must be at least {} characters", field, min)
        };
        return Err(AuthError::validation(field, message));
    }

    Ok(())
}

/// Deliberately modest well-formedness check: exactly one '@', a non-empty
/// local part, a dotted domain, no whitespace. Deliverability is the
/// identity provider's problem.
fn email(field: &str, value: &str) -> AuthResult<()> {
    let value = value.trim();

    let well_formed = value.len() <= MAX_EMAIL_LEN
        && !value.chars().any(char::is_whitespace)
        && value
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            });

    if !well_formed {
        return Err(AuthError::validation(field, "Invalid email address"));
    }

    Ok(())
}
