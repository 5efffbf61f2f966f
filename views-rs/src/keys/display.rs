use crate::models::UserRef;
use crate::utils::text::non_blank;

/// Turns a user reference into the name shown on pages
pub trait UserDisplay: Send + Sync {
    fn display_name(&self, user: &UserRef) -> String;
}

/// Full name when the profile has one, login name otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUserDisplay;

impl UserDisplay for DefaultUserDisplay {
    fn display_name(&self, user: &UserRef) -> String {
        user.full_name
            .as_deref()
            .and_then(non_blank)
            .unwrap_or(&user.username)
            .to_string()
    }
}

impl<F> UserDisplay for F
where
    F: Fn(&UserRef) -> String + Send + Sync,
{
    fn display_name(&self, user: &UserRef) -> String {
        self(user)
    }
}
