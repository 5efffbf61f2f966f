use crate::error::{RenderError, Result};

/// Check that `address` can be placed in a mail header as a bare
/// `local@domain` mailbox.
pub fn validate_email(address: &str) -> Result<()> {
    let reject = |reason: &str| -> Result<()> {
        Err(RenderError::InvalidEmail(format!("'{}' {}", address, reason)))
    };

    let Some((local, domain)) = address.split_once('@') else {
        return reject("has no '@' separator");
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return reject("is not of the form local@domain");
    }

    if address
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | ',' | '"'))
    {
        return reject("contains characters not allowed in a bare address");
    }

    Ok(())
}
