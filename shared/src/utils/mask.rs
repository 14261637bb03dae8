//! Masking helpers for log output

/// Mask an email address for logging (e.g., `j***@example.com`).
///
/// Keeps the first character of the local part and the whole domain.
/// Inputs without an `@` are masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
        assert_eq!(mask_email("  j@x.io "), "j***@x.io");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email("no-at-sign"), "***");
        assert_eq!(mask_email(""), "***");
    }

    #[test]
    fn test_mask_email_multibyte_first_char() {
        assert_eq!(mask_email("éloise@example.fr"), "é***@example.fr");
    }
}
