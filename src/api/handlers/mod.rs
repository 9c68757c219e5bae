//! HTTP request handlers.

pub mod auth_handler;
pub mod book_handler;
pub mod user_handler;

use crate::errors::{AppError, AppResult};

/// Parse a path id as a non-negative integer.
///
/// The parse error text is surfaced to the caller as a 400.
pub(crate) fn parse_id(raw: &str) -> AppResult<i32> {
    let id: u32 = raw
        .parse()
        .map_err(|e: std::num::ParseIntError| AppError::validation(e.to_string()))?;

    i32::try_from(id).map_err(|_| AppError::validation("id out of range"))
}

#[cfg(test)]
mod tests {
    use super::parse_id;
    use crate::errors::AppError;

    #[test]
    fn valid_id_parses() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn negative_and_non_numeric_ids_are_rejected() {
        assert!(matches!(parse_id("-1"), Err(AppError::Validation(_))));
        assert!(matches!(parse_id("abc"), Err(AppError::Validation(_))));
        assert!(matches!(parse_id(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn ids_beyond_i32_are_rejected() {
        assert!(matches!(
            parse_id("4294967295"),
            Err(AppError::Validation(_))
        ));
    }
}
