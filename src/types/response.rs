//! Shared response types.

use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response, used by create/update/delete endpoints.
///
/// The message literals are part of the wire contract; callers pin their
/// exact text.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Operation outcome literal
    #[schema(example = "success create new users")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
