use thiserror::Error;

/// Failures raised by the directory client and surfaced through the
/// response envelope. Each variant maps to one envelope message shape,
/// so the formatter matches on the variant instead of on error text.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("token request failed: {0}")]
    TokenRequest(String),

    #[error("group not found: {0}")]
    GroupNotFound(String),

    #[error("directory request failed: {0}")]
    Transport(String),

    #[error("unexpected directory response: {0}")]
    MalformedResponse(String),
}

impl DirectoryError {
    pub fn is_group_not_found(&self) -> bool {
        matches!(self, DirectoryError::GroupNotFound(_))
    }
}
