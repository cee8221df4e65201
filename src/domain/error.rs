use thiserror::Error;

/// Input rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("text is required")]
    EmptyText,
    #[error("quotes[{0}].text is required")]
    EmptyBatchText(usize),
    #[error("quotes must contain at least one quote")]
    EmptyBatch,
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("no valid fields to update")]
    NoValidFields,
}

/// Trims `raw` and rejects it when nothing is left.
pub(crate) fn required_text(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
