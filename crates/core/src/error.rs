#[derive(Debug, thiserror::Error)]
pub enum FrontDeskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("enter a name or a date of birth to search")]
    EmptyQuery,
    #[error("no patient record with ID {0}")]
    RecordNotFound(String),
    #[error("a patient record with ID {0} already exists")]
    DuplicateRecord(String),
    #[error("patient {0} is already checked in")]
    AlreadyCheckedIn(String),
    #[error("no patient selected")]
    NoSelection,
    #[error("record {0} is not in the current search results")]
    SelectionOutsideResults(String),
    #[error("failed to render patient summary: {0}")]
    SummaryRender(serde_json::Error),
    #[error(transparent)]
    Text(#[from] frontdesk_types::TextError),
}

pub type FrontDeskResult<T> = std::result::Result<T, FrontDeskError>;
