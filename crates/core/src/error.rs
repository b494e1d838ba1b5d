use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },
}

impl CoreError {
    /// Request keys that were absent or blank, in request order.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::Validation { missing } => missing,
        }
    }
}
