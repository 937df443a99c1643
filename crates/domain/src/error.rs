#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::NotFound => CreateError::Other("not found".into()),
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_error_from_read_error() {
        assert!(matches!(
            CreateError::from(ReadError::Storage(StorageError::InvalidData(
                "foo".to_string()
            ))),
            CreateError::Storage(StorageError::InvalidData(data)) if data == "foo"
        ));
        assert!(matches!(
            CreateError::from(ReadError::Other("foo".into())),
            CreateError::Other(error) if error.to_string() == "foo"
        ));
    }
}
