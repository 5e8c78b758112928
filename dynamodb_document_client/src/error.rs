#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration could not be resolved: {0}")]
    Configuration(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("No Item")]
    NotFound,
    #[error("Failed to encode item: {0}")]
    Encode(#[source] serde_dynamo::Error),
    #[error("Failed to decode item: {0}")]
    Decode(#[source] serde_dynamo::Error),
    #[error(transparent)]
    DynamoDb(Box<aws_sdk_dynamodb::Error>),
    #[error("Client is bound to table `{bound}`, not `{requested}`")]
    TableMismatch { bound: String, requested: String },
}

pub(crate) fn from_aws_sdk_dynamodb_error(e: impl Into<aws_sdk_dynamodb::Error>) -> Error {
    Error::DynamoDb(Box::new(e.into()))
}

impl From<aws_sdk_dynamodb::Error> for Error {
    fn from(value: aws_sdk_dynamodb::Error) -> Self {
        Self::DynamoDb(Box::new(value))
    }
}
