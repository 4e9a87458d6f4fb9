use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("failed to serialize instruction data: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("space ({space_x}, {space_y}) does not fit the brief coordinate range")]
    CoordinateOutOfRange { space_x: i64, space_y: i64 },
}
