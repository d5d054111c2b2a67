use crate::error::SnipError;

pub type SnipResult<T> = Result<T, SnipError>;
