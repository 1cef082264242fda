use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern `{0}` must start with `/`")]
    NotAbsolute(String),
    #[error("route pattern `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("route pattern `{0}` contains a parameter without a name")]
    EmptyParamName(String),
    #[error("route pattern `{pattern}` binds parameter `{name}` more than once")]
    DuplicateParam { pattern: String, name: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    #[error("no route is registered for the requested view")]
    UnknownView,
    #[error("missing value for path parameter `{0}`")]
    MissingParam(String),
}
