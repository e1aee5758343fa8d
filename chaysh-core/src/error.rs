use thiserror::Error;

/// Rejected before any external call is made. Surfaces to the caller as a
/// client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Failure of the outbound completion call. Converted to a fallback structured
/// result at the boundary; never propagated raw to the HTTP caller.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Completion request timed out after {0}s")]
    Timeout(u64),

    #[error("Provider API error: {0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned no choices")]
    EmptyResponse,
}

/// Model output did not contain the expected JSON when structured output was
/// requested. Converted to a plain-text or fallback response at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No JSON block found in model output")]
    NoJsonBlock,

    #[error("Invalid JSON in model output: {0}")]
    InvalidJson(String),
}

#[derive(Error, Debug)]
pub enum ChayshError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChayshError>;
