use thiserror::Error;

/// Errors surfaced by the navigation helpers.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid breakpoint \"{token}\", expected one of sm, md, lg, xl, xxl")]
    InvalidBreakpoint { token: String },

    #[error("invalid partial: {0}")]
    InvalidPartial(String),

    #[error("no container registered under \"{0}\"")]
    UnknownContainer(String),

    #[error("partial rendering failed: {0}")]
    Partial(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type NavResult<T> = Result<T, NavigationError>;
