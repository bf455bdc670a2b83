use thiserror::Error;

/// Errors raised while configuring or running page route discovery
#[derive(Debug, Error)]
pub enum RouteError {
    /// A page declared a route template that would replace its file-based prefix
    #[error("the route for the page at '{relative_path}' cannot start with / or ~/. Pages do not support overriding the file path of the page")]
    OverrideTemplate { relative_path: String },

    #[error("the value for option '{option}' cannot be empty")]
    EmptyDirectory { option: &'static str },

    #[error("the value '{value}' for option '{option}' must be a root-relative path starting with '/'")]
    NotRootRelative { option: &'static str, value: String },

    #[error("failed to decode compiled page manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
