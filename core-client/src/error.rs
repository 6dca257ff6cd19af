use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The running application is not on the SDK allow-list.
    #[error("App {{{app_id}}} is not allowed to use this sdk")]
    Unauthorized { app_id: String },

    #[error("Invalid allow-list: {0}")]
    InvalidAllowList(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(#[from] core_runtime::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
