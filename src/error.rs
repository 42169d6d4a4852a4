use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` is empty")]
    Empty(&'static str),
    #[error("`{0}` still holds its cfg.toml.example placeholder")]
    Placeholder(&'static str),
    #[error("`{0}` is not an email address")]
    Email(&'static str),
    #[error("`private_key` is not a PEM `PRIVATE KEY` block")]
    Pem,
}
