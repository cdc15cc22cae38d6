mod config;
mod inspect;

pub use config::ConfigError;
pub use inspect::InspectError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inspect(#[from] InspectError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert_transparently() {
        let err: Error = ConfigError::unsupported_format("toml").into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), ConfigError::unsupported_format("toml").to_string());

        let err: Error = InspectError::DanglingKey.into();
        assert!(matches!(err, Error::Inspect(_)));
    }
}
