use std::fmt::Display;
use thiserror::Error;

/// Raised while turning a `Serialize` value into a [`crate::Value`].
///
/// The built-in serializer never produces one on its own; it only carries
/// errors that a hand-written `Serialize` impl chose to return.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("{message}")]
    Custom { message: String },

    #[error("map key was serialized without a value")]
    DanglingKey,

    #[error("map value was serialized without a key")]
    OrphanValue,

    #[error("malformed complex number: {found}")]
    MalformedComplex { found: String },
}

impl InspectError {
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    pub fn malformed_complex(found: impl Into<String>) -> Self {
        Self::MalformedComplex {
            found: found.into(),
        }
    }
}

impl serde::ser::Error for InspectError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::custom(msg.to_string())
    }
}
