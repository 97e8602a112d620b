//! Error types for AIS message encoding

use thiserror::Error;

/// Result type for AIS encoding operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Error types encountered while composing AIS bit streams
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A value does not fit the bit width of its target field
    #[error("Field overflow: {0}")]
    FieldOverflow(String),

    /// A scaled value lies outside its two's-complement range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// A text character has no mapping in the six-bit alphabet
    #[error("Unmappable character: {0}")]
    UnmappableCharacter(String),

    /// MMSI outside the 9-digit station identifier domain
    #[error("Invalid MMSI: {0}")]
    InvalidMmsi(String),

    /// Message type tag with no encoder
    #[error("Unsupported message type: {0}")]
    UnsupportedMessageType(String),
}

impl EncodeError {
    /// Create a new FieldOverflow error
    pub fn field_overflow(msg: impl Into<String>) -> Self {
        EncodeError::FieldOverflow(msg.into())
    }

    /// Create a new ValueOutOfRange error
    pub fn value_out_of_range(msg: impl Into<String>) -> Self {
        EncodeError::ValueOutOfRange(msg.into())
    }

    /// Create a new UnmappableCharacter error
    pub fn unmappable_character(msg: impl Into<String>) -> Self {
        EncodeError::UnmappableCharacter(msg.into())
    }

    /// Create a new InvalidMmsi error
    pub fn invalid_mmsi(msg: impl Into<String>) -> Self {
        EncodeError::InvalidMmsi(msg.into())
    }

    /// Create a new UnsupportedMessageType error
    pub fn unsupported_message_type(msg: impl Into<String>) -> Self {
        EncodeError::UnsupportedMessageType(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::field_overflow("test");
        assert!(err.to_string().contains("Field overflow"));

        let err = EncodeError::unsupported_message_type("7");
        assert!(err.to_string().contains("Unsupported message type"));
    }
}
