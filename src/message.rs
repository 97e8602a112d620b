//! Message types and data model for AIS encoding
//!
//! Each supported ITU-R M.1371 message type is a variant of [`AisMessage`]
//! carrying only the fields that layout actually uses, so there is never any
//! ambiguity about which parameters are live for a given encode call.

use crate::error::{EncodeError, Result};
use chrono::{DateTime, Utc};

/// Maritime Mobile Service Identity, a 9-decimal-digit station identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mmsi(u32);

impl Mmsi {
    /// Maximum MMSI value (9 decimal digits)
    pub const MAX: u32 = 999_999_999;

    /// Create a new MMSI, validating it fits 9 decimal digits
    pub fn new(mmsi: u32) -> Result<Self> {
        if mmsi > Self::MAX {
            return Err(EncodeError::invalid_mmsi(format!(
                "MMSI {} out of range [0, {}]",
                mmsi,
                Self::MAX
            )));
        }
        Ok(Mmsi(mmsi))
    }

    /// Get the raw MMSI value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

/// Supported ITU-R M.1371 message type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    /// Type 1: Position report, Class A mobile station
    PositionReport = 1,
    /// Type 4: Base station report
    BaseStationReport = 4,
    /// Type 5: Static and voyage related data
    StaticAndVoyageData = 5,
    /// Type 9: Standard SAR aircraft position report
    SarAircraftPosition = 9,
    /// Type 12: Addressed safety-related message
    AddressedSafetyMessage = 12,
    /// Type 14: Safety-related broadcast message
    SafetyBroadcastMessage = 14,
    /// Type 15: Interrogation
    Interrogation = 15,
    /// Type 18: Standard Class B CS position report
    ClassBPositionReport = 18,
    /// Type 19: Extended Class B CS position report
    ExtendedClassBReport = 19,
    /// Type 20: Data link management
    DataLinkManagement = 20,
    /// Type 21: Aid-to-navigation report
    AidToNavigationReport = 21,
    /// Type 22: Channel management
    ChannelManagement = 22,
    /// Type 23: Group assignment command
    GroupAssignment = 23,
    /// Type 24: Static data report
    StaticDataReport = 24,
    /// Type 27: Long-range AIS broadcast message
    LongRangeBroadcast = 27,
}

impl MessageType {
    /// Get the numeric type tag carried in the message header
    pub fn tag(&self) -> u8 {
        *self as u8
    }

    /// Published total bit length, or `None` for the variable-length
    /// types 12, 14 and 21
    pub fn fixed_bit_length(&self) -> Option<usize> {
        match self {
            MessageType::PositionReport => Some(168),
            MessageType::BaseStationReport => Some(168),
            MessageType::StaticAndVoyageData => Some(424),
            MessageType::SarAircraftPosition => Some(168),
            MessageType::AddressedSafetyMessage => None,
            MessageType::SafetyBroadcastMessage => None,
            MessageType::Interrogation => Some(88),
            MessageType::ClassBPositionReport => Some(168),
            MessageType::ExtendedClassBReport => Some(312),
            MessageType::DataLinkManagement => Some(72),
            MessageType::AidToNavigationReport => None,
            MessageType::ChannelManagement => Some(168),
            MessageType::GroupAssignment => Some(160),
            MessageType::StaticDataReport => Some(168),
            MessageType::LongRangeBroadcast => Some(96),
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(MessageType::PositionReport),
            4 => Ok(MessageType::BaseStationReport),
            5 => Ok(MessageType::StaticAndVoyageData),
            9 => Ok(MessageType::SarAircraftPosition),
            12 => Ok(MessageType::AddressedSafetyMessage),
            14 => Ok(MessageType::SafetyBroadcastMessage),
            15 => Ok(MessageType::Interrogation),
            18 => Ok(MessageType::ClassBPositionReport),
            19 => Ok(MessageType::ExtendedClassBReport),
            20 => Ok(MessageType::DataLinkManagement),
            21 => Ok(MessageType::AidToNavigationReport),
            22 => Ok(MessageType::ChannelManagement),
            23 => Ok(MessageType::GroupAssignment),
            24 => Ok(MessageType::StaticDataReport),
            27 => Ok(MessageType::LongRangeBroadcast),
            _ => Err(EncodeError::unsupported_message_type(format!(
                "No encoder for message type {}",
                value
            ))),
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type {}", self.tag())
    }
}

/// Whether an aid to navigation physically exists at the reported position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavAidKind {
    /// A real aid at the reported position
    Real,
    /// A virtual aid; no physical structure, zero dimensions
    Virtual,
}

/// Part selector for the type 24 static data report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticReportPart {
    /// Part A: vessel name
    A,
    /// Part B: vessel type, vendor ID, callsign and dimensions
    B,
}

/// A single AIS message ready for encoding
///
/// One variant per supported message type. Numeric fields are assumed
/// pre-validated by the caller against the domains their bit widths imply;
/// the encoder fails loudly instead of truncating when they are not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AisMessage {
    /// Type 1: Position report by a Class A mobile station
    PositionReport {
        mmsi: Mmsi,
        /// Navigation status, 0-15 (e.g. 0 = under way using engine,
        /// 1 = at anchor, 5 = moored, 15 = undefined)
        status: u8,
        /// Speed over ground in knots
        speed: f64,
        /// Course over ground in degrees
        course: f64,
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
    },
    /// Type 4: Base station report with the current UTC date and time
    BaseStationReport { mmsi: Mmsi, lat: f64, lon: f64 },
    /// Type 5: Static and voyage related data
    StaticAndVoyageData {
        mmsi: Mmsi,
        /// Callsign, up to 7 six-bit characters
        callsign: String,
        /// Vessel name, up to 20 six-bit characters
        name: String,
        /// Vessel type code
        vessel_type: u8,
        /// Length over all in meters
        length: u16,
        /// Beam in meters
        beam: u16,
        /// Estimated time of arrival
        eta: DateTime<Utc>,
        /// Draught in decimeters
        draught_decimeters: u8,
        /// Destination, up to 20 six-bit characters
        destination: String,
    },
    /// Type 9: Standard SAR aircraft position report
    SarAircraftPosition {
        mmsi: Mmsi,
        /// Altitude in meters, 0-4095
        altitude: u16,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    },
    /// Type 12: Addressed safety-related message
    AddressedSafetyMessage {
        mmsi: Mmsi,
        dest_mmsi: Mmsi,
        /// Message text, up to 156 six-bit characters
        text: String,
    },
    /// Type 14: Safety-related broadcast message
    SafetyBroadcastMessage {
        mmsi: Mmsi,
        /// Message text, up to 161 six-bit characters
        text: String,
    },
    /// Type 15: Interrogation of one station for one message type
    Interrogation {
        mmsi: Mmsi,
        dest_mmsi: Mmsi,
        /// Message type requested from the interrogated station
        requested_type: MessageType,
    },
    /// Type 18: Standard Class B CS position report
    ClassBPositionReport {
        mmsi: Mmsi,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    },
    /// Type 19: Extended Class B CS position report
    ExtendedClassBReport {
        mmsi: Mmsi,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
        name: String,
        vessel_type: u8,
        length: u16,
        beam: u16,
    },
    /// Type 20: Data link management (FATDMA slot reservation)
    DataLinkManagement {
        mmsi: Mmsi,
        /// Reserved offset number, 12 bits
        offset: u16,
        /// Number of consecutive slots, 4 bits
        slot_count: u8,
        /// Allocation timeout in minutes, 3 bits
        timeout_minutes: u8,
        /// Repeat increment, 11 bits
        increment: u16,
    },
    /// Type 21: Aid-to-navigation report
    AidToNavigationReport {
        mmsi: Mmsi,
        /// Aid type code, 5 bits
        navaid_type: u8,
        /// Aid name, up to 34 six-bit characters (20 in the base field,
        /// 14 more in the extension)
        name: String,
        lat: f64,
        lon: f64,
        length: u16,
        beam: u16,
        kind: NavAidKind,
    },
    /// Type 22: Channel management for a geographic region
    ChannelManagement {
        mmsi: Mmsi,
        /// Channel A number, 12 bits
        channel_a: u16,
        /// Channel B number, 12 bits
        channel_b: u16,
        /// North-east corner of the region
        ne_lat: f64,
        ne_lon: f64,
        /// South-west corner of the region
        sw_lat: f64,
        sw_lon: f64,
    },
    /// Type 23: Group assignment command for a geographic region
    GroupAssignment {
        mmsi: Mmsi,
        ne_lat: f64,
        ne_lon: f64,
        sw_lat: f64,
        sw_lon: f64,
        /// Report interval code, 4 bits
        interval: u8,
        /// Quiet time in minutes, 4 bits
        quiet_minutes: u8,
    },
    /// Type 24: Static data report, part A or B
    StaticDataReport {
        mmsi: Mmsi,
        part: StaticReportPart,
        /// Vessel name (part A)
        name: String,
        /// Callsign (part B)
        callsign: String,
        /// Vessel type code (part B)
        vessel_type: u8,
        length: u16,
        beam: u16,
    },
    /// Type 27: Long-range AIS broadcast message
    LongRangeBroadcast {
        mmsi: Mmsi,
        status: u8,
        /// Speed over ground in knots, whole-knot resolution
        speed: f64,
        /// Course over ground in degrees, whole-degree resolution
        course: f64,
        lat: f64,
        lon: f64,
    },
}

impl AisMessage {
    /// Get the message type tag of this message
    pub fn message_type(&self) -> MessageType {
        match self {
            AisMessage::PositionReport { .. } => MessageType::PositionReport,
            AisMessage::BaseStationReport { .. } => MessageType::BaseStationReport,
            AisMessage::StaticAndVoyageData { .. } => MessageType::StaticAndVoyageData,
            AisMessage::SarAircraftPosition { .. } => MessageType::SarAircraftPosition,
            AisMessage::AddressedSafetyMessage { .. } => MessageType::AddressedSafetyMessage,
            AisMessage::SafetyBroadcastMessage { .. } => MessageType::SafetyBroadcastMessage,
            AisMessage::Interrogation { .. } => MessageType::Interrogation,
            AisMessage::ClassBPositionReport { .. } => MessageType::ClassBPositionReport,
            AisMessage::ExtendedClassBReport { .. } => MessageType::ExtendedClassBReport,
            AisMessage::DataLinkManagement { .. } => MessageType::DataLinkManagement,
            AisMessage::AidToNavigationReport { .. } => MessageType::AidToNavigationReport,
            AisMessage::ChannelManagement { .. } => MessageType::ChannelManagement,
            AisMessage::GroupAssignment { .. } => MessageType::GroupAssignment,
            AisMessage::StaticDataReport { .. } => MessageType::StaticDataReport,
            AisMessage::LongRangeBroadcast { .. } => MessageType::LongRangeBroadcast,
        }
    }

    /// Get the source MMSI of this message
    pub fn source_mmsi(&self) -> Mmsi {
        match self {
            AisMessage::PositionReport { mmsi, .. }
            | AisMessage::BaseStationReport { mmsi, .. }
            | AisMessage::StaticAndVoyageData { mmsi, .. }
            | AisMessage::SarAircraftPosition { mmsi, .. }
            | AisMessage::AddressedSafetyMessage { mmsi, .. }
            | AisMessage::SafetyBroadcastMessage { mmsi, .. }
            | AisMessage::Interrogation { mmsi, .. }
            | AisMessage::ClassBPositionReport { mmsi, .. }
            | AisMessage::ExtendedClassBReport { mmsi, .. }
            | AisMessage::DataLinkManagement { mmsi, .. }
            | AisMessage::AidToNavigationReport { mmsi, .. }
            | AisMessage::ChannelManagement { mmsi, .. }
            | AisMessage::GroupAssignment { mmsi, .. }
            | AisMessage::StaticDataReport { mmsi, .. }
            | AisMessage::LongRangeBroadcast { mmsi, .. } => *mmsi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mmsi_creation() {
        assert!(Mmsi::new(0).is_ok());
        assert!(Mmsi::new(999_999_999).is_ok());
        assert!(Mmsi::new(1_000_000_000).is_err());
    }

    #[test]
    fn test_mmsi_display() {
        let mmsi = Mmsi::new(247320162).unwrap();
        assert_eq!(mmsi.to_string(), "247320162");
        let mmsi = Mmsi::new(42).unwrap();
        assert_eq!(mmsi.to_string(), "000000042");
    }

    #[test]
    fn test_message_type_conversion() {
        let mt: MessageType = 21u8.try_into().unwrap();
        assert_eq!(mt, MessageType::AidToNavigationReport);
        assert_eq!(mt.tag(), 21);

        let result: Result<MessageType> = 7u8.try_into();
        assert!(matches!(
            result,
            Err(EncodeError::UnsupportedMessageType(_))
        ));
    }

    #[test]
    fn test_fixed_bit_lengths() {
        assert_eq!(
            MessageType::PositionReport.fixed_bit_length(),
            Some(168)
        );
        assert_eq!(
            MessageType::StaticAndVoyageData.fixed_bit_length(),
            Some(424)
        );
        assert_eq!(MessageType::AddressedSafetyMessage.fixed_bit_length(), None);
        assert_eq!(MessageType::AidToNavigationReport.fixed_bit_length(), None);
    }

    #[test]
    fn test_message_type_of_variant() {
        let msg = AisMessage::SafetyBroadcastMessage {
            mmsi: Mmsi::new(247320162).unwrap(),
            text: "SART ACTIVE".to_string(),
        };
        assert_eq!(msg.message_type(), MessageType::SafetyBroadcastMessage);
        assert_eq!(msg.source_mmsi().value(), 247320162);
    }
}
