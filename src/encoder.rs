//! Per-message-type layout encoders and dispatch
//!
//! Each private method assembles the 38-bit common header plus the ordered,
//! type-specific field list of one ITU-R M.1371 layout. The public
//! [`Encoder::encode`] dispatches on the message variant and returns the
//! concatenated bit string.

use chrono::{Datelike, Timelike};

use crate::bits::BitField;
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::itu;
use crate::message::{AisMessage, MessageType, Mmsi, NavAidKind, StaticReportPart};
use crate::sixbit::SixBitEncoder;

/// Communication state per ITU-R M.1371 §4.2.2.5 (SOTDMA/ITDMA)
const RADIO_STATUS: &str = "1100000000000000110";

/// Rate of turn 128 = not available
const ROT_NOT_AVAILABLE: &str = "10000000";

/// True heading 511 = not available
const HEADING_NOT_AVAILABLE: &str = "111111111";

/// Speed over ground: 0.1-knot resolution below 102.2 kn, 1023 = not available
const SPEED_LIMIT: f64 = 102.2;
const SPEED_SENTINEL: u64 = 1023;

/// Course over ground: 0.1-degree resolution below 360, 3600 = not available
const COURSE_LIMIT: f64 = 360.0;
const COURSE_SENTINEL: u64 = 3600;

/// Long-range variants at whole-knot / whole-degree resolution
const LR_SPEED_LIMIT: f64 = 63.0;
const LR_SPEED_SENTINEL: u64 = 63;
const LR_COURSE_SENTINEL: u64 = 511;

/// AIS message bit-stream encoder
///
/// Generic over the time source so the UTC-stamped layouts (types 1, 4, 9,
/// 18, 19 and 21) stay reproducible under a [`FixedClock`](crate::FixedClock).
#[derive(Debug, Clone)]
pub struct Encoder<C: Clock = SystemClock> {
    clock: C,
}

impl Encoder<SystemClock> {
    /// Create an encoder reading the wall clock
    pub fn new() -> Self {
        Encoder { clock: SystemClock }
    }
}

impl Default for Encoder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Encoder<C> {
    /// Create an encoder with an injected time source
    pub fn with_clock(clock: C) -> Self {
        Encoder { clock }
    }

    /// Encode a message into its bit string
    ///
    /// The result contains only `0` and `1` characters and is exactly as
    /// long as the published layout for the message type (variable for
    /// types 12, 14 and 21).
    pub fn encode(&self, message: &AisMessage) -> Result<String> {
        match message {
            AisMessage::PositionReport {
                mmsi,
                status,
                speed,
                course,
                lat,
                lon,
            } => self.position_report(*mmsi, *status, *speed, *course, *lat, *lon),
            AisMessage::BaseStationReport { mmsi, lat, lon } => {
                self.base_station_report(*mmsi, *lat, *lon)
            }
            AisMessage::StaticAndVoyageData {
                mmsi,
                callsign,
                name,
                vessel_type,
                length,
                beam,
                eta,
                draught_decimeters,
                destination,
            } => self.static_and_voyage_data(
                *mmsi,
                callsign,
                name,
                *vessel_type,
                *length,
                *beam,
                eta,
                *draught_decimeters,
                destination,
            ),
            AisMessage::SarAircraftPosition {
                mmsi,
                altitude,
                speed,
                course,
                lat,
                lon,
            } => self.sar_aircraft_position(*mmsi, *altitude, *speed, *course, *lat, *lon),
            AisMessage::AddressedSafetyMessage {
                mmsi,
                dest_mmsi,
                text,
            } => self.addressed_safety_message(*mmsi, *dest_mmsi, text),
            AisMessage::SafetyBroadcastMessage { mmsi, text } => {
                self.safety_broadcast_message(*mmsi, text)
            }
            AisMessage::Interrogation {
                mmsi,
                dest_mmsi,
                requested_type,
            } => self.interrogation(*mmsi, *dest_mmsi, *requested_type),
            AisMessage::ClassBPositionReport {
                mmsi,
                speed,
                course,
                lat,
                lon,
            } => self.class_b_position_report(*mmsi, *speed, *course, *lat, *lon),
            AisMessage::ExtendedClassBReport {
                mmsi,
                speed,
                course,
                lat,
                lon,
                name,
                vessel_type,
                length,
                beam,
            } => self.extended_class_b_report(
                *mmsi,
                *speed,
                *course,
                *lat,
                *lon,
                name,
                *vessel_type,
                *length,
                *beam,
            ),
            AisMessage::DataLinkManagement {
                mmsi,
                offset,
                slot_count,
                timeout_minutes,
                increment,
            } => self.data_link_management(*mmsi, *offset, *slot_count, *timeout_minutes, *increment),
            AisMessage::AidToNavigationReport {
                mmsi,
                navaid_type,
                name,
                lat,
                lon,
                length,
                beam,
                kind,
            } => self.aid_to_navigation_report(
                *mmsi,
                *navaid_type,
                name,
                *lat,
                *lon,
                *length,
                *beam,
                *kind,
            ),
            AisMessage::ChannelManagement {
                mmsi,
                channel_a,
                channel_b,
                ne_lat,
                ne_lon,
                sw_lat,
                sw_lon,
            } => self.channel_management(
                *mmsi, *channel_a, *channel_b, *ne_lat, *ne_lon, *sw_lat, *sw_lon,
            ),
            AisMessage::GroupAssignment {
                mmsi,
                ne_lat,
                ne_lon,
                sw_lat,
                sw_lon,
                interval,
                quiet_minutes,
            } => self.group_assignment(
                *mmsi,
                *ne_lat,
                *ne_lon,
                *sw_lat,
                *sw_lon,
                *interval,
                *quiet_minutes,
            ),
            AisMessage::StaticDataReport {
                mmsi,
                part,
                name,
                callsign,
                vessel_type,
                length,
                beam,
            } => self.static_data_report(*mmsi, *part, name, callsign, *vessel_type, *length, *beam),
            AisMessage::LongRangeBroadcast {
                mmsi,
                status,
                speed,
                course,
                lat,
                lon,
            } => self.long_range_broadcast(*mmsi, *status, *speed, *course, *lat, *lon),
        }
    }

    /// Common 38-bit header: type(6) + repeat indicator(2) + source MMSI(30)
    fn header(message_type: MessageType, mmsi: Mmsi) -> Result<String> {
        let mut bits = BitField::unsigned(u64::from(message_type.tag()), 6)?;
        bits.push_str(&BitField::unsigned(
            u64::from(itu::REPEAT_INDICATOR),
            2,
        )?);
        bits.push_str(&BitField::unsigned(
            u64::from(mmsi.value()),
            itu::MMSI_BITS,
        )?);
        Ok(bits)
    }

    fn speed_over_ground(speed: f64) -> Result<String> {
        BitField::scaled_or_sentinel(speed, SPEED_LIMIT, 10.0, 10, SPEED_SENTINEL)
    }

    fn course_over_ground(course: f64) -> Result<String> {
        BitField::scaled_or_sentinel(course, COURSE_LIMIT, 10.0, 12, COURSE_SENTINEL)
    }

    /// Seconds of the current UTC minute, 6 bits
    fn utc_seconds(&self) -> Result<String> {
        BitField::unsigned(u64::from(self.clock.now().second()), 6)
    }

    /// Type 1: Position report by a Class A mobile station (168 bits)
    fn position_report(
        &self,
        mmsi: Mmsi,
        status: u8,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    ) -> Result<String> {
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        let mut bits = Self::header(MessageType::PositionReport, mmsi)?;
        bits.push_str(&BitField::unsigned(u64::from(status), 4)?);
        bits.push_str(ROT_NOT_AVAILABLE);
        bits.push_str(&Self::speed_over_ground(speed)?);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&Self::course_over_ground(course)?);
        bits.push_str(HEADING_NOT_AVAILABLE);
        bits.push_str(&self.utc_seconds()?);
        bits.push_str("000000"); // Maneuver indicator, spare, RAIM
        bits.push_str(RADIO_STATUS);
        Ok(bits)
    }

    /// Type 4: Base station report (168 bits)
    ///
    /// Carries the UTC date and time of composition from the injected clock.
    fn base_station_report(&self, mmsi: Mmsi, lat: f64, lon: f64) -> Result<String> {
        let now = self.clock.now();
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        let mut bits = Self::header(MessageType::BaseStationReport, mmsi)?;
        bits.push_str(&BitField::unsigned(now.year() as u64, 14)?);
        bits.push_str(&BitField::unsigned(u64::from(now.month()), 4)?);
        bits.push_str(&BitField::unsigned(u64::from(now.day()), 5)?);
        bits.push_str(&BitField::unsigned(u64::from(now.hour()), 5)?);
        bits.push_str(&BitField::unsigned(u64::from(now.minute()), 6)?);
        bits.push_str(&BitField::unsigned(u64::from(now.second()), 6)?);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str("1111"); // Fix device: internal GNSS
        bits.push_str("00000000000"); // Spare + RAIM
        bits.push_str(RADIO_STATUS);
        Ok(bits)
    }

    /// Type 5: Static and voyage related data (424 bits)
    #[allow(clippy::too_many_arguments)]
    fn static_and_voyage_data(
        &self,
        mmsi: Mmsi,
        callsign: &str,
        name: &str,
        vessel_type: u8,
        length: u16,
        beam: u16,
        eta: &chrono::DateTime<chrono::Utc>,
        draught_decimeters: u8,
        destination: &str,
    ) -> Result<String> {
        let mut bits = Self::header(MessageType::StaticAndVoyageData, mmsi)?;
        bits.push_str("10"); // AIS version: ITU-R M.1371-5
        bits.push_str(&"0".repeat(30)); // IMO number, all zero for inland vessels
        bits.push_str(&SixBitEncoder::encode_field(
            callsign,
            itu::CALLSIGN_CHARS,
            42,
        )?);
        bits.push_str(&SixBitEncoder::encode_field(name, itu::NAME_CHARS, 120)?);
        bits.push_str(&BitField::unsigned(u64::from(vessel_type), 8)?);
        bits.push_str(&BitField::half_dimensions(length, beam)?);
        bits.push_str("1111"); // Fix device: internal GNSS
        bits.push_str(&BitField::unsigned(u64::from(eta.month()), 4)?);
        bits.push_str(&BitField::unsigned(u64::from(eta.day()), 5)?);
        bits.push_str(&BitField::unsigned(u64::from(eta.hour()), 5)?);
        bits.push_str(&BitField::unsigned(u64::from(eta.minute()), 6)?);
        bits.push_str(&BitField::unsigned(u64::from(draught_decimeters), 8)?);
        bits.push_str(&SixBitEncoder::encode_field(
            destination,
            itu::NAME_CHARS,
            120,
        )?);
        bits.push_str("00"); // DTE + spare
        Ok(bits)
    }

    /// Type 9: Standard SAR aircraft position report (168 bits)
    fn sar_aircraft_position(
        &self,
        mmsi: Mmsi,
        altitude: u16,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    ) -> Result<String> {
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        let mut bits = Self::header(MessageType::SarAircraftPosition, mmsi)?;
        bits.push_str(&BitField::unsigned(u64::from(altitude), 12)?);
        bits.push_str(&Self::speed_over_ground(speed)?);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&Self::course_over_ground(course)?);
        bits.push_str(&self.utc_seconds()?);
        // Altitude sensor, reserved, DTE, spare, assigned mode, RAIM,
        // ITDMA comm state follows
        bits.push_str("000000000000001");
        bits.push_str(RADIO_STATUS);
        Ok(bits)
    }

    /// Type 12: Addressed safety-related message (72 + 6 bits per character)
    fn addressed_safety_message(&self, mmsi: Mmsi, dest_mmsi: Mmsi, text: &str) -> Result<String> {
        let mut bits = Self::header(MessageType::AddressedSafetyMessage, mmsi)?;
        bits.push_str("00"); // Sequence number
        bits.push_str(&BitField::unsigned(
            u64::from(dest_mmsi.value()),
            itu::MMSI_BITS,
        )?);
        bits.push_str("00"); // Retransmit flag + spare
        bits.push_str(&SixBitEncoder::encode(text, 156)?);
        Ok(bits)
    }

    /// Type 14: Safety-related broadcast message (40 + 6 bits per character)
    fn safety_broadcast_message(&self, mmsi: Mmsi, text: &str) -> Result<String> {
        let mut bits = Self::header(MessageType::SafetyBroadcastMessage, mmsi)?;
        bits.push_str("00"); // Spare
        bits.push_str(&SixBitEncoder::encode(text, 161)?);
        Ok(bits)
    }

    /// Type 15: Interrogation for a single message type reply (88 bits)
    fn interrogation(
        &self,
        mmsi: Mmsi,
        dest_mmsi: Mmsi,
        requested_type: MessageType,
    ) -> Result<String> {
        let mut bits = Self::header(MessageType::Interrogation, mmsi)?;
        bits.push_str("00"); // Spare
        bits.push_str(&BitField::unsigned(
            u64::from(dest_mmsi.value()),
            itu::MMSI_BITS,
        )?);
        bits.push_str(&BitField::unsigned(u64::from(requested_type.tag()), 6)?);
        // Slot offset zero: autonomous allocation by the responding station
        bits.push_str(&"0".repeat(12));
        Ok(bits)
    }

    /// Type 18: Standard Class B CS position report (168 bits)
    fn class_b_position_report(
        &self,
        mmsi: Mmsi,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    ) -> Result<String> {
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        let mut bits = Self::header(MessageType::ClassBPositionReport, mmsi)?;
        bits.push_str("00000000"); // Regional reserved
        bits.push_str(&Self::speed_over_ground(speed)?);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&Self::course_over_ground(course)?);
        bits.push_str(HEADING_NOT_AVAILABLE);
        bits.push_str(&self.utc_seconds()?);
        // Regional reserved, CS mode, display, DSC, band, M22, assigned
        // mode, RAIM, ITDMA comm state follows
        bits.push_str("0011000001");
        bits.push_str(RADIO_STATUS);
        Ok(bits)
    }

    /// Type 19: Extended Class B CS position report (312 bits)
    #[allow(clippy::too_many_arguments)]
    fn extended_class_b_report(
        &self,
        mmsi: Mmsi,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
        name: &str,
        vessel_type: u8,
        length: u16,
        beam: u16,
    ) -> Result<String> {
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        let mut bits = Self::header(MessageType::ExtendedClassBReport, mmsi)?;
        bits.push_str("00000000"); // Regional reserved
        bits.push_str(&Self::speed_over_ground(speed)?);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&Self::course_over_ground(course)?);
        bits.push_str(HEADING_NOT_AVAILABLE);
        bits.push_str(&self.utc_seconds()?);
        bits.push_str("0000"); // Regional reserved
        bits.push_str(&SixBitEncoder::encode_field(name, itu::NAME_CHARS, 120)?);
        bits.push_str(&BitField::unsigned(u64::from(vessel_type), 8)?);
        bits.push_str(&BitField::half_dimensions(length, beam)?);
        // Internal GNSS, RAIM, DTE, assigned mode, unused
        bits.push_str("11110100000");
        Ok(bits)
    }

    /// Type 20: Data link management (72 bits)
    fn data_link_management(
        &self,
        mmsi: Mmsi,
        offset: u16,
        slot_count: u8,
        timeout_minutes: u8,
        increment: u16,
    ) -> Result<String> {
        let mut bits = Self::header(MessageType::DataLinkManagement, mmsi)?;
        bits.push_str("00"); // Spare
        bits.push_str(&BitField::unsigned(u64::from(offset), 12)?);
        bits.push_str(&BitField::unsigned(u64::from(slot_count), 4)?);
        bits.push_str(&BitField::unsigned(u64::from(timeout_minutes), 3)?);
        bits.push_str(&BitField::unsigned(u64::from(increment), 11)?);
        bits.push_str("00"); // Spare
        Ok(bits)
    }

    /// Type 21: Aid-to-navigation report (272 bits, up to 360 with the
    /// name extension)
    #[allow(clippy::too_many_arguments)]
    fn aid_to_navigation_report(
        &self,
        mmsi: Mmsi,
        navaid_type: u8,
        name: &str,
        lat: f64,
        lon: f64,
        length: u16,
        beam: u16,
        kind: NavAidKind,
    ) -> Result<String> {
        let (base_name, name_extension) = Self::navaid_name_fields(name)?;
        let (b_lat, b_lon) = BitField::position(lat, lon)?;
        // Virtual aids have no physical structure to measure
        let (dimensions, virtual_flag) = match kind {
            NavAidKind::Real => (BitField::half_dimensions(length, beam)?, '0'),
            NavAidKind::Virtual => (BitField::half_dimensions(0, 0)?, '1'),
        };
        let mut bits = Self::header(MessageType::AidToNavigationReport, mmsi)?;
        bits.push_str(&BitField::unsigned(u64::from(navaid_type), 5)?);
        bits.push_str(&base_name);
        bits.push('0'); // Position accuracy > 10 m
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&dimensions);
        bits.push_str("1111"); // Fix device: internal GNSS
        bits.push_str(&self.utc_seconds()?);
        bits.push_str("0000000000"); // Off-position, regional reserved, RAIM
        bits.push(virtual_flag);
        bits.push_str("00"); // Assigned mode + spare
        bits.push_str(&name_extension);
        Ok(bits)
    }

    /// Split an aid name into the 120-bit base field and the optional
    /// extension field
    ///
    /// Trailing `@` filler is stripped first. Names of up to 20 characters
    /// fit the base field alone; longer names put characters 21-34 into the
    /// extension, right-padded with zero bits to the next 8-bit boundary.
    fn navaid_name_fields(name: &str) -> Result<(String, String)> {
        let trimmed = name.trim_end_matches('@');
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() <= itu::NAME_CHARS {
            return Ok((
                SixBitEncoder::encode_field(trimmed, itu::NAME_CHARS, 120)?,
                String::new(),
            ));
        }
        let head: String = chars[..itu::NAME_CHARS].iter().collect();
        let tail: String = chars[itu::NAME_CHARS..].iter().take(14).collect();
        let mut extension = SixBitEncoder::encode(&tail, 14)?;
        let padding = (8 - extension.len() % 8) % 8;
        extension.push_str(&"0".repeat(padding));
        Ok((SixBitEncoder::encode(&head, itu::NAME_CHARS)?, extension))
    }

    /// Type 22: Channel management (168 bits)
    #[allow(clippy::too_many_arguments)]
    fn channel_management(
        &self,
        mmsi: Mmsi,
        channel_a: u16,
        channel_b: u16,
        ne_lat: f64,
        ne_lon: f64,
        sw_lat: f64,
        sw_lon: f64,
    ) -> Result<String> {
        let (b_ne_lat, b_ne_lon) = BitField::position_short(ne_lat, ne_lon)?;
        let (b_sw_lat, b_sw_lon) = BitField::position_short(sw_lat, sw_lon)?;
        let mut bits = Self::header(MessageType::ChannelManagement, mmsi)?;
        bits.push_str("00"); // Spare
        bits.push_str(&BitField::unsigned(u64::from(channel_a), 12)?);
        bits.push_str(&BitField::unsigned(u64::from(channel_b), 12)?);
        bits.push_str("0000"); // Tx/Rx mode: TxA/TxB, RxA/RxB
        bits.push('0'); // High power
        bits.push_str(&b_ne_lon);
        bits.push_str(&b_ne_lat);
        bits.push_str(&b_sw_lon);
        bits.push_str(&b_sw_lat);
        bits.push_str("000"); // Addressed + channel A/B bandwidth
        bits.push_str("100"); // Transitional zone size: 5 nautical miles
        bits.push_str(&"0".repeat(23)); // Spare
        Ok(bits)
    }

    /// Type 23: Group assignment command (160 bits)
    #[allow(clippy::too_many_arguments)]
    fn group_assignment(
        &self,
        mmsi: Mmsi,
        ne_lat: f64,
        ne_lon: f64,
        sw_lat: f64,
        sw_lon: f64,
        interval: u8,
        quiet_minutes: u8,
    ) -> Result<String> {
        let (b_ne_lat, b_ne_lon) = BitField::position_short(ne_lat, ne_lon)?;
        let (b_sw_lat, b_sw_lon) = BitField::position_short(sw_lat, sw_lon)?;
        let mut bits = Self::header(MessageType::GroupAssignment, mmsi)?;
        bits.push_str("00"); // Spare
        bits.push_str(&b_ne_lon);
        bits.push_str(&b_ne_lat);
        bits.push_str(&b_sw_lon);
        bits.push_str(&b_sw_lat);
        bits.push_str("0000"); // Station type: all stations
        bits.push_str("00000000"); // Ship type: all ships
        bits.push_str(&"0".repeat(22)); // Spare
        bits.push_str("00"); // Tx/Rx mode
        bits.push_str(&BitField::unsigned(u64::from(interval), 4)?);
        bits.push_str(&BitField::unsigned(u64::from(quiet_minutes), 4)?);
        bits.push_str("000000"); // Spare
        Ok(bits)
    }

    /// Type 24: Static data report, part A or B (168 bits)
    #[allow(clippy::too_many_arguments)]
    fn static_data_report(
        &self,
        mmsi: Mmsi,
        part: StaticReportPart,
        name: &str,
        callsign: &str,
        vessel_type: u8,
        length: u16,
        beam: u16,
    ) -> Result<String> {
        let mut bits = Self::header(MessageType::StaticDataReport, mmsi)?;
        match part {
            StaticReportPart::A => {
                bits.push_str("00"); // Part number A
                bits.push_str(&SixBitEncoder::encode_field(name, itu::NAME_CHARS, 120)?);
                bits.push_str("00000000"); // Spare
            }
            StaticReportPart::B => {
                bits.push_str("01"); // Part number B
                bits.push_str(&BitField::unsigned(u64::from(vessel_type), 8)?);
                bits.push_str(&"0".repeat(42)); // Vendor ID, model and serial
                bits.push_str(&SixBitEncoder::encode_field(
                    callsign,
                    itu::CALLSIGN_CHARS,
                    42,
                )?);
                bits.push_str(&BitField::half_dimensions(length, beam)?);
                bits.push_str("111100"); // Internal GNSS + spare
            }
        }
        Ok(bits)
    }

    /// Type 27: Long-range AIS broadcast message (96 bits)
    fn long_range_broadcast(
        &self,
        mmsi: Mmsi,
        status: u8,
        speed: f64,
        course: f64,
        lat: f64,
        lon: f64,
    ) -> Result<String> {
        let (b_lat, b_lon) = BitField::position_short(lat, lon)?;
        let mut bits = Self::header(MessageType::LongRangeBroadcast, mmsi)?;
        bits.push_str("00"); // Position accuracy + RAIM
        bits.push_str(&BitField::unsigned(u64::from(status), 4)?);
        bits.push_str(&b_lon);
        bits.push_str(&b_lat);
        bits.push_str(&BitField::scaled_or_sentinel(
            speed,
            LR_SPEED_LIMIT,
            1.0,
            6,
            LR_SPEED_SENTINEL,
        )?);
        bits.push_str(&BitField::scaled_or_sentinel(
            course,
            COURSE_LIMIT,
            1.0,
            9,
            LR_COURSE_SENTINEL,
        )?);
        bits.push_str("00"); // Position latency + spare
        Ok(bits)
    }
}
