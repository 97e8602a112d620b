//! # AIS Message Encoder
//!
//! A Rust library for composing bit-exact binary payloads of maritime AIS
//! (Automatic Identification System) messages per ITU-R M.1371.
//!
//! AIS is the VHF tracking protocol used by vessels, base stations, aids to
//! navigation and SAR aircraft. This library provides:
//!
//! - Bit-field primitives (unsigned, signed fixed-point, sentinel fields)
//! - Six-bit ASCII text encoding
//! - Per-message-type layout encoders for types 1, 4, 5, 9, 12, 14, 15,
//!   18, 19, 20, 21, 22, 23, 24 and 27
//! - An injectable clock so timestamped messages stay reproducible in tests
//!
//! The output is a raw string of `0`/`1` characters. Packaging into AIVDM
//! sentences (six-bit armoring, checksums) is left to the transport layer.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use ais_encoder::{AisMessage, Encoder, Mmsi};
//!
//! let message = AisMessage::PositionReport {
//!     mmsi: Mmsi::new(247320162)?,
//!     status: 15,
//!     speed: 0.1,
//!     course: 83.4,
//!     lat: 48.0,
//!     lon: 10.0,
//! };
//! let bits = Encoder::new().encode(&message)?;
//! assert_eq!(bits.len(), 168);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub mod clock;
pub mod encoder;
pub mod error;
pub mod message;
pub mod sixbit;

pub use clock::{Clock, FixedClock, SystemClock};
pub use encoder::Encoder;
pub use error::{EncodeError, Result};
pub use message::{AisMessage, MessageType, Mmsi, NavAidKind, StaticReportPart};

/// ITU-R M.1371 layout constants
pub mod itu {
    /// Common header length in bits: type(6) + repeat(2) + MMSI(30)
    pub const HEADER_BITS: usize = 38;

    /// Repeat indicator carried in every header (3 = "do not repeat")
    pub const REPEAT_INDICATOR: u8 = 3;

    /// MMSI field width in bits
    pub const MMSI_BITS: usize = 30;

    /// Latitude field width at 1/10000-minute resolution
    pub const LAT_BITS: usize = 27;

    /// Longitude field width at 1/10000-minute resolution
    pub const LON_BITS: usize = 28;

    /// Latitude field width at 0.01-minute resolution
    pub const LAT_SHORT_BITS: usize = 17;

    /// Longitude field width at 0.01-minute resolution
    pub const LON_SHORT_BITS: usize = 18;

    /// Scale factor of the standard-resolution position fields
    pub const POSITION_SCALE: f64 = 600_000.0;

    /// Scale factor of the short-form position fields
    pub const POSITION_SCALE_SHORT: f64 = 600.0;

    /// Vessel/aid name budget in six-bit characters
    pub const NAME_CHARS: usize = 20;

    /// Callsign budget in six-bit characters
    pub const CALLSIGN_CHARS: usize = 7;
}
