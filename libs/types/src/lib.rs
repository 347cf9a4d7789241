//! # Pix Payment-Code Types Library
//!
//! Pure data structures for the Pix "BR Code" (EMV Merchant Presented Mode)
//! payment-code codec.
//!
//! ## Design Philosophy
//!
//! - **Data, Not Rules**: This crate defines what a TLV field and a payment
//!   request *are*; all encoding, validation and checksum logic lives in the
//!   `codec` crate
//! - **Order Is Meaning**: TLV fields form an ordered sequence, never a set —
//!   the trailing checksum and downstream scanners depend on field order
//! - **No Precision Loss**: amounts travel as decimal strings and are only
//!   parsed inside the codec with `rust_decimal`, never as floats
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{Field, PaymentRequest};
//!
//! let request = PaymentRequest::new("10.00", "x@example.com", "Test", "Sao Paulo");
//!
//! // Nested merchant-account template, built as plain data:
//! let account = Field::nested(
//!     "26",
//!     vec![
//!         Field::leaf("00", "br.gov.bcb.pix"),
//!         Field::leaf("01", request.recipient_key.clone()),
//!     ],
//! );
//! assert_eq!(account.id(), "26");
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → route handlers (external)
//!     ↑            ↓              ↓
//! Pure Data   Encoding Rules  HTTP/JSON shaping
//! Field       CRC-16 checksum QR rendering (external)
//! ```

pub mod field;
pub mod request;

pub use field::Field;
pub use request::PaymentRequest;
