//! # Pix Payment-Code Codec
//!
//! ## Purpose
//!
//! This crate contains the "Rules" layer of the payment-code system: the
//! EMV Merchant Presented Mode (MPM) tag-length-value encoding used by the
//! Brazilian instant-payment network (Pix), terminated by a
//! CRC-16/CCITT-FALSE checksum. It is the single canonical home for logic
//! that was historically copy-pasted across unrelated route modules:
//! - TLV encoding of leaf and nested fields
//! - Ordered payload assembly in the fixed MPM field sequence
//! - CRC-16 computation and 4-digit uppercase hex rendering
//! - Strict decoding and checksum verification for round-trip validation
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → route handlers (external)
//!     ↑           ↓            ↓
//! Pure Data   Encoding     HTTP/JSON, persistence,
//! Structures  Rules        QR image rendering
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - HTTP routing, request/response shaping (callers' concern)
//! - Persistence of generated codes (callers' concern)
//! - QR image rendering (external renderer consumes the string)
//! - Logging: the codec is silent; callers translate typed errors into
//!   user-facing messages and log at their own boundary
//!
//! ## Concurrency
//!
//! Every operation is synchronous, pure, and stateless — no shared mutable
//! state, no I/O, no retries. Safe to call from any number of threads
//! without coordination; each call operates solely on its arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use codec::{generate_payment_code, verify_payment_code};
//! use types::PaymentRequest;
//!
//! let request = PaymentRequest::new("10.00", "x@example.com", "Test", "Sao Paulo");
//! let code = generate_payment_code(&request)?;
//! verify_payment_code(&code)?;
//! # Ok::<(), codec::CodecError>(())
//! ```

pub mod builder;
pub mod checksum;
pub mod constants;
pub mod error;
pub mod parser;

// Re-export key types for convenience
pub use builder::{encode, encode_field, format_amount, generate_payment_code, PayloadBuilder};
pub use checksum::{checksum_hex, crc16, format_crc};
pub use constants::*;
pub use error::{CodecError, CodecResult};
pub use parser::{decode, verify_payment_code};
