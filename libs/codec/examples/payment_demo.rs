//! # Payment-Code Generation Demo
//!
//! Demonstrates the caller-side flow the route handlers follow:
//! - Build a `PaymentRequest` from already-validated input
//! - Generate the checksum-terminated BR Code string
//! - Verify it, and show tamper detection
//!
//! Logging lives here at the caller boundary; the codec itself is silent.

use codec::{decode, generate_payment_code, verify_payment_code};
use tracing::{error, info};
use types::PaymentRequest;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let request = PaymentRequest::new("10.00", "x@example.com", "Test", "Sao Paulo");
    info!(?request, "generating static payment code");

    let code = match generate_payment_code(&request) {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "generation failed");
            return;
        }
    };
    info!(code = %code, length = code.len(), "payment code generated");

    match verify_payment_code(&code) {
        Ok(()) => info!("checksum verified"),
        Err(err) => error!(%err, "verification failed"),
    }

    // Show the top-level TLV structure the scanner will walk.
    match decode(&code) {
        Ok(fields) => {
            for field in &fields {
                info!(
                    id = field.id(),
                    value = field.value().unwrap_or(""),
                    "top-level field"
                );
            }
        }
        Err(err) => error!(%err, "decode failed"),
    }

    // Tamper with one character: verification must fail.
    let mut tampered = code.into_bytes();
    tampered[10] = b'#';
    let tampered = String::from_utf8(tampered).expect("ascii payload");
    match verify_payment_code(&tampered) {
        Ok(()) => error!("tampered code unexpectedly verified"),
        Err(err) => info!(%err, "tampered code rejected as expected"),
    }
}
