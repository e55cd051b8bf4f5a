//! # Salebook Entry Point
//!
//! Thin binary shell; the actual setup lives in the library so tests
//! can drive the same wiring.

fn main() {
    if let Err(e) = salebook_desk::run() {
        eprintln!("salebook: {e}");
        std::process::exit(1);
    }
}
