//! Common test utilities for tubesage
//!
//! - Configuration and payload fixtures
//! - `wiremock` servers standing in for Gemini and the YouTube Data API
//! - Assertion and skip macros

pub mod fixtures;
pub mod upstream;

pub use fixtures::ConfigFactory;
pub use upstream::MockUpstreams;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).map_or(true, |value| value.trim().is_empty()) {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
