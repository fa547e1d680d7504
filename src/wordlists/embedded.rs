//! Embedded word list
//!
//! Offline fallback list compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/fallback.rs"));
