//! Embedded dictionary sources
//!
//! Dictionary files compiled into the binary at build time.

// Include generated source table from build script
include!(concat!(env!("OUT_DIR"), "/embedded_sources.rs"));
