//! Embedded sample dictionary
//!
//! Compiled into the binary at build time so the tools work without a file.

// Include generated line list from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));
