//! Test module - one submodule per functional area
//!
//! - config loading, layering and CLI overrides
//! - error → HTTP status mapping
//! - route table, reverse lookup and fallbacks
//! - page handlers (status, template used, content)
//! - template engine and render context
//!
//! WHY: Organize tests by functional area so each source module has one obvious place for its
//! coverage. Tests that touch process environment share `common::env_lock`.

pub(crate) mod common;
