//! Sitedown Core
//!
//! This crate provides the shared enums and error definitions
//! for the sitedown markdown-to-HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`BlockType`], [`SpanKind`] - Closed classifications for blocks and inline spans
//! - [`SitedownError`] - Error taxonomy shared by every stage

pub mod enums;
pub mod error;

pub use enums::{BlockType, SpanKind};
pub use error::{Result, SitedownError};
