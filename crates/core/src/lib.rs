//! Webify Core - Shared domain types.
//!
//! This crate provides the types used by the Webify site:
//! - `site` - Landing page, lead intake form and demo checkout
//! - `integration-tests` - End-to-end tests against the site router
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP, no
//! templates. Forms arrive as raw string records and are turned into
//! validated domain records here, so the rules can be tested without a server.
//!
//! # Modules
//!
//! - [`types`] - Email, price, id newtypes, lead and checkout records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
