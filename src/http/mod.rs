//! HTTP transport layer for the webhook sink.
//!
//! A single fallback handler catches every path and method; routing beyond
//! that is deliberately absent.

pub mod handlers;
