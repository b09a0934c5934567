//! Networking modules for the remote marketplace functions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST call, `upload` orchestrates bulk photo uploads,
//! and `types` defines the shared wire schema.

pub mod api;
pub mod types;
pub mod upload;
