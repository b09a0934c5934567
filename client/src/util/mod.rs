//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod format;
pub mod remote;
pub mod storage;
pub mod subscription;
