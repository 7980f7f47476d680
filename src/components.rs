//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the document
//! and transcript pages.

pub mod footer;
pub mod layout;
pub mod message;
