//! Page generation modules for different view types
//!
//! A document page shows one rendered message; a transcript page shows a
//! whole conversation. Both build on the shared components module.

pub mod document;
pub mod transcript;
