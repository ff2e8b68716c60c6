//! Folio Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Folio layout
//! engine and its front ends. It includes:
//!
//! - **Content**: The content item model consumed by the layout engine ([`content`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod content;
pub mod geometry;
