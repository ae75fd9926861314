//! Sopé content model.
//!
//! Typed shapes for every CMS global the website renders, plus the rules
//! that turn a raw CMS response into a renderable document: required-group
//! validation, empty defaults for missing lists, and absolute media URLs.
//! Nothing in this crate performs I/O.

pub mod content;
pub mod error;
pub mod globals;
pub mod media;
pub mod nullable;
pub mod text;
