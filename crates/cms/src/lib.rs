//! REST client for the Sopé content service.
//!
//! Reads CMS globals over HTTP and hands them to `sope_core` for
//! normalization. Page-level loaders in [`pages`] collapse every failure
//! into `None` so handlers only ever see "document" or "unavailable".

pub mod api;
pub mod pages;

pub use api::{CmsClient, CmsError, DEFAULT_TIMEOUT};
