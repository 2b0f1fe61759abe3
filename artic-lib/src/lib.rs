//! Art Institute of Chicago catalog client library
//!
//! An async client for the public artworks endpoint plus the headless state
//! behind a paginated, multi-selectable artwork table.

pub mod api;
pub mod error;
pub mod model;
pub mod selection;
pub mod view;

mod client;

pub use client::*;
