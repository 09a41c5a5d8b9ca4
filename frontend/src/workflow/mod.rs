//! Platform-independent core of the anonymization client.
//!
//! Components in `crate::components` own one workflow each and forward user
//! events to it; the only suspension point is the service call made between
//! `prepare_submit` and `apply`.

pub mod controller;
pub mod csv;
pub mod editor;
pub mod error_channel;
pub mod extractor;
pub mod mode;
pub mod presenter;
pub mod request;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;
