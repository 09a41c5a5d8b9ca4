//! The anonymization screens: mode selector, shared error banner, and one
//! component per workflow (free text, CSV).
//!
//! Each workflow component owns a `crate::workflow` instance and follows the
//! same shape as the rest of the UI: `state` holds the component struct,
//! `messages` its `Msg`, `update` the Elm-style update function and `view`
//! the rendering.

pub mod csv;
pub mod error_banner;
pub mod props;
pub mod selector;
pub mod text;

use crate::workflow::controller::Settlement;

/// Writes the internal side of a settlement to the browser console. The user
/// side already went through the error channel.
pub(crate) fn log_settlement(workflow: &str, settlement: &Settlement) {
    match settlement {
        Settlement::Failed {
            detail: Some(detail),
            ..
        } => gloo_console::error!(format!("{} anonymization failed: {}", workflow, detail)),
        Settlement::Failed { message, .. } => {
            gloo_console::warn!(format!("{} anonymization rejected: {}", workflow, message))
        }
        Settlement::Stale => gloo_console::debug!(format!(
            "{} anonymization: discarded a stale response",
            workflow
        )),
        Settlement::Succeeded(_) => {}
    }
}
