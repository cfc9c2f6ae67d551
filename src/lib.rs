//! fieldseek: rank heterogeneous records against a keyword query.
//!
//! The engine lives in [`fieldseek_core`]; this crate adds the pieces the
//! `fieldseek` binary needs around it so integration tests can import them
//! directly.
//!
//! ```text
//! input (JSON / JSON Lines) ──► fieldseek_core::search ──► render (text / JSON)
//! ```

pub mod input;
pub mod render;
