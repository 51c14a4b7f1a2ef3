//! # portal-domain
//!
//! Pure domain model for the captive-portal voucher client.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Notifications** (transient, severity-tagged user feedback)
//! - Define **Session codes** (voucher codes or MAC addresses used for lookups)
//! - Define **Status snapshots** (one point-in-time answer of the status endpoint)
//! - Define the **Countdown** projection of a snapshot and the duration format
//! - Define the **Connectivity test** request/report exchanged with `/test`
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod connectivity;
pub mod countdown;
pub mod duration;
pub mod notification;
pub mod session;
pub mod status;
