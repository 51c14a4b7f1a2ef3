//! # portal-adapter-terminal
//!
//! Line-oriented rendering of the portal page for headless use.
//!
//! Notifications are printed once when they appear; a terminal cannot take a
//! line back, so the hide and remove steps are only logged. The countdown is
//! printed on every refresh while the expiry line is printed only when it
//! changes.

mod surface;

pub use surface::TerminalSurface;
