//! Page-level flows built on the notification center.

pub mod connectivity_check;
pub mod portal_page;
