//! # portal-adapter-html
//!
//! In-memory HTML document for the portal page.
//!
//! [`HtmlSurface`] implements both
//! [`NotificationSurface`](portal_app::ports::NotificationSurface) and
//! [`CountdownDisplay`](portal_app::ports::CountdownDisplay). It keeps the
//! page model and renders it with askama templates on demand, so every piece
//! of visitor- or server-provided text is HTML-escaped.
//!
//! Close buttons carry a `data-dismiss="<notification id>"` attribute; the
//! host page forwards clicks to `NotificationCenter::dismiss`.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `portal-app` and `portal-domain`.

mod surface;
mod templates;

pub use surface::HtmlSurface;

/// Identifier of the notification container element.
pub const CONTAINER_ID: &str = "notificationContainer";
