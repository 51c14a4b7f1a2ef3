//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod connectivity;
pub mod countdown_display;
pub mod notification_surface;
pub mod status_query;

pub use connectivity::ConnectivityProbe;
pub use countdown_display::CountdownDisplay;
pub use notification_surface::{ContainerHandle, NotificationSurface};
pub use status_query::StatusQuery;
