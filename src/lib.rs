//! Notification Aggregator Library
//!
//! Turns a time-ordered stream of answers, comments and upvotes into deduplicated
//! notifications for one user, plus the audience notifications derived for the
//! other participants of a thread.

pub mod config;
pub mod events;
pub mod logging;
pub mod notifications;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig, LogSettings};
pub use events::{load_events, Event, Id};
pub use notifications::{NotificationService, NotificationStore, Reporter, StdoutReporter};
