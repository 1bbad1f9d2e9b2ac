//! alerthub - an in-process alert aggregation facility.
//!
//! A registry of notifier backends, each accumulating typed messages
//! (success/error/warning/info), with a fluent filtering API to retrieve
//! subsets of the accumulated messages by area or type:
//!
//! ```
//! use alerthub::{AlertHub, MemoryNotifier};
//!
//! let mut hub = AlertHub::new();
//! hub.add_notifier(Box::new(MemoryNotifier::new("flash")))
//!     .set_default_notifier("flash");
//!
//! hub.success("admin", "user created")?;
//! hub.error("shop", "payment failed")?;
//!
//! let admin_messages = hub.where_area("admin").get();
//! assert_eq!(admin_messages.len(), 1);
//! # Ok::<(), alerthub::AlertError>(())
//! ```

pub mod config;
pub mod core;
pub mod filters;
pub mod hub;
pub mod notifiers;

// Re-export the primary surface for convenience.
pub use crate::config::{Config, NotifierConfig};
pub use crate::core::{Message, Notifier};
pub use crate::filters::{FilterDirection, FilterValues, FilterZone};
pub use crate::hub::{AlertError, AlertHub};
pub use crate::notifiers::MemoryNotifier;
