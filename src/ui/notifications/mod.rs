// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! Used for problems the page recovers from on its own: a settings file that
//! failed to parse, a portfolio file replaced by the bundled copy, a link the
//! system browser refused to open.
//!
//! - [`notification`] holds the `Notification` value and its severity
//! - [`manager`] queues notifications and expires them on ticks
//! - [`toast`] renders the visible ones in the bottom-right corner
//!
//! At most three toasts are visible; the rest wait in a queue. Warnings
//! last 5s, errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
