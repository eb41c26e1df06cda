//! Completion notification.
//!
//! Fire-and-forget desktop notification via notify-rust. Failure is
//! downgraded to a warning so the textual ready message always lands.

use notify_rust::{Notification, Timeout};

use crate::ui;

pub const APP_NAME: &str = "Tea Time(r)";
pub const READY_MSG: &str = "Your tea is ready! Enjoy :)";

const NOTIFY_TIMEOUT_MS: u32 = 3000;

/// Show the "tea is ready" desktop notification.
pub fn notify_ready() {
    let shown = Notification::new()
        .appname(APP_NAME)
        .summary(APP_NAME)
        .body(READY_MSG)
        .timeout(Timeout::Milliseconds(NOTIFY_TIMEOUT_MS))
        .show();

    if let Err(err) = shown {
        ui::warning(&format!("Could not show desktop notification: {err}"));
    }
}
