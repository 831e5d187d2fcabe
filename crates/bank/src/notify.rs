//! Notification capability.
//!
//! A notifier is any `FnMut(&str)`. The registry only ever sees
//! `&mut dyn FnMut(&str)`; the constructors here cover the two delivery
//! styles the demo uses.

use crate::console::Console;

/// Simulated SMS delivery: `SMS: <message>`.
pub fn sms<C: Console>(console: C) -> impl FnMut(&str) {
    prefixed("SMS", console)
}

/// Simulated email delivery: `EMAIL: <message>`.
pub fn email<C: Console>(console: C) -> impl FnMut(&str) {
    prefixed("EMAIL", console)
}

fn prefixed<C: Console>(channel: &'static str, mut console: C) -> impl FnMut(&str) {
    move |message| {
        tracing::trace!(channel, body = %message, "notification sent");
        console.print_line(&format!("{channel}: {message}"));
    }
}

/// Notifier that drops every message.
pub fn silent() -> impl FnMut(&str) {
    |_| {}
}
