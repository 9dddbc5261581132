//! Debounced panel polling
//!
//! The panel is interfaced through state polling: `poll()` must be called
//! repeatedly from the outer firmware loop, and a registered callback is
//! executed once per confirmed press.
//!
//! A press is confirmed by repeated-confirmation sampling. The first scan
//! (ascending channel order, first active channel wins) selects a
//! candidate; four re-scans spaced [`CONFIRM_INTERVAL_MS`] apart must all
//! agree with it before the callback runs. Any disagreement (the
//! candidate released, or a different channel winning the re-scan) drops
//! the cycle without dispatch. Contact bounce and sub-window taps never
//! reach the callback.
//!
//! `poll()` blocks for the confirmation waits (at most
//! [`CONFIRM_ROUNDS`] x [`CONFIRM_INTERVAL_MS`] plus the callback's own
//! run time). The target has no competing work, so the blocking wait is
//! the whole scheduling model; the callback runs synchronously on the
//! polling call stack and must not re-enter the panel.

use embedded_hal::delay::DelayNs;

use super::buttons::{Button, BUTTON_COUNT};
use crate::traits::ButtonInput;

/// Confirmation re-scans before a press is accepted
pub const CONFIRM_ROUNDS: usize = 4;

/// Wait between confirmation re-scans (ms)
pub const CONFIRM_INTERVAL_MS: u32 = 10;

/// Five-channel debounced button panel
///
/// Owns one input channel per button plus the delay source used for the
/// confirmation waits. At most one callback is registered at a time; it
/// may be replaced or removed with [`Panel::set_callback`] whenever the
/// panel is not mid-poll. While no callback is registered, `poll()` is a
/// no-op and reads no hardware.
///
/// Holding a button down re-dispatches on every `poll()` call that
/// completes its confirmation rounds. Press-and-release semantics, if
/// wanted, belong to the callback.
pub struct Panel<'cb, C, D> {
    channels: [C; BUTTON_COUNT],
    delay: D,
    callback: Option<&'cb mut dyn FnMut(Button)>,
}

impl<'cb, C, D> Panel<'cb, C, D>
where
    C: ButtonInput,
    D: DelayNs,
{
    /// Create a panel over its five input channels
    ///
    /// Channels are indexed in panel order: channel 0 is [`Button::Left`],
    /// channel 4 is [`Button::Right`]. No callback is registered yet.
    pub fn new(channels: [C; BUTTON_COUNT], delay: D) -> Self {
        Self {
            channels,
            delay,
            callback: None,
        }
    }

    /// Register, replace, or remove (`None`) the press callback
    pub fn set_callback(&mut self, callback: Option<&'cb mut dyn FnMut(Button)>) {
        self.callback = callback;
    }

    /// Scan all channels and return the active button, if any
    ///
    /// Channels are checked in ascending index order and the first active
    /// one wins, so simultaneous presses resolve to the lowest index.
    fn active_button(&mut self) -> Option<Button> {
        for (index, channel) in self.channels.iter_mut().enumerate() {
            if channel.is_active() {
                return Button::from_index(index as u8);
            }
        }
        None
    }

    /// Poll the buttons and dispatch a confirmed press to the callback
    ///
    /// Does nothing when no callback is registered. Otherwise scans for a
    /// candidate and runs the confirmation rounds; the callback is invoked
    /// exactly once if and only if every re-scan agrees with the initial
    /// candidate.
    pub fn poll(&mut self) {
        if self.callback.is_none() {
            return;
        }

        let candidate = match self.active_button() {
            Some(button) => button,
            None => return,
        };

        for _ in 0..CONFIRM_ROUNDS {
            self.delay.delay_ms(CONFIRM_INTERVAL_MS);
            if self.active_button() != Some(candidate) {
                return;
            }
        }

        if let Some(callback) = self.callback.as_mut() {
            callback(candidate);
        }
    }
}
