//! Pump output trait

/// Trait for pump output control
///
/// Implementations switch the pump supply via GPIO, a relay, or a MOSFET
/// driver. Pumps are on/off devices here - flow is metered by time, not
/// by speed control.
pub trait PumpOutput {
    /// Open or close the flow
    fn set_on(&mut self, on: bool);

    /// Check if the pump is currently running
    fn is_on(&self) -> bool;

    /// Negate the current state
    fn toggle(&mut self) {
        self.set_on(!self.is_on());
    }
}
