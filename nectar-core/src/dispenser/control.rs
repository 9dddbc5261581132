//! Timed pump control
//!
//! Pumps are fixed-rate devices; a pour is metered by how long the pump
//! runs, so the dispenser blocks for the flow duration. The target has no
//! competing work during a pour.

use embedded_hal::delay::DelayNs;

use super::pumps::{Pump, PUMP_COUNT};
use crate::recipes::Recipe;
use crate::traits::PumpOutput;

/// Four-pump beverage dispenser
///
/// Owns one output per pump plus the delay source used to time pours.
/// Construction forces every pump off so the outputs start in a known
/// state regardless of what the pins were doing before.
pub struct Dispenser<O, D> {
    pumps: [O; PUMP_COUNT],
    delay: D,
}

impl<O, D> Dispenser<O, D>
where
    O: PumpOutput,
    D: DelayNs,
{
    /// Create a dispenser over its four pump outputs
    ///
    /// Outputs are indexed in tank order: output 0 is [`Pump::Left`],
    /// output 3 is [`Pump::Right`]. All pumps are stopped.
    pub fn new(pumps: [O; PUMP_COUNT], delay: D) -> Self {
        let mut dispenser = Self { pumps, delay };
        dispenser.stop_all();
        dispenser
    }

    fn output(&mut self, pump: Pump) -> &mut O {
        &mut self.pumps[pump.index() as usize]
    }

    /// Start a pump flow
    pub fn enable(&mut self, pump: Pump) {
        self.output(pump).set_on(true);
    }

    /// Stop a pump flow
    pub fn disable(&mut self, pump: Pump) {
        self.output(pump).set_on(false);
    }

    /// Check if a pump is currently running
    pub fn is_running(&self, pump: Pump) -> bool {
        self.pumps[pump.index() as usize].is_on()
    }

    /// Stop every pump
    pub fn stop_all(&mut self) {
        for pump in &mut self.pumps {
            pump.set_on(false);
        }
    }

    /// Run one pump for the given duration
    ///
    /// Blocks until the flow duration ends.
    pub fn dispense(&mut self, pump: Pump, duration_ms: u32) {
        self.enable(pump);
        self.delay.delay_ms(duration_ms);
        self.disable(pump);
    }

    /// Pour a recipe: run all of its pumps together for its duration
    ///
    /// Blocks until the flow duration ends.
    pub fn pour(&mut self, recipe: &Recipe) {
        for &pump in recipe.pumps() {
            self.enable(pump);
        }
        self.delay.delay_ms(recipe.duration_ms());
        for &pump in recipe.pumps() {
            self.disable(pump);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    /// Everything the mocks observe, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        On(Pump),
        Off(Pump),
        Wait(u32),
    }

    type Log = RefCell<Vec<Action, 32>>;

    struct MockPump<'l> {
        pump: Pump,
        on: bool,
        log: &'l Log,
    }

    struct MockDelay<'l> {
        log: &'l Log,
    }

    impl PumpOutput for MockPump<'_> {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            let action = if on {
                Action::On(self.pump)
            } else {
                Action::Off(self.pump)
            };
            self.log.borrow_mut().push(action).unwrap();
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {
            unreachable!("pours go through delay_ms");
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Action::Wait(ms)).unwrap();
        }
    }

    fn dispenser(log: &Log) -> Dispenser<MockPump<'_>, MockDelay<'_>> {
        let pumps = Pump::ALL.map(|pump| MockPump {
            pump,
            on: false,
            log,
        });
        let dispenser = Dispenser::new(pumps, MockDelay { log });
        // Drop the forced-off actions from construction
        log.borrow_mut().clear();
        dispenser
    }

    #[test]
    fn test_construction_forces_pumps_off() {
        let log = Log::default();
        let pumps = Pump::ALL.map(|pump| MockPump {
            pump,
            on: true,
            log: &log,
        });
        let dispenser = Dispenser::new(pumps, MockDelay { log: &log });

        for pump in Pump::ALL {
            assert!(!dispenser.is_running(pump));
        }
    }

    #[test]
    fn test_enable_disable() {
        let log = Log::default();
        let mut dispenser = dispenser(&log);

        dispenser.enable(Pump::MidRight);
        assert!(dispenser.is_running(Pump::MidRight));
        assert!(!dispenser.is_running(Pump::Left));

        dispenser.disable(Pump::MidRight);
        assert!(!dispenser.is_running(Pump::MidRight));
    }

    #[test]
    fn test_dispense_times_the_flow() {
        let log = Log::default();
        let mut dispenser = dispenser(&log);

        dispenser.dispense(Pump::Left, 6000);

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Action::On(Pump::Left),
                Action::Wait(6000),
                Action::Off(Pump::Left),
            ][..]
        );
    }

    #[test]
    fn test_pour_runs_recipe_pumps_together() {
        let log = Log::default();
        let mut dispenser = dispenser(&log);

        let recipe = Recipe::new(&[Pump::Left, Pump::MidLeft], 3000);
        dispenser.pour(&recipe);

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Action::On(Pump::Left),
                Action::On(Pump::MidLeft),
                Action::Wait(3000),
                Action::Off(Pump::Left),
                Action::Off(Pump::MidLeft),
            ][..]
        );
    }

    #[test]
    fn test_stop_all() {
        let log = Log::default();
        let mut dispenser = dispenser(&log);

        dispenser.enable(Pump::Left);
        dispenser.enable(Pump::Right);
        dispenser.stop_all();

        for pump in Pump::ALL {
            assert!(!dispenser.is_running(pump));
        }
    }
}
