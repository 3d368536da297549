//! Facilities for driving the environment cycle by cycle.

use crate::bus::BusKind;

mod env;
mod load;
mod script;

pub use env::{DEFAULT_CYCLES, RESET_CYCLES, RunSummary, SimEnv};
pub use load::{LoadError, load_boot_image};
pub use script::{CompletedRead, ExpectFailure, ScriptMaster};

//===========================================================================//

/// The signal lines between the processor and the environment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pins {
    /// The clock level.  Low during the first half of each cycle, high
    /// during the second.
    pub clock: bool,
    /// True while the processor is held in reset.
    pub reset: bool,
    /// The 4-bit bus status code driven by the processor.
    pub bus_status: u8,
    /// The address driven by the processor.
    pub address_out: u32,
    /// The data driven by the processor for write transactions.
    pub data_out: u16,
    /// The data driven by the environment for read transactions.
    pub data_in: u16,
    /// True when the environment signals that the last transaction is
    /// complete.
    pub ready: bool,
}

impl Pins {
    /// Drives the given transaction onto the processor's output lines.
    pub fn drive(&mut self, kind: BusKind, addr: u32, data: u16) {
        self.bus_status = kind.status();
        self.address_out = addr;
        self.data_out = data;
    }

    /// Drives the idle status code.
    pub fn drive_idle(&mut self) {
        self.bus_status = BusKind::Idle.status();
    }
}

impl Default for Pins {
    fn default() -> Pins {
        Pins {
            clock: false,
            reset: true,
            bus_status: BusKind::Idle.status(),
            address_out: 0,
            data_out: 0,
            data_in: 0,
            ready: false,
        }
    }
}

//===========================================================================//

/// The processor side of the bus, as seen by the environment.
pub trait BusMaster {
    /// Returns a human-readable description of this bus master.
    fn description(&self) -> String;

    /// Evaluates the master against the current signal levels.  This is
    /// called twice per cycle, once with the clock low and once with it high;
    /// the master samples `ready` and `data_in` and drives its output lines.
    fn eval(&mut self, pins: &mut Pins);

    /// Returns true if the master has nothing more to do.  A run stops early
    /// once this becomes true.
    fn is_finished(&self) -> bool {
        false
    }
}

impl<P: BusMaster + ?Sized> BusMaster for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn eval(&mut self, pins: &mut Pins) {
        (**self).eval(pins)
    }

    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}

//===========================================================================//

/// A bus master that never requests a transaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleMaster;

impl BusMaster for IdleMaster {
    fn description(&self) -> String {
        "idle master".to_string()
    }

    fn eval(&mut self, pins: &mut Pins) {
        pins.drive_idle();
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{BusMaster, IdleMaster, Pins};
    use crate::bus::BusKind;

    #[test]
    fn pins_power_on_state() {
        let pins = Pins::default();
        assert!(pins.reset);
        assert!(!pins.ready);
        assert_eq!(BusKind::from_status(pins.bus_status), BusKind::Idle);
    }

    #[test]
    fn drive_transaction() {
        let mut pins = Pins::default();
        pins.drive(BusKind::IoWrite, 0xba, 0x1234);
        assert_eq!(pins.bus_status, 0x6);
        assert_eq!(pins.address_out, 0xba);
        assert_eq!(pins.data_out, 0x1234);
        pins.drive_idle();
        assert_eq!(pins.bus_status, 0xf);
        assert_eq!(pins.address_out, 0xba);
    }

    #[test]
    fn boxed_master_forwards() {
        let mut master: Box<dyn BusMaster> = Box::new(IdleMaster);
        let mut pins = Pins { bus_status: 0x9, ..Pins::default() };
        master.eval(&mut pins);
        assert_eq!(pins.bus_status, 0xf);
        assert!(!master.is_finished());
        assert_eq!(master.description(), "idle master");
    }
}

//===========================================================================//
