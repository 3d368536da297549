use super::{BusMaster, Pins};
use crate::bus::{BootRom, BusArbiter, BusStats, MemoryStore, SimDevice};
use crate::io::PeripheralMap;

//===========================================================================//

/// The number of cycles for which reset is held asserted at power-on.
pub const RESET_CYCLES: u64 = 8;

/// The default cycle budget for a run.
pub const DEFAULT_CYCLES: u64 = 250_000;

//===========================================================================//

/// The outcome of [`SimEnv::run`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunSummary {
    /// The number of cycles run.
    pub cycles: u64,
    /// The transactions serviced over the whole session.
    pub stats: BusStats,
    /// True if the run ended because the bus master finished, rather than
    /// because the cycle budget ran out.
    pub finished: bool,
}

//===========================================================================//

/// A complete simulated environment: a bus master, the devices it talks to,
/// and the clock that drives them.
pub struct SimEnv<P> {
    master: P,
    arbiter: BusArbiter,
    pins: Pins,
    cycle: u64,
    timestamp: u64,
}

impl<P: BusMaster> SimEnv<P> {
    /// Returns an environment at power-on, with the given master, boot ROM,
    /// and I/O devices.
    pub fn new(master: P, rom: BootRom, io: PeripheralMap) -> SimEnv<P> {
        SimEnv {
            master,
            arbiter: BusArbiter::new(MemoryStore::new(rom), io),
            pins: Pins::default(),
            cycle: 0,
            timestamp: 0,
        }
    }

    /// Returns a human-readable, multi-line description of this simulated
    /// environment.
    pub fn description(&self) -> String {
        format!(
            "master: {}\nmemory: {}\nio: {}\n",
            self.master.description(),
            self.arbiter.memory().description(),
            self.arbiter.io().description()
        )
    }

    /// Returns the bus master.
    pub fn master(&self) -> &P {
        &self.master
    }

    /// Returns the bus arbiter, and through it the devices.
    pub fn arbiter(&self) -> &BusArbiter {
        &self.arbiter
    }

    /// Returns the current signal levels.
    pub fn pins(&self) -> &Pins {
        &self.pins
    }

    /// Returns the number of cycles run so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns the trace timestamp, which advances once per clock phase.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Advances the environment by one clock cycle.
    pub fn step(&mut self) {
        self.pins.reset = self.cycle < RESET_CYCLES;
        self.pins.clock = false;
        self.master.eval(&mut self.pins);
        self.timestamp += 1;
        self.pins.clock = true;
        self.master.eval(&mut self.pins);
        self.timestamp += 1;
        let serviced = self.arbiter.clock(
            self.pins.bus_status,
            self.pins.address_out,
            self.pins.data_out,
        );
        self.pins.ready = self.arbiter.ready();
        self.pins.data_in = self.arbiter.data_in();
        if let Some(kind) = serviced {
            log::trace!(
                "t={} cycle {}: {kind} {:#07x}",
                self.timestamp,
                self.cycle,
                self.pins.address_out
            );
        }
        self.cycle += 1;
    }

    /// Runs until `max_cycles` more cycles have passed or the master
    /// finishes, whichever comes first.
    pub fn run(&mut self, max_cycles: u64) -> RunSummary {
        let start = self.cycle;
        let mut finished = self.master.is_finished();
        while !finished && self.cycle - start < max_cycles {
            self.step();
            finished = self.master.is_finished();
        }
        RunSummary {
            cycles: self.cycle - start,
            stats: *self.arbiter.stats(),
            finished,
        }
    }
}

//===========================================================================//


//===========================================================================//
