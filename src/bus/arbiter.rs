use super::{BusKind, MemoryStore, SimDevice};
use crate::io::PeripheralMap;
use std::fmt;

//===========================================================================//

/// Counts of the bus transactions serviced so far, by kind.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BusStats {
    counts: [u64; 8],
}

impl BusStats {
    /// Returns the number of serviced transactions of the given kind.
    pub fn count(&self, kind: BusKind) -> u64 {
        self.counts[kind.slot()]
    }

    /// Returns the total number of serviced transactions.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn record(&mut self, kind: BusKind) {
        self.counts[kind.slot()] += 1;
    }
}

impl fmt::Display for BusStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for kind in BusKind::ALL {
            let count = self.count(kind);
            if count == 0 {
                continue;
            }
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{kind}={count}")?;
            first = false;
        }
        if first {
            write!(f, "none")?;
        }
        Ok(())
    }
}

//===========================================================================//

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Idle,
    Completing,
}

//===========================================================================//

/// Services the processor's bus transactions and drives the ready/busy
/// handshake.
///
/// A request is serviced on the cycle it first becomes visible: the arbiter
/// deasserts ready and performs the device access.  On the following cycle it
/// asserts ready, and any request signals seen during that cycle are stale
/// (the processor hasn't observed ready yet), so they are not serviced.  Idle
/// and undefined status codes never deassert ready.
pub struct BusArbiter<M = MemoryStore, I = PeripheralMap> {
    memory: M,
    io: I,
    phase: Phase,
    ready: bool,
    data_in: u16,
    stats: BusStats,
}

impl<M: SimDevice, I: SimDevice> BusArbiter<M, I> {
    /// Returns a new arbiter routing memory-space transactions to `memory`
    /// and I/O-space transactions to `io`.  Ready starts out deasserted.
    pub fn new(memory: M, io: I) -> BusArbiter<M, I> {
        BusArbiter {
            memory,
            io,
            phase: Phase::Idle,
            ready: false,
            data_in: 0,
            stats: BusStats::default(),
        }
    }

    /// Returns the memory-space device.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the I/O-space device.
    pub fn io(&self) -> &I {
        &self.io
    }

    /// Returns the level the arbiter is driving on the ready line.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Returns the value the arbiter is driving on the data-in lines.
    pub fn data_in(&self) -> u16 {
        self.data_in
    }

    /// Returns true if a transaction has been serviced but its ready cycle
    /// has not happened yet.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Completing
    }

    /// Returns the counts of serviced transactions.
    pub fn stats(&self) -> &BusStats {
        &self.stats
    }

    /// Advances the arbiter by one clock cycle, given the processor's current
    /// bus status, address, and data-out lines.  Returns the kind of
    /// transaction serviced on this cycle, if any.
    pub fn clock(
        &mut self,
        status: u8,
        addr: u32,
        data_out: u16,
    ) -> Option<BusKind> {
        if self.phase == Phase::Completing {
            self.phase = Phase::Idle;
            self.ready = true;
            return None;
        }
        let kind = BusKind::from_status(status);
        if kind == BusKind::Idle {
            return None;
        }
        if let Some(data) = self.service(kind, addr, data_out) {
            self.data_in = data;
        }
        self.stats.record(kind);
        self.phase = Phase::Completing;
        self.ready = false;
        Some(kind)
    }

    /// Performs the device access for a single transaction, returning the
    /// data read (if the transaction is a read).  Interrupt acknowledge and
    /// halt cycles touch no device.  This skips the handshake; only `clock`
    /// should call it, and only while no transaction is completing.
    fn service(
        &mut self,
        kind: BusKind,
        addr: u32,
        data_out: u16,
    ) -> Option<u16> {
        debug_assert!(
            self.phase == Phase::Idle,
            "{kind} at {addr:#07x} started before previous transaction \
             completed"
        );
        log::trace!("{kind} {addr:#07x}");
        let device = self.device_mut(kind)?;
        if kind.is_read() {
            Some(device.read_word(addr))
        } else {
            device.write_word(addr, data_out);
            None
        }
    }

    fn device_mut(&mut self, kind: BusKind) -> Option<&mut dyn SimDevice> {
        if kind.is_memory() {
            Some(&mut self.memory)
        } else if kind.is_io() {
            Some(&mut self.io)
        } else {
            None
        }
    }
}

//===========================================================================//


//===========================================================================//
