use std::fmt;

//===========================================================================//

/// The kind of transaction requested by the processor's 4-bit bus status
/// code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BusKind {
    /// Interrupt acknowledge cycle.
    InterruptAck,
    /// Read from I/O space.
    IoRead,
    /// Write to I/O space.
    IoWrite,
    /// Halt acknowledge cycle.
    Halt,
    /// Data read from memory space.
    MemRead,
    /// Data write to memory space.
    MemWrite,
    /// Instruction fetch from memory space.
    CodeFetch,
    /// No transaction.  Undefined status codes also decode to this.
    Idle,
}

impl BusKind {
    /// All bus kinds, in status code order.
    pub const ALL: [BusKind; 8] = [
        BusKind::InterruptAck,
        BusKind::IoRead,
        BusKind::IoWrite,
        BusKind::Halt,
        BusKind::MemRead,
        BusKind::MemWrite,
        BusKind::CodeFetch,
        BusKind::Idle,
    ];

    /// Decodes a bus status code.  Only the low four bits are significant.
    pub fn from_status(status: u8) -> BusKind {
        match status & 0xf {
            0x0 => BusKind::InterruptAck,
            0x5 => BusKind::IoRead,
            0x6 => BusKind::IoWrite,
            0x8 => BusKind::Halt,
            0x9 => BusKind::MemRead,
            0xa => BusKind::MemWrite,
            0xd => BusKind::CodeFetch,
            _ => BusKind::Idle,
        }
    }

    /// Returns the status code that the processor drives for this kind of
    /// transaction.
    pub fn status(self) -> u8 {
        match self {
            BusKind::InterruptAck => 0x0,
            BusKind::IoRead => 0x5,
            BusKind::IoWrite => 0x6,
            BusKind::Halt => 0x8,
            BusKind::MemRead => 0x9,
            BusKind::MemWrite => 0xa,
            BusKind::CodeFetch => 0xd,
            BusKind::Idle => 0xf,
        }
    }

    /// Returns true if this kind of transaction targets memory space.
    pub fn is_memory(self) -> bool {
        matches!(
            self,
            BusKind::MemRead | BusKind::MemWrite | BusKind::CodeFetch
        )
    }

    /// Returns true if this kind of transaction targets I/O space.
    pub fn is_io(self) -> bool {
        matches!(self, BusKind::IoRead | BusKind::IoWrite)
    }

    /// Returns true if the processor expects data back from this kind of
    /// transaction.
    pub fn is_read(self) -> bool {
        matches!(
            self,
            BusKind::IoRead | BusKind::MemRead | BusKind::CodeFetch
        )
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            BusKind::InterruptAck => 0,
            BusKind::IoRead => 1,
            BusKind::IoWrite => 2,
            BusKind::Halt => 3,
            BusKind::MemRead => 4,
            BusKind::MemWrite => 5,
            BusKind::CodeFetch => 6,
            BusKind::Idle => 7,
        }
    }
}

impl fmt::Display for BusKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            BusKind::InterruptAck => "INTA",
            BusKind::IoRead => "IN",
            BusKind::IoWrite => "OUT",
            BusKind::Halt => "HALT",
            BusKind::MemRead => "MEMR",
            BusKind::MemWrite => "MEMW",
            BusKind::CodeFetch => "FETCH",
            BusKind::Idle => "IDLE",
        };
        f.write_str(name)
    }
}

//===========================================================================//


//===========================================================================//
