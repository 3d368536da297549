//! The internal serial EEPROM and its controller registers.
//!
//! The controller is driven entirely through three 16-bit registers.  The
//! processor loads a data word and an address/command word, then writes the
//! command register to start the operation.  The address/command word is laid
//! out like the serial opcode that the controller shifts out to the EEPROM:
//!
//! ```text
//!   bit:  8     7 6     5 4     4 3 2 1 0
//!       start  command special  cell address
//! ```
//!
//! The `special` field is only meaningful when `command` is zero, and it
//! overlaps the top of the cell address.  Only 5 address bits are decoded, so
//! word commands reach the first 32 of the 64 cells.

//===========================================================================//

/// The number of 16-bit words of EEPROM storage.
pub const EEPROM_WORDS: usize = 64;

/// The value of an erased EEPROM word.
pub const ERASED_WORD: u16 = 0xffff;

/// The value of the status register after reset.
pub const INITIAL_STATUS: u8 = 3;

const COMMAND_START: u16 = 0x100;
const CELL_ADDRESS_MASK: u16 = 0x1f;

const COMMAND_FLAG_READ: u16 = 0x10;
const COMMAND_FLAG_WRITE: u16 = 0x20;

//===========================================================================//

/// The one-shot request flags latched by a write to the command register.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PendingFlags {
    /// A word read was requested.
    pub read: bool,
    /// A word write or erase was requested.
    pub write: bool,
}

impl PendingFlags {
    /// Extracts the request flags from a value written to the command
    /// register.
    pub fn from_command(value: u16) -> PendingFlags {
        PendingFlags {
            read: (value & COMMAND_FLAG_READ) != 0,
            write: (value & COMMAND_FLAG_WRITE) != 0,
        }
    }
}

//===========================================================================//

/// An operation decoded from the EEPROM controller's registers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EepromOp {
    /// Sets the write-protect latch.
    WriteDisable,
    /// Writes the given word into every cell.
    WriteAll(u16),
    /// Erases every cell.
    EraseAll,
    /// Clears the write-protect latch.
    WriteEnable,
    /// Writes a word into a single cell.
    WriteWord {
        /// The index of the cell to write.
        cell: usize,
        /// The word to write.
        data: u16,
    },
    /// Copies a single cell into the data register.
    ReadWord {
        /// The index of the cell to read.
        cell: usize,
    },
    /// Erases a single cell.
    EraseWord {
        /// The index of the cell to erase.
        cell: usize,
    },
}

impl EepromOp {
    /// Returns true if this operation modifies cell contents, and is
    /// therefore blocked by the write-protect latch.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            EepromOp::WriteAll(_)
                | EepromOp::EraseAll
                | EepromOp::WriteWord { .. }
                | EepromOp::EraseWord { .. }
        )
    }

    /// Returns a short human-readable name for this operation.
    pub fn name(&self) -> &'static str {
        match self {
            EepromOp::WriteDisable => "write disable",
            EepromOp::WriteAll(_) => "write all",
            EepromOp::EraseAll => "erase all",
            EepromOp::WriteEnable => "write enable",
            EepromOp::WriteWord { .. } => "write word",
            EepromOp::ReadWord { .. } => "read word",
            EepromOp::EraseWord { .. } => "erase word",
        }
    }
}

//===========================================================================//

/// Decodes the operation selected by the address and data registers, given
/// the request flags latched by the command register.  Returns `None` if the
/// start bit is clear, or if a word command was issued without the matching
/// request flag.
///
/// The write-protect latch is not consulted here; it is applied when the
/// operation executes.
pub fn decode_command(
    address_reg: u16,
    data_reg: u16,
    pending: PendingFlags,
) -> Option<EepromOp> {
    if (address_reg & COMMAND_START) == 0 {
        return None;
    }
    let command = (address_reg >> 6) & 0x3;
    let special = (address_reg >> 4) & 0x3;
    let cell = usize::from(address_reg & CELL_ADDRESS_MASK);
    match command {
        0 => Some(match special {
            0 => EepromOp::WriteDisable,
            1 => EepromOp::WriteAll(data_reg),
            2 => EepromOp::EraseAll,
            _ => EepromOp::WriteEnable,
        }),
        1 => pending
            .write
            .then_some(EepromOp::WriteWord { cell, data: data_reg }),
        2 => pending.read.then_some(EepromOp::ReadWord { cell }),
        _ => pending.write.then_some(EepromOp::EraseWord { cell }),
    }
}

//===========================================================================//

/// The EEPROM controller: cell storage plus the data, address, and status
/// registers, the write-protect latch, and the pending request flags.
#[derive(Clone, Debug)]
pub struct EepromController {
    cells: [u16; EEPROM_WORDS],
    data: u16,
    address: u16,
    status: u8,
    write_protected: bool,
    pending: PendingFlags,
}

impl EepromController {
    /// Returns a controller in its reset state, with every cell erased.
    ///
    /// The contents of a real part at power-on are whatever was left there;
    /// use [`EepromController::with_cells`] to choose them explicitly.
    pub fn new() -> EepromController {
        EepromController::with_cells([ERASED_WORD; EEPROM_WORDS])
    }

    /// Returns a controller in its reset state, with the given cell contents.
    /// The write-protect latch starts out set.
    pub fn with_cells(cells: [u16; EEPROM_WORDS]) -> EepromController {
        EepromController {
            cells,
            data: 0,
            address: 0,
            status: INITIAL_STATUS,
            write_protected: true,
            pending: PendingFlags::default(),
        }
    }

    /// Returns the contents of the cell array.
    pub fn cells(&self) -> &[u16; EEPROM_WORDS] {
        &self.cells
    }

    /// Returns the current value of the data register.
    pub fn data(&self) -> u16 {
        self.data
    }

    /// Returns the current value of the address/command register.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Returns the current value of the (read-only) status register.
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Returns true if destructive operations are currently blocked.
    pub fn is_write_protected(&self) -> bool {
        self.write_protected
    }

    /// Returns the request flags that have not yet been consumed.
    pub fn pending(&self) -> PendingFlags {
        self.pending
    }

    /// Handles a write to the data register.
    pub fn write_data(&mut self, value: u16) {
        self.data = value;
    }

    /// Handles a write to the address/command register.
    pub fn write_address(&mut self, value: u16) {
        self.address = value;
    }

    /// Handles a write to the command register: latches the request flags,
    /// then decodes and executes whatever the address register selects.
    pub fn write_command(&mut self, value: u16) {
        self.pending = PendingFlags::from_command(value);
        if let Some(op) = decode_command(self.address, self.data, self.pending)
        {
            self.execute(op);
        }
    }

    /// Executes a decoded operation.  Destructive operations are silently
    /// dropped while the write-protect latch is set.
    pub fn execute(&mut self, op: EepromOp) {
        if op.is_destructive() && self.write_protected {
            log::debug!("EEPROM {} ignored (write protected)", op.name());
            return;
        }
        log::debug!("EEPROM {}", op.name());
        match op {
            EepromOp::WriteDisable => self.write_protected = true,
            EepromOp::WriteAll(data) => self.cells.fill(data),
            EepromOp::EraseAll => self.cells.fill(ERASED_WORD),
            EepromOp::WriteEnable => self.write_protected = false,
            EepromOp::WriteWord { cell, data } => {
                self.cells[cell] = data;
                self.pending.write = false;
            }
            EepromOp::ReadWord { cell } => {
                self.data = self.cells[cell];
                self.pending.read = false;
            }
            EepromOp::EraseWord { cell } => {
                self.cells[cell] = ERASED_WORD;
                self.pending.write = false;
            }
        }
    }
}

impl Default for EepromController {
    fn default() -> EepromController {
        EepromController::new()
    }
}

//===========================================================================//


//===========================================================================//
