//! Facilities for simulating the processor's I/O port space.

use crate::bus::SimDevice;
use std::fmt;

mod eeprom;
mod names;

pub use eeprom::{
    EEPROM_WORDS, ERASED_WORD, EepromController, EepromOp, INITIAL_STATUS,
    PendingFlags, decode_command,
};
pub use names::port_name;

//===========================================================================//

/// The port that reports hardware flags.
pub const PORT_HW_FLAGS: u32 = 0xa0;
/// The value read back from [`PORT_HW_FLAGS`].
pub const HW_FLAGS_VALUE: u16 = 0x84;

/// The EEPROM data register (both bytes of a 16-bit port).
pub const PORT_EEPROM_DATA: u32 = 0xba;
/// The EEPROM address/command register (both bytes of a 16-bit port).
pub const PORT_EEPROM_ADDR: u32 = 0xbc;
/// The EEPROM status register when read, and its command register when
/// written (both bytes of a 16-bit port).
pub const PORT_EEPROM_CMD: u32 = 0xbe;

//===========================================================================//

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Port {
    HwFlags,
    EepromData,
    EepromAddr,
    EepromStatusCmd,
    Unmapped,
}

fn decode_port(port: u32) -> Port {
    match port {
        PORT_HW_FLAGS => Port::HwFlags,
        0xba | 0xbb => Port::EepromData,
        0xbc | 0xbd => Port::EepromAddr,
        0xbe | 0xbf => Port::EepromStatusCmd,
        _ => Port::Unmapped,
    }
}

//===========================================================================//

/// One line of the I/O access log.
struct PortAccess {
    port: u32,
    written: Option<u16>,
}

impl fmt::Display for PortAccess {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = port_name(self.port).unwrap_or("???");
        match self.written {
            None => write!(f, "IN: {name}"),
            Some(data) => write!(f, "OUT: {name} - {data:#x}"),
        }
    }
}

//===========================================================================//

/// The peripheral register map.  Only the internal EEPROM controller and the
/// hardware flags port are decoded; every other port reads as zero and
/// ignores writes.
pub struct PeripheralMap {
    eeprom: EepromController,
}

impl PeripheralMap {
    /// Returns a peripheral map in its reset state.
    pub fn new() -> PeripheralMap {
        PeripheralMap::with_eeprom(EepromController::new())
    }

    /// Returns a peripheral map using the given EEPROM controller.
    pub fn with_eeprom(eeprom: EepromController) -> PeripheralMap {
        PeripheralMap { eeprom }
    }

    /// Returns the EEPROM controller.
    pub fn eeprom(&self) -> &EepromController {
        &self.eeprom
    }

    /// Reads the given port.
    pub fn io_read(&self, port: u32) -> u16 {
        match decode_port(port) {
            Port::HwFlags => HW_FLAGS_VALUE,
            Port::EepromData => self.eeprom.data(),
            Port::EepromAddr => self.eeprom.address(),
            Port::EepromStatusCmd => u16::from(self.eeprom.status()),
            Port::Unmapped => 0,
        }
    }

    /// Writes the given port.
    pub fn io_write(&mut self, port: u32, data: u16) {
        match decode_port(port) {
            Port::EepromData => self.eeprom.write_data(data),
            Port::EepromAddr => self.eeprom.write_address(data),
            Port::EepromStatusCmd => self.eeprom.write_command(data),
            Port::HwFlags | Port::Unmapped => {}
        }
    }
}

impl Default for PeripheralMap {
    fn default() -> PeripheralMap {
        PeripheralMap::new()
    }
}

impl SimDevice for PeripheralMap {
    fn description(&self) -> String {
        "I/O ports with internal EEPROM".to_string()
    }

    fn label_at(&self, addr: u32) -> Option<&str> {
        port_name(addr)
    }

    fn read_word(&mut self, addr: u32) -> u16 {
        log::debug!("{}", PortAccess { port: addr, written: None });
        self.io_read(addr)
    }

    fn write_word(&mut self, addr: u32, data: u16) {
        log::debug!("{}", PortAccess { port: addr, written: Some(data) });
        self.io_write(addr, data);
    }
}

//===========================================================================//


//===========================================================================//
