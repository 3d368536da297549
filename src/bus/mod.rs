//! Facilities for decoding bus transactions and simulating the devices that
//! answer them.

use byteorder::{ByteOrder, LittleEndian};

mod arbiter;
mod kind;
mod mem;
mod ram;
mod rom;

pub use arbiter::{BusArbiter, BusStats};
pub use kind::BusKind;
pub use mem::MemoryStore;
pub use ram::{RAM_SIZE, WorkRam};
pub use rom::BootRom;

//===========================================================================//

/// A simulated device that answers 16-bit bus accesses.
///
/// This trait uses `u32` for addresses, since the processor's physical address
/// bus is 20 bits wide.  Implementations decide for themselves which address
/// bits are connected, and should mirror or ignore the rest.  Implementations
/// should *not* panic when given an address that is out of range; every
/// address must resolve to some defined behavior.
pub trait SimDevice {
    /// Returns a human-readable description of this simulated device.
    fn description(&self) -> String;

    /// Returns a label for the given address, if there is one.
    fn label_at(&self, addr: u32) -> Option<&str>;

    /// Reads a 16-bit little-endian word.
    ///
    /// Note that this is a `&mut self` method, since some hardware registers
    /// may have side effects when read.
    fn read_word(&mut self, addr: u32) -> u16;

    /// Writes a 16-bit little-endian word.
    ///
    /// Depending on the implementation, the write may be ignored (e.g. if the
    /// address maps to read-only memory), and/or have other side effects.
    fn write_word(&mut self, addr: u32, data: u16);
}

//===========================================================================//

/// Reads a little-endian word from a power-of-two sized byte array, wrapping
/// the high byte around to the start of the array if `offset` is its last
/// byte.
pub(crate) fn read_wrapping(bytes: &[u8], offset: usize) -> u16 {
    let mask = bytes.len() - 1;
    let lo = offset & mask;
    let hi = (lo + 1) & mask;
    LittleEndian::read_u16(&[bytes[lo], bytes[hi]])
}

/// Writes a little-endian word into a power-of-two sized byte array, with the
/// same wrapping behavior as [`read_wrapping`].
pub(crate) fn write_wrapping(bytes: &mut [u8], offset: usize, data: u16) {
    let mask = bytes.len() - 1;
    let lo = offset & mask;
    let hi = (lo + 1) & mask;
    let mut buf = [0u8; 2];
    LittleEndian::write_u16(&mut buf, data);
    bytes[lo] = buf[0];
    bytes[hi] = buf[1];
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{read_wrapping, write_wrapping};

    #[test]
    fn little_endian_words() {
        let mut bytes = [0u8; 8];
        write_wrapping(&mut bytes, 2, 0x1234);
        assert_eq!(bytes, [0x00, 0x00, 0x34, 0x12, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(read_wrapping(&bytes, 2), 0x1234);
        assert_eq!(read_wrapping(&bytes, 3), 0x0012);
    }

    #[test]
    fn word_at_last_byte_wraps() {
        let mut bytes = [0u8; 4];
        write_wrapping(&mut bytes, 3, 0xabcd);
        assert_eq!(bytes, [0xab, 0x00, 0x00, 0xcd]);
        assert_eq!(read_wrapping(&bytes, 3), 0xabcd);
        assert_eq!(read_wrapping(&bytes, 7), 0xabcd);
    }

    #[test]
    fn single_byte_array() {
        let bytes = [0xea];
        assert_eq!(read_wrapping(&bytes, 0), 0xeaea);
        assert_eq!(read_wrapping(&bytes, 12345), 0xeaea);
    }
}

//===========================================================================//
