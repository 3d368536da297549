use super::{BootRom, SimDevice, WorkRam};

//===========================================================================//

/// Addresses at or above this boundary map to the boot ROM; addresses below
/// it map to working RAM.
const ROM_BOUNDARY: u32 = 0x10000;

//===========================================================================//

/// The processor's memory space: the boot ROM mirrored across the upper
/// address range, and working RAM mirrored across the lower 64kB.
///
/// The ROM image must be a power of two in size, since the mirroring is done
/// by masking address bits.  Writes to the ROM range are silently ignored.
pub struct MemoryStore {
    rom: BootRom,
    ram: WorkRam,
}

impl MemoryStore {
    /// Returns a new memory space with the given boot ROM and cleared RAM.
    pub fn new(rom: BootRom) -> MemoryStore {
        MemoryStore { rom, ram: WorkRam::new() }
    }

    /// Returns the boot ROM.
    pub fn rom(&self) -> &BootRom {
        &self.rom
    }

    /// Returns working RAM.
    pub fn ram(&self) -> &WorkRam {
        &self.ram
    }

    /// Reads the word at the given address.
    pub fn read16(&self, addr: u32) -> u16 {
        if addr >= ROM_BOUNDARY {
            self.rom.read_word(addr)
        } else {
            self.ram.read_word(addr)
        }
    }

    /// Writes the word at the given address, if it maps to RAM.
    pub fn write16(&mut self, addr: u32, data: u16) {
        if addr < ROM_BOUNDARY {
            self.ram.write_word(addr, data);
        } else {
            log::trace!("ignoring write to ROM at {addr:#07x}");
        }
    }
}

impl SimDevice for MemoryStore {
    fn description(&self) -> String {
        format!("16kB RAM with {}", self.rom.description())
    }

    fn label_at(&self, addr: u32) -> Option<&str> {
        if addr >= ROM_BOUNDARY { Some("ROM") } else { Some("RAM") }
    }

    fn read_word(&mut self, addr: u32) -> u16 {
        self.read16(addr)
    }

    fn write_word(&mut self, addr: u32, data: u16) {
        self.write16(addr, data)
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::bus::{BootRom, SimDevice};

    fn make_store(rom: &[u8]) -> MemoryStore {
        MemoryStore::new(BootRom::new(rom.to_vec().into_boxed_slice()))
    }

    #[test]
    fn description() {
        let store = make_store(&[0u8; 0x1000]);
        assert_eq!(store.description(), "16kB RAM with 4kB ROM");
    }

    #[test]
    fn rom_is_mirrored_above_64k() {
        let store = make_store(&[0x11, 0x22, 0x33, 0x44]);
        assert_eq!(store.read16(0x10000), 0x2211);
        assert_eq!(store.read16(0x10002), 0x4433);
        assert_eq!(store.read16(0x10004), 0x2211);
        assert_eq!(store.read16(0xffff0), 0x2211);
        assert_eq!(store.read16(0xffffe), 0x4433);
    }

    #[test]
    fn ram_is_mirrored_below_64k() {
        let mut store = make_store(&[0u8; 4]);
        store.write16(0x0010, 0xbeef);
        assert_eq!(store.read16(0x0010), 0xbeef);
        assert_eq!(store.read16(0x4010), 0xbeef);
        assert_eq!(store.read16(0x8010), 0xbeef);
        assert_eq!(store.read16(0xc010), 0xbeef);
    }

    #[test]
    fn writes_to_rom_are_ignored() {
        let mut store = make_store(&[0x11, 0x22, 0x33, 0x44]);
        store.write16(0x10000, 0xffff);
        assert_eq!(store.read16(0x10000), 0x2211);
        assert!(store.ram().bytes().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn top_of_ram_range_is_writable() {
        let mut store = make_store(&[0u8; 4]);
        store.write16(0xfffe, 0x1234);
        assert_eq!(store.read16(0x3ffe), 0x1234);
        store.write16(0xffff, 0x5678);
        assert_eq!(store.read16(0x3fff), 0x5678);
    }

    #[test]
    fn labels() {
        let store = make_store(&[0u8; 4]);
        assert_eq!(store.label_at(0x0000), Some("RAM"));
        assert_eq!(store.label_at(0xffff), Some("RAM"));
        assert_eq!(store.label_at(0x10000), Some("ROM"));
    }
}

//===========================================================================//
