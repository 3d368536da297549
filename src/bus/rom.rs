use super::read_wrapping;

//===========================================================================//

/// The boot ROM image.  Reads beyond the image size are mirrored, and the
/// image never changes once loaded.
pub struct BootRom {
    rom: Box<[u8]>,
}

impl BootRom {
    /// Returns a new boot ROM using the given byte array as its contents.
    /// Panics if the length of the byte array is not a power of 2, since the
    /// mirroring is done by masking address bits.  Use
    /// [`load_boot_image`](crate::sim::load_boot_image) to get an error
    /// instead.
    pub fn new(rom: Box<[u8]>) -> BootRom {
        assert!(rom.len().is_power_of_two());
        BootRom { rom }
    }

    /// Returns the size of the image, in bytes.
    pub fn size(&self) -> usize {
        self.rom.len()
    }

    /// Returns the raw contents of the image.
    pub fn bytes(&self) -> &[u8] {
        &self.rom
    }

    /// Returns a human-readable description of the image.
    pub fn description(&self) -> String {
        let size = self.rom.len();
        if size < 1024 {
            format!("{size}B ROM")
        } else if size < 1024 * 1024 {
            format!("{}kB ROM", size >> 10)
        } else {
            format!("{}MB ROM", size >> 20)
        }
    }

    /// Reads the little-endian word at the given address, mirrored across the
    /// image.
    pub fn read_word(&self, addr: u32) -> u16 {
        read_wrapping(&self.rom, addr as usize)
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::BootRom;

    #[test]
    fn description() {
        let rom = BootRom::new(Box::new([0u8; 0x10]));
        assert_eq!(rom.description(), "16B ROM");
        let rom = BootRom::new(Box::new([0u8; 0x1000]));
        assert_eq!(rom.description(), "4kB ROM");
        let rom = BootRom::new(vec![0u8; 0x100000].into_boxed_slice());
        assert_eq!(rom.description(), "1MB ROM");
    }

    #[test]
    fn address_mirroring() {
        let mut rom = vec![0u8; 0x10000];
        rom[0x1234] = 0xcd;
        rom[0x1235] = 0xab;
        let rom = BootRom::new(rom.into_boxed_slice());
        assert_eq!(rom.read_word(0x01232), 0x0000);
        assert_eq!(rom.read_word(0x01234), 0xabcd);
        assert_eq!(rom.read_word(0x11234), 0xabcd);
        assert_eq!(rom.read_word(0xf1234), 0xabcd);
        assert_eq!(rom.read_word(0x01233), 0xcd00);
    }

    #[test]
    #[should_panic]
    fn size_must_be_power_of_two() {
        BootRom::new(Box::new([0u8; 3]));
    }
}

//===========================================================================//
