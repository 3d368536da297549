use super::{read_wrapping, write_wrapping};

//===========================================================================//

/// The size of working RAM, in bytes.
pub const RAM_SIZE: usize = 0x4000;

//===========================================================================//

/// The 16kB working RAM.  Only the low 14 address bits are connected, so the
/// RAM is mirrored every 16kB.
pub struct WorkRam {
    ram: Box<[u8; RAM_SIZE]>,
}

impl WorkRam {
    /// Returns a new working RAM, with every byte cleared to zero.
    pub fn new() -> WorkRam {
        WorkRam { ram: Box::new([0u8; RAM_SIZE]) }
    }

    /// Returns the raw contents of RAM.
    pub fn bytes(&self) -> &[u8] {
        self.ram.as_slice()
    }

    /// Reads the little-endian word at the given address.
    pub fn read_word(&self, addr: u32) -> u16 {
        read_wrapping(self.ram.as_slice(), addr as usize)
    }

    /// Writes a little-endian word at the given address.
    pub fn write_word(&mut self, addr: u32, data: u16) {
        write_wrapping(self.ram.as_mut_slice(), addr as usize, data);
    }
}

impl Default for WorkRam {
    fn default() -> WorkRam {
        WorkRam::new()
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::WorkRam;

    #[test]
    fn starts_cleared() {
        let ram = WorkRam::new();
        assert!(ram.bytes().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn address_mirroring() {
        let mut ram = WorkRam::new();
        assert_eq!(ram.read_word(0x01234), 0x0000);
        ram.write_word(0x01234, 0xabcd);
        assert_eq!(ram.read_word(0x01234), 0xabcd);
        assert_eq!(ram.read_word(0x05234), 0xabcd);
        assert_eq!(ram.read_word(0x0d234), 0xabcd);
        ram.write_word(0x09234, 0x1357);
        assert_eq!(ram.read_word(0x01234), 0x1357);
    }

    #[test]
    fn odd_address_at_top_of_ram() {
        let mut ram = WorkRam::new();
        ram.write_word(0x3fff, 0x5aa5);
        assert_eq!(ram.bytes()[0x3fff], 0xa5);
        assert_eq!(ram.bytes()[0x0000], 0x5a);
        assert_eq!(ram.read_word(0x3fff), 0x5aa5);
    }
}

//===========================================================================//
