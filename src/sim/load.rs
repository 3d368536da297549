use crate::bus::BootRom;
use std::io::{self, Read};

//===========================================================================//

/// An error encountered while loading a boot image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image could not be read.
    #[error("failed to read boot image")]
    Io(#[from] io::Error),
    /// The image contains no bytes.
    #[error("boot image is empty")]
    Empty,
    /// The image size is not a power of two, so it can't be mirrored across
    /// the ROM address range.
    #[error("boot image size {0:#x} is not a power of two")]
    NotPowerOfTwo(usize),
}

//===========================================================================//

/// Reads a raw boot image in full, and returns the boot ROM that holds it.
pub fn load_boot_image<R: Read>(mut reader: R) -> Result<BootRom, LoadError> {
    let mut image = Vec::<u8>::new();
    reader.read_to_end(&mut image)?;
    if image.is_empty() {
        return Err(LoadError::Empty);
    }
    if !image.len().is_power_of_two() {
        return Err(LoadError::NotPowerOfTwo(image.len()));
    }
    let rom = BootRom::new(image.into_boxed_slice());
    log::info!("loaded {} boot image", rom.description());
    Ok(rom)
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{LoadError, load_boot_image};
    use std::io;

    #[test]
    fn load_two_byte_image() {
        let rom = load_boot_image(&[0xea, 0x00][..]).unwrap();
        assert_eq!(rom.size(), 2);
        assert_eq!(rom.read_word(0xffff0), 0x00ea);
    }

    #[test]
    fn reject_empty_image() {
        let result = load_boot_image(io::empty());
        assert!(matches!(result, Err(LoadError::Empty)));
    }

    #[test]
    fn reject_non_power_of_two() {
        let result = load_boot_image(&[0u8; 0x300][..]);
        assert!(matches!(result, Err(LoadError::NotPowerOfTwo(0x300))));
        assert_eq!(
            result.err().map(|error| error.to_string()),
            Some("boot image size 0x300 is not a power of two".to_string())
        );
    }
}

//===========================================================================//
