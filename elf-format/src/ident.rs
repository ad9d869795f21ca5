//! ELF identification
//!
//! The first `EI_NIDENT` bytes of every ELF image carry the magic number, the
//! word size, the byte order, the format version and the OS/ABI tag. Resolving
//! them is the only decision point in the format: everything after the
//! identification prefix is laid out according to the class and encoding
//! found here.

use core::fmt;

/// Size of the identification prefix
pub const EI_NIDENT: usize = 16;

/// `e_ident` byte indexes
pub const EI_MAG0: usize = 0;
pub const EI_MAG1: usize = 1;
pub const EI_MAG2: usize = 2;
pub const EI_MAG3: usize = 3;
pub const EI_CLASS: usize = 4;
pub const EI_DATA: usize = 5;
pub const EI_VERSION: usize = 6;
pub const EI_OSABI: usize = 7;
pub const EI_ABIVERSION: usize = 8;
pub const EI_PAD: usize = 9;

/// ELF magic number
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

pub const ELFMAG0: u8 = 0x7f;
pub const ELFMAG1: u8 = b'E';
pub const ELFMAG2: u8 = b'L';
pub const ELFMAG3: u8 = b'F';

/// File class (`e_ident[EI_CLASS]`)
pub const ELFCLASSNONE: u8 = 0;
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;
pub const ELFCLASSNUM: u8 = 3;

/// Data encoding (`e_ident[EI_DATA]`)
pub const ELFDATANONE: u8 = 0;
pub const ELFDATA2LSB: u8 = 1; // Little endian
pub const ELFDATA2MSB: u8 = 2; // Big endian

/// Format version (`e_ident[EI_VERSION]` and `e_version`)
pub const EV_NONE: u8 = 0;
pub const EV_CURRENT: u8 = 1;
pub const EV_NUM: u8 = 2;

/// OS/ABI identification (`e_ident[EI_OSABI]`)
pub const ELFOSABI_NONE: u8 = 0; // UNIX System V
pub const ELFOSABI_HPUX: u8 = 1;
pub const ELFOSABI_NETBSD: u8 = 2;
pub const ELFOSABI_LINUX: u8 = 3;
pub const ELFOSABI_HURD: u8 = 4;
pub const ELFOSABI_86OPEN: u8 = 5;
pub const ELFOSABI_SOLARIS: u8 = 6;
pub const ELFOSABI_MONTEREY: u8 = 7; // AIX
pub const ELFOSABI_IRIX: u8 = 8;
pub const ELFOSABI_FREEBSD: u8 = 9;
pub const ELFOSABI_TRU64: u8 = 10;
pub const ELFOSABI_MODESTO: u8 = 11;
pub const ELFOSABI_OPENBSD: u8 = 12;
pub const ELFOSABI_ARM: u8 = 97;
pub const ELFOSABI_STANDALONE: u8 = 255;

/// Word size of an ELF image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// 32-bit layouts
    Elf32,
    /// 64-bit layouts
    Elf64,
}

impl Class {
    /// Resolve the class byte, `None` for `ELFCLASSNONE` or anything unknown
    pub fn from_byte(byte: u8) -> Option<Class> {
        match byte {
            ELFCLASS32 => Some(Class::Elf32),
            ELFCLASS64 => Some(Class::Elf64),
            _ => None,
        }
    }

    /// The raw class byte
    pub fn to_byte(self) -> u8 {
        match self {
            Class::Elf32 => ELFCLASS32,
            Class::Elf64 => ELFCLASS64,
        }
    }
}

/// Byte order of an ELF image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    LittleEndian,
    BigEndian,
}

impl Encoding {
    /// Resolve the data byte, `None` for `ELFDATANONE` or anything unknown
    pub fn from_byte(byte: u8) -> Option<Encoding> {
        match byte {
            ELFDATA2LSB => Some(Encoding::LittleEndian),
            ELFDATA2MSB => Some(Encoding::BigEndian),
            _ => None,
        }
    }

    /// The raw data byte
    pub fn to_byte(self) -> u8 {
        match self {
            Encoding::LittleEndian => ELFDATA2LSB,
            Encoding::BigEndian => ELFDATA2MSB,
        }
    }
}

/// Why an identification prefix is not a recognized ELF image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentError {
    /// First four bytes do not match the magic sequence
    BadMagic,
    /// Class byte is neither 32-bit nor 64-bit
    BadClass(u8),
    /// Data byte is neither little- nor big-endian
    BadEncoding(u8),
    /// Version byte is not `EV_CURRENT`
    BadVersion(u8),
}

impl fmt::Display for IdentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentError::BadMagic => write!(f, "not an ELF image (bad magic)"),
            IdentError::BadClass(byte) => write!(f, "invalid ELF class byte {}", byte),
            IdentError::BadEncoding(byte) => write!(f, "invalid ELF data byte {}", byte),
            IdentError::BadVersion(byte) => write!(f, "unsupported ELF version {}", byte),
        }
    }
}

/// Resolved identification prefix
///
/// The OS/ABI and ABI-version bytes are informational; a zero OS/ABI byte is
/// the System V default and unknown values are carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElfIdent {
    /// Word size
    pub class: Class,
    /// Byte order
    pub encoding: Encoding,
    /// Format version (`EV_CURRENT`)
    pub version: u8,
    /// OS/ABI tag
    pub os_abi: u8,
    /// ABI version
    pub abi_version: u8,
}

impl ElfIdent {
    /// Classify an identification prefix
    ///
    /// This only classifies; whether a rejected prefix aborts the caller or
    /// triggers best-effort recovery is the caller's policy. The buffer is the
    /// full prefix, so truncation checks have already happened upstream.
    pub fn parse(bytes: &[u8; EI_NIDENT]) -> Result<ElfIdent, IdentError> {
        if bytes[EI_MAG0..=EI_MAG3] != ELF_MAGIC {
            #[cfg(feature = "log")]
            log::debug!("rejecting non-ELF image: magic {:02x?}", &bytes[..4]);
            return Err(IdentError::BadMagic);
        }
        let class =
            Class::from_byte(bytes[EI_CLASS]).ok_or(IdentError::BadClass(bytes[EI_CLASS]))?;
        let encoding =
            Encoding::from_byte(bytes[EI_DATA]).ok_or(IdentError::BadEncoding(bytes[EI_DATA]))?;
        if bytes[EI_VERSION] != EV_CURRENT {
            return Err(IdentError::BadVersion(bytes[EI_VERSION]));
        }
        Ok(ElfIdent {
            class,
            encoding,
            version: bytes[EI_VERSION],
            os_abi: bytes[EI_OSABI],
            abi_version: bytes[EI_ABIVERSION],
        })
    }

    /// Is this the System V default OS/ABI?
    pub fn is_sysv(&self) -> bool {
        self.os_abi == ELFOSABI_NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident_bytes(class: u8, data: u8, version: u8) -> [u8; EI_NIDENT] {
        let mut bytes = [0u8; EI_NIDENT];
        bytes[..4].copy_from_slice(&ELF_MAGIC);
        bytes[EI_CLASS] = class;
        bytes[EI_DATA] = data;
        bytes[EI_VERSION] = version;
        bytes
    }

    #[test]
    fn test_classify_32bit_little_endian() {
        let ident = ElfIdent::parse(&ident_bytes(ELFCLASS32, ELFDATA2LSB, EV_CURRENT)).unwrap();
        assert_eq!(ident.class, Class::Elf32);
        assert_eq!(ident.encoding, Encoding::LittleEndian);
        assert_eq!(ident.version, EV_CURRENT);
        assert!(ident.is_sysv());
    }

    #[test]
    fn test_classify_64bit_big_endian() {
        let ident = ElfIdent::parse(&ident_bytes(ELFCLASS64, ELFDATA2MSB, EV_CURRENT)).unwrap();
        assert_eq!(ident.class, Class::Elf64);
        assert_eq!(ident.encoding, Encoding::BigEndian);
    }

    #[test]
    fn test_reject_bad_magic() {
        let mut bytes = ident_bytes(ELFCLASS32, ELFDATA2LSB, EV_CURRENT);
        bytes[EI_MAG0] = 0x7e;
        assert_eq!(ElfIdent::parse(&bytes), Err(IdentError::BadMagic));
    }

    #[test]
    fn test_reject_bad_class() {
        let bytes = ident_bytes(3, ELFDATA2LSB, EV_CURRENT);
        assert_eq!(ElfIdent::parse(&bytes), Err(IdentError::BadClass(3)));
    }

    #[test]
    fn test_reject_bad_encoding() {
        let bytes = ident_bytes(ELFCLASS64, ELFDATANONE, EV_CURRENT);
        assert_eq!(
            ElfIdent::parse(&bytes),
            Err(IdentError::BadEncoding(ELFDATANONE))
        );
    }

    #[test]
    fn test_reject_bad_version() {
        let bytes = ident_bytes(ELFCLASS64, ELFDATA2LSB, EV_NONE);
        assert_eq!(ElfIdent::parse(&bytes), Err(IdentError::BadVersion(0)));
    }

    #[test]
    fn test_osabi_carried_verbatim() {
        let mut bytes = ident_bytes(ELFCLASS64, ELFDATA2LSB, EV_CURRENT);
        bytes[EI_OSABI] = ELFOSABI_FREEBSD;
        bytes[EI_ABIVERSION] = 1;
        let ident = ElfIdent::parse(&bytes).unwrap();
        assert_eq!(ident.os_abi, ELFOSABI_FREEBSD);
        assert_eq!(ident.abi_version, 1);
        assert!(!ident.is_sysv());
    }
}
