//! Program headers (segments)
//!
//! A program header describes how one contiguous range of the file maps into
//! process memory. The 64-bit encoding is not just widened: `p_flags` moves up
//! to sit right after `p_type` so the 64-bit fields stay naturally aligned.

use static_assertions::const_assert_eq;

/// Segment type (`p_type`)
pub const PT_NULL: u32 = 0; // Unused entry
pub const PT_LOAD: u32 = 1; // Loadable segment
pub const PT_DYNAMIC: u32 = 2; // Dynamic linking information
pub const PT_INTERP: u32 = 3; // Program interpreter path
pub const PT_NOTE: u32 = 4; // Auxiliary information
pub const PT_SHLIB: u32 = 5; // Reserved
pub const PT_PHDR: u32 = 6; // Program header table itself
pub const PT_TLS: u32 = 7; // Thread-local storage template
pub const PT_NUM: u32 = 8; // Number of defined types
pub const PT_LOOS: u32 = 0x60000000; // OS-specific range
pub const PT_GNU_EH_FRAME: u32 = 0x6474e550; // GCC .eh_frame_hdr segment
pub const PT_GNU_STACK: u32 = 0x6474e551; // Stack executability marker
pub const PT_GNU_RELRO: u32 = 0x6474e552; // Read-only after relocation
pub const PT_PAX_FLAGS: u32 = 0x65041580; // PaX flag markings
pub const PT_OPENBSD_RANDOMIZE: u32 = 0x65a3dbe6; // Fill with random data
pub const PT_OPENBSD_WXNEEDED: u32 = 0x65a3dbe7; // Program does W^X violations
pub const PT_OPENBSD_BOOTDATA: u32 = 0x65a41be6; // Section for boot arguments
pub const PT_HIOS: u32 = 0x6fffffff;
pub const PT_LOPROC: u32 = 0x70000000; // Processor-specific range
pub const PT_HIPROC: u32 = 0x7fffffff;

/// Segment permission bits (`p_flags`)
pub const PF_X: u32 = 0x1; // Executable
pub const PF_W: u32 = 0x2; // Writable
pub const PF_R: u32 = 0x4; // Readable
pub const PF_MASKOS: u32 = 0x0ff00000; // OS-specific bits
pub const PF_MASKPROC: u32 = 0xf0000000; // Processor-specific bits

bitflags::bitflags! {
    /// Typed view of `p_flags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SegmentFlags: u32 {
        /// Execute permission
        const EXECUTE = PF_X;
        /// Write permission
        const WRITE = PF_W;
        /// Read permission
        const READ = PF_R;
    }
}

/// ELF32 program header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf32Phdr {
    /// Segment type
    pub p_type: u32,
    /// Segment file offset
    pub p_offset: u32,
    /// Segment virtual address
    pub p_vaddr: u32,
    /// Segment physical address
    pub p_paddr: u32,
    /// Segment size in file
    pub p_filesz: u32,
    /// Segment size in memory
    pub p_memsz: u32,
    /// Segment permission flags
    pub p_flags: u32,
    /// Segment alignment
    pub p_align: u32,
}

/// ELF64 program header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Phdr {
    /// Segment type
    pub p_type: u32,
    /// Segment permission flags
    pub p_flags: u32,
    /// Segment file offset
    pub p_offset: u64,
    /// Segment virtual address
    pub p_vaddr: u64,
    /// Segment physical address
    pub p_paddr: u64,
    /// Segment size in file
    pub p_filesz: u64,
    /// Segment size in memory
    pub p_memsz: u64,
    /// Segment alignment, file and memory
    pub p_align: u64,
}

const_assert_eq!(core::mem::size_of::<Elf32Phdr>(), 32);
const_assert_eq!(core::mem::size_of::<Elf64Phdr>(), 56);

impl Elf32Phdr {
    /// Is this a loadable segment?
    pub fn is_load(&self) -> bool {
        self.p_type == PT_LOAD
    }

    /// Is this segment readable?
    pub fn is_readable(&self) -> bool {
        (self.p_flags & PF_R) != 0
    }

    /// Is this segment writable?
    pub fn is_writable(&self) -> bool {
        (self.p_flags & PF_W) != 0
    }

    /// Is this segment executable?
    pub fn is_executable(&self) -> bool {
        (self.p_flags & PF_X) != 0
    }

    /// Permission bits as a typed set; OS- and processor-specific bits
    /// are dropped
    pub fn flags(&self) -> SegmentFlags {
        SegmentFlags::from_bits_truncate(self.p_flags)
    }
}

impl Elf64Phdr {
    /// Is this a loadable segment?
    pub fn is_load(&self) -> bool {
        self.p_type == PT_LOAD
    }

    /// Is this segment readable?
    pub fn is_readable(&self) -> bool {
        (self.p_flags & PF_R) != 0
    }

    /// Is this segment writable?
    pub fn is_writable(&self) -> bool {
        (self.p_flags & PF_W) != 0
    }

    /// Is this segment executable?
    pub fn is_executable(&self) -> bool {
        (self.p_flags & PF_X) != 0
    }

    /// Permission bits as a typed set; OS- and processor-specific bits
    /// are dropped
    pub fn flags(&self) -> SegmentFlags {
        SegmentFlags::from_bits_truncate(self.p_flags)
    }
}
