//! Section headers
//!
//! Sections are the link-time view of the file. The meaning of `sh_link` and
//! `sh_info` depends on `sh_type` (a symbol table links to its string table, a
//! relocation section names the section it patches, and so on); this module
//! only carries the layout and the type/flag vocabulary.

use static_assertions::const_assert_eq;

/// Section type (`sh_type`)
pub const SHT_NULL: u32 = 0; // Inactive header
pub const SHT_PROGBITS: u32 = 1; // Program-defined contents
pub const SHT_SYMTAB: u32 = 2; // Symbol table
pub const SHT_STRTAB: u32 = 3; // String table
pub const SHT_RELA: u32 = 4; // Relocation entries with addends
pub const SHT_HASH: u32 = 5; // Symbol hash table
pub const SHT_DYNAMIC: u32 = 6; // Dynamic linking information
pub const SHT_NOTE: u32 = 7; // Notes
pub const SHT_NOBITS: u32 = 8; // Occupies no file space (bss)
pub const SHT_REL: u32 = 9; // Relocation entries without addends
pub const SHT_SHLIB: u32 = 10; // Reserved
pub const SHT_DYNSYM: u32 = 11; // Dynamic linker symbol table
pub const SHT_NUM: u32 = 12; // Number of base types
pub const SHT_INIT_ARRAY: u32 = 14; // Array of constructors
pub const SHT_FINI_ARRAY: u32 = 15; // Array of destructors
pub const SHT_PREINIT_ARRAY: u32 = 16; // Array of pre-constructors
pub const SHT_GNU_HASH: u32 = 0x6ffffff6; // GNU-style hash table
pub const SHT_GNU_VERDEF: u32 = 0x6ffffffd; // Version definitions
pub const SHT_GNU_VERNEED: u32 = 0x6ffffffe; // Version needs
pub const SHT_GNU_VERSYM: u32 = 0x6fffffff; // Version symbol table
pub const SHT_LOPROC: u32 = 0x70000000; // Processor-specific range
pub const SHT_HIPROC: u32 = 0x7fffffff;
pub const SHT_LOUSER: u32 = 0x80000000; // Application-specific range
pub const SHT_HIUSER: u32 = 0xffffffff;

/// Section flag bits (`sh_flags`)
pub const SHF_WRITE: u64 = 0x1; // Writable at run time
pub const SHF_ALLOC: u64 = 0x2; // Occupies memory during execution
pub const SHF_EXECINSTR: u64 = 0x4; // Contains executable instructions
pub const SHF_MERGE: u64 = 0x10; // Elements may be merged
pub const SHF_STRINGS: u64 = 0x20; // Contains nul-terminated strings
pub const SHF_INFO_LINK: u64 = 0x40; // sh_info holds a section index
pub const SHF_LINK_ORDER: u64 = 0x80; // Preserve order after combining
pub const SHF_OS_NONCONFORMING: u64 = 0x100; // Non-standard OS handling
pub const SHF_GROUP: u64 = 0x200; // Member of a section group
pub const SHF_TLS: u64 = 0x400; // Holds thread-local data
pub const SHF_COMPRESSED: u64 = 0x800; // Contains compressed data
pub const SHF_RELA_LIVEPATCH: u64 = 0x0010_0000; // Livepatch relocation section
pub const SHF_RO_AFTER_INIT: u64 = 0x0020_0000; // Read-only after init
pub const SHF_MASKPROC: u64 = 0xf000_0000; // Processor-specific bits

/// Special section indexes (`st_shndx` and friends)
pub const SHN_UNDEF: u16 = 0; // Undefined section reference
pub const SHN_LORESERVE: u16 = 0xff00; // Start of reserved range
pub const SHN_LOPROC: u16 = 0xff00; // Processor-specific range
pub const SHN_HIPROC: u16 = 0xff1f;
pub const SHN_LIVEPATCH: u16 = 0xff20; // Livepatch symbol
pub const SHN_ABS: u16 = 0xfff1; // Absolute value, no section
pub const SHN_COMMON: u16 = 0xfff2; // Common block, not yet allocated
pub const SHN_HIRESERVE: u16 = 0xffff;

bitflags::bitflags! {
    /// Typed view of `sh_flags`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SectionFlags: u64 {
        const WRITE = SHF_WRITE;
        const ALLOC = SHF_ALLOC;
        const EXECINSTR = SHF_EXECINSTR;
        const MERGE = SHF_MERGE;
        const STRINGS = SHF_STRINGS;
        const INFO_LINK = SHF_INFO_LINK;
        const LINK_ORDER = SHF_LINK_ORDER;
        const OS_NONCONFORMING = SHF_OS_NONCONFORMING;
        const GROUP = SHF_GROUP;
        const TLS = SHF_TLS;
        const COMPRESSED = SHF_COMPRESSED;
        const RELA_LIVEPATCH = SHF_RELA_LIVEPATCH;
        const RO_AFTER_INIT = SHF_RO_AFTER_INIT;
    }
}

/// ELF32 section header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf32Shdr {
    /// Section name (string table index)
    pub sh_name: u32,
    /// Section type
    pub sh_type: u32,
    /// Section flag bits
    pub sh_flags: u32,
    /// Virtual address at execution
    pub sh_addr: u32,
    /// Section file offset
    pub sh_offset: u32,
    /// Section size in bytes
    pub sh_size: u32,
    /// Cross-reference to another section (meaning depends on type)
    pub sh_link: u32,
    /// Additional information (meaning depends on type)
    pub sh_info: u32,
    /// Section alignment
    pub sh_addralign: u32,
    /// Entry size, nonzero only for table sections
    pub sh_entsize: u32,
}

/// ELF64 section header
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf64Shdr {
    /// Section name (string table index)
    pub sh_name: u32,
    /// Section type
    pub sh_type: u32,
    /// Section flag bits
    pub sh_flags: u64,
    /// Virtual address at execution
    pub sh_addr: u64,
    /// Section file offset
    pub sh_offset: u64,
    /// Section size in bytes
    pub sh_size: u64,
    /// Cross-reference to another section (meaning depends on type)
    pub sh_link: u32,
    /// Additional information (meaning depends on type)
    pub sh_info: u32,
    /// Section alignment
    pub sh_addralign: u64,
    /// Entry size, nonzero only for table sections
    pub sh_entsize: u64,
}

const_assert_eq!(core::mem::size_of::<Elf32Shdr>(), 40);
const_assert_eq!(core::mem::size_of::<Elf64Shdr>(), 64);

impl Elf32Shdr {
    /// Flag bits as a typed set; processor-specific bits are dropped
    pub fn flags(&self) -> SectionFlags {
        SectionFlags::from_bits_truncate(self.sh_flags as u64)
    }

    /// Does this section occupy memory at run time?
    pub fn is_alloc(&self) -> bool {
        (self.sh_flags as u64 & SHF_ALLOC) != 0
    }
}

impl Elf64Shdr {
    /// Flag bits as a typed set; processor-specific bits are dropped
    pub fn flags(&self) -> SectionFlags {
        SectionFlags::from_bits_truncate(self.sh_flags)
    }

    /// Does this section occupy memory at run time?
    pub fn is_alloc(&self) -> bool {
        (self.sh_flags & SHF_ALLOC) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shdr_sizes() {
        assert_eq!(core::mem::size_of::<Elf32Shdr>(), 40);
        assert_eq!(core::mem::size_of::<Elf64Shdr>(), 64);
    }

    #[test]
    fn test_flag_bitset() {
        let shdr = Elf64Shdr {
            sh_name: 1,
            sh_type: SHT_PROGBITS,
            sh_flags: SHF_ALLOC | SHF_EXECINSTR,
            sh_addr: 0x40_0000,
            sh_offset: 0x1000,
            sh_size: 0x200,
            sh_link: 0,
            sh_info: 0,
            sh_addralign: 16,
            sh_entsize: 0,
        };
        assert!(shdr.is_alloc());
        assert_eq!(
            shdr.flags(),
            SectionFlags::ALLOC | SectionFlags::EXECINSTR
        );
    }

    #[test]
    fn test_reserved_index_range() {
        assert_eq!(SHN_LORESERVE, SHN_LOPROC);
        assert!(SHN_ABS > SHN_LORESERVE);
        assert!(SHN_COMMON < SHN_HIRESERVE);
    }
}
