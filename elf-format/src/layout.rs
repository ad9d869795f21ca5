//! Required byte counts per record kind
//!
//! External readers own the truncation check: before decoding a record they
//! must confirm the buffer holds at least the byte count given here. The
//! counts come straight from the `#[repr(C)]` layouts, which are themselves
//! compile-time asserted against the ABI sizes.

use core::mem::size_of;

use crate::dynamic::{Elf32Dyn, Elf64Dyn};
use crate::header::{Elf32Ehdr, Elf64Ehdr};
use crate::ident::{Class, EI_NIDENT};
use crate::note::{Elf32Nhdr, Elf64Nhdr};
use crate::program::{Elf32Phdr, Elf64Phdr};
use crate::reloc::{Elf32Rel, Elf32Rela, Elf64Rel, Elf64Rela};
use crate::section::{Elf32Shdr, Elf64Shdr};
use crate::symbol::{Elf32Sym, Elf64Sym};

/// The fixed-layout record kinds of an ELF image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// File header, identification prefix included
    FileHeader,
    /// Program header table entry
    ProgramHeader,
    /// Section header table entry
    SectionHeader,
    /// Symbol table entry
    Symbol,
    /// Relocation without addend
    Rel,
    /// Relocation with addend
    Rela,
    /// Dynamic-section entry
    Dynamic,
    /// Note header, excluding the variable-length blobs
    NoteHeader,
}

/// Bytes required to back one record of the given kind and class
pub const fn record_size(kind: RecordKind, class: Class) -> usize {
    match class {
        Class::Elf32 => match kind {
            RecordKind::FileHeader => size_of::<Elf32Ehdr>(),
            RecordKind::ProgramHeader => size_of::<Elf32Phdr>(),
            RecordKind::SectionHeader => size_of::<Elf32Shdr>(),
            RecordKind::Symbol => size_of::<Elf32Sym>(),
            RecordKind::Rel => size_of::<Elf32Rel>(),
            RecordKind::Rela => size_of::<Elf32Rela>(),
            RecordKind::Dynamic => size_of::<Elf32Dyn>(),
            RecordKind::NoteHeader => size_of::<Elf32Nhdr>(),
        },
        Class::Elf64 => match kind {
            RecordKind::FileHeader => size_of::<Elf64Ehdr>(),
            RecordKind::ProgramHeader => size_of::<Elf64Phdr>(),
            RecordKind::SectionHeader => size_of::<Elf64Shdr>(),
            RecordKind::Symbol => size_of::<Elf64Sym>(),
            RecordKind::Rel => size_of::<Elf64Rel>(),
            RecordKind::Rela => size_of::<Elf64Rela>(),
            RecordKind::Dynamic => size_of::<Elf64Dyn>(),
            RecordKind::NoteHeader => size_of::<Elf64Nhdr>(),
        },
    }
}

/// Bytes required to classify an image at all
pub const fn ident_size() -> usize {
    EI_NIDENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes_32() {
        assert_eq!(record_size(RecordKind::FileHeader, Class::Elf32), 52);
        assert_eq!(record_size(RecordKind::ProgramHeader, Class::Elf32), 32);
        assert_eq!(record_size(RecordKind::SectionHeader, Class::Elf32), 40);
        assert_eq!(record_size(RecordKind::Symbol, Class::Elf32), 16);
        assert_eq!(record_size(RecordKind::Rel, Class::Elf32), 8);
        assert_eq!(record_size(RecordKind::Rela, Class::Elf32), 12);
        assert_eq!(record_size(RecordKind::Dynamic, Class::Elf32), 8);
        assert_eq!(record_size(RecordKind::NoteHeader, Class::Elf32), 12);
    }

    #[test]
    fn test_record_sizes_64() {
        assert_eq!(record_size(RecordKind::FileHeader, Class::Elf64), 64);
        assert_eq!(record_size(RecordKind::ProgramHeader, Class::Elf64), 56);
        assert_eq!(record_size(RecordKind::SectionHeader, Class::Elf64), 64);
        assert_eq!(record_size(RecordKind::Symbol, Class::Elf64), 24);
        assert_eq!(record_size(RecordKind::Rel, Class::Elf64), 16);
        assert_eq!(record_size(RecordKind::Rela, Class::Elf64), 24);
        assert_eq!(record_size(RecordKind::Dynamic, Class::Elf64), 16);
        assert_eq!(record_size(RecordKind::NoteHeader, Class::Elf64), 12);
    }

    #[test]
    fn test_ident_size() {
        assert_eq!(ident_size(), 16);
    }
}
