//! End-to-end checks of the format tables: classification vectors, layout
//! sizes, and the packed-field and name round-trips.

use proptest::prelude::*;

use elf_format::ident::{
    Class, ElfIdent, Encoding, IdentError, EI_NIDENT, ELFCLASS32, ELFDATA2LSB, ELF_MAGIC,
    EV_CURRENT,
};
use elf_format::names::{code_for, entries, name_for, Category, CATEGORIES};
use elf_format::reloc::{r32_info, r32_sym, r32_type, r64_info, r64_sym, r64_type};
use elf_format::symbol::{st_bind, st_info, st_type};
use elf_format::{record_size, RecordKind};

fn ident_with(class: u8) -> [u8; EI_NIDENT] {
    let mut bytes = [0u8; EI_NIDENT];
    bytes[..4].copy_from_slice(&ELF_MAGIC);
    bytes[4] = class;
    bytes[5] = ELFDATA2LSB;
    bytes[6] = EV_CURRENT;
    bytes
}

#[test]
fn classifies_32bit_little_endian_image() {
    let ident = ElfIdent::parse(&ident_with(ELFCLASS32)).unwrap();
    assert_eq!(ident.class, Class::Elf32);
    assert_eq!(ident.encoding, Encoding::LittleEndian);
    assert_eq!(ident.version, EV_CURRENT);
}

#[test]
fn rejects_class_byte_three() {
    assert_eq!(
        ElfIdent::parse(&ident_with(3)),
        Err(IdentError::BadClass(3))
    );
}

#[test]
fn rejects_non_elf_prefix() {
    let bytes = *b"MZkernel........";
    assert_eq!(ElfIdent::parse(&bytes), Err(IdentError::BadMagic));
}

#[test]
fn name_round_trips_over_every_category() {
    // Wherever a name exists, going through it must come back to the code.
    for &category in CATEGORIES {
        for &(code, _) in entries(category) {
            let name = name_for(category, code)
                .unwrap_or_else(|| panic!("{:?} code {:#x} lost its name", category, code));
            assert_eq!(code_for(category, name), Some(code), "{}", name);
        }
    }
}

#[test]
fn machine_code_10_keeps_both_historical_readings() {
    assert_eq!(code_for(Category::Machine, "EM_MIPS_RS3_LE"), Some(10));
    assert_eq!(code_for(Category::Machine, "EM_MIPS_RS4_BE"), Some(10));
}

#[test]
fn unknown_machine_code_has_no_name() {
    assert_eq!(name_for(Category::Machine, 0xffff), None);
}

#[test]
fn file_header_spans_match_field_width_sums() {
    // 16 ident + 2+2+4 + three words + 4 + six halfwords
    assert_eq!(record_size(RecordKind::FileHeader, Class::Elf32), 52);
    assert_eq!(record_size(RecordKind::FileHeader, Class::Elf64), 64);
}

#[test]
fn record_spans_for_both_classes() {
    let spans = [
        (RecordKind::ProgramHeader, 32, 56),
        (RecordKind::SectionHeader, 40, 64),
        (RecordKind::Symbol, 16, 24),
        (RecordKind::Rel, 8, 16),
        (RecordKind::Rela, 12, 24),
        (RecordKind::Dynamic, 8, 16),
        (RecordKind::NoteHeader, 12, 12),
    ];
    for (kind, span32, span64) in spans {
        assert_eq!(record_size(kind, Class::Elf32), span32, "{:?}", kind);
        assert_eq!(record_size(kind, Class::Elf64), span64, "{:?}", kind);
    }
}

proptest! {
    #[test]
    fn symbol_info_round_trips(bind in 0u8..16, ty in 0u8..16) {
        let info = st_info(bind, ty);
        prop_assert_eq!(st_bind(info), bind);
        prop_assert_eq!(st_type(info), ty);
    }

    #[test]
    fn reloc32_info_round_trips(sym in 0u32..0x0100_0000, ty in 0u32..256) {
        let info = r32_info(sym, ty);
        prop_assert_eq!(r32_sym(info), sym);
        prop_assert_eq!(r32_type(info), ty);
    }

    #[test]
    fn reloc64_info_round_trips(sym: u32, ty: u32) {
        let info = r64_info(sym, ty);
        prop_assert_eq!(r64_sym(info), sym);
        prop_assert_eq!(r64_type(info), ty);
    }
}
