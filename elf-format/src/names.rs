//! Symbolic name registry
//!
//! Two-way mapping between numeric codes and the symbolic names defined
//! across this crate, grouped by category. The forward tables are built once
//! into hash maps on first use and then shared read-only by any number of
//! concurrent callers. A code without a name is not an error; newer
//! toolchains legitimately produce codes this table has never heard of, and
//! callers are expected to display the raw value.

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::dynamic::*;
use crate::header::*;
use crate::ident::*;
use crate::machine::*;
use crate::note::*;
use crate::program::*;
use crate::reloc::*;
use crate::section::*;
use crate::symbol::*;

/// Name categories, one per enumeration family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Object file type (`ET_*`)
    ObjectType,
    /// Target architecture (`EM_*`)
    Machine,
    /// OS/ABI identification (`ELFOSABI_*`)
    OsAbi,
    /// Segment type (`PT_*`)
    SegmentType,
    /// Section type (`SHT_*`)
    SectionType,
    /// Section flag bits (`SHF_*`), looked up per bit
    SectionFlags,
    /// Symbol binding (`STB_*`)
    SymbolBinding,
    /// Symbol type (`STT_*`)
    SymbolType,
    /// i386 relocation type (`R_386_*`)
    RelocationX86,
    /// x86-64 relocation type (`R_X86_64_*`)
    RelocationX86_64,
    /// Dynamic tag (`DT_*`)
    DynamicTag,
    /// Core-dump note type (`NT_*`)
    NoteType,
}

/// Every category, in declaration order
pub const CATEGORIES: &[Category] = &[
    Category::ObjectType,
    Category::Machine,
    Category::OsAbi,
    Category::SegmentType,
    Category::SectionType,
    Category::SectionFlags,
    Category::SymbolBinding,
    Category::SymbolType,
    Category::RelocationX86,
    Category::RelocationX86_64,
    Category::DynamicTag,
    Category::NoteType,
];

static OBJECT_TYPE_NAMES: &[(u64, &str)] = &[
    (ET_NONE as u64, "ET_NONE"),
    (ET_REL as u64, "ET_REL"),
    (ET_EXEC as u64, "ET_EXEC"),
    (ET_DYN as u64, "ET_DYN"),
    (ET_CORE as u64, "ET_CORE"),
    (ET_LOOS as u64, "ET_LOOS"),
    (ET_HIOS as u64, "ET_HIOS"),
    (ET_LOPROC as u64, "ET_LOPROC"),
    (ET_HIPROC as u64, "ET_HIPROC"),
];

// Where history assigned one code twice (10, 39, 168) both names are listed
// and the first one answers forward lookups.
static MACHINE_NAMES: &[(u64, &str)] = &[
    (EM_NONE as u64, "EM_NONE"),
    (EM_M32 as u64, "EM_M32"),
    (EM_SPARC as u64, "EM_SPARC"),
    (EM_386 as u64, "EM_386"),
    (EM_68K as u64, "EM_68K"),
    (EM_88K as u64, "EM_88K"),
    (EM_486 as u64, "EM_486"),
    (EM_860 as u64, "EM_860"),
    (EM_MIPS as u64, "EM_MIPS"),
    (EM_S370 as u64, "EM_S370"),
    (EM_MIPS_RS3_LE as u64, "EM_MIPS_RS3_LE"),
    (EM_MIPS_RS4_BE as u64, "EM_MIPS_RS4_BE"),
    (EM_PARISC as u64, "EM_PARISC"),
    (EM_VPP550 as u64, "EM_VPP550"),
    (EM_SPARC32PLUS as u64, "EM_SPARC32PLUS"),
    (EM_960 as u64, "EM_960"),
    (EM_PPC as u64, "EM_PPC"),
    (EM_PPC64 as u64, "EM_PPC64"),
    (EM_S390 as u64, "EM_S390"),
    (EM_SPU as u64, "EM_SPU"),
    (EM_V800 as u64, "EM_V800"),
    (EM_FR20 as u64, "EM_FR20"),
    (EM_RH32 as u64, "EM_RH32"),
    (EM_MCORE as u64, "EM_MCORE"),
    (EM_RCE as u64, "EM_RCE"),
    (EM_ARM as u64, "EM_ARM"),
    (EM_OLD_ALPHA as u64, "EM_OLD_ALPHA"),
    (EM_SH as u64, "EM_SH"),
    (EM_SPARCV9 as u64, "EM_SPARCV9"),
    (EM_TRICORE as u64, "EM_TRICORE"),
    (EM_ARC as u64, "EM_ARC"),
    (EM_H8_300 as u64, "EM_H8_300"),
    (EM_H8_300H as u64, "EM_H8_300H"),
    (EM_H8S as u64, "EM_H8S"),
    (EM_H8_500 as u64, "EM_H8_500"),
    (EM_IA_64 as u64, "EM_IA_64"),
    (EM_MIPS_X as u64, "EM_MIPS_X"),
    (EM_COLDFIRE as u64, "EM_COLDFIRE"),
    (EM_68HC12 as u64, "EM_68HC12"),
    (EM_MMA as u64, "EM_MMA"),
    (EM_PCP as u64, "EM_PCP"),
    (EM_NCPU as u64, "EM_NCPU"),
    (EM_NDR1 as u64, "EM_NDR1"),
    (EM_STARCORE as u64, "EM_STARCORE"),
    (EM_ME16 as u64, "EM_ME16"),
    (EM_ST100 as u64, "EM_ST100"),
    (EM_TINYJ as u64, "EM_TINYJ"),
    (EM_X86_64 as u64, "EM_X86_64"),
    (EM_PDSP as u64, "EM_PDSP"),
    (EM_PDP10 as u64, "EM_PDP10"),
    (EM_PDP11 as u64, "EM_PDP11"),
    (EM_FX66 as u64, "EM_FX66"),
    (EM_ST9PLUS as u64, "EM_ST9PLUS"),
    (EM_ST7 as u64, "EM_ST7"),
    (EM_68HC16 as u64, "EM_68HC16"),
    (EM_68HC11 as u64, "EM_68HC11"),
    (EM_68HC08 as u64, "EM_68HC08"),
    (EM_68HC05 as u64, "EM_68HC05"),
    (EM_SVX as u64, "EM_SVX"),
    (EM_ST19 as u64, "EM_ST19"),
    (EM_VAX as u64, "EM_VAX"),
    (EM_CRIS as u64, "EM_CRIS"),
    (EM_JAVELIN as u64, "EM_JAVELIN"),
    (EM_FIREPATH as u64, "EM_FIREPATH"),
    (EM_ZSP as u64, "EM_ZSP"),
    (EM_MMIX as u64, "EM_MMIX"),
    (EM_HUANY as u64, "EM_HUANY"),
    (EM_PRISM as u64, "EM_PRISM"),
    (EM_AVR as u64, "EM_AVR"),
    (EM_FR30 as u64, "EM_FR30"),
    (EM_D10V as u64, "EM_D10V"),
    (EM_D30V as u64, "EM_D30V"),
    (EM_V850 as u64, "EM_V850"),
    (EM_M32R as u64, "EM_M32R"),
    (EM_MN10300 as u64, "EM_MN10300"),
    (EM_MN10200 as u64, "EM_MN10200"),
    (EM_PJ as u64, "EM_PJ"),
    (EM_OPENRISC as u64, "EM_OPENRISC"),
    (EM_ARC_A5 as u64, "EM_ARC_A5"),
    (EM_XTENSA as u64, "EM_XTENSA"),
    (EM_VIDEOCORE as u64, "EM_VIDEOCORE"),
    (EM_TMM_GPP as u64, "EM_TMM_GPP"),
    (EM_NS32K as u64, "EM_NS32K"),
    (EM_TPC as u64, "EM_TPC"),
    (EM_SNP1K as u64, "EM_SNP1K"),
    (EM_ST200 as u64, "EM_ST200"),
    (EM_IP2K as u64, "EM_IP2K"),
    (EM_MAX as u64, "EM_MAX"),
    (EM_CR as u64, "EM_CR"),
    (EM_F2MC16 as u64, "EM_F2MC16"),
    (EM_MSP430 as u64, "EM_MSP430"),
    (EM_BLACKFIN as u64, "EM_BLACKFIN"),
    (EM_SE_C33 as u64, "EM_SE_C33"),
    (EM_SEP as u64, "EM_SEP"),
    (EM_ARCA as u64, "EM_ARCA"),
    (EM_UNICORE as u64, "EM_UNICORE"),
    (EM_EXCESS as u64, "EM_EXCESS"),
    (EM_DXP as u64, "EM_DXP"),
    (EM_ALTERA_NIOS2 as u64, "EM_ALTERA_NIOS2"),
    (EM_CRX as u64, "EM_CRX"),
    (EM_XGATE as u64, "EM_XGATE"),
    (EM_C166 as u64, "EM_C166"),
    (EM_M16C as u64, "EM_M16C"),
    (EM_DSPIC30F as u64, "EM_DSPIC30F"),
    (EM_CE as u64, "EM_CE"),
    (EM_M32C as u64, "EM_M32C"),
    (EM_TSK3000 as u64, "EM_TSK3000"),
    (EM_RS08 as u64, "EM_RS08"),
    (EM_ECOG2 as u64, "EM_ECOG2"),
    (EM_SCORE as u64, "EM_SCORE"),
    (EM_DSP24 as u64, "EM_DSP24"),
    (EM_VIDEOCORE3 as u64, "EM_VIDEOCORE3"),
    (EM_LATTICEMICO32 as u64, "EM_LATTICEMICO32"),
    (EM_SE_C17 as u64, "EM_SE_C17"),
    (EM_MMDSP_PLUS as u64, "EM_MMDSP_PLUS"),
    (EM_CYPRESS_M8C as u64, "EM_CYPRESS_M8C"),
    (EM_R32C as u64, "EM_R32C"),
    (EM_TRIMEDIA as u64, "EM_TRIMEDIA"),
    (EM_QDSP6 as u64, "EM_QDSP6"),
    (EM_8051 as u64, "EM_8051"),
    (EM_STXP7X as u64, "EM_STXP7X"),
    (EM_NDS32 as u64, "EM_NDS32"),
    (EM_ECOG1 as u64, "EM_ECOG1"),
    (EM_ECOG1X as u64, "EM_ECOG1X"),
    (EM_MAXQ30 as u64, "EM_MAXQ30"),
    (EM_XIMO16 as u64, "EM_XIMO16"),
    (EM_MANIK as u64, "EM_MANIK"),
    (EM_CRAYNV2 as u64, "EM_CRAYNV2"),
    (EM_RX as u64, "EM_RX"),
    (EM_METAG as u64, "EM_METAG"),
    (EM_MCST_ELBRUS as u64, "EM_MCST_ELBRUS"),
    (EM_ECOG16 as u64, "EM_ECOG16"),
    (EM_CR16 as u64, "EM_CR16"),
    (EM_ETPU as u64, "EM_ETPU"),
    (EM_SLE9X as u64, "EM_SLE9X"),
    (EM_L1OM as u64, "EM_L1OM"),
    (EM_K1OM as u64, "EM_K1OM"),
    (EM_AARCH64 as u64, "EM_AARCH64"),
    (EM_FRV as u64, "EM_FRV"),
    (EM_AVR32 as u64, "EM_AVR32"),
    (EM_ALPHA as u64, "EM_ALPHA"),
    (EM_CYGNUS_M32R as u64, "EM_CYGNUS_M32R"),
    (EM_CYGNUS_V850 as u64, "EM_CYGNUS_V850"),
    (EM_S390_OLD as u64, "EM_S390_OLD"),
    (EM_CYGNUS_MN10300 as u64, "EM_CYGNUS_MN10300"),
];

static OSABI_NAMES: &[(u64, &str)] = &[
    (ELFOSABI_NONE as u64, "ELFOSABI_NONE"),
    (ELFOSABI_HPUX as u64, "ELFOSABI_HPUX"),
    (ELFOSABI_NETBSD as u64, "ELFOSABI_NETBSD"),
    (ELFOSABI_LINUX as u64, "ELFOSABI_LINUX"),
    (ELFOSABI_HURD as u64, "ELFOSABI_HURD"),
    (ELFOSABI_86OPEN as u64, "ELFOSABI_86OPEN"),
    (ELFOSABI_SOLARIS as u64, "ELFOSABI_SOLARIS"),
    (ELFOSABI_MONTEREY as u64, "ELFOSABI_MONTEREY"),
    (ELFOSABI_IRIX as u64, "ELFOSABI_IRIX"),
    (ELFOSABI_FREEBSD as u64, "ELFOSABI_FREEBSD"),
    (ELFOSABI_TRU64 as u64, "ELFOSABI_TRU64"),
    (ELFOSABI_MODESTO as u64, "ELFOSABI_MODESTO"),
    (ELFOSABI_OPENBSD as u64, "ELFOSABI_OPENBSD"),
    (ELFOSABI_ARM as u64, "ELFOSABI_ARM"),
    (ELFOSABI_STANDALONE as u64, "ELFOSABI_STANDALONE"),
];

static SEGMENT_TYPE_NAMES: &[(u64, &str)] = &[
    (PT_NULL as u64, "PT_NULL"),
    (PT_LOAD as u64, "PT_LOAD"),
    (PT_DYNAMIC as u64, "PT_DYNAMIC"),
    (PT_INTERP as u64, "PT_INTERP"),
    (PT_NOTE as u64, "PT_NOTE"),
    (PT_SHLIB as u64, "PT_SHLIB"),
    (PT_PHDR as u64, "PT_PHDR"),
    (PT_TLS as u64, "PT_TLS"),
    (PT_LOOS as u64, "PT_LOOS"),
    (PT_GNU_EH_FRAME as u64, "PT_GNU_EH_FRAME"),
    (PT_GNU_STACK as u64, "PT_GNU_STACK"),
    (PT_GNU_RELRO as u64, "PT_GNU_RELRO"),
    (PT_PAX_FLAGS as u64, "PT_PAX_FLAGS"),
    (PT_OPENBSD_RANDOMIZE as u64, "PT_OPENBSD_RANDOMIZE"),
    (PT_OPENBSD_WXNEEDED as u64, "PT_OPENBSD_WXNEEDED"),
    (PT_OPENBSD_BOOTDATA as u64, "PT_OPENBSD_BOOTDATA"),
    (PT_HIOS as u64, "PT_HIOS"),
    (PT_LOPROC as u64, "PT_LOPROC"),
    (PT_HIPROC as u64, "PT_HIPROC"),
];

static SECTION_TYPE_NAMES: &[(u64, &str)] = &[
    (SHT_NULL as u64, "SHT_NULL"),
    (SHT_PROGBITS as u64, "SHT_PROGBITS"),
    (SHT_SYMTAB as u64, "SHT_SYMTAB"),
    (SHT_STRTAB as u64, "SHT_STRTAB"),
    (SHT_RELA as u64, "SHT_RELA"),
    (SHT_HASH as u64, "SHT_HASH"),
    (SHT_DYNAMIC as u64, "SHT_DYNAMIC"),
    (SHT_NOTE as u64, "SHT_NOTE"),
    (SHT_NOBITS as u64, "SHT_NOBITS"),
    (SHT_REL as u64, "SHT_REL"),
    (SHT_SHLIB as u64, "SHT_SHLIB"),
    (SHT_DYNSYM as u64, "SHT_DYNSYM"),
    (SHT_INIT_ARRAY as u64, "SHT_INIT_ARRAY"),
    (SHT_FINI_ARRAY as u64, "SHT_FINI_ARRAY"),
    (SHT_PREINIT_ARRAY as u64, "SHT_PREINIT_ARRAY"),
    (SHT_GNU_HASH as u64, "SHT_GNU_HASH"),
    (SHT_GNU_VERDEF as u64, "SHT_GNU_VERDEF"),
    (SHT_GNU_VERNEED as u64, "SHT_GNU_VERNEED"),
    (SHT_GNU_VERSYM as u64, "SHT_GNU_VERSYM"),
    (SHT_LOPROC as u64, "SHT_LOPROC"),
    (SHT_HIPROC as u64, "SHT_HIPROC"),
    (SHT_LOUSER as u64, "SHT_LOUSER"),
    (SHT_HIUSER as u64, "SHT_HIUSER"),
];

static SECTION_FLAG_NAMES: &[(u64, &str)] = &[
    (SHF_WRITE, "SHF_WRITE"),
    (SHF_ALLOC, "SHF_ALLOC"),
    (SHF_EXECINSTR, "SHF_EXECINSTR"),
    (SHF_MERGE, "SHF_MERGE"),
    (SHF_STRINGS, "SHF_STRINGS"),
    (SHF_INFO_LINK, "SHF_INFO_LINK"),
    (SHF_LINK_ORDER, "SHF_LINK_ORDER"),
    (SHF_OS_NONCONFORMING, "SHF_OS_NONCONFORMING"),
    (SHF_GROUP, "SHF_GROUP"),
    (SHF_TLS, "SHF_TLS"),
    (SHF_COMPRESSED, "SHF_COMPRESSED"),
    (SHF_RELA_LIVEPATCH, "SHF_RELA_LIVEPATCH"),
    (SHF_RO_AFTER_INIT, "SHF_RO_AFTER_INIT"),
];

static SYMBOL_BINDING_NAMES: &[(u64, &str)] = &[
    (STB_LOCAL as u64, "STB_LOCAL"),
    (STB_GLOBAL as u64, "STB_GLOBAL"),
    (STB_WEAK as u64, "STB_WEAK"),
    (STB_GNU_UNIQUE as u64, "STB_GNU_UNIQUE"),
];

static SYMBOL_TYPE_NAMES: &[(u64, &str)] = &[
    (STT_NOTYPE as u64, "STT_NOTYPE"),
    (STT_OBJECT as u64, "STT_OBJECT"),
    (STT_FUNC as u64, "STT_FUNC"),
    (STT_SECTION as u64, "STT_SECTION"),
    (STT_FILE as u64, "STT_FILE"),
    (STT_COMMON as u64, "STT_COMMON"),
    (STT_TLS as u64, "STT_TLS"),
    (STT_GNU_IFUNC as u64, "STT_GNU_IFUNC"),
];

static RELOC_X86_NAMES: &[(u64, &str)] = &[
    (R_386_NONE as u64, "R_386_NONE"),
    (R_386_32 as u64, "R_386_32"),
    (R_386_PC32 as u64, "R_386_PC32"),
    (R_386_GOT32 as u64, "R_386_GOT32"),
    (R_386_PLT32 as u64, "R_386_PLT32"),
    (R_386_COPY as u64, "R_386_COPY"),
    (R_386_GLOB_DAT as u64, "R_386_GLOB_DAT"),
    (R_386_JMP_SLOT as u64, "R_386_JMP_SLOT"),
    (R_386_RELATIVE as u64, "R_386_RELATIVE"),
    (R_386_GOTOFF as u64, "R_386_GOTOFF"),
    (R_386_GOTPC as u64, "R_386_GOTPC"),
];

static RELOC_X86_64_NAMES: &[(u64, &str)] = &[
    (R_X86_64_NONE as u64, "R_X86_64_NONE"),
    (R_X86_64_64 as u64, "R_X86_64_64"),
    (R_X86_64_PC32 as u64, "R_X86_64_PC32"),
    (R_X86_64_GOT32 as u64, "R_X86_64_GOT32"),
    (R_X86_64_PLT32 as u64, "R_X86_64_PLT32"),
    (R_X86_64_COPY as u64, "R_X86_64_COPY"),
    (R_X86_64_GLOB_DAT as u64, "R_X86_64_GLOB_DAT"),
    (R_X86_64_JUMP_SLOT as u64, "R_X86_64_JUMP_SLOT"),
    (R_X86_64_RELATIVE as u64, "R_X86_64_RELATIVE"),
    (R_X86_64_GOTPCREL as u64, "R_X86_64_GOTPCREL"),
    (R_X86_64_32 as u64, "R_X86_64_32"),
    (R_X86_64_32S as u64, "R_X86_64_32S"),
    (R_X86_64_16 as u64, "R_X86_64_16"),
    (R_X86_64_PC16 as u64, "R_X86_64_PC16"),
    (R_X86_64_8 as u64, "R_X86_64_8"),
    (R_X86_64_PC8 as u64, "R_X86_64_PC8"),
];

static DYNAMIC_TAG_NAMES: &[(u64, &str)] = &[
    (DT_NULL as u64, "DT_NULL"),
    (DT_NEEDED as u64, "DT_NEEDED"),
    (DT_PLTRELSZ as u64, "DT_PLTRELSZ"),
    (DT_PLTGOT as u64, "DT_PLTGOT"),
    (DT_HASH as u64, "DT_HASH"),
    (DT_STRTAB as u64, "DT_STRTAB"),
    (DT_SYMTAB as u64, "DT_SYMTAB"),
    (DT_RELA as u64, "DT_RELA"),
    (DT_RELASZ as u64, "DT_RELASZ"),
    (DT_RELAENT as u64, "DT_RELAENT"),
    (DT_STRSZ as u64, "DT_STRSZ"),
    (DT_SYMENT as u64, "DT_SYMENT"),
    (DT_INIT as u64, "DT_INIT"),
    (DT_FINI as u64, "DT_FINI"),
    (DT_SONAME as u64, "DT_SONAME"),
    (DT_RPATH as u64, "DT_RPATH"),
    (DT_SYMBOLIC as u64, "DT_SYMBOLIC"),
    (DT_REL as u64, "DT_REL"),
    (DT_RELSZ as u64, "DT_RELSZ"),
    (DT_RELENT as u64, "DT_RELENT"),
    (DT_PLTREL as u64, "DT_PLTREL"),
    (DT_DEBUG as u64, "DT_DEBUG"),
    (DT_TEXTREL as u64, "DT_TEXTREL"),
    (DT_JMPREL as u64, "DT_JMPREL"),
    (DT_BIND_NOW as u64, "DT_BIND_NOW"),
    (DT_INIT_ARRAY as u64, "DT_INIT_ARRAY"),
    (DT_FINI_ARRAY as u64, "DT_FINI_ARRAY"),
    (DT_INIT_ARRAYSZ as u64, "DT_INIT_ARRAYSZ"),
    (DT_FINI_ARRAYSZ as u64, "DT_FINI_ARRAYSZ"),
    (DT_RUNPATH as u64, "DT_RUNPATH"),
    (DT_FLAGS as u64, "DT_FLAGS"),
    (DT_ENCODING as u64, "DT_ENCODING"),
    (OLD_DT_LOOS as u64, "OLD_DT_LOOS"),
    (DT_LOOS as u64, "DT_LOOS"),
    (DT_HIOS as u64, "DT_HIOS"),
    (DT_VALRNGLO as u64, "DT_VALRNGLO"),
    (DT_VALRNGHI as u64, "DT_VALRNGHI"),
    (DT_ADDRRNGLO as u64, "DT_ADDRRNGLO"),
    (DT_ADDRRNGHI as u64, "DT_ADDRRNGHI"),
    (DT_VERSYM as u64, "DT_VERSYM"),
    (DT_RELACOUNT as u64, "DT_RELACOUNT"),
    (DT_RELCOUNT as u64, "DT_RELCOUNT"),
    (DT_FLAGS_1 as u64, "DT_FLAGS_1"),
    (DT_VERDEF as u64, "DT_VERDEF"),
    (DT_VERDEFNUM as u64, "DT_VERDEFNUM"),
    (DT_VERNEED as u64, "DT_VERNEED"),
    (DT_VERNEEDNUM as u64, "DT_VERNEEDNUM"),
    (OLD_DT_HIOS as u64, "OLD_DT_HIOS"),
    (DT_LOPROC as u64, "DT_LOPROC"),
    (DT_HIPROC as u64, "DT_HIPROC"),
];

static NOTE_TYPE_NAMES: &[(u64, &str)] = &[
    (NT_PRSTATUS as u64, "NT_PRSTATUS"),
    (NT_PRFPREG as u64, "NT_PRFPREG"),
    (NT_PRPSINFO as u64, "NT_PRPSINFO"),
    (NT_TASKSTRUCT as u64, "NT_TASKSTRUCT"),
    (NT_AUXV as u64, "NT_AUXV"),
    (NT_SIGINFO as u64, "NT_SIGINFO"),
    (NT_FILE as u64, "NT_FILE"),
    (NT_PRXFPREG as u64, "NT_PRXFPREG"),
    (NT_PPC_VMX as u64, "NT_PPC_VMX"),
    (NT_PPC_SPE as u64, "NT_PPC_SPE"),
    (NT_PPC_VSX as u64, "NT_PPC_VSX"),
    (NT_PPC_TAR as u64, "NT_PPC_TAR"),
    (NT_PPC_PPR as u64, "NT_PPC_PPR"),
    (NT_PPC_DSCR as u64, "NT_PPC_DSCR"),
    (NT_PPC_EBB as u64, "NT_PPC_EBB"),
    (NT_PPC_PMU as u64, "NT_PPC_PMU"),
    (NT_PPC_TM_CGPR as u64, "NT_PPC_TM_CGPR"),
    (NT_PPC_TM_CFPR as u64, "NT_PPC_TM_CFPR"),
    (NT_PPC_TM_CVMX as u64, "NT_PPC_TM_CVMX"),
    (NT_PPC_TM_CVSX as u64, "NT_PPC_TM_CVSX"),
    (NT_PPC_TM_SPR as u64, "NT_PPC_TM_SPR"),
    (NT_PPC_TM_CTAR as u64, "NT_PPC_TM_CTAR"),
    (NT_PPC_TM_CPPR as u64, "NT_PPC_TM_CPPR"),
    (NT_PPC_TM_CDSCR as u64, "NT_PPC_TM_CDSCR"),
    (NT_PPC_PKEY as u64, "NT_PPC_PKEY"),
    (NT_386_TLS as u64, "NT_386_TLS"),
    (NT_386_IOPERM as u64, "NT_386_IOPERM"),
    (NT_X86_XSTATE as u64, "NT_X86_XSTATE"),
    (NT_S390_HIGH_GPRS as u64, "NT_S390_HIGH_GPRS"),
    (NT_S390_TIMER as u64, "NT_S390_TIMER"),
    (NT_S390_TODCMP as u64, "NT_S390_TODCMP"),
    (NT_S390_TODPREG as u64, "NT_S390_TODPREG"),
    (NT_S390_CTRS as u64, "NT_S390_CTRS"),
    (NT_S390_PREFIX as u64, "NT_S390_PREFIX"),
    (NT_S390_LAST_BREAK as u64, "NT_S390_LAST_BREAK"),
    (NT_S390_SYSTEM_CALL as u64, "NT_S390_SYSTEM_CALL"),
    (NT_S390_TDB as u64, "NT_S390_TDB"),
    (NT_S390_VXRS_LOW as u64, "NT_S390_VXRS_LOW"),
    (NT_S390_VXRS_HIGH as u64, "NT_S390_VXRS_HIGH"),
    (NT_S390_GS_CB as u64, "NT_S390_GS_CB"),
    (NT_S390_GS_BC as u64, "NT_S390_GS_BC"),
    (NT_S390_RI_CB as u64, "NT_S390_RI_CB"),
    (NT_ARM_VFP as u64, "NT_ARM_VFP"),
    (NT_ARM_TLS as u64, "NT_ARM_TLS"),
    (NT_ARM_HW_BREAK as u64, "NT_ARM_HW_BREAK"),
    (NT_ARM_HW_WATCH as u64, "NT_ARM_HW_WATCH"),
    (NT_ARM_SYSTEM_CALL as u64, "NT_ARM_SYSTEM_CALL"),
    (NT_ARM_SVE as u64, "NT_ARM_SVE"),
    (NT_ARM_PAC_MASK as u64, "NT_ARM_PAC_MASK"),
    (NT_ARM_PACA_KEYS as u64, "NT_ARM_PACA_KEYS"),
    (NT_ARM_PACG_KEYS as u64, "NT_ARM_PACG_KEYS"),
    (NT_ARC_V2 as u64, "NT_ARC_V2"),
    (NT_VMCOREDD as u64, "NT_VMCOREDD"),
    (NT_MIPS_DSP as u64, "NT_MIPS_DSP"),
    (NT_MIPS_FP_MODE as u64, "NT_MIPS_FP_MODE"),
    (NT_MIPS_MSA as u64, "NT_MIPS_MSA"),
];

/// The raw code/name pairs behind one category, in definition order
///
/// Exposed so callers can enumerate a whole family (readelf-style listings,
/// exhaustive tests). Duplicated codes appear once per name.
pub fn entries(category: Category) -> &'static [(u64, &'static str)] {
    match category {
        Category::ObjectType => OBJECT_TYPE_NAMES,
        Category::Machine => MACHINE_NAMES,
        Category::OsAbi => OSABI_NAMES,
        Category::SegmentType => SEGMENT_TYPE_NAMES,
        Category::SectionType => SECTION_TYPE_NAMES,
        Category::SectionFlags => SECTION_FLAG_NAMES,
        Category::SymbolBinding => SYMBOL_BINDING_NAMES,
        Category::SymbolType => SYMBOL_TYPE_NAMES,
        Category::RelocationX86 => RELOC_X86_NAMES,
        Category::RelocationX86_64 => RELOC_X86_64_NAMES,
        Category::DynamicTag => DYNAMIC_TAG_NAMES,
        Category::NoteType => NOTE_TYPE_NAMES,
    }
}

lazy_static! {
    /// Forward lookup, built once and shared read-only afterwards. For a
    /// code listed under two names the first listing wins.
    static ref NAMES_BY_CODE: HashMap<(Category, u64), &'static str> = {
        let mut map = HashMap::new();
        for &category in CATEGORIES {
            for &(code, name) in entries(category) {
                map.entry((category, code)).or_insert(name);
            }
        }
        map
    };
}

/// Symbolic name for a code, `None` when the table has no entry
pub fn name_for(category: Category, code: u64) -> Option<&'static str> {
    NAMES_BY_CODE.get(&(category, code)).copied()
}

/// Numeric code for a symbolic name, `None` when the name is unknown
pub fn code_for(category: Category, name: &str) -> Option<u64> {
    entries(category)
        .iter()
        .find(|&&(_, entry)| entry == name)
        .map(|&(code, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_defined_code() {
        for &category in CATEGORIES {
            for &(code, _) in entries(category) {
                let name = name_for(category, code).unwrap();
                assert_eq!(code_for(category, name), Some(code));
            }
        }
    }

    #[test]
    fn test_unknown_code_is_not_an_error() {
        assert_eq!(name_for(Category::Machine, 0xffff), None);
        assert_eq!(name_for(Category::SegmentType, 0x12345678), None);
        assert_eq!(code_for(Category::Machine, "EM_DOES_NOT_EXIST"), None);
    }

    #[test]
    fn test_machine_code_10_resolves_to_both_names() {
        assert_eq!(code_for(Category::Machine, "EM_MIPS_RS3_LE"), Some(10));
        assert_eq!(code_for(Category::Machine, "EM_MIPS_RS4_BE"), Some(10));
        // Forward lookup answers with the first listing.
        assert_eq!(name_for(Category::Machine, 10), Some("EM_MIPS_RS3_LE"));
    }

    #[test]
    fn test_section_flag_bits_resolve_per_bit() {
        assert_eq!(
            name_for(Category::SectionFlags, SHF_ALLOC),
            Some("SHF_ALLOC")
        );
        assert_eq!(name_for(Category::SectionFlags, SHF_TLS), Some("SHF_TLS"));
        // A combined bitset is not itself a named value.
        assert_eq!(name_for(Category::SectionFlags, SHF_ALLOC | SHF_TLS), None);
    }

    #[test]
    fn test_per_machine_relocation_tables_are_distinct() {
        assert_eq!(
            name_for(Category::RelocationX86, 7),
            Some("R_386_JMP_SLOT")
        );
        assert_eq!(
            name_for(Category::RelocationX86_64, 7),
            Some("R_X86_64_JUMP_SLOT")
        );
    }
}
