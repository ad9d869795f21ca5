//! ELF Format - binary layout definitions for the Executable and Linkable Format
//!
//! This crate is a static description of the ELF binary layout: the magic
//! numbers, the enumerations for machine architectures, section/segment/symbol
//! and relocation types, and the byte-exact record layouts for both the 32-bit
//! and 64-bit encodings. It performs no I/O and holds no state; a consuming
//! reader or writer maps file bytes onto these records and uses the constant
//! tables to interpret them.
//!
//! # Architecture
//!
//! The crate is organized into one module per record kind:
//!
//! - **ident**: the 16-byte identification prefix and its classification
//! - **header**: file headers and object-type constants
//! - **machine**: the `EM_*` target-architecture table
//! - **program**: program headers (segments) and permission flags
//! - **section**: section headers, type and flag tables, special indexes
//! - **symbol**: symbol table entries and the packed bind/type byte
//! - **reloc**: relocation entries and the packed symbol/type word
//! - **dynamic**: dynamic-section entries and tag constants
//! - **note**: note headers and core-dump note types
//! - **layout**: required byte count per record kind
//! - **names**: numeric code to symbolic name registry (requires `alloc`)
//!
//! # Design Principles
//!
//! - **Byte-exact**: every record is `#[repr(C)]` with the exact System V ABI
//!   field order and widths; sizes are asserted at compile time
//! - **Open enumerations**: unknown codes are never errors, they round-trip
//!   as plain integers
//! - **Classification, not policy**: malformed identification bytes are
//!   reported to the caller, who decides whether to abort or recover

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

// Core modules
pub mod ident;
pub mod header;
pub mod machine;
pub mod program;
pub mod section;
pub mod symbol;
pub mod reloc;
pub mod dynamic;
pub mod note;
pub mod layout;

// Symbolic name registry
#[cfg(feature = "alloc")]
pub mod names;

// Re-export commonly used types
pub use crate::ident::{Class, ElfIdent, Encoding, IdentError, EI_NIDENT, ELF_MAGIC};
pub use crate::layout::{record_size, RecordKind};
#[cfg(feature = "alloc")]
pub use crate::names::{code_for, name_for, Category};
