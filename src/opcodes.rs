//! # Opcode Metadata Tables
//!
//! Two static tables drive the decoder:
//!
//! - [`OPCODE_TABLE`]: 256 entries indexed by the opcode byte, giving the mnemonic,
//!   the addressing mode as encoded in the instruction stream, the base cycle cost
//!   and whether the opcode may take an extra cycle when an indexed access crosses a
//!   page boundary.
//! - [`MNEMONIC_TABLE`]: one entry per [`Mnemonic`], giving the lowercase mnemonic
//!   text and its [`OpcodeCategory`].
//!
//! Every byte value has an entry. The undocumented NMOS opcodes are tabulated with
//! their conventional names and the [`OpcodeCategory::Illegal`] category, so decoding
//! never has to fall back to a placeholder.
//!
//! Opcode `$EB` is listed under the documented `sbc` because it behaves identically
//! to `$E9`.

use crate::addressing::AddressingMode;

/// Behavioral class of a mnemonic, used to pick listing annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpcodeCategory {
    /// Anything without a dedicated annotation (flag, transfer and stack ops).
    Normal,

    /// `jsr`
    Subroutine,

    /// `jmp`
    Jump,

    /// `brk`, `rts`, `rti`
    Return,

    /// Undocumented NMOS opcode.
    Illegal,

    /// Conditional branch (`bcc`, `beq`, ...).
    Branch,

    /// Reads memory: loads, compares, arithmetic and `bit`.
    Load,

    /// Writes memory: stores, increments, decrements and shifts.
    Store,
}

/// Instruction mnemonic.
///
/// The discriminant is the mnemonic id used to index [`MNEMONIC_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // Undocumented
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,
    Kil,
    Anc,
    Alr,
    Arr,
    Xaa,
    Axs,
    Usbc,
    Ahx,
    Shy,
    Shx,
    Tas,
    Las,
}

impl Mnemonic {
    /// Metadata entry for this mnemonic.
    pub fn metadata(self) -> &'static MnemonicMetadata {
        &MNEMONIC_TABLE[self as usize]
    }

    /// Lowercase mnemonic text, e.g. `"lda"`.
    pub fn name(self) -> &'static str {
        self.metadata().name
    }

    pub fn category(self) -> OpcodeCategory {
        self.metadata().category
    }
}

/// Text and category of a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MnemonicMetadata {
    /// Lowercase mnemonic as written in the listing.
    pub name: &'static str,

    /// Behavioral class driving the listing annotation.
    pub category: OpcodeCategory,
}

/// Number of entries in [`MNEMONIC_TABLE`].
pub const MNEMONIC_COUNT: usize = 76;

/// Mnemonic metadata indexed by `Mnemonic as usize`.
pub const MNEMONIC_TABLE: [MnemonicMetadata; MNEMONIC_COUNT] = [
    MnemonicMetadata { name: "adc", category: OpcodeCategory::Load }, // 0
    MnemonicMetadata { name: "and", category: OpcodeCategory::Load }, // 1
    MnemonicMetadata { name: "asl", category: OpcodeCategory::Store }, // 2
    MnemonicMetadata { name: "bcc", category: OpcodeCategory::Branch }, // 3
    MnemonicMetadata { name: "bcs", category: OpcodeCategory::Branch }, // 4
    MnemonicMetadata { name: "beq", category: OpcodeCategory::Branch }, // 5
    MnemonicMetadata { name: "bit", category: OpcodeCategory::Load }, // 6
    MnemonicMetadata { name: "bmi", category: OpcodeCategory::Branch }, // 7
    MnemonicMetadata { name: "bne", category: OpcodeCategory::Branch }, // 8
    MnemonicMetadata { name: "bpl", category: OpcodeCategory::Branch }, // 9
    MnemonicMetadata { name: "brk", category: OpcodeCategory::Return }, // 10
    MnemonicMetadata { name: "bvc", category: OpcodeCategory::Branch }, // 11
    MnemonicMetadata { name: "bvs", category: OpcodeCategory::Branch }, // 12
    MnemonicMetadata { name: "clc", category: OpcodeCategory::Normal }, // 13
    MnemonicMetadata { name: "cld", category: OpcodeCategory::Normal }, // 14
    MnemonicMetadata { name: "cli", category: OpcodeCategory::Normal }, // 15
    MnemonicMetadata { name: "clv", category: OpcodeCategory::Normal }, // 16
    MnemonicMetadata { name: "cmp", category: OpcodeCategory::Load }, // 17
    MnemonicMetadata { name: "cpx", category: OpcodeCategory::Load }, // 18
    MnemonicMetadata { name: "cpy", category: OpcodeCategory::Load }, // 19
    MnemonicMetadata { name: "dec", category: OpcodeCategory::Store }, // 20
    MnemonicMetadata { name: "dex", category: OpcodeCategory::Store }, // 21
    MnemonicMetadata { name: "dey", category: OpcodeCategory::Store }, // 22
    MnemonicMetadata { name: "eor", category: OpcodeCategory::Load }, // 23
    MnemonicMetadata { name: "inc", category: OpcodeCategory::Store }, // 24
    MnemonicMetadata { name: "inx", category: OpcodeCategory::Store }, // 25
    MnemonicMetadata { name: "iny", category: OpcodeCategory::Store }, // 26
    MnemonicMetadata { name: "jmp", category: OpcodeCategory::Jump }, // 27
    MnemonicMetadata { name: "jsr", category: OpcodeCategory::Subroutine }, // 28
    MnemonicMetadata { name: "lda", category: OpcodeCategory::Load }, // 29
    MnemonicMetadata { name: "ldx", category: OpcodeCategory::Load }, // 30
    MnemonicMetadata { name: "ldy", category: OpcodeCategory::Load }, // 31
    MnemonicMetadata { name: "lsr", category: OpcodeCategory::Store }, // 32
    MnemonicMetadata { name: "nop", category: OpcodeCategory::Normal }, // 33
    MnemonicMetadata { name: "ora", category: OpcodeCategory::Load }, // 34
    MnemonicMetadata { name: "pha", category: OpcodeCategory::Normal }, // 35
    MnemonicMetadata { name: "php", category: OpcodeCategory::Normal }, // 36
    MnemonicMetadata { name: "pla", category: OpcodeCategory::Normal }, // 37
    MnemonicMetadata { name: "plp", category: OpcodeCategory::Normal }, // 38
    MnemonicMetadata { name: "rol", category: OpcodeCategory::Store }, // 39
    MnemonicMetadata { name: "ror", category: OpcodeCategory::Store }, // 40
    MnemonicMetadata { name: "rti", category: OpcodeCategory::Return }, // 41
    MnemonicMetadata { name: "rts", category: OpcodeCategory::Return }, // 42
    MnemonicMetadata { name: "sbc", category: OpcodeCategory::Load }, // 43
    MnemonicMetadata { name: "sec", category: OpcodeCategory::Normal }, // 44
    MnemonicMetadata { name: "sed", category: OpcodeCategory::Normal }, // 45
    MnemonicMetadata { name: "sei", category: OpcodeCategory::Normal }, // 46
    MnemonicMetadata { name: "sta", category: OpcodeCategory::Store }, // 47
    MnemonicMetadata { name: "stx", category: OpcodeCategory::Store }, // 48
    MnemonicMetadata { name: "sty", category: OpcodeCategory::Store }, // 49
    MnemonicMetadata { name: "tax", category: OpcodeCategory::Normal }, // 50
    MnemonicMetadata { name: "tay", category: OpcodeCategory::Normal }, // 51
    MnemonicMetadata { name: "tsx", category: OpcodeCategory::Normal }, // 52
    MnemonicMetadata { name: "txa", category: OpcodeCategory::Normal }, // 53
    MnemonicMetadata { name: "txs", category: OpcodeCategory::Normal }, // 54
    MnemonicMetadata { name: "tya", category: OpcodeCategory::Normal }, // 55
    MnemonicMetadata { name: "slo", category: OpcodeCategory::Illegal }, // 56
    MnemonicMetadata { name: "rla", category: OpcodeCategory::Illegal }, // 57
    MnemonicMetadata { name: "sre", category: OpcodeCategory::Illegal }, // 58
    MnemonicMetadata { name: "rra", category: OpcodeCategory::Illegal }, // 59
    MnemonicMetadata { name: "sax", category: OpcodeCategory::Illegal }, // 60
    MnemonicMetadata { name: "lax", category: OpcodeCategory::Illegal }, // 61
    MnemonicMetadata { name: "dcp", category: OpcodeCategory::Illegal }, // 62
    MnemonicMetadata { name: "isc", category: OpcodeCategory::Illegal }, // 63
    MnemonicMetadata { name: "kil", category: OpcodeCategory::Illegal }, // 64
    MnemonicMetadata { name: "anc", category: OpcodeCategory::Illegal }, // 65
    MnemonicMetadata { name: "alr", category: OpcodeCategory::Illegal }, // 66
    MnemonicMetadata { name: "arr", category: OpcodeCategory::Illegal }, // 67
    MnemonicMetadata { name: "xaa", category: OpcodeCategory::Illegal }, // 68
    MnemonicMetadata { name: "axs", category: OpcodeCategory::Illegal }, // 69
    MnemonicMetadata { name: "sbc", category: OpcodeCategory::Illegal }, // 70
    MnemonicMetadata { name: "ahx", category: OpcodeCategory::Illegal }, // 71
    MnemonicMetadata { name: "shy", category: OpcodeCategory::Illegal }, // 72
    MnemonicMetadata { name: "shx", category: OpcodeCategory::Illegal }, // 73
    MnemonicMetadata { name: "tas", category: OpcodeCategory::Illegal }, // 74
    MnemonicMetadata { name: "las", category: OpcodeCategory::Illegal }, // 75
];

/// Static decoding data for a single opcode byte.
///
/// # Examples
///
/// ```
/// use dis6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert!(lda.page_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Mnemonic id.
    pub mnemonic: Mnemonic,

    /// Addressing mode as encoded. Branches carry [`AddressingMode::Relative`] here;
    /// the decoder rewrites it.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost. `kil` opcodes halt the CPU and are listed with 0.
    pub base_cycles: u8,

    /// Whether one extra cycle may be taken on a page crossing (or a taken branch).
    ///
    /// This is static eligibility only, never evaluated against operand values.
    pub page_penalty: bool,
}

/// Complete 256-entry opcode table indexed by opcode byte value.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: Mnemonic::Brk,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x02 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x03 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x04
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: Mnemonic::Asl,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x07 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: Mnemonic::Php,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: Mnemonic::Asl,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x0B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Anc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x0C
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: Mnemonic::Asl,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x0F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: Mnemonic::Bpl,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0x12 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x13 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x14
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: Mnemonic::Asl,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x17 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x18
    OpcodeMetadata {
        mnemonic: Mnemonic::Clc,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x1A
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x1B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x1C
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: Mnemonic::Ora,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: Mnemonic::Asl,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x1F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Slo,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: Mnemonic::Jsr,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x22 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x23 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: Mnemonic::Bit,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: Mnemonic::Rol,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x27 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: Mnemonic::Plp,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: Mnemonic::Rol,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x2B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Anc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: Mnemonic::Bit,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: Mnemonic::Rol,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x2F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: Mnemonic::Bmi,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0x32 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x33 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x34
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: Mnemonic::Rol,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x37 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x38
    OpcodeMetadata {
        mnemonic: Mnemonic::Sec,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x3A
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x3B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x3C
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: Mnemonic::And,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: Mnemonic::Rol,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x3F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rla,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: Mnemonic::Rti,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x42 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x43 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x44
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: Mnemonic::Lsr,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x47 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: Mnemonic::Pha,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: Mnemonic::Lsr,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x4B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Alr,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: Mnemonic::Jmp,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: Mnemonic::Lsr,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x4F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: Mnemonic::Bvc,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0x52 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x53 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x54
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: Mnemonic::Lsr,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x57 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: Mnemonic::Cli,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x5A
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x5B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x5C
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: Mnemonic::Eor,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: Mnemonic::Lsr,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x5F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sre,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: Mnemonic::Rts,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x62 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x63 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x64
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: Mnemonic::Ror,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x67 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: Mnemonic::Pla,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: Mnemonic::Ror,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x6B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Arr,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: Mnemonic::Jmp,
        addressing_mode: AddressingMode::Indirect,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: Mnemonic::Ror,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x6F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: Mnemonic::Bvs,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0x72 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x73 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0x74
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: Mnemonic::Ror,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x77 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: Mnemonic::Sei,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x7A
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x7B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x7C
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: Mnemonic::Adc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: Mnemonic::Ror,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x7F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Rra,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0x80
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x82
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x83 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sax,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: Mnemonic::Sty,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: Mnemonic::Stx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x87 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sax,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: Mnemonic::Dey,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x89
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: Mnemonic::Txa,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x8B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Xaa,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: Mnemonic::Sty,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: Mnemonic::Stx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x8F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sax,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: Mnemonic::Bcc,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x92 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0x93 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Ahx,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: Mnemonic::Sty,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: Mnemonic::Stx,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x97 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Sax,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: Mnemonic::Tya,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: Mnemonic::Txs,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0x9B - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Tas,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x9C - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Shy,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: Mnemonic::Sta,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x9E - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Shx,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0x9F - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Ahx,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldy,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldx,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xA3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldy,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xA7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: Mnemonic::Tay,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: Mnemonic::Tax,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xAB - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldy,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xAF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: Mnemonic::Bcs,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0xB2 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0xB3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldy,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldx,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xB7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: Mnemonic::Clv,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: Mnemonic::Tsx,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xBB - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Las,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldy,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: Mnemonic::Lda,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: Mnemonic::Ldx,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xBF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Lax,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpy,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xC2
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xC3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpy,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: Mnemonic::Dec,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0xC7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: Mnemonic::Iny,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: Mnemonic::Dex,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xCB - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Axs,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpy,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: Mnemonic::Dec,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xCF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: Mnemonic::Bne,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0xD2 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0xD3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0xD4
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: Mnemonic::Dec,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xD7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: Mnemonic::Cld,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xDA
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xDB - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0xDC
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: Mnemonic::Cmp,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: Mnemonic::Dec,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0xDF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Dcp,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpx,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xE2
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xE3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        page_penalty: false,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: Mnemonic::Inc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0xE7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        page_penalty: false,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: Mnemonic::Inx,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xEB
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: Mnemonic::Cpx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: Mnemonic::Inc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xEF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: Mnemonic::Beq,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        page_penalty: true,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        page_penalty: true,
    },
    // 0xF2 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Kil,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 0,
        page_penalty: false,
    },
    // 0xF3 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 8,
        page_penalty: false,
    },
    // 0xF4
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        page_penalty: false,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: Mnemonic::Inc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xF7 - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        page_penalty: false,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: Mnemonic::Sed,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xFA
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::Implied,
        base_cycles: 2,
        page_penalty: false,
    },
    // 0xFB - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0xFC
    OpcodeMetadata {
        mnemonic: Mnemonic::Nop,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: Mnemonic::Sbc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        page_penalty: true,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: Mnemonic::Inc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
    // 0xFF - Undocumented
    OpcodeMetadata {
        mnemonic: Mnemonic::Isc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        page_penalty: false,
    },
];
