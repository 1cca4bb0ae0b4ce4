//! # Addressing Modes
//!
//! This module defines the 12 addressing modes the disassembler distinguishes and the
//! static table giving each mode its instruction length and whether its operand may
//! be replaced by a symbolic label.
//!
//! Accumulator forms (`asl`, `lsr`, `rol`, `ror` without operand) are tabulated as
//! [`AddressingMode::Implied`] and render as the bare mnemonic.

/// 6502 addressing mode enumeration.
///
/// The discriminant is the mode id used to index [`MODE_TABLE`].
///
/// # Instruction Sizes
///
/// - **1 byte**: Implied
/// - **2 bytes**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, IndirectX, IndirectY
/// - **3 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect, Relative (table value;
///   branches decode as 2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, ASL
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,
}

/// Static data for one addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMetadata {
    /// Short operand-encoding name, e.g. `"abx"`.
    pub name: &'static str,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the operand may denote a memory address and can be labelled.
    pub label_eligible: bool,
}

/// Addressing-mode metadata indexed by `AddressingMode as usize`.
pub const MODE_TABLE: [ModeMetadata; 12] = [
    ModeMetadata { name: "none", size_bytes: 1, label_eligible: false },
    ModeMetadata { name: "imm", size_bytes: 2, label_eligible: false },
    ModeMetadata { name: "zp", size_bytes: 2, label_eligible: true },
    ModeMetadata { name: "zpx", size_bytes: 2, label_eligible: true },
    ModeMetadata { name: "zpy", size_bytes: 2, label_eligible: true },
    ModeMetadata { name: "izx", size_bytes: 2, label_eligible: true },
    ModeMetadata { name: "izy", size_bytes: 2, label_eligible: true },
    ModeMetadata { name: "abs", size_bytes: 3, label_eligible: true },
    ModeMetadata { name: "abx", size_bytes: 3, label_eligible: true },
    ModeMetadata { name: "aby", size_bytes: 3, label_eligible: true },
    ModeMetadata { name: "ind", size_bytes: 3, label_eligible: true },
    // Branches are stored as 3 bytes; the decoder overrides this to 2.
    ModeMetadata { name: "rel", size_bytes: 3, label_eligible: true },
];

impl AddressingMode {
    /// All modes in id order.
    pub const ALL: [AddressingMode; 12] = [
        AddressingMode::Implied,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::Relative,
    ];

    pub fn metadata(self) -> &'static ModeMetadata {
        &MODE_TABLE[self as usize]
    }

    /// Instruction size in bytes as tabulated.
    pub fn size_bytes(self) -> u8 {
        self.metadata().size_bytes
    }

    pub fn label_eligible(self) -> bool {
        self.metadata().label_eligible
    }

    /// Whether the operand is a single byte (rendered with 2 hex digits).
    pub fn has_byte_operand(self) -> bool {
        self.size_bytes() == 2 && self != AddressingMode::Relative
    }
}
