//! Formatting functions for disassembled instructions
//!
//! Produces the complete assembler listing: header, optional memory dump, the
//! disassembly with label definitions and annotations, and the optional label list.
//! All assembler-specific tokens come from the [`Dialect`] passed in with
//! [`RenderOptions`]; the text is returned, nothing is written anywhere.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::addressing::AddressingMode;
use crate::disassembler::labels::{Label, LabelSet, LISTED_CATEGORIES};
use crate::disassembler::Instruction;
use crate::opcodes::OpcodeCategory;
use crate::DissectError;

/// Program name printed in the listing header.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Version printed in the listing header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release date printed in the listing header.
pub const RELEASE_DATE: &str = "19.10.2026";

const HEADER_RULE: &str =
    "---------------------------------------------------------------------------";
const DIVIDER: &str = "------------------------------------";

/// Instruction field widths at which a tab is appended, checked in order.
const TAB_STOPS: [usize; 6] = [6, 10, 14, 18, 22, 26];

/// Target assembler syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// ACME cross assembler.
    #[default]
    Acme,

    /// Kick Assembler.
    KickAssembler,
}

/// Lexical tokens of a [`Dialect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectTokens {
    /// Starts a comment.
    pub comment: &'static str,

    /// Appended to a label definition.
    pub label: &'static str,

    /// Raw byte directive.
    pub byte: &'static str,
}

impl Dialect {
    pub fn tokens(self) -> DialectTokens {
        match self {
            Dialect::Acme => DialectTokens {
                comment: ";",
                label: "",
                byte: "!byte",
            },
            Dialect::KickAssembler => DialectTokens {
                comment: "//",
                label: ":",
                byte: ".byte",
            },
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Acme => "acme",
            Dialect::KickAssembler => "kickass",
        }
    }
}

impl FromStr for Dialect {
    type Err = DissectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acme" => Ok(Dialect::Acme),
            "kickass" | "kickassembler" => Ok(Dialect::KickAssembler),
            _ => Err(DissectError::UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options controlling listing output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target assembler syntax.
    pub dialect: Dialect,

    /// Include a hex dump of the input before the disassembly.
    pub show_memory_dump: bool,

    /// Append the list of synthesized labels (categories 0-4).
    pub show_label_list: bool,

    /// Append base cycle counts to each line's comment.
    pub show_cycles: bool,

    /// Print undocumented opcodes as mnemonics instead of byte directives.
    pub allow_illegal: bool,
}

/// Facts about the input printed in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    /// Name of the binary the bytes came from.
    pub name: String,

    /// Address the first byte is loaded at.
    pub load_address: u16,

    /// Number of bytes skipped at the start of the file.
    pub offset: usize,

    /// Number of bytes disassembled.
    pub length: usize,
}

/// Render the complete listing.
///
/// `bytes` is only used for the memory dump; `instructions` must come from decoding
/// the same bytes at `source.load_address`.
pub fn render(
    bytes: &[u8],
    instructions: &[Instruction],
    labels: &LabelSet,
    source: &SourceInfo,
    options: &RenderOptions,
) -> String {
    Listing {
        bytes,
        instructions,
        labels,
        source,
        options,
    }
    .to_string()
}

/// Format the mnemonic and operand of one instruction, e.g. `lda ($fb),y`.
///
/// When `label` is given, its name replaces the numeric operand, followed by
/// `+offset` when the label is defined before the referenced address.
pub fn format_instruction(instr: &Instruction, label: Option<&Label>) -> String {
    use AddressingMode::*;

    let operand = match label {
        Some(label) if label.offset > 0 => format!("{}+{}", label.name, label.offset),
        Some(label) => label.name.clone(),
        None => {
            let target = instr.target.unwrap_or(0);
            if instr.addressing_mode.has_byte_operand() {
                format!("${:02x}", target)
            } else {
                format!("${:04x}", target)
            }
        }
    };

    let mnemonic = instr.mnemonic.name();
    match instr.addressing_mode {
        Implied => mnemonic.to_string(),
        Immediate => format!("{} #{}", mnemonic, operand),
        ZeroPage | Absolute | Relative => format!("{} {}", mnemonic, operand),
        ZeroPageX | AbsoluteX => format!("{} {},x", mnemonic, operand),
        ZeroPageY | AbsoluteY => format!("{} {},y", mnemonic, operand),
        IndirectX => format!("{} ({},x)", mnemonic, operand),
        IndirectY => format!("{} ({}),y", mnemonic, operand),
        Indirect => format!("{} ({})", mnemonic, operand),
    }
}

/// Format the raw bytes of an instruction as a byte directive operand,
/// e.g. `$0b,$ff`.
pub fn format_byte_list(instr: &Instruction) -> String {
    instr
        .bytes()
        .iter()
        .map(|b| format!("${:02x}", b))
        .collect::<Vec<_>>()
        .join(",")
}

struct Listing<'a> {
    bytes: &'a [u8],
    instructions: &'a [Instruction],
    labels: &'a LabelSet,
    source: &'a SourceInfo,
    options: &'a RenderOptions,
}

impl Listing<'_> {
    fn comment(&self) -> &'static str {
        self.options.dialect.tokens().comment
    }

    fn write_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.comment();
        writeln!(
            f,
            "{} Source generated by {} v{} [{}]",
            c, PROGRAM_NAME, VERSION, RELEASE_DATE
        )?;
        writeln!(
            f,
            "{} FILENAME: {}, address: ${:04x}, offset: ${:04x}, length: ${:04x}",
            c, self.source.name, self.source.load_address, self.source.offset, self.source.length
        )?;
        writeln!(f, "{}{}", c, HEADER_RULE)?;
        writeln!(f)
    }

    fn write_memory_dump(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "memory:")?;
        writeln!(f)?;
        for (count, byte) in self.bytes.iter().enumerate() {
            if count % 16 == 0 {
                let address = self.source.load_address.wrapping_add(count as u16);
                write!(f, "${:04x} ", address)?;
            }
            if count % 8 == 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x} ", byte)?;
            if (count + 1) % 16 == 0 {
                writeln!(f)?;
            }
        }
        write!(f, "\n\n\n\n\n")
    }

    fn write_disassembly(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "disassembly:")?;
        writeln!(f)?;
        writeln!(f, "\t\t\t* = ${:04x}", self.source.load_address)?;
        writeln!(f)?;

        let mut definitions: BTreeMap<u16, Vec<&Label>> = BTreeMap::new();
        for label in self.labels {
            definitions.entry(label.position()).or_default().push(label);
        }

        for instr in self.instructions {
            if let Some(defined_here) = definitions.get(&instr.address) {
                let terminator = self.options.dialect.tokens().label;
                for label in defined_here {
                    writeln!(f, "{}{}", label.name, terminator)?;
                }
            }
            self.write_instruction(f, instr)?;
        }
        Ok(())
    }

    fn write_instruction(&self, f: &mut fmt::Formatter, instr: &Instruction) -> fmt::Result {
        let tokens = self.options.dialect.tokens();
        let label = if instr.label_eligible {
            instr.target.and_then(|target| self.labels.get(target))
        } else {
            None
        };

        let mut field = String::from("\t\t\t");
        if instr.category == OpcodeCategory::Illegal && !self.options.allow_illegal {
            field.push_str(tokens.byte);
            field.push(' ');
            field.push_str(&format_byte_list(instr));
        } else {
            field.push_str(&format_instruction(instr, label));
        }
        for stop in TAB_STOPS {
            if field.chars().count() <= stop {
                field.push('\t');
            }
        }

        let bytes = instr.bytes();
        let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        let padding = "\t".repeat(4 - bytes.len());
        write!(
            f,
            "{}{}${:04x}\t{}{}",
            field,
            tokens.comment,
            instr.address,
            hex.join(" "),
            padding
        )?;

        if self.options.show_cycles {
            let plus = if instr.page_penalty { "+" } else { "" };
            write!(f, "{}{}cycles ", instr.base_cycles, plus)?;
        }

        self.write_annotation(f, instr, label)?;
        writeln!(f)
    }

    fn write_annotation(
        &self,
        f: &mut fmt::Formatter,
        instr: &Instruction,
        label: Option<&Label>,
    ) -> fmt::Result {
        let c = self.comment();
        let target = instr.target.unwrap_or(0);
        match instr.category {
            OpcodeCategory::Subroutine => {
                write!(f, "jump to & return from")?;
                match label {
                    Some(label) => writeln!(f, " ${:04x} [{}]", target, label.comment),
                    None => writeln!(f),
                }
            }
            OpcodeCategory::Jump => {
                write!(f, "jump")?;
                match label {
                    Some(label) => writeln!(f, " to ${:04x} [{}]", target, label.comment)?,
                    None => writeln!(f)?,
                }
                writeln!(f, "{}{}", c, DIVIDER)
            }
            OpcodeCategory::Return => {
                writeln!(f)?;
                writeln!(f, "{}{}", c, DIVIDER)
            }
            OpcodeCategory::Illegal => write!(f, "illegal opcode [${:02x}]", instr.opcode),
            OpcodeCategory::Branch => {
                write!(f, "conditional branch")?;
                match label {
                    Some(label) => writeln!(f, " to ${:04x} [{}]", target, label.comment),
                    None => writeln!(f),
                }
            }
            OpcodeCategory::Load => match label {
                Some(label) => write!(f, "load from ${:04x} [{}]", target, label.comment),
                None => Ok(()),
            },
            OpcodeCategory::Store => match label {
                Some(label) => write!(f, "store at ${:04x} [{}]", target, label.comment),
                None => Ok(()),
            },
            OpcodeCategory::Normal => Ok(()),
        }
    }

    fn write_label_list(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.comment();
        write!(f, "\n\n\n\n\n")?;
        writeln!(f, "labels:")?;
        writeln!(f)?;
        for category in 0..LISTED_CATEGORIES {
            for label in self.labels.in_category(category) {
                writeln!(f, "{}\t= ${:04x}\t{}{}", label.name, label.address, c, label.comment)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_header(f)?;
        if self.options.show_memory_dump {
            self.write_memory_dump(f)?;
        }
        self.write_disassembly(f)?;
        if self.options.show_label_list {
            self.write_label_list(f)?;
        }
        Ok(())
    }
}
