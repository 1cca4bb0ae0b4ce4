//! Label synthesis for the 6502 disassembler
//!
//! Every label-eligible operand is looked up in an ordered list of address-range
//! [`LabelDefinition`]s. The first range containing the address names it, e.g.
//! `vic_reg_003`. Labels landing in the `code` area are aligned to the decoded
//! instruction at or up to two bytes before the address, so the listing can write
//! `name+1` when a program patches its own operand.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::disassembler::Instruction;

/// Area name whose labels are aligned to instruction boundaries.
pub const CODE_AREA: &str = "code";

/// Number of label categories (`area_type` 0-19).
pub const LABEL_CATEGORIES: u8 = 20;

/// Label categories printed by the label list (0 through 4).
pub const LISTED_CATEGORIES: u8 = 5;

/// An externally supplied address range that names the labels inside it.
///
/// Deserializes from the JSON label file format:
///
/// ```json
/// {"from": 53248, "to": 53294, "area": "vic", "area_type": 2, "short": "reg", "comment": "VIC-II"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDefinition {
    /// First address of the range (inclusive).
    pub from: u16,

    /// Last address of the range (inclusive).
    pub to: u16,

    /// Area name, the first part of every label name.
    pub area: String,

    /// Category id (0-19). Each category numbers its labels independently.
    pub area_type: u8,

    /// Optional infix placed between area and counter.
    #[serde(default)]
    pub short: String,

    /// Human comment copied onto every label created from this range.
    #[serde(default)]
    pub comment: String,
}

impl LabelDefinition {
    pub fn new(from: u16, to: u16, area: &str, area_type: u8, short: &str, comment: &str) -> Self {
        Self {
            from,
            to,
            area: area.to_string(),
            area_type,
            short: short.to_string(),
            comment: comment.to_string(),
        }
    }

    /// The range covering the program being disassembled.
    ///
    /// Returns `None` for an empty program. The range is clipped at `$FFFF`.
    pub fn user_program(start_address: u16, length: usize) -> Option<Self> {
        if length == 0 {
            return None;
        }
        let last = (start_address as usize + length - 1).min(u16::MAX as usize) as u16;
        Some(Self::new(start_address, last, CODE_AREA, 0, "", "user program"))
    }

    pub fn contains(&self, address: u16) -> bool {
        (self.from..=self.to).contains(&address)
    }

    pub fn is_code(&self) -> bool {
        self.area == CODE_AREA
    }

    fn label_name(&self, counter: u32) -> String {
        if self.short.is_empty() {
            format!("{}_{:03}", self.area, counter)
        } else {
            format!("{}_{}_{:03}", self.area, self.short, counter)
        }
    }
}

/// A symbolic name synthesized for one target address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,

    /// Address the referencing instructions point at.
    pub address: u16,

    /// Category id of the definition that produced it.
    pub category: u8,

    /// Distance (0-2) from the instruction boundary the label is defined at to
    /// `address`. References render as `name+offset`.
    pub offset: u8,

    pub comment: String,
}

impl Label {
    /// Address of the line the label is attached to.
    pub fn position(&self) -> u16 {
        self.address.wrapping_sub(self.offset as u16)
    }
}

/// A code label whose address is not within two bytes after any decoded
/// instruction start. The label is kept with offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelWarning {
    pub address: u16,
    pub name: String,
}

impl fmt::Display for LabelWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Address ${:04x} for label \"{}\" cannot be found",
            self.address, self.name
        )
    }
}

/// Resolved labels in creation order, at most one per address.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: Vec<Label>,
    index: HashMap<u16, usize>,
    warnings: Vec<LabelWarning>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for exactly `address`, if one was created.
    pub fn get(&self, address: u16) -> Option<&Label> {
        self.index.get(&address).map(|&i| &self.labels[i])
    }

    pub fn contains(&self, address: u16) -> bool {
        self.index.contains_key(&address)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels of one category, in creation order.
    pub fn in_category(&self, category: u8) -> impl Iterator<Item = &Label> + '_ {
        self.labels.iter().filter(move |l| l.category == category)
    }

    pub fn warnings(&self) -> &[LabelWarning] {
        &self.warnings
    }

    /// Insert a label. An existing label at the same address wins.
    pub fn insert(&mut self, label: Label) -> bool {
        if self.index.contains_key(&label.address) {
            return false;
        }
        self.index.insert(label.address, self.labels.len());
        self.labels.push(label);
        true
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Create labels for every label-eligible operand.
///
/// `definitions` is scanned in order and the first range containing a target wins,
/// so callers append the [`LabelDefinition::user_program`] range last. Targets
/// outside every range get no label.
pub fn synthesize_labels(
    instructions: &[Instruction],
    definitions: &[LabelDefinition],
) -> LabelSet {
    let positions: HashSet<u16> = instructions.iter().map(|i| i.address).collect();
    let mut counters: BTreeMap<u8, u32> = BTreeMap::new();
    let mut set = LabelSet::new();

    for instr in instructions.iter().filter(|i| i.label_eligible) {
        let Some(target) = instr.target else {
            continue;
        };
        if set.contains(target) {
            continue;
        }
        let Some(definition) = definitions.iter().find(|d| d.contains(target)) else {
            continue;
        };

        let counter = counters.entry(definition.area_type).or_insert(0);
        let name = definition.label_name(*counter);
        *counter += 1;

        let offset = if definition.is_code() {
            let aligned = (0..=2u8)
                .find(|&back| positions.contains(&target.wrapping_sub(back as u16)));
            match aligned {
                Some(back) => back,
                None => {
                    let warning = LabelWarning {
                        address: target,
                        name: name.clone(),
                    };
                    warn!("{}", warning);
                    set.warnings.push(warning);
                    0
                }
            }
        } else {
            0
        };

        set.insert(Label {
            name,
            address: target,
            category: definition.area_type,
            offset,
            comment: definition.comment.clone(),
        });
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::disassemble;

    #[test]
    fn test_label_name_with_and_without_short() {
        let plain = LabelDefinition::new(0, 0xFF, "zp", 1, "", "");
        let short = LabelDefinition::new(0xD000, 0xD3FF, "vic", 2, "reg", "");
        assert_eq!(plain.label_name(0), "zp_000");
        assert_eq!(short.label_name(12), "vic_reg_012");
        assert_eq!(short.label_name(1000), "vic_reg_1000");
    }

    #[test]
    fn test_user_program_range() {
        let def = LabelDefinition::user_program(0x2000, 0x10).unwrap();
        assert_eq!((def.from, def.to), (0x2000, 0x200F));
        assert_eq!(def.area, "code");
        assert_eq!(def.comment, "user program");
        assert!(LabelDefinition::user_program(0x2000, 0).is_none());

        let clipped = LabelDefinition::user_program(0xFFF0, 0x100).unwrap();
        assert_eq!(clipped.to, 0xFFFF);
    }

    #[test]
    fn test_first_definition_wins() {
        // LDA $D020
        let instructions = disassemble(&[0xAD, 0x20, 0xD0], 0x1000);
        let definitions = vec![
            LabelDefinition::new(0xD000, 0xD3FF, "vic", 2, "", "VIC-II"),
            LabelDefinition::new(0xD020, 0xD020, "border", 3, "", "border color"),
        ];
        let labels = synthesize_labels(&instructions, &definitions);

        assert_eq!(labels.len(), 1);
        let label = labels.get(0xD020).unwrap();
        assert_eq!(label.name, "vic_000");
        assert_eq!(label.category, 2);
        assert_eq!(label.comment, "VIC-II");
    }

    #[test]
    fn test_counters_are_per_category() {
        let instructions = disassemble(
            &[
                0xA5, 0x02, // LDA $02
                0x8D, 0x20, 0xD0, // STA $D020
                0xA5, 0x03, // LDA $03
            ],
            0x1000,
        );
        let definitions = vec![
            LabelDefinition::new(0x0000, 0x00FF, "zp", 1, "", "zero page"),
            LabelDefinition::new(0xD000, 0xD3FF, "vic", 2, "", "VIC-II"),
        ];
        let labels = synthesize_labels(&instructions, &definitions);

        let names: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["zp_000", "vic_000", "zp_001"]);
    }

    #[test]
    fn test_non_code_area_is_not_aligned() {
        // JMP $D001 with no instruction anywhere near $D001
        let instructions = disassemble(&[0x4C, 0x01, 0xD0], 0x1000);
        let definitions = vec![LabelDefinition::new(0xD000, 0xD3FF, "vic", 2, "", "")];
        let labels = synthesize_labels(&instructions, &definitions);

        assert_eq!(labels.get(0xD001).unwrap().offset, 0);
        assert!(labels.warnings().is_empty());
    }

    #[test]
    fn test_insert_keeps_first() {
        let mut set = LabelSet::new();
        let first = Label {
            name: "a".to_string(),
            address: 0x10,
            category: 0,
            offset: 0,
            comment: String::new(),
        };
        let second = Label {
            name: "b".to_string(),
            ..first.clone()
        };
        assert!(set.insert(first));
        assert!(!set.insert(second));
        assert_eq!(set.get(0x10).unwrap().name, "a");
    }
}
