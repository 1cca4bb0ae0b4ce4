//! Fuzz target for the disassembly pipeline.
//!
//! Feeds arbitrary byte sequences, label ranges and options through decoding,
//! label synthesis and rendering to find panics and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use dis6502::{dissect, Dialect, DissectConfig, LabelDefinition, RenderOptions, SourceInfo};
use libfuzzer_sys::fuzz_target;

/// One label range
#[derive(Debug, Arbitrary)]
struct FuzzRange {
    from: u16,
    to: u16,
    code: bool,
    area_type: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
    ranges: Vec<FuzzRange>,
    kick_assembler: bool,
    dump: bool,
    label_list: bool,
    cycles: bool,
    illegals: bool,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 || input.ranges.len() > 64 {
        return;
    }

    let definitions: Vec<LabelDefinition> = input
        .ranges
        .iter()
        .map(|r| {
            let area = if r.code { "code" } else { "data" };
            LabelDefinition::new(r.from.min(r.to), r.from.max(r.to), area, r.area_type % 20, "", "")
        })
        .collect();

    let config = DissectConfig {
        source: SourceInfo {
            name: "fuzz".to_string(),
            load_address: input.start_address,
            offset: 0,
            length: input.bytes.len(),
        },
        render: RenderOptions {
            dialect: if input.kick_assembler { Dialect::KickAssembler } else { Dialect::Acme },
            show_memory_dump: input.dump,
            show_label_list: input.label_list,
            show_cycles: input.cycles,
            allow_illegal: input.illegals,
        },
    };

    let result = dissect(&input.bytes, &definitions, &config);

    // Records tile the consumed input contiguously
    let mut expected_address = input.start_address;
    let mut consumed = 0usize;
    for instr in &result.instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert!(instr.bytes().len() <= instr.size_bytes as usize);
        assert_eq!(&input.bytes[consumed..consumed + instr.bytes().len()], &instr.bytes()[..]);
        consumed += instr.bytes().len();
        expected_address = expected_address.wrapping_add(instr.size_bytes as u16);
    }
    assert_eq!(consumed, input.bytes.len());

    // At most one label per address, offsets within two bytes
    for label in result.labels.iter() {
        assert!(label.offset <= 2);
        assert_eq!(result.labels.get(label.address), Some(label));
    }
});
