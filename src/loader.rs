//! Input loading
//!
//! Reads the binary to disassemble and the JSON label definitions, and parses the
//! hexadecimal numbers given on the command line. Every failure here is fatal and
//! reported as a [`DissectError`] before any output is produced.

use std::fs;
use std::path::Path;

use log::info;

use crate::disassembler::labels::{LabelDefinition, LABEL_CATEGORIES};
use crate::DissectError;

/// C64 memory map compiled into the binary, used when no label file is given.
const C64_LABELS: &str = include_str!("../data/c64labels.json");

/// Parse a hexadecimal number such as `c000`, `$C000` or `0xc000`.
///
/// `field` names the argument in the error message.
pub fn parse_hex(field: &'static str, text: &str) -> Result<usize, DissectError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix('$')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    usize::from_str_radix(digits, 16).map_err(|_| DissectError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Parse a hexadecimal 16-bit address.
pub fn parse_address(field: &'static str, text: &str) -> Result<u16, DissectError> {
    let value = parse_hex(field, text)?;
    u16::try_from(value).map_err(|_| DissectError::InvalidNumber {
        field,
        value: text.to_string(),
    })
}

/// Skip `offset` bytes, then keep at most `limit` bytes (`0` keeps the rest).
pub fn slice_input(bytes: &[u8], offset: usize, limit: usize) -> &[u8] {
    let rest = bytes.get(offset..).unwrap_or(&[]);
    if limit == 0 || limit >= rest.len() {
        rest
    } else {
        &rest[..limit]
    }
}

/// Read a binary file and slice it with [`slice_input`].
pub fn read_binary(path: &Path, offset: usize, limit: usize) -> Result<Vec<u8>, DissectError> {
    info!("Opening file \"{}\" for reading...", path.display());
    let bytes = fs::read(path).map_err(|source| DissectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(slice_input(&bytes, offset, limit).to_vec())
}

/// Parse and validate label definitions from JSON text.
///
/// `origin` names the source in error messages.
pub fn parse_label_definitions(
    origin: &str,
    json: &str,
) -> Result<Vec<LabelDefinition>, DissectError> {
    let definitions: Vec<LabelDefinition> =
        serde_json::from_str(json).map_err(|source| DissectError::LabelFile {
            origin: origin.to_string(),
            source,
        })?;

    for definition in &definitions {
        if definition.area_type >= LABEL_CATEGORIES {
            return Err(DissectError::InvalidCategory {
                area: definition.area.clone(),
                area_type: definition.area_type,
            });
        }
        if definition.from > definition.to {
            return Err(DissectError::InvalidRange {
                area: definition.area.clone(),
                from: definition.from,
                to: definition.to,
            });
        }
    }

    Ok(definitions)
}

/// Read label definitions from a JSON file.
pub fn load_label_definitions(path: &Path) -> Result<Vec<LabelDefinition>, DissectError> {
    info!("Opening labels-file \"{}\" for reading...", path.display());
    let json = fs::read_to_string(path).map_err(|source| DissectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_label_definitions(&path.display().to_string(), &json)
}

/// The bundled C64 memory map.
pub fn c64_defaults() -> Result<Vec<LabelDefinition>, DissectError> {
    parse_label_definitions("<built-in c64 map>", C64_LABELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_prefixes() {
        assert_eq!(parse_hex("address", "c000").unwrap(), 0xC000);
        assert_eq!(parse_hex("address", "$C000").unwrap(), 0xC000);
        assert_eq!(parse_hex("address", "0x801").unwrap(), 0x0801);
        assert_eq!(parse_hex("limit", "10000").unwrap(), 0x10000);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        let err = parse_hex("offset", "zz").unwrap_err();
        assert!(matches!(err, DissectError::InvalidNumber { field: "offset", .. }));
        assert!(parse_hex("offset", "").is_err());
    }

    #[test]
    fn test_parse_address_range() {
        assert_eq!(parse_address("address", "ffff").unwrap(), 0xFFFF);
        assert!(parse_address("address", "10000").is_err());
    }

    #[test]
    fn test_slice_input() {
        let bytes = [1, 2, 3, 4, 5];
        assert_eq!(slice_input(&bytes, 0, 0), &[1, 2, 3, 4, 5]);
        assert_eq!(slice_input(&bytes, 2, 0), &[3, 4, 5]);
        assert_eq!(slice_input(&bytes, 1, 2), &[2, 3]);
        assert_eq!(slice_input(&bytes, 3, 10), &[4, 5]);
        assert!(slice_input(&bytes, 9, 0).is_empty());
    }

    #[test]
    fn test_parse_label_definitions_defaults() {
        let json = r#"[{"from": 1024, "to": 2023, "area": "screen", "area_type": 3, "type": "ram"}]"#;
        let definitions = parse_label_definitions("test", json).unwrap();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].from, 0x0400);
        assert_eq!(definitions[0].short, "");
        assert_eq!(definitions[0].comment, "");
    }

    #[test]
    fn test_parse_label_definitions_rejects_bad_category() {
        let json = r#"[{"from": 0, "to": 1, "area": "x", "area_type": 20}]"#;
        let err = parse_label_definitions("test", json).unwrap_err();
        assert!(matches!(err, DissectError::InvalidCategory { area_type: 20, .. }));
    }

    #[test]
    fn test_parse_label_definitions_rejects_inverted_range() {
        let json = r#"[{"from": 10, "to": 1, "area": "x", "area_type": 0}]"#;
        let err = parse_label_definitions("test", json).unwrap_err();
        assert!(matches!(err, DissectError::InvalidRange { from: 10, to: 1, .. }));
    }

    #[test]
    fn test_parse_label_definitions_rejects_malformed_json() {
        let err = parse_label_definitions("test", "[{").unwrap_err();
        assert!(matches!(err, DissectError::LabelFile { .. }));
    }

    #[test]
    fn test_c64_defaults() {
        let definitions = c64_defaults().unwrap();
        let vic = definitions.iter().find(|d| d.contains(0xD020)).unwrap();
        assert_eq!(vic.area, "vic");
        let sprite = definitions.iter().find(|d| d.contains(0x07F8)).unwrap();
        assert_eq!(sprite.short, "spr");
    }
}
