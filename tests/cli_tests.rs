//! End-to-end tests for the dis6502 command line

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;

/// LDA #$05 ; STA $D020 ; JSR $FFD2 ; RTS
const PROGRAM: [u8; 9] = [0xA9, 0x05, 0x8D, 0x20, 0xD0, 0x20, 0xD2, 0xFF, 0x60];

fn dis6502() -> Command {
    Command::cargo_bin("dis6502").unwrap()
}

fn write_program(dir: &Path, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join("test.prg");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_writes_listing_with_builtin_labels() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.a");

    dis6502()
        .arg(&input)
        .arg(&output)
        .arg("c000")
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("; Source generated by dis6502"));
    assert!(text.contains("address: $c000, offset: $0000, length: $0009"));
    assert!(text.contains("\t\t\t* = $c000\n"));
    assert!(text.contains("\t\t\tsta vic_000\t"));
    assert!(text.contains("store at $d020 [VIC-II registers]"));
    assert!(text.contains("\t\t\tjsr kernal_jmp_000\t"));
    assert!(text.contains("jump to & return from $ffd2 [KERNAL jump table]"));
}

#[test]
fn test_offset_and_limit_select_bytes() {
    let dir = tempdir().unwrap();
    let mut bytes = vec![0x01, 0x08];
    bytes.extend_from_slice(&PROGRAM);
    let input = write_program(dir.path(), &bytes);
    let output = dir.path().join("test.a");

    dis6502()
        .arg(&input)
        .arg(&output)
        .args(["$0801", "-o", "2", "-l", "5"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("address: $0801, offset: $0002, length: $0005"));
    assert!(text.contains("sta vic_000"));
    assert!(!text.contains("jsr"));
}

#[test]
fn test_kick_assembler_with_options() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.asm");

    dis6502()
        .arg(&input)
        .arg(&output)
        .args(["1000", "-t", "kickass", "-d", "-c", "--labels"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("// Source generated by dis6502"));
    assert!(text.contains("memory:\n\n$1000  a9 05 8d 20 d0 20 d2 ff  60 \n"));
    assert!(text.contains("2cycles "));
    assert!(text.contains("labels:\n\n"));
    assert!(text.contains("vic_000\t= $d020\t//VIC-II registers\n"));
}

#[test]
fn test_custom_label_file() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.a");
    let labels = dir.path().join("labels.json");
    fs::write(
        &labels,
        r#"[{"from": 53248, "to": 53294, "area": "video", "area_type": 2, "comment": "video chip"}]"#,
    )
    .unwrap();

    dis6502()
        .arg(&input)
        .arg(&output)
        .arg("c000")
        .arg("--label-file")
        .arg(&labels)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("sta video_000"));
    assert!(text.contains("\t\t\tjsr $ffd2\t"));
}

#[test]
fn test_bad_start_address_fails() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.a");

    dis6502()
        .arg(&input)
        .arg(&output)
        .arg("zz00")
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("test.a");

    dis6502()
        .arg(dir.path().join("missing.prg"))
        .arg(&output)
        .arg("c000")
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_malformed_label_file_fails() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.a");
    let labels = dir.path().join("labels.json");
    fs::write(&labels, "{ not json").unwrap();

    dis6502()
        .arg(&input)
        .arg(&output)
        .arg("c000")
        .arg("--label-file")
        .arg(&labels)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_unknown_dialect_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);

    dis6502()
        .arg(&input)
        .arg(dir.path().join("test.a"))
        .args(["c000", "-t", "ca65"])
        .assert()
        .failure();
}

#[test]
fn test_short_l_limits_byte_count() {
    let dir = tempdir().unwrap();
    let input = write_program(dir.path(), &PROGRAM);
    let output = dir.path().join("test.a");

    dis6502()
        .arg(&input)
        .arg(&output)
        .args(["c000", "-l", "2"])
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("length: $0002"));
    assert!(text.contains("\t\t\tlda #$05\t"));
    assert!(!text.contains("sta"));
}
