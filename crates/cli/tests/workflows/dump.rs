//! eeprom-dump end-to-end tests

use crate::common::cli::Tool;
use crate::common::fixture_bytes;
use crate::tool;
use anyhow::Result;

#[test]
fn test_dump_line_count_and_reconstruction() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data = fixture_bytes(1000, 7);
    std::fs::write(temp_dir.path().join("eeprom.bin"), &data)?;

    let result = tool!(Tool::Dump, temp_dir.path(), "eeprom.bin").assert_success()?;

    assert_eq!(result.stdout.lines().count(), 1000usize.div_ceil(16));
    assert_eq!(result.decode_dump()?, data);
    Ok(())
}

#[test]
fn test_dump_exact_multiple_of_line_width() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data = fixture_bytes(32, 3);
    std::fs::write(temp_dir.path().join("eeprom.bin"), &data)?;

    let result = tool!(Tool::Dump, temp_dir.path(), "eeprom.bin").assert_success()?;

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("00000000: "));
    assert!(lines[1].starts_with("00000010: "));
    assert_eq!(result.decode_dump()?, data);
    Ok(())
}

#[test]
fn test_dump_ascii_column() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    std::fs::write(temp_dir.path().join("eeprom.bin"), b"UCMOS\x00\x10\xffcamera 1")?;

    let result = tool!(Tool::Dump, temp_dir.path(), "eeprom.bin").assert_success()?;

    assert!(result.stdout.ends_with("UCMOS...camera 1\n"));
    Ok(())
}

#[test]
fn test_dump_empty_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    std::fs::write(temp_dir.path().join("empty.bin"), b"")?;

    let result = tool!(Tool::Dump, temp_dir.path(), "empty.bin").assert_success()?;

    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_dump_without_arguments_prints_usage() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let result = tool!(Tool::Dump, temp_dir.path()).assert_success()?;

    assert!(result.contains_stdout("usage: "));
    assert!(result.contains_stdout("eeprom-dump"));
    assert!(result.contains_stdout("<EEPROM dump>"));
    Ok(())
}

#[test]
fn test_dump_missing_file_fails() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let result = tool!(Tool::Dump, temp_dir.path(), "missing.bin").assert_failure()?;

    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("missing.bin"));
    Ok(())
}

#[test]
fn test_dump_verbose_keeps_stdout_clean() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let data = fixture_bytes(100, 11);
    std::fs::write(temp_dir.path().join("eeprom.bin"), &data)?;

    let result = tool!(Tool::Dump, temp_dir.path(), "--verbose", "eeprom.bin").assert_success()?;

    assert_eq!(result.decode_dump()?, data);
    assert!(result.stderr.contains("Dumping 100 bytes"));
    Ok(())
}
