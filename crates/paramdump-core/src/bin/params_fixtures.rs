use std::fs;
use std::path::{Path, PathBuf};

const MAGIC: &[u8; 8] = b"\xff\xff\x00\x00\x00\x00\x00\x00";
const GROUP_TAG: u8 = 0x20;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");

    write_fixture(&root.join("empty").join("input.params"), 0, &[])?;
    write_fixture(
        &root.join("basic").join("input.params"),
        8,
        &[0x01, 0x2A, 0x07, 0x3F, 0x80, 0x00, 0x00],
    )?;
    write_fixture(
        &root.join("mixed").join("input.params"),
        25,
        &[
            0x01, 0x01, // uint8
            0x02, 0xFF, // int8
            0x03, 0x12, 0x34, // uint16
            0x04, 0xFF, 0xFE, // int16
            0x05, 0x00, 0x01, 0x02, 0x03, // uint32
            0x06, 0xFF, 0xFF, 0xFF, 0xFF, // int32
            0x07, 0x3F, 0x80, 0x00, 0x00, // float32
        ],
    )?;

    Ok(())
}

fn write_fixture(path: &Path, declared_len: u32, records: &[u8]) -> Result<(), String> {
    let mut bytes = Vec::with_capacity(MAGIC.len() + 5 + records.len());
    bytes.extend_from_slice(MAGIC);
    bytes.push(GROUP_TAG);
    bytes.extend_from_slice(&declared_len.to_be_bytes());
    bytes.extend_from_slice(records);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }
    fs::write(path, bytes).map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    println!("wrote {}", path.display());
    Ok(())
}
