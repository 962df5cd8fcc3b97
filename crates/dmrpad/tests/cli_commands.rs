use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "dmrpad-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn dmrpad(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dmrpad"))
        .args(args)
        .output()
        .expect("dmrpad should run")
}

#[test]
fn fragment_emits_whole_blocks() {
    let output = dmrpad(&[
        "fragment",
        "--rate",
        "3/4",
        "--data",
        "hello dmr",
        "--format",
        "raw",
    ]);

    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 18);
    assert_eq!(&output.stdout[..9], b"hello dmr");
}

#[test]
fn fragment_of_empty_payload_is_one_blank_block() {
    let output = dmrpad(&["fragment", "--rate", "3/4", "--data", "", "--format", "raw"]);

    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 18);
    assert!(output.stdout.iter().all(|&b| b == 0));
}

#[test]
fn combine_reassembles_fragmented_payload() {
    let dir = unique_temp_dir("roundtrip");
    let wire_path = dir.join("blocks.bin");

    let fragmented = dmrpad(&[
        "fragment",
        "--rate",
        "1/2",
        "--confirmed",
        "--data",
        "packet data call",
        "--format",
        "raw",
    ]);
    assert!(fragmented.status.success());
    std::fs::write(&wire_path, &fragmented.stdout).unwrap();

    let combined = dmrpad(&[
        "combine",
        "--rate",
        "1/2",
        "--confirmed",
        "--file",
        wire_path.to_str().unwrap(),
        "--format",
        "raw",
    ]);
    assert!(combined.status.success());
    assert_eq!(&combined.stdout[..16], b"packet data call");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn combine_reads_stdin() {
    let fragmented = dmrpad(&[
        "fragment",
        "--rate",
        "3/4",
        "--data",
        "via stdin",
        "--format",
        "raw",
    ]);
    assert!(fragmented.status.success());

    let mut child = Command::new(env!("CARGO_BIN_EXE_dmrpad"))
        .args(["combine", "--rate", "3/4", "--format", "raw"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("combine should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(&fragmented.stdout)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(&output.stdout[..9], b"via stdin");
}

#[test]
fn tampered_wire_exits_data_invalid() {
    let dir = unique_temp_dir("tampered");
    let wire_path = dir.join("blocks.bin");

    let fragmented = dmrpad(&[
        "fragment",
        "--rate",
        "3/4",
        "--data",
        "do not touch",
        "--format",
        "raw",
    ]);
    assert!(fragmented.status.success());

    let mut wire = fragmented.stdout.clone();
    wire[3] ^= 0x40;
    std::fs::write(&wire_path, &wire).unwrap();

    let combined = dmrpad(&[
        "combine",
        "--rate",
        "3/4",
        "--file",
        wire_path.to_str().unwrap(),
    ]);
    assert_eq!(combined.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn text_message_roundtrip() {
    let dir = unique_temp_dir("text");
    let wire_path = dir.join("blocks.bin");

    let fragmented = dmrpad(&[
        "fragment",
        "--text",
        "73 de K7ABC",
        "--text-format",
        "utf-8",
        "--null-terminated",
        "--format",
        "raw",
    ]);
    assert!(fragmented.status.success());
    std::fs::write(&wire_path, &fragmented.stdout).unwrap();

    let combined = dmrpad(&[
        "combine",
        "--file",
        wire_path.to_str().unwrap(),
        "--text-format",
        "utf-8",
        "--null-terminated",
        "--format",
        "raw",
    ]);
    assert!(combined.status.success());
    assert_eq!(combined.stdout, b"73 de K7ABC");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn inspect_shows_confirmed_block_fields() {
    let fragmented = dmrpad(&[
        "fragment",
        "--rate",
        "1/2",
        "--confirmed",
        "--data",
        "ping",
        "--format",
        "raw",
    ]);
    assert!(fragmented.status.success());
    assert_eq!(fragmented.stdout.len(), 12);

    let encoded = hex::encode(&fragmented.stdout);
    let inspected = dmrpad(&[
        "inspect",
        &encoded,
        "--rate",
        "1/2",
        "--confirmed",
        "--format",
        "pretty",
    ]);
    assert!(inspected.status.success());

    let stdout = String::from_utf8_lossy(&inspected.stdout);
    assert!(stdout.contains("serial=0"));
    assert!(stdout.contains("verified=true"));

    let unknown_format = dmrpad(&["inspect", "zz-not-hex"]);
    assert_eq!(unknown_format.status.code(), Some(64));
}

#[test]
fn version_prints_package_version() {
    let output = dmrpad(&["version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("dmrpad "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
