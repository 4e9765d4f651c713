use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use cryptonote_core::{classify, ContainerFormat};
use tempfile::TempDir;

const PASSWORD_ENV: &str = "CRYPTONOTE_PASSWORD";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cryptonote"))
}

/// Command with config and temp paths pointed inside `dir`.
fn command(dir: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("CRYPTONOTE_CONFIG", dir.join("config.toml"))
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("TMPDIR", dir)
        .env_remove(PASSWORD_ENV)
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cryptonote");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for cryptonote")
}

fn save(dir: &Path, path: &Path, text: &str, password: Option<&str>, format: &str) -> Output {
    let mut cmd = command(dir);
    cmd.arg("save").arg(path).args(["--format", format]);
    if let Some(password) = password {
        cmd.arg("--encrypt").env(PASSWORD_ENV, password);
    }
    run_with_stdin(cmd, text)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_encrypted_save_then_open() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("secret.txt");

    let output = save(dir.path(), &note, "meet at noon\n", Some("hunter2"), "text");
    assert!(output.status.success(), "save failed: {:?}", output);
    assert_eq!(
        classify(&std::fs::read(&note).unwrap()),
        ContainerFormat::FormatA
    );

    let output = command(dir.path())
        .args(["open"])
        .arg(&note)
        .env(PASSWORD_ENV, "hunter2")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "meet at noon\n");
}

#[test]
fn test_wrong_password_exits_with_auth_code() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("secret.txt");
    save(dir.path(), &note, "hidden", Some("right"), "binary");

    let output = command(dir.path())
        .arg("open")
        .arg(&note)
        .env(PASSWORD_ENV, "wrong")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Incorrect password"));
}

#[test]
fn test_missing_password_without_terminal_is_cancelled() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("secret.txt");
    save(dir.path(), &note, "hidden", Some("pw"), "text");

    let output = command(dir.path()).arg("open").arg(&note).output().unwrap();
    assert_eq!(output.status.code(), Some(130));
    assert!(String::from_utf8_lossy(&output.stderr).contains(PASSWORD_ENV));
}

#[test]
fn test_malformed_text_container_is_corrupted() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("broken.txt");
    std::fs::write(
        &note,
        "---CryptoNote Encrypted File (Base64)---\n!!!not base64!!!",
    )
    .unwrap();

    let output = command(dir.path())
        .arg("open")
        .arg(&note)
        .env(PASSWORD_ENV, "pw")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = command(dir.path())
        .arg("open")
        .arg(&missing)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("File not found: {}", missing.display())));
}

#[test]
fn test_piped_note_without_terminal_or_password_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("piped.txt");

    for extra in [None, Some("--no-input")] {
        let mut cmd = command(dir.path());
        cmd.arg("save").arg(&note).arg("--encrypt");
        if let Some(flag) = extra {
            cmd.arg(flag);
        }
        let output = run_with_stdin(cmd, "secret");

        assert_eq!(output.status.code(), Some(130));
        assert!(String::from_utf8_lossy(&output.stderr).contains(PASSWORD_ENV));
        assert!(!note.exists());
    }
}

#[test]
fn test_detect_reports_each_format() {
    let dir = TempDir::new().unwrap();
    let plain = dir.path().join("plain.txt");
    let text = dir.path().join("text.txt");
    let binary = dir.path().join("binary.txt");
    std::fs::write(&plain, "just words").unwrap();
    save(dir.path(), &text, "a", Some("pw"), "text");
    save(dir.path(), &binary, "b", Some("pw"), "binary");

    for (path, expected) in [
        (&plain, "plaintext"),
        (&text, "text-container"),
        (&binary, "binary-container"),
    ] {
        let output = command(dir.path())
            .args(["--quiet", "detect"])
            .arg(path)
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(stdout(&output).trim(), expected);
    }
}

#[test]
fn test_open_json_includes_format() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("todo.txt");
    save(dir.path(), &note, "milk", Some("pw"), "binary");

    let output = command(dir.path())
        .args(["open", "--json"])
        .arg(&note)
        .env(PASSWORD_ENV, "pw")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "todo.txt");
    assert_eq!(value["format"], "binary-container");
    assert_eq!(value["text"], "milk");
}

#[test]
fn test_reseal_text_container_as_binary() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("legacy.txt");
    let destination = dir.path().join("migrated.txt");
    save(dir.path(), &source, "carry me over", Some("pw"), "text");

    let output = command(dir.path())
        .args(["reseal", "--format", "binary"])
        .arg(&source)
        .arg(&destination)
        .env(PASSWORD_ENV, "pw")
        .output()
        .unwrap();
    assert!(output.status.success(), "reseal failed: {:?}", output);

    let bytes = std::fs::read(&destination).unwrap();
    assert_eq!(classify(&bytes), ContainerFormat::FormatB);
    assert_eq!(
        cryptonote_core::container::decrypt(&bytes, "pw").unwrap(),
        "carry me over"
    );
}

#[test]
fn test_plain_save_and_open() {
    let dir = TempDir::new().unwrap();
    let note = dir.path().join("plain.txt");

    let output = save(dir.path(), &note, "nothing to hide", None, "text");
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&note).unwrap(), "nothing to hide");

    let output = command(dir.path()).arg("open").arg(&note).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "nothing to hide\n");
}

#[test]
fn test_configured_format_applies_without_flag() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[codec]\nformat = \"binary\"\n",
    )
    .unwrap();
    let note = dir.path().join("secret.txt");

    let mut cmd = command(dir.path());
    cmd.arg("save")
        .arg(&note)
        .arg("--encrypt")
        .env(PASSWORD_ENV, "pw");
    let output = run_with_stdin(cmd, "configured");
    assert!(output.status.success());
    assert_eq!(
        classify(&std::fs::read(&note).unwrap()),
        ContainerFormat::FormatB
    );
}

#[test]
fn test_share_writes_to_temp_dir() {
    let dir = TempDir::new().unwrap();
    let mut cmd = command(dir.path());
    cmd.args(["share", "--encrypt"]).env(PASSWORD_ENV, "pw");
    let output = run_with_stdin(cmd, "for a friend");
    assert!(output.status.success(), "share failed: {:?}", output);

    let path = PathBuf::from(stdout(&output).trim());
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "CryptoNote_Share.txt"
    );
    assert_eq!(
        classify(&std::fs::read(&path).unwrap()),
        ContainerFormat::FormatA
    );
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    let output = command(dir.path())
        .args(["config", "--init"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dir.path().join("config.toml").exists());

    let output = command(dir.path())
        .args(["config", "--init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));

    let output = command(dir.path()).arg("config").output().unwrap();
    assert!(stdout(&output).contains("format = \"text\""));
}
