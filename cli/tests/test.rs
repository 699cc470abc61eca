use std::io::Write as _;

use assert_cmd::Command;
use tempfile::NamedTempFile;

const EMPTY_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/empty.toml");

fn yard() -> Command {
    let mut cmd = Command::cargo_bin("yard").unwrap();
    cmd.env_remove("YARD_LOG")
        .args(["--color", "never", "--config", EMPTY_CONFIG]);
    cmd
}

fn file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

#[test]
fn value() {
    yard()
        .args(["--", "2", "+", "3", "*", "4"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn single_argument() {
    yard()
        .args(["--", "(2 + 3) * 4"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn precision() {
    yard()
        .args(["--precision", "3", "--", "2 / 3"])
        .assert()
        .success()
        .stdout("0.667\n");
}

#[test]
fn invalid_character() {
    let output = "\
1 │ 2 + a
  │     ^
  │ Found an invalid character 'a'

";

    yard()
        .args(["--", "2 + a"])
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn divide_by_zero() {
    let output = "\
1 │ 5 / 0
  │   ^ ^
  │ Attempted to divide by 0

";

    yard()
        .args(["--", "5 / 0"])
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn emit_postfix() {
    yard()
        .args(["--emit", "postfix", "--", "(2 + 3) * 4 - 1"])
        .assert()
        .success()
        .stdout("2 3 + 4 * 1 -\n");
}

#[test]
fn emit_tokens() {
    yard()
        .args(["-e", "tokens", "--", "1.5*(2-1)"])
        .assert()
        .success()
        .stdout("1.5 * ( 2 - 1 )\n");
}

#[test]
fn json_value() {
    yard()
        .args(["--format", "json", "--", "8 / 4 / 2"])
        .assert()
        .success()
        .stdout("{\"value\":1.0}\n");
}

#[test]
fn json_error() {
    yard()
        .args(["--format", "json", "--", "(2 + 3"])
        .assert()
        .failure()
        .stdout(
            "{\"errors\":[{\"stage\":\"syntax\",\"spans\":[{\"start\":0,\"end\":1}],\"desc\":\"Parentheses do not match\"}]}\n",
        );
}

#[test]
fn run_file() {
    let f = file("1 + 1\n\n2 * 3\n   \n8 - 3 - 2\n");
    yard()
        .arg("run")
        .arg(f.path())
        .assert()
        .success()
        .stdout("2\n6\n3\n");
}

#[test]
fn run_file_with_error() {
    let f = file("1\n2\n3 /\n4\n");
    let output = "\
1
2
3 │ 3 /
  │   ^
  │ Missing an operand

4
";

    yard()
        .arg("run")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn run_file_json_lines() {
    let f = file("1 + 1\n\n2 * 3\n");
    yard()
        .args(["-f", "json", "r"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("{\"line\":1,\"value\":2.0}\n{\"line\":3,\"value\":6.0}\n");
}

#[test]
fn check_file() {
    let f = file("1 / 0\n1 + (2\n");
    let output = "\
2 │ 1 + (2
  │     ^
  │ Parentheses do not match

";

    yard()
        .arg("check")
        .arg(f.path())
        .assert()
        .failure()
        .stdout(output);
}

#[test]
fn missing_file() {
    let out = yard()
        .args(["run", "/nonexistent/yard/input.txt"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error reading file"), "{stderr}");
}

#[test]
fn config_file() {
    let config = file("precision = 2\nemit = \"value\"\n");
    Command::cargo_bin("yard")
        .unwrap()
        .args(["--color", "never", "--config"])
        .arg(config.path())
        .args(["--", "1 / 3"])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn flags_override_config() {
    let config = file("format = \"json\"\n");
    Command::cargo_bin("yard")
        .unwrap()
        .args(["--color", "never", "--format", "pretty", "--config"])
        .arg(config.path())
        .args(["--", "1 + 2"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn invalid_config() {
    let config = file("precision = \"many\"\n");
    let out = Command::cargo_bin("yard")
        .unwrap()
        .arg("--config")
        .arg(config.path())
        .args(["--", "1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error parsing config file"), "{stderr}");
}

#[test]
fn repl() {
    let out = yard()
        .arg("interactive")
        .write_stdin("2 + 3\n\n4 *\nexit\n6\n")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Started interactive repl\n"), "{stdout}");
    assert!(stdout.contains(" >> 5\n"), "{stdout}");
    assert!(stdout.contains("Missing an operand"), "{stdout}");
    assert!(!stdout.contains("\n6\n"), "{stdout}");
}

#[test]
fn missing_expression() {
    yard().assert().failure();
}
