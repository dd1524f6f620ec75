//! CLI integration tests for access-export.
//!
//! These tests verify command-line argument parsing, help output,
//! dry-run output and exit codes for various error conditions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::Path;

/// Get a command for the access-export binary.
fn cmd() -> Command {
    Command::cargo_bin("access-export").unwrap()
}

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("export.yaml");
    std::fs::write(&path, body).unwrap();
    path
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_import_subcommand_help() {
    cmd()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--table"))
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--rename"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_run_subcommand_help() {
    cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("[default: export.yaml]"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("access-export"));
}

// =============================================================================
// Global Flags Tests
// =============================================================================

#[test]
fn test_output_json_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-json"));
}

#[test]
fn test_log_format_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("[default: text]"));
}

#[test]
fn test_verbosity_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbosity"))
        .stdout(predicate::str::contains("[default: info]"));
}

// =============================================================================
// Dry Run Tests
// =============================================================================

#[test]
fn test_import_dry_run_prints_descriptor_and_sql() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(&source, "ID,Name,Age\n1,Ada,36\n").unwrap();

    cmd()
        .args(["import", "--database", "people.accdb", "--table", "People"])
        .arg("--source")
        .arg(&source)
        .args(["--type", "ID=primary", "--type", "Age=long", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[people.csv]"))
        .stdout(predicate::str::contains("ColNameHeader=True"))
        .stdout(predicate::str::contains("CharacterSet=65001"))
        .stdout(predicate::str::contains("Format=CSVDelimited"))
        .stdout(predicate::str::contains("Col3=\"Age\" Long"))
        .stdout(predicate::str::contains(
            "CREATE TABLE `People` (`ID` AUTOINCREMENT PRIMARY KEY, `Name` TEXT, `Age` LONG);",
        ))
        .stdout(predicate::str::contains(
            "INSERT INTO `People` (`Name`, `Age`) SELECT `Name`, `Age` FROM [TEXT;HDR=YES;FMT=CSVDelimited;",
        ));

    // Dry runs write nothing.
    assert!(!dir.path().join("schema.ini").exists());
    assert!(!Path::new("people.accdb").exists());
}

#[test]
fn test_import_dry_run_append_and_rename() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("orders.txt");
    std::fs::write(&source, "OrderId\tTotal\tNote\n1\t9.99\tx\n").unwrap();

    cmd()
        .args(["import", "--database", "orders.accdb", "--table", "Orders"])
        .arg("--source")
        .arg(&source)
        .args(["--delimiter", "\\t", "--append", "--dry-run"])
        .args(["--rename", "OrderId=Id", "--rename", "Total=Amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format=TabDelimited"))
        .stdout(predicate::str::contains("CREATE TABLE").not())
        .stdout(predicate::str::contains(
            "INSERT INTO `Orders` (`Id`, `Amount`) SELECT `OrderId`, `Total`",
        ));
}

#[test]
fn test_import_dry_run_decodes_header_in_declared_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("clients.txt");
    std::fs::write(&source, b"Nom;Pr\xe9nom\r\nDupont;Andr\xe9\r\n").unwrap();

    cmd()
        .args(["import", "--database", "clients.accdb", "--table", "Clients"])
        .arg("--source")
        .arg(&source)
        .args(["--delimiter", ";", "--encoding", "WINDOWS-1252", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CharacterSet=1252"))
        .stdout(predicate::str::contains("Col2=\"Pr\u{e9}nom\" Text"))
        .stdout(predicate::str::contains(
            "CREATE TABLE `Clients` (`Nom` TEXT, `Pr\u{e9}nom` TEXT);",
        ));
}

#[test]
fn test_import_dry_run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(&source, "Name\nAda\n").unwrap();

    cmd()
        .args(["--output-json", "import", "--database", "p.accdb", "--table", "People"])
        .arg("--source")
        .arg(&source)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"insert_statement\""))
        .stdout(predicate::str::contains("\"create_statement\""));
}

#[test]
fn test_run_dry_run_plans_every_export() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.csv"), "X,Y\n1,2\n").unwrap();
    std::fs::write(dir.path().join("b.csv"), "Z\n3\n").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            "target:\n  path: out.accdb\nexports:\n  - source: {}\n    table: Alpha\n  - source: {}\n    table: Beta\n",
            dir.path().join("a.csv").display(),
            dir.path().join("b.csv").display()
        ),
    );

    cmd()
        .args(["run", "--dry-run", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE `Alpha` (`X` TEXT, `Y` TEXT);"))
        .stdout(predicate::str::contains("CREATE TABLE `Beta` (`Z` TEXT);"));
}

// =============================================================================
// Check Command Tests
// =============================================================================

#[test]
fn test_check_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "target:\n  path: out.accdb\nexports:\n  - source: data.csv\n    table: People\n    types:\n      ID: primary\n",
    );

    cmd()
        .args(["check", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("data.csv -> People"));
}

// =============================================================================
// Exit Code Tests - Config Errors (Exit Code 1)
// =============================================================================

#[test]
fn test_invalid_yaml_exits_with_code_1() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "invalid: yaml: content: [").unwrap();

    cmd()
        .args(["check", "--config", file.path().to_str().unwrap()])
        .assert()
        .code(1); // EXIT_CONFIG_ERROR
}

#[test]
fn test_empty_config_exits_with_code_1() {
    let file = tempfile::NamedTempFile::new().unwrap();

    cmd()
        .args(["check", "--config", file.path().to_str().unwrap()])
        .assert()
        .code(1); // EXIT_CONFIG_ERROR
}

#[test]
fn test_config_without_exports_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "target:\n  path: out.accdb\nexports: []\n");

    cmd()
        .args(["check", "-c"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_backtick_table_name_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(&source, "Name\nAda\n").unwrap();

    cmd()
        .args(["import", "--database", "p.accdb", "--table", "Bad`Name", "--dry-run"])
        .arg("--source")
        .arg(&source)
        .assert()
        .code(1);
}

#[cfg(not(feature = "odbc"))]
#[test]
fn test_import_without_odbc_support_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(&source, "Name\nAda\n").unwrap();

    cmd()
        .args(["import", "--table", "People"])
        .arg("--database")
        .arg(dir.path().join("people.accdb"))
        .arg("--source")
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--features odbc"));

    assert!(!dir.path().join("people.accdb").exists());
}

// =============================================================================
// Exit Code Tests - Type and IO Errors
// =============================================================================

#[test]
fn test_unknown_type_exits_with_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(&source, "Name,Age\nAda,36\n").unwrap();

    cmd()
        .args(["import", "--database", "p.accdb", "--table", "People"])
        .arg("--source")
        .arg(&source)
        .args(["--type", "Age=integer", "--dry-run"])
        .assert()
        .code(2) // EXIT_TYPE_ERROR
        .stderr(predicate::str::contains("Provided data type not found: INTEGER"));
}

#[test]
fn test_unknown_type_in_config_exits_with_code_2() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "target:\n  path: out.accdb\nexports:\n  - source: data.csv\n    table: People\n    types:\n      Age: varchar\n",
    );

    cmd()
        .args(["check", "-c"])
        .arg(&config)
        .assert()
        .code(2);
}

#[test]
fn test_missing_config_exits_with_code_7() {
    // Missing file is an IO error (code 7), not config error (code 1)
    cmd()
        .args(["check", "--config", "nonexistent_config_file.yaml"])
        .assert()
        .code(7); // EXIT_IO_ERROR - file not found
}

#[test]
fn test_missing_source_file_exits_with_code_7() {
    cmd()
        .args([
            "import",
            "--database",
            "p.accdb",
            "--table",
            "People",
            "--source",
            "no/such/people.csv",
            "--dry-run",
        ])
        .assert()
        .code(7);
}

// =============================================================================
// Argument Parsing Tests
// =============================================================================

#[test]
fn test_malformed_type_pair_is_rejected() {
    cmd()
        .args([
            "import",
            "--database",
            "p.accdb",
            "--table",
            "People",
            "--source",
            "people.csv",
            "--type",
            "Age",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected COL=VALUE"));
}

#[test]
fn test_no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}
