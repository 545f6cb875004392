use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const RECORDS: &str = r#"[
    {
        "id": "WPF-001",
        "firstName": "María José",
        "lastName": "Pérez",
        "phone": "0991234567",
        "email": "maria@example.com",
        "sports": ["Yoga", "Running"],
        "status": "CHECKED_IN",
        "checkInTime": "2026-03-08T14:05:00Z",
        "registrationDate": "2026-03-01T15:00:00Z"
    },
    {
        "id": "WPF-002",
        "firstName": "Carla",
        "lastName": "Suárez; Vega",
        "phone": "0987654321",
        "email": "carla@example.com",
        "sports": ["CrossFit"],
        "status": "PENDING",
        "checkInTime": null,
        "registrationDate": "2026-03-02T16:30:00Z"
    }
]"#;

fn checkin(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("checkin").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("CHECKIN_LOG")
        .arg("--config")
        .arg(config_dir);
    cmd
}

fn write_records(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("records.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_no_command_prints_grouped_help() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Field Commands:"))
        .stdout(predicate::str::contains("Record Commands:"));
}

#[test]
fn test_validate_valid_form() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args([
            "validate",
            "--first-name",
            "María José",
            "--last-name",
            "Pérez",
            "--phone",
            "099 123 4567",
            "--email",
            "maria@example.com",
            "--sport",
            "Yoga",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("All fields are valid."));
}

#[test]
fn test_validate_invalid_form_fails_with_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args([
            "validate",
            "--form",
            "identity",
            "--first-name",
            "Jose3",
            "--last-name",
            "Vera",
            "--phone",
            "0991234567",
            "--email",
            "jose@example.com",
            "--sport",
            "Yoga",
            "--cedula",
            "1710034066",
            "--age",
            "4",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "El nombre solo puede contener letras",
        ))
        .stdout(predicate::str::contains("Cédula inválida"))
        .stdout(predicate::str::contains(
            "La edad debe estar entre 5 y 120 años",
        ))
        .stderr(predicate::str::contains("3 invalid field(s)"));
}

#[test]
fn test_validate_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args(["validate", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"NAME_REQUIRED\""))
        .stdout(predicate::str::contains("\"field\": \"sports\""));
}

#[test]
fn test_format_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args(["format", "phone", "(099) 123-4567 ext"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0991234567\n"));

    checkin(temp_dir.path())
        .args(["format", "cedula", "17 1003406 5"])
        .assert()
        .success()
        .stdout("1710034065\n");
}

#[test]
fn test_status_command() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args(["status", "to-presentation", "CHECKED_IN"])
        .assert()
        .success()
        .stdout("Registrado\n");

    checkin(temp_dir.path())
        .args(["status", "to-backend", "Cancelado"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PENDING\n"));
}

#[test]
fn test_export_csv_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_records(temp_dir.path(), RECORDS);
    let output = temp_dir.path().join("out.csv");

    checkin(temp_dir.path())
        .args(["export", "csv", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with('\u{FEFF}'));
    let lines: Vec<_> = csv.trim_start_matches('\u{FEFF}').split("\r\n").collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        "WPF-001;María José;Pérez;0991234567;maria@example.com;Yoga, Running;Registrado;01/03/2026, 10:00:00;08/03/2026, 09:05:00"
    );
    assert!(lines[2].contains(";\"Suárez; Vega\";"));
    assert!(lines[2].ends_with(";Pendiente;02/03/2026, 11:30:00;N/A"));
}

#[test]
fn test_export_html_to_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_records(temp_dir.path(), RECORDS);

    checkin(temp_dir.path())
        .args(["export", "html", "--output", "-", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("status-registrado"))
        .stdout(predicate::str::contains("Total de registros: 2"));
}

#[test]
fn test_export_uses_configured_filename() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_records(temp_dir.path(), RECORDS);

    checkin(temp_dir.path())
        .args(["config", "csv-filename"])
        .arg(temp_dir.path().join("custom.csv"))
        .assert()
        .success();

    checkin(temp_dir.path())
        .args(["export", "csv", "--input"])
        .arg(&input)
        .assert()
        .success();

    assert!(temp_dir.path().join("custom.csv").exists());
}

#[test]
fn test_strict_status_rejects_unknown_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_records(temp_dir.path(), &RECORDS.replace("PENDING", "CANCELLED"));

    checkin(temp_dir.path())
        .args(["list", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pendiente"));

    checkin(temp_dir.path())
        .args(["config", "strict-status", "true"])
        .assert()
        .success();

    checkin(temp_dir.path())
        .args(["list", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CANCELLED"));
}

#[test]
fn test_stats_and_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_records(temp_dir.path(), RECORDS);

    checkin(temp_dir.path())
        .args(["stats", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Registrado    1 (50%)"))
        .stdout(predicate::str::contains("Últimos check-ins:"));

    checkin(temp_dir.path())
        .args(["search", "carla", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("WPF-002"))
        .stdout(predicate::str::contains("WPF-001").not());
}

#[test]
fn test_envelope_input_and_api_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let ok = write_records(
        temp_dir.path(),
        &format!(r#"{{ "success": true, "data": {} }}"#, RECORDS),
    );
    checkin(temp_dir.path())
        .args(["list", "--input"])
        .arg(&ok)
        .assert()
        .success()
        .stdout(predicate::str::contains("Carla Suárez; Vega"));

    let failed = write_records(
        temp_dir.path(),
        r#"{ "success": false, "error": "Token expirado" }"#,
    );
    checkin(temp_dir.path())
        .args(["list", "--input"])
        .arg(&failed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token expirado"));
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .args(["list", "--input"])
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_config_show_and_reject() {
    let temp_dir = tempfile::tempdir().unwrap();
    checkin(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("event-name = WARMI POWERFEST"));

    checkin(temp_dir.path())
        .args(["config", "utc-offset-minutes", "lots"])
        .assert()
        .failure();
}
