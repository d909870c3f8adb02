use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const TOKEN: &str = "test-token";

/// Build a command isolated from the caller's environment and home directory.
fn tfe_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tfe-orgs"));
    cmd.env("HOME", home)
        .env_remove("TFE_TOKEN")
        .env_remove("TFE_ADDRESS")
        .env_remove("TFE_CONFIG")
        .env_remove("TFE_FORMAT")
        .env_remove("TFE_DEBUG");
    cmd
}

fn write_config(dir: &Path, address: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "address: {address}\ntoken: {TOKEN}\npreferences:\n  page_size: 5\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn org_body(name: &str, email: &str) -> String {
    json!({
        "data": {
            "id": name,
            "type": "organizations",
            "attributes": {
                "name": name,
                "email": email,
                "enterprise-plan": "premium",
                "created-at": "2018-03-08T22:14:56.227Z",
                "permissions": { "can-update": true }
            }
        }
    })
    .to_string()
}

#[test]
fn version_prints_package_version() {
    let temp = tempdir().unwrap();

    tfe_cmd(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn org_list_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), server.url().as_str());

    let list = server
        .mock("GET", "/api/v2/organizations")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_query(Matcher::UrlEncoded("page[size]".into(), "5".into()))
        .with_status(200)
        .with_header("content-type", "application/vnd.api+json")
        .with_body(
            json!({
                "data": [
                    {
                        "type": "organizations",
                        "attributes": { "name": "zeta", "email": "z@zeta.io" }
                    },
                    { "type": "organizations", "attributes": { "name": "alpha" } }
                ]
            })
            .to_string(),
        )
        .create();

    let assert = tfe_cmd(temp.path())
        .args(["org", "list", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("zeta"));
    assert!(stdout.contains("z@zeta.io"));
    assert!(stdout.contains("alpha"));
    assert!(stdout.find("zeta").unwrap() < stdout.find("alpha").unwrap());

    list.assert();
    Ok(())
}

#[test]
fn org_list_passes_paging_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let list = server
        .mock("GET", "/api/v2/organizations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page[number]".into(), "2".into()),
            Matcher::UrlEncoded("page[size]".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create();

    let assert = tfe_cmd(temp.path())
        .args(["org", "list", "--page", "2", "--page-size", "50", "--format", "json"])
        .args(["--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["data"], json!([]));
    assert_eq!(value["meta"]["count"], 0);

    list.assert();
    Ok(())
}

#[test]
fn org_get_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let get = server
        .mock("GET", "/api/v2/organizations/acme-corp")
        .with_status(200)
        .with_body(org_body("acme-corp", "ops@acme.io"))
        .create();

    let assert = tfe_cmd(temp.path())
        .args(["org", "get", "acme-corp", "--format", "json"])
        .env("TFE_ADDRESS", server.url())
        .env("TFE_TOKEN", TOKEN)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["data"]["name"], "acme-corp");
    assert_eq!(value["data"]["email"], "ops@acme.io");
    assert_eq!(value["data"]["enterprise_plan"], "premium");

    get.assert();
    Ok(())
}

#[test]
fn org_get_table_output() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let _get = server
        .mock("GET", "/api/v2/organizations/acme")
        .with_status(200)
        .with_body(org_body("acme", "ops@acme.io"))
        .create();

    tfe_cmd(temp.path())
        .args(["org", "get", "acme", "--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:"))
        .stdout(predicate::str::contains("ops@acme.io"))
        .stdout(predicate::str::contains("Permissions:"))
        .stdout(predicate::str::contains("update"));

    Ok(())
}

#[test]
fn org_get_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let _get = server
        .mock("GET", "/api/v2/organizations/ghost")
        .with_status(404)
        .with_body(r#"{"errors":[{"status":"404","title":"not found"}]}"#)
        .create();

    tfe_cmd(temp.path())
        .args(["org", "get", "ghost", "--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource not found: not found"));

    Ok(())
}

#[test]
fn org_create_sends_name_and_email() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let create = server
        .mock("POST", "/api/v2/organizations")
        .match_header("content-type", "application/vnd.api+json")
        .match_body(Matcher::Json(json!({
            "data": {
                "type": "organizations",
                "attributes": { "name": "acme", "email": "a@acme.io" }
            }
        })))
        .with_status(201)
        .with_body(org_body("acme", "a@acme.io"))
        .create();

    tfe_cmd(temp.path())
        .args(["org", "create", "acme", "--email", "a@acme.io"])
        .args(["--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success()
        .stderr(predicate::str::contains("created"));

    create.assert();
    Ok(())
}

#[test]
fn org_create_invalid_name_never_calls_api() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let create = server
        .mock("POST", "/api/v2/organizations")
        .expect(0)
        .create();

    tfe_cmd(temp.path())
        .args(["org", "create", "acme corp", "--email", "a@acme.io"])
        .args(["--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for name"));

    create.assert();
    Ok(())
}

#[test]
fn org_create_dry_run_needs_no_token() {
    let temp = tempdir().unwrap();

    tfe_cmd(temp.path())
        .args(["org", "create", "acme", "--email", "a@acme.io", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DRY RUN"))
        .stderr(predicate::str::contains("acme"));
}

#[test]
fn org_delete_success() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let delete = server
        .mock("DELETE", "/api/v2/organizations/acme")
        .with_status(204)
        .create();

    tfe_cmd(temp.path())
        .args(["org", "delete", "acme", "--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success()
        .stderr(predicate::str::contains("deleted"));

    delete.assert();
    Ok(())
}

#[test]
fn org_delete_dry_run_never_calls_api() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let delete = server
        .mock("DELETE", "/api/v2/organizations/acme")
        .expect(0)
        .create();

    tfe_cmd(temp.path())
        .args(["org", "delete", "acme", "--dry-run"])
        .args(["--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success()
        .stderr(predicate::str::contains("Would delete organization"));

    delete.assert();
    Ok(())
}

#[test]
fn org_modify_sends_partial_update() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let temp = tempdir()?;

    let modify = server
        .mock("PATCH", "/api/v2/organizations/acme")
        .match_body(Matcher::Json(json!({
            "data": {
                "type": "organizations",
                "attributes": { "email": "new@acme.io" }
            }
        })))
        .with_status(200)
        .with_body(org_body("acme", "new@acme.io"))
        .create();

    let assert = tfe_cmd(temp.path())
        .args(["org", "modify", "acme", "--email", "new@acme.io", "--format", "json"])
        .args(["--address", server.url().as_str(), "--token", TOKEN])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("new@acme.io"));

    modify.assert();
    Ok(())
}

// ============================================================================
// Error Scenario Tests
// ============================================================================

#[test]
fn missing_token_shows_helpful_error() {
    let temp = tempdir().unwrap();
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    tfe_cmd(temp.path())
        .args(["org", "list", "--config"])
        .arg(&nonexistent_config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TFE_TOKEN"));
}

#[test]
fn malformed_config_reports_parse_error() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "address: [unclosed").unwrap();

    tfe_cmd(temp.path())
        .args(["org", "get", "acme", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}
