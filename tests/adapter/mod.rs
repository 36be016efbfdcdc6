use assert_cmd::Command;
use assert_fs::{TempDir, prelude::*};
use httpmock::{Method, MockServer};
use predicates::prelude::*;
use serde_json::json;

const TOKEN: &str = "ph-e2e-token-0000";

/// A command that never sees the developer's own configuration
fn adapter_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("producthunt-posts").unwrap();
    cmd.env_remove("PRODUCTHUNT_TOKEN")
        .env("PRODUCTHUNT_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

fn mock_posts(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(Method::POST)
            .path("/v2/api/graphql")
            .header("authorization", format!("Bearer {TOKEN}"))
            .header("accept", "application/json");
        then.status(200).json_body(json!({
            "data": {
                "posts": {
                    "edges": [
                        { "node": { "id": "7", "name": "Arc", "tagline": "A better browser" } },
                        { "node": { "id": "8", "name": "Warp", "tagline": null } }
                    ]
                }
            }
        }));
    })
}

#[test]
fn missing_token_prints_an_empty_cell() {
    let home = TempDir::new().unwrap();
    adapter_command(&home)
        .arg(r#"["id,name"]"#)
        .assert()
        .success()
        .stdout("[[\"\"]]\n");
}

#[test]
fn malformed_input_fails_without_a_token() {
    let home = TempDir::new().unwrap();
    adapter_command(&home)
        .arg(r#"{"properties": "id"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error[E001]:"));
}

#[test]
fn invalid_selectors_fail_with_a_suggestion() {
    let home = TempDir::new().unwrap();
    adapter_command(&home)
        .arg("[42]")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error[E002]:"))
        .stderr(predicate::str::contains("Known properties are"));
}

#[test]
fn broken_connections_files_are_reported() {
    let home = TempDir::new().unwrap();
    home.child("connections.toml")
        .write_str("producthunt_connection = [")
        .unwrap();
    adapter_command(&home)
        .arg(r#"["id"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error[E005]:"))
        .stderr(predicate::str::contains("connections.toml"));
}

#[test]
fn it_reads_posts_with_the_token_variable() {
    let server = MockServer::start();
    let mock = mock_posts(&server);
    let home = TempDir::new().unwrap();

    adapter_command(&home)
        .env("PRODUCTHUNT_TOKEN", TOKEN)
        .args(["--endpoint", &server.url("/v2/api/graphql")])
        .arg(r#"[["name", "Tagline", "bogus"]]"#)
        .assert()
        .success()
        .stdout("[[\"name\",\"tagline\",\"bogus\"],[\"Arc\",\"A better browser\",\"\"],[\"Warp\",\"\",\"\"]]\n");

    mock.assert();
}

#[test]
fn it_reads_posts_with_a_named_connection() {
    let server = MockServer::start();
    let mock = mock_posts(&server);
    let home = TempDir::new().unwrap();
    home.child("connections.toml")
        .write_str(&format!("[work]\naccess_token = \"{TOKEN}\"\n"))
        .unwrap();

    adapter_command(&home)
        .args(["--connection", "work"])
        .args(["--endpoint", &server.url("/v2/api/graphql")])
        .write_stdin(r#"["id"]"#)
        .assert()
        .success()
        .stdout("[[\"id\"],[\"7\"],[\"8\"]]\n");

    mock.assert();
}

#[test]
fn refused_tokens_are_remote_call_errors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST).path("/v2/api/graphql");
        then.status(401)
            .json_body(json!({ "error": "invalid_oauth_token" }));
    });
    let home = TempDir::new().unwrap();

    adapter_command(&home)
        .env("PRODUCTHUNT_TOKEN", "expired-token-1234")
        .args(["--endpoint", &server.url("/v2/api/graphql")])
        .arg(r#"["id"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error[E004]:"))
        .stderr(predicate::str::contains("rejected the access token"));

    mock.assert();
}
