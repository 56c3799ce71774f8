//! Configuration Tests
//!
//! Config file lifecycle and its effect on the rendered page.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_config_show_without_file_uses_defaults() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file"))
        .stdout(predicate::str::contains("Fashion Store"))
        .stdout(predicate::str::contains("tick_rate_ms   250"));
}

#[test]
fn test_config_init_respects_existing_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written"));
    assert!(fixture.config_path().exists());

    fixture.write_config("[store]\nname = \"Kept\"\n");
    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
    let kept = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(kept.contains("Kept"));

    fixture
        .command()
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let reset = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(reset.contains("Fashion Store"));
}

#[test]
fn test_store_texts_come_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config(
        r#"
[store]
name = "Corner Shop"
footer = "Open late"
"#,
    );

    fixture
        .command()
        .arg("replay")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corner Shop"))
        .stdout(predicate::str::contains("Open late"))
        // Keys missing from the file keep their defaults
        .stdout(predicate::str::contains("Welcome to Our Clothing Store"));
}

#[test]
fn test_config_flag_overrides_directory() {
    let fixture = TestFixture::new();
    let path = fixture.write_file("elsewhere.toml", "[store]\nname = \"Elsewhere\"\n");

    let json = fixture.json(&["--config", path.to_str().unwrap(), "config", "show"]);
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["config"]["store"]["name"], "Elsewhere");
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = TestFixture::new();
    fixture.write_config("[store\nname = ");

    fixture
        .command()
        .args(["replay", "add:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_no_subcommand_without_terminal_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("8 products in 6 categories"))
        .stdout(predicate::str::contains("storefront browse"));
}

#[test]
fn test_browse_requires_terminal() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
