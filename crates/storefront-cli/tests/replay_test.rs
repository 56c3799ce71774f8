//! Replay Tests
//!
//! Drives a fresh storefront session through textual intents and checks the
//! printed page.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_replay_builds_cart_and_total() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["replay", "add:1", "add:1", "add:2", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart (3)"))
        .stdout(predicate::str::contains("Shopping Cart"))
        .stdout(predicate::str::contains("Total: $139.97"))
        .stdout(predicate::str::contains("[Proceed to Checkout]"));
}

#[test]
fn test_replay_json_is_full_view_model() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["replay", "add:4", "toggle"]);

    let content = &json["content"];
    assert_eq!(content["cart_badge"]["item_count"], 1);
    assert_eq!(content["cart_panel"]["visible"], true);
    assert_eq!(content["cart_panel"]["empty"], false);
    assert_eq!(content["cart_panel"]["total_cents"], 19999);
    assert_eq!(content["cart_panel"]["lines"][0]["name"], "Leather Jacket");
    assert_eq!(content["products"].as_array().unwrap().len(), 8);
    assert_eq!(content["page"]["store_name"], "Fashion Store");
}

#[test]
fn test_replay_quantity_zero_removes_line() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["replay", "add:3", "qty:3=0", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"))
        .stdout(predicate::str::contains("Cart (0)"));
}

#[test]
fn test_replay_quiet_lists_filtered_ids() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["replay", "category:Accessories", "--quiet"])
        .assert()
        .success()
        .stdout("7\n8\n");
}

#[test]
fn test_replay_unknown_category_shows_nothing() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["replay", "category:Swimwear"]);

    assert_eq!(json["content"]["selected_category"], "Swimwear");
    assert!(json["content"]["products"].as_array().unwrap().is_empty());
    assert_eq!(json["badge"]["level"], "warning");
}

#[test]
fn test_replay_checkout_changes_nothing() {
    let fixture = TestFixture::new();
    let before = fixture.json(&["replay", "add:5", "toggle"]);
    let after = fixture.json(&["replay", "add:5", "toggle", "checkout"]);

    assert_eq!(before["content"], after["content"]);
}

#[test]
fn test_replay_reads_intent_file_after_arguments() {
    let fixture = TestFixture::new();
    let script = fixture.write_file(
        "intents.txt",
        "# quantity arithmetic\n\ninc:1\ninc:1\ndec:1\n",
    );

    let json = fixture.json(&[
        "replay",
        "add:1",
        "--file",
        script.to_str().unwrap(),
    ]);

    assert_eq!(json["content"]["cart_panel"]["lines"][0]["quantity"], 2);
    assert_eq!(json["content"]["cart_panel"]["total_cents"], 5998);
}

#[test]
fn test_replay_unknown_product_is_usage_error() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["replay", "add:99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown product id: 99"));
}

#[test]
fn test_replay_rejects_malformed_intent() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["replay", "teleport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid intent"));
}

#[test]
fn test_replay_script_errors_name_the_line() {
    let fixture = TestFixture::new();
    let script = fixture.write_file("bad.txt", "add:1\n\nqty:1=lots\n");

    fixture
        .command()
        .args(["replay", "--file", script.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}
