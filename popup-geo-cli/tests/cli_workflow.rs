//! Integration tests for the popup-geo binary.
//!
//! Each test runs the built binary with `HOME` pointed at a temporary
//! directory, so config and inventory files never touch the real home.
//!
//! # Running Integration Tests
//!
//! Integration tests are excluded from regular test runs. Use:
//! ```bash
//! cargo test --test '*' -- --ignored --nocapture
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn home(&self) -> &Path {
        self.home.path()
    }

    fn inventory(&self) -> PathBuf {
        self.home().join("inventory.json")
    }

    /// Run the CLI against this sandbox's inventory file.
    fn run(&self, args: &[&str]) -> Output {
        let data = self.inventory();
        Command::new(env!("CARGO_BIN_EXE_popup-geo"))
            .env("HOME", self.home())
            .arg("--data")
            .arg(&data)
            .args(args)
            .output()
            .expect("Failed to execute CLI")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_add_and_find_nearby() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "vendor", "v-1", "--name", "Cart", "--at", "12.49,41.89"]);
    assert_success(&output, "add vendor");

    let output = sandbox.run(&[
        "add", "product", "p-1", "--name", "Scarf", "--vendor", "v-1", "--at", "12.49,41.89",
        "--price", "15", "--quantity", "2",
    ]);
    assert_success(&output, "add product");
    assert!(sandbox.inventory().exists());

    let output = sandbox.run(&["nearby", "products", "--at", "12.5,41.9", "--radius", "5"]);
    assert_success(&output, "nearby");
    assert!(stdout(&output).contains("p-1"));

    let output = sandbox.run(&["nearby", "products", "--at", "-0.12,51.5", "--radius", "5"]);
    assert_success(&output, "nearby london");
    assert!(!stdout(&output).contains("p-1"));
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_relocate_persists() {
    let sandbox = Sandbox::new();

    assert_success(
        &sandbox.run(&["add", "vendor", "v-1", "--name", "Cart", "--at", "0,0"]),
        "add vendor",
    );
    assert_success(
        &sandbox.run(&["relocate", "vendor", "v-1", "--at", "-73.99,40.73"]),
        "relocate",
    );

    let output = sandbox.run(&["show", "vendor", "v-1", "--json"]);
    assert_success(&output, "show");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["location"]["coordinates"][0], -73.99);
    assert_eq!(value["location"]["coordinates"][1], 40.73);
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_stats_json() {
    let sandbox = Sandbox::new();

    assert_success(
        &sandbox.run(&["add", "vendor", "v-1", "--name", "Cart", "--at", "0,0"]),
        "add vendor",
    );

    let output = sandbox.run(&["stats", "--json"]);
    assert_success(&output, "stats");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["totalVendors"], 1);
    assert_eq!(value["totalProducts"], 0);
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_remove_vendor_cascades() {
    let sandbox = Sandbox::new();

    assert_success(
        &sandbox.run(&["add", "vendor", "v-1", "--name", "Cart", "--at", "0,0"]),
        "add vendor",
    );
    assert_success(
        &sandbox.run(&[
            "add", "product", "p-1", "--name", "Scarf", "--vendor", "v-1", "--at", "0,0",
        ]),
        "add product",
    );
    assert_success(&sandbox.run(&["remove", "vendor", "v-1"]), "remove");

    let output = sandbox.run(&["show", "product", "p-1"]);
    assert!(!output.status.success());
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_unknown_entity_fails() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["relocate", "product", "missing", "--at", "1,1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing"));
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_config_set_and_get() {
    let sandbox = Sandbox::new();

    assert_success(
        &sandbox.run(&["config", "set", "query.default_radius_km", "2.5"]),
        "config set",
    );
    assert!(sandbox.home().join(".popup-geo").join("config.ini").exists());

    let output = sandbox.run(&["config", "get", "query.default_radius_km"]);
    assert_success(&output, "config get");
    assert_eq!(stdout(&output).trim(), "2.5");
}

#[test]
#[ignore = "integration test - run with --ignored"]
fn test_distance() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["distance", "0,0", "0,1"]);
    assert_success(&output, "distance");
    assert_eq!(stdout(&output).trim(), "111.195 km");
}
