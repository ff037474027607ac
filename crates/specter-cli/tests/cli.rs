//! In-process tests for the specter CLI.

use std::fs;

use clap::Parser;
use specter::{Color, Product, Size, SpecError};
use specter_cli::{run, Cli};

fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("specter").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run::execute(cli.command, &mut out)?;
    Ok(String::from_utf8(out)?)
}

// ============================================================================
// filter
// ============================================================================

#[test]
fn filter_green_products() {
    let output = run_cli(&["filter", "--where", "color=green"]).unwrap();

    assert_eq!(
        output,
        "Products matching color = green:\n - Apple (green, small)\n - Tree (green, big)\n"
    );
}

#[test]
fn filter_big_blue_products() {
    let output = run_cli(&["filter", "-w", "color=blue", "-w", "size=big"]).unwrap();

    assert_eq!(
        output,
        "Products matching (color = blue AND size = big):\n - House (blue, big)\n"
    );
}

#[test]
fn filter_any_and_exclude() {
    let output = run_cli(&[
        "filter",
        "--any",
        "size=small",
        "--any",
        "color=blue",
        "--exclude",
        "color=green",
    ])
    .unwrap();

    assert!(output.ends_with(" - House (blue, big)\n"));
    assert!(!output.contains("Apple"));
}

#[test]
fn filter_json_output() {
    let output = run_cli(&["filter", "--where", "size=big", "--format", "json"]).unwrap();
    let products: Vec<Product> = serde_json::from_str(&output).unwrap();

    assert_eq!(
        products,
        [
            Product::new("Tree", Color::Green, Size::Big),
            Product::new("House", Color::Blue, Size::Big),
        ]
    );
}

#[test]
fn filter_without_criteria_fails() {
    let err = run_cli(&["filter"]).unwrap_err();

    assert_eq!(
        err.downcast_ref::<SpecError>(),
        Some(&SpecError::MissingPredicate)
    );
}

#[test]
fn filter_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.yaml");
    fs::write(
        &path,
        "- name: Lamp\n  color: red\n  size: medium\n- name: Rug\n  color: red\n  size: big\n- name: Sea\n  color: blue\n  size: big\n",
    )
    .unwrap();

    let output = run_cli(&[
        "filter",
        "--catalog",
        path.to_str().unwrap(),
        "--where",
        "color=red",
        "--where",
        "size!=medium",
    ])
    .unwrap();

    assert_eq!(
        output,
        "Products matching (color = red AND NOT size = medium):\n - Rug (red, big)\n"
    );
}

#[test]
fn filter_unsupported_catalog_fails() {
    let err = run_cli(&["filter", "--catalog", "products.txt", "-w", "color=red"]).unwrap_err();
    assert!(err.to_string().contains("failed to load catalog"));
}

// ============================================================================
// journal
// ============================================================================

#[test]
fn journal_prints_entries() {
    let output = run_cli(&["journal", "-e", "I cried", "-e", "I know"]).unwrap();
    assert_eq!(output, "1: I cried\n2: I know\n");
}

#[test]
fn journal_removes_entries() {
    let output = run_cli(&["journal", "-e", "a", "-e", "b", "-e", "c", "--remove", "1"]).unwrap();
    assert_eq!(output, "1: a\n3: c\n");
}

#[test]
fn journal_remove_out_of_range_fails() {
    assert!(run_cli(&["journal", "-e", "a", "--remove", "3"]).is_err());
}

#[test]
fn journal_save_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("j1.txt");
    let path_str = path.to_str().unwrap();

    let output = run_cli(&["journal", "-e", "first", "--save", path_str]).unwrap();
    assert!(output.ends_with(&format!("Saved journal to {path_str}\n")));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1: first");

    let output = run_cli(&["journal", "-e", "second", "--save", path_str]).unwrap();
    assert!(output.contains("Kept existing"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1: first");

    run_cli(&["journal", "-e", "second", "--save", path_str, "--overwrite"]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1: second");
}

// ============================================================================
// shapes and devices
// ============================================================================

#[test]
fn shapes_default_output() {
    let output = run_cli(&["shapes"]).unwrap();

    assert_eq!(
        output,
        "Width: 2, Height: 3 has an area of 6\n\
         Side: 4 has an area of 16\n\
         Side: 4 as a rectangle (Width: 4, Height: 4) has an area of 16\n"
    );
}

#[test]
fn devices_output() {
    let output = run_cli(&["devices", "--title", "memo"]).unwrap();

    assert_eq!(
        output,
        "scanner scanned 'memo'\n\
         printer printed 'memo'\n\
         old-fashioned printer printed 'memo'\n\
         fax faxed 'memo'\n"
    );
}
