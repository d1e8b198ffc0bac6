//! End-to-end tests for the generation pipeline: real files in, one
//! artifact out.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use lacquer_tokens::{generate, generate_to_disk, PipelineConfig, TokenError};

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        palette_path: dir.join("tokens/palette.json"),
        semantic_path: dir.join("tokens/semantic.json"),
        output_path: dir.join("styles/tokens.css"),
        ..PipelineConfig::default()
    }
}

const PALETTE: &str = r##"{
    "grey": { "50": "#fafafa", "900": "#212121" },
    "brand": { "primary": "#6200ee" }
}"##;

const SEMANTIC: &str = r#"{
    "light": {
        "surface": { "base": "{palette.grey.50}" },
        "accent": "{palette.brand.primary}",
        "overlay": "rgba(0, 0, 0, 0.4)"
    },
    "dark": {
        "surface": { "base": "{palette.grey.900}" }
    }
}"#;

#[test]
fn generates_expected_root_declarations() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", PALETTE);
    write(dir.path(), "tokens/semantic.json", SEMANTIC);

    let generated = generate_to_disk(&config_in(dir.path())).unwrap();
    let css = fs::read_to_string(dir.path().join("styles/tokens.css")).unwrap();

    assert_eq!(css, generated.css);
    assert!(css.contains("--grey-50: #fafafa;"));
    assert!(css.contains("--surface-base: var(--grey-50);"));
    assert!(css.contains("--accent: var(--brand-primary);"));
    assert!(css.contains("--overlay: rgba(0, 0, 0, 0.4);"));
    assert_eq!(generated.palette_count, 3);
    assert_eq!(generated.light_count, 3);
    assert_eq!(generated.dark_count, 1);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", PALETTE);
    write(dir.path(), "tokens/semantic.json", SEMANTIC);
    let config = config_in(dir.path());

    generate_to_disk(&config).unwrap();
    let first = fs::read(dir.path().join("styles/tokens.css")).unwrap();
    generate_to_disk(&config).unwrap();
    let second = fs::read(dir.path().join("styles/tokens.css")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn declaration_order_mirrors_shuffled_source_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", r##"{ "grey": { "50": "#fafafa" } }"##);
    write(
        dir.path(),
        "tokens/semantic.json",
        r#"{ "light": {
            "zeta": "transparent",
            "beta": "{palette.grey.50}",
            "alpha": "white"
        } }"#,
    );

    let generated = generate(&config_in(dir.path())).unwrap();
    let zeta = generated.css.find("--zeta").unwrap();
    let beta = generated.css.find("--beta").unwrap();
    let alpha = generated.css.find("--alpha").unwrap();
    assert!(zeta < beta && beta < alpha);
}

#[test]
fn metadata_never_reaches_the_artifact() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "tokens/palette.json",
        r##"{ "grey": { "_origin": "figma", "50": "#fafafa" } }"##,
    );
    write(
        dir.path(),
        "tokens/semantic.json",
        r#"{ "light": {
            "surface": {
                "base_comment": "default container background",
                "base": "{palette.grey.50}"
            }
        } }"#,
    );

    let generated = generate(&config_in(dir.path())).unwrap();
    assert!(!generated.css.contains("_origin"));
    assert!(!generated.css.contains("base_comment"));
    assert!(!generated.css.contains("figma"));
    assert!(generated.css.contains("--surface-base: var(--grey-50);"));
}

#[test]
fn dark_only_tokens_stay_out_of_the_root_scope() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", PALETTE);
    write(
        dir.path(),
        "tokens/semantic.json",
        r#"{
            "light": { "light-only": "{palette.grey.50}" },
            "dark": { "dark-only": "{palette.grey.900}" }
        }"#,
    );

    let css = generate(&config_in(dir.path())).unwrap().css;
    let dark_start = css.find("[data-theme=\"dark\"]").unwrap();
    assert!(!css[..dark_start].contains("--dark-only"));
    assert!(!css[dark_start..].contains("--light-only"));
}

#[test]
fn dangling_reference_aborts_without_writing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", r##"{ "grey": { "50": "#fafafa" } }"##);
    write(
        dir.path(),
        "tokens/semantic.json",
        r#"{ "light": { "surface": { "base": "{palette.grey.950}" } } }"#,
    );
    let config = config_in(dir.path());

    let err = generate_to_disk(&config).unwrap_err();
    match err {
        TokenError::UnresolvedReference { path, reference } => {
            assert_eq!(path, "surface.base");
            assert_eq!(reference, "grey.950");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!config.output_path.exists());
}

#[test]
fn missing_input_document_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tokens/palette.json", PALETTE);
    // no semantic document

    let err = generate(&config_in(dir.path())).unwrap_err();
    assert!(matches!(err, TokenError::Io { .. }));
}
