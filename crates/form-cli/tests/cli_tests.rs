use form_cli::{render, show_form, OutputFormat, RenderConfig};
use form_core::{FieldDescriptor, FormSession, Recipe};
use form_test_utils::full_featured_fields;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn full_form_text_lists_every_control() {
    let out = show_form(Recipe::FullFeatured, &RenderConfig::new()).unwrap();
    assert_eq!(
        out,
        "\
name <text> = \"\"
price <number> = \"0\"
stock <number> = \"0\"
[details]
  [dimensions]
    width <number> = \"\"
    height <number> = \"\"
  [supplier]
    company <text> = \"\"
    email <email> = \"\"
"
    );
}

#[test]
fn full_form_json_matches_fixture() {
    let config = RenderConfig::new().with_format(OutputFormat::Json);
    let out = show_form(Recipe::FullFeatured, &config).unwrap();

    let parsed: Vec<FieldDescriptor> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, full_featured_fields());
}

#[test]
fn basic_form_json_shape() {
    let config = RenderConfig::new().with_format(OutputFormat::Json);
    let out = show_form(Recipe::MinimalViable, &config).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{"field": "name", "value": "", "type": "text"}])
    );
}

#[test]
fn config_file_drives_rendering() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "indent = 0\nshow_types = false").unwrap();

    let config = RenderConfig::load(file.path()).unwrap();
    let product = FormSession::connected().show_full_form().unwrap();
    let out = render(&product, &config).unwrap();

    assert!(out.contains("[dimensions]\nwidth = \"\"\n"));
    assert!(!out.contains('<'));
}

#[test]
fn malformed_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "indent = \"wide\"").unwrap();

    assert!(RenderConfig::load(file.path()).is_err());
}
