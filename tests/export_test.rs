use sl_locations::app::{render, write_output, ExportRequest};
use sl_locations::{OutputFormat, Province};
use tempfile::TempDir;

#[test]
fn test_export_writes_nested_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("exports").join("provinces.csv");

    let request = ExportRequest {
        province: None,
        format: OutputFormat::Csv,
        dropdown: false,
    };
    let rendered = render(&request).unwrap();
    write_output(&rendered, Some(output_path.as_path())).unwrap();

    assert!(output_path.exists());
    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("province,district\n"));
    assert!(content.contains("Central,Nuwara Eliya"));
    assert!(content.contains("Northern,Mullaitivu"));
    // Header plus one row per district.
    assert_eq!(content.lines().count(), 26);
}

#[test]
fn test_export_single_province_dropdown_json() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("eastern.json");

    let request = ExportRequest {
        province: Some(Province::Eastern),
        format: OutputFormat::Json,
        dropdown: true,
    };
    write_output(&render(&request).unwrap(), Some(output_path.as_path())).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"label": "Batticaloa", "value": "Batticaloa"},
            {"label": "Ampara", "value": "Ampara"},
            {"label": "Trincomalee", "value": "Trincomalee"}
        ])
    );
}

#[test]
fn test_default_request_renders_text() {
    let rendered = render(&ExportRequest::default()).unwrap();
    assert!(rendered.contains("Sabaragamuwa: Ratnapura, Kegalle\n"));
    assert_eq!(rendered.lines().count(), 9);
}
