use roman_batch::{BatchEngine, BatchPipeline, LocalStorage, RomanError, TomlConfig};
use std::io::Read;
use tempfile::TempDir;

fn job_config(body: &str, output_path: &str, load_extra: &str) -> TomlConfig {
    let toml_content = format!(
        r#"
[job]
name = "integration"
description = "End-to-end test"

{}

[load]
output_path = "{}"
output_formats = ["csv", "tsv", "json"]

{}
"#,
        body,
        output_path.replace('\\', "/"),
        load_extra
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_from_input_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(
        temp_dir.path().join("numbers.txt"),
        "# reference values\n1\n2\n4\n5\n6\n9\n10\n\n11\nfive\n",
    )?;

    let config = job_config(
        "[source]\ninput = \"numbers.txt\"\n",
        &format!("{}/out", root),
        "",
    );
    let engine = BatchEngine::new(BatchPipeline::new(LocalStorage::new(root.clone()), config));
    let report = engine.run().await?;

    assert_eq!(report.summary.total, 9);
    assert_eq!(report.summary.converted, 7);
    assert_eq!(report.summary.failed, 2);
    assert_eq!(report.outputs.len(), 3);

    let csv = std::fs::read_to_string(temp_dir.path().join("out/numerals.csv"))?;
    let numerals: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(2).unwrap_or(""))
        .collect();
    assert_eq!(
        numerals,
        vec!["I", "II", "IV", "V", "VI", "IX", "X", "", ""]
    );
    assert!(csv.contains("11,five,,"));

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(
        temp_dir.path().join("out/numerals.json"),
    )?)?;
    assert_eq!(json["summary"]["job"], "integration");
    assert_eq!(json["records"].as_array().unwrap().len(), 9);
    assert!(json["records"][7]["error"]
        .as_str()
        .unwrap()
        .contains("outside the supported range"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_zip_with_standard_mode() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_str().unwrap().to_string();

    let config = job_config(
        "[source]\nvalues = [3, 11, 40, 1994]\n\n[convert]\nmode = \"standard\"\n",
        "out",
        "[load.compression]\nenabled = true\nfilename = \"batch.zip\"\n",
    );
    let engine = BatchEngine::new(BatchPipeline::new(LocalStorage::new(root), config));
    let report = engine.run().await?;
    assert_eq!(report.outputs, vec!["out/batch.zip"]);

    let zip_data = std::fs::read(temp_dir.path().join("out/batch.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;
    assert_eq!(archive.len(), 3);

    let mut csv = String::new();
    archive.by_name("numerals.csv")?.read_to_string(&mut csv)?;
    assert!(csv.contains("1,3,III,"));
    assert!(csv.contains("2,11,XI,"));
    assert!(csv.contains("3,40,XL,"));
    assert!(csv.contains("4,1994,MCMXCIV,"));
    Ok(())
}

#[tokio::test]
async fn test_fail_policy_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let config = job_config(
        "[source]\nvalues = [1, -4]\n\n[error_handling]\non_error = \"fail\"\n",
        "out",
        "",
    );
    let engine = BatchEngine::new(BatchPipeline::new(LocalStorage::new(root), config));

    match engine.run().await {
        Err(RomanError::OutOfRange { value, min, max }) => {
            assert_eq!((value, min, max), (-4, 1, 10));
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_preview_errors_map_to_severity_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();

    let missing_input = job_config("[source]\ninput = \"nope.txt\"\n", "out", "");
    let engine = BatchEngine::new(BatchPipeline::new(
        LocalStorage::new(root.clone()),
        missing_input,
    ));
    let err = engine.preview().await.unwrap_err();
    assert!(matches!(err, RomanError::IoError(_)));
    assert_eq!(err.exit_code(), 3);

    let out_of_range = job_config(
        "[source]\nvalues = [1, 42]\n\n[error_handling]\non_error = \"fail\"\n",
        "out",
        "",
    );
    let engine = BatchEngine::new(BatchPipeline::new(LocalStorage::new(root), out_of_range));
    let err = engine.preview().await.unwrap_err();
    assert!(matches!(err, RomanError::OutOfRange { value: 42, .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!temp_dir.path().join("out").exists());
}
