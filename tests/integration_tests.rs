use anyhow::Result;
use employee_directory::{
    CliConfig, DirectoryError, DirectoryPipeline, EtlEngine, LocalStorage, RunOutcome, TomlConfig,
};
use tempfile::TempDir;

const PAYLOAD: &str = r#"{
    "department_employees": [
        {
            "department_name": "Administration",
            "employees": [
                {"contact_name": "Jane Doe", "employee_position": "Manager",
                 "office_number": "555-123-4567", "email_address": "jane@x.com"},
                {"contact_name": "  John Roe ", "employee_position": "",
                 "office_number": "+1 (555) 987-6543", "email_address": null}
            ]
        },
        {
            "department_name": "Facilities",
            "employees": [
                {"contact_name": "Ana Lima", "employee_position": "Custodian",
                 "office_number": "ext. 204", "email_address": "ana@x.com"},
                {"contact_name": "Jane Doe", "employee_position": "Manager",
                 "office_number": "555-123-4567", "email_address": "jane@x.com"}
            ]
        }
    ]
}"#;

const EXPECTED: &str = "## Employee Phone Number Directory

    Jane Doe
Manager
Office: (555) 123-4567
Email: jane@x.com

    John Roe
Office: (555) 987-6543

    Ana Lima
Custodian
Office: ext. 204
Email: ana@x.com
";

fn cli_config(input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: Some(input.to_string()),
        output_path: Some(output.to_string()),
        ..CliConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_writes_directory_markdown() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join("payload.json"), PAYLOAD)?;

    let storage = LocalStorage::new(root);
    let pipeline = DirectoryPipeline::new(storage, cli_config("payload.json", "out"));
    let outcome = EtlEngine::new(pipeline).run().await?;

    let RunOutcome::Written { paths, markdown } = outcome else {
        panic!("expected the directory to be written");
    };
    assert_eq!(paths, vec!["out/directory.md".to_string()]);
    assert_eq!(markdown, EXPECTED);

    let on_disk = std::fs::read_to_string(temp_dir.path().join("out/directory.md"))?;
    assert_eq!(on_disk, markdown);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_table_and_pretty_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join("payload.json"), PAYLOAD)?;

    let mut config = cli_config("payload.json", "out");
    config.table = true;
    config.pretty_json = true;

    let pipeline = DirectoryPipeline::new(LocalStorage::new(root), config);
    let outcome = EtlEngine::new(pipeline).run().await?;

    let RunOutcome::Written { paths, .. } = outcome else {
        panic!("expected files to be written");
    };
    assert_eq!(paths.len(), 3);

    let table = std::fs::read_to_string(temp_dir.path().join("out/directory.csv"))?;
    let mut reader = csv::Reader::from_reader(table.as_bytes());
    let headers = reader.headers()?.clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Name", "Position", "Office", "Email"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][0], "John Roe");
    assert_eq!(&rows[1][2], "(555) 987-6543");
    assert_eq!(&rows[2][2], "ext. 204");

    let pretty = std::fs::read_to_string(temp_dir.path().join("out/payload.pretty.json"))?;
    let original: serde_json::Value = serde_json::from_str(PAYLOAD)?;
    let reparsed: serde_json::Value = serde_json::from_str(&pretty)?;
    assert_eq!(original, reparsed);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_payload_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join("payload.json"), r#"{"departments": []}"#)?;

    let pipeline = DirectoryPipeline::new(LocalStorage::new(root), cli_config("payload.json", "out"));
    let outcome = EtlEngine::new(pipeline).run().await?;

    assert_eq!(outcome, RunOutcome::NoEntries { paths: vec![] });
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_payload_still_writes_pretty_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    let payload = r#"{"department_employees":[{"employees":[{"contact_name":" "}]}]}"#;
    std::fs::write(temp_dir.path().join("payload.json"), payload)?;

    let mut config = cli_config("payload.json", "out");
    config.pretty_json = true;

    let pipeline = DirectoryPipeline::new(LocalStorage::new(root), config);
    let outcome = EtlEngine::new(pipeline).run().await?;

    assert_eq!(
        outcome,
        RunOutcome::NoEntries {
            paths: vec!["out/payload.pretty.json".to_string()]
        }
    );
    assert!(!temp_dir.path().join("out/directory.md").exists());

    let pretty = std::fs::read_to_string(temp_dir.path().join("out/payload.pretty.json"))?;
    let original: serde_json::Value = serde_json::from_str(payload)?;
    let reparsed: serde_json::Value = serde_json::from_str(&pretty)?;
    assert_eq!(original, reparsed);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_malformed_payload_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join("payload.json"), "not json")?;

    let pipeline = DirectoryPipeline::new(LocalStorage::new(root), cli_config("payload.json", "out"));
    let err = EtlEngine::new(pipeline).run().await.unwrap_err();

    match err {
        DirectoryError::MalformedInput { message } => assert!(!message.is_empty()),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().to_string_lossy().into_owned();
    std::fs::write(temp_dir.path().join("employees.json"), PAYLOAD)?;

    let config_path = temp_dir.path().join("directory.toml");
    std::fs::write(
        &config_path,
        r#"
[input]
path = "employees.json"

[output]
path = "site"
file_name = "phones.md"
table = true
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let pipeline = DirectoryPipeline::new(LocalStorage::new(root), config);
    let outcome = EtlEngine::new(pipeline).run().await?;

    let RunOutcome::Written { paths, markdown } = outcome else {
        panic!("expected the directory to be written");
    };
    assert_eq!(
        paths,
        vec!["site/phones.md".to_string(), "site/phones.csv".to_string()]
    );
    assert_eq!(markdown, EXPECTED);
    let on_disk = std::fs::read_to_string(temp_dir.path().join("site/phones.md"))?;
    assert_eq!(on_disk, EXPECTED);
    Ok(())
}
