use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .strporc.json\n");

    let content = test.read_file(".strporc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    let locales = parsed["locales"]
        .as_array()
        .context("Config should have a 'locales' array")?;
    assert_eq!(locales.len(), 2);
    assert_eq!(locales[1]["catalog"], "locales/zh_Hant.po");
    assert_eq!(locales[1]["syncBack"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".strporc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".strporc.json already exists"));
    assert_eq!(test.read_file(".strporc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_default_layout("\"a\" = \"A\";\n", "\"a\" = \"甲\";\n")?;

    test.command().arg("init").output()?;

    let output = test.to_po_command().output()?;
    assert!(
        output.status.success(),
        "to-po should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("locales/zh_Hant.po").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("to-po"));
    assert!(stdout(&output).contains("to-strings"));

    Ok(())
}
