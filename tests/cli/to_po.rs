use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const EN: &str = r#"/* Tab bar */
"_files_" = "Files";
"_favorites_" = "Favorites";
"_todo_" = "";
"#;

const ZH: &str = r#"/* Tab bar */
"_files_" = "檔案";
"_favorites_" = "我的最愛";
"#;

#[test]
fn test_to_po_writes_both_catalogs() -> Result<()> {
    let test = CliTest::with_default_layout(EN, ZH)?;

    let output = test.to_po_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Wrote locales/en.po (3 entries)\n\u{2713} Wrote locales/zh_Hant.po (2 entries)\n"
    );

    let en = test.read_file("locales/en.po")?;
    assert!(en.starts_with("#\nmsgid \"\"\nmsgstr \"\"\n\"Project-Id-Version: 1.0\\n\"\n"));
    assert!(en.contains("\"Language-Team: English <yourteam@example.com>\\n\""));
    assert!(en.contains("msgid \"_todo_\"\nmsgstr \"\"\n"));
    assert!(en.ends_with("msgid \"_todo_\"\nmsgstr \"\"\n"));

    let zh = test.read_file("locales/zh_Hant.po")?;
    assert!(zh.contains("\"Language-Team: zh_Hant <yourteam@example.com>\\n\""));
    assert!(zh.contains("msgid \"_favorites_\"\nmsgstr \"我的最愛\"\n"));

    Ok(())
}

#[test]
fn test_to_po_overwrites_existing_catalog() -> Result<()> {
    let test = CliTest::with_default_layout(EN, ZH)?;
    test.write_file("locales/en.po", "msgid \"stale\"\nmsgstr \"Stale\"\n")?;

    let output = test.to_po_command().output()?;
    assert!(output.status.success());

    let en = test.read_file("locales/en.po")?;
    assert!(!en.contains("stale"));
    assert!(en.contains("msgid \"_files_\""));

    Ok(())
}

#[test]
fn test_to_po_missing_input_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(crate::EN_STRINGS_PATH, EN)?;
    std::fs::create_dir_all(test.root().join("locales"))?;

    let output = test.to_po_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read strings file:"));
    assert!(stderr(&output).contains("zh-Hant-TW.lproj"));
    assert!(!test.root().join("locales/en.po").exists());
    assert!(!test.root().join("locales/zh_Hant.po").exists());

    Ok(())
}

#[test]
fn test_to_po_missing_output_directory_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(crate::EN_STRINGS_PATH, EN)?;
    test.write_file(crate::ZH_STRINGS_PATH, ZH)?;

    let output = test.to_po_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write catalog"));

    Ok(())
}

#[test]
fn test_to_po_empty_tables() -> Result<()> {
    let test = CliTest::with_default_layout("/* nothing here */\n", "")?;

    let output = test.to_po_command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Wrote locales/en.po (0 entries)"));

    let en = test.read_file("locales/en.po")?;
    assert!(en.ends_with("\"Content-Transfer-Encoding: 8bit\\n\"\n"));

    Ok(())
}

#[test]
fn test_to_po_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ja.lproj/Localizable.strings", "\"ok\" = \"了解\";\n")?;
    test.write_file("po/.keep", "")?;
    test.write_file(
        ".strporc.json",
        r#"{ "locales": [{ "title": "Japanese", "strings": "ja.lproj/Localizable.strings", "catalog": "po/ja.po" }] }"#,
    )?;

    let output = test.to_po_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "\u{2713} Wrote po/ja.po (1 entry)\n");

    let ja = test.read_file("po/ja.po")?;
    assert!(ja.contains("Language-Team: Japanese <yourteam@example.com>"));
    assert!(ja.contains("msgid \"ok\"\nmsgstr \"了解\"\n"));

    Ok(())
}

#[test]
fn test_to_po_with_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(&format!("app/{}", crate::EN_STRINGS_PATH), EN)?;
    test.write_file(&format!("app/{}", crate::ZH_STRINGS_PATH), ZH)?;
    test.write_file("app/locales/.keep", "")?;

    let output = test.to_po_command().args(["--root", "app"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("app/locales/en.po").exists());
    assert!(test.root().join("app/locales/zh_Hant.po").exists());

    Ok(())
}

#[test]
fn test_to_po_invalid_config() -> Result<()> {
    let test = CliTest::with_default_layout(EN, ZH)?;
    test.write_file(".strporc.json", "{ not json")?;

    let output = test.to_po_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
