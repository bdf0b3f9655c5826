use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn copyforge() -> Command {
    Command::cargo_bin("copyforge").expect("binary builds")
}

#[test]
fn generate_from_flags_writes_markdown_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let assert = copyforge()
        .args([
            "generate",
            "--topic",
            "AI content marketing strategies",
            "--primary-keyword",
            "AI content marketing",
            "--secondary-keywords",
            "content automation, editorial calendar",
            "--audience",
            "B2B marketers",
            "--tone",
            "conversational",
            "--length",
            "short",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.starts_with("# "));
    assert!(stdout.contains("AI content marketing"));
    assert!(stdout.contains("content automation"));
    assert!(stdout.contains("editorial calendar"));
    assert!(stdout.trim_end().ends_with("**Subscribe for more insights**"));

    Ok(())
}

#[test]
fn generate_is_deterministic_across_invocations() -> Result<(), Box<dyn std::error::Error>> {
    let run = || -> Result<String, Box<dyn std::error::Error>> {
        let assert = copyforge()
            .args([
                "generate",
                "--topic",
                "Observability on a budget",
                "--primary-keyword",
                "observability",
                "--audience",
                "platform engineers",
            ])
            .assert()
            .success();
        Ok(String::from_utf8(assert.get_output().stdout.clone())?)
    };

    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn generate_from_brief_file_writes_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let brief = dir.path().join("brief.yml");
    fs::write(
        &brief,
        r#"
topic: "AI content marketing strategies"
primary_keyword: "AI content marketing"
secondary_keywords: "content automation"
target_audience: "B2B marketers"
tone: technical
length: short
call_to_action: "Book a demo"
"#,
    )?;

    let md_path = dir.path().join("article.md");
    let html_path = dir.path().join("article.html");

    copyforge()
        .args([
            "generate",
            "--brief",
            brief.to_str().unwrap(),
            "--output",
            md_path.to_str().unwrap(),
            "--html",
            html_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let markdown = fs::read_to_string(&md_path)?;
    assert!(markdown.trim_end().ends_with("**Book a demo**"));

    let html = fs::read_to_string(&html_path)?;
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<h1>"));
    assert!(html.contains("AI content marketing"));

    Ok(())
}

#[test]
fn flags_override_brief_file_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let brief = dir.path().join("brief.yml");
    fs::write(
        &brief,
        r#"
topic: "AI content marketing strategies"
primary_keyword: "AI content marketing"
target_audience: "B2B marketers"
call_to_action: "Book a demo"
"#,
    )?;

    let assert = copyforge()
        .args([
            "generate",
            "--brief",
            brief.to_str().unwrap(),
            "--cta",
            "Download the guide",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.trim_end().ends_with("**Download the guide**"));

    Ok(())
}

#[test]
fn unknown_tone_in_brief_file_fails_fast() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let brief = dir.path().join("brief.yml");
    fs::write(
        &brief,
        r#"
topic: "A topic"
primary_keyword: "a keyword"
target_audience: "someone"
tone: sarcastic
"#,
    )?;

    copyforge()
        .args(["generate", "--brief", brief.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tone"));

    Ok(())
}

#[test]
fn missing_required_field_names_the_field() {
    copyforge()
        .args([
            "generate",
            "--primary-keyword",
            "a keyword",
            "--audience",
            "someone",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic"));
}

#[test]
fn json_output_includes_markdown_and_word_count() -> Result<(), Box<dyn std::error::Error>> {
    let assert = copyforge()
        .args([
            "generate",
            "--topic",
            "AI content marketing strategies",
            "--primary-keyword",
            "AI content marketing",
            "--audience",
            "B2B marketers",
            "--length",
            "short",
            "--json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    assert!(value["markdown"].as_str().unwrap().starts_with("# "));
    assert!(value["words"].as_u64().unwrap() >= 500);
    assert!(value["html"].is_null());

    Ok(())
}

#[test]
fn render_converts_markdown_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let md = dir.path().join("article.md");
    fs::write(&md, "# My Article\n\nSome **bold** text.\n")?;

    let out = dir.path().join("article.html");
    copyforge()
        .args([
            "render",
            md.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&out)?;
    assert!(html.contains("<title>My Article</title>"));
    assert!(html.contains("<strong>bold</strong>"));

    Ok(())
}

#[test]
fn init_scaffolds_a_brief() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    copyforge()
        .args(["init", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let brief = fs::read_to_string(dir.path().join("brief.yml"))?;
    assert!(brief.contains("primary_keyword"));

    // Second run leaves the existing file alone.
    copyforge()
        .args(["init", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    Ok(())
}
