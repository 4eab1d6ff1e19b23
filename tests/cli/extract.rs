use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_extract_single_file() -> Result<()> {
    let test = CliTest::with_file(
        "main.c",
        "// header\nint main() {\n    return 0; /* done */\n}\n",
    )?;

    let output = test.command().arg("main.c").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "main.c:1: // header\nmain.c:3: /* done */\n"
    );
    Ok(())
}

#[test]
fn test_comment_free_file_prints_nothing() -> Result<()> {
    let test = CliTest::with_file("quiet.c", "int x = 1;\nint y = 2;\n")?;

    let output = test.command().arg("quiet.c").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "");
    Ok(())
}

#[test]
fn test_string_literal_suppression() -> Result<()> {
    let test = CliTest::with_file("strings.c", "x = \"// not a comment\"; // real\n")?;

    let output = test.command().arg("strings.c").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "strings.c:1: // real\n");
    Ok(())
}

#[test]
fn test_unterminated_comment_exits_with_failure() -> Result<()> {
    let test = CliTest::with_file("broken.c", "int x;\n/* never closes\n")?;

    let output = test.command().arg("broken.c").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "error: unterminated multi-line comment starting on line 2\n  --> broken.c\n"
    );
    Ok(())
}

#[test]
fn test_missing_file_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nope.c").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("failed to read nope.c"));
    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("a.c", "// one\n/* two\nlines */\n")?;

    let output = test.command().args(["a.c", "--format", "json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(
        parsed,
        serde_json::json!([{
            "path": "a.c",
            "comments": [
                { "text": " one", "line": 1, "multiline": false },
                { "text": " two\nlines ", "line": 2, "multiline": true },
            ],
        }])
    );
    Ok(())
}

#[test]
fn test_directory_mode() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.c", "// in a\n")?;
    test.write_file("src/b.c", "/* in b */\n")?;
    test.write_file("src/skip.txt", "// not a source file\n")?;

    let output = test.command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "src/a.c:1: // in a\nsrc/b.c:1: /* in b */\n"
    );
    Ok(())
}

#[test]
fn test_directory_mode_reports_per_file_failures() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/good.c", "// fine\n")?;
    test.write_file("src/zbad.c", "/* open\n")?;

    let output = test.command().arg("src").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "src/good.c:1: // fine\n\
         error: unterminated multi-line comment starting on line 1\n  --> src/zbad.c\n"
    );
    Ok(())
}

#[test]
fn test_multiline_only_filter() -> Result<()> {
    let test = CliTest::with_file("a.c", "// line\n/* block */\n")?;

    let output = test.command().args(["a.c", "--multiline-only"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "a.c:2: /* block */\n");
    Ok(())
}

#[test]
fn test_verbose_summary_on_stderr() -> Result<()> {
    let test = CliTest::with_file("a.c", "// one\n")?;

    let output = test.command().args(["a.c", "--verbose"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("1 comments in 1 files"));
    Ok(())
}

#[test]
fn test_help_runs() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("--format"));
    Ok(())
}
