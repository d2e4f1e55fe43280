use std::fs;

use pretty_assertions::assert_eq;
use quill::{Context, parse_and_execute};
use walkdir::WalkDir;

/// Runs each line in a fresh buffered session and returns
/// `(output, diagnostics)`.
fn run(src: &str) -> (String, String) {
    let mut context = Context::buffered();
    for line in src.lines() {
        parse_and_execute(&mut context, line);
    }
    (context.printer.output().to_string(), context.printer.diagnostics().to_string())
}

fn assert_output(src: &str, expected: &str) {
    let (output, diagnostics) = run(src);
    assert!(diagnostics.is_empty(), "Script reported errors:\n{diagnostics}");
    assert_eq!(output, expected);
}

fn assert_reports(src: &str, needle: &str) -> String {
    let (output, diagnostics) = run(src);
    assert!(diagnostics.contains(needle),
            "Expected a report containing {needle:?}, got:\n{diagnostics}");
    output
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let (output, diagnostics) = run(&code);
            assert!(diagnostics.is_empty(),
                    "Example {} in {:?} reported errors:\n{}\nErrors:\n{}",
                    i + 1,
                    path,
                    code,
                    diagnostics);
            if let Some(expected) = expected {
                assert_eq!(output, expected, "Example {} in {:?}:\n{}", i + 1, path, code);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

/// Collects every ```quill block, paired with the ```text block that
/// directly follows it, if any.
fn extract_examples(content: &str) -> Vec<(String, Option<String>)> {
    let mut blocks: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        match current.as_mut() {
            None => {
                if let Some(lang) = trimmed.strip_prefix("```") {
                    current = Some((lang.trim().to_string(), String::new()));
                }
            },
            Some(_) if trimmed.starts_with("```") => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            },
            Some((_, buf)) => {
                buf.push_str(line);
                buf.push('\n');
            },
        }
    }

    let mut examples = Vec::new();
    let mut iter = blocks.into_iter().peekable();
    while let Some((lang, code)) = iter.next() {
        if lang != "quill" {
            continue;
        }
        let expected = match iter.peek() {
            Some((next, _)) if next == "text" => iter.next().map(|(_, text)| text),
            _ => None,
        };
        examples.push((code, expected));
    }
    examples
}

#[test]
fn assignment_then_print() {
    assert_output("x = 5\nprint(x)", "5\n");
}

#[test]
fn conditional_on_equality() {
    assert_output("if (3 == 3): print(\"yes\")", "yes\n");
}

#[test]
fn call_discards_variables_created_by_the_body() {
    assert_output("def add(a, b): x = a + b\nadd(2, 3)\nprint(x)", "0\n");
}

#[test]
fn unassigned_variable_reads_zero() {
    assert_output("print(y)", "0\n");
}

#[test]
fn undefined_function_is_reported_once_and_print_still_runs() {
    let (output, diagnostics) = run("print(foo())");

    assert_eq!(diagnostics.matches("Undefined function: foo").count(), 1);
    assert_eq!(diagnostics.lines().count(), 1);
    assert_eq!(output, "null\n");
}

#[test]
fn session_survives_every_kind_of_error() {
    let output = assert_reports("x = 1 $\nprint(x\nprint(1 / 0)\nprint((\"a\") + 1)\nprint(x)",
                                "Illegal character '$'");

    assert_eq!(output, "0\n1\n");
}

#[test]
fn redefinition_uses_latest_body() {
    assert_output("def f(): print(1)\ndef f(): print(2)\nf()\nf()", "2\n2\n");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print(1 + 2 * 3)\nprint((1 + 2) * 3)\nprint(10 - 4 - 3)\nprint(5-3)\nprint(5 - -3)",
                  "7\n9\n3\n2\n8\n");
}

#[test]
fn syntax_error_runs_nothing_from_the_line() {
    let output = assert_reports("print(1) print(2) )", "Unexpected token ')'");
    assert_eq!(output, "");
}

#[test]
fn diagnostics_name_the_session_line() {
    assert_reports("x = 1\ny = 2\nprint(1 / 0)", "Error on line 3: Division by zero");
}
