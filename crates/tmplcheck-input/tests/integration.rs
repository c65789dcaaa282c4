//! Integration tests for tmplcheck-input.
//!
//! These exercise full chains the way the CLI builds them: inline argument,
//! then file, then stdin, then a default.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tmplcheck_input::{
    ArgSource, FileSource, InputChain, InputError, InputSourceKind, MockStdin, PayloadKind,
    StdinSource,
};

fn data_chain(inline: Option<&str>, file: Option<PathBuf>, stdin: MockStdin) -> InputChain {
    InputChain::new(PayloadKind::Data)
        .try_source(ArgSource::new(inline.map(str::to_string)))
        .try_source(FileSource::new(file, PayloadKind::Data))
        .try_source(StdinSource::with_reader(stdin))
        .default("{}")
}

#[test]
fn inline_argument_wins() {
    let resolved = data_chain(Some("a: 1"), None, MockStdin::piped("b: 2"))
        .resolve()
        .unwrap();
    assert_eq!(resolved.value, "a: 1");
    assert_eq!(resolved.source, InputSourceKind::Arg);
}

#[test]
fn file_is_read_when_no_inline_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.yml");
    fs::write(&path, "name: ada\n").unwrap();

    let resolved = data_chain(None, Some(path), MockStdin::terminal())
        .resolve()
        .unwrap();
    assert_eq!(resolved.value, "name: ada\n");
    assert_eq!(resolved.source, InputSourceKind::File);
}

#[test]
fn stdin_used_when_nothing_else_given() {
    let resolved = data_chain(None, None, MockStdin::piped("[1, 2]"))
        .resolve()
        .unwrap();
    assert_eq!(resolved.source, InputSourceKind::Stdin);
}

#[test]
fn default_used_for_terminal_stdin() {
    let resolved = data_chain(None, None, MockStdin::terminal())
        .resolve()
        .unwrap();
    assert_eq!(resolved.value, "{}");
    assert_eq!(resolved.source, InputSourceKind::Default);
}

#[test]
fn disallowed_file_aborts_chain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.toml");
    fs::write(&path, "a = 1").unwrap();

    let err = data_chain(None, Some(path), MockStdin::piped("ignored"))
        .resolve()
        .unwrap_err();
    assert!(matches!(
        err,
        InputError::DisallowedExtension {
            kind: PayloadKind::Data,
            ..
        }
    ));
}

#[test]
fn template_without_any_source_is_an_error() {
    let err = InputChain::new(PayloadKind::Template)
        .try_source(ArgSource::new(None))
        .try_source(StdinSource::with_reader(MockStdin::terminal()))
        .resolve()
        .unwrap_err();
    assert_eq!(err.to_string(), "No template provided");
}
