use std::ffi::OsString;
use std::path::Path;

use mockall::{Sequence, mock};
use nodeplan_static::extract::{DockerExecutor, DockerExtractor, ExtractError, ImageExtractor};

mock! {
    Executor {}

    impl DockerExecutor for Executor {
        fn exec(&self, args: &[OsString]) -> Result<String, ExtractError>;
    }
}

fn argv(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

fn subcommand_is(args: &[OsString], name: &str) -> bool {
    args.first().is_some_and(|a| a.to_string_lossy() == name)
}

fn cp_failed() -> ExtractError {
    ExtractError::CommandFailed {
        args: vec!["cp".to_owned()],
        stderr: "Could not find the file /src/dist in container".to_owned(),
    }
}

fn rm_failed() -> ExtractError {
    ExtractError::CommandFailed {
        args: vec!["rm".to_owned()],
        stderr: "Error response from daemon: removal already in progress".to_owned(),
    }
}

// ── Happy path ──

#[test]
fn extract_runs_create_cp_rm_in_order() {
    let mut mock = MockExecutor::new();
    let mut seq = Sequence::new();

    mock.expect_exec()
        .withf(|args| argv(args) == ["create", "img:1", "sh"])
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(|args| argv(args) == ["cp", "abc123:/src/dist/.", "/tmp/out"])
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(String::new()));
    mock.expect_exec()
        .withf(|args| argv(args) == ["rm", "-f", "abc123"])
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("abc123\n".to_owned()));

    let extractor = DockerExtractor::with_executor(mock);
    extractor
        .copy_from_image("img:1", "/src/dist", Path::new("/tmp/out"))
        .unwrap();
}

#[test]
fn extract_trailing_slash_in_source_is_not_doubled() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "cp"))
        .times(1)
        .returning(|args| {
            assert_eq!(argv(args)[1], "abc123:/usr/share/nginx/html/static/.");
            Ok(String::new())
        });
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "rm"))
        .returning(|_| Ok(String::new()));

    DockerExtractor::with_executor(mock)
        .copy_from_image("img", "/usr/share/nginx/html/static/", Path::new("/tmp/out"))
        .unwrap();
}

// ── Container cleanup ──

#[test]
fn extract_removes_container_after_failed_copy() {
    let mut mock = MockExecutor::new();
    let mut seq = Sequence::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "cp"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(cp_failed()));
    mock.expect_exec()
        .withf(|args| argv(args) == ["rm", "-f", "abc123"])
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(String::new()));

    let result = DockerExtractor::with_executor(mock).copy_from_image(
        "img",
        "/src/dist",
        Path::new("/tmp/out"),
    );

    match result {
        Err(ExtractError::CommandFailed { stderr, .. }) => {
            assert!(stderr.contains("/src/dist"), "got: {stderr}");
        }
        other => panic!("expected cp failure, got {other:?}"),
    }
}

#[test]
fn extract_removal_failure_does_not_fail_copy() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "cp"))
        .returning(|_| Ok(String::new()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "rm"))
        .times(1)
        .returning(|_| Err(rm_failed()));

    let result = DockerExtractor::with_executor(mock).copy_from_image(
        "img",
        "/src/dist",
        Path::new("/tmp/out"),
    );

    assert!(result.is_ok(), "got: {result:?}");
}

#[test]
fn extract_removal_failure_keeps_copy_error() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "cp"))
        .returning(|_| Err(cp_failed()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "rm"))
        .times(1)
        .returning(|_| Err(rm_failed()));

    let err = DockerExtractor::with_executor(mock)
        .copy_from_image("img", "/src/dist", Path::new("/tmp/out"))
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("Could not find the file"), "got: {msg}");
    assert!(!msg.contains("removal already in progress"), "got: {msg}");
}

// ── Create failures ──

#[test]
fn extract_empty_container_id_is_an_error() {
    let mut mock = MockExecutor::new();

    // no cp or rm expectations: any further call fails the test
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .times(1)
        .returning(|_| Ok("  \n".to_owned()));

    let result = DockerExtractor::with_executor(mock).copy_from_image(
        "img:broken",
        "/src/dist",
        Path::new("/tmp/out"),
    );

    match result {
        Err(ExtractError::NoContainerId { image }) => assert_eq!(image, "img:broken"),
        other => panic!("expected NoContainerId, got {other:?}"),
    }
}

#[test]
fn extract_create_failure_skips_copy_and_removal() {
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .times(1)
        .returning(|_| {
            Err(ExtractError::NotFound {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });

    let result = DockerExtractor::with_executor(mock).copy_from_image(
        "img",
        "/src/dist",
        Path::new("/tmp/out"),
    );

    assert!(matches!(result, Err(ExtractError::NotFound { .. })));
}

// ── Destination paths ──

#[cfg(unix)]
#[test]
fn extract_passes_non_utf8_destination_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dst = Path::new(OsStr::from_bytes(b"/tmp/out-\xff/static"));
    let expected = dst.as_os_str().to_owned();
    let mut mock = MockExecutor::new();

    mock.expect_exec()
        .withf(|args| subcommand_is(args, "create"))
        .returning(|_| Ok("abc123\n".to_owned()));
    mock.expect_exec()
        .withf(move |args| subcommand_is(args, "cp") && args.get(2) == Some(&expected))
        .times(1)
        .returning(|_| Ok(String::new()));
    mock.expect_exec()
        .withf(|args| subcommand_is(args, "rm"))
        .returning(|_| Ok(String::new()));

    DockerExtractor::with_executor(mock)
        .copy_from_image("img", "/src/dist", dst)
        .unwrap();
}
