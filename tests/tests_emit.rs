#![allow(clippy::unwrap_used)]

use cthunk::{EmitOptions, Emitter, PLACEHOLDER, PlatformLayout, PlatformType, generate_to_file};
use rstest::rstest;

fn standard_layout() -> PlatformLayout {
    PlatformLayout {
        types: [
            PlatformType::unsigned("mode_t", 4),
            PlatformType::unsigned("ino_t", 8),
            PlatformType::unsigned("dev_t", 8),
            PlatformType::unsigned("nlink_t", 8),
            PlatformType::unsigned("uid_t", 4),
            PlatformType::unsigned("gid_t", 4),
            PlatformType::unsigned("off_t", 8),
            PlatformType::unsigned("loff_t", 8),
            PlatformType::unsigned("blksize_t", 8),
            PlatformType::unsigned("blkcnt_t", 8),
            PlatformType::signed("time_t", 8),
        ],
        stat_size: 144,
        unsigned_int: 4,
        unsigned_long: 8,
    }
}

/// Run the emitter and collect (stdout, stderr, error count).
fn emit(layout: &PlatformLayout) -> (String, String, u32) {
    let mut emitter = Emitter::new(Vec::new(), Vec::new());
    let errors = emitter.emit(layout).unwrap();
    let (out, diag) = emitter.into_parts();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
        errors,
    )
}

fn top_level_aliases(out: &str) -> usize {
    out.lines().filter(|l| l.starts_with("alias ")).count()
}

fn nested_aliases(out: &str) -> usize {
    out.lines().filter(|l| l.starts_with("    alias ")).count()
}

#[test]
fn test_standard_platform() {
    let (out, diag, errors) = emit(&standard_layout());
    assert!(out.contains("alias mode_t = uint;"));
    assert!(out.contains("alias ino_t = ulong;"));
    assert!(out.contains("alias time_t = long;"));
    assert!(out.contains("enum sizeofStructStat = 144;"));
    assert!(diag.is_empty());
    assert_eq!(errors, 0);
}

#[test]
fn test_three_byte_dev_t() {
    let mut layout = standard_layout();
    layout.set_width("dev_t", 3);

    let (out, diag, errors) = emit(&layout);
    assert!(out.contains(&format!("alias dev_t = {PLACEHOLDER};")));
    assert_eq!(diag, "Error: unsupported unsigned type size 3\n");
    assert_eq!(errors, 1);
    // the rest of the module is still there
    assert!(out.contains("alias nlink_t = ulong;"));
    assert!(out.ends_with("}\n"));
}

#[rstest]
#[case(&[])]
#[case(&["mode_t"])]
#[case(&["ino_t", "time_t"])]
#[case(&["uid_t", "gid_t", "off_t", "blkcnt_t"])]
fn test_line_counts_and_exit_status(#[case] broken: &[&str]) {
    let mut layout = standard_layout();
    for name in broken {
        assert!(layout.set_width(name, 6));
    }

    let (out, diag, errors) = emit(&layout);
    assert_eq!(top_level_aliases(&out), 11);
    assert_eq!(nested_aliases(&out), 2);
    assert_eq!(errors as usize, broken.len());
    assert_eq!(diag.lines().count(), errors as usize);
}

#[test]
fn test_every_width_unsupported() {
    let mut layout = standard_layout();
    for ty in layout.types.iter_mut() {
        ty.width = 5;
    }
    layout.unsigned_int = 5;
    layout.unsigned_long = 5;

    let (out, diag, errors) = emit(&layout);
    assert_eq!(errors, 13);
    assert_eq!(diag.lines().count(), 13);
    assert_eq!(out.matches(PLACEHOLDER).count(), 13);
}

#[test]
fn test_header_structure() {
    let (out, _, _) = emit(&standard_layout());
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "/**");
    assert_eq!(lines[2], "*/");
    assert_eq!(lines[3], "module mar.linux.cthunk;");
    assert_eq!(lines[4], "");
    assert!(lines[5].starts_with("alias mode_t "));
    assert!(lines[15].starts_with("alias time_t "));
    assert_eq!(lines[16], "");
    assert!(lines[17].starts_with("// "));
    assert!(lines[18].starts_with("// "));
    assert_eq!(lines[20], "struct kernel");
}

#[test]
fn test_host_output_is_deterministic() {
    let host = PlatformLayout::host();
    let first = emit(&host);
    let second = emit(&host);
    assert_eq!(first, second);
}

#[test]
fn test_host_output_shape() {
    let (out, diag, errors) = emit(&PlatformLayout::host());
    assert_eq!(top_level_aliases(&out), 11);
    assert_eq!(nested_aliases(&out), 2);
    assert_eq!(diag.lines().count(), errors as usize);
    let stat = format!(
        "enum sizeofStructStat = {};",
        std::mem::size_of::<libc::stat>()
    );
    assert!(out.contains(&stat));
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cthunk.d");

    let errors = generate_to_file(&path, EmitOptions::default()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    let (expected, _, expected_errors) = emit(&PlatformLayout::host());
    assert_eq!(written, expected);
    assert_eq!(errors, expected_errors);
}

#[test]
fn test_binary_exit_status_matches_diagnostics() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_gencthunk"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let (expected, _, errors) = emit(&PlatformLayout::host());

    assert_eq!(stdout, expected);
    assert_eq!(output.status.code(), Some(errors as i32));
    assert_eq!(
        stderr.lines().filter(|l| l.starts_with("Error: ")).count(),
        errors as usize
    );
}
