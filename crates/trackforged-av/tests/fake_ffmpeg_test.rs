//! End-to-end extraction through a real process, using a shell script in
//! place of ffmpeg.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use trackforged_av::actions::{SegmentExtractor, Strategy};
use trackforged_parser::parse_splits;

/// Fails every `-c copy` invocation and writes its last argument otherwise.
/// Each invocation is appended to `calls.log` next to the script.
fn install_fake_ffmpeg(dir: &Path) -> PathBuf {
    let script = dir.join("ffmpeg");
    let log = dir.join("calls.log");
    let body = format!(
        r#"#!/bin/sh
echo "$*" >> "{log}"
for last; do :; done
case " $* " in
  *" -c copy "*) echo "copy not possible" >&2; exit 1 ;;
esac
printf 'audio' > "$last"
"#,
        log = log.display()
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[test]
fn test_fallback_through_process() {
    let tools = tempdir().unwrap();
    let out = tempdir().unwrap();
    let ffmpeg = install_fake_ffmpeg(tools.path());

    let cuts = parse_splits("0:00-0:30=A,0:30-1:00=B", None).unwrap();
    let report =
        SegmentExtractor::new(&ffmpeg).extract(Path::new("in.m4a"), out.path(), "Mix", &cuts);

    assert!(report.is_complete());
    assert_eq!(report.segments.len(), 2);
    assert!(report.segments.iter().all(|s| s.strategy == Strategy::Reencode));
    for seg in &report.segments {
        assert_eq!(fs::read(&seg.path).unwrap(), b"audio");
    }

    let log = fs::read_to_string(tools.path().join("calls.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("-c copy"));
    assert!(lines[1].contains("-c:a aac -b:a 192k"));
}
