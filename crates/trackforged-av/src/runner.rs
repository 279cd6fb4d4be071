//! Process execution seam for external tools.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of one external tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// A clean exit.
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    /// A non-zero exit with the given stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stderr: stderr.into(),
        }
    }
}

/// Runs an external program to completion.
///
/// The extractor only talks to the media tool through this trait, so tests
/// can substitute a recording fake.
pub trait ToolRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<ToolOutput>;
}

/// Runs programs with [`std::process::Command`], blocking until exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<ToolOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, program: &Path, args: &[OsString]) -> std::io::Result<ToolOutput> {
        (**self).run(program, args)
    }
}
