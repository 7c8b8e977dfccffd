//! Shared helpers for CLI specs

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Settings that keep a full lifecycle run under a few seconds
pub const FAST_RUN: &[&str] = &[
    "--window",
    "500ms",
    "--interval",
    "100ms",
    "--retry-wait",
    "100ms",
    "--poll-interval",
    "100ms",
    "--action-delay",
    "10ms",
    "--no-log-file",
];

/// A quote body with the suggested fee in the medium tier
pub fn quote(fee: f64) -> String {
    format!(
        r#"{{"estimatedBaseFee":"{:.2}","medium":{{"suggestedMaxFeePerGas":"{}","suggestedMaxPriorityFeePerGas":"1.5"}}}}"#,
        fee * 0.9,
        fee
    )
}

/// One scripted HTTP response
#[derive(Clone)]
pub enum Reply {
    Ok(String),
    Status(u16),
}

/// Stub fee endpoint on an ephemeral local port.
///
/// Replies follow the script in order; the last entry repeats forever.
pub struct FeeServer {
    url: String,
    hits: Arc<AtomicUsize>,
}

impl FeeServer {
    pub fn start(script: Vec<Reply>) -> Self {
        assert!(!script.is_empty(), "script needs at least one reply");
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/networks/1/suggestedGasFees",
            listener.local_addr().unwrap()
        );
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);

                let n = counter.fetch_add(1, Ordering::SeqCst);
                let reply = &script[n.min(script.len() - 1)];
                let (status, body) = match reply {
                    Reply::Ok(body) => ("200 OK".to_string(), body.clone()),
                    Reply::Status(code) => (format!("{code} Error"), "{}".to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { url, hits }
    }

    /// Server answering every request with the same fee
    pub fn constant(fee: f64) -> Self {
        Self::start(vec![Reply::Ok(quote(fee))])
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// A URL nothing listens on
pub fn dead_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}/suggestedGasFees")
}

/// Temporary working directory for one run
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn gaswatch(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("gaswatch").unwrap();
        cmd.current_dir(self.dir.path())
            .env("RUST_LOG", "info")
            .timeout(std::time::Duration::from_secs(60));
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        RunAssert {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> RunAssert {
        RunAssert {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct RunAssert {
    assert: Assert,
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(needle)),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stderr(predicate::str::contains(needle)),
        }
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        let stdout = &self.assert.get_output().stdout;
        serde_json::from_slice(stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\n{}",
                String::from_utf8_lossy(stdout)
            )
        })
    }
}
