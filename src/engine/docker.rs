//! `docker` CLI transport for the container engine.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;

use crate::error::{DemError, Result};

use super::{ContainerEngine, LogCallback, ProgressCallback, PullProgress};

/// Container engine implementation shelling out to the `docker` binary.
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    /// Create an engine using `docker` from PATH.
    pub fn new() -> Self {
        Self::with_binary("docker")
    }

    /// Create an engine using a specific binary (podman works too).
    pub fn with_binary(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }

    /// Run a docker subcommand to completion, capturing output.
    fn output(&self, args: &[&str]) -> Result<String> {
        tracing::debug!("running {} {}", self.binary, args.join(" "));
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| DemError::Engine {
                message: format!("failed to invoke {}: {}", self.binary, e),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(DemError::Engine {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerEngine for DockerCli {
    fn local_images(&self) -> Result<Vec<String>> {
        let stdout = self.output(&["image", "ls", "--format", "{{.Repository}}:{{.Tag}}"])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.contains("<none>"))
            .map(String::from)
            .collect())
    }

    fn search(&self, term: &str) -> Result<Vec<String>> {
        let stdout = self.output(&["search", "--format", "{{.Name}}", term])?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn pull(&self, name: &str, on_progress: ProgressCallback) -> Result<()> {
        let mut child = Command::new(&self.binary)
            .args(["pull", name])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DemError::Engine {
                message: format!("failed to invoke {}: {}", self.binary, e),
            })?;

        // stdout carries the progress stream; forward events as they arrive
        let stdout = child.stdout.take().expect("stdout piped");
        let reader = BufReader::new(stdout);
        for line in reader.lines().map_while(std::result::Result::ok) {
            if !line.trim().is_empty() {
                on_progress(parse_pull_line(&line));
            }
        }

        let output = child.wait_with_output().map_err(|e| DemError::Engine {
            message: format!("pull of {} failed: {}", name, e),
        })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(DemError::Engine {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    fn run(
        &self,
        image: &str,
        workspace: &Path,
        command: &str,
        privileged: bool,
        on_log: LogCallback,
    ) -> Result<()> {
        let volume = format!("{}:/work", workspace.display());
        let mut args: Vec<&str> = vec!["run", "--rm", "-v", &volume];
        if privileged {
            args.push("--privileged");
        }
        args.push(image);
        args.extend(command.split_whitespace());

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DemError::Engine {
                message: format!("failed to invoke {}: {}", self.binary, e),
            })?;

        let stdout = child.stdout.take().expect("stdout piped");
        let stderr = child.stderr.take().expect("stderr piped");

        // Reader threads feed a channel; the callback itself stays on the
        // calling thread and observes lines in arrival order.
        let (tx, rx) = mpsc::channel();
        let tx_stdout = tx.clone();
        let tx_stderr = tx;

        let stdout_handle = thread::spawn(move || {
            let reader = BufReader::new(stdout);
            for line in reader.lines().map_while(std::result::Result::ok) {
                let _ = tx_stdout.send(line);
            }
        });

        let stderr_handle = thread::spawn(move || {
            let reader = BufReader::new(stderr);
            let mut captured = String::new();
            for line in reader.lines().map_while(std::result::Result::ok) {
                captured.push_str(&line);
                captured.push('\n');
                let _ = tx_stderr.send(line);
            }
            captured
        });

        for line in rx {
            on_log(&line);
        }

        let _ = stdout_handle.join();
        let stderr_output = stderr_handle.join().unwrap_or_default();

        let status = child.wait().map_err(|e| DemError::Engine {
            message: format!("run of {} failed: {}", image, e),
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DemError::Engine {
                message: stderr_output.trim().to_string(),
            })
        }
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.output(&["rmi", name]).map(|_| ())
    }
}

/// Parse one line of `docker pull` output into a progress event.
///
/// Layer lines look like `a3f9c12b4d5e: Downloading [===> ]  1.2MB/5MB`
/// or `a3f9c12b4d5e: Pull complete`; summary lines
/// (`Digest: …`, `Status: …`, `latest: Pulling from …`) carry no layer id.
fn parse_pull_line(line: &str) -> PullProgress {
    if let Some((id, rest)) = line.split_once(": ") {
        if is_layer_id(id) && !rest.is_empty() {
            if let Some(bracket) = rest.find('[') {
                let status = rest[..bracket].trim().to_string();
                let progress = rest
                    .find(']')
                    .map(|end| rest[end + 1..].trim())
                    .unwrap_or("");
                return PullProgress {
                    status,
                    id: Some(id.to_string()),
                    progress: (!progress.is_empty()).then(|| progress.to_string()),
                };
            }
            return PullProgress {
                status: rest.trim().to_string(),
                id: Some(id.to_string()),
                progress: None,
            };
        }
    }

    PullProgress {
        status: line.trim().to_string(),
        id: None,
        progress: None,
    }
}

/// Docker layer ids are short hex digests.
fn is_layer_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() <= 16
        && candidate.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layer_download_line() {
        let event = parse_pull_line("a3f9c12b4d5e: Downloading [=====>    ]  1.2MB/5MB");
        assert_eq!(event.status, "Downloading");
        assert_eq!(event.id.as_deref(), Some("a3f9c12b4d5e"));
        assert_eq!(event.progress.as_deref(), Some("1.2MB/5MB"));
    }

    #[test]
    fn parses_layer_status_line() {
        let event = parse_pull_line("a3f9c12b4d5e: Pull complete");
        assert_eq!(event.status, "Pull complete");
        assert_eq!(event.id.as_deref(), Some("a3f9c12b4d5e"));
        assert!(event.progress.is_none());
    }

    #[test]
    fn summary_lines_have_no_layer_id() {
        let event = parse_pull_line("Status: Downloaded newer image for gcc-arm:v1");
        assert!(event.id.is_none());
        assert!(event.status.contains("Downloaded newer image"));

        let event = parse_pull_line("Digest: sha256:deadbeef");
        assert!(event.id.is_none());
    }

    #[test]
    fn tag_header_line_has_no_layer_id() {
        let event = parse_pull_line("latest: Pulling from axem/gcc-arm");
        assert!(event.id.is_none());
        assert_eq!(event.status, "latest: Pulling from axem/gcc-arm");
    }

    #[test]
    fn layer_id_detection() {
        assert!(is_layer_id("a3f9c12b4d5e"));
        assert!(!is_layer_id("latest"));
        assert!(!is_layer_id("Status"));
        assert!(!is_layer_id(""));
        assert!(!is_layer_id("0123456789abcdef01"));
    }

    #[test]
    fn download_line_without_progress_detail() {
        let event = parse_pull_line("a3f9c12b4d5e: Extracting [==========>]");
        assert_eq!(event.status, "Extracting");
        assert!(event.progress.is_none());
    }
}
