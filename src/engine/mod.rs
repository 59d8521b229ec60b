//! Container engine abstraction.
//!
//! The engine is consumed as a black box behind [`ContainerEngine`]:
//! list local images, search a registry, pull with streamed progress,
//! run a tool container, remove an image. [`DockerCli`] implements the
//! trait on top of the `docker` binary; [`MockEngine`] records calls and
//! replays canned responses for tests.

pub mod docker;
pub mod mock;

pub use docker::DockerCli;
pub use mock::MockEngine;

use std::path::Path;

use crate::error::Result;

/// One progress event from a streaming pull.
///
/// Events are forwarded to the caller one at a time, in the order the
/// engine emits them, without buffering or aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullProgress {
    /// Status phrase, e.g. "Downloading", "Pull complete".
    pub status: String,

    /// Layer identifier, when the event concerns a single layer.
    pub id: Option<String>,

    /// Byte-count progress detail, e.g. "1.2MB/5MB", when present.
    pub progress: Option<String>,
}

/// Callback invoked per pull progress event.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(PullProgress);

/// Callback invoked per container log line.
pub type LogCallback<'a> = &'a mut dyn FnMut(&str);

/// The container engine's image/pull/run/search primitives.
///
/// All operations are synchronous and blocking; streaming calls observe
/// events as they arrive and return once the stream is exhausted.
pub trait ContainerEngine {
    /// Every image present in the local cache as `repository:tag`
    /// strings, untagged entries filtered out.
    fn local_images(&self) -> Result<Vec<String>>;

    /// Search a registry for the term; returns repository names without
    /// tags (registry search cannot enumerate tags cheaply).
    fn search(&self, term: &str) -> Result<Vec<String>>;

    /// Pull an image, forwarding each progress event as it arrives.
    /// May fail mid-stream; the error carries the engine's cause verbatim.
    fn pull(&self, name: &str, on_progress: ProgressCallback) -> Result<()>;

    /// Run a command in a tool container with the workspace mounted
    /// read-write at `/work`. The container is auto-removed on completion;
    /// log lines are forwarded as they arrive.
    fn run(
        &self,
        image: &str,
        workspace: &Path,
        command: &str,
        privileged: bool,
        on_log: LogCallback,
    ) -> Result<()>;

    /// Remove a local image.
    fn remove(&self, name: &str) -> Result<()>;
}
