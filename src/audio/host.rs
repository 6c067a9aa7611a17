//! Host-side playback resources.
//!
//! The ambient loop is handed to whatever the target platform uses to play audio (a browser
//! element, a device stream, a file). [`AudioHost`] models that as two paired acquisitions:
//! a byte-backed resource and a playback handle opened on it. [`MemoryHost`] is the headless
//! implementation used by the CLI and the tests.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{LunaError, LunaResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preload {
    None,
    Metadata,
    #[default]
    Auto,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoplayPolicy {
    #[default]
    Allow,
    /// Every `play` request is refused, as a browser does before a user gesture.
    Block,
}

/// A playing (or pausable) instance bound to one resource.
pub trait PlaybackHandle: Send {
    fn set_looping(&mut self, looping: bool);
    fn is_looping(&self) -> bool;
    fn set_preload(&mut self, preload: Preload);
    fn preload(&self) -> Preload;
    fn volume(&self) -> f64;
    /// Values are clamped to `[0, 1]`.
    fn set_volume(&mut self, volume: f64);
    /// Start or resume playback. Hosts may refuse with [`LunaError::Playback`].
    fn play(&mut self) -> LunaResult<()>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// Release the handle; later calls are no-ops.
    fn close(&mut self);
}

pub trait AudioHost: Send + Sync {
    fn create_resource(&self, bytes: Arc<[u8]>, mime: &str) -> LunaResult<ResourceId>;
    fn open(&self, resource: ResourceId) -> LunaResult<Box<dyn PlaybackHandle>>;
    fn revoke_resource(&self, resource: ResourceId) -> LunaResult<()>;
}

#[derive(Debug, Default)]
struct HostState {
    next_id: u64,
    resources: BTreeMap<ResourceId, (Arc<[u8]>, String)>,
    policy: AutoplayPolicy,
    open_handles: usize,
    play_requests: usize,
    rejected_plays: usize,
}

/// In-process host keeping resources in a shared table.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    state: Arc<Mutex<HostState>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AutoplayPolicy) -> Self {
        let host = Self::default();
        host.set_policy(policy);
        host
    }

    pub fn set_policy(&self, policy: AutoplayPolicy) {
        self.lock().policy = policy;
    }

    pub fn live_resources(&self) -> usize {
        self.lock().resources.len()
    }

    pub fn open_handles(&self) -> usize {
        self.lock().open_handles
    }

    pub fn play_requests(&self) -> usize {
        self.lock().play_requests
    }

    pub fn rejected_plays(&self) -> usize {
        self.lock().rejected_plays
    }

    pub fn resource_bytes(&self, id: ResourceId) -> Option<Arc<[u8]>> {
        self.lock().resources.get(&id).map(|(b, _)| Arc::clone(b))
    }

    pub fn resource_mime(&self, id: ResourceId) -> Option<String> {
        self.lock().resources.get(&id).map(|(_, m)| m.clone())
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<HostState>) -> MutexGuard<'_, HostState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AudioHost for MemoryHost {
    fn create_resource(&self, bytes: Arc<[u8]>, mime: &str) -> LunaResult<ResourceId> {
        if bytes.is_empty() {
            return Err(LunaError::audio("refusing to register an empty resource"));
        }
        let mut st = self.lock();
        st.next_id += 1;
        let id = ResourceId(st.next_id);
        st.resources.insert(id, (bytes, mime.to_owned()));
        Ok(id)
    }

    fn open(&self, resource: ResourceId) -> LunaResult<Box<dyn PlaybackHandle>> {
        let mut st = self.lock();
        if !st.resources.contains_key(&resource) {
            return Err(LunaError::audio(format!(
                "resource {} is not registered",
                resource.0
            )));
        }
        st.open_handles += 1;
        Ok(Box::new(MemoryHandle {
            host: Arc::clone(&self.state),
            resource,
            volume: 1.0,
            looping: false,
            preload: Preload::default(),
            paused: true,
            closed: false,
        }))
    }

    fn revoke_resource(&self, resource: ResourceId) -> LunaResult<()> {
        match self.lock().resources.remove(&resource) {
            Some(_) => Ok(()),
            None => Err(LunaError::audio(format!(
                "resource {} was already revoked",
                resource.0
            ))),
        }
    }
}

#[derive(Debug)]
struct MemoryHandle {
    host: Arc<Mutex<HostState>>,
    resource: ResourceId,
    volume: f64,
    looping: bool,
    preload: Preload,
    paused: bool,
    closed: bool,
}

impl PlaybackHandle for MemoryHandle {
    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn is_looping(&self) -> bool {
        self.looping
    }

    fn set_preload(&mut self, preload: Preload) {
        self.preload = preload;
    }

    fn preload(&self) -> Preload {
        self.preload
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    fn play(&mut self) -> LunaResult<()> {
        let mut st = lock_state(&self.host);
        st.play_requests += 1;
        if self.closed || !st.resources.contains_key(&self.resource) {
            st.rejected_plays += 1;
            return Err(LunaError::playback("handle has no live resource"));
        }
        if st.policy == AutoplayPolicy::Block {
            st.rejected_plays += 1;
            return Err(LunaError::playback("autoplay blocked by host policy"));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.paused = true;
        let mut st = lock_state(&self.host);
        st.open_handles = st.open_handles.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/host.rs"]
mod tests;
