use std::sync::Arc;

use crate::{
    audio::host::{AudioHost, PlaybackHandle, Preload, ResourceId},
    audio::synth::{AmbientSpec, synthesize_ambient},
    audio::wav::{WAV_MIME, encode_pcm16_mono},
    foundation::error::{LunaError, LunaResult},
};

/// Volume the loop is created with, before any fade runs.
pub const INITIAL_VOLUME: f64 = 0.2;

/// The session's ambient loop: generated samples, their WAV encoding, and the host
/// resources playing them.
///
/// Creation acquires a resource and a looping handle from the host; [`AmbientAudio::dispose`]
/// (also run on drop) releases both. Disposal is idempotent.
pub struct AmbientAudio {
    spec: AmbientSpec,
    waveform: Arc<[f32]>,
    container: Arc<[u8]>,
    host: Arc<dyn AudioHost>,
    resource: Option<ResourceId>,
    handle: Option<Box<dyn PlaybackHandle>>,
    is_playing: bool, // user intent, not host state
}

impl std::fmt::Debug for AmbientAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientAudio")
            .field("spec", &self.spec)
            .field("samples", &self.waveform.len())
            .field("container_bytes", &self.container.len())
            .field("resource", &self.resource)
            .field("has_handle", &self.handle.is_some())
            .field("is_playing", &self.is_playing)
            .finish()
    }
}

impl AmbientAudio {
    #[tracing::instrument(skip(host))]
    pub fn create(spec: AmbientSpec, host: Arc<dyn AudioHost>) -> LunaResult<Self> {
        let waveform: Arc<[f32]> = synthesize_ambient(&spec)?.into();
        let container: Arc<[u8]> = encode_pcm16_mono(&waveform, spec.sample_rate)?.into();

        let resource = host.create_resource(Arc::clone(&container), WAV_MIME)?;
        let mut handle = match host.open(resource) {
            Ok(h) => h,
            Err(e) => {
                if let Err(revoke) = host.revoke_resource(resource) {
                    tracing::warn!(%revoke, "failed to revoke resource after open error");
                }
                return Err(e);
            }
        };
        handle.set_looping(true);
        handle.set_volume(INITIAL_VOLUME);
        handle.set_preload(Preload::Auto);

        tracing::debug!(
            resource = resource.0,
            bytes = container.len(),
            "ambient audio ready"
        );
        Ok(Self {
            spec,
            waveform,
            container,
            host,
            resource: Some(resource),
            handle: Some(handle),
            is_playing: false,
        })
    }

    pub fn create_default(host: Arc<dyn AudioHost>) -> LunaResult<Self> {
        Self::create(AmbientSpec::default(), host)
    }

    pub fn spec(&self) -> &AmbientSpec {
        &self.spec
    }

    pub fn waveform(&self) -> &[f32] {
        &self.waveform
    }

    pub fn container(&self) -> &[u8] {
        &self.container
    }

    pub fn resource(&self) -> Option<ResourceId> {
        self.resource
    }

    pub fn is_disposed(&self) -> bool {
        self.handle.is_none() && self.resource.is_none()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn set_playing_intent(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// True when the host is actually producing sound.
    pub fn is_audible(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_paused())
    }

    pub fn is_looping(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_looping())
    }

    pub fn volume(&self) -> f64 {
        self.handle.as_ref().map_or(0.0, |h| h.volume())
    }

    pub fn set_volume(&mut self, volume: f64) {
        if let Some(h) = self.handle.as_mut() {
            h.set_volume(volume);
        }
    }

    pub fn play(&mut self) -> LunaResult<()> {
        match self.handle.as_mut() {
            Some(h) => h.play(),
            None => Err(LunaError::playback("ambient audio was disposed")),
        }
    }

    pub fn pause(&mut self) {
        if let Some(h) = self.handle.as_mut() {
            h.pause();
        }
    }

    /// Stop playback and release the handle and the backing resource.
    pub fn dispose(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.pause();
            handle.close();
        }
        if let Some(resource) = self.resource.take()
            && let Err(err) = self.host.revoke_resource(resource)
        {
            tracing::warn!(%err, resource = resource.0, "host failed to revoke ambient resource");
        }
        self.is_playing = false;
    }
}

impl Drop for AmbientAudio {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/asset.rs"]
mod tests;
