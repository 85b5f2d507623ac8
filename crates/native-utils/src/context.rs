use crate::audio::AudioError;
use crate::buffer::AudioBuffer;
use nexus_types::audio::SPEECH_PCM16_SAMPLE_RATE;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

static SHARED_CONTEXT: OnceLock<PlaybackContext> = OnceLock::new();
static SHARED_CONTEXT_INITS: AtomicUsize = AtomicUsize::new(0);

/// Allocates audio buffers for playback. One process-wide instance is reachable
/// through [`shared_context`]; it lives until the process exits.
#[derive(Debug)]
pub struct PlaybackContext {
    sample_rate: u32,
}

impl PlaybackContext {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// The rate this context renders at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Allocates a zeroed buffer. Refuses zero channels, zero frames or a zero rate.
    pub fn create_buffer(
        &self,
        channels: u16,
        frames: usize,
        sample_rate: u32,
    ) -> Result<AudioBuffer, AudioError> {
        if channels == 0 {
            return Err(AudioError::InvalidChannels);
        }
        if frames == 0 {
            return Err(AudioError::EmptyPayload);
        }
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate);
        }
        Ok(AudioBuffer::silent(channels, frames, sample_rate))
    }
}

/// Returns the shared 24 kHz context, building it on first use.
pub fn shared_context() -> &'static PlaybackContext {
    SHARED_CONTEXT.get_or_init(|| {
        SHARED_CONTEXT_INITS.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            "Creating shared playback context at {} Hz",
            SPEECH_PCM16_SAMPLE_RATE
        );
        PlaybackContext::new(SPEECH_PCM16_SAMPLE_RATE)
    })
}

/// How many times the shared context has been built. Never more than 1.
pub fn shared_context_inits() -> usize {
    SHARED_CONTEXT_INITS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_context_built_once() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| shared_context() as *const PlaybackContext as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(shared_context_inits(), 1);
        assert_eq!(shared_context().sample_rate(), 24000);
    }

    #[test]
    fn test_create_buffer_rejects_empty() {
        let ctx = PlaybackContext::new(24000);
        assert!(matches!(
            ctx.create_buffer(1, 0, 24000),
            Err(AudioError::EmptyPayload)
        ));
        assert!(matches!(
            ctx.create_buffer(0, 10, 24000),
            Err(AudioError::InvalidChannels)
        ));
        assert!(matches!(
            ctx.create_buffer(1, 10, 0),
            Err(AudioError::InvalidSampleRate)
        ));
    }

    #[test]
    fn test_create_buffer_is_silent() {
        let buffer = PlaybackContext::new(24000).create_buffer(2, 5, 24000).unwrap();
        assert_eq!(buffer.number_of_channels(), 2);
        assert_eq!(buffer.length(), 5);
        assert!(buffer.channel_data(1).unwrap().iter().all(|s| *s == 0.0));
    }
}
