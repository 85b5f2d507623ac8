use crate::buffer::AudioBuffer;
use crate::context::PlaybackContext;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use nexus_types::audio::PCM16_NORMALIZER;

// Accepts what a browser's `atob` accepts: padding optional, non-zero trailing bits allowed.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("invalid base64 audio payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("audio payload contains no complete frames")]
    EmptyPayload,
    #[error("channel count must be at least 1")]
    InvalidChannels,
    #[error("sample rate must be greater than zero")]
    InvalidSampleRate,
    #[error("failed to write wav: {0}")]
    Wav(#[from] hound::Error),
}

/// Decodes base64 into raw bytes. ASCII whitespace is ignored and padding is optional.
pub fn decode(base64_fragment: &str) -> Result<Vec<u8>, AudioError> {
    let compact: String = base64_fragment
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(FORGIVING.decode(compact)?)
}

/// Encodes raw bytes as a standard base64 string.
pub fn encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Reads bytes as little-endian `i16` samples. A trailing odd byte is dropped.
pub fn bytes_to_i16(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Maps one PCM16 sample onto `[-1.0, 1.0)`.
pub fn normalize(sample: i16) -> f32 {
    sample as f32 / PCM16_NORMALIZER
}

#[cfg(test)]
pub(crate) fn pcm16_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Turns interleaved PCM16 bytes into a per-channel float buffer allocated from `ctx`.
///
/// `frame_count = floor(samples / channels)`; leftover samples of an incomplete
/// frame are ignored. Channel `c` at frame `i` holds `pcm16[i * channels + c] / 32768`.
pub fn decode_audio_data(
    data: &[u8],
    ctx: &PlaybackContext,
    sample_rate: u32,
    channels: u16,
) -> Result<AudioBuffer, AudioError> {
    if channels == 0 {
        return Err(AudioError::InvalidChannels);
    }
    let pcm16 = bytes_to_i16(data);
    let stride = channels as usize;
    let frame_count = pcm16.len() / stride;

    let mut buffer = ctx.create_buffer(channels, frame_count, sample_rate)?;
    for channel in 0..stride {
        let channel_data = buffer.channel_data_mut(channel);
        for (i, sample) in channel_data.iter_mut().enumerate() {
            *sample = normalize(pcm16[i * stride + channel]);
        }
    }

    tracing::debug!(
        "Decoded {} bytes into {} frames x {} channel(s) at {} Hz",
        data.len(),
        frame_count,
        channels,
        sample_rate
    );
    Ok(buffer)
}

/// Full speech path: base64 text to a playable buffer.
pub fn decode_speech(
    base64_audio: &str,
    ctx: &PlaybackContext,
    sample_rate: u32,
    channels: u16,
) -> Result<AudioBuffer, AudioError> {
    let bytes = decode(base64_audio)?;
    decode_audio_data(&bytes, ctx, sample_rate, channels)
}
