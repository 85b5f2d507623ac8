/// Planar float audio, one `Vec<f32>` per channel, samples in `[-1.0, 1.0]`.
///
/// Only a [`PlaybackContext`](crate::context::PlaybackContext) hands these out,
/// so every buffer has at least one channel, one frame and a non-zero rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub(crate) fn silent(channels: u16, frames: usize, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; frames]; channels as usize],
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn number_of_channels(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Number of frames.
    pub fn length(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Playback length in seconds.
    pub fn duration(&self) -> f64 {
        self.length() as f64 / self.sample_rate as f64
    }

    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    pub(crate) fn channel_data_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.channels[channel]
    }

    /// Re-quantises to interleaved PCM16, the inverse of decoding.
    pub fn to_interleaved_i16(&self) -> Vec<i16> {
        let frames = self.length();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for i in 0..frames {
            for channel in &self.channels {
                let v = (channel[i] * 32768.0).round();
                out.push(v.clamp(i16::MIN as f32, i16::MAX as f32) as i16);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::silent(1, 12000, 24000);
        assert_eq!(buffer.length(), 12000);
        assert_eq!(buffer.duration(), 0.5);
    }

    #[test]
    fn test_interleave() {
        let mut buffer = AudioBuffer::silent(2, 2, 24000);
        buffer.channel_data_mut(0).copy_from_slice(&[-1.0, 0.5]);
        buffer.channel_data_mut(1).copy_from_slice(&[32767.0 / 32768.0, 0.0]);
        assert_eq!(buffer.to_interleaved_i16(), vec![-32768, 32767, 16384, 0]);
    }

    #[test]
    fn test_missing_channel() {
        let buffer = AudioBuffer::silent(1, 4, 24000);
        assert!(buffer.channel_data(1).is_none());
    }
}
