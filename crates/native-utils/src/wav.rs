use crate::audio::AudioError;
use crate::buffer::AudioBuffer;
use std::path::Path;

/// Writes the buffer as a 16-bit PCM WAV file.
pub fn write_wav(buffer: &AudioBuffer, path: &Path) -> Result<(), AudioError> {
    let spec = hound::WavSpec {
        channels: buffer.number_of_channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in buffer.to_interleaved_i16() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    tracing::info!(
        "Wrote {:.2}s of audio to {}",
        buffer.duration(),
        path.display()
    );
    Ok(())
}
