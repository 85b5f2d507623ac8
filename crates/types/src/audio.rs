/// Sample rate of the PCM16 audio returned by `generateSpeech`.
pub const SPEECH_PCM16_SAMPLE_RATE: u32 = 24000;

/// Speech audio is mono unless a caller asks otherwise.
pub const SPEECH_CHANNELS: u16 = 1;

/// Divisor that maps an `i16` sample onto `[-1.0, 1.0)`.
pub const PCM16_NORMALIZER: f32 = 32768.0;
