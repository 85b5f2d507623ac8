pub mod audio;
pub mod buffer;
pub mod context;
pub mod wav;

pub use audio::{AudioError, decode, decode_audio_data, decode_speech, encode};
pub use buffer::AudioBuffer;
pub use context::{PlaybackContext, shared_context};
