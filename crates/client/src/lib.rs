mod client;
mod error;

pub use nexus_native_utils as pcm;
pub use nexus_types as types;

pub use client::config::{Config, ConfigBuilder};
pub use client::fallback;
pub use client::transport::{HttpTransport, RpcTransport};
pub use client::NexusClient;
pub use error::{RpcError, SpeechError};
