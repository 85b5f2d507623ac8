pub const NEXUS_API_BASE_URL: &str = "NEXUS_API_BASE_URL";

pub const BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_ENDPOINT: &str = "/api/gemini";
