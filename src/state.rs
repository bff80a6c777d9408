//! Application state: the variant profile and the optional Groq client.
//!
//! Nothing here is mutable after startup; requests share it read-only and
//! hold no state of their own across calls.

use tracing::{info, instrument, warn};

use crate::config::Profile;
use crate::groq::Groq;

#[derive(Clone)]
pub struct AppState {
    pub profile: Profile,
    pub groq: Option<Groq>,
}

impl AppState {
    /// Build state from env: pick the variant profile, load prompt
    /// overrides, and init the Groq client if an API key is present.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let profile = Profile::from_env();
        info!(
            target: "mcquiz_backend",
            variant = %profile.variant.as_str(),
            default_topic = %profile.default_topic,
            allowed_topics = profile.allowed_topics.len(),
            fuzzy = profile.fuzzy_topics,
            "Variant profile selected"
        );

        // A missing key is not fatal at startup; MCQ requests will fail
        // with the generic 500 path until one is configured.
        let groq = Groq::from_env();
        if let Some(g) = &groq {
            info!(target: "mcquiz_backend", base_url = %g.base_url, model = %g.model, "Groq enabled.");
        } else {
            warn!(target: "mcquiz_backend", "Groq disabled (no GROQ_API_KEY); MCQ generation will fail.");
        }

        Self { profile, groq }
    }
}
