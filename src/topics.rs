//! Topic allow-lists and validation/normalization.
//!
//! Invariant: the value handed to prompt construction is always a member of
//! the active allow-list, either verbatim or via the kids-profile fuzzy
//! remap. The lists themselves are process-wide read-only constants.

use tracing::info;

use crate::config::Profile;
use crate::error::ApiError;

/// Topics accepted by the standard variant.
pub const ENGLISH_TOPICS: &[&str] = &[
  "grammar",
  "tenses",
  "punctuation",
  "sentence structure",
  "parts of speech",
  "synonyms",
  "antonyms",
  "comprehension",
  "essay writing",
  "poetry",
  "literature",
];

/// Topics accepted by the kid-friendly variant: early-reader additions
/// first, then the full standard set. Order matters for fuzzy matching
/// (first match wins).
pub const KIDS_TOPICS: &[&str] = &[
  "alphabet",
  "phonics",
  "sight words",
  "basic spelling",
  "rhyming words",
  "simple grammar",
  "basic punctuation",
  "vocabulary",
  "reading comprehension",
  "simple sentences",
  "storytelling",
  "adjectives",
  "nouns",
  "verbs",
  "grammar",
  "tenses",
  "punctuation",
  "sentence structure",
  "parts of speech",
  "synonyms",
  "antonyms",
  "comprehension",
  "essay writing",
  "poetry",
  "literature",
];

/// Normalize the raw query value and check it against the profile allow-list.
///
/// Absent or empty input falls back to the profile default. Exact membership
/// (after lower-casing) always wins. The kids profile additionally tries
/// substring containment in either direction before rejecting, scanning the
/// allow-list in order; a fuzzy hit remaps the topic onto the list entry.
pub fn resolve_topic(raw: Option<&str>, profile: &Profile) -> Result<String, ApiError> {
  let topic = match raw {
    Some(s) if !s.is_empty() => s.to_lowercase(),
    _ => profile.default_topic.to_string(),
  };

  if profile.allowed_topics.contains(&topic.as_str()) {
    return Ok(topic);
  }

  if profile.fuzzy_topics {
    if let Some(hit) = profile
      .allowed_topics
      .iter()
      .copied()
      .find(|t| t.contains(topic.as_str()) || topic.contains(t))
    {
      info!(target: "topic", from = %topic, to = %hit, "Fuzzy-matched topic onto the allow-list");
      return Ok(hit.to_string());
    }
  }

  Err(ApiError::TopicRejected { allowed: profile.allowed_topics })
}
