//! Variant profiles and prompt configuration.
//!
//! The standard and kid-friendly services share one flow; everything that
//! differs between them (default topic, allow-list, fuzzy matching, prompt
//! template, token cap, extra routes) lives in `Profile`. Prompt templates
//! can be overridden via a TOML file pointed at by QUIZ_CONFIG_PATH.

use serde::Deserialize;
use tracing::{error, info};

use crate::topics::{ENGLISH_TOPICS, KIDS_TOPICS};

const STANDARD_MCQ_TEMPLATE: &str = r#"You are an AI tutor creating MCQs only for the English language subject.

Generate 5 multiple choice questions for the topic "{topic}".
Use this strict JSON format:
{
  "title": "{topic}",
  "questions": [
    {
      "question": "Sample question?",
      "options": ["Option 1", "Option 2", "Option 3", "Option 4"],
      "answer": 2
    }
  ]
}
Only return valid JSON in English. No explanation, no formatting outside JSON."#;

const KIDS_MCQ_TEMPLATE: &str = r#"You are a friendly AI tutor creating fun and simple MCQs for young kids learning English.

Generate exactly 5 easy multiple choice questions for the topic "{topic}".
Keep every question short, cheerful, and simple enough for a young child.
Use this strict JSON format:
{
  "title": "{topic}",
  "questions": [
    {
      "question": "Sample question?",
      "options": ["Option 1", "Option 2", "Option 3"],
      "answer": 1,
      "funFact": "A short fun fact related to the answer!"
    }
  ]
}
Every question must have exactly 3 options. Only return valid JSON in English. No explanation, no formatting outside JSON."#;

/// Which of the two deployable services this process is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
  Standard,
  Kids,
}

impl Variant {
  /// Read VARIANT from env; anything other than "kids" means standard.
  pub fn from_env() -> Self {
    match std::env::var("VARIANT").as_deref() {
      Ok("kids") => Variant::Kids,
      _ => Variant::Standard,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Variant::Standard => "standard",
      Variant::Kids => "kids",
    }
  }
}

/// Everything the request flow needs to know about the active variant.
/// Read-only after startup; shared across requests without locks.
#[derive(Clone, Debug)]
pub struct Profile {
  pub variant: Variant,
  pub default_topic: &'static str,
  pub allowed_topics: &'static [&'static str],
  pub fuzzy_topics: bool,
  pub mcq_template: String,
  pub temperature: f32,
  pub max_tokens: Option<u32>,
  pub health_route: bool,
}

impl Profile {
  pub fn for_variant(variant: Variant, prompts: &Prompts) -> Self {
    match variant {
      Variant::Standard => Self {
        variant,
        default_topic: "grammar",
        allowed_topics: ENGLISH_TOPICS,
        fuzzy_topics: false,
        mcq_template: prompts.standard_mcq_template.clone(),
        temperature: 0.7,
        max_tokens: None,
        health_route: false,
      },
      Variant::Kids => Self {
        variant,
        default_topic: "sight words",
        allowed_topics: KIDS_TOPICS,
        fuzzy_topics: true,
        mcq_template: prompts.kids_mcq_template.clone(),
        temperature: 0.7,
        max_tokens: Some(1000),
        health_route: true,
      },
    }
  }

  /// Build the active profile from VARIANT plus optional TOML overrides.
  pub fn from_env() -> Self {
    let prompts = load_service_config_from_env()
      .map(|c| c.prompts)
      .unwrap_or_default();
    Self::for_variant(Variant::from_env(), &prompts)
  }
}

/// Top-level TOML schema accepted at QUIZ_CONFIG_PATH.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct ServiceConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompt templates used for MCQ generation. Defaults match the deployed
/// services; override them in TOML if you need to tune tone/structure.
/// `{topic}` is substituted with the validated topic.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub standard_mcq_template: String,
  pub kids_mcq_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      standard_mcq_template: STANDARD_MCQ_TEMPLATE.into(),
      kids_mcq_template: KIDS_MCQ_TEMPLATE.into(),
    }
  }
}

/// Attempt to load `ServiceConfig` from QUIZ_CONFIG_PATH. On any parsing/IO
/// error, returns None and the built-in defaults apply.
pub fn load_service_config_from_env() -> Option<ServiceConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ServiceConfig>(&s) {
      Ok(cfg) => {
        info!(target: "mcquiz_backend", %path, "Loaded service config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "mcquiz_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "mcquiz_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn profiles_differ_where_the_variants_differ() {
    let prompts = Prompts::default();
    let std_profile = Profile::for_variant(Variant::Standard, &prompts);
    let kids_profile = Profile::for_variant(Variant::Kids, &prompts);

    assert_eq!(std_profile.default_topic, "grammar");
    assert_eq!(kids_profile.default_topic, "sight words");
    assert!(!std_profile.fuzzy_topics);
    assert!(kids_profile.fuzzy_topics);
    assert_eq!(std_profile.max_tokens, None);
    assert_eq!(kids_profile.max_tokens, Some(1000));
    assert!(!std_profile.health_route);
    assert!(kids_profile.health_route);
    assert!(kids_profile.allowed_topics.len() > std_profile.allowed_topics.len());
  }

  #[test]
  fn toml_overrides_parse_into_prompts() {
    let cfg: ServiceConfig = toml::from_str(
      r#"
[prompts]
standard_mcq_template = "standard for {topic}"
kids_mcq_template = "kids for {topic}"
"#,
    )
    .unwrap();
    assert_eq!(cfg.prompts.standard_mcq_template, "standard for {topic}");
    assert_eq!(cfg.prompts.kids_mcq_template, "kids for {topic}");
  }

  #[test]
  fn empty_toml_falls_back_to_default_prompts() {
    let cfg: ServiceConfig = toml::from_str("").unwrap();
    assert!(cfg.prompts.standard_mcq_template.contains("{topic}"));
    assert!(cfg.prompts.kids_mcq_template.contains("funFact"));
  }
}
