//! Domain models: the MCQ payload shape the prompts ask the model for.
//!
//! The server never enforces this shape on model output — a reply that
//! parses as JSON is returned to the caller as-is. The typed model exists
//! for observability (logging title/question counts) and for tests.

use serde::{Deserialize, Serialize};

/// A titled set of multiple-choice questions, as requested from the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McqSet {
  pub title: String,
  pub questions: Vec<McqQuestion>,
}

/// One question: 4 options in the standard variant, 3 in the kids variant.
/// `answer` is an index into `options`; `funFact` only appears for kids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct McqQuestion {
  pub question: String,
  pub options: Vec<String>,
  pub answer: usize,
  #[serde(rename = "funFact", skip_serializing_if = "Option::is_none")]
  pub fun_fact: Option<String>,
}
