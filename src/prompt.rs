//! Prompt construction for MCQ generation.
//!
//! Pure, deterministic string templating; the topic has already been
//! validated against the allow-list by the time it lands here.

use crate::util::fill_template;

/// Render the variant's MCQ template with the validated topic.
pub fn build_mcq_prompt(template: &str, topic: &str) -> String {
  fill_template(template, &[("topic", topic)])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Prompts;

  #[test]
  fn standard_prompt_embeds_the_topic_and_four_options() {
    let prompts = Prompts::default();
    let p = build_mcq_prompt(&prompts.standard_mcq_template, "poetry");
    assert!(p.contains("\"poetry\""));
    assert!(p.contains("\"title\": \"poetry\""));
    assert!(p.contains("5 multiple choice questions"));
    assert!(p.contains("Option 4"));
    assert!(!p.contains("funFact"));
    assert!(p.contains("Only return valid JSON"));
    assert!(!p.contains("{topic}"));
  }

  #[test]
  fn kids_prompt_uses_three_options_and_a_fun_fact() {
    let prompts = Prompts::default();
    let p = build_mcq_prompt(&prompts.kids_mcq_template, "phonics");
    assert!(p.contains("\"phonics\""));
    assert!(p.contains("exactly 5"));
    assert!(p.contains("Option 3"));
    assert!(!p.contains("Option 4"));
    assert!(p.contains("funFact"));
    assert!(p.contains("Only return valid JSON"));
    assert!(!p.contains("{topic}"));
  }
}
