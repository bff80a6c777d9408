//! Public wire structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and clients independently.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the MCQ endpoint.
#[derive(Debug, Deserialize)]
pub struct McqQuery {
  pub topic: Option<String>,
}

/// Liveness acknowledgment.
#[derive(Debug, Serialize)]
pub struct HealthOut {
  pub message: String,
}

/// Error body shared by the 400 and 500 paths.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
  pub error: String,
}
