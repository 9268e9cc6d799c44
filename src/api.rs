use leptos::logging::log;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::ReviewError;
use crate::models::review::ReviewData;

/// How long the simulated submission takes.
pub const SAVE_DELAY: Duration = Duration::from_millis(1000);

/// Payload that would be sent to a review backend.
pub fn encode_review(review: &ReviewData) -> Result<String, ReviewError> {
    Ok(serde_json::to_string(review)?)
}

/// Simulated submission: logs the payload and resolves after `delay`.
/// There is no backend, so the only failure is an encoding error.
pub async fn save_review(review: ReviewData, delay: Duration) -> Result<ReviewData, ReviewError> {
    log!(
        "[SAVE] Submitting {} review for {} ({} criteria)",
        review.status,
        review.candidate_name,
        review.criteria.len()
    );

    let raw_json = encode_review(&review)?;
    log!("[SAVE] Raw review JSON: {}", raw_json);

    gloo_timers::future::sleep(delay).await;

    log!("[SAVE] Review for {} stored", review.candidate_name);
    Ok(review)
}

pub type SaveFuture = Pin<Box<dyn Future<Output = Result<ReviewData, ReviewError>>>>;

/// Anything that can take a composed review and store it. The review modal
/// uses `submit_review` unless it is handed another one.
pub type Submitter = fn(ReviewData, Duration) -> SaveFuture;

pub fn submit_review(review: ReviewData, delay: Duration) -> SaveFuture {
    Box::pin(save_review(review, delay))
}
