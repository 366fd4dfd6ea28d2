//! Parsing of `batchexecute` review payloads.
//!
//! ## Observed wire shape
//!
//! The endpoint answers with an anti-JSON prefix (`)]}'` plus blank lines)
//! followed by an envelope array. The review payload sits at `[0][2]` as a
//! **JSON-encoded string** (double-encoded), or `null` when the app has no
//! reviews. The decoded payload is positional:
//!
//! - `payload[0]` — array of review entries, or `null` when exhausted.
//! - last element of the payload's last element — the continuation token
//!   for the next page, absent or non-string on the final page.
//!
//! Review entries are positional arrays:
//!
//! - `[0]` review id, `[2]` star rating, `[4]` review text,
//!   `[5][0]` posted-at epoch seconds.
//!
//! Every field access is defensive: individual entries may be missing or
//! malformed, and a record without text is still produced (the corpus
//! normalizer drops it downstream).

use applens_core::RawReview;
use chrono::DateTime;
use serde_json::Value;

use crate::error::ScraperError;

fn parse_error(context: &str, reason: impl Into<String>) -> ScraperError {
    ScraperError::Parse {
        context: context.to_owned(),
        reason: reason.into(),
    }
}

/// Parse one `batchexecute` response body into review records and the
/// continuation token for the next page.
///
/// # Errors
///
/// Returns [`ScraperError::Parse`] if the body is not the expected
/// envelope. A `null` payload is not an error — it is an empty final page.
pub(crate) fn parse_reviews_response(
    body: &str,
    context: &str,
) -> Result<(Vec<RawReview>, Option<String>), ScraperError> {
    let start = body
        .find('[')
        .ok_or_else(|| parse_error(context, "no JSON payload after anti-JSON prefix"))?;
    let envelope: Value = serde_json::from_str(&body[start..])
        .map_err(|e| parse_error(context, format!("envelope is not valid JSON: {e}")))?;

    let payload_slot = envelope
        .get(0)
        .and_then(|chunk| chunk.get(2))
        .ok_or_else(|| parse_error(context, "envelope has no payload slot at [0][2]"))?;

    let payload_str = match payload_slot {
        Value::Null => return Ok((Vec::new(), None)),
        Value::String(s) => s,
        other => {
            return Err(parse_error(
                context,
                format!("payload slot is neither null nor string: {other}"),
            ))
        }
    };

    let payload: Value = serde_json::from_str(payload_str)
        .map_err(|e| parse_error(context, format!("inner payload is not valid JSON: {e}")))?;

    let reviews = match payload.get(0) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries.iter().filter_map(parse_review_entry).collect(),
        Some(other) => {
            return Err(parse_error(
                context,
                format!("review list is neither null nor array: {other}"),
            ))
        }
    };

    Ok((reviews, continuation_token(&payload)))
}

/// One positional review entry; `None` for entries that are not arrays.
fn parse_review_entry(entry: &Value) -> Option<RawReview> {
    let fields = entry.as_array()?;

    let review_id = fields
        .first()
        .and_then(Value::as_str)
        .map(str::to_owned);
    let score = fields.get(2).and_then(Value::as_i64);
    let content = fields
        .get(4)
        .and_then(Value::as_str)
        .map(str::to_owned);
    let posted_at = fields
        .get(5)
        .and_then(|slot| slot.get(0))
        .and_then(Value::as_i64)
        .and_then(|secs| DateTime::from_timestamp(secs, 0));

    Some(RawReview {
        review_id,
        content,
        score,
        posted_at,
    })
}

/// Continuation token: the last element of the payload's last element,
/// when it is a string.
fn continuation_token(payload: &Value) -> Option<String> {
    payload
        .as_array()
        .and_then(|elements| elements.last())
        .and_then(Value::as_array)
        .and_then(|tail| tail.last())
        .and_then(Value::as_str)
        .map(str::to_owned)
}
