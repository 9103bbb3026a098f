use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Public message for any body that cannot be read or decoded.
pub const BODY_DECODE_ERROR: &str = "Error decoding the body of the request";

/// JSON body extractor that turns every read/parse failure into a 400 with
/// the fixed decode message. The precise serde failure is only logged.
///
/// Only the first JSON value is decoded; bytes after it are ignored. A
/// literal `null` yields `T::default()`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::InvalidBody, BODY_DECODE_ERROR)
                })?;
                body.extend_from_slice(&chunk);
            }

            let mut decoder = serde_json::Deserializer::from_slice(&body);
            let parsed = Option::<T>::deserialize(&mut decoder).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    reason = %classify_json_error(&e),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::InvalidBody, BODY_DECODE_ERROR)
            })?;

            Ok(ValidatedJson(parsed.unwrap_or_default()))
        })
    }
}

/// Short, body-free description of a serde_json failure for logs.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            format!("syntax error at line {} column {}", error.line(), error.column())
        }
        serde_json::error::Category::Eof => "unexpected end of input".to_string(),
        serde_json::error::Category::Data => "wrong types for one or more fields".to_string(),
        serde_json::error::Category::Io => "I/O error while reading body".to_string(),
    }
}
