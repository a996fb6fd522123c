use crate::error::Error;

/// An error raised by the HTTP client for a failed request.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct HttpError {
    /// Client-generated description (e.g. `"Request failed with status code 400"`).
    pub message: String,
    /// Server response, absent for network-level failures.
    #[serde(default)]
    pub response: Option<HttpResponse>,
}

/// The response half of an [`HttpError`].
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct HttpResponse {
    /// HTTP status code, if the client recorded one. Values that are not a
    /// valid code (`"n/a"`, `-1`, `404.5`) are dropped rather than failing the
    /// whole error.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<u16>,
    /// Reason phrase accompanying `status`.
    #[serde(default, alias = "statusText")]
    pub status_text: Option<String>,
    /// Decoded response body. Its keys are not known statically.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(status_code))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float is range-checked and integral before the cast"
)]
fn status_code(value: &serde_json::Value) -> Option<u16> {
    if let Some(n) = value.as_u64() {
        return u16::try_from(n).ok();
    }
    if let Some(s) = value.as_str() {
        return s.trim().parse().ok();
    }
    let f = value.as_f64()?;
    if f.fract().abs() < f64::EPSILON && (0.0..=f64::from(u16::MAX)).contains(&f) {
        Some(f as u16)
    } else {
        None
    }
}

impl HttpError {
    /// Build an error from the client's JSON shape.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, Error> {
        if !value.is_object() {
            return Err(Error::Parse {
                reason: "http error is not an object".into(),
            });
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Response body, when both the response and its body are present.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()?.data.as_ref()
    }
}
