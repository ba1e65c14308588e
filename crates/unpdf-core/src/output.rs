use crate::error::UnpdfError;
use serde::Serialize;
use std::io;

const FALLBACK_ERROR_JSON: &str = r#"{"error": "failed to serialize error message"}"#;

/// The JSON body printed when extraction fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Compact JSON with a space after `:` and `,`, i.e. `{"error": "msg"}`.
///
/// Consumers of the tool match on the `{"error":` prefix of that layout.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serialize `value` as single-line JSON with spaced separators.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<String, UnpdfError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render `{"error": message}`.
pub fn error_json(message: &str) -> String {
    to_spaced_json(&ErrorBody { error: message }).unwrap_or_else(|e| {
        tracing::error!(error = %e, "could not serialize error body");
        FALLBACK_ERROR_JSON.to_string()
    })
}
