use std::io::Read;

use serde_json::de::IoRead;
use serde_json::{Deserializer, StreamDeserializer, Value};

use crate::error::TailError;

/// One top-level object from the stream. `preserve_order` is enabled
/// on serde_json, so iteration follows the object's own field order.
pub type JsonObject = serde_json::Map<String, Value>;

/// Incremental reader of back-to-back JSON values from a byte stream.
///
/// The wire format is whitespace-insensitive concatenated JSON with no
/// delimiters; top-level values that are not objects (stray scalars,
/// arrays) are skipped without terminating the stream. The iterator
/// ends at EOF, and any parse or I/O failure is terminal: after the
/// first `Err` item the iterator only returns `None`.
pub struct ObjectStream<R: Read> {
    values: StreamDeserializer<'static, IoRead<R>, Value>,
    failed: bool,
}

impl<R: Read> ObjectStream<R> {
    pub fn new(reader: R) -> Self {
        ObjectStream {
            values: Deserializer::from_reader(reader).into_iter::<Value>(),
            failed: false,
        }
    }
}

impl<R: Read> Iterator for ObjectStream<R> {
    type Item = Result<JsonObject, TailError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.values.next() {
                Some(Ok(Value::Object(object))) => return Some(Ok(object)),
                Some(Ok(_)) => continue,
                Some(Err(err)) => {
                    self.failed = true;
                    return Some(Err(err.into()));
                }
                None => return None,
            }
        }
    }
}
