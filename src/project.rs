use crate::stream::JsonObject;

/// Turns a matched object into one output line.
#[derive(Debug, Clone)]
pub enum Projector {
    /// Serialize the whole object verbatim (compact JSON, field order
    /// preserved).
    Raw,
    /// Space-join the textual values of the named fields, in the given
    /// order. A field that is absent or not a string contributes
    /// nothing, not even a placeholder, so the separator collapses;
    /// an object with zero hits still produces an empty line.
    Fields(Vec<String>),
}

impl Projector {
    pub fn render(&self, object: &JsonObject) -> String {
        match self {
            Projector::Raw => serde_json::Value::Object(object.clone()).to_string(),
            Projector::Fields(fields) => {
                let mut line = String::with_capacity(128);
                for field in fields {
                    if let Some(text) = object.get(field).and_then(|v| v.as_str()) {
                        if !line.is_empty() {
                            line.push(' ');
                        }
                        line.push_str(text);
                    }
                }
                line
            }
        }
    }
}
