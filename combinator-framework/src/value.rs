/// A parse result: either atomic text or an ordered sequence of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text recognised by a primitive parser.
    Text(String),
    /// Results collected by repetition or sequencing.
    Sequence(Vec<Value>),
}

impl Value {
    /// An empty sequence, used where a combinator matches without a payload.
    pub fn empty() -> Self {
        Value::Sequence(Vec::new())
    }

    /// Returns the text if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Sequence(_) => None,
        }
    }

    /// Returns the items if this is a [`Value::Sequence`].
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Text(_) => None,
            Value::Sequence(items) => Some(items),
        }
    }

    /// Concatenates every piece of text in this value, depth first.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            Value::Text(text) => out.push_str(text),
            Value::Sequence(items) => items.iter().for_each(|item| item.flatten_into(out)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
