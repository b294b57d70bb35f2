use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display classification attached to every value.
///
/// The tag only drives downstream coloring; the engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Green,
    #[default]
    Yellow,
    Red,
}

impl Tag {
    /// One-letter marker used by the text table formatter.
    pub fn marker(&self) -> char {
        match self {
            Tag::Green => 'G',
            Tag::Yellow => 'Y',
            Tag::Red => 'R',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Green => write!(f, "green"),
            Tag::Yellow => write!(f, "yellow"),
            Tag::Red => write!(f, "red"),
        }
    }
}

/// One candidate value of a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepValue {
    pub id: String,
    pub value: String,
    #[serde(rename = "color", default)]
    pub tag: Tag,
}

impl StepValue {
    /// Creates a value with a freshly generated id.
    pub fn new(value: impl Into<String>, tag: Tag) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: value.into(),
            tag,
        }
    }

    /// The trimmed payload, or `None` if the payload is blank.
    pub fn payload(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// A named test dimension with an ordered list of candidate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<StepValue>,
}

impl Step {
    /// Creates an empty step with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Appends a value, returning the step for chaining.
    pub fn with_value(mut self, value: impl Into<String>, tag: Tag) -> Self {
        self.values.push(StepValue::new(value, tag));
        self
    }

    /// Appends several values sharing the same tag.
    pub fn with_values<I, S>(mut self, values: I, tag: Tag) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .extend(values.into_iter().map(|v| StepValue::new(v, tag)));
        self
    }

    /// Values whose payload survives trimming, in display order.
    pub fn effective_values(&self) -> impl Iterator<Item = (&str, Tag)> {
        self.values
            .iter()
            .filter_map(|v| v.payload().map(|payload| (payload, v.tag)))
    }
}
