use serde::{Deserialize, Serialize};

/// A value the service sends either as a string or as a bare number,
/// e.g. a `"[00:01:23]"` timestamp or a `92` confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Wire form of a citation: some responses carry bare strings, others
/// `{title, url}` objects with either field possibly missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SourceWire {
    Titled {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
    Bare(String),
}

/// A citation backing a fact, normalized from the wire union at decode
/// time so the rest of the program never sees both shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SourceWire")]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<SourceWire> for Source {
    fn from(wire: SourceWire) -> Self {
        match wire {
            SourceWire::Titled { title, url } => Source { title, url },
            SourceWire::Bare(text) => {
                if text.starts_with("http://") || text.starts_with("https://") {
                    Source {
                        title: None,
                        url: Some(text),
                    }
                } else {
                    Source {
                        title: Some(text),
                        url: None,
                    }
                }
            }
        }
    }
}

impl Source {
    /// Text shown for this citation. "Source" when the service sent
    /// nothing usable.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.url.as_deref())
            .unwrap_or("Source")
    }
}

/// One verified claim. Every field is optional on the wire; missing
/// fields decode to their empty form rather than failing the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(default)]
    pub claim: String,
    /// Free-form verdict label ("true", "incorrect", "unverifiable", ...).
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Position in the source video, usually `"[HH:MM:SS]"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Scalar>,
    /// Score out of 100, sent as a number or a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Scalar>,
}

impl Fact {
    pub fn verdict(&self) -> Verdict {
        Verdict::classify(&self.status)
    }
}

/// Coarse bucket for the free-form status labels the service emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Supported,
    Refuted,
    Unverified,
}

impl Verdict {
    pub fn classify(status: &str) -> Verdict {
        match status.to_lowercase().as_str() {
            "true" | "verified" | "correct" => Verdict::Supported,
            "false" | "incorrect" | "misleading" => Verdict::Refuted,
            _ => Verdict::Unverified,
        }
    }
}

/// The success envelope of one fact-check round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactReport {
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl FactReport {
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
