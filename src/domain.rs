use serde::{Deserialize, Serialize};

/// Identifier wrapper for evaluation templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub String);

/// Identifier wrapper for the teacher under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherId(pub String);

/// Identifier wrapper for one evaluable criterion within a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(pub String);

/// Closed vocabulary of evaluable field types.
///
/// The source data arrives with a string discriminator; anything outside this
/// set is rejected at template ingestion, never discovered lazily during
/// validation or scoring. Each concern (answered-check, normalization,
/// scorability) dispatches on this enum with an exhaustive `match` so a new
/// kind cannot be added without every concern being revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Rating1To5,
    Rating1To10,
    YesNo,
    Text,
    TextArea,
    Select,
}

impl FieldKind {
    /// Parse the wire discriminator used by template payloads.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rating_1_5" => Some(FieldKind::Rating1To5),
            "rating_1_10" => Some(FieldKind::Rating1To10),
            "yes_no" => Some(FieldKind::YesNo),
            "text" => Some(FieldKind::Text),
            "textarea" => Some(FieldKind::TextArea),
            "select" => Some(FieldKind::Select),
            _ => None,
        }
    }

    pub const fn wire_name(self) -> &'static str {
        match self {
            FieldKind::Rating1To5 => "rating_1_5",
            FieldKind::Rating1To10 => "rating_1_10",
            FieldKind::YesNo => "yes_no",
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Select => "select",
        }
    }

    /// Whether the given entry counts as an answer for this kind.
    ///
    /// Ratings and yes/no are answered strictly by the presence of a numeric
    /// value; `Some(0.0)` for yes/no ("No") is a complete answer. Text-like
    /// kinds and selects are answered by a non-empty display value.
    pub(crate) fn is_answered(self, entry: &ResponseEntry) -> bool {
        match self {
            FieldKind::Rating1To5 | FieldKind::Rating1To10 | FieldKind::YesNo => {
                entry.numeric_value.is_some()
            }
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select => !entry.value.is_empty(),
        }
    }

    /// Normalize a raw numeric answer onto the common 0–100 scale.
    ///
    /// Returns `None` for kinds that carry no scoring semantics; a weighted
    /// `select` or text field is informational only and its weight is ignored.
    pub(crate) fn normalize(self, raw: f64) -> Option<f64> {
        match self {
            FieldKind::Rating1To5 => Some((raw / 5.0) * 100.0),
            FieldKind::Rating1To10 => Some((raw / 10.0) * 100.0),
            FieldKind::YesNo => Some(if raw == 1.0 { 100.0 } else { 0.0 }),
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select => None,
        }
    }

    /// Whether this kind ever participates in score aggregation.
    pub const fn is_scorable(self) -> bool {
        matches!(
            self,
            FieldKind::Rating1To5 | FieldKind::Rating1To10 | FieldKind::YesNo
        )
    }
}

/// One choice offered by a `select` field, in template order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Immutable definition of one evaluation criterion.
///
/// Owned by the template and read-only for the lifetime of a session. A
/// `weight` of zero excludes the field from scoring while leaving its
/// requiredness in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub weight: f64,
    pub options: Vec<FieldOption>,
}

/// The respondent's current answer to one field.
///
/// `value` is the display string; `numeric_value` is populated only for kinds
/// whose answer has intrinsic numeric meaning. The default entry is the
/// unanswered state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub value: String,
    pub numeric_value: Option<f64>,
}

impl ResponseEntry {
    pub fn new(value: impl Into<String>, numeric_value: Option<f64>) -> Self {
        Self {
            value: value.into(),
            numeric_value,
        }
    }
}

/// Qualitative tier derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Unsatisfactory,
    NeedsImprovement,
    Satisfactory,
    Good,
    Excellent,
    Outstanding,
}

impl ScoreBand {
    /// Map a 0–100 score to its band using inclusive lower bounds,
    /// highest-first.
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Outstanding
        } else if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Satisfactory
        } else if score >= 50.0 {
            ScoreBand::NeedsImprovement
        } else {
            ScoreBand::Unsatisfactory
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Unsatisfactory => "Unsatisfactory",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Satisfactory => "Satisfactory",
            ScoreBand::Good => "Good",
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Outstanding => "Outstanding",
        }
    }
}

/// Live projection of the weighted score, recomputed on every answer.
///
/// `score` is `None` when no positively-weighted scorable field has been
/// answered; hosts render that as unavailable, never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePreview {
    pub score: Option<f64>,
    pub band: Option<ScoreBand>,
}

impl ScorePreview {
    pub const fn indeterminate() -> Self {
        Self {
            score: None,
            band: None,
        }
    }

    pub fn band_label(&self) -> Option<&'static str> {
        self.band.map(ScoreBand::label)
    }
}

/// Free-text commentary captured outside the schema-driven field set.
///
/// Empty and whitespace-only strings normalize to `None` so they are omitted
/// from the outbound payload, matching the thin-client convention used by the
/// rest of the system.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Commentary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_strengths: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas_of_improvement: Option<String>,
}

impl Commentary {
    pub fn new(
        remarks: Option<String>,
        teacher_strengths: Option<String>,
        areas_of_improvement: Option<String>,
    ) -> Self {
        Self {
            remarks: normalize_text(remarks),
            teacher_strengths: normalize_text(teacher_strengths),
            areas_of_improvement: normalize_text(areas_of_improvement),
        }
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
