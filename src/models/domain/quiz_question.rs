use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<QuestionKind>,
    #[serde(flatten)]
    pub body: QuestionBody,
}

/// Type-specific fields of a canonical question.
///
/// Variants are tried in declaration order, so the option-bearing shapes come
/// before the ones that only carry an `answer`. The later shapes still keep any
/// `options` list they arrive with, e.g. a multiple choice answer that matched
/// no option, or a tagged true/false question that listed its choices.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuestionBody {
    MultipleChoice {
        options: Vec<String>,
        answer: usize,
    },
    SelectAll {
        options: Vec<String>,
        answer: Vec<usize>,
    },
    TrueOrFalse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
        answer: bool,
    },
    Matching {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
        answer: Vec<MatchingPair>,
    },
    Written {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<Vec<String>>,
        answer: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingPair {
    pub left_option: String,
    pub right_option: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    TrueOrFalse,
    MultipleChoice,
    SelectAll,
    Matching,
    ShortAnswer,
    LongAnswer,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::TrueOrFalse,
        QuestionKind::MultipleChoice,
        QuestionKind::SelectAll,
        QuestionKind::Matching,
        QuestionKind::ShortAnswer,
        QuestionKind::LongAnswer,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::TrueOrFalse => "true_or_false",
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::SelectAll => "select_all",
            QuestionKind::Matching => "matching",
            QuestionKind::ShortAnswer => "short_answer",
            QuestionKind::LongAnswer => "long_answer",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Human readable name used when phrasing the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::TrueOrFalse => "true or false",
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::SelectAll => "select all that apply",
            QuestionKind::Matching => "matching",
            QuestionKind::ShortAnswer => "short answer",
            QuestionKind::LongAnswer => "long answer",
        }
    }
}

impl Question {
    /// Explicit tag when the backend provided one, otherwise inferred from the
    /// answer shape. Untagged free-text answers are reported as short answers.
    pub fn kind(&self) -> QuestionKind {
        if let Some(kind) = self.kind {
            return kind;
        }
        match self.body {
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            QuestionBody::SelectAll { .. } => QuestionKind::SelectAll,
            QuestionBody::TrueOrFalse { .. } => QuestionKind::TrueOrFalse,
            QuestionBody::Matching { .. } => QuestionKind::Matching,
            QuestionBody::Written { .. } => QuestionKind::ShortAnswer,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match &self.body {
            QuestionBody::MultipleChoice { options, .. } | QuestionBody::SelectAll { options, .. } => {
                Some(options.as_slice())
            }
            QuestionBody::TrueOrFalse { options, .. }
            | QuestionBody::Matching { options, .. }
            | QuestionBody::Written { options, .. } => options.as_deref(),
        }
    }
}
