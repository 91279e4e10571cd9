//! 模型批改结果解析

use crate::models::assignments::responses::AssignmentFeedback;

const FALLBACK_STRENGTH: &str = "Good effort shown";
const FALLBACK_IMPROVEMENT: &str = "Continue practicing";
const FALLBACK_ENCOURAGEMENT: &str = "Keep up the great work!";

/// 模型输出要么是约定的 JSON 结构，要么退回兜底反馈并保留原文
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedFeedback {
    Valid(AssignmentFeedback),
    Invalid {
        raw: String,
        fallback: AssignmentFeedback,
    },
}

impl ParsedFeedback {
    pub fn parse(raw: &str, fallback_grade: f64) -> Self {
        match serde_json::from_str::<AssignmentFeedback>(raw) {
            Ok(feedback) => ParsedFeedback::Valid(feedback),
            Err(_) => ParsedFeedback::Invalid {
                raw: raw.to_string(),
                fallback: fallback_feedback(raw, fallback_grade),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedFeedback::Valid(_))
    }

    pub fn into_feedback(self) -> AssignmentFeedback {
        match self {
            ParsedFeedback::Valid(feedback) => feedback,
            ParsedFeedback::Invalid { fallback, .. } => fallback,
        }
    }
}

fn fallback_feedback(raw: &str, grade: f64) -> AssignmentFeedback {
    AssignmentFeedback {
        grade,
        feedback: raw.to_string(),
        strengths: vec![FALLBACK_STRENGTH.to_string()],
        improvements: vec![FALLBACK_IMPROVEMENT.to_string()],
        encouragement: FALLBACK_ENCOURAGEMENT.to_string(),
    }
}
