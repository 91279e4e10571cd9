//! 辅导提示词构造

use crate::completion::CompletionMessage;
use crate::models::assessments::entities::Assessment;
use crate::models::chat_sessions::entities::{ChatMessage, ChatRole};
use crate::models::students::entities::Student;

const FALLBACK_STUDENT_NAME: &str = "a student";
const FALLBACK_GRADE_LEVEL: &str = "9th grade";

/// 汇总最近测评中的薄弱知识点，按测评时间倒序去重
pub fn collect_weak_areas(assessments: &[Assessment]) -> Vec<String> {
    let mut areas: Vec<String> = Vec::new();
    for area in assessments.iter().flat_map(|a| a.weak_areas.iter()) {
        let area = area.trim();
        if !area.is_empty() && !areas.iter().any(|existing| existing == area) {
            areas.push(area.to_string());
        }
    }
    areas
}

pub fn build_system_prompt(subject: &str, student: &Student, weak_areas: &[String]) -> String {
    let name = non_blank(&student.full_name).unwrap_or(FALLBACK_STUDENT_NAME);
    let grade_level = non_blank(&student.grade_level).unwrap_or(FALLBACK_GRADE_LEVEL);

    let mut prompt = format!(
        "You are a friendly, encouraging virtual tutor specializing in {subject}.\n\
         You're helping {name} who is in {grade_level}.\n\
         \n\
         Your teaching style should be:\n\
         - Patient and encouraging\n\
         - Break down complex concepts into simple steps\n\
         - Use analogies and real-world examples\n\
         - Ask guiding questions to help the student think through problems\n\
         - Provide positive reinforcement\n\
         - Adapt to the student's learning pace\n"
    );

    if !weak_areas.is_empty() {
        prompt.push_str(&format!(
            "\nThe student has shown they need extra help with: {}.\n\
             Please be especially supportive and detailed when these topics come up.",
            weak_areas.join(", ")
        ));
    }

    prompt
}

/// system + 最近 `window` 条历史消息 + 本次用户消息
pub fn build_messages(
    system_prompt: String,
    history: &[ChatMessage],
    window: usize,
    user_message: &str,
) -> Vec<CompletionMessage> {
    let start = history.len().saturating_sub(window);
    let mut messages = Vec::with_capacity(history.len() - start + 2);

    messages.push(CompletionMessage::system(system_prompt));
    messages.extend(history[start..].iter().map(|msg| match msg.role {
        ChatRole::User => CompletionMessage::user(msg.content.clone()),
        ChatRole::Assistant => CompletionMessage::assistant(msg.content.clone()),
    }));
    messages.push(CompletionMessage::user(user_message));

    messages
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionRole;
    use crate::models::JsonMap;

    fn assessment(weak_areas: &[&str]) -> Assessment {
        Assessment {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: "s1".to_string(),
            subject: "Mathematics".to_string(),
            assessment_type: "quiz".to_string(),
            score: 6.0,
            max_score: 10.0,
            weak_areas: weak_areas.iter().map(|s| s.to_string()).collect(),
            strong_areas: Vec::new(),
            recommendations: Vec::new(),
            time_taken: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn student(name: &str, grade_level: &str) -> Student {
        Student {
            id: "s1".to_string(),
            user_id: "u1".to_string(),
            full_name: name.to_string(),
            grade_level: grade_level.to_string(),
            subjects: Vec::new(),
            profile_picture: None,
            timezone: "UTC".to_string(),
            learning_goals: Vec::new(),
            study_preferences: JsonMap::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_collect_weak_areas_dedup_in_order() {
        let recent = vec![
            assessment(&["fractions", "ratios"]),
            assessment(&[]),
            assessment(&["ratios", " ", "exponents"]),
        ];
        assert_eq!(
            collect_weak_areas(&recent),
            vec!["fractions", "ratios", "exponents"]
        );
        assert!(collect_weak_areas(&[]).is_empty());
    }

    #[test]
    fn test_system_prompt_mentions_student_and_weak_areas() {
        let prompt = build_system_prompt(
            "Mathematics",
            &student("Ada", "10th Grade"),
            &["fractions".to_string(), "ratios".to_string()],
        );
        assert!(prompt.contains("specializing in Mathematics"));
        assert!(prompt.contains("helping Ada who is in 10th Grade"));
        assert!(prompt.contains("fractions, ratios"));
    }

    #[test]
    fn test_system_prompt_fallbacks() {
        let prompt = build_system_prompt("Science", &student("", " "), &[]);
        assert!(prompt.contains("helping a student who is in 9th grade"));
        assert!(!prompt.contains("extra help"));
    }

    #[test]
    fn test_build_messages_keeps_trailing_window() {
        let history: Vec<ChatMessage> = (0..14)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("q{i}"))
                } else {
                    ChatMessage::assistant(format!("a{i}"))
                }
            })
            .collect();

        let messages = build_messages("sys".to_string(), &history, 10, "new question");
        assert_eq!(messages.len(), 12);
        assert_eq!(messages[0], CompletionMessage::system("sys"));
        let contents: Vec<&str> = messages[1..11].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["q4", "a5", "q6", "a7", "q8", "a9", "q10", "a11", "q12", "a13"]
        );
        assert_eq!(messages[1].role, CompletionRole::User);
        assert_eq!(messages[2].role, CompletionRole::Assistant);
        assert_eq!(messages[11], CompletionMessage::user("new question"));
    }

    #[test]
    fn test_build_messages_short_history() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        let messages = build_messages("sys".to_string(), &history, 10, "next");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3].content, "next");
    }
}
