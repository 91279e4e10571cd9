use crate::models::assignments::entities::Assignment;
use crate::models::students::entities::Student;

/// 单条 user 消息的批改提示词，要求模型只返回 JSON
pub fn build_grading_prompt(assignment: &Assignment, student: &Student, submission: &str) -> String {
    format!(
        "You are an expert teacher grading a {subject} assignment.\n\
         \n\
         Assignment: {title}\n\
         Description: {description}\n\
         Student Grade Level: {grade_level}\n\
         \n\
         Student Submission:\n\
         {submission}\n\
         \n\
         Please provide:\n\
         1. A grade out of {max_grade}\n\
         2. Constructive feedback highlighting strengths\n\
         3. Areas for improvement with specific suggestions\n\
         4. Encouragement and next steps\n\
         \n\
         Format your response as JSON:\n\
         {{\n\
         \x20 \"grade\": number,\n\
         \x20 \"feedback\": \"detailed feedback text\",\n\
         \x20 \"strengths\": [\"strength1\", \"strength2\"],\n\
         \x20 \"improvements\": [\"improvement1\", \"improvement2\"],\n\
         \x20 \"encouragement\": \"encouraging message\"\n\
         }}",
        subject = assignment.subject,
        title = assignment.title,
        description = assignment.description,
        grade_level = student.grade_level,
        max_grade = assignment.max_grade,
    )
}
