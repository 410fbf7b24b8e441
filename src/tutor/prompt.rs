use super::dto::ChatTurn;

/// How many prior turns are forwarded to the model. The conversation context is
/// kept short so the composite prompt stays well under the model's input cap.
const HISTORY_WINDOW: usize = 3;

fn system_prompt(category: Option<&str>) -> String {
    let mut prompt =
        String::from("You are a helpful AI campus tutor. Provide concise responses under 100 words. ");
    match category {
        Some("studies") => prompt.push_str(
            "You specialize in academic assistance, explaining concepts, and study strategies.",
        ),
        Some("career") => prompt.push_str(
            "You specialize in career guidance, resume building, and interview preparation.",
        ),
        Some("resources") => prompt.push_str(
            "You specialize in campus resources, including academic support, mental health services, and financial aid.",
        ),
        _ => {}
    }
    prompt
}

/// Assemble the single non-streaming prompt: category instruction, length
/// constraint, the last few role-labeled turns, and the current question.
pub fn build_prompt(category: Option<&str>, history: &[ChatTurn], message: &str) -> String {
    let mut full = format!(
        "{}\n\nIMPORTANT: Keep your response under 100 words.\n\n",
        system_prompt(category)
    );

    if !history.is_empty() {
        full.push_str("Previous conversation:\n");
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[start..] {
            let role = if turn.role == "assistant" {
                "AI Tutor"
            } else {
                "Student"
            };
            full.push_str(&format!("{}: {}\n", role, turn.content));
        }
        full.push('\n');
    }

    full.push_str(&format!("Student's current question: {}\n\n", message));
    full.push_str("AI Tutor's response (under 100 words):");
    full
}
