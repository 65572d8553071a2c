//! Conversation memory for story generation.
//!
//! Keeps a sliding window of recent request/reply exchanges so consecutive
//! stories in a session can build on one another.

use openai::Message;

/// Maximum number of recent messages to keep.
const MAX_RECENT_MESSAGES: usize = 20;

/// Sliding window of the conversation with the story model.
#[derive(Debug, Clone, Default)]
pub struct StoryMemory {
    recent_messages: Vec<StoredMessage>,
}

impl StoryMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a story request to history.
    pub fn add_user_message(&mut self, content: &str) {
        self.recent_messages.push(StoredMessage {
            role: MessageRole::User,
            content: content.to_string(),
        });
        self.trim_history();
    }

    /// Add a model reply to history.
    pub fn add_assistant_message(&mut self, content: &str) {
        self.recent_messages.push(StoredMessage {
            role: MessageRole::Assistant,
            content: content.to_string(),
        });
        self.trim_history();
    }

    /// Get messages for an API call.
    pub fn messages(&self) -> Vec<Message> {
        self.recent_messages
            .iter()
            .map(|m| match m.role {
                MessageRole::User => Message::user(&m.content),
                MessageRole::Assistant => Message::assistant(&m.content),
            })
            .collect()
    }

    /// Get the number of stored messages.
    pub fn message_count(&self) -> usize {
        self.recent_messages.len()
    }

    /// Forget the conversation so the next story starts fresh.
    pub fn clear(&mut self) {
        self.recent_messages.clear();
    }

    fn trim_history(&mut self) {
        while self.recent_messages.len() > MAX_RECENT_MESSAGES {
            self.recent_messages.remove(0);
        }
    }
}

/// A stored message in the conversation history.
#[derive(Debug, Clone)]
struct StoredMessage {
    role: MessageRole,
    content: String,
}

#[derive(Debug, Clone, Copy)]
enum MessageRole {
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_creation() {
        let memory = StoryMemory::new();
        assert_eq!(memory.message_count(), 0);
    }

    #[test]
    fn test_add_messages() {
        let mut memory = StoryMemory::new();
        memory.add_user_message("Create a story about a second chance");
        memory.add_assistant_message("Kai stepped off the bus into the rain.");

        assert_eq!(memory.message_count(), 2);
    }

    #[test]
    fn test_trim_history() {
        let mut memory = StoryMemory::new();

        for i in 0..30 {
            memory.add_user_message(&format!("Message {i}"));
        }

        assert_eq!(memory.message_count(), MAX_RECENT_MESSAGES);
    }

    #[test]
    fn test_messages_preserve_roles() {
        let mut memory = StoryMemory::new();
        memory.add_user_message("Tell me a story");
        memory.add_assistant_message("Once upon a time.");

        let messages = memory.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, openai::Role::User);
        assert_eq!(messages[1].role, openai::Role::Assistant);
    }

    #[test]
    fn test_clear() {
        let mut memory = StoryMemory::new();
        memory.add_user_message("Tell me a story");
        memory.clear();
        assert_eq!(memory.message_count(), 0);
    }
}
