#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use verbum_core::config::{ApiKey, StudyConfig};
use verbum_core::error::GenerationError;
use verbum_core::generator::{ContentGenerator, GenerationCall};

pub const PASSAGE_FIXTURE: &str = include_str!("../../../verbum-core/tests/fixtures/passage.json");
pub const BOOK_FIXTURE: &str = include_str!("../../../verbum-core/tests/fixtures/book.json");

/// Replays scripted replies; the last one repeats once the script runs out.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    attempts: AtomicU32,
    calls: Mutex<Vec<GenerationCall>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Self {
        assert!(!replies.is_empty());
        Self {
            replies: Mutex::new(replies.into()),
            attempts: AtomicU32::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Result<String, GenerationError>) -> Self {
        Self::new(vec![reply])
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        api_key: &ApiKey,
        call: &GenerationCall,
    ) -> Result<String, GenerationError> {
        assert_eq!(api_key.expose(), "test-key");
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(call.clone());

        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap()
        }
    }
}

pub fn config() -> StudyConfig {
    StudyConfig::with_api_key("test-key")
}
