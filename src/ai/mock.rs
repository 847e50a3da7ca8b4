//! Scripted mock backend for tests.
//!
//! Records every call and answers through replaceable closures, so tests can
//! script provider behavior per capability and assert on exactly which calls
//! the client and pipeline issued.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    ChatCall, CompletionCall, GenerationBackend, ImageCall, ImagePayload, TextReply,
};
use crate::types::Result;

type CompleteFn = dyn Fn(&CompletionCall) -> Result<TextReply> + Send + Sync;
type ChatFn = dyn Fn(&ChatCall) -> Result<TextReply> + Send + Sync;
type ImageFn = dyn Fn(&ImageCall) -> Result<Vec<ImagePayload>> + Send + Sync;

pub struct MockBackend {
    completion_calls: Mutex<Vec<CompletionCall>>,
    chat_calls: Mutex<Vec<ChatCall>>,
    image_calls: Mutex<Vec<ImageCall>>,
    complete_fn: Box<CompleteFn>,
    chat_fn: Box<ChatFn>,
    image_fn: Box<ImageFn>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            completion_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
            image_calls: Mutex::new(Vec::new()),
            complete_fn: Box::new(|_| {
                Ok(TextReply {
                    text: "mock completion".to_string(),
                    total_tokens: 10,
                })
            }),
            chat_fn: Box::new(|_| {
                Ok(TextReply {
                    text: "mock answer".to_string(),
                    total_tokens: 10,
                })
            }),
            image_fn: Box::new(|_| {
                Ok(vec![ImagePayload {
                    url: Some("https://images.example/mock.png".to_string()),
                    b64_json: None,
                }])
            }),
        }
    }

    pub fn on_complete(
        mut self,
        f: impl Fn(&CompletionCall) -> Result<TextReply> + Send + Sync + 'static,
    ) -> Self {
        self.complete_fn = Box::new(f);
        self
    }

    pub fn on_chat(
        mut self,
        f: impl Fn(&ChatCall) -> Result<TextReply> + Send + Sync + 'static,
    ) -> Self {
        self.chat_fn = Box::new(f);
        self
    }

    pub fn on_image(
        mut self,
        f: impl Fn(&ImageCall) -> Result<Vec<ImagePayload>> + Send + Sync + 'static,
    ) -> Self {
        self.image_fn = Box::new(f);
        self
    }

    pub fn completion_calls(&self) -> Vec<CompletionCall> {
        self.completion_calls.lock().expect("mock lock").clone()
    }

    pub fn chat_calls(&self) -> Vec<ChatCall> {
        self.chat_calls.lock().expect("mock lock").clone()
    }

    pub fn image_calls(&self) -> Vec<ImageCall> {
        self.image_calls.lock().expect("mock lock").clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn complete(&self, call: &CompletionCall) -> Result<TextReply> {
        self.completion_calls
            .lock()
            .expect("mock lock")
            .push(call.clone());
        (self.complete_fn)(call)
    }

    async fn chat(&self, call: &ChatCall) -> Result<TextReply> {
        self.chat_calls.lock().expect("mock lock").push(call.clone());
        (self.chat_fn)(call)
    }

    async fn create_image(&self, call: &ImageCall) -> Result<Vec<ImagePayload>> {
        self.image_calls
            .lock()
            .expect("mock lock")
            .push(call.clone());
        (self.image_fn)(call)
    }
}
