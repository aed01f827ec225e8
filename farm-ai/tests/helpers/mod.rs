//! Shared fakes for farm-ai integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use farm_ai::models::{
    BotanicalRecord, BotanicalSearchHit, IdentificationCandidate, IdentificationResponse,
};
use farm_ai::services::{
    BotanicalDatabase, ChatCompletion, EncyclopediaSource, PlantIdentifier, TextGenerator,
};
use farm_ai::{AnalysisServices, ImagePayload, ServiceError, TransportError, TransportKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Responder<T> = Box<dyn Fn(&str) -> Result<T, ServiceError> + Send + Sync>;

/// Fake service answering every call from a closure and recording inputs
pub struct Scripted<T> {
    respond: Responder<T>,
    calls: AtomicUsize,
    inputs: Mutex<Vec<String>>,
}

impl<T> Scripted<T> {
    pub fn new(respond: impl Fn(&str) -> Result<T, ServiceError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            respond: Box::new(respond),
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    fn call(&self, input: &str) -> Result<T, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(input.to_string());
        (self.respond)(input)
    }
}

#[async_trait]
impl PlantIdentifier for Scripted<IdentificationResponse> {
    async fn identify(&self, image: &ImagePayload) -> Result<IdentificationResponse, ServiceError> {
        self.call(&image.content_type)
    }
}

#[async_trait]
impl TextGenerator for Scripted<Option<String>> {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        self.call(prompt)
    }
}

#[async_trait]
impl EncyclopediaSource for Scripted<Option<String>> {
    async fn summary(&self, title: &str) -> Result<Option<String>, ServiceError> {
        self.call(title)
    }
}

#[async_trait]
impl ChatCompletion for Scripted<Option<String>> {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, ServiceError> {
        self.call(prompt)
    }
}

/// Botanical database fake
pub struct FakeDatabase {
    pub search: Arc<Scripted<Vec<BotanicalSearchHit>>>,
    pub detail: Arc<Scripted<BotanicalRecord>>,
}

#[async_trait]
impl BotanicalDatabase for FakeDatabase {
    async fn search(&self, query: &str) -> Result<Vec<BotanicalSearchHit>, ServiceError> {
        self.search.call(query)
    }

    async fn fetch_detail(&self, id: i64) -> Result<BotanicalRecord, ServiceError> {
        self.detail.call(&id.to_string())
    }
}

pub fn transport(kind: TransportKind, message: &str) -> ServiceError {
    ServiceError::Transport(TransportError::new(kind, message))
}

pub fn unreachable_service() -> ServiceError {
    transport(TransportKind::Other, "service not scripted")
}

pub fn identification(is_plant: bool, candidates: &[(&str, f64)]) -> IdentificationResponse {
    IdentificationResponse {
        id: Some(42),
        is_plant,
        is_plant_probability: if is_plant { 0.97 } else { 0.03 },
        suggestions: Some(
            candidates
                .iter()
                .map(|&(name, probability)| IdentificationCandidate {
                    name: name.to_string(),
                    probability,
                    plant_details: None,
                })
                .collect(),
        ),
    }
}

/// Handles to every fake behind an `AnalysisServices`
pub struct Fakes {
    pub identifier: Arc<Scripted<IdentificationResponse>>,
    pub search: Arc<Scripted<Vec<BotanicalSearchHit>>>,
    pub detail: Arc<Scripted<BotanicalRecord>>,
    pub generator: Arc<Scripted<Option<String>>>,
    pub encyclopedia: Arc<Scripted<Option<String>>>,
    pub chat: Arc<Scripted<Option<String>>>,
}

impl Fakes {
    /// Identifier scripted by the caller; every other service fails
    pub fn with_identifier(
        respond: impl Fn(&str) -> Result<IdentificationResponse, ServiceError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            identifier: Scripted::new(respond),
            search: Scripted::new(|_| Err(unreachable_service())),
            detail: Scripted::new(|_| Err(unreachable_service())),
            generator: Scripted::new(|_| Err(unreachable_service())),
            encyclopedia: Scripted::new(|_| Err(unreachable_service())),
            chat: Scripted::new(|_| Err(unreachable_service())),
        }
    }

    pub fn services(&self) -> AnalysisServices {
        AnalysisServices {
            identifier: self.identifier.clone(),
            database: Arc::new(FakeDatabase {
                search: self.search.clone(),
                detail: self.detail.clone(),
            }),
            generator: self.generator.clone(),
            encyclopedia: self.encyclopedia.clone(),
            chat: self.chat.clone(),
        }
    }
}
