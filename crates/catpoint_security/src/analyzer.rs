//! Image analyzer abstraction.
//!
//! The real cat recognizer lives outside this crate. Only its contract is
//! modelled here: given a frame and a confidence threshold, answer whether
//! a cat is present.
//!
//! Production wiring supplies its own `ImageAnalyzer`. `RandomImageAnalyzer`
//! is a coin-flip stand-in for demos, `FakeImageAnalyzer` gives tests
//! scripted answers and records how it was called.

use catpoint_common::AnalyzerError;
use image::{DynamicImage, GenericImageView};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Image Analyzer Trait
// ============================================================================

/// Blocking, side-effect free cat detection
pub trait ImageAnalyzer {
    /// `confidence_threshold` is a percentage in 0..=100
    fn image_contains_cat(
        &self,
        image: &DynamicImage,
        confidence_threshold: f32,
    ) -> Result<bool, AnalyzerError>;
}

// ============================================================================
// Random Image Analyzer
// ============================================================================

/// Ignores the frame and flips a coin
#[derive(Debug, Default)]
pub struct RandomImageAnalyzer;

impl ImageAnalyzer for RandomImageAnalyzer {
    fn image_contains_cat(
        &self,
        image: &DynamicImage,
        _confidence_threshold: f32,
    ) -> Result<bool, AnalyzerError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AnalyzerError::InvalidImage("empty frame".to_string()));
        }
        Ok(rand::thread_rng().gen_bool(0.5))
    }
}

// ============================================================================
// Fake Image Analyzer (Testing)
// ============================================================================

/// Pre-configured analyzer answer
#[derive(Debug, Clone)]
pub enum FakeAnalysis {
    Cat(bool),
    Fail(String),
}

/// Fake analyzer for deterministic testing
///
/// Answers are consumed in order; once the queue is empty the default
/// answer is returned. Clones share the queue and the call log.
#[derive(Debug, Clone)]
pub struct FakeImageAnalyzer {
    answers: Arc<Mutex<VecDeque<FakeAnalysis>>>,
    default_answer: bool,
    thresholds: Arc<Mutex<Vec<f32>>>,
}

impl FakeImageAnalyzer {
    /// Analyzer that always answers `contains_cat`
    pub fn always(contains_cat: bool) -> Self {
        Self {
            answers: Arc::new(Mutex::new(VecDeque::new())),
            default_answer: contains_cat,
            thresholds: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue one answer ahead of the default
    pub fn push(&self, answer: FakeAnalysis) {
        self.answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(answer);
    }

    /// Thresholds received, one per call
    pub fn thresholds(&self) -> Vec<f32> {
        self.thresholds
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.thresholds.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl ImageAnalyzer for FakeImageAnalyzer {
    fn image_contains_cat(
        &self,
        _image: &DynamicImage,
        confidence_threshold: f32,
    ) -> Result<bool, AnalyzerError> {
        self.thresholds
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(confidence_threshold);

        let next = self
            .answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(FakeAnalysis::Cat(cat)) => Ok(cat),
            Some(FakeAnalysis::Fail(reason)) => Err(AnalyzerError::Unavailable(reason)),
            None => Ok(self.default_answer),
        }
    }
}
