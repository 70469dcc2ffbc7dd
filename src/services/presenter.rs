//! Presenter Boundary
//!
//! Whatever draws the start, survey and result screens implements
//! `Presenter`. The session pushes a fresh view after every state change;
//! user actions flow back through the session's methods.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::models::view::SurveyView;

/// Frames kept by `RecordingPresenter::new`
pub const DEFAULT_FRAME_LIMIT: usize = 256;

/// Renders session snapshots
pub trait Presenter: Send + Sync {
    /// Draw the given view
    fn render(&self, view: &SurveyView);
}

/// Presenter that keeps the most recent rendered views, oldest dropped first
#[derive(Debug)]
pub struct RecordingPresenter {
    frames: Mutex<VecDeque<SurveyView>>,
    limit: usize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_FRAME_LIMIT)
    }

    /// Keep at most `limit` frames (at least one)
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            frames: Mutex::new(VecDeque::with_capacity(limit.min(DEFAULT_FRAME_LIMIT))),
            limit,
        }
    }

    /// Retained views, oldest first
    pub fn frames(&self) -> Vec<SurveyView> {
        self.frames
            .lock()
            .map(|frames| frames.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recent view, if any
    pub fn last(&self) -> Option<SurveyView> {
        self.frames
            .lock()
            .ok()
            .and_then(|frames| frames.back().cloned())
    }
}

impl Default for RecordingPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, view: &SurveyView) {
        if let Ok(mut frames) = self.frames.lock() {
            if frames.len() == self.limit {
                frames.pop_front();
            }
            frames.push_back(view.clone());
        }
    }
}
