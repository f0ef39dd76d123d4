use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{find_player, Player, PlayerId, RankingResult};
use crate::ranking::{
    assemble_ranking, find_matches, LevenshteinMatcher, NameMatcher, RecognizedText,
};

/// Top-three inference orchestrator.
///
/// Holds only immutable configuration; every call builds its state from
/// the request, so one engine can serve concurrent callers.
pub struct RankEngine {
    matcher: Arc<dyn NameMatcher>,
    options: InferenceOptions,
}

/// One inference call: roster snapshot, OCR output, optional uploader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub roster: Vec<Player>,

    /// Raw OCR text; missing or empty yields an empty result
    #[serde(default)]
    pub text: Option<String>,

    /// Whoever uploaded the screenshot; "you" in the text becomes their name
    #[serde(default)]
    pub uploader_id: Option<PlayerId>,
}

/// Inference options/configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceOptions {
    /// Number of podium slots to fill
    pub max_ranks: usize,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self { max_ranks: 3 }
    }
}

impl Default for RankEngine {
    fn default() -> Self {
        Self::new(InferenceOptions::default())
    }
}

impl RankEngine {
    /// Create new engine with the edit-distance matcher
    pub fn new(options: InferenceOptions) -> Self {
        Self::with_matcher(options, Arc::new(LevenshteinMatcher::new()))
    }

    /// Create new engine with a custom name matcher
    pub fn with_matcher(options: InferenceOptions, matcher: Arc<dyn NameMatcher>) -> Self {
        Self { matcher, options }
    }

    pub fn options(&self) -> InferenceOptions {
        self.options
    }

    /// Infer the podium for one screenshot
    pub fn infer(&self, request: &InferenceRequest) -> RankingResult {
        let start = Instant::now();

        let raw = match request.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                tracing::debug!("No recognized text, nothing to infer");
                return RankingResult::default();
            }
        };

        if request.roster.is_empty() {
            tracing::debug!("Empty roster, nothing to infer");
            return RankingResult::default();
        }

        let uploader_name = request.uploader_id.as_ref().and_then(|id| {
            let found = find_player(&request.roster, id);
            if found.is_none() {
                tracing::warn!(
                    "Uploader {} not in roster, skipping \"you\" substitution",
                    id
                );
            }
            found.map(|p| p.name.as_str())
        });

        let text = RecognizedText::parse(raw, uploader_name);
        let matches = find_matches(&request.roster, &text, self.matcher.as_ref());

        tracing::debug!(
            "{} of {} players found across {} lines ({})",
            matches.len(),
            request.roster.len(),
            text.line_count(),
            self.matcher.name()
        );

        let result = assemble_ranking(matches, self.options.max_ranks);

        tracing::debug!(
            "Inferred {} in {:.2}ms",
            result.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        result
    }
}

/// Infer ranks 1..3 with default options
pub fn infer_top_three(
    roster: &[Player],
    text: Option<&str>,
    uploader_id: Option<&PlayerId>,
) -> RankingResult {
    RankEngine::default().infer(&InferenceRequest {
        roster: roster.to_vec(),
        text: text.map(str::to_string),
        uploader_id: uploader_id.cloned(),
    })
}
