use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podium_engine::{
    error::PodiumError, Highlight, InferenceOptions, InferenceRequest, Leaderboard,
    LeaderboardData, LeaderboardMode, PlayerPlacement, RankEngine, RankingResult, ScoringConfig,
    Standing, Submission,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<RankEngine>,
    scoring: ScoringConfig,
}

#[derive(Debug, Deserialize)]
struct PlacementsRequest {
    submission: Submission,
    #[serde(default)]
    scoring: Option<ScoringConfig>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardRequest {
    data: LeaderboardData,
    #[serde(default)]
    mode: LeaderboardMode,
    #[serde(default)]
    game_id: Option<String>,
    #[serde(default)]
    today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct LeaderboardResponse {
    standings: Vec<Standing>,
    highlights: Vec<Highlight>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podium_server=debug,podium_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = std::env::var("PODIUM_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Podium Engine Server");
    tracing::info!("🔌 Port: {}", port);

    let state = AppState {
        engine: Arc::new(RankEngine::new(InferenceOptions::default())),
        scoring: ScoringConfig::default(),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/rank", post(rank_handler))
        .route("/v1/placements", post(placements_handler))
        .route("/v1/leaderboard", post(leaderboard_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🏆 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: podium_engine::VERSION.to_string(),
    })
}

async fn rank_handler(
    State(state): State<AppState>,
    Json(req): Json<InferenceRequest>,
) -> Json<RankingResult> {
    tracing::debug!(
        "Rank request: {} players, {} chars of text",
        req.roster.len(),
        req.text.as_deref().map_or(0, str::len)
    );

    let result = state.engine.infer(&req);

    tracing::info!("✅ {}", result.display());

    Json(result)
}

async fn placements_handler(
    State(state): State<AppState>,
    Json(req): Json<PlacementsRequest>,
) -> Json<Vec<PlayerPlacement>> {
    let scoring = req.scoring.unwrap_or(state.scoring);
    let rows = req.submission.placements(&scoring);

    tracing::info!(
        "✅ {} on {} → {} placement rows",
        req.submission.game_id,
        req.submission.date,
        rows.len()
    );

    Json(rows)
}

async fn leaderboard_handler(
    Json(req): Json<LeaderboardRequest>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let today = req.today.unwrap_or_else(|| Utc::now().date_naive());
    let board = Leaderboard::new(req.data);

    let standings = match &req.game_id {
        Some(game_id) => board.game_standings(game_id)?,
        None => board.standings(req.mode, today),
    };

    Ok(Json(LeaderboardResponse {
        standings,
        highlights: board.highlights(today),
    }))
}

// Error handling
struct AppError(PodiumError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            PodiumError::UnknownGame(game) => {
                (StatusCode::NOT_FOUND, format!("Unknown game: {}", game))
            }
            e @ (PodiumError::InvalidRank(_)
            | PodiumError::InvalidInput(_)
            | PodiumError::Json(_)) => (StatusCode::BAD_REQUEST, e.to_string()),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<PodiumError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
