//! Ranking Service
//!
//! Client for the remote hand ranking service plus the wrapper the betting
//! path uses, which never fails.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::entities::{Card, HandRanking};

/// Ranking service error
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Service unavailable")]
    Unavailable,
}

/// Ranking Service trait
#[async_trait]
pub trait RankingService: Send + Sync {
    /// Rank the best hand that can be made from `cards`
    async fn rank(&self, cards: &[Card]) -> Result<HandRanking, RankingError>;
}

#[derive(Debug, Clone)]
pub struct RankingConfig {
    pub url: String,
    pub timeout_secs: u64,
}

/// HTTP ranking service. Cards are posted as a JSON array in the `cards`
/// form field.
pub struct HttpRankingService {
    client: Client,
    config: RankingConfig,
}

impl HttpRankingService {
    pub fn new(config: RankingConfig) -> Result<Self, RankingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(
            "HttpRankingService initialized: {} (timeout {}s)",
            config.url, config.timeout_secs
        );

        Ok(Self { client, config })
    }
}

#[async_trait]
impl RankingService for HttpRankingService {
    async fn rank(&self, cards: &[Card]) -> Result<HandRanking, RankingError> {
        let payload = serde_json::to_string(cards)
            .map_err(|e| RankingError::InvalidResponse(e.to_string()))?;

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&self.config.url)
            .form(&[("cards", payload)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RankingError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let ranking: HandRanking = serde_json::from_str(&body)
            .map_err(|e| RankingError::InvalidResponse(e.to_string()))?;

        debug!(
            "Ranking received in {:?}: rank {}",
            start.elapsed(),
            ranking.rank
        );

        Ok(ranking)
    }
}

/// Static ranking service (for testing)
pub struct StaticRankingService {
    rank: Option<u8>,
}

impl StaticRankingService {
    pub fn new(rank: u8) -> Self {
        Self { rank: Some(rank) }
    }

    /// Always fails as if the service were down
    pub fn unavailable() -> Self {
        Self { rank: None }
    }
}

#[async_trait]
impl RankingService for StaticRankingService {
    async fn rank(&self, _cards: &[Card]) -> Result<HandRanking, RankingError> {
        self.rank
            .map(HandRanking::with_rank)
            .ok_or(RankingError::Unavailable)
    }
}

/// Ranking lookup that degrades to "unavailable" instead of failing
#[derive(Clone, Default)]
pub struct HandOracle {
    service: Option<Arc<dyn RankingService>>,
}

impl HandOracle {
    pub fn new(service: Option<Arc<dyn RankingService>>) -> Self {
        Self { service }
    }

    pub fn is_configured(&self) -> bool {
        self.service.is_some()
    }

    /// None when no service is configured or the call failed for any reason
    pub async fn rank(&self, cards: &[Card]) -> Option<HandRanking> {
        let service = self.service.as_ref()?;

        match service.rank(cards).await {
            Ok(ranking) => Some(ranking),
            Err(e) => {
                warn!("Ranking service unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Rank, Suit};

    fn cards() -> Vec<Card> {
        vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ]
    }

    #[tokio::test]
    async fn test_static_service() {
        let service = StaticRankingService::new(4);
        let ranking = service.rank(&cards()).await.unwrap();
        assert_eq!(ranking.rank, 4);
    }

    #[tokio::test]
    async fn test_oracle_without_service_is_unavailable() {
        let oracle = HandOracle::default();
        assert!(!oracle.is_configured());
        assert!(oracle.rank(&cards()).await.is_none());
    }

    #[tokio::test]
    async fn test_oracle_swallows_failures() {
        let oracle = HandOracle::new(Some(Arc::new(StaticRankingService::unavailable())));
        assert!(oracle.rank(&cards()).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_http_service_is_unavailable() {
        let service = HttpRankingService::new(RankingConfig {
            url: "http://127.0.0.1:9/rank".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        let oracle = HandOracle::new(Some(Arc::new(service)));
        assert!(oracle.rank(&cards()).await.is_none());
    }
}
