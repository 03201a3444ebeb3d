//! Statistics and Chart Endpoints

use super::send;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{ChartSet, Statistics};

pub async fn get_statistics(config: &AppConfig) -> Result<Statistics, ApiError> {
    let envelope = send("GET", &config.endpoint("/stats"), None).await?;
    envelope
        .statistics
        .ok_or_else(|| ApiError::Decode("missing statistics".to_string()))
}

/// Chart payloads; a missing `charts` key yields an empty set
pub async fn get_charts(config: &AppConfig) -> Result<ChartSet, ApiError> {
    let envelope = send("GET", &config.endpoint("/charts"), None).await?;
    Ok(envelope.charts.unwrap_or_default())
}
