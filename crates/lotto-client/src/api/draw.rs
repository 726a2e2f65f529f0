use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lotto_combora::Draw;
use serde::{Deserialize, Serialize};

use super::{ApiCommon, ApiRequest, CLIENT};

pub const LATEST_DRAW_PATH: &str = "/lotto";

/// Body of `GET /lotto`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DrawResponse {
    pub draw_date: String,
    pub winning_numbers: Vec<i64>,
    pub special_number: i64,
}

/// Accepts plain dates, RFC 3339, RFC 2822 and `%Y-%m-%d %H:%M:%S`.
pub fn parse_draw_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|d| d.date_naive()))
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|d| d.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|d| d.date()))
        .map_err(|e| anyhow::anyhow!("Invalid draw_date {raw:?}: {e}"))
}

fn to_number(value: i64) -> anyhow::Result<u8> {
    u8::try_from(value).map_err(|_e| anyhow::anyhow!("Number {value} is out of range (1-49)"))
}

impl TryFrom<DrawResponse> for Draw {
    type Error = anyhow::Error;

    fn try_from(data: DrawResponse) -> Result<Self, Self::Error> {
        let draw_date = parse_draw_date(&data.draw_date)?;

        let winning_numbers = data
            .winning_numbers
            .iter()
            .map(|&n| to_number(n))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let special_number = to_number(data.special_number)?;

        Ok(Self::new(draw_date, &winning_numbers, special_number)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LatestDrawRequest;

impl ApiRequest for LatestDrawRequest {
    type Response = DrawResponse;

    async fn execute(self, common: &ApiCommon) -> anyhow::Result<Self::Response> {
        let url = common.endpoint(LATEST_DRAW_PATH);
        log::debug!("Requesting latest draw from {url}");

        let resp = CLIENT.get(&url).timeout(common.timeout()).send().await;

        let response = match resp {
            Ok(response) => {
                if response.status().is_success() {
                    response
                } else {
                    let error_message =
                        format!("LatestDrawRequest failed with status: {}", response.status());
                    let text = response.text().await.unwrap_or_default();
                    log::error!("{error_message}\n==== Response: ====\n {text}");
                    return Err(anyhow::anyhow!("{error_message}"));
                }
            }
            Err(e) => return Err(anyhow::anyhow!("Request failed: {}", e)),
        };

        let response_text = response.text().await?;

        serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))
    }
}

/// Fetch and validate the latest draw
pub async fn try_fetch_latest_draw(common: &ApiCommon) -> anyhow::Result<Draw> {
    let response = LatestDrawRequest.execute(common).await?;
    Draw::try_from(response)
}

/// Fetch the latest draw once. Failures are logged and become `None`; there
/// is no retry.
pub async fn fetch_latest_draw(common: &ApiCommon) -> Option<Draw> {
    match try_fetch_latest_draw(common).await {
        Ok(draw) => {
            log::info!("Fetched draw of {}", draw.draw_date());
            Some(draw)
        }
        Err(e) => {
            log::error!("Failed to fetch latest draw: {e:#}");
            None
        }
    }
}
