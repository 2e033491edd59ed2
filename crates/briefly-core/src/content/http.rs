//! HTTP-backed content source.
//!
//! Thin JSON client over the content backend's REST tables. Locale and
//! region select the table; responses are row arrays.

use std::future::Future;

use serde::Deserialize;

use super::{ContentSource, DailyFacts, DaySelector, Scoop};
use crate::clock::Region;
use crate::error::FetchError;

/// Content source speaking plain REST + JSON.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct DailyRow {
    payload: DailyFacts,
}

fn facts_table(locale: &str) -> &'static str {
    if locale == "fr" {
        "daily_data_fr"
    } else {
        "daily_data"
    }
}

fn scoop_table(region: Region, locale: &str) -> &'static str {
    if locale == "fr" {
        "current_scoop_fr"
    } else if region == Region::Eu {
        "current_scoop_eu"
    } else {
        "current_scoop"
    }
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl ContentSource for HttpContentSource {
    fn daily_facts(
        &self,
        selector: DaySelector,
        locale: &str,
    ) -> impl Future<Output = Result<DailyFacts, FetchError>> + Send {
        let url = format!(
            "{}/{}?month_num={}&day_num={}",
            self.base_url,
            facts_table(locale),
            selector.month,
            selector.day
        );
        let client = self.client.clone();
        async move {
            let rows: Vec<DailyRow> = client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            rows.into_iter()
                .next()
                .map(|row| row.payload)
                .ok_or(FetchError::NotFound {
                    month: selector.month,
                    day: selector.day,
                })
        }
    }

    fn scoop(
        &self,
        region: Region,
        locale: &str,
    ) -> impl Future<Output = Result<Scoop, FetchError>> + Send {
        let url = format!("{}/{}?id=1", self.base_url, scoop_table(region, locale));
        let client = self.client.clone();
        async move {
            let rows: Vec<Scoop> = client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            rows.into_iter()
                .next()
                .ok_or_else(|| FetchError::Payload("empty scoop response".to_string()))
        }
    }
}
