//! Aggregate-search source: vacancy snippets from a web-search API.
//!
//! The search is scoped to Indeed NL via a `site:` query. Each result
//! snippet yields at most one employer and one salary; the aggregate over
//! all snippets becomes a [`SearchAggregate`].

use std::time::Duration;

use lmi_core::{
    AppConfig, EmployerFrequency, PartialReport, ReportFields, SalaryRange, SearchAggregate,
    SearchVacancy, SourceKind,
};
use lmi_extract::{employer_from_snippet, salary_from_snippet};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

use crate::error::SourceError;
use crate::types::{SearchResponse, SearchResult};

const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/";
const SEARCH_PATH: &str = "res/v1/web/search";
const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// The API returns at most this many results per request.
pub const API_RESULT_LIMIT: usize = 20;

const SAMPLE_VACANCIES: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub max_results: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: 50,
            timeout_secs: 30,
            user_agent: "lmi/0.1 (labour-market-intelligence)".to_string(),
        }
    }
}

impl From<&AppConfig> for SearchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key: config.brave_search_api_key.clone(),
            base_url: config.search_base_url.clone(),
            max_results: config.search_max_results,
            timeout_secs: config.http_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Client for the web-search API plus snippet aggregation.
///
/// A source without an API key can still be constructed; every search then
/// fails with [`SourceError::MissingApiKey`].
pub struct SearchSource {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
    max_results: usize,
}

impl SearchSource {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if
    /// `config.base_url` does not parse.
    pub fn new(config: &SearchConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        // Exactly one trailing slash, so `join` appends to the base path.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            base_url,
            max_results: config.max_results,
        })
    }

    /// `site:nl.indeed.com "<title>" "<location>"`
    #[must_use]
    pub fn build_query(job_title: &str, location: &str) -> String {
        format!(r#"site:nl.indeed.com "{job_title}" "{location}""#)
    }

    /// Run one web search and return its raw results.
    ///
    /// At most `min(max_results, 20)` results are requested.
    ///
    /// # Errors
    ///
    /// - [`SourceError::MissingApiKey`] when no key is configured.
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] for any status other than 200.
    /// - [`SourceError::Deserialize`] if the body is not the expected JSON.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SourceError> {
        let api_key = self.api_key.as_deref().ok_or(SourceError::MissingApiKey)?;
        let url = self.search_url(query, max_results)?;

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: format!("web search (q={query})"),
                source: e,
            })?;

        let results = parsed.web.map(|web| web.results).unwrap_or_default();
        tracing::debug!(query, count = results.len(), "web search returned");
        Ok(results)
    }

    /// Aggregate search results into a partial report. Pure.
    #[must_use]
    pub fn from_results(results: &[SearchResult]) -> PartialReport {
        let vacancies: Vec<SearchVacancy> = results.iter().map(vacancy_from_result).collect();

        let salaries: Vec<u64> = vacancies
            .iter()
            .filter_map(|vacancy| vacancy.salary)
            .filter(|salary| *salary > 0)
            .collect();
        let salary_count = u128::try_from(salaries.len()).unwrap_or(0);
        let salary_sum: u128 = salaries.iter().map(|salary| u128::from(*salary)).sum();
        let avg_salary = salary_sum
            .checked_div(salary_count)
            .and_then(|avg| u64::try_from(avg).ok());

        let aggregate = SearchAggregate {
            total_found: u64::try_from(vacancies.len()).unwrap_or(u64::MAX),
            avg_salary,
            salary_range: SalaryRange {
                min: salaries.iter().min().copied(),
                max: salaries.iter().max().copied(),
            },
            employers: rank_employers(&vacancies),
            sample_vacancies: vacancies.into_iter().take(SAMPLE_VACANCIES).collect(),
        };

        let mut partial = PartialReport::new(SourceKind::SearchAggregate, ReportFields::default());
        partial.aggregate = Some(aggregate);
        partial
    }

    /// Search for `job_title` in `location` and aggregate the results.
    ///
    /// # Errors
    ///
    /// Any error from [`search`](Self::search).
    pub async fn collect(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<PartialReport, SourceError> {
        let query = Self::build_query(job_title, location);
        let results = self.search(&query, self.max_results).await?;
        Ok(Self::from_results(&results))
    }

    fn search_url(&self, query: &str, max_results: usize) -> Result<Url, SourceError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| SourceError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &max_results.min(API_RESULT_LIMIT).to_string());
        Ok(url)
    }
}

fn vacancy_from_result(result: &SearchResult) -> SearchVacancy {
    let snippet = result.description.as_str();
    let salary = salary_from_snippet(snippet).unwrap_or_else(|e| {
        tracing::debug!(url = %result.url, error = %e, "ignoring unparseable snippet salary");
        None
    });

    SearchVacancy {
        title: result.title.clone(),
        url: result.url.clone(),
        snippet: snippet.to_string(),
        age: result.age.clone(),
        employer: employer_from_snippet(snippet),
        salary,
    }
}

/// Distinct employers, most frequent first. Ties keep first-seen order.
fn rank_employers(vacancies: &[SearchVacancy]) -> Vec<EmployerFrequency> {
    let mut ranked: Vec<EmployerFrequency> = Vec::new();
    for name in vacancies.iter().filter_map(|v| v.employer.as_deref()) {
        match ranked.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => ranked.push(EmployerFrequency {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
