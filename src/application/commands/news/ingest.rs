// src/application/commands/news/ingest.rs
use super::NewsCommandService;
use crate::{
    application::{
        dto::IngestionStats,
        error::{ApplicationError, ApplicationResult},
        ports::news_source::{DEFAULT_MAX_ARTICLES, FetchParameters},
        validation::Violations,
    },
    domain::{
        errors::DomainResult,
        news::{Language, NewsArticle},
    },
};
use chrono::{DateTime, Utc};

/// Raw ingestion request as received from a caller (HTTP body or CLI flags).
#[derive(Debug, Clone, Default)]
pub struct IngestNewsCommand {
    pub keyword: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub max: Option<u32>,
}

impl IngestNewsCommand {
    pub fn builder() -> IngestNewsCommandBuilder {
        IngestNewsCommandBuilder::default()
    }

    /// Check every field and turn the request into typed fetch parameters.
    pub fn validate(self) -> ApplicationResult<FetchParameters> {
        let mut violations = Violations::default();

        let keyword = non_blank(self.keyword);
        let country = non_blank(self.country);
        let language = non_blank(self.language);

        if keyword.is_none() && country.is_none() {
            violations.push(
                "keyword",
                "Either keyword or country parameter is required",
                serde_json::Value::Null,
            );
        }
        violations.check_max_length("keyword", keyword.as_deref());
        violations.check_code("language", "Language", language.as_deref());
        violations.check_code("country", "Country", country.as_deref());
        let from = violations.parse_date("from", self.from.as_deref());
        let to = violations.parse_date("to", self.to.as_deref());
        let max = self.max.unwrap_or(DEFAULT_MAX_ARTICLES);
        violations.check_range("max", "Max parameter", max, 1, 100);

        if !violations.is_empty() {
            return violations.finish(FetchParameters::default());
        }

        let language = language.map(Language::new).transpose()?;
        violations.finish(FetchParameters {
            keyword,
            language,
            country,
            from,
            to,
            max,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Default)]
pub struct IngestNewsCommandBuilder {
    command: IngestNewsCommand,
}

impl IngestNewsCommandBuilder {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.command.keyword = Some(keyword.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.command.language = Some(language.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.command.country = Some(country.into());
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.command.from = Some(from.into());
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.command.to = Some(to.into());
        self
    }

    pub fn max(mut self, max: u32) -> Self {
        self.command.max = Some(max);
        self
    }

    pub fn build(self) -> IngestNewsCommand {
        self.command
    }
}

/// What happened to a single candidate during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReconcileOutcome {
    Saved,
    Updated,
    Skipped,
}

impl IngestionStats {
    fn record(&mut self, outcome: ReconcileOutcome) {
        match outcome {
            ReconcileOutcome::Saved => self.saved += 1,
            ReconcileOutcome::Updated => self.updated += 1,
            ReconcileOutcome::Skipped => self.skipped += 1,
        }
    }
}

impl NewsCommandService {
    pub async fn ingest(&self, command: IngestNewsCommand) -> ApplicationResult<IngestionStats> {
        let params = command.validate()?;
        self.ingest_with(&params).await
    }

    /// Fetch one batch and reconcile every candidate against the store.
    ///
    /// A failed fetch fails the call. Failures on individual candidates are
    /// counted in `errors` and never abort the rest of the batch.
    pub async fn ingest_with(&self, params: &FetchParameters) -> ApplicationResult<IngestionStats> {
        let candidates = match self.source.fetch_articles(params).await {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::error!(error = %err, "failed to ingest articles");
                return Err(ApplicationError::Fetch(err));
            }
        };

        let mut stats = IngestionStats::default();
        for candidate in candidates {
            let external_id = candidate.external_id().clone();
            match self.reconcile(candidate).await {
                Ok(outcome) => {
                    if outcome == ReconcileOutcome::Updated {
                        tracing::info!(external_id = %external_id, "article updated");
                    }
                    stats.record(outcome);
                }
                Err(err) => {
                    stats.errors += 1;
                    tracing::error!(
                        external_id = %external_id,
                        error = %err,
                        "failed to save article"
                    );
                }
            }
        }

        tracing::info!(
            saved = stats.saved,
            updated = stats.updated,
            skipped = stats.skipped,
            errors = stats.errors,
            "ingestion finished"
        );
        Ok(stats)
    }

    async fn reconcile(&self, candidate: NewsArticle) -> DomainResult<ReconcileOutcome> {
        let existing = self
            .repository
            .find_by_external_id(candidate.external_id())
            .await?;

        let Some(mut existing) = existing else {
            self.repository.save(&candidate).await?;
            return Ok(ReconcileOutcome::Saved);
        };

        if !existing.has_content_changed(candidate.content(), candidate.published_at()) {
            return Ok(ReconcileOutcome::Skipped);
        }

        apply_candidate(&mut existing, &candidate, self.clock.now());
        self.repository.save(&existing).await?;
        Ok(ReconcileOutcome::Updated)
    }
}

/// Copy every mutable field of `candidate` onto `existing`. Source, url and
/// image are carried along here even though they never trigger an update.
fn apply_candidate(existing: &mut NewsArticle, candidate: &NewsArticle, now: DateTime<Utc>) {
    existing.update_content(candidate.content().clone(), now);
    existing.update_source(candidate.source().clone(), now);
    existing.update_url(candidate.url(), now);
    existing.update_image_url(candidate.image_url().map(str::to_string), now);
    existing.update_published_at(candidate.published_at(), now);
}
