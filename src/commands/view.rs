use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

use samhita::analytics::{AnalyticsFacade, KeywordState, Selection};
use samhita::config::Config;
use samhita::models::{GroupId, ReferenceCategory};
use samhita::source::{
    placeholder_hymns, placeholder_verses, resolve_or, CorpusSource, Dataset, FileSource,
    HttpSource,
};

/// Everything a command needs: where payloads come from and the initial view state
pub struct ViewContext {
    source: Box<dyn CorpusSource>,
    facade: AnalyticsFacade,
    config: Config,
}

impl ViewContext {
    /// Pick the HTTP source when an API url is configured, the data directory otherwise
    pub fn from_config(config: Config) -> Result<Self> {
        let source: Box<dyn CorpusSource> = match &config.source.api_url {
            Some(_) => Box::new(
                HttpSource::from_config(&config.source)
                    .context("Failed to create corpus service client")?,
            ),
            None => Box::new(FileSource::new(config.source.data_dir.clone())),
        };

        Ok(Self {
            source,
            facade: AnalyticsFacade::new(),
            config,
        })
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch a payload, substituting `default` on failure
    async fn load(&self, dataset: Dataset, default: Value) -> Value {
        resolve_or(self.source.fetch(&dataset).await, default)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("Failed to serialize view")?;
    writeln!(stdout).context("Failed to write view")?;
    Ok(())
}

pub async fn lengths(ctx: &ViewContext) -> Result<()> {
    let raw = ctx.load(Dataset::HymnLengths, Value::Null).await;
    print_json(&ctx.facade.hymn_length_panels(&raw))
}

pub async fn deities(ctx: &ViewContext) -> Result<()> {
    let raw = ctx.load(Dataset::DeityTrends, Value::Null).await;
    print_json(&ctx.facade.deity_prominence(&raw))
}

#[derive(Serialize)]
struct GrammarView<T> {
    cases: T,
    tenses: T,
}

pub async fn grammar(ctx: &ViewContext) -> Result<()> {
    let raw = ctx.load(Dataset::GrammarTrends, Value::Null).await;
    print_json(&GrammarView {
        cases: ctx.facade.grammar_cases(&raw),
        tenses: ctx.facade.grammar_tenses(&raw),
    })
}

pub async fn keywords(ctx: &ViewContext, query: String, term: Option<String>) -> Result<()> {
    let selected = term.unwrap_or_else(|| ctx.config.views.default_keyword.clone());
    let state = KeywordState::new(query, Some(selected));
    let raw = ctx.load(Dataset::KeywordTrends, Value::Null).await;
    print_json(&ctx.facade.keyword_view(&raw, &state))
}

pub async fn compare(ctx: &ViewContext, selection: Option<Vec<GroupId>>) -> Result<()> {
    let ids = selection.unwrap_or_else(|| ctx.config.views.default_selection.clone());
    let selection = Selection::from_ids(ids);
    let raw = ctx.load(Dataset::Groups, Value::Null).await;
    print_json(&ctx.facade.comparison_view(&raw, &selection))
}

pub async fn vocabulary(ctx: &ViewContext) -> Result<()> {
    let raw = ctx.load(Dataset::Groups, Value::Null).await;
    print_json(&ctx.facade.vocabulary_growth(&raw))
}

pub async fn complexity(ctx: &ViewContext) -> Result<()> {
    let raw = ctx.load(Dataset::AllGroups, Value::Null).await;
    print_json(&ctx.facade.complexity(&raw))
}

pub async fn hymns(ctx: &ViewContext, group: GroupId) -> Result<()> {
    let placeholder = serde_json::to_value(placeholder_hymns(group))?;
    let raw = ctx.load(Dataset::Hymns { group }, placeholder).await;
    print_json(&ctx.facade.hymn_bars(&raw))
}

pub async fn verses(ctx: &ViewContext, group: GroupId, hymn: u32) -> Result<()> {
    let placeholder = serde_json::to_value(placeholder_verses())?;
    let raw = ctx.load(Dataset::Verses { group, hymn }, placeholder).await;
    print_json(&ctx.facade.verse_cards(&raw))
}

pub async fn cultural(ctx: &ViewContext, category: Option<String>) -> Result<()> {
    let category = match category.as_deref() {
        Some(name) => Some(
            ReferenceCategory::parse(name)
                .with_context(|| format!("Unknown category '{name}' (tribes, rivers, places)"))?,
        ),
        None => None,
    };
    let raw = ctx.load(Dataset::CulturalReferences, Value::Null).await;
    print_json(&ctx.facade.cultural_cards(&raw, category))
}
