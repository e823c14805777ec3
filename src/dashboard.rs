//! Dashboard orchestration: load, aggregate and degrade per chart
//!
//! Every chart is an independently failing unit. A fetch failure, an empty
//! dataset or a dataset without usable labels turns into a placeholder
//! message for that one chart; the rest of the dashboard renders normally.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{error, warn};

use crate::aggregate::Grouping;
use crate::charts::{self, config::ChartConfig, ChartSpec};
use crate::fetch::{load_dataset, DatasetSource};

/// What a chart slot ends up showing
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    /// Ready-to-render configuration
    Chart(ChartConfig),
    /// Human-readable message shown in place of the chart
    Placeholder(String),
}

/// One dashboard slot after rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub key: &'static str,
    pub title: &'static str,
    pub outcome: ChartOutcome,
}

/// The standalone single-chart page
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: String,
    pub outcome: ChartOutcome,
}

/// Render a single chart, degrading every failure to a placeholder
///
/// Never returns an error: failures are logged and mapped to the chart's
/// placeholder message.
pub async fn render_chart(
    source: &dyn DatasetSource,
    spec: &ChartSpec,
    grouping: Grouping,
) -> ChartOutcome {
    let dataset = match load_dataset(source, spec.dataset_path).await {
        Ok(dataset) => dataset,
        Err(err) => {
            error!(dataset = spec.dataset_path, %err, "falha ao carregar dataset");
            return ChartOutcome::Placeholder(spec.missing_msg.to_string());
        }
    };

    if dataset.is_empty() {
        warn!(dataset = spec.dataset_path, "dataset ausente");
        return ChartOutcome::Placeholder(spec.empty_msg.to_string());
    }

    match spec.build(&dataset, grouping) {
        Ok(config) => ChartOutcome::Chart(config),
        Err(message) => {
            warn!(dataset = spec.dataset_path, "dataset sem categorias utilizáveis");
            ChartOutcome::Placeholder(message)
        }
    }
}

/// Render every registered chart concurrently
///
/// Loads are issued at once and joined regardless of individual failure, so a
/// stalled or broken dataset affects only its own slot. Results come back in
/// registry order.
pub async fn render_all(source: Arc<dyn DatasetSource>) -> Vec<ChartView> {
    let registry = charts::registry();

    let mut set = JoinSet::new();
    for (index, spec) in registry.iter().enumerate() {
        let source = Arc::clone(&source);
        set.spawn(async move {
            (
                index,
                render_chart(source.as_ref(), spec, Grouping::default()).await,
            )
        });
    }

    let mut outcomes: Vec<Option<ChartOutcome>> = registry.iter().map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(err) => error!(%err, "tarefa de gráfico abortada"),
        }
    }

    registry
        .iter()
        .zip(outcomes)
        .map(|(spec, outcome)| ChartView {
            key: spec.key,
            title: spec.title,
            outcome: outcome
                .unwrap_or_else(|| ChartOutcome::Placeholder(spec.missing_msg.to_string())),
        })
        .collect()
}

/// Render the chart selected by the `chart` query parameter
///
/// The key is trimmed and lowercased before lookup. Unrecognized or absent
/// keys produce a descriptive placeholder rather than an error.
pub async fn render_page(source: &dyn DatasetSource, query: Option<&str>) -> PageView {
    let Some(raw) = query else {
        warn!("param chart ausente");
        return PageView {
            title: "Escolha um gráfico no painel".to_string(),
            outcome: ChartOutcome::Placeholder(
                "Escolha um gráfico no painel para exibir.".to_string(),
            ),
        };
    };

    let key = raw.trim().to_lowercase();
    let Some(spec) = charts::by_key(&key) else {
        warn!(chart = raw, "chart desconhecido");
        return PageView {
            title: "Gráfico não encontrado".to_string(),
            outcome: ChartOutcome::Placeholder(format!("Gráfico desconhecido: {raw}")),
        };
    };

    PageView {
        title: spec.title.to_string(),
        outcome: render_chart(source, spec, Grouping::default()).await,
    }
}
