//! Chart registry: one spec per dashboard chart
//!
//! Each spec carries everything the orchestration layer needs: the dataset
//! path, the column(s) to aggregate, the chart shape, and the placeholder
//! messages for its failure modes. The registry replaces the pile of
//! near-identical per-chart modules the dashboard grew out of.

use crate::aggregate::{cross_tab, tally, total, Grouping, MissingLabel, UNINFORMED_LABEL};
use crate::charts::config::{
    ChartConfig, ChartData, ChartOptions, ChartType, IndexAxis, LegendPosition, SeriesData,
};
use crate::dataset::Dataset;
use crate::palette::{color_by_index, status_color};

/// Quantity column shared by every dataset file
const VALUE_COLUMN: &str = "qtd";

/// Value-axis title shared by every bar chart
const COUNT_AXIS_TITLE: &str = "Quantidade de Alunos";

/// Series label for single-series charts
const SERIES_LABEL: &str = "Alunos";

/// How a chart aggregates its dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartShape {
    /// One categorical column tallied into a single series
    Category {
        label_col: &'static str,
        chart_type: ChartType,
        missing: MissingLabel,
        sort_desc: bool,
        status_palette: bool,
        axis_title: Option<&'static str>,
        legend: LegendPosition,
        show_percent: bool,
        no_labels_msg: Option<&'static str>,
    },
    /// Cross-tabulation rendered as grouped vertical bars
    GroupedBar {
        axis_col: &'static str,
        series_col: &'static str,
        axis_title: &'static str,
    },
    /// Cross-tabulation rendered as stacked horizontal bars whose grouping
    /// can be swapped by the caller
    SwitchableStacked {
        primary_col: &'static str,
        secondary_col: &'static str,
        primary_title: &'static str,
        secondary_title: &'static str,
        sort_series: bool,
        status_on_primary: bool,
        relation_title: bool,
    },
}

/// One dashboard chart: identity, dataset, shape and placeholder messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    /// Query-parameter key selecting this chart
    pub key: &'static str,
    /// Page title shown above the chart
    pub title: &'static str,
    /// Relative path of the dataset file
    pub dataset_path: &'static str,
    /// Placeholder when the dataset cannot be fetched
    pub missing_msg: &'static str,
    /// Placeholder when the dataset has no data rows
    pub empty_msg: &'static str,
    pub shape: ChartShape,
}

static CHARTS: [ChartSpec; 15] = [
    ChartSpec {
        key: "situacao",
        title: "Situação dos Alunos",
        dataset_path: "datasets/alunos_por_situacao.csv",
        missing_msg: "Sem dados de situação acadêmica no arquivo mestre.",
        empty_msg: "Sem registros de situação para exibir.",
        shape: ChartShape::Category {
            label_col: "situacao",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: true,
            status_palette: true,
            axis_title: Some("Situação Acadêmica"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: None,
        },
    },
    ChartSpec {
        key: "modalidade",
        title: "Modalidades dos Cursos",
        dataset_path: "datasets/modalidade.csv",
        missing_msg: "Sem dados de modalidade do curso no arquivo mestre.",
        empty_msg: "Sem registros de modalidade para exibir.",
        shape: ChartShape::Category {
            label_col: "modalidade",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Skip,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Modalidade do Curso"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Modalidades não informadas na planilha."),
        },
    },
    ChartSpec {
        key: "turno",
        title: "Distribuição por Turno",
        dataset_path: "datasets/turno.csv",
        missing_msg: "Sem dados de turno no arquivo mestre.",
        empty_msg: "Sem registros de turno para exibir.",
        shape: ChartShape::Category {
            label_col: "turno",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Skip,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Turno"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Turnos não informados na planilha."),
        },
    },
    ChartSpec {
        key: "progresso",
        title: "Progresso no Curso",
        dataset_path: "datasets/dist_percentual_progresso.csv",
        missing_msg: "Sem dados de progresso no arquivo mestre.",
        empty_msg: "Sem registros de progresso para exibir.",
        shape: ChartShape::Category {
            label_col: "bucket_progresso",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Keep,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Faixa de Progresso"),
            legend: LegendPosition::Hidden,
            show_percent: false,
            no_labels_msg: None,
        },
    },
    ChartSpec {
        key: "forma_ingresso",
        title: "Formas de Ingresso",
        dataset_path: "datasets/forma_ingresso.csv",
        missing_msg: "Sem dados de forma de ingresso no arquivo mestre.",
        empty_msg: "Sem registros de forma de ingresso para exibir.",
        shape: ChartShape::Category {
            label_col: "forma_ingresso",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Forma de Ingresso"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: None,
        },
    },
    ChartSpec {
        key: "cota_mec",
        title: "Cota MEC",
        dataset_path: "datasets/cota_mec.csv",
        missing_msg: "Sem dados de cota MEC no arquivo mestre.",
        empty_msg: "Sem registros de cota MEC para exibir.",
        shape: ChartShape::Category {
            label_col: "cota_mec",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Cota MEC"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Categorias de cota MEC não informadas."),
        },
    },
    ChartSpec {
        key: "cota_sistec",
        title: "Cota Sistec",
        dataset_path: "datasets/cota_sistec.csv",
        missing_msg: "Sem dados de cota Sistec no arquivo mestre.",
        empty_msg: "Sem registros de cota Sistec para exibir.",
        shape: ChartShape::Category {
            label_col: "cota_sistec",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Cota Sistec"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Categorias de cota Sistec não informadas."),
        },
    },
    ChartSpec {
        key: "etnia",
        title: "Etnia/Raça",
        dataset_path: "datasets/etnia_raca.csv",
        missing_msg: "Sem dados de etnia/raça no arquivo mestre.",
        empty_msg: "Sem registros de etnia/raça para exibir.",
        shape: ChartShape::Category {
            label_col: "etnia_raca",
            chart_type: ChartType::Doughnut,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: None,
            legend: LegendPosition::Bottom,
            show_percent: true,
            no_labels_msg: Some("Categorias de etnia não informadas."),
        },
    },
    ChartSpec {
        key: "necessidades",
        title: "Necessidades Especiais",
        dataset_path: "datasets/necessidades_especiais.csv",
        missing_msg: "Sem dados de necessidades especiais no arquivo mestre.",
        empty_msg: "Sem registros de necessidades especiais para exibir.",
        shape: ChartShape::Category {
            label_col: "tem_ne",
            chart_type: ChartType::Pie,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: None,
            legend: LegendPosition::Bottom,
            show_percent: true,
            no_labels_msg: Some("Sem informação sobre necessidades especiais."),
        },
    },
    ChartSpec {
        key: "tipo_escola",
        title: "Tipo de Escola de Origem",
        dataset_path: "datasets/tipo_escola_origem.csv",
        missing_msg: "Sem dados de tipo de escola de origem no arquivo mestre.",
        empty_msg: "Sem registros de tipo de escola de origem para exibir.",
        shape: ChartShape::Category {
            label_col: "tipo_escola_origem",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Tipo de Escola de Origem"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Tipos de escola não informados."),
        },
    },
    ChartSpec {
        key: "natureza",
        title: "Natureza de Participação",
        dataset_path: "datasets/natureza_participacao.csv",
        missing_msg: "Sem dados de natureza de participação no arquivo mestre.",
        empty_msg: "Sem registros de natureza de participação para exibir.",
        shape: ChartShape::Category {
            label_col: "natureza_participacao",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Skip,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Natureza de Participação"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: Some("Natureza de Participação não informada na planilha."),
        },
    },
    ChartSpec {
        key: "transporte",
        title: "Transporte Escolar",
        dataset_path: "datasets/transporte_tipo.csv",
        missing_msg: "Sem dados de transporte escolar no arquivo mestre.",
        empty_msg: "Sem registros de transporte escolar para exibir.",
        shape: ChartShape::Category {
            label_col: "transporte_tipo",
            chart_type: ChartType::Bar,
            missing: MissingLabel::Substitute,
            sort_desc: false,
            status_palette: false,
            axis_title: Some("Tipo de Transporte"),
            legend: LegendPosition::Hidden,
            show_percent: true,
            no_labels_msg: None,
        },
    },
    ChartSpec {
        key: "cotas",
        title: "Cotas (MEC/Sistec)",
        dataset_path: "datasets/cotas.csv",
        missing_msg: "Sem dados de cotas no arquivo mestre.",
        empty_msg: "Sem registros de cotas para exibir.",
        shape: ChartShape::GroupedBar {
            axis_col: "categoria",
            series_col: "tipo_cota",
            axis_title: "Categoria da Cota",
        },
    },
    ChartSpec {
        key: "situacao_escola",
        title: "Situação e Escola de Origem",
        dataset_path: "datasets/situacao_escola.csv",
        missing_msg: "Sem dados para o gráfico de Situação e Escola.",
        empty_msg: "Sem registros para o gráfico de Situação e Escola.",
        shape: ChartShape::SwitchableStacked {
            primary_col: "tipo_escola_origem",
            secondary_col: "status_simplificado",
            primary_title: "Tipo de Escola de Origem",
            secondary_title: "Situação no Curso",
            sort_series: true,
            status_on_primary: true,
            relation_title: false,
        },
    },
    ChartSpec {
        key: "natureza_escola",
        title: "Natureza e Escola de Origem",
        dataset_path: "datasets/natureza_escola.csv",
        missing_msg: "Sem dados para o gráfico de Natureza e Escola.",
        empty_msg: "Sem registros para o gráfico de Natureza e Escola.",
        shape: ChartShape::SwitchableStacked {
            primary_col: "natureza_participacao",
            secondary_col: "tipo_escola_origem",
            primary_title: "Natureza de Participação",
            secondary_title: "Tipo de Escola de Origem",
            sort_series: false,
            status_on_primary: false,
            relation_title: true,
        },
    },
];

/// Every chart on the dashboard, in display order
pub fn registry() -> &'static [ChartSpec] {
    &CHARTS
}

/// Look up a chart by its (already trimmed and lowercased) query key
pub fn by_key(key: &str) -> Option<&'static ChartSpec> {
    CHARTS.iter().find(|spec| spec.key == key)
}

impl ChartSpec {
    /// Aggregate the dataset into a ready-to-render configuration
    ///
    /// `grouping` only affects [`ChartShape::SwitchableStacked`] charts. The
    /// error side carries the placeholder message for the one data-dependent
    /// failure: every extracted label was empty and the chart skips empties.
    pub fn build(
        &self,
        dataset: &Dataset,
        grouping: Grouping,
    ) -> std::result::Result<ChartConfig, String> {
        match self.shape {
            ChartShape::Category {
                label_col,
                chart_type,
                missing,
                sort_desc,
                status_palette,
                axis_title,
                legend,
                show_percent,
                no_labels_msg,
            } => {
                let items = tally(dataset, label_col, VALUE_COLUMN, missing, sort_desc);
                if items.is_empty() {
                    return Err(no_labels_msg.unwrap_or(self.empty_msg).to_string());
                }

                let colors = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        if status_palette {
                            status_color(&item.label, index).to_string()
                        } else {
                            color_by_index(index).to_string()
                        }
                    })
                    .collect();
                let grand_total = total(&items);
                let is_bar = chart_type == ChartType::Bar;

                Ok(ChartConfig {
                    chart_type,
                    data: ChartData {
                        labels: items.iter().map(|item| item.label.clone()).collect(),
                        datasets: vec![SeriesData {
                            label: SERIES_LABEL.to_string(),
                            data: items.iter().map(|item| item.value).collect(),
                            background_color: colors,
                            border_width: 1,
                        }],
                    },
                    options: ChartOptions {
                        index_axis: if is_bar { IndexAxis::Y } else { IndexAxis::X },
                        stacked: false,
                        legend,
                        title: None,
                        x_title: is_bar.then(|| COUNT_AXIS_TITLE.to_string()),
                        y_title: axis_title.map(str::to_string),
                        tooltip_total: show_percent.then_some(grand_total),
                    },
                })
            }
            ChartShape::GroupedBar {
                axis_col,
                series_col,
                axis_title,
            } => {
                let tab = cross_tab(
                    dataset,
                    axis_col,
                    series_col,
                    VALUE_COLUMN,
                    Some(UNINFORMED_LABEL),
                    false,
                );
                let grand_total: f64 = tab
                    .series
                    .iter()
                    .flat_map(|series| series.values.iter())
                    .sum();

                Ok(ChartConfig {
                    chart_type: ChartType::Bar,
                    data: ChartData {
                        labels: tab.labels,
                        datasets: tab
                            .series
                            .into_iter()
                            .enumerate()
                            .map(|(index, series)| SeriesData {
                                label: series.name,
                                data: series.values,
                                background_color: vec![color_by_index(index).to_string()],
                                border_width: 1,
                            })
                            .collect(),
                    },
                    options: ChartOptions {
                        index_axis: IndexAxis::X,
                        stacked: false,
                        legend: LegendPosition::Top,
                        title: None,
                        x_title: Some(axis_title.to_string()),
                        y_title: Some(COUNT_AXIS_TITLE.to_string()),
                        tooltip_total: Some(grand_total),
                    },
                })
            }
            ChartShape::SwitchableStacked {
                primary_col,
                secondary_col,
                primary_title,
                secondary_title,
                sort_series,
                status_on_primary,
                relation_title,
            } => {
                let (axis_col, series_col, axis_title, series_title) = match grouping {
                    Grouping::Primary => (primary_col, secondary_col, primary_title, secondary_title),
                    Grouping::Swapped => (secondary_col, primary_col, secondary_title, primary_title),
                };
                let tab = cross_tab(dataset, axis_col, series_col, VALUE_COLUMN, None, sort_series);
                let use_status = status_on_primary && grouping == Grouping::Primary;

                Ok(ChartConfig {
                    chart_type: ChartType::Bar,
                    data: ChartData {
                        labels: tab.labels,
                        datasets: tab
                            .series
                            .into_iter()
                            .enumerate()
                            .map(|(index, series)| {
                                let color = if use_status {
                                    status_color(&series.name, index)
                                } else {
                                    color_by_index(index)
                                };
                                SeriesData {
                                    label: series.name,
                                    data: series.values,
                                    background_color: vec![color.to_string()],
                                    border_width: 0,
                                }
                            })
                            .collect(),
                    },
                    options: ChartOptions {
                        index_axis: IndexAxis::Y,
                        stacked: true,
                        legend: LegendPosition::Top,
                        title: relation_title
                            .then(|| format!("Relação entre {axis_title} e {series_title}")),
                        x_title: Some(COUNT_AXIS_TITLE.to_string()),
                        y_title: Some(axis_title.to_string()),
                        tooltip_total: None,
                    },
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str) -> &'static ChartSpec {
        by_key(key).unwrap()
    }

    #[test]
    fn test_registry_keys_are_unique() {
        for (index, spec) in registry().iter().enumerate() {
            assert!(
                !registry()[..index].iter().any(|other| other.key == spec.key),
                "duplicated key {}",
                spec.key
            );
        }
    }

    #[test]
    fn test_by_key_expects_normalized_input() {
        assert!(by_key("situacao").is_some());
        assert!(by_key("Situacao").is_none());
        assert!(by_key("grafico_inexistente").is_none());
    }

    #[test]
    fn test_category_chart_sorts_and_colors_by_status() {
        let dataset = Dataset::parse("Situacao,qtd\nAtivo,3\nConcluído,8\n,1\n");
        let config = spec("situacao").build(&dataset, Grouping::default()).unwrap();

        assert_eq!(config.chart_type, ChartType::Bar);
        assert_eq!(
            config.data.labels,
            vec!["Concluído", "Ativo", UNINFORMED_LABEL]
        );
        let series = &config.data.datasets[0];
        assert_eq!(series.data, vec![8.0, 3.0, 1.0]);
        assert_eq!(series.background_color[0], "#2e7d32");
        assert_eq!(series.background_color[1], "#1976d2");
        assert_eq!(config.options.index_axis, IndexAxis::Y);
        assert_eq!(config.options.tooltip_total, Some(12.0));
    }

    #[test]
    fn test_category_chart_without_labels_reports_placeholder() {
        let dataset = Dataset::parse("Modalidade,qtd\n,3\n,2\n");
        let err = spec("modalidade")
            .build(&dataset, Grouping::default())
            .unwrap_err();
        assert_eq!(err, "Modalidades não informadas na planilha.");
    }

    #[test]
    fn test_doughnut_chart_has_no_axes() {
        let dataset = Dataset::parse("Etnia_Raca,qtd\nParda,5\nBranca,3\n");
        let config = spec("etnia").build(&dataset, Grouping::default()).unwrap();
        assert_eq!(config.chart_type, ChartType::Doughnut);
        assert_eq!(config.options.legend, LegendPosition::Bottom);
        assert_eq!(config.options.x_title, None);
        assert_eq!(config.options.y_title, None);
    }

    #[test]
    fn test_progresso_tooltip_shows_no_percent() {
        let dataset = Dataset::parse("Bucket_Progresso,qtd\n0-25%,4\n");
        let config = spec("progresso").build(&dataset, Grouping::default()).unwrap();
        assert_eq!(config.options.tooltip_total, None);
    }

    #[test]
    fn test_grouped_bar_builds_one_series_per_quota_type() {
        let dataset = Dataset::parse(
            "Categoria,Tipo_Cota,qtd\nAmpla,MEC,5\nAmpla,Sistec,2\nPPI,MEC,3\n",
        );
        let config = spec("cotas").build(&dataset, Grouping::default()).unwrap();

        assert_eq!(config.data.labels, vec!["Ampla", "PPI"]);
        assert_eq!(config.data.datasets.len(), 2);
        assert_eq!(config.data.datasets[0].label, "MEC");
        assert_eq!(config.data.datasets[0].data, vec![5.0, 3.0]);
        assert_eq!(config.data.datasets[1].data, vec![2.0, 0.0]);
        assert_eq!(config.options.index_axis, IndexAxis::X);
        assert_eq!(config.options.tooltip_total, Some(10.0));
    }

    #[test]
    fn test_switchable_chart_swaps_axis_and_series() {
        let text = "tipo_escola_origem,status_simplificado,qtd\n\
                    Pública,Ativo,10\nPrivada,Concluído,4\n";
        let dataset = Dataset::parse(text);
        let spec = spec("situacao_escola");

        let primary = spec.build(&dataset, Grouping::Primary).unwrap();
        assert_eq!(primary.data.labels, vec!["Pública", "Privada"]);
        assert_eq!(primary.options.y_title.as_deref(), Some("Tipo de Escola de Origem"));
        // Status palette applies to the situation series
        assert_eq!(primary.data.datasets[0].label, "Ativo");
        assert_eq!(primary.data.datasets[0].background_color, vec!["#1976d2"]);
        assert!(primary.options.stacked);

        let swapped = spec.build(&dataset, Grouping::Swapped).unwrap();
        assert_eq!(swapped.data.labels, vec!["Ativo", "Concluído"]);
        assert_eq!(swapped.options.y_title.as_deref(), Some("Situação no Curso"));
        assert_eq!(swapped.data.datasets[0].background_color, vec![color_by_index(0)]);
    }

    #[test]
    fn test_relation_title_follows_grouping() {
        let text = "natureza_participacao,tipo_escola_origem,qtd\nPresencial,Pública,7\n";
        let dataset = Dataset::parse(text);
        let spec = spec("natureza_escola");

        let primary = spec.build(&dataset, Grouping::Primary).unwrap();
        assert_eq!(
            primary.options.title.as_deref(),
            Some("Relação entre Natureza de Participação e Tipo de Escola de Origem")
        );

        let swapped = spec.build(&dataset, Grouping::Swapped).unwrap();
        assert_eq!(
            swapped.options.title.as_deref(),
            Some("Relação entre Tipo de Escola de Origem e Natureza de Participação")
        );
    }

    #[test]
    fn test_switchable_series_sorted_for_situacao_escola() {
        let text = "tipo_escola_origem,status_simplificado,qtd\n\
                    Pública,Trancado,1\nPública,Ativo,2\n";
        let dataset = Dataset::parse(text);
        let config = spec("situacao_escola")
            .build(&dataset, Grouping::Primary)
            .unwrap();
        let names: Vec<&str> = config
            .data
            .datasets
            .iter()
            .map(|series| series.label.as_str())
            .collect();
        assert_eq!(names, vec!["Ativo", "Trancado"]);
    }
}
