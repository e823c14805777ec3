//! Integration tests for paineldata

use std::fs;
use std::sync::Arc;

use paineldata::charts::config::ChartType;
use paineldata::{by_key, load_dataset, render_chart, render_page, ChartOutcome, DirSource};
use tempfile::TempDir;

/// Lay out a dataset root directory the way the dashboard expects it
fn dataset_root(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let datasets = dir.path().join("datasets");
    fs::create_dir(&datasets).unwrap();
    for (name, text) in files {
        fs::write(datasets.join(name), text).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_csv_to_chart_config_end_to_end() {
    let dir = dataset_root(&[(
        "alunos_por_situacao.csv",
        "Situacao;qtd\nAtivo;120\nConcluído;300\n\"Evasão/Cancelado\";45\n",
    )]);
    let source = DirSource::new(dir.path());

    let spec = by_key("situacao").unwrap();
    let outcome = render_chart(&source, spec, Default::default()).await;

    let ChartOutcome::Chart(config) = outcome else {
        panic!("expected a rendered chart");
    };
    assert_eq!(config.chart_type, ChartType::Bar);
    // Sorted by count, semicolon delimiter detected, quoted label unwrapped
    assert_eq!(
        config.data.labels,
        vec!["Concluído", "Ativo", "Evasão/Cancelado"]
    );
    assert_eq!(config.data.datasets[0].data, vec![300.0, 120.0, 45.0]);
    assert_eq!(config.options.tooltip_total, Some(465.0));
}

#[tokio::test]
async fn test_windows_export_parses_like_unix_one() {
    let unix = dataset_root(&[("modalidade.csv", "Modalidade,qtd\nEAD,10\nPresencial,20\n")]);
    let windows = dataset_root(&[(
        "modalidade.csv",
        "Modalidade,qtd\r\nEAD,10\r\nPresencial,20\r\n",
    )]);

    let a = load_dataset(&DirSource::new(unix.path()), "datasets/modalidade.csv")
        .await
        .unwrap();
    let b = load_dataset(&DirSource::new(windows.path()), "datasets/modalidade.csv")
        .await
        .unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_header_casing_variants_are_equivalent() {
    let upper = dataset_root(&[("cota_mec.csv", "Cota_MEC,Qtd\nAmpla,9\n")]);
    let lower = dataset_root(&[("cota_mec.csv", "cota_mec,qtd\nAmpla,9\n")]);
    let spec = by_key("cota_mec").unwrap();

    let a = render_chart(&DirSource::new(upper.path()), spec, Default::default()).await;
    let b = render_chart(&DirSource::new(lower.path()), spec, Default::default()).await;
    assert_eq!(a, b);
    assert!(matches!(a, ChartOutcome::Chart(_)));
}

#[tokio::test]
async fn test_missing_file_renders_placeholder_not_error() {
    let dir = dataset_root(&[]);
    let source = DirSource::new(dir.path());

    let spec = by_key("etnia").unwrap();
    let outcome = render_chart(&source, spec, Default::default()).await;
    assert_eq!(
        outcome,
        ChartOutcome::Placeholder("Sem dados de etnia/raça no arquivo mestre.".to_string())
    );
}

#[tokio::test]
async fn test_render_all_survives_partial_dataset_roots() {
    let dir = dataset_root(&[
        ("turno.csv", "Turno,qtd\nManhã,8\nNoite,3\n"),
        ("cotas.csv", "Categoria,Tipo_Cota,qtd\nAmpla,MEC,4\n"),
    ]);
    let source: Arc<dyn paineldata::DatasetSource> = Arc::new(DirSource::new(dir.path()));

    let views = paineldata::render_all(source).await;
    let rendered: Vec<&str> = views
        .iter()
        .filter(|view| matches!(view.outcome, ChartOutcome::Chart(_)))
        .map(|view| view.key)
        .collect();
    assert_eq!(rendered, vec!["turno", "cotas"]);
}

#[tokio::test]
async fn test_single_chart_page_round_trip() {
    let dir = dataset_root(&[(
        "natureza_escola.csv",
        "natureza_participacao,tipo_escola_origem,qtd\nPresencial,Pública,7\nEAD,Privada,2\n",
    )]);
    let source = DirSource::new(dir.path());

    let page = render_page(&source, Some("natureza_escola")).await;
    assert_eq!(page.title, "Natureza e Escola de Origem");
    let ChartOutcome::Chart(config) = page.outcome else {
        panic!("expected a rendered chart");
    };
    assert!(config.options.stacked);
    assert_eq!(config.data.labels, vec!["Presencial", "EAD"]);
}

#[tokio::test]
async fn test_http_404_surfaces_as_placeholder() {
    use async_trait::async_trait;
    use paineldata::{DatasetSource, PainelError, Result};

    struct NotFound;

    #[async_trait]
    impl DatasetSource for NotFound {
        async fn fetch_text(&self, path: &str) -> Result<String> {
            Err(PainelError::HttpStatus {
                path: path.to_string(),
                status: 404,
            })
        }
    }

    for spec in paineldata::registry() {
        let outcome = render_chart(&NotFound, spec, Default::default()).await;
        assert_eq!(
            outcome,
            ChartOutcome::Placeholder(spec.missing_msg.to_string())
        );
    }
}
