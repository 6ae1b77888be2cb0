use super::*;

fn source_with(base_url: &str, api_key: Option<&str>) -> SearchSource {
    SearchSource::new(&SearchConfig {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
        ..SearchConfig::default()
    })
    .expect("client construction should not fail")
}

fn snippets(descriptions: &[&str]) -> Vec<SearchResult> {
    descriptions
        .iter()
        .enumerate()
        .map(|(i, d)| SearchResult::new(format!("Vacature {i}"), *d))
        .collect()
}

#[test]
fn query_is_scoped_to_indeed_nl() {
    assert_eq!(
        SearchSource::build_query("Allround Monteur", "Arnhem"),
        r#"site:nl.indeed.com "Allround Monteur" "Arnhem""#
    );
}

#[test]
fn search_url_caps_count_and_encodes_query() {
    let source = source_with("https://api.search.brave.com", Some("key"));
    let url = source
        .search_url(r#"site:nl.indeed.com "Monteur" "Arnhem""#, 50)
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://api.search.brave.com/res/v1/web/search?q=site%3Anl.indeed.com+%22Monteur%22+%22Arnhem%22&count=20"
    );
}

#[test]
fn search_url_keeps_small_counts_and_base_path() {
    let source = source_with("http://127.0.0.1:9999/proxy/", Some("key"));
    let url = source.search_url("monteur", 5).expect("url");
    assert_eq!(url.path(), "/proxy/res/v1/web/search");
    assert!(url.as_str().ends_with("count=5"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = SearchSource::new(&SearchConfig {
        base_url: "not a url".to_string(),
        ..SearchConfig::default()
    });
    assert!(matches!(result, Err(SourceError::InvalidBaseUrl { .. })));
}

#[tokio::test]
async fn search_without_key_fails_before_any_request() {
    let source = source_with("http://127.0.0.1:9", None);
    let err = source.search("monteur", 10).await.expect_err("no key");
    assert!(matches!(err, SourceError::MissingApiKey));
}

#[tokio::test]
async fn blank_key_counts_as_missing() {
    let source = source_with("http://127.0.0.1:9", Some("   "));
    let err = source.collect("Monteur", "Arnhem").await.expect_err("no key");
    assert!(matches!(err, SourceError::MissingApiKey));
}

#[test]
fn from_results_aggregates_snippets() {
    let results = snippets(&[
        "Vacature bij Tata Steel zoekt een monteur. €3.200 per maand",
        "Heijmans zoekt allround monteur in Arnhem, €42.000 per jaar",
        "Werken bij Tata Steel in IJmuiden",
        "Monteur gezocht, salaris €...",
    ]);

    let partial = SearchSource::from_results(&results);
    assert_eq!(partial.source, SourceKind::SearchAggregate);
    assert_eq!(partial.fields, ReportFields::default());

    let aggregate = partial.aggregate.expect("aggregate");
    assert_eq!(aggregate.total_found, 4);
    assert_eq!(aggregate.avg_salary, Some(22_600));
    assert_eq!(aggregate.salary_range.min, Some(3_200));
    assert_eq!(aggregate.salary_range.max, Some(42_000));
    assert_eq!(
        aggregate.employers,
        vec![
            EmployerFrequency {
                name: "Tata Steel".to_string(),
                count: 2,
            },
            EmployerFrequency {
                name: "Heijmans".to_string(),
                count: 1,
            },
        ]
    );
    assert_eq!(aggregate.sample_vacancies[3].employer, None);
    assert_eq!(aggregate.sample_vacancies[3].salary, None);
}

#[test]
fn employer_ties_keep_first_seen_order() {
    let results = snippets(&["BAM zoekt monteur", "Heijmans zoekt lasser"]);
    let aggregate = SearchSource::from_results(&results)
        .aggregate
        .expect("aggregate");
    let names: Vec<&str> = aggregate.employers.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["BAM", "Heijmans"]);
}

#[test]
fn sample_is_limited_to_ten() {
    let descriptions = vec!["Monteur gezocht"; 12];
    let aggregate = SearchSource::from_results(&snippets(&descriptions))
        .aggregate
        .expect("aggregate");
    assert_eq!(aggregate.total_found, 12);
    assert_eq!(aggregate.sample_vacancies.len(), 10);
    assert_eq!(aggregate.avg_salary, None);
    assert!(aggregate.employers.is_empty());
}

#[test]
fn no_results_still_yields_an_aggregate() {
    let aggregate = SearchSource::from_results(&[])
        .aggregate
        .expect("aggregate");
    assert_eq!(aggregate.total_found, 0);
    assert_eq!(aggregate.salary_range, SalaryRange::default());
}

#[test]
fn huge_snippet_salaries_average_without_overflow() {
    let results = snippets(&[
        "Monteur, €10.000.000.000.000.000.000",
        "Monteur, €10.000.000.000.000.000.000",
    ]);
    let aggregate = SearchSource::from_results(&results)
        .aggregate
        .expect("aggregate");

    assert_eq!(aggregate.avg_salary, Some(10_000_000_000_000_000_000));
    assert_eq!(aggregate.salary_range.max, Some(10_000_000_000_000_000_000));
}
