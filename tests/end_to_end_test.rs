use httpmock::prelude::*;
use landmark_etl::domain::catalog::default_catalog;
use landmark_etl::{EnrichmentConfig, EtlEngine, EtlError, HttpPipeline, LocalStorage, PlaceQuery};
use serde_json::{json, Value};
use tempfile::TempDir;

const OUTPUT: &str = "outputs/places.json";

fn config_for(server: &MockServer, places: Vec<PlaceQuery>) -> EnrichmentConfig {
    let mut config = EnrichmentConfig::default();
    config.maps.endpoint = server.url("/search.json");
    config.maps.api_key = "serp-key".to_string();
    config.geonames.endpoint = server.url("/countryCode");
    config.geonames.username = "demo".to_string();
    config.wikimedia.endpoint = server.url("/core/v1/wikipedia");
    config.wikimedia.access_token = "wiki-token".to_string();
    config.http.timeout_seconds = 5;
    config.output.path = OUTPUT.to_string();
    config.places = places;
    config
}

fn eiffel_result() -> Value {
    json!({
        "title": "Tour Eiffel",
        "place_id": "p1",
        "description": "d",
        "gps_coordinates": {"latitude": 48.858370123, "longitude": 2.294481456},
        "rating": 4.6,
        "reviews": 300000,
        "address": "Paris"
    })
}

async fn run(config: &EnrichmentConfig, temp_dir: &TempDir) -> landmark_etl::Result<String> {
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = HttpPipeline::from_config(config, storage)?;
    EtlEngine::new(pipeline).run().await
}

#[tokio::test]
async fn test_eiffel_tower_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let maps_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search.json")
            .query_param("q", "Tour Eiffel");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"local_results": [eiffel_result()]}));
    });
    let country_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/countryCode")
            .query_param("lat", "48.85837")
            .query_param("lng", "2.29448");
        then.status(200).json_body(json!({"countryCode": "FR"}));
    });
    let wiki_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/core/v1/wikipedia/en/search/page")
            .query_param("q", "Tour Eiffel")
            .header("Authorization", "Bearer wiki-token");
        then.status(200)
            .json_body(json!({"pages": [{"title": "Eiffel Tower", "key": "Eiffel_Tower"}]}));
    });

    let config = config_for(&server, vec![PlaceQuery::new("Tour Eiffel", "Tour Eiffel")]);
    let output_path = run(&config, &temp_dir).await.unwrap();

    maps_mock.assert();
    country_mock.assert();
    wiki_mock.assert();
    assert_eq!(output_path, OUTPUT);

    let text = std::fs::read_to_string(temp_dir.path().join(OUTPUT)).unwrap();
    let document: Value = serde_json::from_str(&text).unwrap();
    let record = &document["Tour Eiffel"];

    assert_eq!(document.as_object().unwrap().len(), 1);
    assert_eq!(record["name"], "Tour Eiffel");
    assert_eq!(record["place_id"], "p1");
    assert_eq!(record["description"], "d");
    assert_eq!(record["type_ids"], json!([]));
    assert_eq!(record["latitude"], 48.85837);
    assert_eq!(record["longitude"], 2.29448);
    assert_eq!(record["rating"], 4.6);
    assert_eq!(record["num_reviews"], 300000);
    assert_eq!(record["adresse"], "Paris");
    assert_eq!(record["country_iso"], "FR");
    assert_eq!(record["wiki_title"], "Eiffel Tower");
    assert_eq!(record["wiki_url"], "https://en.wikipedia.org/wiki/Eiffel_Tower");
}

#[tokio::test]
async fn test_empty_maps_results_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let maps_mock = server.mock(|when, then| {
        when.method(GET).path("/search.json");
        then.status(200).json_body(json!({"local_results": []}));
    });
    let country_mock = server.mock(|when, then| {
        when.method(GET).path("/countryCode");
        then.status(200).json_body(json!({"countryCode": "FR"}));
    });
    let wiki_mock = server.mock(|when, then| {
        when.method(GET).path("/core/v1/wikipedia/en/search/page");
        then.status(200)
            .json_body(json!({"pages": [{"title": "Eiffel Tower", "key": "Eiffel_Tower"}]}));
    });

    let config = config_for(&server, vec![PlaceQuery::new("Tour Eiffel", "Tour Eiffel")]);
    let result = run(&config, &temp_dir).await;

    assert!(matches!(result, Err(EtlError::LookupError { .. })));
    maps_mock.assert();
    country_mock.assert_hits(0);
    wiki_mock.assert_hits(0);
    assert!(!temp_dir.path().join(OUTPUT).exists());
}

#[tokio::test]
async fn test_late_failure_leaves_previous_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let previous = temp_dir.path().join(OUTPUT);
    std::fs::create_dir_all(previous.parent().unwrap()).unwrap();
    std::fs::write(&previous, "{\"previous\":true}").unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search.json");
        then.status(200)
            .json_body(json!({"local_results": [eiffel_result()]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/countryCode");
        then.status(200).json_body(json!({"countryCode": "FR"}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/core/v1/wikipedia/en/search/page")
            .query_param("q", "Tour Eiffel");
        then.status(200)
            .json_body(json!({"pages": [{"title": "Eiffel Tower", "key": "Eiffel_Tower"}]}));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/core/v1/wikipedia/en/search/page")
            .query_param("q", "Colosseum");
        then.status(200).json_body(json!({"pages": []}));
    });

    let config = config_for(
        &server,
        vec![
            PlaceQuery::new("Tour Eiffel", "Tour Eiffel"),
            PlaceQuery::new("Colisee", "Colosseum"),
        ],
    );
    let result = run(&config, &temp_dir).await;

    assert!(matches!(
        result,
        Err(EtlError::NotFoundError { ref query }) if query == "Colosseum"
    ));
    let text = std::fs::read_to_string(&previous).unwrap();
    assert_eq!(text, "{\"previous\":true}");
}

#[tokio::test]
async fn test_default_catalog_issues_three_calls_per_place_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let maps_mock = server.mock(|when, then| {
        when.method(GET).path("/search.json");
        then.status(200)
            .json_body(json!({"local_results": [eiffel_result()]}));
    });
    let country_mock = server.mock(|when, then| {
        when.method(GET).path("/countryCode");
        then.status(200).json_body(json!({
            "status": {"message": "no country code found", "value": 15}
        }));
    });
    let wiki_mock = server.mock(|when, then| {
        when.method(GET).path("/core/v1/wikipedia/en/search/page");
        then.status(200)
            .json_body(json!({"pages": [{"title": "Some Page", "key": "Some_Page"}]}));
    });

    let catalog = default_catalog();
    let config = config_for(&server, catalog.clone());
    run(&config, &temp_dir).await.unwrap();

    maps_mock.assert_hits(9);
    country_mock.assert_hits(9);
    wiki_mock.assert_hits(9);

    let text = std::fs::read_to_string(temp_dir.path().join(OUTPUT)).unwrap();
    let document: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(document.as_object().unwrap().len(), 9);

    // 輸出鍵的順序與目錄一致
    let positions: Vec<usize> = catalog
        .iter()
        .map(|place| {
            let key = serde_json::to_string(&place.display_key).unwrap();
            text.find(&format!("{}:", key)).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    for place in &catalog {
        let record = &document[place.display_key.as_str()];
        assert!(record["country_iso"].is_null());
        assert_eq!(record["wiki_url"], "https://en.wikipedia.org/wiki/Some_Page");
    }
}
