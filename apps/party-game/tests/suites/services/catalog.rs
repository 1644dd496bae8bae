//! Category catalog state and ordering.

use std::sync::Arc;

use party_game::{CachedGameRepository, CatalogService, CatalogState, FixtureGameApi, Locale};

use crate::support::fixtures::{sample, FixtureFile};

fn service(fixture: &FixtureFile) -> CatalogService {
    let api = Arc::new(FixtureGameApi::new(fixture.path.clone()));
    CatalogService::new(Arc::new(CachedGameRepository::new(api, Locale::Spanish)))
}

#[tokio::test]
async fn loading_until_the_first_sync() {
    let fixture = FixtureFile::new(&sample());
    let catalog = service(&fixture);

    assert_eq!(catalog.state(), CatalogState::Loading);
}

#[tokio::test]
async fn free_categories_are_listed_first() {
    let fixture = FixtureFile::new(&sample());
    let catalog = service(&fixture);
    catalog.sync().await.expect("sync");

    let CatalogState::Ready(categories) = catalog.state() else {
        panic!("expected ready catalog");
    };
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["party", "hot"]);
    assert_eq!(categories[0].name, "Fiesta");
}

#[tokio::test]
async fn failed_first_sync_reports_the_error() {
    let fixture = FixtureFile::new(&sample());
    let catalog = service(&fixture);
    fixture.remove();

    assert!(catalog.sync().await.is_err());

    let CatalogState::Failed(reason) = catalog.state() else {
        panic!("expected failed catalog");
    };
    assert!(reason.contains("fixture.json"));
}

#[tokio::test]
async fn failed_later_sync_keeps_serving_the_cache() {
    let fixture = FixtureFile::new(&sample());
    let catalog = service(&fixture);
    catalog.sync().await.expect("sync");

    fixture.remove();
    assert!(catalog.sync().await.is_err());

    assert!(matches!(catalog.state(), CatalogState::Ready(list) if list.len() == 2));
}

#[tokio::test]
async fn empty_remote_is_ready_and_empty() {
    let fixture = FixtureFile::new(&serde_json::json!({}));
    let catalog = service(&fixture);
    catalog.sync().await.expect("sync");

    assert_eq!(catalog.state(), CatalogState::Ready(Vec::new()));
}
