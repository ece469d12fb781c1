//! Integration tests for EventRater
//!
//! These tests verify end-to-end functionality including:
//! - Event flows against the file-backed store
//! - Persistence across application restarts
//! - Reading collections written by the mobile app

use eventrater::app::AppState;
use eventrater::events::{Coordinates, EventRepository, Ratings};
use eventrater::services::{EventsService, StaticLocation};
use eventrater::storage::{FileStore, KeyValueStore};
use eventrater::views::{EventForm, HomeView};
use chrono::NaiveDate;
use tempfile::TempDir;

fn form(name: &str, address: &str, coords: Coordinates) -> EventForm {
    let now = NaiveDate::from_ymd_opt(2024, 9, 14)
        .unwrap()
        .and_hms_opt(20, 15, 0)
        .unwrap();

    let mut form = EventForm::new(now);
    form.set_name(name);
    form.select_location(coords);
    form.set_address(address);
    form
}

#[tokio::test]
async fn test_event_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let state = AppState::setup(temp_dir.path().to_path_buf()).await.unwrap();
    let service = &state.events_service;

    // Create
    let draft = form("Street Food", "Schlossplatz, Aarau", Coordinates::new(47.392, 8.045))
        .to_draft()
        .unwrap();
    let event = service.create_event(draft).await.unwrap();

    assert_eq!(event.id, 1);
    assert_eq!(event.date, "9/14/2024");
    assert_eq!(event.time, "8:15:00 PM");
    assert_eq!(event.ratings, Ratings::default());

    // Rate
    let ratings = Ratings {
        location: 3,
        entertainment: 2,
        atmosphere: 3,
        prices: 1,
        overall: 2,
    };
    let rated = service.rate_event(event.id, ratings).await.unwrap().unwrap();
    assert_eq!(rated.ratings.format_average(), "2.20");

    // Edit keeps ratings
    let mut edit = EventForm::for_edit(&rated, chrono::Local::now().naive_local());
    assert!(edit.set_name("Street Food Fest"));
    let edited = service
        .edit_event(event.id, edit.to_draft().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(edited.name, "Street Food Fest");
    assert_eq!(edited.location_name, "Schlossplatz, Aarau");
    assert_eq!(edited.ratings, ratings);

    // Delete
    assert!(service.delete_event(event.id).await.unwrap());
    assert!(service.list_events().await.is_empty());
}

#[tokio::test]
async fn test_events_persist_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_path_buf();

    {
        let state = AppState::setup(dir.clone()).await.unwrap();
        for (name, lat, lon) in [("Bern", 46.948, 7.447), ("Basel", 47.559, 7.588)] {
            let draft = form(name, name, Coordinates::new(lat, lon)).to_draft().unwrap();
            state.events_service.create_event(draft).await.unwrap();
        }
    }

    {
        let state = AppState::setup(dir).await.unwrap();
        let events = state.events_service.list_events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "Bern");
        assert_eq!(events[1].id, 2);

        let mut home = HomeView::new();
        home.refresh(
            &state.events_service,
            &StaticLocation::at(Coordinates::new(47.55, 7.59)),
        )
        .await;
        assert_eq!(home.entries[0].name, "Basel");
    }
}

#[tokio::test]
async fn test_reads_collection_written_by_mobile_app() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().to_path_buf());
    store.initialize().await.unwrap();

    let stored = r#"[
        {"id":1,"name":"Jazz","date":"5/3/2023","time":"8:30:00 PM","locationName":"Kasinostrasse 5, Aarau","locationData":{"latitude":47.3905,"longitude":8.0468},"ratings":{"location":2,"entertainment":3,"atmosphere":3,"prices":1,"overall":2}},
        {"id":2,"name":"Market","date":"5/6/2023","time":"9:00:00 AM","locationName":"Bern","locationData":{"latitude":46.948,"longitude":7.4474},"ratings":{"location":0,"entertainment":0,"atmosphere":0,"prices":0,"overall":0},"distance":81.2}
    ]"#;
    store.set_item("events", stored).await.unwrap();

    let service = EventsService::new(EventRepository::new(store.clone()));
    let events = service.list_events().await;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location_name, "Kasinostrasse 5, Aarau");
    assert_eq!(events[0].ratings.format_average(), "2.20");

    // Appending keeps the existing records and uses length + 1
    let draft = form("Cinema", "Aarau", Coordinates::new(47.39, 8.04)).to_draft().unwrap();
    assert_eq!(service.create_event(draft).await.unwrap().id, 3);

    let raw = store.get_item("events").await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[2]["locationName"], "Aarau");
}

#[tokio::test]
async fn test_corrupt_collection_lists_empty() {
    let temp_dir = TempDir::new().unwrap();
    let state = AppState::setup(temp_dir.path().to_path_buf()).await.unwrap();

    std::fs::write(temp_dir.path().join("events.json"), "[{\"id\":").unwrap();

    assert!(state.events_service.list_events().await.is_empty());

    let mut home = HomeView::new();
    home.refresh(
        &state.events_service,
        &StaticLocation::at(Coordinates::new(0.0, 0.0)),
    )
    .await;
    assert!(home.entries.is_empty());
}
