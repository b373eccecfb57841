//! End-to-end booking pipeline tests on an in-memory database

use chrono::NaiveDate;

use booking_server::bookings::BookingService;
use booking_server::core::{Config, ServerState};
use booking_server::db::DbService;
use booking_server::db::models::{BookableItem, CatalogEntry};
use booking_server::db::repository::BookingRepository;
use booking_server::services::SearchService;
use shared::{
    AvailableDate, BookableKind, BookingRequest, Language, LocalizedText, PaymentMethod,
    PaymentStatus,
};

async fn test_state() -> ServerState {
    let db = DbService::new_memory().await.expect("in-memory db");
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    ServerState::with_db(config, db.db)
}

async fn seed_tour(state: &ServerState) {
    let tour = BookableItem {
        id: None,
        title: LocalizedText::new("Tour del vigneto", "Vineyard tour"),
        description: LocalizedText::new("Visita con degustazione", "Visit with tasting"),
        price: 45.50,
        duration: Some("3h".into()),
        meeting_point: None,
        image_url: None,
        available_dates: vec![
            AvailableDate {
                date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                time_range: "09:30 - 12:30".into(),
            },
            AvailableDate {
                date: NaiveDate::from_ymd_opt(2026, 9, 19).unwrap(),
                time_range: "15:00 - 18:00".into(),
            },
        ],
        is_active: true,
    };
    let created: Option<BookableItem> = state
        .get_db()
        .create(("tour", "vigneto"))
        .content(tour)
        .await
        .expect("seed tour");
    assert!(created.is_some());
}

async fn seed_restaurant(state: &ServerState) {
    let restaurant = CatalogEntry {
        id: None,
        name: LocalizedText::new("Osteria del Borgo", "Osteria del Borgo"),
        description: LocalizedText::new("Cucina tipica", "Traditional cooking"),
        address: None,
        phone: None,
        website: None,
        image_url: None,
        is_active: true,
    };
    let created: Option<CatalogEntry> = state
        .get_db()
        .create(("restaurant", "osteria"))
        .content(restaurant)
        .await
        .expect("seed restaurant");
    assert!(created.is_some());
}

fn tour_request() -> BookingRequest {
    BookingRequest {
        kind: BookableKind::Tour,
        item_id: "vigneto".into(),
        customer_name: "Mario Rossi".into(),
        customer_email: "mario@example.com".into(),
        customer_phone: "+39 333 1234567".into(),
        date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
        participants: 3,
        payment_method: PaymentMethod::OnSite,
        lang: Language::It,
    }
}

#[tokio::test]
async fn submit_stores_booking_and_prices_total() {
    let state = test_state().await;
    seed_tour(&state).await;

    let confirmation = BookingService::new(state.clone())
        .submit(tour_request())
        .await
        .expect("submit");

    assert_eq!(confirmation.item_title, "Tour del vigneto");
    assert_eq!(confirmation.unit_price, 45.50);
    assert_eq!(confirmation.total_price, 136.50);
    assert_eq!(confirmation.time_range, "09:30 - 12:30");
    assert!(confirmation.receipt_url.ends_with("/receipt"));

    let stored = BookingRepository::new(state.get_db())
        .find_by_reference(&confirmation.reference)
        .await
        .expect("lookup")
        .expect("booking stored");
    assert_eq!(stored.participants, 3);
    assert_eq!(stored.payment_status, PaymentStatus::Pending);
    assert_eq!(stored.customer_email, "mario@example.com");
}

#[tokio::test]
async fn submit_total_avoids_float_drift() {
    let state = test_state().await;
    let tasting = BookableItem {
        id: None,
        title: LocalizedText::new("Degustazione", "Tasting"),
        description: LocalizedText::default(),
        price: 10.99,
        duration: None,
        meeting_point: None,
        image_url: None,
        available_dates: vec![AvailableDate {
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time_range: "18:00 - 19:30".into(),
        }],
        is_active: true,
    };
    let created: Option<BookableItem> = state
        .get_db()
        .create(("tour", "degustazione"))
        .content(tasting)
        .await
        .expect("seed tasting");
    assert!(created.is_some());

    let mut req = tour_request();
    req.item_id = "degustazione".into();

    // 10.99 * 3 is exactly 32.97 through the decimal path
    let confirmation = BookingService::new(state)
        .submit(req)
        .await
        .expect("submit");
    assert_eq!(confirmation.total_price, 32.97);
}

#[tokio::test]
async fn unavailable_date_is_rejected_and_nothing_stored() {
    let state = test_state().await;
    seed_tour(&state).await;

    let mut req = tour_request();
    req.date = NaiveDate::from_ymd_opt(2026, 9, 13).unwrap();

    let result = BookingService::new(state.clone()).submit(req).await;
    assert!(result.is_err());

    let bookings = BookingRepository::new(state.get_db())
        .find_all()
        .await
        .expect("list");
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn unknown_item_is_a_not_found_error() {
    let state = test_state().await;

    let mut req = tour_request();
    req.item_id = "missing".into();

    let result = BookingService::new(state).submit(req).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn receipt_renders_a_pdf_for_a_stored_booking() {
    let state = test_state().await;
    seed_tour(&state).await;

    let service = BookingService::new(state.clone());
    let confirmation = service.submit(tour_request()).await.expect("submit");

    let pdf = service
        .render_receipt(&confirmation.reference)
        .await
        .expect("render receipt");
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn search_tags_hits_with_their_source_table() {
    let state = test_state().await;
    seed_tour(&state).await;
    seed_restaurant(&state).await;

    let search = SearchService::new(state.get_db());

    let hits = search.search("vigneto", Language::It).await.expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].source, "tour");
    assert_eq!(hits[0].link, "/tours/vigneto");

    let hits = search.search("osteria", Language::En).await.expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].source, "restaurant");
    assert_eq!(hits[0].title, "Osteria del Borgo");

    let hits = search.search("   ", Language::It).await.expect("search");
    assert!(hits.is_empty());
}
