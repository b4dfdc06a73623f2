//! End-to-end tests for the HTTP boundary against in-memory providers.
//!
//! These exercise the full request path: header auth, JSON decoding, the
//! services, and the error-to-status mapping.

#![allow(clippy::unwrap_used)]

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use booking::mocks::{
    MockCacheStore, MockClock, MockNotifier, MockReservationRepository, MockUserRepository,
    MockVenueRepository,
};
use booking::{CreatorProfile, Role, User, UserId, Venue, VenueDetail, VenueId};
use booking_web::{booking_router, AppState};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

struct Harness {
    server: TestServer,
    users: MockUserRepository,
    venues: MockVenueRepository,
    member: User,
    admin: User,
    venue: VenueDetail,
}

impl Harness {
    /// Clock pinned to 2024-09-01 00:00 UTC (04:00 in the booking zone).
    fn new() -> Self {
        let users = MockUserRepository::new();
        let venues = MockVenueRepository::new();
        let reservations = MockReservationRepository::new();
        let cache = MockCacheStore::new();
        let notifier = MockNotifier::new();
        let clock = MockClock::fixed(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap());

        let member = users.add_new("ada@example.com", "ada", Role::User);
        let admin = users.add_new("root@example.com", "root", Role::Admin);
        venues.register_creator(&member);
        venues.register_creator(&admin);

        let venue = VenueDetail {
            venue: Venue {
                id: VenueId::new(),
                name: "Opera Hall".to_string(),
                location: "Baku".to_string(),
                capacity: 40,
                description: "Main stage".to_string(),
                created_by: admin.id,
                created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            creator: CreatorProfile {
                email: admin.email.clone(),
                user_name: admin.user_name.clone(),
            },
        };
        venues.seed(venue.clone());

        let state = AppState::new(
            users.clone(),
            venues.clone(),
            reservations,
            cache,
            notifier,
            clock,
            86_400,
        );
        let server = TestServer::new(booking_router(state)).unwrap();

        Self {
            server,
            users,
            venues,
            member,
            admin,
            venue,
        }
    }
}

fn auth(id: UserId) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_str(&id.to_string()).unwrap(),
    )
}

fn booking_body(venue_id: VenueId) -> Value {
    json!({
        "venue_id": venue_id,
        "date": "2024-12-24",
        "time": "19:00",
        "party_size": 4
    })
}

#[tokio::test]
async fn missing_identity_header_is_unauthorized() {
    let h = Harness::new();

    let response = h
        .server
        .post("/reservations")
        .json(&booking_body(h.venue.venue.id))
        .await;

    assert_eq!(response.status_code().as_u16(), 401);
}

#[tokio::test]
async fn malformed_identity_header_is_unauthorized() {
    let h = Harness::new();

    let (name, _) = auth(h.member.id);
    let response = h
        .server
        .post("/reservations")
        .add_header(name, HeaderValue::from_static("not-a-uuid"))
        .json(&booking_body(h.venue.venue.id))
        .await;

    assert_eq!(response.status_code().as_u16(), 401);
}

#[tokio::test]
async fn booking_responds_created_with_the_persisted_reservation() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let response = h
        .server
        .post("/reservations")
        .add_header(name, value)
        .json(&booking_body(h.venue.venue.id))
        .await;

    assert_eq!(response.status_code().as_u16(), 201);
    let body: Value = response.json();
    assert_eq!(body["date"], "2024-12-24");
    assert_eq!(body["time"], "19:00");
    assert_eq!(body["party_size"], 4);
    assert_eq!(body["user_id"], json!(h.member.id));
}

#[tokio::test]
async fn admission_failures_carry_the_symbolic_message() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let response = h
        .server
        .post("/reservations")
        .add_header(name, value)
        .json(&booking_body(VenueId::new()))
        .await;

    assert_eq!(response.status_code().as_u16(), 404);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": 404, "message": "venueNotFound" }));
}

#[tokio::test]
async fn double_booking_is_a_bad_request() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let first = h
        .server
        .post("/reservations")
        .add_header(name.clone(), value.clone())
        .json(&booking_body(h.venue.venue.id))
        .await;
    assert_eq!(first.status_code().as_u16(), 201);

    let (admin_name, admin_value) = auth(h.admin.id);
    let second = h
        .server
        .post("/reservations")
        .add_header(admin_name, admin_value)
        .json(&booking_body(h.venue.venue.id))
        .await;

    assert_eq!(second.status_code().as_u16(), 400);
    let body: Value = second.json();
    assert_eq!(body["message"], "reservationAlreadyExists");
}

#[tokio::test]
async fn cancellation_responds_accepted() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let created = h
        .server
        .post("/reservations")
        .add_header(name.clone(), value.clone())
        .json(&booking_body(h.venue.venue.id))
        .await;
    let id = created.json::<Value>()["id"].as_str().unwrap().to_string();

    let response = h
        .server
        .delete(&format!("/reservations/{id}"))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code().as_u16(), 202);
    let body: Value = response.json();
    assert_eq!(body["id"], json!(id));
}

#[tokio::test]
async fn foreign_reservation_reads_as_not_found() {
    let h = Harness::new();
    let other = h.users.add_new("eve@example.com", "eve", Role::User);

    let (name, value) = auth(h.member.id);
    let created = h
        .server
        .post("/reservations")
        .add_header(name, value)
        .json(&booking_body(h.venue.venue.id))
        .await;
    let id = created.json::<Value>()["id"].as_str().unwrap().to_string();

    let (other_name, other_value) = auth(other.id);
    let response = h
        .server
        .get(&format!("/reservations/{id}"))
        .add_header(other_name, other_value)
        .await;

    assert_eq!(response.status_code().as_u16(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "reservationNotFound");
}

#[tokio::test]
async fn venue_creation_responds_created() {
    let h = Harness::new();

    let (name, value) = auth(h.admin.id);
    let response = h
        .server
        .post("/venues")
        .add_header(name, value)
        .json(&json!({
            "name": "Tea House",
            "location": "Old City",
            "capacity": 12,
            "description": "Courtyard seating"
        }))
        .await;

    assert_eq!(response.status_code().as_u16(), 201);
    let body: Value = response.json();
    assert_eq!(body["name"], "Tea House");
    assert_eq!(body["capacity"], 12);
    assert_eq!(h.venues.len(), 2);
}

#[tokio::test]
async fn venue_read_includes_the_creator_projection() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let response = h
        .server
        .get(&format!("/venues/{}", h.venue.venue.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["name"], "Opera Hall");
    assert_eq!(body["creator"]["email"], "root@example.com");
    assert_eq!(body["creator"]["user_name"], "root");
}

#[tokio::test]
async fn venue_listing_honors_the_location_filter() {
    let h = Harness::new();

    let (name, value) = auth(h.member.id);
    let hits = h
        .server
        .get("/venues")
        .add_query_param("location", "BAKU")
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(hits.json::<Vec<Value>>().len(), 1);

    let misses = h
        .server
        .get("/venues")
        .add_query_param("location", "ganja")
        .add_header(name, value)
        .await;
    assert!(misses.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn venue_patch_leaves_absent_fields_untouched() {
    let h = Harness::new();

    let (name, value) = auth(h.admin.id);
    let response = h
        .server
        .patch(&format!("/venues/{}", h.venue.venue.id))
        .add_header(name, value)
        .json(&json!({ "capacity": 60 }))
        .await;

    assert_eq!(response.status_code().as_u16(), 200);
    let body: Value = response.json();
    assert_eq!(body["capacity"], 60);
    assert_eq!(body["name"], "Opera Hall");
    assert_eq!(body["location"], "Baku");
}
