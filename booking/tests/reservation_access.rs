//! Access-resolver tests: role-scoped list caching, per-reservation
//! read-through (including its shared-entry trust boundary), and delete
//! semantics.

#![allow(clippy::unwrap_used)]

use booking::mocks::{
    MockCacheStore, MockClock, MockNotifier, MockReservationRepository, MockUserRepository,
    MockVenueRepository,
};
use booking::providers::ReservationRepository;
use booking::services::ReservationService;
use booking::{keys, BookingError, Reservation, ReservationId, Role, User, UserId, VenueId};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

type Service = ReservationService<
    MockUserRepository,
    MockVenueRepository,
    MockReservationRepository,
    MockCacheStore,
    MockNotifier,
    MockClock,
>;

struct Harness {
    users: MockUserRepository,
    reservations: MockReservationRepository,
    cache: MockCacheStore,
    service: Service,
}

impl Harness {
    fn new() -> Self {
        let users = MockUserRepository::new();
        let venues = MockVenueRepository::new();
        let reservations = MockReservationRepository::new();
        let cache = MockCacheStore::new();
        let clock = MockClock::fixed(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap());

        let service = ReservationService::new(
            users.clone(),
            venues,
            reservations.clone(),
            cache.clone(),
            MockNotifier::new(),
            clock,
            keys::CACHE_TTL_SECONDS,
        );

        Self {
            users,
            reservations,
            cache,
            service,
        }
    }

    fn add_user(&self, email: &str, role: Role) -> User {
        self.users.add_new(email, "tester", role)
    }

    /// Seed a reservation owned by `owner`, offset so ordering is stable.
    fn seed_reservation(&self, owner: &User, minutes: u32) -> Reservation {
        let reservation = Reservation {
            id: ReservationId::new(),
            user_id: owner.id,
            venue_id: VenueId::new(),
            date: NaiveDate::from_ymd_opt(2024, 9, 6).unwrap(),
            time: NaiveTime::from_num_seconds_from_midnight_opt(60 * minutes, 0).unwrap(),
            party_size: 2,
            created_at: Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap()
                + chrono::Duration::minutes(i64::from(minutes)),
        };
        self.reservations.seed(reservation.clone());
        reservation
    }
}

#[tokio::test]
async fn empty_cache_list_is_store_backed_and_populates_user_key() {
    let h = Harness::new();
    let user = h.add_user("alice@example.com", Role::User);

    let r1 = h.seed_reservation(&user, 1);
    let r2 = h.seed_reservation(&user, 2);
    let r3 = h.seed_reservation(&user, 3);

    let list = h.service.reservations_for(user.id).await.unwrap();
    assert_eq!(list, vec![r1, r2, r3]);

    let entry = h.cache.entry(&keys::reservations_user(user.id)).unwrap();
    assert_eq!(entry.ttl_seconds, 86_400);
    let cached: Vec<Reservation> = serde_json::from_str(&entry.value).unwrap();
    assert_eq!(cached, list);
}

#[tokio::test]
async fn list_cache_hit_never_touches_the_store() {
    let h = Harness::new();
    let user = h.add_user("alice@example.com", Role::User);

    // The store holds one reservation, the cache claims none. A hit must be
    // served verbatim from the cache.
    h.seed_reservation(&user, 1);
    h.cache.seed(&keys::reservations_user(user.id), "[]", 86_400);

    let list = h.service.reservations_for(user.id).await.unwrap();
    assert!(list.is_empty());
    assert_eq!(h.cache.hits(), 1);
}

#[tokio::test]
async fn admin_list_uses_the_shared_key_and_sees_everything() {
    let h = Harness::new();
    let alice = h.add_user("alice@example.com", Role::User);
    let bob = h.add_user("bob@example.com", Role::User);
    let admin = h.add_user("admin@example.com", Role::Admin);

    let r1 = h.seed_reservation(&alice, 1);
    let r2 = h.seed_reservation(&bob, 2);

    let list = h.service.reservations_for(admin.id).await.unwrap();
    assert_eq!(list, vec![r1, r2]);

    assert!(h.cache.contains(keys::reservations_admin()));
    assert!(!h.cache.contains(&keys::reservations_user(admin.id)));
}

#[tokio::test]
async fn non_admin_list_is_scoped_to_the_owner() {
    let h = Harness::new();
    let alice = h.add_user("alice@example.com", Role::User);
    let bob = h.add_user("bob@example.com", Role::User);

    let r1 = h.seed_reservation(&alice, 1);
    h.seed_reservation(&bob, 2);

    let list = h.service.reservations_for(alice.id).await.unwrap();
    assert_eq!(list, vec![r1]);
}

#[tokio::test]
async fn unknown_caller_is_rejected_everywhere() {
    let h = Harness::new();
    let ghost = UserId::new();

    assert_eq!(
        h.service.reservations_for(ghost).await.unwrap_err(),
        BookingError::UserNotFound
    );
    assert_eq!(
        h.service
            .reservation_by_id(ghost, ReservationId::new())
            .await
            .unwrap_err(),
        BookingError::UserNotFound
    );
    assert_eq!(
        h.service
            .delete_reservation(ghost, ReservationId::new())
            .await
            .unwrap_err(),
        BookingError::UserNotFound
    );
}

#[tokio::test]
async fn read_by_id_populates_then_serves_from_cache() {
    let h = Harness::new();
    let user = h.add_user("alice@example.com", Role::User);
    let reservation = h.seed_reservation(&user, 1);

    let first = h
        .service
        .reservation_by_id(user.id, reservation.id)
        .await
        .unwrap();
    assert_eq!(first, reservation);
    assert!(h.cache.contains(&keys::reservation(reservation.id)));

    // Remove from the store; the cached copy still answers.
    h.reservations.delete_by_id(reservation.id).await.unwrap();
    let second = h
        .service
        .reservation_by_id(user.id, reservation.id)
        .await
        .unwrap();
    assert_eq!(second, reservation);
}

#[tokio::test]
async fn cached_entry_is_served_without_access_recheck() {
    // Known trust boundary: once a caller with access populates the shared
    // per-reservation entry, a later caller holding the id is served on hit.
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let stranger = h.add_user("bob@example.com", Role::User);
    let reservation = h.seed_reservation(&owner, 1);

    h.service
        .reservation_by_id(owner.id, reservation.id)
        .await
        .unwrap();

    let from_cache = h
        .service
        .reservation_by_id(stranger.id, reservation.id)
        .await
        .unwrap();
    assert_eq!(from_cache, reservation);
}

#[tokio::test]
async fn cold_read_by_id_applies_the_access_rule() {
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let stranger = h.add_user("bob@example.com", Role::User);
    let admin = h.add_user("admin@example.com", Role::Admin);
    let reservation = h.seed_reservation(&owner, 1);

    assert_eq!(
        h.service
            .reservation_by_id(stranger.id, reservation.id)
            .await
            .unwrap_err(),
        BookingError::ReservationNotFound
    );

    // The admin sees it; the owner sees it.
    assert!(h
        .service
        .reservation_by_id(admin.id, reservation.id)
        .await
        .is_ok());
    assert!(h
        .service
        .reservation_by_id(owner.id, reservation.id)
        .await
        .is_ok());
}

#[tokio::test]
async fn delete_by_non_owner_is_not_found_despite_existing() {
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let stranger = h.add_user("bob@example.com", Role::User);
    let reservation = h.seed_reservation(&owner, 1);

    let err = h
        .service
        .delete_reservation(stranger.id, reservation.id)
        .await
        .unwrap_err();

    assert_eq!(err, BookingError::ReservationNotFound);
    assert!(h.reservations.contains(reservation.id));
}

#[tokio::test]
async fn admin_deletes_any_reservation() {
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let admin = h.add_user("admin@example.com", Role::Admin);
    let reservation = h.seed_reservation(&owner, 1);

    let deleted = h
        .service
        .delete_reservation(admin.id, reservation.id)
        .await
        .unwrap();

    assert_eq!(deleted, reservation);
    assert!(!h.reservations.contains(reservation.id));
}

#[tokio::test]
async fn delete_invalidates_all_three_cache_entries() {
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let reservation = h.seed_reservation(&owner, 1);

    h.cache
        .seed(&keys::reservations_user(owner.id), "[]", 86_400);
    h.cache.seed(keys::reservations_admin(), "[]", 86_400);
    h.cache
        .seed(&keys::reservation(reservation.id), "{}", 86_400);

    h.service
        .delete_reservation(owner.id, reservation.id)
        .await
        .unwrap();

    assert!(!h.cache.contains(&keys::reservations_user(owner.id)));
    assert!(!h.cache.contains(keys::reservations_admin()));
    assert!(!h.cache.contains(&keys::reservation(reservation.id)));
}

#[tokio::test]
async fn delete_consults_the_store_not_the_cache() {
    // A stale cached copy must not make a vanished reservation deletable.
    let h = Harness::new();
    let owner = h.add_user("alice@example.com", Role::User);
    let ghost_id = ReservationId::new();

    let stale = Reservation {
        id: ghost_id,
        user_id: owner.id,
        venue_id: VenueId::new(),
        date: NaiveDate::from_ymd_opt(2024, 9, 6).unwrap(),
        time: NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
        party_size: 2,
        created_at: Utc::now(),
    };
    h.cache.seed(
        &keys::reservation(ghost_id),
        &serde_json::to_string(&stale).unwrap(),
        86_400,
    );

    let err = h
        .service
        .delete_reservation(owner.id, ghost_id)
        .await
        .unwrap_err();
    assert_eq!(err, BookingError::ReservationNotFound);
}
