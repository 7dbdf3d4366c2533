//! Tests for the facade's reference checks and review cascades.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use chrono::TimeDelta;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::EntityId;
use crate::test_support::MutableClock;

struct Harness {
    facade: HbnbFacade,
    clock: Arc<MutableClock>,
}

impl Harness {
    fn user(&self, email: &str) -> User {
        self.facade
            .create_user(NewUser {
                first_name: "Grace".to_owned(),
                last_name: "Hopper".to_owned(),
                email: email.to_owned(),
                is_admin: false,
            })
            .expect("valid user")
    }

    fn amenity(&self, name: &str) -> Amenity {
        self.facade
            .create_amenity(NewAmenity {
                name: name.to_owned(),
            })
            .expect("valid amenity")
    }

    fn place(&self, owner: &User, amenities: &[&Amenity]) -> Place {
        self.facade
            .create_place(new_place(
                &owner.id().to_string(),
                amenities.iter().map(|a| a.id().to_string()).collect(),
            ))
            .expect("valid place")
    }

    fn review(&self, author: &User, place: &Place, rating: i64) -> Review {
        self.facade
            .create_review(new_review(author, &place.id().to_string(), rating))
            .expect("valid review")
    }
}

fn new_place(owner_id: &str, amenities: Vec<String>) -> NewPlace {
    NewPlace {
        title: "Harbour loft".to_owned(),
        description: Some("Two rooms above the quay".to_owned()),
        price: 120.0,
        latitude: 43.3,
        longitude: 5.4,
        owner_id: owner_id.to_owned(),
        amenities,
    }
}

fn new_review(author: &User, place_id: &str, rating: i64) -> NewReview {
    NewReview {
        text: "Quiet and bright".to_owned(),
        rating,
        user_id: author.id().to_string(),
        place_id: place_id.to_owned(),
    }
}

#[fixture]
fn harness() -> Harness {
    let start = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(10_000);
    let clock = Arc::new(MutableClock::new(start));
    let facade = HbnbFacade::new(Repositories::in_memory(), clock.clone());
    Harness { facade, clock }
}

#[rstest]
fn duplicate_email_is_rejected(harness: Harness) {
    harness.user("grace@example.com");

    let err = harness
        .facade
        .create_user(NewUser {
            first_name: "Other".to_owned(),
            last_name: "Person".to_owned(),
            email: " grace@example.com ".to_owned(),
            is_admin: true,
        })
        .expect_err("email taken");

    assert_eq!(err, ValidationError::EmailAlreadyRegistered);
    assert_eq!(harness.facade.get_all_users().len(), 1);
}

#[rstest]
fn user_is_found_by_email(harness: Harness) {
    let user = harness.user("grace@example.com");
    assert_eq!(
        harness.facade.get_user_by_email("grace@example.com"),
        Some(user)
    );
    assert!(harness.facade.get_user_by_email("nobody@example.com").is_none());
}

#[rstest]
fn updating_unknown_entities_returns_none(harness: Harness) {
    assert_eq!(
        harness
            .facade
            .update_user(UserId::random(), UserPatch::default()),
        Ok(None)
    );
    assert_eq!(
        harness
            .facade
            .update_amenity(AmenityId::random(), AmenityPatch::default()),
        Ok(None)
    );
    assert_eq!(
        harness
            .facade
            .update_review(ReviewId::random(), ReviewPatch::default()),
        Ok(None)
    );
}

#[rstest]
fn update_place_reports_missing_place_before_checking_references(harness: Harness) {
    let update = PlaceUpdate {
        owner_id: Some("not-an-id".to_owned()),
        ..PlaceUpdate::default()
    };
    assert_eq!(
        harness.facade.update_place(PlaceId::random(), update),
        Ok(None)
    );
}

#[rstest]
#[case::unknown_uuid(UserId::random().to_string())]
#[case::not_a_uuid("owner-42".to_owned())]
fn place_with_unknown_owner_is_rejected(harness: Harness, #[case] owner_id: String) {
    let err = harness
        .facade
        .create_place(new_place(&owner_id, Vec::new()))
        .expect_err("owner missing");

    assert_eq!(err, ValidationError::owner_not_found());
    assert_eq!(err.to_string(), "Owner not found");
    assert!(harness.facade.get_all_places().is_empty());
}

#[rstest]
fn place_with_unknown_amenity_is_rejected(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let wifi = harness.amenity("Wi-Fi");

    let err = harness
        .facade
        .create_place(new_place(
            &owner.id().to_string(),
            vec![wifi.id().to_string(), AmenityId::random().to_string()],
        ))
        .expect_err("amenity missing");

    assert_eq!(err.to_string(), "Amenity not found");
    assert!(harness.facade.get_all_places().is_empty());
}

#[rstest]
fn owner_is_checked_before_scalar_fields(harness: Harness) {
    let mut input = new_place("missing", Vec::new());
    input.latitude = 200.0;
    let err = harness.facade.create_place(input).expect_err("invalid");
    assert_eq!(err, ValidationError::owner_not_found());
}

#[rstest]
fn duplicate_amenity_references_are_kept(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let place = harness.place(&owner, &[&wifi, &wifi]);
    assert_eq!(place.amenities(), [wifi.id(), wifi.id()]);
}

#[rstest]
fn update_place_replaces_amenities_and_owner(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let heir = harness.user("heir@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let sauna = harness.amenity("Sauna");
    let place = harness.place(&owner, &[&wifi]);

    let updated = harness
        .facade
        .update_place(
            place.id(),
            PlaceUpdate {
                owner_id: Some(heir.id().to_string()),
                amenities: Some(vec![sauna.id().to_string()]),
                ..PlaceUpdate::default()
            },
        )
        .expect("valid update")
        .expect("place exists");

    assert_eq!(updated.owner(), heir.id());
    assert_eq!(updated.amenities(), [sauna.id()]);
}

#[rstest]
fn update_place_with_unknown_amenity_changes_nothing(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let place = harness.place(&owner, &[&wifi]);
    harness.clock.advance_seconds(30);

    let err = harness
        .facade
        .update_place(
            place.id(),
            PlaceUpdate {
                title: Some("Renamed".to_owned()),
                amenities: Some(vec![AmenityId::random().to_string()]),
                ..PlaceUpdate::default()
            },
        )
        .expect_err("amenity missing");

    assert_eq!(err, ValidationError::amenity_not_found());
    assert_eq!(harness.facade.get_place(place.id()), Some(place));
}

#[rstest]
fn review_requires_existing_author_then_place(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    let ghost = User::new(
        NewUser {
            first_name: "Ghost".to_owned(),
            last_name: "Writer".to_owned(),
            email: "ghost@example.com".to_owned(),
            is_admin: false,
        },
        harness.clock.utc(),
    )
    .expect("valid user");

    let err = harness
        .facade
        .create_review(new_review(&ghost, "also-missing", 4))
        .expect_err("author missing");
    assert_eq!(err, ValidationError::user_not_found());

    let err = harness
        .facade
        .create_review(new_review(&owner, &PlaceId::random().to_string(), 4))
        .expect_err("place missing");
    assert_eq!(err, ValidationError::place_not_found());

    assert!(harness.facade.get_all_reviews().is_empty());
    assert_eq!(
        harness.facade.get_place(place.id()).map(|p| p.reviews().len()),
        Some(0)
    );
}

#[rstest]
#[case(0)]
#[case(6)]
fn out_of_range_rating_stores_nothing(harness: Harness, #[case] rating: i64) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    let err = harness
        .facade
        .create_review(new_review(&owner, &place.id().to_string(), rating))
        .expect_err("rating out of range");
    assert_eq!(err.to_string(), "rating must be between 1 and 5");
    assert!(harness.facade.get_all_reviews().is_empty());
}

#[rstest]
fn creating_a_review_appends_it_to_the_place(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let guest = harness.user("guest@example.com");
    let place = harness.place(&owner, &[]);
    harness.clock.advance_seconds(60);

    let first = harness.review(&guest, &place, 5);
    let second = harness.review(&owner, &place, 3);

    let stored = harness.facade.get_place(place.id()).expect("place exists");
    assert_eq!(stored.reviews(), [first.id(), second.id()]);
    assert!(stored.updated_at() > place.updated_at());
    assert_eq!(
        harness.facade.get_reviews_by_place(place.id()),
        Some(vec![first, second])
    );
}

#[rstest]
fn deleting_a_review_prunes_the_place(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    let kept = harness.review(&owner, &place, 4);
    let dropped = harness.review(&owner, &place, 2);
    let before = harness.facade.get_place(place.id()).expect("place exists");
    harness.clock.advance_seconds(5);

    assert!(harness.facade.delete_review(dropped.id()));
    assert!(!harness.facade.delete_review(dropped.id()));

    let after = harness.facade.get_place(place.id()).expect("place exists");
    assert_eq!(after.reviews(), [kept.id()]);
    assert!(after.updated_at() > before.updated_at());
    assert!(harness.facade.get_review(dropped.id()).is_none());
    assert_eq!(harness.facade.get_all_reviews(), vec![kept]);
}

#[rstest]
fn reviews_by_place_distinguishes_missing_from_empty(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    assert_eq!(harness.facade.get_reviews_by_place(place.id()), Some(Vec::new()));
    assert_eq!(harness.facade.get_reviews_by_place(PlaceId::random()), None);
}

#[rstest]
fn update_review_keeps_author_and_place(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    let review = harness.review(&owner, &place, 2);

    let updated = harness
        .facade
        .update_review(
            review.id(),
            ReviewPatch {
                text: Some("Better on a second visit".to_owned()),
                rating: Some(4),
            },
        )
        .expect("valid update")
        .expect("review exists");

    assert_eq!(updated.rating(), 4);
    assert_eq!(updated.user(), owner.id());
    assert_eq!(updated.place(), place.id());
}

#[rstest]
fn place_details_expand_owner_and_amenities(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let place = harness.place(&owner, &[&wifi]);
    let review = harness.review(&owner, &place, 5);

    let details = harness
        .facade
        .get_place_details(place.id())
        .expect("place exists");

    assert_eq!(details.owner(), &owner);
    assert_eq!(details.amenities(), [wifi]);
    assert_eq!(details.reviews(), [review.id()]);
    assert!(harness.facade.get_place_details(PlaceId::random()).is_none());
}

#[rstest]
fn empty_update_refreshes_timestamp_only(harness: Harness) {
    let user = harness.user("grace@example.com");
    harness.clock.advance_seconds(1);

    let updated = harness
        .facade
        .update_user(user.id(), UserPatch::default())
        .expect("valid update")
        .expect("user exists");

    assert_eq!(updated.email(), user.email());
    assert_eq!(updated.first_name(), user.first_name());
    assert_eq!(updated.created_at(), user.created_at());
    assert!(updated.updated_at() > user.updated_at());
}

/// Review ids listed by the place, and ids of reviews pointing at it, taken
/// under one read guard.
fn review_snapshot(facade: &HbnbFacade, place: PlaceId) -> (Vec<ReviewId>, HashSet<ReviewId>) {
    let stores = facade.read();
    let listed = stores
        .places
        .get(&place)
        .expect("place exists")
        .reviews()
        .to_vec();
    let pointing = stores
        .reviews
        .get_all()
        .into_iter()
        .filter(|review| review.place() == place)
        .map(|review| review.id())
        .collect();
    (listed, pointing)
}

fn assert_back_references_agree(facade: &HbnbFacade, place: PlaceId) {
    let (listed, pointing) = review_snapshot(facade, place);
    let unique: HashSet<ReviewId> = listed.iter().copied().collect();
    assert_eq!(unique.len(), listed.len(), "duplicate review ids in {listed:?}");
    assert_eq!(unique, pointing);
}

#[rstest]
fn concurrent_review_writes_keep_the_place_list_whole(harness: Harness) {
    const WRITERS: usize = 4;
    const READERS: usize = 2;
    const ROUNDS: usize = 40;

    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner, &[]);
    let authors: Vec<User> = (0..WRITERS)
        .map(|n| harness.user(&format!("guest{n}@example.com")))
        .collect();
    let place_id = place.id();
    let facade = Arc::new(harness.facade);
    let writing = Arc::new(AtomicBool::new(true));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let facade = Arc::clone(&facade);
            let writing = Arc::clone(&writing);
            thread::spawn(move || {
                let mut checks = 0_usize;
                while writing.load(Ordering::Acquire) || checks == 0 {
                    assert_back_references_agree(&facade, place_id);
                    checks += 1;
                }
            })
        })
        .collect();

    let writers: Vec<_> = authors
        .into_iter()
        .map(|author| {
            let facade = Arc::clone(&facade);
            thread::spawn(move || {
                let mut kept = 0_usize;
                for round in 0..ROUNDS {
                    let review = facade
                        .create_review(new_review(&author, &place_id.to_string(), 3))
                        .expect("valid review");
                    if round % 2 == 1 {
                        assert!(facade.delete_review(review.id()));
                    } else {
                        kept += 1;
                    }
                }
                kept
            })
        })
        .collect();

    let kept: usize = writers
        .into_iter()
        .map(|writer| writer.join().expect("writer thread"))
        .sum();
    writing.store(false, Ordering::Release);
    for reader in readers {
        reader.join().expect("reader thread");
    }

    assert_back_references_agree(&facade, place_id);
    let place = facade.get_place(place_id).expect("place exists");
    assert_eq!(place.reviews().len(), kept);
    assert_eq!(facade.get_all_reviews().len(), kept);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }
}

#[rstest]
fn deleting_a_review_of_a_missing_place_is_logged() {
    let now = DateTime::<Utc>::UNIX_EPOCH;
    let mut stores = Repositories::in_memory();
    let orphan = Review::new(
        NewReview {
            text: "Left behind".to_owned(),
            rating: 2,
            user_id: String::new(),
            place_id: String::new(),
        },
        UserId::random(),
        PlaceId::random(),
        now,
    )
    .expect("valid review");
    stores.reviews.add(orphan.clone()).expect("fresh id");
    let facade = HbnbFacade::new(stores, Arc::new(MutableClock::new(now)));

    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let deleted = tracing::subscriber::with_default(subscriber, || facade.delete_review(orphan.id()));

    assert!(deleted);
    assert!(facade.get_review(orphan.id()).is_none());
    assert!(
        logs.contents().contains("deleted review pointed at a missing place"),
        "{}",
        logs.contents()
    );
}
