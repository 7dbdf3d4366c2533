//! Facade-level properties checked through the public crate API.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use hbnb::domain::{
    Entity, HbnbFacade, NewAmenity, NewPlace, NewReview, NewUser, Place, PlaceUpdate,
    Repositories, ReviewPatch, User, UserPatch, ValidationError,
};
use hbnb::test_support::MutableClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Fixture {
    facade: HbnbFacade,
    clock: Arc<MutableClock>,
}

#[fixture]
fn fixture() -> Fixture {
    let clock = Arc::new(MutableClock::new(
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(19_000),
    ));
    Fixture {
        facade: HbnbFacade::new(Repositories::in_memory(), clock.clone()),
        clock,
    }
}

fn user(facade: &HbnbFacade) -> User {
    facade
        .create_user(NewUser {
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            email: "grace@example.com".to_owned(),
            is_admin: true,
        })
        .expect("valid user")
}

fn place_at(owner: &User, latitude: f64, longitude: f64) -> NewPlace {
    NewPlace {
        title: "Harbour view".to_owned(),
        description: Some("Top floor".to_owned()),
        price: 120.0,
        latitude,
        longitude,
        owner_id: owner.id().to_string(),
        amenities: Vec::new(),
    }
}

fn non_empty(value: &Value, key: &str) {
    let text = value[key].as_str().unwrap_or_default();
    assert!(!text.is_empty(), "{key} should be a non-empty string");
}

#[rstest]
fn created_records_serialise_every_field(fixture: Fixture) {
    let owner = user(&fixture.facade);
    let amenity = fixture
        .facade
        .create_amenity(NewAmenity {
            name: "Balcony".to_owned(),
        })
        .expect("valid amenity");
    let mut input = place_at(&owner, 48.85, 2.35);
    input.amenities = vec![amenity.id().to_string()];
    let place = fixture.facade.create_place(input).expect("valid place");
    let review = fixture
        .facade
        .create_review(NewReview {
            text: "Great light".to_owned(),
            rating: 5,
            user_id: owner.id().to_string(),
            place_id: place.id().to_string(),
        })
        .expect("valid review");

    let owner_json = serde_json::to_value(&owner).expect("user serialises");
    for key in ["id", "created_at", "updated_at"] {
        non_empty(&owner_json, key);
    }
    assert_eq!(owner_json["first_name"], "Grace");
    assert_eq!(owner_json["last_name"], "Hopper");
    assert_eq!(owner_json["email"], "grace@example.com");
    assert_eq!(owner_json["is_admin"], true);

    let stored = fixture.facade.get_place(place.id()).expect("stored place");
    let place_json = serde_json::to_value(&stored).expect("place serialises");
    for key in ["id", "created_at", "updated_at"] {
        non_empty(&place_json, key);
    }
    assert_eq!(place_json["title"], "Harbour view");
    assert_eq!(place_json["description"], "Top floor");
    assert_eq!(place_json["price"], 120.0);
    assert_eq!(place_json["owner_id"], owner.id().to_string());
    assert_eq!(place_json["amenities"], json!([amenity.id().to_string()]));
    assert_eq!(place_json["reviews"], json!([review.id().to_string()]));

    let review_json = serde_json::to_value(&review).expect("review serialises");
    assert_eq!(review_json["rating"], 5);
    assert_eq!(review_json["user_id"], owner.id().to_string());
    assert_eq!(review_json["place_id"], place.id().to_string());
}

#[rstest]
fn empty_updates_leave_fields_untouched(fixture: Fixture) {
    let owner = user(&fixture.facade);
    let place = fixture
        .facade
        .create_place(place_at(&owner, 10.0, 10.0))
        .expect("valid place");
    fixture.clock.advance_seconds(30);

    let updated_owner = fixture
        .facade
        .update_user(owner.id(), UserPatch::default())
        .expect("empty patch is valid")
        .expect("user exists");
    let updated_place = fixture
        .facade
        .update_place(place.id(), PlaceUpdate::default())
        .expect("empty update is valid")
        .expect("place exists");

    assert_eq!(updated_owner.email(), owner.email());
    assert_eq!(updated_owner.created_at(), owner.created_at());
    assert!(updated_owner.updated_at() >= owner.updated_at());
    assert_eq!(updated_place.title(), place.title());
    assert_eq!(updated_place.owner(), place.owner());
    assert!(updated_place.updated_at() >= place.updated_at());
}

#[rstest]
#[case::north_pole(90.0, 0.0, true)]
#[case::south_pole(-90.0, 0.0, true)]
#[case::date_line_east(0.0, 180.0, true)]
#[case::date_line_west(0.0, -180.0, true)]
#[case::beyond_north(91.0, 0.0, false)]
#[case::beyond_south(-91.0, 0.0, false)]
#[case::beyond_east(0.0, 181.0, false)]
#[case::beyond_west(0.0, -181.0, false)]
fn coordinates_are_bounded(
    fixture: Fixture,
    #[case] latitude: f64,
    #[case] longitude: f64,
    #[case] accepted: bool,
) {
    let owner = user(&fixture.facade);
    let result = fixture
        .facade
        .create_place(place_at(&owner, latitude, longitude));

    assert_eq!(result.is_ok(), accepted, "{result:?}");
    let expected_count = usize::from(accepted);
    assert_eq!(fixture.facade.get_all_places().len(), expected_count);
}

#[rstest]
#[case(0, false)]
#[case(1, true)]
#[case(5, true)]
#[case(6, false)]
fn review_ratings_are_bounded(fixture: Fixture, #[case] rating: i64, #[case] accepted: bool) {
    let owner = user(&fixture.facade);
    let place: Place = fixture
        .facade
        .create_place(place_at(&owner, 0.0, 0.0))
        .expect("valid place");

    let result = fixture.facade.create_review(NewReview {
        text: "Fine".to_owned(),
        rating,
        user_id: owner.id().to_string(),
        place_id: place.id().to_string(),
    });

    match (result, accepted) {
        (Ok(review), true) => assert_eq!(i64::from(review.rating()), rating),
        (Err(err), false) => {
            assert!(matches!(err, ValidationError::RatingOutOfRange { .. }));
            assert!(fixture.facade.get_all_reviews().is_empty());
        }
        (outcome, _) => panic!("unexpected outcome for rating {rating}: {outcome:?}"),
    }
}

#[rstest]
fn rejected_review_update_keeps_previous_rating(fixture: Fixture) {
    let owner = user(&fixture.facade);
    let place = fixture
        .facade
        .create_place(place_at(&owner, 0.0, 0.0))
        .expect("valid place");
    let review = fixture
        .facade
        .create_review(NewReview {
            text: "Fine".to_owned(),
            rating: 3,
            user_id: owner.id().to_string(),
            place_id: place.id().to_string(),
        })
        .expect("valid review");

    let result = fixture.facade.update_review(
        review.id(),
        ReviewPatch {
            text: Some("Changed".to_owned()),
            rating: Some(9),
        },
    );

    assert!(result.is_err());
    let stored = fixture.facade.get_review(review.id()).expect("review kept");
    assert_eq!(stored.rating(), 3);
    assert_eq!(stored.text(), "Fine");
}
