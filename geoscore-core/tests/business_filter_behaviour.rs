#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural tests for competitor selection using rstest-bdd.

use std::cell::RefCell;

use geoscore_core::{BusinessType, LatLng, PointOfInterest, relevant_competitors};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct FilterWorld {
    nearby: RefCell<Vec<PointOfInterest>>,
    selections: RefCell<Vec<Vec<PointOfInterest>>>,
}

impl FilterWorld {
    fn select(&self, business_type: Option<&str>) -> Vec<PointOfInterest> {
        relevant_competitors(&self.nearby.borrow(), business_type)
    }

    fn first_selection(&self) -> Vec<PointOfInterest> {
        self.selections
            .borrow()
            .first()
            .cloned()
            .expect("competitors should have been selected")
    }
}

#[fixture]
fn world() -> FilterWorld {
    FilterWorld::default()
}

#[given("nearby places tagged restaurant, cafe, gym and store")]
fn mixed_neighbourhood(world: &FilterWorld) {
    let origin = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    *world.nearby.borrow_mut() = ["restaurant", "cafe", "gym", "store"]
        .into_iter()
        .map(|tag| PointOfInterest::new(tag, origin, [tag]))
        .collect();
}

#[when("competitors are selected for {business_type}")]
fn select_for(world: &FilterWorld, business_type: String) {
    let selection = world.select(Some(business_type.trim_matches('"')));
    world.selections.borrow_mut().push(selection);
}

#[when("competitors are selected without a business type")]
fn select_without(world: &FilterWorld) {
    let selection = world.select(None);
    world.selections.borrow_mut().push(selection);
}

#[when("competitors are selected twice for {business_type}")]
fn select_twice(world: &FilterWorld, business_type: String) {
    let key = business_type.trim_matches('"');
    let once = world.select(Some(key));
    let twice = relevant_competitors(&once, Some(key));
    world.selections.borrow_mut().extend([once, twice]);
}

#[then("{count:usize} competitors remain")]
fn competitors_remain(world: &FilterWorld, count: usize) {
    assert_eq!(world.first_selection().len(), count);
}

#[then("every competitor is tagged for {business_type}")]
fn every_competitor_tagged(world: &FilterWorld, business_type: String) {
    let kind: BusinessType = business_type
        .trim_matches('"')
        .parse()
        .expect("scenario uses a known business type");
    for poi in world.first_selection() {
        assert!(poi.has_any_type(kind.relevant_tags()), "{poi:?}");
    }
}

#[then("both selections match")]
fn both_selections_match(world: &FilterWorld) {
    let selections = world.selections.borrow();
    assert_eq!(selections.len(), 2);
    assert_eq!(selections.first(), selections.last());
}

#[scenario(path = "tests/features/business_filter.feature", index = 0)]
fn known_business_type(world: FilterWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/business_filter.feature", index = 1)]
fn unknown_business_type(world: FilterWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/business_filter.feature", index = 2)]
fn absent_business_type(world: FilterWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/business_filter.feature", index = 3)]
fn idempotent_selection(world: FilterWorld) {
    let _ = world;
}
