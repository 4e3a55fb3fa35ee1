use super::*;
use crate::scene::Scene;

#[test]
fn locations_resolve_by_key() {
    let london = location("london").unwrap();
    assert_eq!(london.latitude, 51.5214);
    assert_eq!(london.longitude, -0.1448);
    assert_eq!(london.name_zh.as_deref(), Some("英国皇家建筑师学会"));
    assert_eq!(location("newyork").unwrap().longitude, -74.0060);
    assert!(location("atlantis").is_none());
    assert_eq!(location_keys().count(), 17);
    assert!(location_keys().all(|k| location(k).is_some()));
}

#[test]
fn builtins_are_valid_and_ordered() {
    let all = animations();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, DEFAULT_ANIMATION_ID);
    assert_eq!(all[1].id, "02-globe-flight-lines");
    for a in &all {
        a.validate().unwrap();
    }
}

#[test]
fn lookup_by_id() {
    assert_eq!(animation("02-globe-flight-lines").unwrap().kind_name(), "globe-lines");
    assert!(animation("03-missing").is_none());
    assert_eq!(default_animation(), animations()[0]);
}

#[test]
fn london_to_shenzhen_matches_authored_legs() {
    let scene = Scene::from_project(&default_animation()).unwrap();
    let Scene::Flight(flight) = scene else {
        panic!("expected a flight");
    };
    let path = flight.camera().path();
    assert_eq!(path.total_secs(), 22.0);
    let names: Vec<_> = path.segments().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "pullout-london",
            "rotate-to-china",
            "approach-china",
            "approach-shenzhen",
            "dive-shenzhen"
        ]
    );
    assert_eq!(path.end().altitude, 500.0);
}
