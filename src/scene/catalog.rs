//! Built-in places and animations.

use crate::camera::path::FlightSegment;
use crate::camera::policy::PathPolicy;
use crate::foundation::core::{CameraPose, Fps, Location};
use crate::scene::globe::GlobeCameraConfig;
use crate::scene::project::{AnimationProject, FlightConfig, GlobeLineConfig, ProjectKind};
use crate::trail::lines::LineSegment;

/// Id of the animation returned by [`default_animation`].
pub const DEFAULT_ANIMATION_ID: &str = "01-london-to-shenzhen";

const PLACES: &[(&str, f64, f64, &str, &str)] = &[
    ("london", 51.5214, -0.1448, "RIBA, 66 Portland Place", "英国皇家建筑师学会"),
    ("shenzhen", 22.6815, 113.839, "Shenzhen World Exhibition Center", "深圳国际会展中心"),
    ("china", 35.8617, 104.1954, "China", "中国"),
    ("hongkong", 22.3193, 114.1694, "Hong Kong", "香港"),
    ("beijing", 39.9042, 116.4074, "Beijing", "北京"),
    ("shanghai", 31.2304, 121.4737, "Shanghai", "上海"),
    ("chengdu", 30.5728, 104.0668, "Chengdu", "成都"),
    ("maryland", 39.0458, -76.6413, "Maryland, USA", "马里兰州"),
    ("bangalore", 12.9716, 77.5946, "Bangalore", "班加罗尔"),
    ("singapore", 1.3521, 103.8198, "Singapore", "新加坡"),
    ("melbourne", -37.8136, 144.9631, "Melbourne", "墨尔本"),
    ("newyork", 40.7128, -74.0060, "New York", "纽约"),
    ("tokyo", 35.6762, 139.6503, "Tokyo", "东京"),
    ("bangkok", 13.7563, 100.5018, "Bangkok", "曼谷"),
    ("rotterdam", 51.9244, 4.4777, "Rotterdam", "鹿特丹"),
    ("madrid", 40.4168, -3.7038, "Madrid", "马德里"),
    ("seattle", 47.6062, -122.3321, "Seattle", "西雅图"),
];

/// Keys accepted by [`location`], in catalog order.
pub fn location_keys() -> impl Iterator<Item = &'static str> {
    PLACES.iter().map(|(key, ..)| *key)
}

/// Look up a built-in place by key (`"london"`, `"tokyo"`, ..).
pub fn location(key: &str) -> Option<Location> {
    PLACES
        .iter()
        .find(|(k, ..)| *k == key)
        .map(|&(_, lat, lon, name, name_zh)| Location::new(name, lat, lon).with_name_zh(name_zh))
}

fn place(key: &str) -> Location {
    // Only called with keys from PLACES.
    location(key).unwrap_or_else(|| Location::new(key, 0.0, 0.0))
}

fn fps60() -> Fps {
    Fps { num: 60, den: 1 }
}

fn london_to_shenzhen() -> AnimationProject {
    let london = place("london");
    let china = place("china");
    let shenzhen = place("shenzhen");
    let above = |loc: &Location, alt: f64| CameraPose::top_down(loc.longitude, loc.latitude, alt);

    AnimationProject {
        id: DEFAULT_ANIMATION_ID.to_owned(),
        name: "London → Shenzhen Flight".to_owned(),
        name_zh: Some("伦敦飞深圳".to_owned()),
        description: "Cinematic flight from RIBA London to Shenzhen World Exhibition Center"
            .to_owned(),
        kind: ProjectKind::Flight(FlightConfig {
            fps: fps60(),
            start_position: above(&london, 500.0),
            segments: vec![
                FlightSegment::new("pullout-london", 4.0, above(&london, 2_000_000.0)),
                FlightSegment::new(
                    "rotate-to-china",
                    6.0,
                    CameraPose::top_down(60.0, 40.0, 12_000_000.0),
                ),
                FlightSegment::new("approach-china", 4.0, above(&china, 6_000_000.0)),
                FlightSegment::new("approach-shenzhen", 4.0, above(&shenzhen, 300_000.0)),
                FlightSegment::new("dive-shenzhen", 4.0, above(&shenzhen, 500.0)),
            ],
            policy: PathPolicy::default(),
            trail: None,
        }),
    }
}

fn globe_flight_lines() -> AnimationProject {
    AnimationProject {
        id: "02-globe-flight-lines".to_owned(),
        name: "Globe: Shenzhen → London Line".to_owned(),
        name_zh: Some("全景飞线：深圳到伦敦".to_owned()),
        description: "Rotating globe view with animated flight line from Shenzhen to London"
            .to_owned(),
        kind: ProjectKind::GlobeLines(GlobeLineConfig {
            fps: fps60(),
            camera: GlobeCameraConfig {
                lon: 50.0,
                lat: 30.0,
                alt: 20_000_000.0,
                rotation_speed: 2.0,
                follow_line: false,
                follow_alt: None,
                follow_pitch: None,
            },
            total_duration: 15.0,
            lines: vec![LineSegment {
                from: place("shenzhen"),
                to: place("london"),
                duration: 8.0,
                color: "#fbbf24".to_owned(),
                arc_height: 1.2,
                delay: 2.0,
            }],
            markers: vec![place("london"), place("shenzhen")],
        }),
    }
}

/// Every built-in animation, default first.
pub fn animations() -> Vec<AnimationProject> {
    vec![london_to_shenzhen(), globe_flight_lines()]
}

/// Look up a built-in animation by id.
pub fn animation(id: &str) -> Option<AnimationProject> {
    animations().into_iter().find(|a| a.id == id)
}

/// The animation played when none is chosen.
pub fn default_animation() -> AnimationProject {
    london_to_shenzhen()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
