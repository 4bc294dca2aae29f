use std::{
    fs::{read_to_string, remove_dir_all},
    path::PathBuf,
};

use nearby_pairs::{pipeline, Brand, Config, Location};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("nearby-pairs-{name}-{}", std::process::id()));
    let _ = remove_dir_all(&dir);
    dir
}

fn location(name: &str, city: &str, lat: Option<f64>, lng: Option<f64>, stalls: Option<u32>) -> Location {
    Location {
        name: name.to_string(),
        address: format!("1 {name} Way"),
        city: city.to_string(),
        lat,
        lng,
        stalls,
    }
}

fn seed(config: &Config, superchargers: &[Location], in_n_outs: &[Location]) {
    let data = config.data();
    data.save_locations(Brand::Supercharger, superchargers).unwrap();
    data.save_locations(Brand::InNOut, in_n_outs).unwrap();
}

#[test]
fn match_then_export() {
    let config = Config {
        data_dir: scratch("match-then-export"),
        ..Config::default()
    };
    seed(
        &config,
        &[
            location("Baldwin Park, CA", "Baldwin Park", Some(34.0), Some(-118.0), Some(8)),
            location("Gilroy, CA", "Gilroy", Some(37.0), Some(-121.56), Some(20)),
            location("Ghost, CA", "Nowhere", None, None, Some(4)),
        ],
        &[
            location("In-N-Out #1", "Baldwin Park", Some(34.003), Some(-118.0), None),
            location("In-N-Out #2", "Baldwin Park", Some(34.01), Some(-118.0), None),
            location("In-N-Out #3", "Gilroy", Some(37.0005), Some(-121.56), None),
        ],
    );

    let pairs = pipeline::find_nearby(&config).unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].supercharger.name, "Gilroy, CA");
    assert_eq!(pairs[1].supercharger.name, "Baldwin Park, CA");
    assert_eq!(pairs[1].distance_meters, 333);
    assert_eq!(pairs[1].walking_minutes, 4);

    // stored pairs round trip
    assert_eq!(config.data().load_pairs().unwrap(), pairs);

    pipeline::export(&config).unwrap();
    let data = config.data();

    let csv = read_to_string(data.csv_path()).unwrap();
    assert!(csv.starts_with("Name,Description,Latitude,Longitude\n"));
    assert!(csv.contains("Tesla SC + In-N-Out: Gilroy,"));
    assert!(csv.contains("Walking distance: 333m (~4 min)"));

    let kml = read_to_string(data.kml_path()).unwrap();
    assert_eq!(kml.matches("<Placemark>").count(), 2);
    assert!(kml.contains("<coordinates>-118.0,34.0,0</coordinates>"));

    remove_dir_all(&config.data_dir).unwrap();
}

#[test]
fn nothing_in_range_still_exports() {
    let config = Config {
        data_dir: scratch("nothing-in-range"),
        ..Config::default()
    };
    seed(
        &config,
        &[location("Needles, CA", "Needles", Some(34.84), Some(-114.61), Some(8))],
        &[location("In-N-Out #9", "Barstow", Some(34.85), Some(-117.08), None)],
    );

    assert!(pipeline::find_nearby(&config).unwrap().is_empty());
    pipeline::export(&config).unwrap();

    let data = config.data();
    assert_eq!(
        read_to_string(data.csv_path()).unwrap(),
        "Name,Description,Latitude,Longitude\n"
    );
    let kml = read_to_string(data.kml_path()).unwrap();
    assert!(kml.contains("<Document>"));
    assert!(!kml.contains("<Placemark>"));

    remove_dir_all(&config.data_dir).unwrap();
}

#[test]
fn wider_threshold_and_parallel() {
    let config = Config {
        data_dir: scratch("wider-threshold"),
        max_distance: 1200.0,
        parallel: true,
        ..Config::default()
    };
    seed(
        &config,
        &[location("Baldwin Park, CA", "Baldwin Park", Some(34.0), Some(-118.0), Some(8))],
        &[
            location("In-N-Out #2", "Baldwin Park", Some(34.01), Some(-118.0), None),
            location("In-N-Out #1", "Baldwin Park", Some(34.003), Some(-118.0), None),
        ],
    );

    let pairs = pipeline::find_nearby(&config).unwrap();
    let names: Vec<_> = pairs.iter().map(|x| x.in_n_out.name.as_str()).collect();
    assert_eq!(names, vec!["In-N-Out #1", "In-N-Out #2"]);

    remove_dir_all(&config.data_dir).unwrap();
}

#[test]
fn match_before_fetch_fails() {
    let config = Config {
        data_dir: scratch("match-before-fetch"),
        ..Config::default()
    };

    let err = pipeline::find_nearby(&config).unwrap_err();
    assert!(err.to_string().contains("fetch supercharger"));

    let err = pipeline::export(&config).unwrap_err();
    assert!(err.to_string().contains("nearby_pairs.json"));
}

#[test]
fn corrupt_artifact_fails() {
    let config = Config {
        data_dir: scratch("corrupt-artifact"),
        ..Config::default()
    };
    let data = config.data();
    data.write(&data.locations_path(Brand::Supercharger), "{\"not\": \"a list\"}")
        .unwrap();
    data.save_locations(Brand::InNOut, &[]).unwrap();

    let err = pipeline::find_nearby(&config).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));

    remove_dir_all(&config.data_dir).unwrap();
}
