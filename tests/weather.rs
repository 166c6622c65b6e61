use miniid3::prelude::*;
use miniid3::id3::{best_attribute, information_gain};

use std::path::PathBuf;


fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}


fn weather_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/dataset/weather.csv");
    path
}


fn weather() -> Sample {
    SampleReader::default()
        .file(weather_path())
        .has_header(true)
        .target_feature("play")
        .read()
        .unwrap()
}


fn instance(outlook: &str, temperature: &str, humidity: &str, wind: &str)
    -> Instance
{
    Instance::new()
        .with("outlook", outlook)
        .with("temperature", temperature)
        .with("humidity", humidity)
        .with("wind", wind)
}


#[test]
fn read_weather() {
    init_logger();
    let sample = weather();

    assert_eq!(sample.len(), 14);
    assert_eq!(sample.labels().iter().filter(|y| **y).count(), 9);

    let domain = sample.domain();
    let names = domain.names().collect::<Vec<_>>();
    assert_eq!(names, ["outlook", "temperature", "humidity", "wind"]);
    assert_eq!(
        domain.values("outlook").unwrap(),
        ["sunny", "overcast", "rain"]
    );
}


#[test]
fn outlook_is_the_root() {
    init_logger();
    let sample = weather();
    let examples = sample.examples().iter().collect::<Vec<_>>();
    let domain = sample.domain();

    assert_eq!(best_attribute(&examples, domain), Some("outlook"));

    let outlook = information_gain(&examples, "outlook", domain).unwrap();
    for name in domain.names().filter(|name| *name != "outlook") {
        let gain = information_gain(&examples, name, domain).unwrap();
        assert!(gain < outlook, "{name}: {gain} >= {outlook}");
    }

    let f = Id3Builder::new(&sample).build().fit();
    assert_eq!(f.root().attribute(), Some("outlook"));
}


#[test]
fn weather_tree() {
    init_logger();
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let root = f.root();
    let values = root.edges()
        .iter()
        .map(|edge| {
            let child = edge.child();
            let target = match child.attribute() {
                Some(attribute) => attribute.to_string(),
                None => child.label().unwrap().to_string(),
            };
            (edge.value(), target)
        })
        .collect::<Vec<_>>();
    assert_eq!(
        values,
        [
            ("sunny", "humidity".to_string()),
            ("overcast", "true".to_string()),
            ("rain", "wind".to_string()),
        ]
    );

    assert_eq!(f.depth(), 2);
    assert_eq!(f.n_leaves(), 5);
}


#[test]
fn classify_unseen_instances() {
    init_logger();
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let x = instance("sunny", "mild", "high", "weak");
    assert!(!f.classify(&x).unwrap());

    let x = instance("rain", "hot", "normal", "weak");
    assert!(f.classify(&x).unwrap());
}


#[test]
fn zero_training_error() {
    init_logger();
    let sample = weather();

    for execution in [Execution::Sequential, Execution::Parallel] {
        let f = Id3Builder::new(&sample)
            .execution(execution)
            .build()
            .fit();

        assert_eq!(f.classify_all(&sample).unwrap(), sample.labels());
        assert_eq!(f.error_rate(&sample).unwrap(), 0.0);
    }
}


#[test]
fn sequential_and_parallel_agree() {
    init_logger();
    let sample = weather();

    let sequential = Id3Builder::new(&sample)
        .execution(Execution::Sequential)
        .build()
        .fit();
    let parallel = Id3Builder::new(&sample)
        .execution(Execution::Parallel)
        .build()
        .fit();
    assert_eq!(sequential, parallel);
}


#[test]
fn domain_mismatch() {
    init_logger();
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let x = instance("foggy", "mild", "high", "weak");
    let err = f.classify(&x).unwrap_err();
    assert!(matches!(err, Error::UnknownValue { .. }));

    let x = Instance::new().with("outlook", "rain");
    let err = f.classify(&x).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute { ref attribute } if attribute == "wind"
    ));
    assert!(err.is_domain_mismatch());
}


#[test]
fn empty_sample_is_a_false_leaf() {
    let sample = Sample::from_examples(Vec::new()).unwrap();
    let f = Id3Builder::new(&sample).build().fit();

    assert!(f.root().is_leaf());
    assert!(!f.classify(&Instance::new()).unwrap());
    assert_eq!(f.error_rate(&sample).unwrap(), 0.0);
}


#[test]
fn display_follows_depth_first_order() {
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let expected = "\
        root\n\
        attribute: outlook\n\
        |-sunny->humidity\n\
        |-overcast->true\n\
        |-rain->wind\n\
        \n\
        level 2\n\
        attribute: humidity\n\
        |-high->false\n\
        |-normal->true\n\
        \n\
        level 2\n\
        attribute: wind\n\
        |-weak->true\n\
        |-strong->false\n\
        \n";
    assert_eq!(f.to_string(), expected);
}


#[test]
fn json_round_trip() {
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let json = f.to_json().unwrap();
    let g = Id3Classifier::from_json(&json).unwrap();
    assert_eq!(f, g);
    assert_eq!(g.classify_all(&sample).unwrap(), sample.labels());

    assert!(Id3Classifier::from_json("{\"root\": 3}").is_err());
}


#[test]
fn dot_file() {
    let sample = weather();
    let f = Id3Builder::new(&sample).build().fit();

    let mut path = std::env::temp_dir();
    path.push(format!("miniid3-weather-{}.dot", std::process::id()));
    f.to_dot_file(&path).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.contains("[ label = \"outlook\" ]"));
    assert!(dot.contains("[ label = \"overcast\" ]"));
    assert_eq!(dot.matches("shape = box").count(), 5);
}
