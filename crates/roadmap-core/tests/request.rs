use roadmap_core::error::CoreError;
use roadmap_core::models::level::Level;
use roadmap_core::models::request::RoadmapRequest;

#[test]
fn valid_input_is_trimmed_and_typed() {
    let request = RoadmapRequest::parse("  Rust ", " 30 ", "intermediate").unwrap();
    assert_eq!(request.topic, "Rust");
    assert_eq!(request.duration_days.get(), 30);
    assert_eq!(request.level, Level::Intermediate);
}

#[test]
fn blank_fields_are_missing() {
    assert_eq!(
        RoadmapRequest::parse("", "10", "Beginner"),
        Err(CoreError::MissingField("topic"))
    );
    assert_eq!(
        RoadmapRequest::parse("Go", "  ", "Beginner"),
        Err(CoreError::MissingField("duration"))
    );
    assert_eq!(
        RoadmapRequest::parse("Go", "10", ""),
        Err(CoreError::MissingField("level"))
    );
}

#[test]
fn missing_field_is_reported_before_bad_duration() {
    assert_eq!(
        RoadmapRequest::parse("", "abc", "Beginner"),
        Err(CoreError::MissingField("topic"))
    );
}

#[test]
fn duration_must_be_a_positive_integer() {
    for bad in ["abc", "0", "-3", "2.5"] {
        assert!(
            matches!(
                RoadmapRequest::parse("Go", bad, "Beginner"),
                Err(CoreError::InvalidDuration(_))
            ),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn unknown_level_is_rejected() {
    assert_eq!(
        RoadmapRequest::parse("Go", "5", "Expert"),
        Err(CoreError::InvalidLevel("Expert".to_string()))
    );
}

#[test]
fn level_display_is_canonical() {
    assert_eq!("ADVANCED".parse::<Level>().unwrap().to_string(), "Advanced");
    assert_eq!(Level::default(), Level::Beginner);
}
