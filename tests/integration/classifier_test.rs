//! Classifier Integration Tests
//!
//! Archetype selection, the interest list and the result wire shape,
//! exercised through the public core API.

use leisure_survey_core::{
    classify, Archetype, LeisureActivity, LocalClassifier, SurveyAnswer, SurveySubmitter,
};

fn answer(rates: [i64; 4], activities: [LeisureActivity; 5]) -> SurveyAnswer {
    SurveyAnswer {
        rest_recreation_rate: rates[0],
        hobby_rate: rates[1],
        self_improvement_rate: rates[2],
        social_relationship_rate: rates[3],
        leisure_activity1: activities[0],
        leisure_activity2: activities[1],
        leisure_activity3: activities[2],
        leisure_activity4: activities[3],
        leisure_activity5: activities[4],
        ..Default::default()
    }
}

const NO_ACTIVITIES: [LeisureActivity; 5] = [LeisureActivity::None; 5];

#[test]
fn test_social_beats_hobby_on_tie() {
    let result = classify(&answer([10, 40, 10, 40], NO_ACTIVITIES));
    assert_eq!(result.animal_name, "강아지");
    assert_eq!(result.animal_type, "강아지는 사회적");
}

#[test]
fn test_each_dominant_rate_maps_to_archetype() {
    let cases = [
        ([10, 10, 10, 70], Archetype::Dog),
        ([10, 10, 70, 10], Archetype::Owl),
        ([10, 70, 10, 10], Archetype::Raccoon),
        ([70, 10, 10, 10], Archetype::Cat),
        // Self-improvement wins a tie with hobby
        ([0, 50, 50, 0], Archetype::Owl),
        // Rest tied with hobby still loses to hobby
        ([50, 50, 0, 0], Archetype::Raccoon),
    ];
    for (rates, expected) in cases {
        let a = answer(rates, NO_ACTIVITIES);
        assert_eq!(Archetype::from_answer(&a), expected, "rates {:?}", rates);
        assert_eq!(classify(&a).animal_name, expected.animal_name());
    }
}

#[test]
fn test_classification_is_deterministic() {
    let a = answer(
        [25, 25, 25, 25],
        [
            LeisureActivity::Sports,
            LeisureActivity::Etc,
            LeisureActivity::None,
            LeisureActivity::None,
            LeisureActivity::None,
        ],
    );
    let first = classify(&a);
    for _ in 0..10 {
        assert_eq!(classify(&a), first);
    }
}

#[test]
fn test_interesting_drops_empty_slots() {
    let a = answer(
        [25, 25, 25, 25],
        [
            LeisureActivity::MediaContent,
            LeisureActivity::None,
            LeisureActivity::Sports,
            LeisureActivity::None,
            LeisureActivity::CultureArt,
        ],
    );
    let result = classify(&a);
    assert_eq!(
        result.analyze.interesting,
        vec!["미디어/콘텐츠", "스포츠/운동", "문화/예술"]
    );
}

#[test]
fn test_interesting_caps_at_three_unique_labels() {
    let a = answer(
        [25, 25, 25, 25],
        [
            LeisureActivity::Sports,
            LeisureActivity::Sports,
            LeisureActivity::SocialFamily,
            LeisureActivity::SelfDevelopment,
            LeisureActivity::DailyRest,
        ],
    );
    assert_eq!(
        classify(&a).analyze.interesting,
        vec!["스포츠/운동", "사교/가족", "자기계발"]
    );
}

#[test]
fn test_balanced_cluster_description_without_activities() {
    let result = classify(&answer([100, 0, 0, 0], NO_ACTIVITIES));
    assert!(result.analyze.interesting.is_empty());
    assert!(result.cluster_description.unwrap().contains("고르게"));
}

#[test]
fn test_time_pattern_threshold() {
    let mut a = answer([100, 0, 0, 0], NO_ACTIVITIES);
    // 4 * 5 + 5 * 2 = 30 is not above the threshold
    a.weekday_avg_leisure_time = 4;
    a.weekend_avg_leisure_time = 5;
    assert_eq!(classify(&a).analyze.time_pattern, "온건");

    a.weekend_avg_leisure_time = 6;
    assert_eq!(classify(&a).analyze.time_pattern, "활동적");
}

#[test]
fn test_result_wire_shape() {
    let result = classify(&answer([10, 40, 10, 40], NO_ACTIVITIES));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["animalName"], "강아지");
    assert!(json["animalDescription"].is_string());
    assert!(json["analyze"]["timePattern"].is_string());
    assert!(json["clusterDescription"].is_string());
}

#[tokio::test]
async fn test_local_submitter_matches_classifier() {
    let a = answer([20, 20, 40, 20], NO_ACTIVITIES);
    let submitted = LocalClassifier::new().submit(&a).await.unwrap();
    assert_eq!(submitted, classify(&a));
    assert_eq!(submitted.animal_name, "부엉이");
}
