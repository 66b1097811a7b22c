// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use yare::parameterized;

fn make_note(id: &str, industry: &str, ai_type: AiType, sentiment: i32) -> Note {
    Note {
        id: id.to_string(),
        author_name: format!("Author {id}"),
        profession: String::new(),
        industry: industry.to_string(),
        region: String::new(),
        use_case: format!("use case {id}"),
        experience: String::new(),
        ai_type,
        ai_realness: AiRealness::Imagined,
        sentiment,
        pain_points: String::new(),
        extra_thoughts: String::new(),
        color: "#A8EDCE".to_string(),
        rotation: 0.0,
        x: 0.0,
        y: 0.0,
        comments: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn sample() -> Vec<Note> {
    let mut notes = vec![
        make_note("a", "Education", AiType::Generative, 2),
        make_note("b", "Healthcare", AiType::Predictive, -1),
        make_note("c", "Education", AiType::Automation, 0),
        make_note("d", "Finance", AiType::Generative, -2),
        make_note("e", "Education", AiType::Generative, 1),
    ];
    notes[1].ai_realness = AiRealness::Using;
    notes[4].ai_realness = AiRealness::Using;
    notes[2].experience = "Grading Essays took all weekend".to_string();
    notes[3].author_name = "Grace Hopper".to_string();
    notes
}

fn ids(notes: &[&Note]) -> Vec<String> {
    notes.iter().map(|n| n.id.clone()).collect()
}

#[parameterized(
    very_optimistic = { 2, SentimentBucket::Optimistic },
    optimistic = { 1, SentimentBucket::Optimistic },
    neutral = { 0, SentimentBucket::Neutral },
    pessimistic = { -1, SentimentBucket::Pessimistic },
    very_pessimistic = { -2, SentimentBucket::Pessimistic },
    out_of_range_high = { 9, SentimentBucket::Optimistic },
)]
fn sentiment_bucket_of(sentiment: i32, expected: SentimentBucket) {
    assert_eq!(SentimentBucket::of(sentiment), expected);
}

#[test]
fn bucket_from_str() {
    assert_eq!(
        "Optimistic".parse::<SentimentBucket>().unwrap(),
        SentimentBucket::Optimistic
    );
    assert!("meh".parse::<SentimentBucket>().is_err());
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let notes = sample();
    let criteria = FilterCriteria::default();
    assert!(!criteria.is_active());
    assert_eq!(ids(&criteria.project(&notes)), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn empty_strings_are_unset() {
    let notes = sample();
    let criteria = FilterCriteria {
        industry: Some(String::new()),
        search: Some(String::new()),
        ..FilterCriteria::default()
    };
    assert!(!criteria.is_active());
    assert_eq!(criteria.project(&notes).len(), notes.len());
}

#[parameterized(
    industry = { FilterCriteria { industry: Some("Education".into()), ..Default::default() }, &["a", "c", "e"] },
    ai_type = { FilterCriteria { ai_type: Some(AiType::Generative), ..Default::default() }, &["a", "d", "e"] },
    realness = { FilterCriteria { realness: Some(AiRealness::Using), ..Default::default() }, &["b", "e"] },
    optimistic = { FilterCriteria { sentiment: Some(SentimentBucket::Optimistic), ..Default::default() }, &["a", "e"] },
    neutral = { FilterCriteria { sentiment: Some(SentimentBucket::Neutral), ..Default::default() }, &["c"] },
    pessimistic = { FilterCriteria { sentiment: Some(SentimentBucket::Pessimistic), ..Default::default() }, &["b", "d"] },
    search_experience = { FilterCriteria { search: Some("essays".into()), ..Default::default() }, &["c"] },
    search_author = { FilterCriteria { search: Some("HOPPER".into()), ..Default::default() }, &["d"] },
    search_industry = { FilterCriteria { search: Some("health".into()), ..Default::default() }, &["b"] },
    search_use_case = { FilterCriteria { search: Some("use case e".into()), ..Default::default() }, &["e"] },
    search_no_hit = { FilterCriteria { search: Some("blockchain".into()), ..Default::default() }, &[] },
)]
fn single_criterion(criteria: FilterCriteria, expected: &[&str]) {
    let notes = sample();
    assert_eq!(ids(&criteria.project(&notes)), expected);
}

#[test]
fn search_ignores_fields_outside_the_searched_set() {
    let mut notes = sample();
    notes[0].pain_points = "zebra".to_string();
    notes[0].region = "zebra".to_string();
    let criteria = FilterCriteria {
        search: Some("zebra".into()),
        ..Default::default()
    };
    assert!(criteria.project(&notes).is_empty());
}

#[test]
fn combined_criteria_are_the_intersection() {
    let notes = sample();
    let by_industry = FilterCriteria {
        industry: Some("Education".into()),
        ..Default::default()
    };
    let by_type = FilterCriteria {
        ai_type: Some(AiType::Generative),
        ..Default::default()
    };
    let both = FilterCriteria {
        industry: by_industry.industry.clone(),
        ai_type: by_type.ai_type,
        ..Default::default()
    };

    let left = ids(&by_industry.project(&notes));
    let right = ids(&by_type.project(&notes));
    let intersection: Vec<String> = left.into_iter().filter(|id| right.contains(id)).collect();

    assert_eq!(ids(&both.project(&notes)), intersection);
    assert_eq!(intersection, vec!["a", "e"]);
}

#[test]
fn projection_is_pure_and_repeatable() {
    let notes = sample();
    let before = notes.clone();
    let criteria = FilterCriteria {
        sentiment: Some(SentimentBucket::Optimistic),
        search: Some("author".into()),
        ..Default::default()
    };

    let first = ids(&criteria.project(&notes));
    let second = ids(&criteria.project(&notes));

    assert_eq!(first, second);
    assert_eq!(notes, before);
}
