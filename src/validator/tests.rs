use super::*;
use crate::clusterer::Point;

/// Ten points split 3/3/4 over clusters 0, 1, 2
fn partition() -> Vec<GeneratedPoint> {
    let ids = [0, 0, 0, 1, 1, 1, 2, 2, 2, 2];
    ids.iter()
        .enumerate()
        .map(|(i, &c)| GeneratedPoint::new(i, Point::new(i as f64, c as f64), c))
        .collect()
}

fn coloured(colours: &[&str]) -> Vec<GeneratedPoint> {
    let mut points = partition();
    for (p, c) in points.iter_mut().zip(colours) {
        p.assign_colour(*c);
    }
    points
}

const MATCHING: [&str; 10] = [
    "red", "red", "red", "green", "green", "green", "blue", "blue", "blue", "blue",
];

#[test]
fn test_matching_colouring_is_fully_correct() {
    let result = validate(&coloured(&MATCHING)).unwrap();

    assert_eq!(result.correct_count, 10);
    assert!(result.is_success());
    assert!(result.points.iter().all(|p| p.is_correct == Some(true)));
}

#[test]
fn test_colour_names_are_arbitrary() {
    let colours = [
        "blue", "blue", "blue", "red", "red", "red", "green", "green", "green", "green",
    ];
    let result = validate(&coloured(&colours)).unwrap();

    assert!(result.is_success());
}

#[test]
fn test_borrowed_colour_fails_both_clusters() {
    let mut colours = MATCHING;
    colours[0] = "green";

    let result = validate(&coloured(&colours)).unwrap();
    let wrong: Vec<usize> = result
        .points
        .iter()
        .filter(|p| p.is_correct == Some(false))
        .map(|p| p.id)
        .collect();

    assert!(wrong.len() >= 2);
    assert!(wrong.contains(&0));
    assert!(wrong.contains(&3));
    assert!(!result.is_success());

    // the untouched blue cluster still passes
    assert!(result.points[6..].iter().all(|p| p.is_correct == Some(true)));
    assert_eq!(result.correct_count, 4);
}

#[test]
fn test_split_cluster_fails() {
    let mut colours = MATCHING;
    colours[9] = "yellow";

    let result = validate(&coloured(&colours)).unwrap();

    // cluster 2 now has two colours, the others are fine
    assert_eq!(result.correct_count, 6);
    assert!(result.points[6..].iter().all(|p| p.is_correct == Some(false)));
}

#[test]
fn test_single_colour_everywhere_fails() {
    let result = validate(&coloured(&["red"; 10])).unwrap();
    assert_eq!(result.correct_count, 0);
}

#[test]
fn test_incomplete_is_reported() {
    let mut points = coloured(&MATCHING);
    points[4].clear_colour();
    points[7].clear_colour();

    assert_eq!(
        validate(&points).unwrap_err(),
        ValidationError::Incomplete { missing: 2 }
    );
}

#[test]
fn test_score_marks_uncoloured_incorrect() {
    let mut points = coloured(&MATCHING);
    points[1].clear_colour();

    let scored = score(&points);

    assert_eq!(scored[1].is_correct, Some(false));
    // its cluster now mixes a colour with no colour
    assert_eq!(scored[0].is_correct, Some(false));
    assert_eq!(scored[3].is_correct, Some(true));
}

#[test]
fn test_validate_leaves_input_untouched() {
    let points = coloured(&MATCHING);
    let _ = validate(&points).unwrap();

    assert!(points.iter().all(|p| p.is_correct.is_none()));
}

#[test]
fn test_empty_set_is_trivially_solved() {
    let result = validate(&[]).unwrap();
    assert_eq!(result.correct_count, 0);
    assert!(result.is_success());
}
