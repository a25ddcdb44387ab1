use super::*;
use crate::clusterer::{ClusterError, Metric};
use crate::config::AppConfig;
use crate::validator::ValidationError;

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.kmeans.seed = Some(17);
    config
}

fn colour_for(cluster: usize) -> &'static str {
    ["red", "green", "blue"][cluster]
}

fn solve(session: &mut ExerciseSession) {
    let truth: Vec<(usize, usize)> = session
        .points()
        .iter()
        .map(|p| (p.id, p.cluster_id))
        .collect();
    for (id, cluster) in truth {
        session.assign_colour(id, colour_for(cluster)).unwrap();
    }
}

#[test]
fn test_exercise_solved_by_ground_truth() {
    let mut session = ExerciseSession::new(&config()).unwrap();
    assert_eq!(session.points().len(), 10);
    assert!(!session.is_complete());

    solve(&mut session);
    assert!(session.is_complete());
    assert_eq!(session.validate().unwrap(), 10);
    assert!(session.is_solved());
}

#[test]
fn test_exercise_recolour_invalidates_only_that_point() {
    let mut session = ExerciseSession::new(&config()).unwrap();
    solve(&mut session);
    session.validate().unwrap();

    session.assign_colour(4, "purple").unwrap();

    assert!(session.points()[4].is_correct.is_none());
    assert!(session
        .points()
        .iter()
        .filter(|p| p.id != 4)
        .all(|p| p.is_correct == Some(true)));
    assert!(!session.is_solved());
}

#[test]
fn test_exercise_validate_requires_every_colour() {
    let mut session = ExerciseSession::new(&config()).unwrap();
    solve(&mut session);
    session.clear_colour(0).unwrap();

    assert_eq!(
        session.validate().unwrap_err(),
        ValidationError::Incomplete { missing: 1 }
    );
}

#[test]
fn test_exercise_reset_keeps_geometry() {
    let mut session = ExerciseSession::new(&config()).unwrap();
    let before: Vec<_> = session.points().iter().map(|p| (p.point, p.cluster_id)).collect();

    solve(&mut session);
    session.validate().unwrap();
    session.reset();

    let after: Vec<_> = session.points().iter().map(|p| (p.point, p.cluster_id)).collect();
    assert_eq!(before, after);
    assert!(session
        .points()
        .iter()
        .all(|p| p.assigned_colour.is_none() && p.is_correct.is_none()));
}

#[test]
fn test_exercise_unknown_point() {
    let mut session = ExerciseSession::new(&config()).unwrap();
    assert_eq!(
        session.assign_colour(99, "red").unwrap_err(),
        ValidationError::UnknownPoint(99)
    );
}

#[test]
fn test_workbench_starts_on_first_dataset() {
    let bench = Workbench::new(&config()).unwrap();
    assert_eq!(bench.active_dataset().unwrap().name, "exercise");
    assert!(bench.history().is_empty());
    assert!(bench.cache().is_empty());
}

#[test]
fn test_workbench_unknown_dataset() {
    let mut bench = Workbench::new(&config()).unwrap();
    assert!(matches!(
        bench.select_dataset("spirals"),
        Err(SessionError::UnknownDataset(_))
    ));
}

#[test]
fn test_workbench_reuses_cached_seed() {
    let mut bench = Workbench::new(&config()).unwrap();
    bench.select_dataset("blobs").unwrap();

    let first = bench.run_kmeans(3, Metric::Euclidean, true).unwrap().points.clone();
    let second = bench.run_kmeans(3, Metric::Euclidean, true).unwrap().points.clone();

    assert_eq!(first, second);
    assert_eq!(bench.cache().len(), 1);
    assert_eq!(bench.history().len(), 2);

    let fingerprint = bench.active_dataset().unwrap().fingerprint();
    assert_eq!(bench.cache().get(&fingerprint, 3).unwrap().len(), 3);
}

#[test]
fn test_workbench_switch_invalidates_cache() {
    let mut bench = Workbench::new(&config()).unwrap();
    bench.select_dataset("blobs").unwrap();
    bench.run_kmeans(2, Metric::Manhattan, true).unwrap();
    bench.run_kmeans(3, Metric::Manhattan, true).unwrap();
    assert_eq!(bench.cache().len(), 2);

    // reselecting the active dataset keeps the cache
    bench.select_dataset("blobs").unwrap();
    assert_eq!(bench.cache().len(), 2);

    bench.select_dataset("moons").unwrap();
    assert!(bench.cache().is_empty());
    assert_eq!(bench.history().len(), 2);
}

#[test]
fn test_workbench_kmeans_errors_surface() {
    let mut bench = Workbench::new(&config()).unwrap();
    let err = bench.run_kmeans(11, Metric::Euclidean, false).unwrap_err();

    assert!(matches!(
        err,
        SessionError::Cluster(ClusterError::TooFewPoints { k: 11, n: 10 })
    ));
    assert!(bench.history().is_empty());
}

#[test]
fn test_workbench_dbscan_run_is_recorded() {
    let mut bench = Workbench::new(&config()).unwrap();
    bench.select_dataset("blobs").unwrap();

    let run = bench.run_dbscan(1.0, 3, Metric::Chebyshev).unwrap();
    assert_eq!(run.dataset, "blobs");
    assert_eq!(run.points.len(), 60);
    assert!(run.visible);
    assert!(matches!(
        run.params,
        RunParams::Dbscan { min_pts: 3, metric: Metric::Chebyshev, .. }
    ));
}

#[test]
fn test_history_toggle_and_remove() {
    let mut bench = Workbench::new(&config()).unwrap();
    let a = bench.run_kmeans(2, Metric::Euclidean, false).unwrap().id;
    let b = bench.run_dbscan(2.0, 2, Metric::Euclidean).unwrap().id;

    assert!(!bench.toggle_run(a).unwrap());
    assert_eq!(bench.history().visible().count(), 1);
    assert!(bench.toggle_run(a).unwrap());

    let removed = bench.remove_run(b).unwrap();
    assert_eq!(removed.id, b);
    assert!(bench.history().get(b).is_none());
    assert!(matches!(bench.remove_run(b), Err(SessionError::UnknownRun(_))));

    bench.clear_history();
    assert!(bench.history().is_empty());
}
