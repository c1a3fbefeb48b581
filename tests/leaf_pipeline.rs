use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use forest_goals::goals::classification::{GoalChoice, build_goal};
use forest_goals::{
    AnswerRequest, ClassAnswer, DiscreteChannels, Goal, LeafError, Stats, Summary, WeightedError,
    Weights,
};

const EPS: f64 = 1e-6;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

// Channel 0 is a binary feature used to route exemplars, channel 1 the label.
fn dataset() -> DiscreteChannels {
    DiscreteChannels::from_channels(vec![
        vec![0, 0, 0, 0, 1, 1, 1, 1, 0, 1, 0, 1],
        vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 2, 1, 1],
    ])
    .unwrap()
}

fn route(es: &DiscreteChannels, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let feature = es.channel(0).unwrap();
    index.iter().copied().partition(|&i| feature[i] == 0)
}

#[test]
fn leaves_train_persist_answer_and_score() {
    let goal = build_goal(
        GoalChoice::from_json(r#"{"type":"classification","params":{"class_count":3,"channel":1}}"#)
            .unwrap(),
    )
    .unwrap();
    let es = dataset();

    let train: Vec<usize> = (0..8).collect();
    let held_out: Vec<usize> = (8..12).collect();

    let (train_left, train_right) = route(&es, &train);
    let (test_left, test_right) = route(&es, &held_out);

    let root = goal.stats(&es, &train, Weights::Uniform).unwrap();
    let left = goal.stats(&es, &train_left, Weights::Uniform).unwrap();
    let right = goal.stats(&es, &train_right, Weights::Uniform).unwrap();
    assert_eq!(left.counts(), &[3.0, 1.0, 0.0]);
    assert_eq!(right.counts(), &[0.0, 1.0, 3.0]);

    // Splitting must reduce impurity.
    let n = train.len() as f64;
    let split_entropy = (train_left.len() as f64 / n) * goal.entropy(&left).unwrap()
        + (train_right.len() as f64 / n) * goal.entropy(&right).unwrap();
    assert!(split_entropy < goal.entropy(&root).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaves.bin");
    {
        let mut w = BufWriter::new(File::create(&path).unwrap());
        left.write_to(&mut w).unwrap();
        right.write_to(&mut w).unwrap();
        w.flush().unwrap();
    }
    let mut r = BufReader::new(File::open(&path).unwrap());
    let left_back = Stats::read_from(&mut r, goal.class_count()).unwrap();
    let right_back = Stats::read_from(&mut r, goal.class_count()).unwrap();
    assert_eq!(left_back, left);
    assert_eq!(right_back, right);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 24);

    let names = ["best", "prob"];
    let answers = goal
        .answer(&[left_back.clone()], AnswerRequest::Many(&names))
        .unwrap()
        .into_many();
    assert_eq!(answers[0], ClassAnswer::Best(0));
    assert_eq!(answers[1], ClassAnswer::Prob(vec![0.75, 0.25, 0.0]));

    let summary_left = goal.summary(&es, &test_left, Weights::Uniform).unwrap();
    let summary_right = goal.summary(&es, &test_right, Weights::Uniform).unwrap();
    assert_eq!(summary_left.counts(), &[1.0, 1.0, 0.0]);
    assert_eq!(summary_right.counts(), &[0.0, 1.0, 1.0]);

    let e_left = goal.error(&left_back, &summary_left).unwrap();
    let e_right = goal.error(&right_back, &summary_right).unwrap();
    assert!(approx_eq(e_left.error, (0.25 + 0.75) / 2.0, EPS));
    assert!(approx_eq(e_right.error, (0.75 + 0.25) / 2.0, EPS));

    let empty_leaf = goal.summary(&es, &[], Weights::Uniform).unwrap();
    let uncovered = goal.error(&left_back, &empty_leaf).unwrap();
    assert_eq!(uncovered, LeafError::uncovered());

    let forest: WeightedError = [e_left, e_right, uncovered].into_iter().collect();
    assert!(approx_eq(forest.mean().unwrap(), 0.5, EPS));
    assert!(approx_eq(forest.total_weight(), 4.0, EPS));
}

#[test]
fn incremental_summary_refresh_with_weights() {
    let goal = build_goal(
        GoalChoice::from_json(r#"{"type":"classification","params":{"class_count":3,"channel":1}}"#)
            .unwrap(),
    )
    .unwrap();
    let es = dataset();
    let weights: Vec<f32> = (0..12).map(|i| 0.5 + i as f32 * 0.25).collect();
    let w = Weights::from(&weights[..]);

    let stats = goal.stats(&es, &[0, 1, 2, 3], w).unwrap();
    let summary = goal.summary(&es, &[8], w).unwrap();
    let refreshed = goal.update_summary(&summary, &es, &[10], w).unwrap();
    assert_eq!(refreshed.counts(), &[2.5, 3.0, 0.0]);

    let encoded = refreshed.to_bytes();
    let decoded = Summary::from_bytes(&encoded, 3).unwrap();
    let leaf = goal.error(&stats, &decoded).unwrap();
    assert!(approx_eq(leaf.weight, 5.5, EPS));
    assert!((0.0..=1.0).contains(&leaf.error));
}
