//! Integration tests for `SqliteStore` against an in-memory database.

use flowlab_core::{
  demo::demo_dataset,
  experiment::NewExperiment,
  prediction::NewPrediction,
  store::FlowStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn experiment(name: &str) -> NewExperiment {
  NewExperiment::new(name, "Re=1000", "test")
}

// ─── Experiments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_experiment() {
  let s = store().await;

  let created = s.create_experiment(experiment("Re=1000")).await.unwrap();
  assert_eq!(created.id, 1);
  assert_eq!(created.name, "Re=1000");

  let fetched = s.get_experiment(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_experiment_missing_returns_none() {
  let s = store().await;
  let result = s.get_experiment(42).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn list_experiments_in_insertion_order() {
  let s = store().await;
  s.create_experiment(experiment("a")).await.unwrap();
  s.create_experiment(experiment("b")).await.unwrap();
  s.create_experiment(experiment("c")).await.unwrap();

  let all = s.list_experiments().await.unwrap();
  let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
  let s = store().await;
  s.create_experiment(experiment("same")).await.unwrap();

  let err = s.create_experiment(experiment("same")).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(flowlab_core::Error::DuplicateName(ref name)) if name == "same"
  ));

  assert_eq!(s.list_experiments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_experiment_removes_it() {
  let s = store().await;
  let keep = s.create_experiment(experiment("keep")).await.unwrap();
  let gone = s.create_experiment(experiment("gone")).await.unwrap();

  assert!(s.delete_experiment(gone.id).await.unwrap());

  let all = s.list_experiments().await.unwrap();
  assert_eq!(all, vec![keep]);
  assert!(s.get_experiment(gone.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_experiment_returns_false() {
  let s = store().await;
  assert!(!s.delete_experiment(7).await.unwrap());
}

#[tokio::test]
async fn delete_experiment_cascades_to_predictions() {
  let s = store().await;
  let a = s.create_experiment(experiment("a")).await.unwrap();
  let b = s.create_experiment(experiment("b")).await.unwrap();
  s.create_prediction(NewPrediction::new(a.id, 1.0, "/outputs/a1.png")).await.unwrap();
  s.create_prediction(NewPrediction::new(a.id, 2.0, "/outputs/a2.png")).await.unwrap();
  let survivor = s
    .create_prediction(NewPrediction::new(b.id, 3.0, "/outputs/b1.png"))
    .await
    .unwrap();

  assert!(s.delete_experiment(a.id).await.unwrap());

  assert!(s.predictions_for_experiment(a.id).await.unwrap().is_empty());
  assert_eq!(s.list_predictions().await.unwrap(), vec![survivor]);
}

// ─── Predictions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_prediction_and_list_by_experiment() {
  let s = store().await;
  let exp = s.create_experiment(experiment("Re=1000")).await.unwrap();

  let pred = s
    .create_prediction(NewPrediction::new(exp.id, 2.5, "/outputs/x.png"))
    .await
    .unwrap();
  assert_eq!(pred.id, 1);
  assert_eq!(pred.experiment_id, exp.id);
  assert_eq!(pred.input_value, 2.5);
  assert_eq!(pred.output_path, "/outputs/x.png");

  let by_exp = s.predictions_for_experiment(exp.id).await.unwrap();
  assert_eq!(by_exp, vec![pred]);
}

#[tokio::test]
async fn prediction_for_unknown_experiment_is_rejected() {
  let s = store().await;

  let err = s
    .create_prediction(NewPrediction::new(99, 1.0, "/outputs/x.png"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(flowlab_core::Error::ExperimentNotFound(99))
  ));
  assert!(s.list_predictions().await.unwrap().is_empty());
}

#[tokio::test]
async fn predictions_for_experiment_without_any_is_empty() {
  let s = store().await;
  let exp = s.create_experiment(experiment("lonely")).await.unwrap();

  assert!(s.predictions_for_experiment(exp.id).await.unwrap().is_empty());
  assert!(s.predictions_for_experiment(12345).await.unwrap().is_empty());
}

#[tokio::test]
async fn predictions_for_experiment_filters_other_experiments() {
  let s = store().await;
  let a = s.create_experiment(experiment("a")).await.unwrap();
  let b = s.create_experiment(experiment("b")).await.unwrap();
  s.create_prediction(NewPrediction::new(a.id, 1.0, "/outputs/a.png")).await.unwrap();
  s.create_prediction(NewPrediction::new(b.id, 2.0, "/outputs/b.png")).await.unwrap();

  let only_b = s.predictions_for_experiment(b.id).await.unwrap();
  assert_eq!(only_b.len(), 1);
  assert_eq!(only_b[0].experiment_id, b.id);
}

#[tokio::test]
async fn delete_prediction() {
  let s = store().await;
  let exp = s.create_experiment(experiment("e")).await.unwrap();
  let pred = s
    .create_prediction(NewPrediction::new(exp.id, 1.0, "/outputs/p.png"))
    .await
    .unwrap();

  assert!(s.delete_prediction(pred.id).await.unwrap());
  assert!(!s.delete_prediction(pred.id).await.unwrap());
  assert!(s.list_predictions().await.unwrap().is_empty());
}

// ─── Reseed & stats ──────────────────────────────────────────────────────────

#[tokio::test]
async fn reseed_replaces_existing_rows() {
  let s = store().await;
  let old = s.create_experiment(experiment("old")).await.unwrap();
  s.create_prediction(NewPrediction::new(old.id, 0.5, "/outputs/old.png")).await.unwrap();

  let summary = s.reseed(&demo_dataset()).await.unwrap();
  assert_eq!(summary.experiments_created, 3);
  assert_eq!(summary.predictions_created, 5);

  let names: Vec<_> = s
    .list_experiments()
    .await
    .unwrap()
    .into_iter()
    .map(|e| e.name)
    .collect();
  assert!(!names.contains(&"old".to_string()));
  assert!(names.contains(&"Reynolds Number Study".to_string()));
}

#[tokio::test]
async fn reseed_twice_does_not_accumulate() {
  let s = store().await;
  s.reseed(&demo_dataset()).await.unwrap();
  s.reseed(&demo_dataset()).await.unwrap();

  let stats = s.stats().await.unwrap();
  assert_eq!(stats.experiments, 3);
  assert_eq!(stats.predictions, 5);
}

#[tokio::test]
async fn reseed_links_predictions_to_their_experiments() {
  let s = store().await;
  s.reseed(&demo_dataset()).await.unwrap();

  let experiments = s.list_experiments().await.unwrap();
  let turbulent = experiments
    .iter()
    .find(|e| e.name == "Turbulent Flow Analysis")
    .unwrap();
  let preds = s.predictions_for_experiment(turbulent.id).await.unwrap();
  let values: Vec<_> = preds.iter().map(|p| p.input_value).collect();
  assert_eq!(values, [8.2, 9.1]);
}

#[tokio::test]
async fn stats_on_empty_store() {
  let s = store().await;
  let stats = s.stats().await.unwrap();
  assert_eq!(stats.experiments, 0);
  assert_eq!(stats.predictions, 0);
}
