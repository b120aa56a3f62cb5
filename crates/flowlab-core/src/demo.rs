//! The demonstration dataset loaded by `POST /demo/populate`.

use crate::experiment::NewExperiment;

/// One prediction to insert under a [`SeedExperiment`].
#[derive(Debug, Clone, PartialEq)]
pub struct SeedPrediction {
  pub input_value: f64,
  pub output_path: String,
}

/// An experiment and the predictions recorded against it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedExperiment {
  pub experiment:  NewExperiment,
  pub predictions: Vec<SeedPrediction>,
}

/// Row counts inserted by [`FlowStore::reseed`](crate::store::FlowStore::reseed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
  pub experiments_created: usize,
  pub predictions_created: usize,
}

fn seed(
  name: &str,
  parameters: &str,
  description: &str,
  predictions: &[(f64, &str)],
) -> SeedExperiment {
  SeedExperiment {
    experiment:  NewExperiment::new(name, parameters, description),
    predictions: predictions
      .iter()
      .map(|&(input_value, path)| SeedPrediction {
        input_value,
        output_path: path.to_owned(),
      })
      .collect(),
  }
}

/// Three experiments with five predictions between them.
pub fn demo_dataset() -> Vec<SeedExperiment> {
  vec![
    seed(
      "Reynolds Number Study",
      "Re=1000, viscosity=0.001",
      "Study of flow patterns at low Reynolds numbers",
      &[(2.5, "/outputs/exp1_pred1.png"), (3.7, "/outputs/exp1_pred2.png")],
    ),
    seed(
      "Turbulent Flow Analysis",
      "Re=5000, turbulence_model=k-epsilon",
      "Analysis of turbulent flow in a pipe",
      &[(8.2, "/outputs/exp2_pred1.png"), (9.1, "/outputs/exp2_pred2.png")],
    ),
    seed(
      "Laminar Flow Simulation",
      "Re=500, channel_width=0.1m",
      "Simulation of laminar flow in rectangular channel",
      &[(1.5, "/outputs/exp3_pred1.png")],
    ),
  ]
}
