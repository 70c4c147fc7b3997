use std::fmt;

use serde::{Deserialize as De, Serialize as Ser};

use crate::{prelude::*, Exceptional, Failure};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Ser, De)]
pub enum HealthStatus {
  UnderWeight,
  OverWeight,
  Healthy,
}

impl fmt::Display for HealthStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", match self {
      | Self::UnderWeight => "UnderWeight",
      | Self::OverWeight => "OverWeight",
      | Self::Healthy => "Healthy",
    })
  }
}

/// `weight / height²`, rounded to two decimals.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
  (weight_kg / height_m.powi(2) * 100.0).round() / 100.0
}

pub fn health_status(bmi: f64) -> HealthStatus {
  if bmi > 25.0 {
    HealthStatus::OverWeight
  } else if bmi < 18.5 {
    HealthStatus::UnderWeight
  } else {
    HealthStatus::Healthy
  }
}

fn finite(bmi: f64) -> Exceptional<f64> {
  if bmi.is_finite() {
    Exceptional::success(bmi)
  } else {
    Exceptional::failure(Failure::new("NonFiniteBmi",
                                      format!("bmi {} is not a number", bmi)))
  }
}

/// Read weight then height, and write the resulting status.
pub fn run(mut read: impl FnMut(&str) -> f64, write: impl FnOnce(HealthStatus)) {
  try_run(|what| Exceptional::success(read(what)), write);
}

/// [`run`] with a fallible `read`; nothing is written if either read fails
/// or the readings give no finite BMI.
pub fn try_run(mut read: impl FnMut(&str) -> Exceptional<f64>,
               write: impl FnOnce(HealthStatus))
               -> Exceptional<HealthStatus> {
  read("weight").select_many(|_| read("height"), calculate_bmi)
                .bind(finite)
                .tap(|bmi| log::debug!("bmi = {}", bmi))
                .map(health_status)
                .tap(|status| write(*status))
}
