// ABOUTME: Heuristic somatotype classifier based on point accumulation
// ABOUTME: Ecto/meso/endomorph tallies from BMI, waist ratios, and torso proportions with static recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodymetrics Contributors

//! # Somatotype Classifier
//!
//! Three tallies accumulate fixed points per indicator:
//!
//! | Indicator | Band | Points |
//! |---|---|---|
//! | BMI | < 18.5 | ecto +3 |
//! | | < 25 | meso +2, ecto +1 |
//! | | < 30 | meso +1, endo +2 |
//! | | else | endo +3 |
//! | WHtR | < 0.45 | ecto +2 |
//! | | < 0.50 | meso +2 |
//! | | < 0.60 | endo +2 |
//! | | else | endo +3 |
//! | WHR | < 0.80 | ecto +2, meso +1 |
//! | | < 0.90 | meso +2 |
//! | | else | endo +3 |
//! | Shoulder/waist | >= 1.6 | meso +3 |
//! | | >= 1.4 | meso +2 |
//! | | > 0 | ecto +1 |
//! | Chest/waist | >= 1.4 | meso +2 |
//! | | >= 1.2 | meso +1 |
//!
//! When the top two tallies are within one point the result is a blend.

use crate::numeric::round_to;
use bodymetrics_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Body type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Somatotype {
    /// Slender frame
    Ectomorph,
    /// Athletic frame
    Mesomorph,
    /// Rounded frame
    Endomorph,
    /// Slender with athletic potential
    EctoMesomorph,
    /// Strong frame prone to fat gain
    MesoEndomorph,
    /// No dominant tendency
    Balanced,
}

impl Somatotype {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ectomorph => "Ectomorph",
            Self::Mesomorph => "Mesomorph",
            Self::Endomorph => "Endomorph",
            Self::EctoMesomorph => "Ecto-mesomorph",
            Self::MesoEndomorph => "Meso-endomorph",
            Self::Balanced => "Balanced",
        }
    }

    /// Short description of the type
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ectomorph => {
                "Ectomorph: slender frame, fast metabolism, difficulty gaining weight"
            }
            Self::Mesomorph => {
                "Mesomorph: naturally athletic frame, good response to training, gains muscle easily"
            }
            Self::Endomorph => {
                "Endomorph: rounder frame, tends to store fat, requires attention to diet"
            }
            Self::EctoMesomorph => "Ecto-mesomorph: lean with athletic potential",
            Self::MesoEndomorph => "Meso-endomorph: strong frame with a tendency to gain fat",
            Self::Balanced => "Balanced: no dominant tendency",
        }
    }

    /// Static training, diet and lifestyle guidance for the type
    #[must_use]
    pub fn recommendations(self) -> SomatotypeRecommendations {
        match self {
            Self::Ectomorph => SomatotypeRecommendations {
                training: Cow::Borrowed("Focus on compound lifts (squat, bench press, deadlift). \
                    Shorter, intense sessions (45-60 min). Moderate cardio. \
                    Prioritize hypertrophy with 8-12 repetitions."),
                diet: Cow::Borrowed("Caloric surplus. Abundant carbohydrates (50-60% of calories). \
                    Moderate to high protein (1.8-2.2 g/kg). Include healthy fats. \
                    Frequent meals (5-6 per day)."),
                tips: Cow::Borrowed("Sleep well (8+ hours). Avoid excessive cardio. \
                    Be patient: gains are slower but lasting. \
                    Useful supplements: whey protein, creatine, mass gainers."),
            },
            Self::Mesomorph => SomatotypeRecommendations {
                training: Cow::Borrowed("Vary the stimulus. Combine strength (5-8 reps) and hypertrophy \
                    (8-12 reps). Moderate cardio for definition. Responds well to \
                    periodization and higher volume."),
                diet: Cow::Borrowed("Balanced, flexible diet. Moderate carbohydrates (40-50% of calories). \
                    Moderate protein (1.6-2.0 g/kg). Adjust calories to the current \
                    goal (bulking or cutting)."),
                tips: Cow::Borrowed("Favourable genetics still need a consistent diet. \
                    Vary training to avoid plateaus. \
                    Shape is gained and lost easily, so stay consistent."),
            },
            Self::Endomorph => SomatotypeRecommendations {
                training: Cow::Borrowed("Combine resistance training with regular cardio. \
                    HIIT is efficient for fat loss. Higher volume and frequency. \
                    Compound lifts plus metabolic work."),
                diet: Cow::Borrowed("Strict caloric control with a deficit for fat loss. \
                    Controlled carbohydrates (30-40% of calories), low glycemic index. \
                    High protein (2.0-2.5 g/kg) to preserve lean mass. \
                    Time carbohydrates around training."),
                tips: Cow::Borrowed("Genetics can be challenging but not limiting. \
                    Track calories and macros closely. \
                    Sleep and stress management matter (hormonal impact). \
                    Avoid long inactive periods."),
            },
            Self::EctoMesomorph => SomatotypeRecommendations {
                training: Cow::Borrowed("Strength and hypertrophy work with moderate volume. \
                    Light to moderate cardio. Build muscle without cardio that \
                    compromises gains."),
                diet: Cow::Borrowed("Slight caloric surplus for muscle gain. Moderate to high \
                    carbohydrates. High protein (1.8-2.2 g/kg). More flexibility \
                    than a pure ectomorph."),
                tips: Cow::Borrowed("Good definition potential with an adequate diet. \
                    Builds an athletic, defined physique with relative ease."),
            },
            Self::MesoEndomorph => SomatotypeRecommendations {
                training: Cow::Borrowed("Heavy resistance training plus regular cardio for fat control. \
                    HIIT 2-3 times per week. High training volume. \
                    Good potential for strength and mass."),
                diet: Cow::Borrowed("Watch caloric excess. Moderate carbohydrates. High protein. \
                    Monitor body fat regularly. Well-structured bulking and \
                    cutting cycles."),
                tips: Cow::Borrowed("Gains muscle easily but fat too. Dietary discipline is key. \
                    Potential for an imposing physique when well trained."),
            },
            Self::Balanced => SomatotypeRecommendations {
                training: Cow::Borrowed("Balanced approach. Alternate strength, hypertrophy and \
                    endurance phases. Moderate cardio."),
                diet: Cow::Borrowed("Balanced, flexible diet adjusted to goals. \
                    Moderate protein (1.6-2.0 g/kg)."),
                tips: Cow::Borrowed("Versatility is the strong point. Adapts to different goals \
                    with relative ease."),
            },
        }
    }
}

impl fmt::Display for Somatotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Somatotype {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "ectomorph" => Ok(Self::Ectomorph),
            "mesomorph" => Ok(Self::Mesomorph),
            "endomorph" => Ok(Self::Endomorph),
            "ecto_mesomorph" | "ectomesomorph" => Ok(Self::EctoMesomorph),
            "meso_endomorph" | "mesoendomorph" => Ok(Self::MesoEndomorph),
            "balanced" => Ok(Self::Balanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown somatotype: {other}"
            ))),
        }
    }
}

/// Static guidance bundle for a somatotype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SomatotypeRecommendations {
    /// Training guidance
    pub training: Cow<'static, str>,
    /// Nutrition guidance
    pub diet: Cow<'static, str>,
    /// Lifestyle tips
    pub tips: Cow<'static, str>,
}

/// Raw point tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SomatotypeTally {
    /// Ectomorph points
    pub ectomorph: f64,
    /// Mesomorph points
    pub mesomorph: f64,
    /// Endomorph points
    pub endomorph: f64,
}

impl SomatotypeTally {
    /// Accumulate points for the given indicators
    #[must_use]
    pub fn accumulate(inputs: &SomatotypeInputs) -> Self {
        let mut t = Self::default();

        if inputs.bmi < 18.5 {
            t.ectomorph += 3.0;
        } else if inputs.bmi < 25.0 {
            t.mesomorph += 2.0;
            t.ectomorph += 1.0;
        } else if inputs.bmi < 30.0 {
            t.mesomorph += 1.0;
            t.endomorph += 2.0;
        } else {
            t.endomorph += 3.0;
        }

        if inputs.waist_height_ratio < 0.45 {
            t.ectomorph += 2.0;
        } else if inputs.waist_height_ratio < 0.50 {
            t.mesomorph += 2.0;
        } else if inputs.waist_height_ratio < 0.60 {
            t.endomorph += 2.0;
        } else {
            t.endomorph += 3.0;
        }

        if inputs.waist_hip_ratio < 0.80 {
            t.ectomorph += 2.0;
            t.mesomorph += 1.0;
        } else if inputs.waist_hip_ratio < 0.90 {
            t.mesomorph += 2.0;
        } else {
            t.endomorph += 3.0;
        }

        let shoulder_waist = inputs.shoulder_waist.unwrap_or(0.0);
        if shoulder_waist >= 1.6 {
            t.mesomorph += 3.0;
        } else if shoulder_waist >= 1.4 {
            t.mesomorph += 2.0;
        } else if shoulder_waist > 0.0 {
            t.ectomorph += 1.0;
        }

        let chest_waist = inputs.chest_waist.unwrap_or(0.0);
        if chest_waist >= 1.4 {
            t.mesomorph += 2.0;
        } else if chest_waist >= 1.2 {
            t.mesomorph += 1.0;
        }

        t
    }

    fn total(&self) -> f64 {
        self.ectomorph + self.mesomorph + self.endomorph
    }

    /// Share of each tally in the total, 1 decimal
    #[must_use]
    pub fn percentages(&self) -> Self {
        let total = self.total();
        if total <= 0.0 {
            return *self;
        }
        Self {
            ectomorph: round_to(self.ectomorph / total * 100.0, 1),
            mesomorph: round_to(self.mesomorph / total * 100.0, 1),
            endomorph: round_to(self.endomorph / total * 100.0, 1),
        }
    }

    /// Resolve the tallies into a type
    #[must_use]
    pub fn classify(&self) -> Somatotype {
        let mut sorted = [self.ectomorph, self.mesomorph, self.endomorph];
        sorted.sort_by(|a, b| b.total_cmp(a));

        if sorted[0] - sorted[1] <= 1.0 {
            if self.ectomorph >= self.endomorph {
                Somatotype::EctoMesomorph
            } else {
                Somatotype::MesoEndomorph
            }
        } else if self.ectomorph >= self.mesomorph && self.ectomorph >= self.endomorph {
            Somatotype::Ectomorph
        } else if self.mesomorph >= self.endomorph {
            Somatotype::Mesomorph
        } else {
            Somatotype::Endomorph
        }
    }
}

/// Indicators read by the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SomatotypeInputs {
    /// Body mass index
    pub bmi: f64,
    /// Waist / height
    pub waist_height_ratio: f64,
    /// Waist / hip
    pub waist_hip_ratio: f64,
    /// Shoulders / waist, if measured
    pub shoulder_waist: Option<f64>,
    /// Chest / waist, if measured
    pub chest_waist: Option<f64>,
}

/// Classified somatotype with its supporting data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SomatotypeProfile {
    /// Resolved type
    pub somatotype: Somatotype,
    /// Type description
    pub description: Cow<'static, str>,
    /// Tallies as percentages of the total
    pub distribution: SomatotypeTally,
    /// Guidance bundle
    pub recommendations: SomatotypeRecommendations,
}

/// Classify a somatotype from the indicators
#[must_use]
pub fn classify_somatotype(inputs: &SomatotypeInputs) -> SomatotypeProfile {
    let tally = SomatotypeTally::accumulate(inputs);
    let somatotype = tally.classify();
    SomatotypeProfile {
        somatotype,
        description: Cow::Borrowed(somatotype.description()),
        distribution: tally.percentages(),
        recommendations: somatotype.recommendations(),
    }
}
