//! Plan and feature recommendations computed from a customer's own bookings.

use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;
use crate::pricing::{ExtraFeature, WashPlan};

const STARTER_FEATURES: [ExtraFeature; 2] = [ExtraFeature::TireShine, ExtraFeature::InteriorVacuum];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_plan: WashPlan,
    pub recommended_features: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDistribution {
    pub basic: usize,
    pub full: usize,
    pub general: usize,
}

impl PlanDistribution {
    pub fn record(&mut self, price: u32) {
        match WashPlan::for_price_band(price) {
            WashPlan::Basic => self.basic += 1,
            WashPlan::Full => self.full += 1,
            WashPlan::General => self.general += 1,
        }
    }

    /// The most booked band; ties go to the pricier plan.
    pub fn most_used(&self) -> WashPlan {
        if self.general >= self.full && self.general >= self.basic {
            WashPlan::General
        } else if self.full >= self.basic {
            WashPlan::Full
        } else {
            WashPlan::Basic
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatterns {
    pub total_bookings: usize,
    pub plans: PlanDistribution,
    /// Feature usage counts in order of first appearance.
    pub feature_frequency: Vec<(String, usize)>,
}

impl BookingPatterns {
    pub fn analyze(history: &[Appointment]) -> Self {
        let mut patterns = Self {
            total_bookings: history.len(),
            ..Self::default()
        };

        for appointment in history {
            patterns.plans.record(appointment.selected_plan);
            for feature in &appointment.extra_features {
                match patterns
                    .feature_frequency
                    .iter_mut()
                    .find(|(name, _)| name == feature)
                {
                    Some((_, count)) => *count += 1,
                    None => patterns.feature_frequency.push((feature.clone(), 1)),
                }
            }
        }

        patterns
    }

    /// The `count` most used features; equal counts keep first-appearance order.
    pub fn top_features(&self, count: usize) -> Vec<String> {
        let mut ranked = self.feature_frequency.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(count).map(|(name, _)| name).collect()
    }
}

fn starter_features() -> Vec<String> {
    STARTER_FEATURES
        .iter()
        .map(|feature| feature.as_str().to_string())
        .collect()
}

/// Recommends the customer's most used plan band and their two favourite extras.
pub fn recommend(history: &[Appointment]) -> Recommendation {
    if history.is_empty() {
        return Recommendation {
            recommended_plan: WashPlan::Full,
            recommended_features: starter_features(),
            explanation: "Recommended starter package for new customers".into(),
        };
    }

    let patterns = BookingPatterns::analyze(history);
    Recommendation {
        recommended_plan: patterns.plans.most_used(),
        recommended_features: patterns.top_features(2),
        explanation: format!(
            "System recommendation based on {} bookings",
            patterns.total_bookings
        ),
    }
}

/// Used when the customer's history cannot be read.
pub fn default_recommendation() -> Recommendation {
    Recommendation {
        recommended_plan: WashPlan::Full,
        recommended_features: starter_features(),
        explanation: "Default recommendation".into(),
    }
}
