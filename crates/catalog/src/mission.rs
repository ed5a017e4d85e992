//! Heuristic mission-planning assessment
//!
//! A pure decision tree over (habitability score, temperature, atmosphere
//! presence, distance). No learned parameters; every threshold is in the
//! table below, first match wins:
//!
//! | Tier     | Condition                                                    |
//! |----------|--------------------------------------------------------------|
//! | Critical | habitability > 0.7, T ∈ (273, 373) K, atmosphere, d < 100 ly |
//! | High     | habitability > 0.6, atmosphere, d < 200 ly                   |
//! | Medium   | habitability > 0.4 or atmosphere                             |
//! | Low      | everything else                                              |
//!
//! Risk factors key on distance alone: > 1000 ly "Extremely distant",
//! > 500 ly "Very distant".

use std::fmt;

use serde::Serialize;

use crate::record::PlanetRecord;

/// Mission urgency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        write!(f, "{}", name)
    }
}

/// Assessment produced for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionAssessment {
    pub urgency: Urgency,
    pub recommendation: &'static str,
    pub reasoning: &'static str,
    /// Ordered follow-up actions for the tier
    pub next_steps: &'static [&'static str],
    /// Echo of the record's classifier confidence
    pub confidence: f64,
    pub risk_factors: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
}

/// Score a record against the tier table.
pub fn assess(record: &PlanetRecord) -> MissionAssessment {
    let habitability = record.habitability_score;
    let temperature = record.temperature;
    let has_atmosphere = record.has_atmosphere();
    let distance_ly = record.distance_ly();

    let (urgency, recommendation, reasoning, next_steps): (_, _, _, &'static [&'static str]) =
        if habitability > 0.7
            && temperature > 273
            && temperature < 373
            && has_atmosphere
            && distance_ly < 100.0
        {
            (
                Urgency::Critical,
                "Immediate Priority Target",
                "Exceptional habitability metrics with confirmed atmosphere, liquid water \
                 potential, and proximity make this a prime candidate for intensive study.",
                &[
                    "Emergency JWST time allocation",
                    "Multi-telescope coordinated campaign",
                    "Atmospheric biosignature search",
                    "Direct imaging feasibility study",
                ],
            )
        } else if habitability > 0.6 && has_atmosphere && distance_ly < 200.0 {
            (
                Urgency::High,
                "High Priority Target",
                "Strong habitability potential with detectable atmosphere suitable for \
                 detailed characterization studies.",
                &[
                    "Schedule JWST atmospheric spectroscopy",
                    "Coordinate ground-based radial velocity follow-up",
                    "Plan direct imaging attempts",
                ],
            )
        } else if habitability > 0.4 || has_atmosphere {
            (
                Urgency::Medium,
                "Medium Priority",
                "Moderate interest for comparative planetology and atmospheric studies.",
                &[
                    "Request Hubble transit observations",
                    "Schedule ground-based photometry",
                    "Atmospheric modeling",
                ],
            )
        } else {
            (
                Urgency::Low,
                "Research Target",
                "Valuable for population statistics and comparative planetology studies.",
                &[
                    "Include in survey programs",
                    "Long-term monitoring",
                    "Statistical analysis",
                ],
            )
        };

    let risk_factors = if distance_ly > 1000.0 {
        vec!["Extremely distant"]
    } else if distance_ly > 500.0 {
        vec!["Very distant"]
    } else {
        vec![]
    };

    let opportunities = if has_atmosphere {
        vec!["Atmospheric characterization possible"]
    } else {
        vec![]
    };

    MissionAssessment {
        urgency,
        recommendation,
        reasoning,
        next_steps,
        confidence: record.ai_confidence,
        risk_factors,
        opportunities,
    }
}
