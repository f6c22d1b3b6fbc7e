use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Breakdown, Dimension};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "Highly Citable",
            Grade::B => "Good Citability",
            Grade::C => "Moderate Citability",
            Grade::D => "Low Citability",
            Grade::F => "Poor Citability",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Maximum points per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Caps {
    pub answer_block_quality: u32,
    pub self_containment: u32,
    pub structural_readability: u32,
    pub statistical_density: u32,
    pub uniqueness_signals: u32,
}

impl Caps {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::AnswerBlockQuality => self.answer_block_quality,
            Dimension::SelfContainment => self.self_containment,
            Dimension::StructuralReadability => self.structural_readability,
            Dimension::StatisticalDensity => self.statistical_density,
            Dimension::UniquenessSignals => self.uniqueness_signals,
        }
    }

    pub fn total(&self) -> u32 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

impl Default for Caps {
    fn default() -> Self {
        Caps {
            answer_block_quality: 30,
            self_containment: 25,
            structural_readability: 20,
            statistical_density: 15,
            uniqueness_signals: 10,
        }
    }
}

/// Lowest total that earns each grade; anything under `d` is an F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            a: 80,
            b: 65,
            c: 50,
            d: 35,
        }
    }
}

/// The immutable scoring table: dimension caps plus grade thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rubric {
    pub caps: Caps,
    pub thresholds: Thresholds,
}

/// Largest possible total; the caps must add up to it.
pub const MAX_TOTAL: u32 = 100;

impl Rubric {
    pub fn cap(&self, dimension: Dimension) -> u32 {
        self.caps.get(dimension)
    }

    /// Bands are checked top-down, first match wins.
    pub fn grade(&self, total: u32) -> Grade {
        let t = &self.thresholds;
        if total >= t.a {
            Grade::A
        } else if total >= t.b {
            Grade::B
        } else if total >= t.c {
            Grade::C
        } else if total >= t.d {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Sum of the (already capped) sub-scores.
    pub fn total(&self, breakdown: &Breakdown) -> u32 {
        Dimension::ALL.iter().map(|d| breakdown.get(*d)).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        let total = self.caps.total();
        if total != MAX_TOTAL {
            return Err(format!(
                "rubric caps must sum to {}, got {}",
                MAX_TOTAL, total
            ));
        }
        let t = &self.thresholds;
        if !(t.a > t.b && t.b > t.c && t.c > t.d) {
            return Err(format!(
                "grade thresholds must be strictly descending, got a={} b={} c={} d={}",
                t.a, t.b, t.c, t.d
            ));
        }
        if t.a > MAX_TOTAL {
            return Err(format!("grade threshold a={} exceeds {}", t.a, MAX_TOTAL));
        }
        if t.d == 0 {
            return Err("grade threshold d must be greater than 0".to_string());
        }
        Ok(())
    }
}
