use std::fmt;

use serde::{Serialize, Deserialize};

/// The two classes the classifier demos distinguish.
///
/// `Red` is class 0 and wins exact score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLabel {
    #[default]
    Red,
    Green,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Red, ClassLabel::Green];

    pub fn index(self) -> usize {
        match self {
            ClassLabel::Red   => 0,
            ClassLabel::Green => 1,
        }
    }

    /// Picks the label for a pair of class scores; ties go to `Red`.
    /// A NaN on either side fails the comparison and yields `Green`.
    pub fn from_scores(red: f64, green: f64) -> Self {
        if red >= green { ClassLabel::Red } else { ClassLabel::Green }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "0"   => Some(ClassLabel::Red),
            "green" | "1" => Some(ClassLabel::Green),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassLabel::Red   => "red",
            ClassLabel::Green => "green",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A datapoint in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// `None` for regression points.
    pub label: Option<ClassLabel>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: ClassLabel) -> Self {
        Point { x, y, label: Some(label) }
    }
}
