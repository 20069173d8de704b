//! Record types deserialized from the extracted data set.
//!
//! Keys are camelCase on the wire. Every text field defaults to empty, so a
//! record with missing fields still renders (with the page's fallbacks).

use serde::Deserialize;
use std::{borrow::Cow, collections::BTreeMap, fmt};

// ============================================================================
// Site Data
// ============================================================================

/// The whole input record set, loaded once per build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteData {
    pub categories: Vec<Category>,
    /// Problems grouped by category id.
    pub problems: BTreeMap<String, Vec<Problem>>,
    pub comparisons: Vec<Comparison>,
    /// Trigger words per category id. Aggregated from problems when absent.
    pub trigger_words: BTreeMap<String, Vec<String>>,
    /// Difficulty counts per category id. Computed from problems when absent.
    pub difficulty_stats: BTreeMap<String, DifficultyStats>,
    /// Long-form prose for pattern hub pages.
    pub pattern_content: BTreeMap<String, PatternContent>,
    /// Side-by-side details keyed by comparison slug.
    pub comparison_details: BTreeMap<String, ComparisonDetails>,
}

// ============================================================================
// Category
// ============================================================================

/// An algorithm pattern (e.g. "two-pointers").
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    pub color_hex: String,
    pub order: u32,
    /// Ids of categories this one builds on.
    pub prerequisites: Vec<String>,
    pub description: String,
}

impl Category {
    /// `true` when either category lists the other as a prerequisite.
    pub fn is_related_to(&self, other: &Category) -> bool {
        self.id != other.id
            && (self.prerequisites.contains(&other.id) || other.prerequisites.contains(&self.id))
    }
}

// ============================================================================
// Problem
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase form used in paths and CSS classes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized form used in headings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Problem {
    pub id: String,
    /// File stem of the problem page.
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    /// Minutes.
    pub estimated_time: u32,
    pub problem_statement: String,
    pub examples: Vec<Example>,
    pub steps: Vec<Step>,
    pub one_liner: String,
    pub pattern: String,
    pub key_insight: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub trigger_words: Vec<String>,
    pub python_solution: String,
}

impl Default for Problem {
    fn default() -> Self {
        Self {
            id: String::new(),
            slug: String::new(),
            title: String::new(),
            difficulty: Difficulty::default(),
            tags: Vec::new(),
            estimated_time: 5,
            problem_statement: String::new(),
            examples: Vec::new(),
            steps: Vec::new(),
            one_liner: String::new(),
            pattern: String::new(),
            key_insight: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            trigger_words: Vec::new(),
            python_solution: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: Option<String>,
}

/// One multiple-choice reasoning step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Step {
    pub question: String,
    pub options: Vec<StepOption>,
    /// Id of the correct option.
    pub correct: String,
    pub explanation: String,
}

impl Step {
    pub fn correct_option(&self) -> Option<&StepOption> {
        self.options.iter().find(|o| o.id == self.correct)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StepOption {
    pub id: String,
    pub text: String,
}

// ============================================================================
// Comparison
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Comparison {
    pub pattern1: String,
    pub pattern2: String,
    pub title: String,
}

impl Comparison {
    /// `"{pattern1}-vs-{pattern2}"`, the page's file stem.
    pub fn slug(&self) -> String {
        format!("{}-vs-{}", self.pattern1, self.pattern2)
    }

    /// `true` when a category id (dashes stripped) occurs in either side.
    pub fn involves(&self, category_id: &str) -> bool {
        let needle = category_id.replace('-', "");
        self.pattern1.contains(&needle) || self.pattern2.contains(&needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComparisonDetails {
    pub pattern1_when: String,
    pub pattern2_when: String,
    pub pattern1_best_for: String,
    pub pattern2_best_for: String,
    pub pattern1_time: String,
    pub pattern2_time: String,
    pub pattern1_space: String,
    pub pattern2_space: String,
    /// Ordered "if this, then that" hints.
    pub decision: Vec<String>,
}

impl ComparisonDetails {
    /// Generic details for comparisons the data set says nothing about.
    pub fn fallback(comparison: &Comparison) -> Self {
        let varies = || "Varies".to_owned();
        let generic = || "Various algorithmic problems".to_owned();
        Self {
            pattern1_when: format!("the problem fits {} pattern", comparison.pattern1),
            pattern2_when: format!("the problem fits {} pattern", comparison.pattern2),
            pattern1_best_for: generic(),
            pattern2_best_for: generic(),
            pattern1_time: varies(),
            pattern2_time: varies(),
            pattern1_space: varies(),
            pattern2_space: varies(),
            decision: vec![
                "Analyze the problem constraints".to_owned(),
                "Consider time/space trade-offs".to_owned(),
                "Look for pattern triggers".to_owned(),
            ],
        }
    }

    pub fn or_fallback<'a>(found: Option<&'a Self>, comparison: &Comparison) -> Cow<'a, Self> {
        match found {
            Some(details) => Cow::Borrowed(details),
            None => Cow::Owned(Self::fallback(comparison)),
        }
    }
}

// ============================================================================
// Aggregates
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DifficultyStats {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyStats {
    pub fn count(problems: &[Problem]) -> Self {
        problems.iter().fold(Self::default(), |mut stats, p| {
            match p.difficulty {
                Difficulty::Easy => stats.easy += 1,
                Difficulty::Medium => stats.medium += 1,
                Difficulty::Hard => stats.hard += 1,
            }
            stats
        })
    }

    pub const fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternContent {
    pub how_it_works: String,
    pub common_mistakes: Vec<String>,
    pub when_not_to_use: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================
