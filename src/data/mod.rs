//! The input record set and the lookups page builders run against it.
//!
//! The data file is the JSON written by the extraction step. It is read once,
//! completed (missing aggregates are derived from the problems) and then only
//! ever borrowed.

mod types;

pub use types::{
    Category, Comparison, ComparisonDetails, Difficulty, DifficultyStats, Example, PatternContent,
    Problem, SiteData, Step,
};

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Maximum related patterns shown on a hub page.
pub const RELATED_PATTERN_LIMIT: usize = 4;
/// Maximum comparisons linked from a hub page.
pub const HUB_COMPARISON_LIMIT: usize = 3;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Data file parsing error in `{}`", .0.display())]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("{field} `{value}` in `{}` is not usable as a file name", .path.display())]
    UnsafeName {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

// ============================================================================
// Loading
// ============================================================================

impl SiteData {
    /// Read and complete the data file at `path`.
    ///
    /// Ids and slugs become output file names, so one that could escape its
    /// directory rejects the whole file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content =
            fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        let data =
            Self::from_json(&content).map_err(|err| DataError::Json(path.to_path_buf(), err))?;

        if let Some((field, value)) = data.unsafe_name() {
            return Err(DataError::UnsafeName {
                path: path.to_path_buf(),
                field,
                value: value.to_owned(),
            });
        }
        Ok(data)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut data: Self = serde_json::from_str(content)?;
        data.complete();
        Ok(data)
    }

    /// First id or slug that is not a plain file name.
    fn unsafe_name(&self) -> Option<(&'static str, &str)> {
        let categories = self.categories.iter().map(|c| ("category id", c.id.as_str()));
        let problem_keys = self.problems.keys().map(|id| ("problems key", id.as_str()));
        let slugs = self
            .problems
            .values()
            .flatten()
            .map(|p| ("problem slug", p.slug.as_str()));
        let mut sides = self.comparisons.iter().flat_map(|c| {
            [
                ("comparison pattern1", c.pattern1.as_str()),
                ("comparison pattern2", c.pattern2.as_str()),
            ]
        });

        categories
            .chain(problem_keys)
            .chain(slugs)
            .find(|(_, name)| !is_file_name(name))
            .or_else(|| sides.find(|(_, name)| has_separator(name)))
    }

    /// Derive per-category aggregates the data file left out.
    fn complete(&mut self) {
        for (id, problems) in &self.problems {
            self.difficulty_stats
                .entry(id.clone())
                .or_insert_with(|| DifficultyStats::count(problems));

            self.trigger_words.entry(id.clone()).or_insert_with(|| {
                let mut words: Vec<String> = Vec::new();
                for word in problems.iter().flat_map(|p| &p.trigger_words) {
                    if !words.contains(word) {
                        words.push(word.clone());
                    }
                }
                words
            });
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

impl SiteData {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn require_category(&self, id: &str) -> Result<&Category, DataError> {
        self.category(id)
            .ok_or_else(|| DataError::UnknownCategory(id.to_owned()))
    }

    /// Problems of a category, in data-file order.
    pub fn problems_in(&self, id: &str) -> &[Problem] {
        self.problems.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Other problems of the same category, at most `limit`.
    pub fn related_problems<'a>(
        &'a self,
        category_id: &str,
        problem: &Problem,
        limit: usize,
    ) -> Vec<&'a Problem> {
        self.problems_in(category_id)
            .iter()
            .filter(|p| p.id != problem.id)
            .take(limit)
            .collect()
    }

    /// Categories linked to `category` by a prerequisite in either direction.
    pub fn related_patterns(&self, category: &Category) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.is_related_to(category))
            .take(RELATED_PATTERN_LIMIT)
            .collect()
    }

    /// Comparisons that mention the category.
    pub fn comparisons_for(&self, category: &Category) -> Vec<&Comparison> {
        self.comparisons
            .iter()
            .filter(|c| c.involves(&category.id))
            .take(HUB_COMPARISON_LIMIT)
            .collect()
    }

    pub fn comparison_details(&self, comparison: &Comparison) -> Cow<'_, ComparisonDetails> {
        ComparisonDetails::or_fallback(self.comparison_details.get(&comparison.slug()), comparison)
    }

    pub fn stats(&self, id: &str) -> DifficultyStats {
        self.difficulty_stats.get(id).copied().unwrap_or_default()
    }

    pub fn trigger_words_for(&self, id: &str) -> &[String] {
        self.trigger_words.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pattern_content(&self, id: &str) -> Option<&PatternContent> {
        self.pattern_content.get(id)
    }

    /// Total number of problems across all categories.
    pub fn problem_count(&self) -> usize {
        self.problems.values().map(Vec::len).sum()
    }
}

/// A single, non-empty path component that stays in its directory.
fn is_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !has_separator(name)
}

fn has_separator(name: &str) -> bool {
    name.contains(['/', '\\', '\0'])
}

/// `"two-pointers"` -> `"Two Pointers"`.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Small but complete record set shared by page tests.
    pub(crate) const FIXTURE: &str = r##"{
        "categories": [
            {"id": "arrays-and-hashing", "displayName": "Arrays & Hashing", "colorHex": "#FF6B35",
             "order": 1, "prerequisites": [], "description": "Hash maps for O(1) lookups."},
            {"id": "two-pointers", "displayName": "Two Pointers", "colorHex": "#4ECDC4",
             "order": 2, "prerequisites": ["arrays-and-hashing"], "description": "Converge from both ends."},
            {"id": "stack", "displayName": "Stack", "colorHex": "#9B59B6",
             "order": 3, "prerequisites": ["arrays-and-hashing"], "description": "LIFO <magic>."}
        ],
        "problems": {
            "arrays-and-hashing": [
                {"id": "1-two-sum", "slug": "two-sum", "title": "Two Sum", "difficulty": "easy",
                 "tags": ["array", "hash-map"], "estimatedTime": 6,
                 "problemStatement": "Return **indices** of two numbers adding to `target`.\nExactly one answer.",
                 "examples": [{"input": "nums = [2,7], target = 9", "output": "[0,1]", "explanation": "2 + 7 == 9"}],
                 "steps": [
                    {"question": "What do we **remember**?", "options": [{"id": "a", "text": "Nothing"}, {"id": "b", "text": "Seen values & indices"}],
                     "correct": "b", "explanation": "A map gives `O(1)` lookups."}
                 ],
                 "oneLiner": "Store complements as you go.", "pattern": "Hash Map",
                 "keyInsight": "Look up target - x.", "timeComplexity": "O(n)", "spaceComplexity": "O(n)",
                 "triggerWords": ["pair", "sum to target"],
                 "pythonSolution": "def two_sum(nums, target):\n    seen = {}  # value -> index\n    for i, n in enumerate(nums):\n        if target - n in seen:\n            return [seen[target - n], i]\n        seen[n] = i\n    return []"},
                {"id": "2-contains-duplicate", "slug": "contains-duplicate", "title": "Contains \"Duplicate\"",
                 "difficulty": "easy", "triggerWords": ["pair", "duplicate"]},
                {"id": "3-group-anagrams", "slug": "group-anagrams", "title": "Group Anagrams", "difficulty": "medium"}
            ],
            "two-pointers": [
                {"id": "10-valid-palindrome", "slug": "valid-palindrome", "title": "Valid Palindrome", "difficulty": "hard"}
            ],
            "ghost-category": [
                {"id": "99-lost", "slug": "lost", "title": "Lost"}
            ]
        },
        "comparisons": [
            {"pattern1": "hash-map", "pattern2": "hash-set", "title": "Hash Map vs Hash Set"},
            {"pattern1": "stack", "pattern2": "queue", "title": "Stack vs Queue"},
            {"pattern1": "twopointers-classic", "pattern2": "sliding-window", "title": "Two <Pointers> vs Sliding Window"}
        ],
        "patternContent": {
            "arrays-and-hashing": {
                "howItWorks": "Trade space for time with a map.",
                "commonMistakes": ["Forgetting duplicates"],
                "whenNotToUse": []
            }
        },
        "comparisonDetails": {
            "hash-map-vs-hash-set": {
                "pattern1_when": "you need values", "pattern2_when": "you need presence",
                "pattern1_best_for": "Counting", "pattern2_best_for": "Dedup",
                "pattern1_time": "O(1)", "pattern2_time": "O(1)",
                "pattern1_space": "O(n)", "pattern2_space": "O(n)",
                "decision": ["Need counts? -> Hash Map"]
            }
        },
        "meta": {"generatedAt": "2025-01-01T00:00:00Z"}
    }"##;

    pub(crate) fn fixture() -> SiteData {
        SiteData::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pseo-data.json");
        fs::write(&path, FIXTURE).unwrap();

        let data = SiteData::load(&path).unwrap();
        assert_eq!(data.categories.len(), 3);
        assert_eq!(data.problem_count(), 5);
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = SiteData::load(&missing).unwrap_err();
        assert!(matches!(err, DataError::Io(..)));
        assert!(err.to_string().contains("missing.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = SiteData::load(&broken).unwrap_err();
        assert!(matches!(err, DataError::Json(..)));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_rejects_names_outside_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pseo-data.json");
        let cases = [
            (r#"{"categories": [{"id": ".."}]}"#, "category id", ".."),
            (r#"{"problems": {"a/b": []}}"#, "problems key", "a/b"),
            (
                r#"{"problems": {"stack": [{"slug": "../../etc/evil"}]}}"#,
                "problem slug",
                "../../etc/evil",
            ),
            (r#"{"problems": {"stack": [{"title": "No slug"}]}}"#, "problem slug", ""),
            (
                r#"{"comparisons": [{"pattern1": "stack", "pattern2": "x\\..\\y"}]}"#,
                "comparison pattern2",
                "x\\..\\y",
            ),
        ];

        for (json, expected_field, expected_value) in cases {
            fs::write(&path, json).unwrap();
            match SiteData::load(&path).unwrap_err() {
                DataError::UnsafeName { field, value, .. } => {
                    assert_eq!(field, expected_field);
                    assert_eq!(value, expected_value);
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        // dots inside a name are fine
        fs::write(&path, r#"{"problems": {"stack": [{"slug": "a..b"}]}}"#).unwrap();
        assert!(SiteData::load(&path).is_ok());
    }

    #[test]
    fn test_aggregates_derived_when_absent() {
        let data = fixture();
        assert_eq!(
            data.stats("arrays-and-hashing"),
            DifficultyStats {
                easy: 2,
                medium: 1,
                hard: 0
            }
        );
        assert_eq!(
            data.trigger_words_for("arrays-and-hashing"),
            ["pair", "sum to target", "duplicate"]
        );
        assert_eq!(data.stats("stack"), DifficultyStats::default());
        assert!(data.trigger_words_for("stack").is_empty());
    }

    #[test]
    fn test_aggregates_from_file_are_kept() {
        let data = SiteData::from_json(
            r#"{"problems": {"x": [{"difficulty": "hard"}]},
                "difficultyStats": {"x": {"easy": 7, "medium": 0, "hard": 0}},
                "triggerWords": {"x": ["given"]}}"#,
        )
        .unwrap();
        assert_eq!(data.stats("x").easy, 7);
        assert_eq!(data.trigger_words_for("x"), ["given"]);
    }

    #[test]
    fn test_category_lookup() {
        let data = fixture();
        assert_eq!(data.category("stack").unwrap().display_name, "Stack");
        assert!(data.category("ghost-category").is_none());
        assert!(matches!(
            data.require_category("ghost-category"),
            Err(DataError::UnknownCategory(id)) if id == "ghost-category"
        ));
    }

    #[test]
    fn test_related_problems_excludes_self_and_limits() {
        let data = fixture();
        let two_sum = &data.problems_in("arrays-and-hashing")[0];
        let related = data.related_problems("arrays-and-hashing", two_sum, 5);
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["contains-duplicate", "group-anagrams"]);

        assert_eq!(data.related_problems("arrays-and-hashing", two_sum, 1).len(), 1);
        assert!(data.related_problems("nope", two_sum, 5).is_empty());
    }

    #[test]
    fn test_related_patterns_either_direction() {
        let data = fixture();
        let base = data.category("arrays-and-hashing").unwrap();
        let ids: Vec<_> = data.related_patterns(base).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["two-pointers", "stack"]);

        let stack = data.category("stack").unwrap();
        let ids: Vec<_> = data.related_patterns(stack).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["arrays-and-hashing"]);
    }

    #[test]
    fn test_comparisons_for_category() {
        let data = fixture();
        let stack = data.category("stack").unwrap();
        let titles: Vec<_> = data.comparisons_for(stack).iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Stack vs Queue"]);

        let tp = data.category("two-pointers").unwrap();
        assert_eq!(data.comparisons_for(tp).len(), 1);
    }

    #[test]
    fn test_comparison_details_lookup_and_fallback() {
        let data = fixture();
        let known = data.comparison_details(&data.comparisons[0]);
        assert_eq!(known.pattern2_best_for, "Dedup");

        let unknown = data.comparison_details(&data.comparisons[1]);
        assert_eq!(unknown.pattern1_when, "the problem fits stack pattern");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("two-pointers"), "Two Pointers");
        assert_eq!(title_case("1d-dp"), "1d Dp");
        assert_eq!(title_case("bfs"), "Bfs");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("a--b"), "A  B");
    }
}
