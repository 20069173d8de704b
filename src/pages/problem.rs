//! Problem pages: `problems/{category}/{slug}.html`.

use super::{Head, Site, fragments, non_empty, urls};
use crate::{
    data::{Category, Example, Problem, Step},
    render::{
        Html, JsonLd, RenderError, escape_html, escape_json_ld, highlight_python,
        markdown_to_html,
    },
};

const DEFAULT_KEY_INSIGHT: &str = "Think about the core pattern.";
const DEFAULT_TIME: &str = "O(n)";
const DEFAULT_SPACE: &str = "O(1)";

pub(super) fn render(
    site: &Site<'_>,
    category: &Category,
    problem: &Problem,
) -> Result<Html, RenderError> {
    let url = urls::problem(&category.id, &problem.slug);
    let pattern = non_empty(&problem.pattern, &category.display_name);
    let time = non_empty(&problem.time_complexity, DEFAULT_TIME);
    let space = non_empty(&problem.space_complexity, DEFAULT_SPACE);

    let description = format!(
        "Learn how to solve {} using {pattern}. {} difficulty. Time: {time}, Space: {space}.",
        problem.title,
        problem.difficulty.label(),
    );
    let head = Head {
        url: &url,
        og_title: site.branded(&format!("{} Solution | {pattern}", problem.title)),
        title: site.branded(&format!("{} Solution | {}", problem.title, category.display_name)),
        description,
        noindex: false,
    };

    let related = site
        .data
        .related_problems(&category.id, problem, site.config.build.related_limit);

    let trigger_words = if problem.trigger_words.is_empty() {
        fragments::trigger_tags(std::slice::from_ref(&category.display_name), " ")
    } else {
        fragments::trigger_tags(&problem.trigger_words, " ")
    };

    let ctx = site
        .context(&head)?
        .text("title", &problem.title)
        .json("title_json", escape_json_ld(problem.title.as_str()))
        .json("description_json", escape_json_ld(head.description.as_str()))
        .text("estimated_time", &problem.estimated_time.to_string())
        .json("estimated_time_json", JsonLd::markup(problem.estimated_time.to_string()))
        .json("steps_schema", steps_schema(&problem.steps))
        .text("hub_url", &urls::hub(&category.id))
        .text("category_name", &category.display_name)
        .text("difficulty", problem.difficulty.as_str())
        .text("difficulty_cap", problem.difficulty.label())
        .text("pattern", pattern)
        .optional_text("one_liner", Some(problem.one_liner.as_str()))
        .html("tags_html", tags(&problem.tags))
        .html("problem_statement", markdown_to_html(problem.problem_statement.as_str()))
        .html("examples_html", examples(&problem.examples))
        .when("examples", !problem.examples.is_empty())
        .text("key_insight", non_empty(&problem.key_insight, DEFAULT_KEY_INSIGHT))
        .html("trigger_words_html", trigger_words)
        .html("steps_html", steps(&problem.steps))
        .html("python_solution", highlight_python(problem.python_solution.as_str()))
        .text("time_complexity", time)
        .text("space_complexity", space)
        .text("cta_url", &site.cta_url("problem", &problem.slug))
        .html(
            "related_problems_html",
            Html::join(
                related.iter().map(|p| fragments::problem_list_item(&category.id, p)),
                "\n",
            ),
        )
        .when("related_problems", !related.is_empty());

    site.templates.render("problem", ctx)
}

/// Numbered reasoning steps with the correct answer spelled out.
fn steps(steps: &[Step]) -> Html {
    Html::join(
        steps.iter().enumerate().map(|(i, step)| {
            Html::markup(format!(
                r#"<div class="reasoning-step">
                <div class="step-question">
                    <span class="step-number">{n}</span>
                    {question}
                </div>
                <div class="step-answer">
                    <strong>Answer:</strong> {answer}
                </div>
                <div class="step-explanation">
                    {explanation}
                </div>
            </div>"#,
                n = i + 1,
                question = markdown_to_html(step.question.as_str()),
                answer = escape_html(step.correct_option().map(|o| o.text.as_str())),
                explanation = markdown_to_html(step.explanation.as_str()),
            ))
        }),
        "\n",
    )
}

/// `HowToStep` objects, comma separated, for the page's JSON-LD.
fn steps_schema(steps: &[Step]) -> JsonLd {
    JsonLd::join(
        steps.iter().enumerate().map(|(i, step)| {
            JsonLd::markup(format!(
                r#"{{
                "@type": "HowToStep",
                "name": "Step {n}",
                "text": "{text}",
                "position": {n}
            }}"#,
                n = i + 1,
                text = escape_json_ld(step.question.as_str()),
            ))
        }),
        ",\n",
    )
}

fn examples(examples: &[Example]) -> Html {
    Html::join(
        examples.iter().enumerate().map(|(i, example)| {
            let explanation = match example.explanation.as_deref() {
                Some(text) if !text.is_empty() => format!(
                    r#"<div class="example-explanation">{}</div>"#,
                    escape_html(text)
                ),
                _ => String::new(),
            };
            Html::markup(format!(
                r#"<div class="example">
                <div class="example-label">Example {n}</div>
                <div class="example-input"><strong>Input:</strong> {input}</div>
                <div class="example-output"><strong>Output:</strong> {output}</div>
                {explanation}
            </div>"#,
                n = i + 1,
                input = escape_html(example.input.as_str()),
                output = escape_html(example.output.as_str()),
            ))
        }),
        "\n",
    )
}

fn tags(tags: &[String]) -> Html {
    Html::join(
        tags.iter()
            .map(|tag| Html::markup(format!(r#"<span class="tag">{}</span>"#, escape_html(tag.as_str())))),
        "\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{assert_complete, with_site};

    fn render_problem(category_id: &str, slug: &str) -> String {
        with_site(|site| {
            let category = site.data.category(category_id).unwrap();
            let problem = site
                .data
                .problems_in(category_id)
                .iter()
                .find(|p| p.slug == slug)
                .unwrap();
            let html = render(&site, category, problem).unwrap();
            assert_complete(&html);
            html.into_string()
        })
    }

    #[test]
    fn test_full_problem_page() {
        let html = render_problem("arrays-and-hashing", "two-sum");

        assert!(html.contains("<title>Two Sum Solution | Arrays &amp; Hashing | LeetEye</title>"));
        assert!(html.contains(
            r#"content="Learn how to solve Two Sum using Hash Map. Easy difficulty. Time: O(n), Space: O(n).""#
        ));
        assert!(html.contains(r#"<span class="difficulty difficulty-easy">Easy</span>"#));
        assert!(html.contains(r#"<p class="one-liner">Store complements as you go.</p>"#));
        assert!(html.contains(r#"<span class="tag">hash-map</span>"#));
        assert!(html.contains("<strong>indices</strong>"));
        assert!(html.contains("<code>target</code>.<br>Exactly one answer."));
        assert!(html.contains("<strong>Input:</strong> nums = [2,7], target = 9"));
        assert!(html.contains(r#"<div class="example-explanation">2 + 7 == 9</div>"#));
        assert!(html.contains("<p>Look up target - x.</p>"));
        assert!(html.contains(r#"<span class="trigger-tag">sum to target</span>"#));
        assert!(html.contains("PT6M"));
    }

    #[test]
    fn test_steps_and_schema() {
        let html = render_problem("arrays-and-hashing", "two-sum");

        assert!(html.contains(r#"<span class="step-number">1</span>"#));
        assert!(html.contains("What do we <strong>remember</strong>?"));
        assert!(html.contains("<strong>Answer:</strong> Seen values &amp; indices"));
        assert!(html.contains("A map gives <code>O(1)</code> lookups."));

        // JSON-LD carries the raw question, JSON-escaped, never HTML-escaped
        assert!(html.contains(r#""text": "What do we **remember**?""#));
        assert!(html.contains(r#""name": "Step 1""#));
        assert!(html.contains(r#""position": 1"#));
    }

    #[test]
    fn test_solution_is_highlighted() {
        let html = render_problem("arrays-and-hashing", "two-sum");
        assert!(html.contains(r#"<span class="code-keyword">def</span>"#));
        assert!(html.contains(r#"<span class="code-comment"># value -&gt; index</span>"#));
        assert!(html.contains(r#"<span class="code-func">enumerate</span>"#));
    }

    #[test]
    fn test_related_problems() {
        let html = render_problem("arrays-and-hashing", "two-sum");
        assert!(html.contains("More Arrays &amp; Hashing Problems"));
        assert!(html.contains(r#"href="/problems/arrays-and-hashing/group-anagrams.html""#));
        assert!(!html.contains(r#"href="/problems/arrays-and-hashing/two-sum.html""#));

        // only problem in its category: the aside is omitted
        let html = render_problem("two-pointers", "valid-palindrome");
        assert!(!html.contains("related-problems"));
    }

    #[test]
    fn test_sparse_problem_uses_fallbacks() {
        let html = render_problem("arrays-and-hashing", "group-anagrams");

        assert!(html.contains("<p>Think about the core pattern.</p>"));
        assert!(html.contains("<code>O(n)</code>"));
        assert!(html.contains("<code>O(1)</code>"));
        assert!(html.contains("<span class=\"pattern-label\">Arrays &amp; Hashing</span>"));
        // no trigger words of its own: falls back to the category name
        assert!(html.contains(r#"<span class="trigger-tag">Arrays &amp; Hashing</span>"#));
        assert!(!html.contains("one-liner"));
        assert!(!html.contains(r#"<section class="examples">"#));
        assert!(html.contains("PT5M"));
    }

    #[test]
    fn test_title_escaped_per_context() {
        let html = render_problem("arrays-and-hashing", "contains-duplicate");
        assert!(html.contains("<h1>Contains &quot;Duplicate&quot;</h1>"));
        assert!(html.contains(r#""name": "How to solve Contains \"Duplicate\"""#));
    }
}
