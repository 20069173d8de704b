//! Pattern hub pages and their per-difficulty listings.
//!
//! - `patterns/{category}/index.html`: overview, prose, every problem
//! - `patterns/{category}/{difficulty}.html`: filtered list, kept out of
//!   search indexes

use super::{Head, Site, fragments, urls};
use crate::{
    data::{Category, Difficulty},
    render::{Html, JsonLd, RenderError, escape_html, escape_json_ld},
};

/// Problems listed in the hub's `ItemList` JSON-LD.
const SCHEMA_PROBLEM_LIMIT: usize = 10;

pub(super) fn render_hub(site: &Site<'_>, category: &Category) -> Result<Html, RenderError> {
    let data = site.data;
    let name = &category.display_name;
    let url = urls::hub(&category.id);
    let problems = data.problems_in(&category.id);
    let stats = data.stats(&category.id);
    let trigger_words = data.trigger_words_for(&category.id);

    let head = Head {
        url: &url,
        description: format!(
            "Master the {name} pattern for coding interviews. {} practice problems with step-by-step solutions.",
            problems.len()
        ),
        og_title: site.branded(&format!("{name} Pattern Guide")),
        title: site.branded(&format!("{name} Pattern")),
        noindex: false,
    };

    let schema = JsonLd::join(
        problems
            .iter()
            .take(SCHEMA_PROBLEM_LIMIT)
            .enumerate()
            .map(|(i, p)| {
                let problem_url =
                    site.config.base.absolute(&urls::problem(&category.id, &p.slug));
                JsonLd::markup(format!(
                    r#"{{
                "@type": "ListItem",
                "position": {},
                "item": {{
                    "@type": "Article",
                    "name": "{}",
                    "url": "{}"
                }}
            }}"#,
                    i + 1,
                    escape_json_ld(p.title.as_str()),
                    escape_json_ld(problem_url.as_str()),
                ))
            }),
        ",\n",
    );

    let related_patterns = data.related_patterns(category);
    let related_patterns = Html::join(related_patterns.into_iter().map(fragments::pattern_badge), "\n");
    let comparisons = Html::join(
        data.comparisons_for(category)
            .into_iter()
            .map(fragments::comparison_link),
        "\n",
    );

    let content = data.pattern_content(&category.id);
    let how_it_works = content
        .map(|c| c.how_it_works.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| Html::markup(format!("<p>{}</p>", escape_html(s))))
        .unwrap_or_default();
    let common_mistakes = content.map(|c| fragments::list_items(&c.common_mistakes)).unwrap_or_default();
    let when_not_to_use = content.map(|c| fragments::list_items(&c.when_not_to_use)).unwrap_or_default();

    let ctx = site
        .context(&head)?
        .text("display_name", name)
        .json("display_name_json", escape_json_ld(name.as_str()))
        .text("description", &category.description)
        .text("color_hex", &category.color_hex)
        .text("problem_count", &problems.len().to_string())
        .json("problem_count_json", JsonLd::markup(problems.len().to_string()))
        .text("easy_count", &stats.easy.to_string())
        .text("medium_count", &stats.medium.to_string())
        .text("hard_count", &stats.hard.to_string())
        .text("easy_url", &urls::difficulty(&category.id, Difficulty::Easy))
        .text("medium_url", &urls::difficulty(&category.id, Difficulty::Medium))
        .text("hard_url", &urls::difficulty(&category.id, Difficulty::Hard))
        .json("problems_schema", schema)
        .when("how_it_works", !how_it_works.is_empty())
        .html("how_it_works_html", how_it_works)
        .when("common_mistakes", !common_mistakes.is_empty())
        .html("common_mistakes_html", common_mistakes)
        .when("when_not_to_use", !when_not_to_use.is_empty())
        .html("when_not_to_use_html", when_not_to_use)
        .when("trigger_words", !trigger_words.is_empty())
        .html("trigger_words_html", fragments::trigger_tags(trigger_words, "\n"))
        // no per-pattern template yet; the cheat sheet carries one
        .when("template_code", false)
        .html("problems_html", fragments::problem_cards(&category.id, problems))
        .text("cheatsheet_url", &urls::cheatsheet(&category.id))
        .when("related_patterns", !related_patterns.is_empty())
        .html("related_patterns_html", related_patterns)
        .when("comparisons", !comparisons.is_empty())
        .html("comparisons_html", comparisons)
        .text("cta_url", &site.cta_url("pattern", &category.id));

    site.templates.render("pattern-hub", ctx)
}

pub(super) fn render_difficulty(
    site: &Site<'_>,
    category: &Category,
    difficulty: Difficulty,
) -> Result<Html, RenderError> {
    let name = &category.display_name;
    let label = difficulty.label();
    let url = urls::difficulty(&category.id, difficulty);
    let problems: Vec<_> = site
        .data
        .problems_in(&category.id)
        .iter()
        .filter(|p| p.difficulty == difficulty)
        .collect();

    let head = Head {
        url: &url,
        description: format!(
            "{label} {name} problems for coding interview practice. {} problems with solutions.",
            problems.len()
        ),
        og_title: site.branded(&format!("{label} {name} Problems")),
        title: site.branded(&format!("{label} {name} Problems")),
        noindex: true,
    };

    let problems_html = if problems.is_empty() {
        Html::markup(r#"<p class="empty-state">No problems at this difficulty yet. Check back soon!</p>"#)
    } else {
        fragments::problem_cards(&category.id, problems.iter().copied())
    };

    let ctx = site
        .context(&head)?
        .text("display_name", name)
        .text("color_hex", &category.color_hex)
        .text("difficulty", difficulty.as_str())
        .text("difficulty_cap", label)
        .text("problem_count", &problems.len().to_string())
        .html("tabs_html", tabs(&category.id, difficulty))
        .html("problems_html", problems_html)
        .text("hub_url", &urls::hub(&category.id))
        .text(
            "cta_url",
            &site.cta_url("difficulty", &format!("{}-{difficulty}", category.id)),
        );

    site.templates.render("difficulty", ctx)
}

/// Easy / Medium / Hard links with the current one marked active.
fn tabs(category_id: &str, active: Difficulty) -> Html {
    Html::join(
        Difficulty::ALL.iter().map(|&d| {
            Html::markup(format!(
                r#"<a href="{}" class="tab{}">{}</a>"#,
                escape_html(urls::difficulty(category_id, d).as_str()),
                if d == active { " active" } else { "" },
                d.label(),
            ))
        }),
        "\n",
    )
}
