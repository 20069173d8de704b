//! Section index pages: `/patterns/`, `/cheatsheets/` and `/compare/`.

use super::{Head, Site, urls};
use crate::render::{Html, RenderError, escape_html};

pub(super) fn render_patterns(site: &Site<'_>) -> Result<Html, RenderError> {
    let data = site.data;
    let count = data.categories.len();
    let head = Head {
        url: urls::PATTERNS_INDEX,
        description: format!(
            "Master {count} essential algorithm patterns for coding interviews. From Two Pointers to Dynamic Programming."
        ),
        og_title: site.branded("Algorithm Patterns Guide"),
        title: site.branded("Algorithm Patterns"),
        noindex: false,
    };

    let cards = Html::join(
        data.categories.iter().map(|category| {
            Html::markup(format!(
                r#"<a href="{href}" class="pattern-card" style="border-left: 4px solid {color}">
            <h3>{name}</h3>
            <p>{description}</p>
            <div class="pattern-card-meta">
                <span>{total} problems</span>
            </div>
        </a>"#,
                href = escape_html(urls::hub(&category.id).as_str()),
                color = escape_html(category.color_hex.as_str()),
                name = escape_html(category.display_name.as_str()),
                description = escape_html(category.description.as_str()),
                total = data.stats(&category.id).total(),
            ))
        }),
        "\n",
    );

    let ctx = site
        .context(&head)?
        .text("pattern_count", &count.to_string())
        .html("patterns_html", cards);
    site.templates.render("patterns-index", ctx)
}

pub(super) fn render_cheatsheets(site: &Site<'_>) -> Result<Html, RenderError> {
    let head = Head {
        url: urls::CHEATSHEETS_INDEX,
        description: "Quick reference cheat sheets for all algorithm patterns. Template code, complexity, and trigger words.".into(),
        og_title: site.branded("Algorithm Cheat Sheets"),
        title: site.branded("Cheat Sheets"),
        noindex: false,
    };

    let cards = Html::join(
        site.data.categories.iter().map(|category| {
            Html::markup(format!(
                r#"<a href="{}" class="cheatsheet-card" style="border-left: 4px solid {}">
            <span class="cheatsheet-icon">📋</span>
            <span>{}</span>
            <span class="arrow">&rarr;</span>
        </a>"#,
                escape_html(urls::cheatsheet(&category.id).as_str()),
                escape_html(category.color_hex.as_str()),
                escape_html(category.display_name.as_str()),
            ))
        }),
        "\n",
    );

    let ctx = site.context(&head)?.html("cheatsheets_html", cards);
    site.templates.render("cheatsheets-index", ctx)
}

pub(super) fn render_comparisons(site: &Site<'_>) -> Result<Html, RenderError> {
    let head = Head {
        url: urls::COMPARE_INDEX,
        description: "Algorithm pattern comparisons for coding interviews. When to use BFS vs DFS, DP vs Greedy, and more.".into(),
        og_title: site.branded("Pattern Comparisons"),
        title: site.branded("Pattern Comparisons"),
        noindex: false,
    };

    let cards = Html::join(
        site.data.comparisons.iter().map(|comparison| {
            Html::markup(format!(
                r#"<a href="{}" class="comparison-card">
            <span>{}</span>
            <span class="arrow">&rarr;</span>
        </a>"#,
                escape_html(urls::comparison(comparison).as_str()),
                escape_html(comparison.title.as_str()),
            ))
        }),
        "\n",
    );

    let ctx = site.context(&head)?.html("comparisons_html", cards);
    site.templates.render("compare-index", ctx)
}
