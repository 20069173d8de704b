//! Human-readable sitemap: `sitemap.html`.
//!
//! One section per pattern (cheat sheet first, then its problems), followed
//! by every cheat sheet and every comparison.

use super::{Head, Site, fragments, urls};
use crate::render::{Html, RenderError, escape_html};

pub(super) fn render(site: &Site<'_>) -> Result<Html, RenderError> {
    let data = site.data;
    let head = Head {
        url: urls::HTML_SITEMAP,
        description: format!(
            "Complete sitemap of {} - all algorithm patterns, problems, cheat sheets, and comparisons for coding interview prep.",
            site.config.base.name
        ),
        og_title: site.branded("Sitemap"),
        title: site.branded("Sitemap"),
        noindex: false,
    };

    let sections = Html::join(
        data.categories.iter().map(|category| {
            let cheatsheet = fragments::link_item(
                &urls::cheatsheet(&category.id),
                &format!("{} Cheat Sheet", category.display_name),
            );
            let problems = Html::join(
                data.problems_in(&category.id)
                    .iter()
                    .map(|p| fragments::link_item(&urls::problem(&category.id, &p.slug), &p.title)),
                "\n",
            );
            Html::markup(format!(
                r#"<div class="sitemap-category">
                <h3><a href="{}">{}</a></h3>
                <ul>
                    {cheatsheet}
                    {problems}
                </ul>
            </div>"#,
                escape_html(urls::hub(&category.id).as_str()),
                escape_html(category.display_name.as_str()),
            ))
        }),
        "\n",
    );

    let cheatsheets = Html::join(
        data.categories.iter().map(|c| {
            fragments::link_item(&urls::cheatsheet(&c.id), &format!("{} Cheat Sheet", c.display_name))
        }),
        "\n",
    );
    let comparisons = Html::join(data.comparisons.iter().map(fragments::comparison_link), "\n");

    let ctx = site
        .context(&head)?
        .html("pattern_sections_html", sections)
        .html("cheatsheets_html", cheatsheets)
        .when("comparisons", !comparisons.is_empty())
        .html("comparisons_html", comparisons);

    site.templates.render("sitemap", ctx)
}
