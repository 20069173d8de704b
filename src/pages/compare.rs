//! Pattern comparisons: `compare/{pattern1}-vs-{pattern2}.html`.

use super::{Head, Site, fragments, urls};
use crate::{
    data::{Comparison, title_case},
    render::{Html, RenderError, escape_json_ld},
};

const RELATED_COMPARISONS: usize = 5;

pub(super) fn render(site: &Site<'_>, comparison: &Comparison) -> Result<Html, RenderError> {
    let data = site.data;
    let url = urls::comparison(comparison);
    let slug = comparison.slug();
    let details = data.comparison_details(comparison);
    let name1 = title_case(&comparison.pattern1);
    let name2 = title_case(&comparison.pattern2);

    let head = Head {
        url: &url,
        description: format!(
            "{name1} vs {name2}: Learn when to use each pattern in coding interviews. Side-by-side comparison with examples."
        ),
        og_title: site.branded(&comparison.title),
        title: site.branded(&comparison.title),
        noindex: false,
    };

    let related = Html::join(
        data.comparisons
            .iter()
            .filter(|c| c.pattern1 != comparison.pattern1 || c.pattern2 != comparison.pattern2)
            .take(RELATED_COMPARISONS)
            .map(fragments::comparison_link),
        "\n",
    );

    let ctx = site
        .context(&head)?
        .json("headline_json", escape_json_ld(comparison.title.as_str()))
        .json(
            "summary_json",
            escape_json_ld(format!("{name1} vs {name2}: Learn when to use each pattern.").as_str()),
        )
        .json("site_name_json", escape_json_ld(site.config.base.name.as_str()))
        .text("title", &comparison.title)
        .text("pattern1_name", &name1)
        .text("pattern2_name", &name2)
        .text("pattern1_when", &details.pattern1_when)
        .text("pattern2_when", &details.pattern2_when)
        .text("pattern1_best_for", &details.pattern1_best_for)
        .text("pattern2_best_for", &details.pattern2_best_for)
        .text("pattern1_time", &details.pattern1_time)
        .text("pattern2_time", &details.pattern2_time)
        .text("pattern1_space", &details.pattern1_space)
        .text("pattern2_space", &details.pattern2_space)
        .when("decision", !details.decision.is_empty())
        .html("decision_html", fragments::list_items(&details.decision))
        .text("cta_url", &site.cta_url("comparison", &slug))
        .when("related_comparisons", !related.is_empty())
        .html("related_html", related);

    site.templates.render("comparison", ctx)
}
