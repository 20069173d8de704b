//! Cheat sheets: `cheatsheets/{category}.html`.

use super::{Head, Site, fragments, urls};
use crate::{
    data::Category,
    render::{Html, RenderError, escape_html, highlight_python},
};

const SAMPLE_PROBLEMS: usize = 5;
const OTHER_CHEATSHEETS: usize = 5;
const PLACEHOLDER_CODE: &str = "# Template code coming soon";

pub(super) fn render(site: &Site<'_>, category: &Category) -> Result<Html, RenderError> {
    let data = site.data;
    let name = &category.display_name;
    let url = urls::cheatsheet(&category.id);
    let problems = data.problems_in(&category.id);
    let trigger_words = data.trigger_words_for(&category.id);

    let head = Head {
        url: &url,
        description: format!(
            "{name} cheat sheet for coding interviews. Template code, complexity, and pattern recognition tips."
        ),
        og_title: site.branded(&format!("{name} Cheat Sheet")),
        title: site.branded(&format!("{name} Cheat Sheet")),
        noindex: false,
    };

    // First problem that has each piece stands in for the whole pattern
    let template_code = problems
        .iter()
        .map(|p| p.python_solution.as_str())
        .find(|code| !code.is_empty())
        .unwrap_or(PLACEHOLDER_CODE);
    let typical_time = problems
        .iter()
        .map(|p| p.time_complexity.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or("O(n)");
    let typical_space = problems
        .iter()
        .map(|p| p.space_complexity.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or("O(1)");

    let name_html = escape_html(name.as_str());
    let variations = Html::markup(format!(
        "<li>Basic {name_html}</li>\n<li>{name_html} with constraints</li>\n<li>Optimized {name_html}</li>"
    ));

    let others = Html::join(
        data.categories
            .iter()
            .filter(|c| c.id != category.id)
            .take(OTHER_CHEATSHEETS)
            .map(|c| fragments::link_item(&urls::cheatsheet(&c.id), &c.display_name)),
        "\n",
    );

    let ctx = site
        .context(&head)?
        .text("display_name", name)
        .text("description", &category.description)
        .text("color_hex", &category.color_hex)
        .when("trigger_words", !trigger_words.is_empty())
        .html("trigger_words_html", fragments::trigger_tags(trigger_words, "\n"))
        .html("template_code", highlight_python(template_code))
        .text("typical_time", typical_time)
        .text("typical_space", typical_space)
        .html("variations_html", variations)
        .html(
            "problems_html",
            fragments::problem_cards(&category.id, problems.iter().take(SAMPLE_PROBLEMS)),
        )
        .text("hub_url", &urls::hub(&category.id))
        .html("other_cheatsheets_html", others);

    site.templates.render("cheatsheet", ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{assert_complete, with_site};

    fn cheatsheet(category_id: &str) -> String {
        with_site(|site| {
            let html = render(&site, site.data.category(category_id).unwrap()).unwrap();
            assert_complete(&html);
            html.into_string()
        })
    }

    #[test]
    fn test_cheatsheet_from_first_solution() {
        let html = cheatsheet("arrays-and-hashing");
        assert!(html.contains("<title>Arrays &amp; Hashing Cheat Sheet | LeetEye</title>"));
        assert!(html.contains(r#"<span class="code-keyword">def</span> two_sum"#));
        assert!(html.contains("<code>O(n)</code>"));
        assert!(html.contains("<li>Basic Arrays &amp; Hashing</li>"));
        assert!(html.contains("<li>Optimized Arrays &amp; Hashing</li>"));
        assert_eq!(html.matches(r#"class="problem-card""#).count(), 3);
    }

    #[test]
    fn test_cheatsheet_fallbacks() {
        let html = cheatsheet("stack");
        assert!(html.contains(r#"<span class="code-comment"># Template code coming soon</span>"#));
        assert!(html.contains("<code>O(1)</code>"));
        assert!(!html.contains(r#"class="trigger-words""#));
        assert!(!html.contains(r#"class="problem-card""#));
    }

    #[test]
    fn test_other_cheatsheets_exclude_self() {
        let html = cheatsheet("stack");
        assert!(html.contains(
            r#"<li><a href="/cheatsheets/arrays-and-hashing.html">Arrays &amp; Hashing</a></li>"#
        ));
        assert!(html.contains(r#"<li><a href="/cheatsheets/two-pointers.html">Two Pointers</a></li>"#));
        assert!(!html.contains(r#"href="/cheatsheets/stack.html""#));
    }
}
