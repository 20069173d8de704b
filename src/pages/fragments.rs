//! Repeated markup pieces shared by several page families.
//!
//! Each helper takes raw values and escapes them itself, so callers can pass
//! data fields straight through.

use super::urls;
use crate::{
    data::{Category, Comparison, Problem},
    render::{Html, escape_html},
};

/// Card linking to a problem page, with its difficulty badge.
pub fn problem_card(category_id: &str, problem: &Problem) -> Html {
    Html::markup(format!(
        r#"<a href="{href}" class="problem-card">
            <span class="problem-card-title">{title}</span>
            <span class="difficulty difficulty-{d}">{d}</span>
        </a>"#,
        href = escape_html(urls::problem(category_id, &problem.slug).as_str()),
        title = escape_html(problem.title.as_str()),
        d = problem.difficulty,
    ))
}

/// Problem cards, one per line.
pub fn problem_cards<'a>(
    category_id: &str,
    problems: impl IntoIterator<Item = &'a Problem>,
) -> Html {
    Html::join(problems.into_iter().map(|p| problem_card(category_id, p)), "\n")
}

/// `<li>` link to a problem, as used in related-problem lists.
pub fn problem_list_item(category_id: &str, problem: &Problem) -> Html {
    Html::markup(format!(
        r#"<li>
            <a href="{href}">
                <span class="problem-card-title">{title}</span>
                <span class="difficulty difficulty-{d}">{d}</span>
            </a>
        </li>"#,
        href = escape_html(urls::problem(category_id, &problem.slug).as_str()),
        title = escape_html(problem.title.as_str()),
        d = problem.difficulty,
    ))
}

pub fn trigger_tags(words: &[String], separator: &str) -> Html {
    Html::join(
        words.iter().map(|word| {
            Html::markup(format!(
                r#"<span class="trigger-tag">{}</span>"#,
                escape_html(word.as_str())
            ))
        }),
        separator,
    )
}

/// `<li><a href="{url}">{label}</a></li>`
pub fn link_item(url: &str, label: &str) -> Html {
    Html::markup(format!(
        r#"<li><a href="{}">{}</a></li>"#,
        escape_html(url),
        escape_html(label)
    ))
}

pub fn comparison_link(comparison: &Comparison) -> Html {
    link_item(&urls::comparison(comparison), &comparison.title)
}

/// Plain `<li>` per entry.
pub fn list_items(items: &[String]) -> Html {
    Html::join(
        items
            .iter()
            .map(|item| Html::markup(format!("<li>{}</li>", escape_html(item.as_str())))),
        "\n",
    )
}

/// Badge linking to a pattern hub, tinted with the pattern's color.
pub fn pattern_badge(category: &Category) -> Html {
    let color = escape_html(category.color_hex.as_str());
    Html::markup(format!(
        r#"<a href="{href}" class="pattern-badge" style="background: {color}20; color: {color}">
            {name}
        </a>"#,
        href = escape_html(urls::hub(&category.id).as_str()),
        name = escape_html(category.display_name.as_str()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Difficulty;

    fn problem(slug: &str, title: &str) -> Problem {
        Problem {
            slug: slug.into(),
            title: title.into(),
            difficulty: Difficulty::Hard,
            ..Default::default()
        }
    }

    #[test]
    fn test_problem_card_escapes_title_and_href() {
        let card = problem_card("stack", &problem("a\"b", "<Min> Stack"));
        let s = card.as_str();
        assert!(s.contains(r#"href="/problems/stack/a&quot;b.html""#));
        assert!(s.contains("&lt;Min&gt; Stack"));
        assert!(s.contains(r#"class="difficulty difficulty-hard">hard<"#));
    }

    #[test]
    fn test_problem_cards_joined() {
        let ps = [problem("a", "A"), problem("b", "B")];
        let html = problem_cards("x", &ps);
        assert_eq!(html.as_str().matches("problem-card\"").count(), 2);
        assert!(problem_cards("x", &[]).is_empty());
    }

    #[test]
    fn test_trigger_tags() {
        let words = vec!["pair".to_string(), "a & b".to_string()];
        assert_eq!(
            trigger_tags(&words, " ").as_str(),
            r#"<span class="trigger-tag">pair</span> <span class="trigger-tag">a &amp; b</span>"#
        );
    }

    #[test]
    fn test_link_and_list_items() {
        assert_eq!(
            link_item("/compare/a-vs-b.html", "A > B").as_str(),
            r#"<li><a href="/compare/a-vs-b.html">A &gt; B</a></li>"#
        );
        assert_eq!(
            list_items(&["x".to_string(), "'y'".to_string()]).as_str(),
            "<li>x</li>\n<li>&apos;y&apos;</li>"
        );
    }

    #[test]
    fn test_pattern_badge_escapes_color() {
        let category = Category {
            id: "stack".into(),
            display_name: "Stack".into(),
            color_hex: "#fff\" onmouseover=\"x".into(),
            ..Default::default()
        };
        let badge = pattern_badge(&category);
        assert!(!badge.as_str().contains("\" onmouseover"));
        assert!(badge.as_str().contains(r#"href="/patterns/stack/""#));
    }
}
