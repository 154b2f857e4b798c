//! Landing-page ("MAIN") rendering.
//!
//! Home content comes from an optional `home.json`; every field falls back
//! to the built-in structure individually, so a partial file still renders a
//! complete page. An empty list counts as absent.

use once_cell::sync::Lazy;

use courseview::types::{Blueprint, Feature, Hero, HomeData, MAIN_SESSION, Stat};

use crate::content::RenderOutcome;
use crate::escape::escape_html;

static FALLBACK: Lazy<HomeData> = Lazy::new(|| HomeData {
    hero: Some(Hero {
        kicker: Some("LG CNS · Solution Delivery".into()),
        title: Some("프로젝트 수행을 위한".into()),
        accent: Some("AI Engineer 교육".into()),
        subtitle: Some(
            "실제 업무 흐름에 맞춰 설계·구현·운영 역량을 강화하는 실전형 커리큘럼입니다. \
             문서와 코드 템플릿을 중심으로 세션별 핵심 패턴을 학습합니다."
                .into(),
        ),
        pills: vec![
            "4 Sessions".into(),
            "Docs + Code".into(),
            "실전형 커리큘럼".into(),
        ],
    }),
    blueprint: Some(Blueprint {
        label: Some("Blue Print".into()),
        ascii: vec![
            r"/---------\   /---------\   /---------\".into(),
            r"| DESIGN  |-->|  BUILD  |-->| OPERATE |".into(),
            r"\---------/   \---------/   \---------/".into(),
        ],
        stats: vec![
            Stat {
                label: "Sessions".into(),
                value: "4".into(),
            },
            Stat {
                label: "Modules".into(),
                value: "Docs/Code".into(),
            },
            Stat {
                label: "Focus".into(),
                value: "Delivery".into(),
            },
        ],
    }),
    features: Vec::new(),
});

/// Render the home layout. `None` (missing or failed `home.json`) renders
/// the full fallback. The breadcrumb always reads `MAIN`.
pub fn render_home(data: Option<&HomeData>) -> RenderOutcome {
    let data = data.unwrap_or(&FALLBACK);
    let fallback_hero = FALLBACK.hero.as_ref().expect("fallback hero present");
    let fallback_blueprint = FALLBACK.blueprint.as_ref().expect("fallback blueprint present");
    let hero = data.hero.as_ref().unwrap_or(fallback_hero);
    let blueprint = data.blueprint.as_ref().unwrap_or(fallback_blueprint);

    let kicker = pick(&hero.kicker, &fallback_hero.kicker);
    let title = pick(&hero.title, &fallback_hero.title);
    let accent = pick(&hero.accent, &fallback_hero.accent);
    let subtitle = pick(&hero.subtitle, &fallback_hero.subtitle);
    let pills = pick_list(&hero.pills, &fallback_hero.pills);
    let label = pick(&blueprint.label, &fallback_blueprint.label);
    let ascii = pick_list(&blueprint.ascii, &fallback_blueprint.ascii);
    let stats = pick_list(&blueprint.stats, &fallback_blueprint.stats);
    let features = pick_list(&data.features, &FALLBACK.features);

    let ascii_joined = ascii
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("\n");

    let mut html = String::from("<section class=\"hero hero-main\">");
    html.push_str("<div class=\"hero-panel course-panel\">");
    html.push_str(&format!(
        "<span class=\"hero-kicker\">{}</span>",
        escape_html(kicker)
    ));
    html.push_str(&format!(
        "<h1 class=\"hero-title\">{} <span class=\"hero-accent\">{}</span></h1>",
        escape_html(title),
        escape_html(accent)
    ));
    html.push_str(&format!("<p class=\"hero-sub\">{}</p>", escape_html(subtitle)));
    html.push_str(&format!("<div class=\"hero-meta\">{}</div>", render_pills(pills)));
    html.push_str("</div>");

    html.push_str("<div class=\"hero-panel blueprint-panel\">");
    html.push_str(&format!(
        "<div class=\"blueprint-label\">{}</div>",
        escape_html(label)
    ));
    html.push_str(&format!(
        "<pre class=\"blueprint-track ascii\">{ascii_joined}</pre>"
    ));
    html.push_str(&format!(
        "<div class=\"blueprint-grid\">{}</div>",
        render_stats(stats)
    ));
    html.push_str("</div>");

    html.push_str(&format!(
        "<div class=\"feature-grid\">{}</div>",
        render_features(features)
    ));
    html.push_str("</section>");

    RenderOutcome::Rendered {
        html,
        breadcrumb: MAIN_SESSION.to_string(),
        animate: true,
    }
}

fn pick<'a>(value: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    value
        .as_deref()
        .or(fallback.as_deref())
        .unwrap_or_default()
}

fn pick_list<'a, T>(value: &'a [T], fallback: &'a [T]) -> &'a [T] {
    if value.is_empty() { fallback } else { value }
}

fn render_pills(pills: &[String]) -> String {
    pills
        .iter()
        .map(|pill| format!("<span class=\"hero-pill\">{}</span>", escape_html(pill)))
        .collect()
}

fn render_stats(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|stat| {
            format!(
                "<div><span class=\"stat-title\">{}</span><strong>{}</strong></div>",
                escape_html(&stat.label),
                escape_html(&stat.value)
            )
        })
        .collect()
}

fn render_features(features: &[Feature]) -> String {
    features
        .iter()
        .map(|feature| {
            let items: String = feature
                .items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!(
                "<article class=\"feature-card\"><h3>{}</h3><ul>{items}</ul></article>",
                escape_html(&feature.title)
            )
        })
        .collect()
}
