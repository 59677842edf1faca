//! Report view — renders the normalized ethical rating.
//!
//! Purely presentational: every derived value (band, color, emoji,
//! description, parsed links) comes from stitchwise-report. Reaching this
//! page without a prior submission renders the all-default report.

use axum::{extract::State, response::Html};
use stitchwise_report::{normalize, EthicsReport};

use crate::handlers::home::NAV_HTML;
use crate::state::SharedState;

const RING_CIRCUMFERENCE: f64 = 251.2;

pub async fn report_page(State(state): State<SharedState>) -> Html<String> {
    // One-shot: the record is consumed by this render. A reload or direct
    // navigation gets an empty record and the uniform defaults.
    let record = state.handoff.take().unwrap_or_default();
    let report = normalize(&record);
    Html(render_report(&report))
}

fn render_report(report: &EthicsReport) -> String {
    let heading = report.product_name.as_deref().unwrap_or("Ethical Rating");
    let dash_offset = RING_CIRCUMFERENCE - (report.rating / 10.0) * RING_CIRCUMFERENCE;

    let cards_html: String = report
        .cards
        .iter()
        .map(|card| {
            format!(
                r#"
        <div class="report-card">
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                card.label, card.value
            )
        })
        .collect();

    let (animal_class, animal_text) = if report.uses_animal_materials {
        ("report-card animal negative", "This product uses animal-based materials \u{1F534}")
    } else {
        ("report-card animal positive", "No animal-based materials used \u{1F7E2}")
    };

    let links_html = if report.links.is_empty() {
        String::new()
    } else {
        let items: String = report
            .links
            .iter()
            .map(|link| {
                format!(
                    r#"
            <li><a href="{link}" target="_blank" rel="noopener noreferrer">{link}</a></li>"#
                )
            })
            .collect();
        format!(
            r#"
    <section class="related-links">
        <h3>Related Articles &amp; Sources</h3>
        <ul>{items}
        </ul>
    </section>"#
        )
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{heading} — Stitchwise</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <h2 class="page-title">{heading}</h2>

    <div class="score-panel">
        <div class="score-ring">
            <svg viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40" stroke="#e5e7eb" stroke-width="10" fill="none" />
                <circle cx="50" cy="50" r="40" stroke="{color}" stroke-width="10" fill="none"
                    stroke-dasharray="{circumference}" stroke-dashoffset="{dash_offset}"
                    stroke-linecap="round" />
            </svg>
            <div class="score-emoji">{emoji}</div>
        </div>
        <p class="score-label" style="color:{color}">
            Score: {rating}/10 - {description}
        </p>
    </div>

    <section class="report-grid">{cards}
        <div class="{animal_class}">
            <h3>Animal Materials</h3>
            <p>{animal_text}</p>
        </div>
    </section>
{links}
</main>
</body>
</html>"##,
        heading = heading,
        nav = NAV_HTML,
        color = report.band.color(),
        circumference = RING_CIRCUMFERENCE,
        dash_offset = dash_offset,
        emoji = report.band.emoji(),
        rating = report.rating,
        description = report.description,
        cards = cards_html,
        animal_class = animal_class,
        animal_text = animal_text,
        links = links_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stitchwise_client::interpret_response;
    use stitchwise_common::record::RawAnalysisRecord;

    #[test]
    fn test_render_empty_record_defaults() {
        let report = normalize(&RawAnalysisRecord::new());
        let page = render_report(&report);
        assert!(page.contains("Score: 0/10"));
        assert!(page.contains("lacks ethical transparency"));
        assert!(page.contains("#ef4444"));
        assert!(page.contains("\u{1F61E}"));
        assert!(page.contains("Not Disclosed"));
        assert!(page.contains("No animal-based materials used"));
        assert!(!page.contains("Related Articles"));
        assert!(page.contains("Ethical Rating"));
    }

    #[test]
    fn test_render_success_payload_end_to_end() {
        // The full submit-to-display path minus the socket: interpret the
        // service payload, normalize, render.
        let record = interpret_response(
            true,
            json!({
                "Overall Ethical Rating": 8.5,
                "Brand": "Acme",
                "Animal Materials": 0,
                "Related Links": "http://src1.com,http://src2.com",
            }),
        )
        .unwrap();
        let page = render_report(&normalize(&record));

        assert!(page.contains("Score: 8.5/10"));
        assert!(page.contains("#22c55e"));
        assert!(page.contains("\u{1F603}"));
        assert!(page.contains("Acme is highly transparent and ethical."));
        assert!(page.contains("No animal-based materials used"));
        let first = page.find("http://src1.com").unwrap();
        let second = page.find("http://src2.com").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_animal_materials_negative_card() {
        let report = normalize(&RawAnalysisRecord::from_value(
            json!({"Animal Materials": 1}),
        ));
        let page = render_report(&report);
        assert!(page.contains("This product uses animal-based materials"));
        assert!(page.contains("animal negative"));
    }

    #[test]
    fn test_render_uses_product_name_as_heading() {
        let report = normalize(&RawAnalysisRecord::from_value(
            json!({"Product Name": "Organic Tee"}),
        ));
        let page = render_report(&report);
        assert!(page.contains("<h2 class=\"page-title\">Organic Tee</h2>"));
    }
}
