//! Submission view — product URL form plus the landing-page content.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::state::SharedState;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

#[derive(Deserialize)]
pub struct AnalyzeForm {
    pub url: String,
}

pub async fn home_page(State(state): State<SharedState>) -> Html<String> {
    let analyzer_online = state.analyzer.status().await;
    Html(render_home(
        state.submission.last_error().as_deref(),
        state.submission.is_pending(),
        Some(analyzer_online),
    ))
}

/// The submit operation: gate, call the analyzer, hand the record off to the
/// report view. One request in flight at a time; a rejected attempt issues
/// no request at all.
pub async fn analyze_submit(
    State(state): State<SharedState>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let product_url = form.url.trim();
    if product_url.is_empty() {
        // The form input is required; a blank post is just redisplayed.
        return Redirect::to("/").into_response();
    }

    let Some(id) = state.submission.begin() else {
        info!(url = product_url, "submission rejected: analysis already in flight");
        return Html(render_home(
            Some("An analysis is already in progress."),
            true,
            None,
        ))
        .into_response();
    };

    // A new submission discards any undelivered result.
    state.handoff.clear();
    info!(submission = %id, url = product_url, "analysis started");

    match state.analyzer.analyze(product_url).await {
        Ok(record) => {
            state.submission.succeed();
            state.handoff.put(record);
            info!(submission = %id, "analysis succeeded");
            Redirect::to("/report").into_response()
        }
        Err(err) => {
            let message = err.user_message();
            warn!(submission = %id, error = %err, "analysis failed");
            state.submission.fail(message.clone());
            Html(render_home(Some(message.as_str()), false, None)).into_response()
        }
    }
}

fn render_home(error: Option<&str>, pending: bool, analyzer_online: Option<bool>) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="form-error">{}</p>"#, message),
        None => String::new(),
    };

    let (button_label, button_attr) = if pending {
        ("Analyzing...", " disabled")
    } else {
        ("Analyze", "")
    };

    let status_html = match analyzer_online {
        Some(true) => {
            r#"<p class="analyzer-status online">Analyzer service online</p>"#.to_string()
        }
        Some(false) => {
            r#"<p class="analyzer-status offline">Analyzer service unreachable</p>"#.to_string()
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Is My Shirt Ethical? — Stitchwise</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <section class="hero">
        <h1 class="hero-title">Is My Shirt Ethical?</h1>
        <p class="hero-subtitle">Keeping Fast-Fashion Accountable</p>

        <form method="POST" action="/analyze" class="analyze-form">
            <div class="search-bar">
                <input type="url" name="url" class="search-input"
                    placeholder="Enter a product URL..." required>
                <button type="submit" class="btn btn-primary"{button_attr}>{button_label}</button>
            </div>
        </form>
        {error_html}
        {status_html}
    </section>

    <section class="mission">
        <h2>Mission Statement</h2>
        <p>
            Every purchase we make shapes the world. Fast fashion relies on
            <strong>exploitative labor, environmental destruction, and misleading
            sustainability claims.</strong> Our mission is to <strong>bring
            transparency</strong> to the clothing industry, helping you make
            informed, ethical decisions.
        </p>
    </section>

    <section class="info-grid">
        <div class="info-card">
            <h3>Transparency</h3>
            <p>Brands often hide where and how clothes are made. We analyze their
            disclosures to reveal what they aren't telling you.</p>
        </div>
        <div class="info-card">
            <h3>Labor Conditions</h3>
            <p>Many workers in fast fashion factories are underpaid and overworked.
            We check ethical standards and past controversies.</p>
        </div>
        <div class="info-card">
            <h3>Sustainability</h3>
            <p>"Greenwashing" is everywhere. We investigate whether brands truly use
            sustainable practices or just market them.</p>
        </div>
    </section>
</main>
</body>
</html>"#,
        nav = NAV_HTML,
        button_attr = button_attr,
        button_label = button_label,
        error_html = error_html,
        status_html = status_html,
    )
}
