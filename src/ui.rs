use crate::models::{DashboardResponse, MoodLevel, MoodSample};
use std::fmt::Write;

pub fn render_dashboard(view: &DashboardResponse, year: i32, refresh_secs: u64) -> String {
    let refresh = if view.check_in_notice {
        format!(r#"<meta http-equiv="refresh" content="{refresh_secs}" />"#)
    } else {
        String::new()
    };
    let check_in = if view.check_in_notice {
        NOTICE_HTML.to_string()
    } else {
        render_picker(view.selected_mood)
    };
    let score = view.wellness_score;

    INDEX_HTML
        .replace("{{REFRESH}}", &refresh)
        .replace("{{NAME}}", &escape(&view.profile.name))
        .replace("{{INITIAL}}", &escape(&view.profile.initial().to_string()))
        .replace("{{STREAK}}", &view.profile.streak_days.to_string())
        .replace("{{SCORE}}", &score.to_string())
        .replace("{{SCORE_WIDTH}}", &score.clamp(0, 100).to_string())
        .replace("{{STATUS}}", view.status.label)
        .replace("{{STATUS_CLASS}}", view.status.tier.css_class())
        .replace("{{LAST_CHECK_IN}}", &view.profile.last_check_in.to_string())
        .replace("{{TREND}}", &render_trend(&view.moods))
        .replace("{{CHECK_IN}}", &check_in)
        .replace("{{RECOMMENDATIONS}}", &render_recommendations(view))
        .replace("{{RESOURCES}}", &render_resources(view))
        .replace("{{YEAR}}", &year.to_string())
}

fn render_trend(moods: &[MoodSample]) -> String {
    let mut out = String::new();
    for sample in moods {
        let height = u32::from(sample.value.value()) * 20;
        let _ = write!(
            out,
            r#"<div class="bar" title="{label}: {value}"><span style="height: {height}%"></span><small>{label}</small></div>"#,
            label = escape(&sample.label),
            value = sample.value.value(),
        );
    }
    out
}

fn render_picker(selected: Option<MoodLevel>) -> String {
    let mut out = String::from(r#"<div class="moods">"#);
    for level in MoodLevel::ALL {
        let class = if selected == Some(level) {
            "mood selected"
        } else {
            "mood"
        };
        let _ = write!(
            out,
            r#"<form method="post" action="/mood/select"><input type="hidden" name="value" value="{value}" /><button class="{class}" type="submit">{label}</button></form>"#,
            value = level.value(),
            label = level.label(),
        );
    }
    out.push_str("</div>");

    let disabled = if selected.is_none() { " disabled" } else { "" };
    let _ = write!(
        out,
        r#"<form method="post" action="/checkin"><button class="submit" type="submit"{disabled}>Submit Check-in</button></form>"#
    );
    out
}

fn render_recommendations(view: &DashboardResponse) -> String {
    view.recommendations
        .iter()
        .map(|rec| {
            format!(
                r#"<article class="card"><h3>{}</h3><p>{}</p></article>"#,
                escape(rec.title),
                escape(rec.description)
            )
        })
        .collect()
}

fn render_resources(view: &DashboardResponse) -> String {
    let mut out = String::new();
    for group in &view.resources {
        let _ = write!(out, r#"<div class="resource"><h3>{}</h3><ul>"#, escape(group.title));
        for item in group.items {
            let _ = write!(out, "<li>{}</li>", escape(item));
        }
        out.push_str("</ul></div>");
    }
    out
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const NOTICE_HTML: &str = r#"<div class="notice">
        <strong>Thank you for your check-in!</strong>
        <p>Your response has been recorded.</p>
      </div>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH}}
  <title>Wellness Tracker</title>
  <style>
    :root {
      --bg: #eef4f7;
      --ink: #23313a;
      --muted: #6b7a84;
      --primary: #3b82a0;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(35, 49, 58, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: linear-gradient(180deg, var(--bg), #f8fbfc);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    header, main, footer {
      width: min(1100px, 100%);
      margin: 0 auto;
      padding: 18px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .streak {
      background: #d9ecf2;
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.8rem;
    }

    .avatar {
      width: 40px;
      height: 40px;
      border-radius: 50%;
      background: var(--primary);
      color: white;
      display: inline-grid;
      place-items: center;
      font-weight: 600;
      margin-left: 12px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 18px;
      margin-bottom: 28px;
    }

    .card, .panel {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .score {
      font-size: 2rem;
      font-weight: 700;
    }

    .meter {
      height: 10px;
      border-radius: 999px;
      background: #e3eaee;
      overflow: hidden;
    }

    .meter span {
      display: block;
      height: 100%;
      background: var(--primary);
    }

    .tier-excellent { color: #1f9d55; }
    .tier-good { color: #3b82a0; }
    .tier-fair { color: #c98a12; }
    .tier-attention { color: #c0392b; }

    .trend {
      display: flex;
      align-items: flex-end;
      gap: 6px;
      height: 90px;
    }

    .bar {
      flex: 1;
      height: 100%;
      display: flex;
      flex-direction: column;
      justify-content: flex-end;
      align-items: center;
    }

    .bar span {
      width: 100%;
      background: var(--primary);
      border-radius: 6px 6px 0 0;
    }

    .bar small {
      color: var(--muted);
      font-size: 0.7rem;
    }

    .moods {
      display: flex;
      justify-content: space-between;
      gap: 8px;
      margin: 20px 0;
    }

    button {
      border: 1px solid #cfdbe1;
      background: white;
      border-radius: 999px;
      padding: 10px 16px;
      cursor: pointer;
    }

    .mood.selected {
      background: #d9ecf2;
      border-color: var(--primary);
    }

    .submit {
      width: 100%;
      background: var(--primary);
      color: white;
    }

    .submit[disabled] {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .notice {
      background: rgba(31, 157, 85, 0.1);
      border: 1px solid rgba(31, 157, 85, 0.2);
      border-radius: 12px;
      padding: 16px;
      text-align: center;
      color: #1f9d55;
    }

    .resources {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    footer {
      text-align: center;
      color: var(--muted);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <header>
    <h1>Wellness Tracker</h1>
    <div>
      <span class="streak">{{STREAK}} day streak</span>
      <span class="avatar" title="{{NAME}}">{{INITIAL}}</span>
    </div>
  </header>

  <main>
    <section class="grid">
      <div class="card">
        <h2>Wellness Status</h2>
        <div><span id="score" class="score">{{SCORE}}</span> / 100</div>
        <p id="status" class="{{STATUS_CLASS}}">{{STATUS}}</p>
        <div class="meter"><span style="width: {{SCORE_WIDTH}}%"></span></div>
      </div>
      <div class="card">
        <h2>Last Check-in</h2>
        <p id="last-check-in">{{LAST_CHECK_IN}}</p>
        <p>You've been consistent with your check-ins!</p>
      </div>
      <div class="card">
        <h2>Weekly Mood Trend</h2>
        <div id="trend" class="trend">{{TREND}}</div>
      </div>
    </section>

    <section class="panel">
      <h2>How are you feeling today?</h2>
      <p>Your daily check-in helps us understand your emotional state and provide better support.</p>
      {{CHECK_IN}}
    </section>

    <h2>Personalized Wellness Recommendations</h2>
    <section class="grid">{{RECOMMENDATIONS}}</section>

    <section class="panel">
      <h2>Wellness Resources</h2>
      <p>Access tools and strategies to support your mental health journey</p>
      <div class="resources">{{RESOURCES}}</div>
    </section>
  </main>

  <footer>
    &copy; {{YEAR}} Student Wellness Platform. Your mental health matters.
  </footer>
</body>
</html>
"#;
