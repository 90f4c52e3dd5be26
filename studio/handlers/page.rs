use std::io::Cursor;
use tiny_http::Response;

use decision_canvas::{Architecture, ClassLabel, Demo, PassReport};

use crate::render::{html_escape, render_flash_html, render_page};
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// GET /{demo}
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState, demo: Demo) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let flash   = st.take_flash();
    let slot    = st.slot(demo);
    let session = &slot.session;

    let running      = session.is_fitting();
    let canvas       = session.svg();
    let point_count  = session.points().len();
    let class        = session.current_class();
    let architecture = session.architecture();
    let status       = build_status(demo, running, session.last_report());
    drop(st);

    let class_controls = if demo.is_classifier() { build_class_controls(demo, class, running) } else { String::new() };
    let arch_controls  = if demo == Demo::Neural { build_arch_controls(architecture, running) } else { String::new() };
    let flash_html     = render_flash_html(flash.as_ref());

    crate::routes::html_response(render_page(demo, running, |tmpl| {
        tmpl
            .replace("{{FLASH}}", &flash_html)
            .replace("{{CANVAS}}", &canvas)
            .replace("{{POINT_COUNT}}", &point_count.to_string())
            .replace("{{CLASS_CONTROLS}}", &class_controls)
            .replace("{{ARCH_CONTROLS}}", &arch_controls)
            .replace("{{STATUS}}", &status)
    }))
}

fn build_class_controls(demo: Demo, current: ClassLabel, locked: bool) -> String {
    let disabled = if locked { " disabled" } else { "" };
    let buttons: String = ClassLabel::ALL.iter().map(|&label| {
        let active = if label == current { " active" } else { "" };
        format!(
            r#"<button class="btn btn-{name}{active}" name="class" value="{name}"{disabled}>{name}</button>"#,
            name = label.as_str(),
        )
    }).collect();
    format!(
        r#"<form method="post" action="/{slug}/class" class="control-row"><span class="lbl">Class</span>{buttons}</form>"#,
        slug = demo.slug(),
    )
}

fn build_arch_controls(current: Architecture, locked: bool) -> String {
    let disabled = if locked { " disabled" } else { "" };
    let buttons: String = Architecture::ALL.iter().map(|&arch| {
        let active = if arch == current { " active" } else { "" };
        format!(
            r#"<button class="btn btn-secondary{active}" name="layers" value="{n}"{disabled}>{label}</button>"#,
            n = arch.hidden_layers(),
            label = html_escape(&arch.to_string()),
        )
    }).collect();
    format!(
        r#"<form method="post" action="/neural/architecture" class="control-row"><span class="lbl">Network</span>{buttons}</form>"#,
    )
}

fn build_status(demo: Demo, running: bool, last: Option<&PassReport>) -> String {
    let state = if running { "Fitting" } else { "Idle" };
    let pass  = last.map_or(0, |r| r.stats.pass);
    let loss  = last
        .and_then(|r| r.stats.mean_loss)
        .map(|l| format!("{:.6}", l))
        .unwrap_or_else(|| "n/a".into());

    let mut html = format!(
        r#"<div class="arch-row"><span class="ar-lbl">State</span><span class="ar-val" id="fit-state">{state}</span></div>
           <div class="arch-row"><span class="ar-lbl">Pass</span><span class="ar-val" id="fit-pass">{pass}</span></div>
           <div class="arch-row"><span class="ar-lbl">Mean loss</span><span class="ar-val" id="fit-loss">{loss}</span></div>"#,
    );

    match demo {
        Demo::Linear => {
            let line = last
                .and_then(|r| r.line)
                .map(|l| format!("y = {:.3}x + {:.3}", l.slope, l.intercept))
                .unwrap_or_else(|| "n/a".into());
            html.push_str(&format!(
                r#"<div class="arch-row"><span class="ar-lbl">Line</span><span class="ar-val" id="fit-line">{line}</span></div>"#,
            ));
        }
        Demo::Neural => html.push_str(r#"<p class="hint">Loss is not tracked for this demo; watch the mask.</p>"#),
        Demo::Logistic => {}
    }

    html
}
