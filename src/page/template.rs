//! The 404 page template and the "All sites" dialog.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::domain::loading::{INITIAL_TEXT, STEP_INTERVAL_MS};
use crate::domain::{DirectoryView, Domain, LoadingTimeline, RequestId};
use crate::error::PageError;

/// Message shown when a search matches nothing.
pub const NO_MATCHES_TEXT: &str = "No matching sites found";

/// JSON directory query the search box calls on every keystroke.
pub const DIRECTORY_QUERY_URL: &str = "/api/v1/domains?q=";

/// Reasons listed under the fake `GET` request line.
const REASONS: [&str; 4] = [
    "The page was moved or deleted",
    "You mistyped the URL",
    "We're still building this feature",
    "The universe is conspiring against you",
];

const STYLE: &str = r"
*{box-sizing:border-box}
body{margin:0;min-height:100svh;display:flex;align-items:center;justify-content:center;padding:.5rem;
font-family:ui-sans-serif,system-ui,sans-serif;color:#cbd5e1;
background:linear-gradient(to bottom right,#0f172a,#3b0764,#0f172a)}
main{max-width:28rem;width:100%}
h1{font-size:3.75rem;font-weight:800;text-align:center;margin:0 0 .5rem;
background:linear-gradient(to right,#38bdf8,#a855f7);-webkit-background-clip:text;background-clip:text;color:transparent}
.rid{text-align:center;font-size:.875rem;color:#94a3b8;margin-bottom:1.5rem}
.card{background:rgba(0,0,0,.4);border-radius:.75rem;box-shadow:0 25px 50px -12px rgba(0,0,0,.5);backdrop-filter:blur(12px)}
.card header,.card section{padding:1.25rem 1.5rem}
.card footer{padding:1rem 1.5rem;border-top:1px solid #1e293b;display:flex;justify-content:space-between;font-size:.75rem;color:#64748b}
.title{display:flex;justify-content:space-between;color:#38bdf8;font-size:1.25rem;font-weight:600}
.spin{display:inline-block;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.status{display:flex;justify-content:space-between;font-size:.75rem;color:#94a3b8}
.pct{color:#38bdf8;font-family:ui-monospace,monospace}
.track{height:.375rem;border-radius:9999px;background:#1e293b;margin-top:.5rem;overflow:hidden}
.bar{height:100%;width:0;background:linear-gradient(to right,#38bdf8,#a855f7)}
.request{border-left:2px solid rgba(14,165,233,.5);padding-left:.75rem;margin-top:1rem;font-size:.875rem}
.request code{background:rgba(30,41,59,.5);padding:0 .25rem;border-radius:.25rem}
.request ul{font-size:.75rem;color:#94a3b8}
.fact{background:rgba(30,41,59,.3);border-radius:.375rem;padding:.75rem;margin-top:.5rem;font-size:.75rem}
.fact strong{display:block;color:#cbd5e1;margin-bottom:.25rem}
button.link{background:none;border:0;color:#c084fc;font-size:.75rem;cursor:pointer}
dialog{max-width:600px;width:100%;max-height:85vh;background:rgba(0,0,0,.8);color:#cbd5e1;border:1px solid #1e293b;border-radius:.75rem}
dialog::backdrop{background:rgba(0,0,0,.6)}
dialog h2{color:#38bdf8;margin:0}
dialog input{width:100%;padding:.5rem .75rem;margin:.75rem 0;background:rgba(30,41,59,.5);color:#cbd5e1;border:1px solid #334155;border-radius:.375rem}
dialog h3{font-size:.75rem;text-transform:uppercase;color:#64748b;margin:.5rem 0}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:.5rem}
.site{display:flex;align-items:center;gap:.5rem;padding:.5rem;border:1px solid #1e293b;border-radius:.375rem;color:inherit;text-decoration:none}
.site:hover{background:rgba(30,41,59,.7)}
.site.pinned{border-color:rgba(12,74,110,.3);background:rgba(8,47,73,.2)}
.avatar{width:2rem;height:2rem;border-radius:9999px;display:flex;align-items:center;justify-content:center;border:1px solid #334155}
.site small{display:block;color:#64748b;font-size:.75rem;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.empty{padding:2rem 0;text-align:center;color:#64748b}
[hidden]{display:none!important}
";

/// Steps the progress bar, wires the dialog buttons and re-filters the
/// directory as the user types. The search form still submits normally
/// when scripts are disabled.
const SCRIPT: &str = r"
(function () {
  var timeline = JSON.parse(document.getElementById('timeline').textContent);
  var bar = document.getElementById('bar'), pct = document.getElementById('pct');
  var txt = document.getElementById('status'), spin = document.getElementById('spinner');
  var step = Number(bar.dataset.step), progress = 0;
  function tick() {
    progress += 1;
    timeline.forEach(function (c) { if (c.progress === progress) { txt.textContent = c.text; } });
    bar.style.width = progress + '%';
    pct.textContent = progress + '%';
    if (progress < 100) { setTimeout(tick, step); } else { spin.classList.remove('spin'); }
  }
  setTimeout(tick, step);

  var dialog = document.getElementById('sites');
  document.getElementById('open-sites').addEventListener('click', function () { dialog.showModal(); });
  document.getElementById('close-sites').addEventListener('click', function () { dialog.close(); });

  var search = document.getElementById('site-search');
  var pinnedSection = document.getElementById('pinned-section');
  var pinnedGrid = document.getElementById('pinned-grid');
  var heading = document.getElementById('results-heading');
  var results = document.getElementById('results');
  var empty = document.getElementById('no-matches');

  function card(d, highlight, marked) {
    var a = document.createElement('a');
    a.className = highlight ? 'site pinned' : 'site';
    a.href = d.url;
    a.target = '_blank';
    a.rel = 'noopener noreferrer';
    var avatar = document.createElement('span');
    avatar.className = 'avatar';
    avatar.textContent = d.initial;
    var label = document.createElement('span');
    label.textContent = d.name;
    if (marked) {
      var pin = document.createElement('span');
      pin.className = 'pin';
      pin.title = 'Pinned';
      pin.textContent = ' \u{1F4CC}';
      label.appendChild(pin);
    }
    var url = document.createElement('small');
    url.textContent = d.url;
    label.appendChild(url);
    a.appendChild(avatar);
    a.appendChild(label);
    return a;
  }

  function fill(grid, domains, highlight, searching) {
    grid.replaceChildren.apply(grid, domains.map(function (d) {
      return card(d, highlight, highlight || (searching && d.pinned));
    }));
  }

  var latest = 0;
  function refresh() {
    var ticket = ++latest;
    fetch(search.dataset.endpoint + encodeURIComponent(search.value), { headers: { Accept: 'application/json' } })
      .then(function (r) { return r.json(); })
      .then(function (view) {
        if (ticket !== latest) { return; }
        fill(pinnedGrid, view.pinned, true, view.searching);
        pinnedSection.hidden = view.pinned.length === 0;
        heading.textContent = view.heading;
        fill(results, view.main, false, view.searching);
        results.hidden = !view.has_results;
        empty.hidden = view.has_results;
      })
      .catch(function () {});
  }

  search.addEventListener('input', refresh);
  search.form.addEventListener('submit', function (e) { e.preventDefault(); refresh(); });
})();
";

/// Everything the template needs for one response.
#[derive(Debug)]
pub struct PageContext<'a> {
    /// Apex domain named in the copy.
    pub site_name: &'a str,
    /// Identifier shown under the heading.
    pub request_id: &'a RequestId,
    /// Fun fact, or `None` to omit the section.
    pub fun_fact: Option<&'a str>,
    /// Directory sections for the current search term.
    pub view: &'a DirectoryView<'a>,
    /// Progress bar status timeline.
    pub timeline: &'a LoadingTimeline,
    /// Year shown in the footer.
    pub year: i32,
}

/// Renders the complete HTML document.
///
/// # Errors
///
/// Returns [`PageError::Internal`] if the loading timeline cannot be
/// serialized for the inline script.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String, PageError> {
    let timeline = timeline_json(ctx.timeline)?;
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { "404 | " (ctx.site_name) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                main {
                    h1 { "404" }
                    p class="rid" { "Request ID: " (ctx.request_id.as_str()) }
                    div class="card" {
                        header {
                            div class="title" {
                                span { "Page Not Found" }
                                span id="spinner" class="spin" { "↻" }
                            }
                            p {
                                "We've thoroughly scanned "
                                strong { "*." (ctx.site_name) }
                                " and couldn't locate this page."
                            }
                        }
                        section {
                            div class="status" {
                                span id="status" { (INITIAL_TEXT) }
                                span id="pct" class="pct" { "0%" }
                            }
                            div class="track" {
                                div id="bar" class="bar" data-step=(STEP_INTERVAL_MS) {}
                            }
                            div class="request" {
                                code { "GET" }
                                " request to this endpoint returned "
                                strong { "404" }
                                ". This could be because:"
                                ul {
                                    @for reason in REASONS {
                                        li { (reason) }
                                    }
                                }
                            }
                            @if let Some(fact) = ctx.fun_fact {
                                div class="fact" {
                                    strong { "Fun Fact" }
                                    (fact)
                                }
                            }
                        }
                        footer {
                            span { "© " (ctx.year) " " (ctx.site_name) }
                            button id="open-sites" class="link" type="button" { "🌐 All sites" }
                        }
                    }
                }
                (sites_dialog(ctx.site_name, ctx.view))
                script id="timeline" type="application/json" { (PreEscaped(timeline)) }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };
    Ok(markup.into_string())
}

/// The "All sites" dialog, opened up front while a search is active.
///
/// Both sections and the no-match message are always present so the
/// live search can refill them; empty ones carry `hidden`.
fn sites_dialog(site_name: &str, view: &DirectoryView<'_>) -> Markup {
    html! {
        dialog id="sites" open[view.is_searching()] {
            h2 { "Available " (site_name) " Sites" }
            p { "Browse all available subdomains on " (site_name) }
            form method="get" {
                input id="site-search" type="search" name="q" placeholder="Search sites..."
                    value=(view.search) autocomplete="off" data-endpoint=(DIRECTORY_QUERY_URL);
            }
            section id="pinned-section" hidden[view.pinned.is_empty()] {
                h3 { "📌 Pinned Sites" }
                div id="pinned-grid" class="grid" {
                    @for domain in &view.pinned {
                        (site_card(domain, true, true))
                    }
                }
            }
            h3 id="results-heading" { (view.heading()) }
            div id="results" class="grid" hidden[!view.has_results] {
                @for domain in &view.main {
                    (site_card(domain, false, view.marks_pinned(domain)))
                }
            }
            div id="no-matches" class="empty" hidden[view.has_results] {
                p { (NO_MATCHES_TEXT) }
            }
            button id="close-sites" class="link" type="button" { "Close" }
        }
    }
}

/// One link card. `highlight` styles it for the pinned section and
/// `marked` adds the pin glyph.
fn site_card(domain: &Domain, highlight: bool, marked: bool) -> Markup {
    html! {
        a class=(if highlight { "site pinned" } else { "site" }) href=(domain.url)
            target="_blank" rel="noopener noreferrer" {
            span class="avatar" { (domain.initial()) }
            span {
                (domain.name)
                @if marked {
                    span class="pin" title="Pinned" { " 📌" }
                }
                small { (domain.url) }
            }
        }
    }
}

/// Serializes the timeline checkpoints for the `application/json` script
/// element. `</` is escaped so message text cannot close the element.
fn timeline_json(timeline: &LoadingTimeline) -> Result<String, PageError> {
    let json = serde_json::to_string(&timeline.checkpoints()).map_err(|e| {
        PageError::Internal(format!("failed to serialize loading timeline: {e}"))
    })?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::DomainDirectory;

    fn directory() -> DomainDirectory {
        DomainDirectory::initialize(vec![
            Domain::new("Zeta", "https://z.o-d.dev"),
            Domain::new("Alpha", "https://a.o-d.dev").pinned(),
            Domain::new("beta", "https://b.o-d.dev"),
        ])
    }

    fn render(term: &str, fun_fact: Option<&str>) -> String {
        let dir = directory();
        let view = dir.view(term);
        let request_id = RequestId::generate(&mut rand::thread_rng());
        let timeline = LoadingTimeline::new(vec!["Asking the hamsters...".to_string()]);
        let Ok(html) = render_page(&PageContext {
            site_name: "o-d.dev",
            request_id: &request_id,
            fun_fact,
            view: &view,
            timeline: &timeline,
            year: 2026,
        }) else {
            panic!("page should render");
        };
        html
    }

    #[test]
    fn without_search_has_pinned_section_and_closed_dialog() {
        let html = render("", None);
        assert!(html.contains("<section id=\"pinned-section\">"));
        assert!(html.contains("Pinned Sites"));
        assert!(html.contains("<h3 id=\"results-heading\">All Sites</h3>"));
        assert!(html.contains("<dialog id=\"sites\">"));
        assert_eq!(html.matches("href=\"https://a.o-d.dev\"").count(), 1);
        assert!(html.contains("© 2026 o-d.dev"));
    }

    #[test]
    fn search_opens_dialog_and_hides_pinned_section() {
        let html = render("a", None);
        assert!(html.contains("<section id=\"pinned-section\" hidden>"));
        assert!(!html.contains("class=\"site pinned\""));
        assert!(html.contains("<h3 id=\"results-heading\">Search Results</h3>"));
        assert!(html.contains("<dialog id=\"sites\" open>"));
        assert_eq!(html.matches("class=\"pin\"").count(), 1);
        assert!(html.contains("value=\"a\""));
    }

    #[test]
    fn no_matches_message() {
        let html = render("xyz", None);
        assert!(html.contains(NO_MATCHES_TEXT));
        assert!(html.contains("<div id=\"no-matches\" class=\"empty\">"));
        assert!(html.contains("<div id=\"results\" class=\"grid\" hidden>"));
        assert!(!html.contains("class=\"site"));
    }

    #[test]
    fn no_matches_message_hidden_when_results_exist() {
        let html = render("", None);
        assert!(html.contains("<div id=\"no-matches\" class=\"empty\" hidden>"));
        assert!(html.contains("<div id=\"results\" class=\"grid\">"));
    }

    #[test]
    fn search_term_and_fact_are_escaped() {
        let html = render("\"><script>", Some("1 < 2 & 3 > 2"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
        assert!(html.contains("Fun Fact"));
    }

    #[test]
    fn domain_fields_are_escaped() {
        let dir = DomainDirectory::initialize(vec![Domain::new(
            "<b>bold</b>",
            "https://x.o-d.dev/?a=1&b=\"2\"",
        )]);
        let view = dir.view("");
        let request_id = RequestId::generate(&mut rand::thread_rng());
        let timeline = LoadingTimeline::new(Vec::new());
        let Ok(html) = render_page(&PageContext {
            site_name: "o-d.dev",
            request_id: &request_id,
            fun_fact: None,
            view: &view,
            timeline: &timeline,
            year: 2026,
        }) else {
            panic!("page should render");
        };
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("href=\"https://x.o-d.dev/?a=1&amp;b=&quot;2&quot;\""));
        assert!(!html.contains("<b>bold"));
    }

    #[test]
    fn fun_fact_section_omitted_when_absent() {
        assert!(!render("", None).contains("Fun Fact"));
    }

    #[test]
    fn script_embeds_timeline() {
        let html = render("", None);
        assert!(html.contains("<script id=\"timeline\" type=\"application/json\">"));
        assert!(html.contains("Asking the hamsters..."));
        assert!(html.contains("data-step=\"30\""));
    }

    #[test]
    fn search_box_refilters_on_input() {
        let html = render("", None);
        assert!(html.contains("data-endpoint=\"/api/v1/domains?q=\""));
        assert!(html.contains("search.addEventListener('input', refresh)"));
        assert!(html.contains("fetch(search.dataset.endpoint + encodeURIComponent(search.value)"));
        assert!(html.contains("<form method=\"get\">"));
        assert!(html.contains("name=\"q\""));
    }

    #[test]
    fn timeline_json_cannot_close_the_script_element() {
        let timeline = LoadingTimeline::new(vec!["</script><b>".to_string()]);
        let Ok(json) = timeline_json(&timeline) else {
            panic!("timeline should serialize");
        };
        assert!(!json.contains("</"));
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
            panic!("escaped timeline is still valid JSON");
        };
        let Some(checkpoints) = value.as_array() else {
            panic!("checkpoints array expected");
        };
        assert!(
            checkpoints
                .iter()
                .any(|c| c.get("text").and_then(|t| t.as_str()) == Some("</script><b>"))
        );
    }
}
