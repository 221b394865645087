//! Server-rendered dashboard page
//!
//! Tables and tip lists are plain HTML. Maps and charts are emitted as
//! placeholders carrying their model as a JSON data attribute; the inline
//! script hands them to Leaflet and Plotly.

use std::fmt::Write;

use serde::Serialize;

use crate::views::chart::Table;
use crate::views::{
    FootfallCharts, MapView, Panel, RenderedView, Selector, ServiceListing, StateGuide, TipSection,
    View,
};

pub const PAGE_TITLE: &str = "Indian Tourism Explorer";
pub const FOOTER: &str = "Made with ❤️ for Indian Tourism";

const HEAD_ASSETS: &str = r#"<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>"#;

const STYLE: &str = r#"<style>
body { margin: 0; font-family: sans-serif; display: flex; }
nav { width: 14rem; min-height: 100vh; padding: 1rem; background: #f0f2f6; }
nav a { display: block; padding: 0.4rem 0.6rem; color: inherit; text-decoration: none; border-radius: 0.3rem; }
nav a.current { background: #ff4b4b; color: white; }
main { flex: 1; padding: 2rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 0.4rem; text-align: left; }
.columns { display: flex; gap: 2rem; }
.columns > div { flex: 1; }
.chart { width: 100%; height: 450px; }
#map { width: 100%; height: 600px; }
.empty { padding: 1rem; background: #fff8e1; border-radius: 0.3rem; }
</style>"#;

const SCRIPT: &str = r#"<script>
function drawMap(el) {
  const m = JSON.parse(el.dataset.map);
  const map = L.map(el).setView([m.center.latitude, m.center.longitude], m.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {attribution: '&copy; OpenStreetMap contributors'}).addTo(map);
  const places = m.cluster_places ? L.markerClusterGroup().addTo(map) : map;
  m.places.forEach(p => L.marker([p.position.latitude, p.position.longitude])
    .bindPopup(p.popup, {maxWidth: m.popup_max_width}).bindTooltip(p.tooltip).addTo(places));
  m.warnings.forEach(w => L.circleMarker([w.position.latitude, w.position.longitude],
    {radius: w.radius, color: w.color, fill: w.fill}).bindPopup(w.popup).addTo(map));
}
function drawChart(el) {
  const c = JSON.parse(el.dataset.chart);
  const axes = {xaxis: {title: c.x_label}, yaxis: {title: c.y_label}};
  switch (el.dataset.kind) {
    case 'bar':
      Plotly.newPlot(el, c.series.map(s => ({type: 'bar', name: s.name, x: c.categories, y: s.values})),
        Object.assign({title: c.title, barmode: 'group'}, axes), {responsive: true});
      break;
    case 'line':
      Plotly.newPlot(el, c.series.map(s => ({type: 'scatter', mode: 'lines', name: s.name, x: s.x, y: s.y})),
        Object.assign({title: c.title}, axes), {responsive: true});
      break;
    case 'pie':
      Plotly.newPlot(el, [{type: 'pie', labels: c.slices.map(s => s.label), values: c.slices.map(s => s.value)}],
        {title: c.title}, {responsive: true});
      break;
    case 'histogram':
      Plotly.newPlot(el, [{type: 'bar', x: c.buckets.map(b => (b.start + b.end) / 2),
        y: c.buckets.map(b => b.count), width: c.buckets.map(b => b.end - b.start)}],
        {title: c.title, xaxis: {title: c.x_label}, yaxis: {title: 'count'}, bargap: 0}, {responsive: true});
      break;
  }
}
document.querySelectorAll('#map').forEach(drawMap);
document.querySelectorAll('.chart').forEach(drawChart);
</script>"#;

/// Escape text for use in HTML content and quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the whole dashboard page around one view
pub fn render_page(rendered: &RenderedView) -> serde_json::Result<String> {
    let view = rendered.view();
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape(view.heading()));
    if let Some(intro) = view.intro() {
        let _ = writeln!(body, "<p>{}</p>", escape(intro));
    }

    match rendered {
        RenderedView::Map(map) => body.push_str(&map_section(map)?),
        RenderedView::Footfall(footfall) => {
            body.push_str(&selector_form(view, &footfall.selector));
            body.push_str(&panel(&footfall.body, footfall_section)?);
        }
        RenderedView::Scams(scams) => {
            body.push_str(&table(&scams.table));
            body.push_str(&chart("pie", &scams.severity)?);
        }
        RenderedView::Services(services) => {
            body.push_str(&selector_form(view, &services.selector));
            body.push_str(&panel(&services.body, services_section)?);
        }
        RenderedView::Tips(tips) => {
            body.push_str(&selector_form(view, &tips.selector));
            body.push_str(&panel(&tips.body, |guide| Ok(tips_section(guide)))?);
        }
    }

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n{HEAD_ASSETS}\n{STYLE}\n</head>\n<body>\n{nav}<main>\n{body}\
         <hr>\n<p>{footer}</p>\n</main>\n{SCRIPT}\n</body>\n</html>\n",
        title = escape(PAGE_TITLE),
        nav = navigation(view),
        footer = escape(FOOTER),
    ))
}

fn navigation(current: View) -> String {
    let mut nav = String::from("<nav>\n<h2>Navigation</h2>\n");
    for view in View::ALL {
        let class = if view == current { " class=\"current\"" } else { "" };
        let _ = writeln!(
            nav,
            "<a href=\"/{}\"{class}>{}</a>",
            view.slug(),
            escape(view.label())
        );
    }
    nav.push_str("</nav>\n");
    nav
}

fn selector_form(view: View, selector: &Selector) -> String {
    let mut form = format!(
        "<form method=\"get\" action=\"/{}\">\n<label>{} <select name=\"{}\" onchange=\"this.form.submit()\">\n",
        view.slug(),
        escape(&selector.label),
        escape(&selector.name)
    );
    for option in &selector.options {
        let selected = if selector.selected.as_ref() == Some(option) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            form,
            "<option value=\"{0}\"{selected}>{0}</option>",
            escape(option)
        );
    }
    form.push_str("</select></label>\n<noscript><button type=\"submit\">Show</button></noscript>\n</form>\n");
    form
}

fn panel<T>(
    panel: &Panel<T>,
    section: impl FnOnce(&T) -> serde_json::Result<String>,
) -> serde_json::Result<String> {
    match panel {
        Panel::Ready(content) => section(content),
        Panel::Empty(empty) => Ok(format!(
            "<div class=\"empty\">{}</div>\n",
            escape(&empty.message())
        )),
    }
}

fn map_section(map: &MapView) -> serde_json::Result<String> {
    Ok(format!(
        "<div id=\"map\" data-map=\"{}\"></div>\n",
        escape(&serde_json::to_string(map)?)
    ))
}

fn chart<T: Serialize>(kind: &str, model: &T) -> serde_json::Result<String> {
    Ok(format!(
        "<div class=\"chart\" data-kind=\"{kind}\" data-chart=\"{}\"></div>\n",
        escape(&serde_json::to_string(model)?)
    ))
}

fn table(table: &Table) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    for column in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn footfall_section(charts: &FootfallCharts) -> serde_json::Result<String> {
    Ok(chart("bar", &charts.by_state)? + &chart("line", &charts.trend)?)
}

fn services_section(listing: &ServiceListing) -> serde_json::Result<String> {
    let mut html = table(&listing.table);
    if listing.table.is_empty() {
        html.push_str("<div class=\"empty\">No services listed for this region</div>\n");
    }
    html.push_str(&chart("histogram", &listing.ratings)?);
    Ok(html)
}

fn tip_list(section: &TipSection) -> String {
    let mut html = format!("<h3>{}</h3>\n<ul style=\"list-style: none\">\n", escape(&section.heading));
    for item in &section.items {
        let _ = writeln!(html, "<li>{} {}</li>", escape(&section.marker), escape(item));
    }
    html.push_str("</ul>\n");
    html
}

fn tips_section(guide: &StateGuide) -> String {
    let column = |sections: &[TipSection]| sections.iter().map(tip_list).collect::<String>();
    format!(
        "<div class=\"columns\">\n<div>\n{}</div>\n<div>\n{}</div>\n</div>\n{}",
        column(&guide.left),
        column(&guide.right),
        tip_list(&guide.foods)
    )
}
