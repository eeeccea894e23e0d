use crate::core::template::{ROWS_PER_PAGE, SCRIPT, STYLESHEET};
use crate::domain::model::{LogTable, StationProfile};
use crate::utils::html::escape;

/// Display label for a CSV header.
///
/// Headers such as `日期DATE` get a space before the first ASCII uppercase
/// letter (`日期 DATE`). Headers that already contain a space only have their
/// whitespace collapsed; headers without uppercase letters are left alone.
pub fn prettify_header(header: &str) -> String {
    let header = header.trim();
    if header.contains(' ') {
        return header.split_whitespace().collect::<Vec<_>>().join(" ");
    }

    match header.find(|c: char| c.is_ascii_uppercase()) {
        Some(pos) => {
            let (prefix, abbreviation) = header.split_at(pos);
            let prefix = prefix.trim();
            let abbreviation = abbreviation.trim();
            if prefix.is_empty() {
                abbreviation.to_string()
            } else {
                format!("{} {}", prefix, abbreviation)
            }
        }
        None => header.to_string(),
    }
}

fn render_header_cells(table: &LogTable) -> String {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            format!(
                r#"<th onclick="sortTable({})">{}</th>"#,
                idx,
                escape(&prettify_header(header))
            )
        })
        .collect::<Vec<_>>()
        .join("\n                            ")
}

fn render_body_rows(table: &LogTable) -> String {
    table
        .records()
        .iter()
        .map(|record| {
            let cells: String = record
                .values()
                .map(|value| format!("<td>{}</td>", escape(value)))
                .collect();
            format!("                        <tr>{}</tr>", cells)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_profile_items(profile: &StationProfile) -> String {
    let mut items = vec![
        format!("<li><strong>CALL:</strong> {}</li>", escape(&profile.callsign())),
        format!("<li><strong>CLASS:</strong> {}</li>", escape(profile.license())),
    ];

    let optional = [
        ("OPR", profile.operator()),
        ("QTH", profile.location()),
        ("GRID", profile.grid()),
        ("EMAIL", profile.email()),
    ];
    for (label, value) in optional {
        if !value.is_empty() {
            items.push(format!(
                "<li><strong>{}:</strong> {}</li>",
                label,
                escape(value)
            ));
        }
    }

    items.join("\n                ")
}

/// Builds the complete, self-contained HTML document.
pub fn render_page(profile: &StationProfile, table: &LogTable, year: i32) -> String {
    let callsign = escape(&profile.callsign());
    let profile_items = render_profile_items(profile);
    let header_cells = render_header_cells(table);
    let body_rows = render_body_rows(table);

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>业余无线电台{callsign}通联日志</title>
    <style>{STYLESHEET}    </style>
</head>
<body>
    <header>
        <h1>业余无线电台 {callsign} 通联日志</h1>
    </header>
    <div class="container">
        <section class="profile">
            <h2>个人资料</h2>
            <ul>
                {profile_items}
            </ul>
        </section>
        <section class="log">
            <h2>通联日志</h2>
            <div class="table-responsive">
                <table id="logTable">
                    <thead>
                        <tr>
                            {header_cells}
                        </tr>
                    </thead>
                    <tbody>
{body_rows}
                    </tbody>
                </table>
            </div>
        </section>
        <div class="pagination">
            <button onclick="previousPage()">上页</button>
            <span id="pageInfo"></span>
            <button onclick="nextPage()">下页</button>
        </div>
    </div>
    <footer>
        <p>Copyright © {year} 中国业余无线电台{callsign}</p>
    </footer>
    <script>
        const rowsPerPage = {ROWS_PER_PAGE};{SCRIPT}    </script>
</body>
</html>
"#
    )
}
