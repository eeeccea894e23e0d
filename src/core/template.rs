//! Static parts of the generated page: stylesheet and client-side script.

/// Data rows shown per page by the embedded script.
pub const ROWS_PER_PAGE: usize = 20;

pub const STYLESHEET: &str = r#"
        * { box-sizing: border-box; }
        body {
            font-family: Arial, Helvetica, sans-serif;
            margin: 0;
            padding: 0;
            line-height: 1.5;
            background-color: #f5f7fa;
            color: #333;
        }
        header {
            background-color: #2c3e50;
            color: #ecf0f1;
            padding: 1.5rem 0;
            text-align: center;
        }
        .container {
            max-width: 80%;
            margin: 0 auto;
            padding: 1rem;
        }
        .profile {
            background-color: #ffffff;
            border: 1px solid #e0e6ed;
            border-radius: 6px;
            padding: 1rem 1.25rem;
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .profile h2 { margin-top: 0; }
        .profile ul { list-style: none; padding: 0; margin: 0; }
        .profile li { margin-bottom: 0.5rem; }
        .profile li strong { display: inline-block; width: 130px; }
        .log h2 { margin-top: 0; margin-bottom: 0.5rem; }
        .table-responsive { overflow-x: auto; }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-bottom: 2rem;
        }
        th, td {
            padding: 0.625rem 0.75rem;
            border-bottom: 1px solid #e0e6ed;
            text-align: left;
            white-space: nowrap;
        }
        th {
            background-color: #3498db;
            color: #ffffff;
            position: sticky;
            top: 0;
            z-index: 2;
            cursor: pointer;
        }
        tbody tr:nth-child(even) { background-color: #f9fcff; }
        tbody tr:hover { background-color: #eef5ff; }
        .pagination {
            text-align: center;
            margin-top: 1rem;
            margin-bottom: 2rem;
        }
        .pagination button {
            padding: 0.5rem 1rem;
            margin: 0 0.5rem;
            border: none;
            border-radius: 4px;
            background-color: #3498db;
            color: #ffffff;
            cursor: pointer;
        }
        .pagination button:hover { background-color: #2c3e50; }
        footer {
            text-align: center;
            padding: 1rem;
            font-size: 0.875rem;
            color: #888;
        }
"#;

/// Expects `rowsPerPage` to be declared before it; see `render_page`.
pub const SCRIPT: &str = r#"
        let currentPage = 1;

        function dataRows() {
            return document.getElementById('logTable').tBodies[0].rows;
        }

        function displayRows() {
            const rows = dataRows();
            const total = rows.length;
            const pageCount = Math.max(1, Math.ceil(total / rowsPerPage));
            if (currentPage > pageCount) {
                currentPage = pageCount;
            }
            const start = (currentPage - 1) * rowsPerPage;
            const end = Math.min(start + rowsPerPage, total);
            for (let i = 0; i < total; i++) {
                rows[i].style.display = (i >= start && i < end) ? '' : 'none';
            }
            const first = total === 0 ? 0 : start + 1;
            document.getElementById('pageInfo').innerText =
                '显示第 ' + first + ' 至 ' + end + ' 项结果，共 ' + total + ' 项';
        }

        function nextPage() {
            if (currentPage * rowsPerPage < dataRows().length) {
                currentPage++;
                displayRows();
            }
        }

        function previousPage() {
            if (currentPage > 1) {
                currentPage--;
                displayRows();
            }
        }

        function cellText(row, columnIndex) {
            const cell = row.cells[columnIndex];
            return cell ? cell.textContent.toLowerCase() : '';
        }

        // Bubble sort on the body rows. Ascending first; if the column is
        // already ascending the same click sorts it descending.
        function sortTable(columnIndex) {
            const body = document.getElementById('logTable').tBodies[0];
            let dir = 'asc';
            let swapCount = 0;
            let switching = true;
            while (switching) {
                switching = false;
                const rows = body.rows;
                for (let i = 0; i < rows.length - 1; i++) {
                    const x = cellText(rows[i], columnIndex);
                    const y = cellText(rows[i + 1], columnIndex);
                    if (dir === 'asc' ? x > y : x < y) {
                        body.insertBefore(rows[i + 1], rows[i]);
                        swapCount++;
                        switching = true;
                        break;
                    }
                }
                if (!switching && swapCount === 0 && dir === 'asc') {
                    dir = 'desc';
                    switching = true;
                }
            }
            currentPage = 1;
            displayRows();
        }

        displayRows();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_does_not_hardcode_page_size() {
        assert!(!SCRIPT.contains("const rowsPerPage"));
        assert!(SCRIPT.contains("rowsPerPage"));
    }

    #[test]
    fn test_assets_are_self_contained() {
        for asset in [STYLESHEET, SCRIPT] {
            assert!(!asset.contains("http://"));
            assert!(!asset.contains("https://"));
            assert!(!asset.contains("@import"));
            assert!(!asset.contains("fetch("));
        }
    }

    #[test]
    fn test_stylesheet_rules() {
        assert!(STYLESHEET.contains("white-space: nowrap;"));
        assert!(STYLESHEET.contains("position: sticky;"));
        assert!(STYLESHEET.contains("nth-child(even)"));
        assert!(STYLESHEET.contains("tr:hover"));
    }
}
