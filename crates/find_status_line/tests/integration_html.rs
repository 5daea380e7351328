// crates/find_status_line/tests/integration_html.rs

#[cfg(test)]
mod integration_html {
    use find_status_line::{find_status_line, LineSeparator, StatusLineScanner};

    /// Builds a CRLF document from LF-separated source text.
    fn crlf(text: &str) -> String {
        text.lines().collect::<Vec<_>>().join("\r\n")
    }

    fn homepage(flag_markup: &str) -> String {
        crlf(&format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>NH.gov</title>
  <!-- <link rel="stylesheet" href="/css/icon-flag-full.css"> -->
</head>
<body>
  <!--
  <div class="alert">
    <span class="icon-flag full">Old banner</span>
  </div>
  -->
  <ul class="utility">

{flag_markup}
    <li><a href="/contact">Contact</a></li>
  </ul>
</body>
</html>"#
        ))
    }

    /// The active half-mast banner is found behind commented-out markup.
    #[test]
    fn test_half_mast_banner_found() {
        let page = homepage(r#"    <li><a href="/flag"><span class="icon-flag half"></span>Flags at half staff</a></li>"#);
        let line = find_status_line(&page, "icon-flag");
        assert_eq!(
            line,
            r#"    <li><a href="/flag"><span class="icon-flag half"></span>Flags at half staff</a></li>"#
        );
        assert!(!line.contains("full"));
    }

    /// The active full-mast banner is returned untrimmed.
    #[test]
    fn test_full_mast_banner_found() {
        let page = homepage(r#"    <li class="icon-flag full">Flags at full staff</li>  "#);
        assert_eq!(
            find_status_line(&page, "icon-flag"),
            r#"    <li class="icon-flag full">Flags at full staff</li>  "#
        );
    }

    /// When the only banner is commented out, nothing is found.
    #[test]
    fn test_only_commented_banner() {
        let page = homepage("    <li><a href=\"/about\">About</a></li>");
        assert_eq!(find_status_line(&page, "icon-flag"), "");
    }

    /// A page served with LF endings is only readable in universal mode.
    #[test]
    fn test_lf_page_needs_universal_separator() {
        let page = homepage(r#"    <li class="icon-flag half">Half</li>"#).replace("\r\n", "\n");

        // In CRLF mode the whole page is one line that starts with the doctype,
        // and it is returned as a match.
        let crlf_scanner = StatusLineScanner::new("icon-flag");
        assert_eq!(crlf_scanner.scan(&page), Some(page.as_str()));

        let universal = StatusLineScanner::new("icon-flag").separator(LineSeparator::Universal);
        assert_eq!(
            universal.scan(&page),
            Some(r#"    <li class="icon-flag half">Half</li>"#)
        );
    }
}
