/// Paths crawlers are asked to skip.
const DISALLOWED: &[&str] = &["/api/", "/_next/", "/admin/", "/private/"];

/// Renders `robots.txt`: allow everything except the API and private paths,
/// and point crawlers at the sitemap.
pub fn render(base_url: &str) -> String {
    let mut body = format!(
        "User-agent: *\nAllow: /\n\n# Sitemap\nSitemap: {base_url}/sitemap.xml\n\n# Optimization for search engines\nCrawl-delay: 1\n\n# Block common bot traps\n"
    );
    let disallow: Vec<String> = DISALLOWED
        .iter()
        .map(|path| format!("Disallow: {path}"))
        .collect();
    body.push_str(&disallow.join("\n"));
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_at_sitemap() {
        let body = render("https://alex.example");
        assert!(body.starts_with("User-agent: *\nAllow: /\n"));
        assert!(body.contains("Sitemap: https://alex.example/sitemap.xml"));
        assert!(body.contains("Crawl-delay: 1"));
    }

    #[test]
    fn test_disallows_api_and_private_paths() {
        let body = render("https://alex.example");
        let disallowed: Vec<_> = body
            .lines()
            .filter_map(|line| line.strip_prefix("Disallow: "))
            .collect();
        assert_eq!(disallowed, vec!["/api/", "/_next/", "/admin/", "/private/"]);
        assert!(body.ends_with("Disallow: /private/"));
    }
}
