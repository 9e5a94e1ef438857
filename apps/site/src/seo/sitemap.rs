use chrono::NaiveDate;

/// (fragment, changefreq, priority) for every section of the page.
const ENTRIES: &[(&str, &str, &str)] = &[
    ("", "monthly", "1.0"),
    ("#about", "monthly", "0.8"),
    ("#experience", "monthly", "0.9"),
    ("#skills", "monthly", "0.8"),
    ("#education", "yearly", "0.7"),
    ("#contact", "monthly", "0.9"),
];

/// Renders `sitemap.xml` for the single page and its section anchors.
pub fn render(base_url: &str, lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d");
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (fragment, changefreq, priority) in ENTRIES {
        xml.push_str(&format!(
            "  <url>\n    <loc>{base_url}{fragment}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
        ));
    }
    xml.push_str("</urlset>");
    xml
}
