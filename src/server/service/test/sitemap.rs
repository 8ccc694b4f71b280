use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::service::sitemap::SitemapService;

const BASE_URL: &str = "https://clinic.example.com";

/// Tests that the sitemap carries the static pages plus slug-keyed
/// treatment and id-keyed team entries.
#[tokio::test]
async fn sitemap_lists_static_and_dynamic_pages() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    factory::treatment::create_treatment_with_slug(db, "spine-stabilization").await?;
    let member = factory::team_member::create_team_member(db).await?;
    let news = factory::news::create_news(db).await?;

    let xml = SitemapService::new(db).build_sitemap(BASE_URL).await.unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.ends_with("</urlset>"));

    // Static pages.
    assert!(xml.contains(&format!("<loc>{BASE_URL}/</loc>")));
    assert!(xml.contains(&format!("<loc>{BASE_URL}/about</loc>")));
    assert!(xml.contains(&format!("<loc>{BASE_URL}/faq</loc>")));

    // Treatments are slug-keyed, everything else id-keyed.
    assert!(xml.contains(&format!("<loc>{BASE_URL}/treatments/spine-stabilization</loc>")));
    assert!(xml.contains(&format!("<loc>{BASE_URL}/team/{}</loc>", member.id)));
    assert!(xml.contains(&format!("<loc>{BASE_URL}/news/{}</loc>", news.id)));

    Ok(())
}

/// Tests that an empty database still produces the static skeleton.
#[tokio::test]
async fn sitemap_works_with_empty_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let db = test.db.as_ref().unwrap();

    let xml = SitemapService::new(db).build_sitemap(BASE_URL).await.unwrap();

    assert!(xml.contains(&format!("<loc>{BASE_URL}/contact</loc>")));
    assert!(!xml.contains("/treatments/spine"));

    Ok(())
}

/// Tests the robots document content.
#[test]
fn robots_advertises_sitemap_and_blocks_admin() {
    let robots = SitemapService::build_robots(BASE_URL);

    assert!(robots.contains("User-agent: *"));
    assert!(robots.contains(&format!("Sitemap: {BASE_URL}/sitemap.xml")));
    assert!(robots.contains("Disallow: /admin"));
    assert!(robots.contains("Disallow: /api"));
}
