//! Search-engine discovery documents.
//!
//! The sitemap lists a fixed set of static pages plus one entry per content
//! record: treatments are keyed by slug, everything else by id. Robots.txt
//! is static apart from the sitemap URL.

use std::fmt::Write;

use sea_orm::DatabaseConnection;

use crate::server::{data::content::ContentRepository, error::AppError};

/// Static pages with their priority and change frequency.
const STATIC_PAGES: &[(&str, &str, &str)] = &[
    ("/", "1.0", "daily"),
    ("/about", "0.9", "monthly"),
    ("/team", "0.8", "weekly"),
    ("/treatments", "0.9", "weekly"),
    ("/research", "0.9", "weekly"),
    ("/innovation", "0.8", "weekly"),
    ("/education", "0.8", "weekly"),
    ("/media", "0.7", "weekly"),
    ("/sponsors", "0.7", "monthly"),
    ("/projects", "0.8", "weekly"),
    ("/news", "0.8", "daily"),
    ("/appointment", "0.9", "monthly"),
    ("/contact", "0.8", "monthly"),
    ("/faq", "0.7", "monthly"),
];

pub struct SitemapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SitemapService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn build_sitemap(&self, base_url: &str) -> Result<String, AppError> {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        for (path, priority, changefreq) in STATIC_PAGES {
            push_url(&mut xml, &format!("{base_url}{path}"), &today, changefreq, priority);
        }

        for item in ContentRepository::<entity::prelude::Treatment>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/treatments/{}", item.slug),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.7",
            );
        }
        for item in ContentRepository::<entity::prelude::TeamMember>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/team/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.6",
            );
        }
        for item in ContentRepository::<entity::prelude::Research>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/research/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.8",
            );
        }
        for item in ContentRepository::<entity::prelude::Innovation>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/innovation/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.7",
            );
        }
        for item in ContentRepository::<entity::prelude::Education>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/education/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.7",
            );
        }
        for item in ContentRepository::<entity::prelude::MediaItem>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/media/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "weekly",
                "0.6",
            );
        }
        for item in ContentRepository::<entity::prelude::Sponsor>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/sponsors/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "yearly",
                "0.5",
            );
        }
        for item in ContentRepository::<entity::prelude::Project>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/projects/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.7",
            );
        }
        for item in ContentRepository::<entity::prelude::News>::new(self.db)
            .list()
            .await?
        {
            push_url(
                &mut xml,
                &format!("{base_url}/news/{}", item.id),
                &item.created_at.format("%Y-%m-%d").to_string(),
                "monthly",
                "0.6",
            );
        }

        xml.push_str("</urlset>");
        Ok(xml)
    }

    pub fn build_robots(base_url: &str) -> String {
        format!(
            "User-agent: *\n\
             Allow: /\n\
             \n\
             # Sitemap\n\
             Sitemap: {base_url}/sitemap.xml\n\
             \n\
             # Disallow admin pages\n\
             User-agent: *\n\
             Disallow: /admin\n\
             Disallow: /api\n\
             \n\
             # Crawl delay\n\
             Crawl-delay: 1\n"
        )
    }
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    let _ = write!(
        xml,
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
         <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
    );
}
