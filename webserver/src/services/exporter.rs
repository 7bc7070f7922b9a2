//! Static site export
//!
//! Writes the sitemap, robots.txt and every landing page into a directory
//! using the same rendering path as the HTTP handlers.

use std::path::{Path, PathBuf};

use site_shared::{logging, process_info, City, ProcessId};
use tokio::fs;

use crate::core::page::LandingPage;
use crate::core::sitemap::render_robots;
use crate::core::ui::ConsentState;
use crate::error::WebServerResult;
use crate::state::WebServerState;
use crate::traits::Clock;

/// Files written by one export run, relative to the output directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct SiteExporter {
    out_dir: PathBuf,
}

impl SiteExporter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// `/` -> `index.html`, `/locations/boston` -> `locations/boston/index.html`
    pub fn page_file(path: &str) -> PathBuf {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            PathBuf::from("index.html")
        } else {
            Path::new(trimmed).join("index.html")
        }
    }

    pub async fn export(&self, state: &WebServerState, clock: &dyn Clock) -> WebServerResult<ExportReport> {
        fs::create_dir_all(&self.out_dir).await?;
        let mut report = ExportReport::default();

        let sitemap = state.render_sitemap(clock)?;
        self.write(&mut report, PathBuf::from("sitemap.xml"), sitemap).await?;
        self.write(&mut report, PathBuf::from("robots.txt"), render_robots(&state.config))
            .await?;

        let cities = std::iter::once(None).chain(City::ALL.into_iter().map(Some));
        for city in cities {
            let page = LandingPage::for_city(city);
            // exported pages cannot see a visitor's cookie
            let html = state.render_landing(city, ConsentState::Unset);
            self.write(&mut report, Self::page_file(&page.path), html).await?;
        }

        process_info!(
            ProcessId::current(),
            "📦 Exported {} files to {}",
            report.files.len(),
            self.out_dir.display()
        );
        Ok(report)
    }

    async fn write(&self, report: &mut ExportReport, relative: PathBuf, contents: String) -> WebServerResult<()> {
        let target = self.out_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, contents.as_bytes()).await?;
        logging::log_progress(
            ProcessId::current(),
            "Wrote",
            &format!("{} ({} bytes)", target.display(), contents.len()),
        );
        report.files.push(relative);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file() {
        assert_eq!(SiteExporter::page_file("/"), PathBuf::from("index.html"));
        assert_eq!(
            SiteExporter::page_file("/locations/boston"),
            PathBuf::from("locations/boston/index.html")
        );
        assert_eq!(SiteExporter::page_file("/about/"), PathBuf::from("about/index.html"));
    }
}
