/// One entry of the portfolio list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub media_path: &'static str,
    pub title: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];

impl PortfolioItem {
    pub fn media_kind(&self) -> MediaKind {
        media_kind_for_path(self.media_path)
    }

    pub fn is_linked(&self) -> bool {
        self.link.is_some_and(|l| !l.is_empty())
    }

    /// CSS cursor for the media element: only clickable media get a pointer.
    pub fn cursor(&self) -> &'static str {
        if self.is_linked() {
            "pointer"
        } else {
            "default"
        }
    }
}

pub fn media_kind_for_path(path: &str) -> MediaKind {
    let lower = path.to_ascii_lowercase();
    if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: "item1",
        media_path: "Download.mp4",
        title: "Automated TikToks",
        link: Some("https://www.tiktok.com/@astronomydaily"),
    },
    PortfolioItem {
        id: "item2",
        media_path: "EcoCoin - Google Chrome 2024-10-14 19-56-29.mp4",
        title: "WebApp for Sustainable Eating",
        link: Some("https://ecocoins.co"),
    },
    PortfolioItem {
        id: "item3",
        media_path: "WhatsApp Video 2024-10-04 at 13.14.22_63bae061.mp4",
        title: "Digital Skills Helper",
        link: None,
    },
    PortfolioItem {
        id: "item4",
        // File name as published, including its mis-encoded dash
        media_path: "Home \u{e2}\u{20ac}\u{201d} End Speciesism - Google Chrome 2024-10-14 19-57-50.mp4",
        title: "Educational Website",
        link: Some("https://endspeciesism.org"),
    },
];
