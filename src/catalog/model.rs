//! Serde types for the mediabank catalog response.

use serde::Deserialize;

/// One page of catalog results.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    /// Media items in catalog order.
    pub media: Vec<MediaItem>,
    /// Pagination metadata reported by the server.
    pub pagination: Pagination,
}

/// Pagination metadata from a catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Current 1-based page number.
    pub page: u32,
    /// Total page count.
    pub pages: u32,
}

/// One catalog entry: a digitized book with an ordered list of page assets.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    /// Book title; the only item identity the pipeline uses.
    pub title: String,
    /// Page assets in reading order. Empty means the book is unavailable.
    #[serde(default)]
    pub asset: Vec<Asset>,
}

/// One page image served as a deep-zoom tile pyramid.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// Tile-set identifier used in tile URLs.
    pub uuid: String,
    /// Full-resolution pixel width.
    pub width: u32,
    /// Full-resolution pixel height.
    pub height: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_page_deserialize_full() {
        let json = serde_json::json!({
            "media": [
                {
                    "title": "Opera Omnia",
                    "asset": [
                        {"uuid": "abc-123", "width": 3000, "height": 4200},
                        {"uuid": "def-456", "width": 3010, "height": 4190}
                    ]
                }
            ],
            "pagination": {"page": 1, "pages": 7}
        });

        let page: CatalogPage = serde_json::from_value(json).unwrap();
        assert_eq!(page.media.len(), 1);
        assert_eq!(page.media[0].title, "Opera Omnia");
        assert_eq!(page.media[0].asset.len(), 2);
        assert_eq!(page.media[0].asset[0].uuid, "abc-123");
        assert_eq!(page.media[0].asset[0].width, 3000);
        assert_eq!(page.pagination, Pagination { page: 1, pages: 7 });
    }

    #[test]
    fn test_media_item_deserialize_missing_assets() {
        let json = serde_json::json!({"title": "Lost Volume"});

        let item: MediaItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.title, "Lost Volume");
        assert!(item.asset.is_empty());
    }

    #[test]
    fn test_catalog_page_deserialize_empty_media() {
        let json = serde_json::json!({
            "media": [],
            "pagination": {"page": 3, "pages": 3}
        });

        let page: CatalogPage = serde_json::from_value(json).unwrap();
        assert!(page.media.is_empty());
        assert_eq!(page.pagination.page, 3);
    }

    #[test]
    fn test_catalog_page_missing_pagination_is_error() {
        let json = serde_json::json!({"media": []});
        let result: Result<CatalogPage, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
