//! Cursor-based pagination types for GraphQL
//!
//! Cursors are opaque base64 strings wrapping the row offset, so paging is
//! stable for a fixed filter and ordering.
//!
//! Usage: Use the `define_connection!` macro to create type-specific connections.

use async_graphql::SimpleObject;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::orm::OrmError;

pub const DEFAULT_PAGE_SIZE: i64 = 25;
pub const MAX_PAGE_SIZE: i64 = 100;

const CURSOR_PREFIX: &str = "cursor:";

/// Information about pagination in a connection
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Eq)]
#[graphql(name = "PageInfo")]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    #[graphql(name = "HasNextPage")]
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    #[graphql(name = "HasPreviousPage")]
    pub has_previous_page: bool,
    #[graphql(name = "StartCursor")]
    pub start_cursor: Option<String>,
    #[graphql(name = "EndCursor")]
    pub end_cursor: Option<String>,
}

/// An edge in a connection (internal use)
#[derive(Debug, Clone)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

/// A paginated connection result (internal use)
#[derive(Debug, Clone)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
    /// Rows matching the filter, ignoring the page window
    pub total_count: i64,
}

/// Macro to define a GraphQL connection type for a specific entity
///
/// Usage:
/// ```ignore
/// define_connection!(CityConnection, CityEdge, City);
/// ```
#[macro_export]
macro_rules! define_connection {
    ($conn_name:ident, $edge_name:ident, $node_type:ty) => {
        #[derive(async_graphql::SimpleObject, Debug, Clone)]
        pub struct $edge_name {
            #[graphql(name = "Node")]
            pub node: $node_type,
            #[graphql(name = "Cursor")]
            pub cursor: String,
        }

        #[derive(async_graphql::SimpleObject, Debug, Clone)]
        pub struct $conn_name {
            #[graphql(name = "Edges")]
            pub edges: Vec<$edge_name>,
            #[graphql(name = "PageInfo")]
            pub page_info: $crate::graphql::pagination::PageInfo,
            #[graphql(name = "TotalCount")]
            pub total_count: i64,
        }

        impl From<$crate::graphql::pagination::Connection<$node_type>> for $conn_name {
            fn from(conn: $crate::graphql::pagination::Connection<$node_type>) -> Self {
                Self {
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge_name {
                            node: e.node,
                            cursor: e.cursor,
                        })
                        .collect(),
                    page_info: conn.page_info,
                    total_count: conn.total_count,
                }
            }
        }
    };
}

impl<T> Connection<T> {
    /// Create a connection from one page of items
    ///
    /// # Arguments
    /// * `items` - The items to include in this page
    /// * `offset` - The offset of the first item (for cursor generation)
    /// * `total` - Total count of items matching the query
    pub fn from_items(items: Vec<T>, offset: i64, total: i64) -> Self {
        let has_next_page = (offset + items.len() as i64) < total;
        let has_previous_page = offset > 0;

        let edges: Vec<Edge<T>> = items
            .into_iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: encode_cursor(offset + i as i64),
                node,
            })
            .collect();

        let page_info = PageInfo {
            has_next_page,
            has_previous_page,
            start_cursor: edges.first().map(|e| e.cursor.clone()),
            end_cursor: edges.last().map(|e| e.cursor.clone()),
        };

        Self {
            edges,
            page_info,
            total_count: total,
        }
    }
}

/// Encode an offset as a cursor string
pub fn encode_cursor(offset: i64) -> String {
    BASE64.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

/// Decode a cursor string to an offset
pub fn decode_cursor(cursor: &str) -> Result<i64, OrmError> {
    let decoded = BASE64
        .decode(cursor)
        .map_err(|_| OrmError::Cursor("invalid cursor format"))?;
    let s = String::from_utf8(decoded).map_err(|_| OrmError::Cursor("invalid cursor encoding"))?;

    let value = s
        .strip_prefix(CURSOR_PREFIX)
        .ok_or(OrmError::Cursor("invalid cursor prefix"))?;
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(OrmError::Cursor("invalid cursor value")),
    }
}

/// Parse pagination arguments into offset and limit
pub fn parse_pagination_args(
    first: Option<i32>,
    after: Option<&str>,
) -> Result<(i64, i64), OrmError> {
    let limit = first
        .map(i64::from)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(0, MAX_PAGE_SIZE);

    let offset = match after {
        // Start after the cursor
        Some(cursor) => decode_cursor(cursor)?
            .checked_add(1)
            .ok_or(OrmError::Cursor("invalid cursor value"))?,
        None => 0,
    };

    Ok((offset, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pagination_default() {
        assert_eq!(parse_pagination_args(None, None).unwrap(), (0, 25));
    }

    #[test]
    fn test_parse_pagination_limits() {
        assert_eq!(parse_pagination_args(Some(50), None).unwrap(), (0, 50));
        assert_eq!(parse_pagination_args(Some(1000), None).unwrap(), (0, 100));
        assert_eq!(parse_pagination_args(Some(-5), None).unwrap(), (0, 0));
    }

    #[test]
    fn test_parse_pagination_with_cursor() {
        let cursor = encode_cursor(10);
        let (offset, limit) = parse_pagination_args(Some(25), Some(&cursor)).unwrap();
        assert_eq!(offset, 11);
        assert_eq!(limit, 25);
    }

    #[test]
    fn test_rejects_foreign_cursors() {
        assert_matches!(decode_cursor("not base64!"), Err(OrmError::Cursor(_)));
        let wrong_prefix = BASE64.encode("offset:3");
        assert_matches!(decode_cursor(&wrong_prefix), Err(OrmError::Cursor(_)));
        let negative = BASE64.encode("cursor:-1");
        assert_matches!(decode_cursor(&negative), Err(OrmError::Cursor(_)));
    }

    #[test]
    fn test_last_offset_cursor_is_rejected() {
        let cursor = encode_cursor(i64::MAX);
        assert_matches!(
            parse_pagination_args(None, Some(&cursor)),
            Err(OrmError::Cursor(_))
        );
    }

    #[test]
    fn test_page_info_edges() {
        let conn = Connection::from_items(vec!["b", "c"], 1, 4);
        assert_eq!(conn.total_count, 4);
        assert!(conn.page_info.has_next_page);
        assert!(conn.page_info.has_previous_page);
        assert_eq!(conn.page_info.start_cursor, Some(encode_cursor(1)));
        assert_eq!(conn.page_info.end_cursor, Some(encode_cursor(2)));

        let last = Connection::from_items(vec!["d"], 3, 4);
        assert!(!last.page_info.has_next_page);

        let empty = Connection::<&str>::from_items(Vec::new(), 0, 0);
        assert_eq!(empty.page_info, PageInfo::default());
    }
}
