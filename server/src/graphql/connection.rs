//! Connections
//!
//! Cursor pagination over an in-memory list. Cursors encode the offset in
//! the full list as `base64("arrayconnection:<offset>")`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

const CURSOR_PREFIX: &str = "arrayconnection:";

/// Pagination arguments of a connection field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectionArgs {
    #[serde(default)]
    pub first: Option<i64>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub last: Option<i64>,
    #[serde(default)]
    pub before: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

pub fn offset_to_cursor(offset: usize) -> String {
    STANDARD.encode(format!("{}{}", CURSOR_PREFIX, offset))
}

pub fn cursor_to_offset(cursor: &str) -> Option<usize> {
    let decoded = String::from_utf8(STANDARD.decode(cursor).ok()?).ok()?;
    decoded.strip_prefix(CURSOR_PREFIX)?.parse().ok()
}

/// Offset the cursor points at, or `default` for a missing or foreign cursor
fn offset_or(cursor: Option<&str>, default: i64) -> i64 {
    cursor
        .and_then(cursor_to_offset)
        .map_or(default, |offset| offset as i64)
}

/// Page `items` according to `args`
pub fn connection_from_slice<T: Clone>(items: &[T], args: &ConnectionArgs) -> Result<Connection<T>, DomainError> {
    let length = items.len() as i64;
    let before_offset = offset_or(args.before.as_deref(), length);
    let after_offset = offset_or(args.after.as_deref(), -1);

    let mut start_offset = after_offset.max(-1) + 1;
    let mut end_offset = before_offset.min(length);

    if let Some(first) = args.first {
        if first < 0 {
            return Err(DomainError::InvalidInput("Argument \"first\" must be a non-negative integer".to_string()));
        }
        end_offset = end_offset.min(start_offset.saturating_add(first));
    }
    if let Some(last) = args.last {
        if last < 0 {
            return Err(DomainError::InvalidInput("Argument \"last\" must be a non-negative integer".to_string()));
        }
        start_offset = start_offset.max(end_offset - last);
    }

    let start = start_offset.clamp(0, length) as usize;
    let end = end_offset.clamp(0, length) as usize;
    let edges: Vec<Edge<T>> = if start < end {
        items[start..end]
            .iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: offset_to_cursor(start + i),
                node: node.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    let lower_bound = if args.after.is_some() { after_offset + 1 } else { 0 };
    let upper_bound = if args.before.is_some() { before_offset } else { length };

    let page_info = PageInfo {
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
        has_previous_page: args.last.is_some() && start_offset > lower_bound,
        has_next_page: args.first.is_some() && end_offset < upper_bound,
    };

    Ok(Connection { edges, page_info })
}

/// Cursor of `item` within `items`, if present
pub fn cursor_for_object_in_connection<T: PartialEq>(items: &[T], item: &T) -> Option<String> {
    items.iter().position(|candidate| candidate == item).map(offset_to_cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTERS: [&str; 5] = ["A", "B", "C", "D", "E"];

    fn nodes(connection: &Connection<&'static str>) -> Vec<&'static str> {
        connection.edges.iter().map(|edge| edge.node).collect()
    }

    fn args(first: Option<i64>, after: Option<usize>, last: Option<i64>, before: Option<usize>) -> ConnectionArgs {
        ConnectionArgs {
            first,
            after: after.map(offset_to_cursor),
            last,
            before: before.map(offset_to_cursor),
        }
    }

    #[test]
    fn test_cursor_encoding() {
        assert_eq!(offset_to_cursor(0), "YXJyYXljb25uZWN0aW9uOjA=");
        assert_eq!(cursor_to_offset("YXJyYXljb25uZWN0aW9uOjA="), Some(0));
        assert_eq!(cursor_to_offset("garbage"), None);
    }

    #[test]
    fn test_no_arguments_returns_everything() {
        let connection = connection_from_slice(&LETTERS[..], &ConnectionArgs::default()).unwrap();
        assert_eq!(nodes(&connection), LETTERS.to_vec());
        assert!(!connection.page_info.has_next_page);
        assert!(!connection.page_info.has_previous_page);
        assert_eq!(connection.page_info.start_cursor, Some(offset_to_cursor(0)));
        assert_eq!(connection.page_info.end_cursor, Some(offset_to_cursor(4)));
    }

    #[test]
    fn test_first_limits_and_reports_next_page() {
        let connection = connection_from_slice(&LETTERS[..], &args(Some(2), None, None, None)).unwrap();
        assert_eq!(nodes(&connection), vec!["A", "B"]);
        assert!(connection.page_info.has_next_page);
    }

    #[test]
    fn test_first_after() {
        let connection = connection_from_slice(&LETTERS[..], &args(Some(2), Some(1), None, None)).unwrap();
        assert_eq!(nodes(&connection), vec!["C", "D"]);
        assert!(connection.page_info.has_next_page);

        let tail = connection_from_slice(&LETTERS[..], &args(Some(10), Some(1), None, None)).unwrap();
        assert_eq!(nodes(&tail), vec!["C", "D", "E"]);
        assert!(!tail.page_info.has_next_page);
    }

    #[test]
    fn test_last_before() {
        let connection = connection_from_slice(&LETTERS[..], &args(None, None, Some(2), Some(3))).unwrap();
        assert_eq!(nodes(&connection), vec!["B", "C"]);
        assert!(connection.page_info.has_previous_page);
        assert!(!connection.page_info.has_next_page);
    }

    #[test]
    fn test_after_and_before_window() {
        let connection = connection_from_slice(&LETTERS[..], &args(None, Some(0), None, Some(4))).unwrap();
        assert_eq!(nodes(&connection), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_huge_first_fetches_all() {
        let connection = connection_from_slice(&LETTERS[..], &args(Some(i64::from(i32::MAX)), None, None, None)).unwrap();
        assert_eq!(connection.edges.len(), 5);
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        assert!(matches!(
            connection_from_slice(&LETTERS[..], &args(Some(-1), None, None, None)),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            connection_from_slice(&LETTERS[..], &args(None, None, Some(-1), None)),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        let connection = connection_from_slice(&empty[..], &args(Some(3), None, None, None)).unwrap();
        assert!(connection.edges.is_empty());
        assert_eq!(connection.page_info.start_cursor, None);
        assert!(!connection.page_info.has_next_page);
    }

    #[test]
    fn test_cursor_for_object() {
        assert_eq!(cursor_for_object_in_connection(&LETTERS[..], &"C"), Some(offset_to_cursor(2)));
        assert_eq!(cursor_for_object_in_connection(&LETTERS[..], &"Z"), None);
    }
}
