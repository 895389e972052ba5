use serde::{Deserialize, Serialize};

/// Paginated collection envelope returned by list endpoints.
///
/// Pagination metadata is mirrored from the response as-is; a field the
/// server omitted stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataList<T> {
    #[serde(default = "Vec::new", deserialize_with = "super::null_as_empty")]
    pub data: Vec<T>,
    pub total: Option<i64>,
    pub start: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub size: Option<i64>,
}

impl<T> Default for DataList<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            start: None,
            sort: None,
            order: None,
            size: None,
        }
    }
}

impl<T> DataList<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for DataList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DataList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize, Serialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn metadata_is_mirrored_verbatim() {
        let list: DataList<Item> = serde_json::from_str(
            r#"{"data":[{"id":"a"},{"id":"b"}],"total":12,"start":10,"sort":"id","order":"desc","size":2}"#,
        )
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.total, Some(12));
        assert_eq!(list.start, Some(10));
        assert_eq!(list.sort.as_deref(), Some("id"));
        assert_eq!(list.order.as_deref(), Some("desc"));
        assert_eq!(list.size, Some(2));
    }

    #[test]
    fn missing_metadata_stays_absent() {
        let list: DataList<Item> = serde_json::from_str(r#"{"data":[],"total":0}"#).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.total, Some(0));
        assert_eq!(list.sort, None);
        assert_eq!(list.order, None);
        assert_eq!(list.size, None);
    }

    #[test]
    fn missing_data_decodes_as_empty() {
        let list: DataList<Item> = serde_json::from_str(r#"{"extra":true}"#).unwrap();
        assert_eq!(list, DataList::default());
    }

    #[test]
    fn null_data_decodes_as_empty() {
        let list: DataList<Item> = serde_json::from_str(r#"{"data":null,"total":0,"size":0}"#).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.total, Some(0));
        assert_eq!(list.size, Some(0));
    }
}
