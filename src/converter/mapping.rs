//! 转换结果映射
//!
//! 以输入网址为 key、转换结果为 value，保留插入顺序

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 保留插入顺序的 网址 → 网址 映射
///
/// 覆盖已有 key 时原位替换 value，位置不变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl UrlMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// 插入一条映射，返回被覆盖的旧值
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// 合并另一个映射，key 冲突时以 `other` 为准
    pub fn merge(&mut self, other: UrlMapping) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// 取出 key 对应的值，不保留映射的其余部分
    pub fn take(mut self, key: &str) -> Option<String> {
        let pos = self.index.remove(key)?;
        Some(self.entries.swap_remove(pos).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = UrlMapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for UrlMapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for UrlMapping {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for UrlMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mapping: UrlMapping = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(mapping.get("a"), Some("1"));
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut mapping = UrlMapping::new();
        mapping.insert("a", "x");
        mapping.insert("b", "y");
        assert_eq!(mapping.insert("a", "z"), Some("x".to_string()));
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("a", "z"), ("b", "y")]);
    }

    #[test]
    fn test_merge_disjoint_and_collision() {
        let mut merged: UrlMapping = [("a", "x")].into_iter().collect();
        merged.merge([("b", "y")].into_iter().collect());
        assert_eq!(merged.get("a"), Some("x"));
        assert_eq!(merged.get("b"), Some("y"));

        merged.merge([("a", "z")].into_iter().collect());
        assert_eq!(merged.get("a"), Some("z"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_take() {
        let mapping: UrlMapping = [("a", "x"), ("b", "y")].into_iter().collect();
        assert_eq!(mapping.clone().take("a"), Some("x".to_string()));
        assert_eq!(mapping.take("missing"), None);
    }

    #[test]
    fn test_serialize_as_object() {
        let mapping: UrlMapping = [("z", "1"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_string(&mapping).unwrap();
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
