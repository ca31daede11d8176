//! 文档路径工具
//!
//! 校验问题定位用的点/方括号路径，如 `messages[0].value.amount`。

use std::fmt;

/// JSON 文档内的结构化路径
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

impl JsonPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Key(name.to_string()));
        next
    }

    pub fn index(&self, idx: usize) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Index(idx));
        next
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = JsonPath::root()
            .key("messages")
            .index(0)
            .key("value")
            .key("amount");
        assert_eq!(path.to_string(), "messages[0].value.amount");
    }

    #[test]
    fn test_root_is_empty() {
        assert!(JsonPath::root().is_root());
        assert_eq!(JsonPath::root().to_string(), "");
    }

    #[test]
    fn test_index_after_index() {
        let path = JsonPath::root().key("transfers").index(1).index(2);
        assert_eq!(path.to_string(), "transfers[1][2]");
    }
}
