use serde::{Deserialize, Serialize};

/// a single tag: an ordered list of strings
///
/// the first field names the tag ("p", "e", "a", "d", "l", ...), the second
/// is its value and anything after that are extra parameters whose meaning
/// depends on the tag name and position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// create a tag with just a name and a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self(vec![name.into(), value.into()])
    }

    /// create a tag with extra parameters after the value
    pub fn with_parameters(
        name: impl Into<String>,
        value: impl Into<String>,
        parameters: Vec<String>,
    ) -> Self {
        let mut fields = vec![name.into(), value.into()];
        fields.extend(parameters);
        Self(fields)
    }

    /// the tag name, or empty string for an empty tag
    pub fn name(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    /// the tag value (second field), or empty string if absent
    pub fn value(&self) -> &str {
        self.0.get(1).map(String::as_str).unwrap_or("")
    }

    /// everything after the value, in order
    pub fn other_parameters(&self) -> &[String] {
        self.0.get(2..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Tag {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

/// collection of tags
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    /// find the first tag with the given name that has at least one value
    pub fn find(&self, name: &str) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.len() >= 2 && tag.name() == name)
    }

    /// find all tags with the given name that have at least one value,
    /// in insertion order, duplicates included
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.0
            .iter()
            .filter(move |tag| tag.len() >= 2 && tag.name() == name)
    }

    /// find the first tag with the given name whose leading extra parameter
    /// equals `param`
    pub fn find_with_param(&self, name: &str, param: &str) -> Option<&Tag> {
        self.0.iter().find(|tag| {
            tag.name() == name && tag.other_parameters().first().map(String::as_str) == Some(param)
        })
    }

    /// get the first "d" tag value or empty string
    pub fn get_d(&self) -> String {
        self.find("d").map(|tag| tag.value().to_string()).unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(err) => write!(f, "Tags({err})"),
        }
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl From<Tags> for Vec<Tag> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}
