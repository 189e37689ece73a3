//! Social and structured-data meta tags.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tag name → value.
pub type TagGroup = BTreeMap<String, String>;

/// Meta tags for a post, grouped by consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetaTags {
    /// `og:*` properties.
    pub open_graph: TagGroup,
    /// `twitter:*` properties.
    pub twitter_card: TagGroup,
    /// Schema.org `Article` JSON-LD fields.
    pub schema_org: TagGroup,
}

impl MetaTags {
    /// Groups as `(name, tags)` pairs, in serialization order.
    pub fn groups(&self) -> [(&'static str, &TagGroup); 3] {
        [
            ("open_graph", &self.open_graph),
            ("twitter_card", &self.twitter_card),
            ("schema_org", &self.schema_org),
        ]
    }
}

fn group<const N: usize>(pairs: [(&str, &str); N]) -> TagGroup {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build Open Graph, Twitter Card, and Schema.org tags.
pub fn generate_meta_tags<S: AsRef<str>>(title: &str, description: &str, keywords: &[S]) -> MetaTags {
    let keywords = keywords
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");

    MetaTags {
        open_graph: group([
            ("og:title", title),
            ("og:description", description),
            ("og:type", "article"),
            ("og:locale", "en_US"),
        ]),
        twitter_card: group([
            ("twitter:card", "summary_large_image"),
            ("twitter:title", title),
            ("twitter:description", description),
        ]),
        schema_org: group([
            ("@context", "https://schema.org"),
            ("@type", "Article"),
            ("headline", title),
            ("description", description),
            ("keywords", keywords.as_str()),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_groups_with_fixed_values() {
        let tags = generate_meta_tags("X", "Y", &["a", "b"]);
        assert_eq!(tags.groups().len(), 3);
        assert_eq!(tags.open_graph["og:type"], "article");
        assert_eq!(tags.open_graph["og:title"], "X");
        assert_eq!(tags.open_graph["og:locale"], "en_US");
        assert_eq!(tags.twitter_card["twitter:card"], "summary_large_image");
        assert_eq!(tags.twitter_card["twitter:description"], "Y");
        assert_eq!(tags.schema_org["@type"], "Article");
        assert_eq!(tags.schema_org["keywords"], "a, b");
    }

    #[test]
    fn no_keywords_gives_empty_string() {
        let tags = generate_meta_tags::<&str>("T", "D", &[]);
        assert_eq!(tags.schema_org["keywords"], "");
    }

    #[test]
    fn serializes_group_names_in_snake_case() {
        let tags = generate_meta_tags("T", "D", &["k"]);
        let value = serde_json::to_value(&tags).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["open_graph", "schema_org", "twitter_card"]);
        assert_eq!(value["schema_org"]["@context"], "https://schema.org");
    }
}
