//! Qualifier fields and their query keys.
//!
//! Every field of [`Qualifiers`] has one entry in [`QUALIFIER_FIELDS`], which pairs the field's
//! name with its hyphenated query key, its shape, and an accessor. Serialization walks that table
//! instead of inspecting the struct at runtime.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::quote::quote;

/// Named filter terms rendered as `key:value` tokens.
///
/// Optional booleans and multi-valued fields distinguish "unset" (`None`) from a set value.
/// Single-valued strings are unset when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
#[allow(missing_docs)]
pub struct Qualifiers {
    pub archived: Option<bool>,
    pub assignee: String,
    pub author: String,
    pub base: String,
    pub closed: String,
    pub commenter: String,
    pub comments: String,
    pub created: String,
    pub draft: Option<bool>,
    pub followers: String,
    pub fork: String,
    pub forks: String,
    pub good_first_issues: String,
    pub head: String,
    pub help_wanted_issues: String,
    #[serde(rename = "in")]
    pub in_: Option<Vec<String>>,
    pub interactions: String,
    pub involves: String,
    pub is: Option<Vec<String>>,
    pub label: Option<Vec<String>>,
    pub language: String,
    pub license: Option<Vec<String>>,
    pub mentions: String,
    pub merged: String,
    pub milestone: String,
    pub no: Option<Vec<String>>,
    pub org: String,
    pub project: String,
    pub pushed: String,
    pub reactions: String,
    pub repo: Option<Vec<String>>,
    pub review: String,
    pub review_requested: String,
    pub reviewed_by: String,
    pub size: String,
    pub stars: String,
    pub state: String,
    pub status: String,
    pub team: String,
    pub topic: Option<Vec<String>>,
    pub topics: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub updated: String,
}

/// The value shape of a qualifier field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Present or absent; renders as `true` or `false`.
    Flag,
    /// Zero or more values; one token per value.
    List,
    /// A single string; absent when empty.
    Text,
}

impl fmt::Display for FieldShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flag => "boolean",
            Self::List => "multi",
            Self::Text => "string",
        };
        f.write_str(name)
    }
}

/// A borrowed view of one qualifier field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// An optional boolean.
    Flag(Option<bool>),
    /// An optional list of values.
    List(Option<&'a [String]>),
    /// A string, empty when unset.
    Text(&'a str),
}

impl FieldValue<'_> {
    /// Returns true if the field is set.
    ///
    /// A present but empty list counts as set even though it renders no tokens.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(v) => v.is_some(),
            Self::List(v) => v.is_some(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Returns the rendered values of this field, one per token.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Flag(Some(b)) => vec![b.to_string()],
            Self::Flag(None) | Self::List(None) => Vec::new(),
            Self::List(Some(values)) => values.to_vec(),
            Self::Text(s) if s.is_empty() => Vec::new(),
            Self::Text(s) => vec![(*s).to_string()],
        }
    }
}

/// One entry of the qualifier table.
pub struct QualifierField {
    /// Field name in identifier case, e.g. `ReviewRequested`.
    pub name: &'static str,
    /// Query key, e.g. `review-requested`.
    pub key: &'static str,
    /// Value shape.
    pub shape: FieldShape,
    /// Reads this field from a qualifier set.
    read: for<'a> fn(&'a Qualifiers) -> FieldValue<'a>,
}

impl QualifierField {
    /// Reads this field's value from `qualifiers`.
    pub fn read<'a>(&self, qualifiers: &'a Qualifiers) -> FieldValue<'a> {
        (self.read)(qualifiers)
    }
}

impl fmt::Debug for QualifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualifierField")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Builds a table entry.
const fn field(
    name: &'static str,
    key: &'static str,
    shape: FieldShape,
    read: for<'a> fn(&'a Qualifiers) -> FieldValue<'a>,
) -> QualifierField {
    QualifierField {
        name,
        key,
        shape,
        read,
    }
}

/// Every qualifier field, in declaration order.
pub static QUALIFIER_FIELDS: &[QualifierField] = &[
    field("Archived", "archived", FieldShape::Flag, |q| {
        FieldValue::Flag(q.archived)
    }),
    field("Assignee", "assignee", FieldShape::Text, |q| {
        FieldValue::Text(&q.assignee)
    }),
    field("Author", "author", FieldShape::Text, |q| {
        FieldValue::Text(&q.author)
    }),
    field("Base", "base", FieldShape::Text, |q| FieldValue::Text(&q.base)),
    field("Closed", "closed", FieldShape::Text, |q| {
        FieldValue::Text(&q.closed)
    }),
    field("Commenter", "commenter", FieldShape::Text, |q| {
        FieldValue::Text(&q.commenter)
    }),
    field("Comments", "comments", FieldShape::Text, |q| {
        FieldValue::Text(&q.comments)
    }),
    field("Created", "created", FieldShape::Text, |q| {
        FieldValue::Text(&q.created)
    }),
    field("Draft", "draft", FieldShape::Flag, |q| FieldValue::Flag(q.draft)),
    field("Followers", "followers", FieldShape::Text, |q| {
        FieldValue::Text(&q.followers)
    }),
    field("Fork", "fork", FieldShape::Text, |q| FieldValue::Text(&q.fork)),
    field("Forks", "forks", FieldShape::Text, |q| FieldValue::Text(&q.forks)),
    field("GoodFirstIssues", "good-first-issues", FieldShape::Text, |q| {
        FieldValue::Text(&q.good_first_issues)
    }),
    field("Head", "head", FieldShape::Text, |q| FieldValue::Text(&q.head)),
    field("HelpWantedIssues", "help-wanted-issues", FieldShape::Text, |q| {
        FieldValue::Text(&q.help_wanted_issues)
    }),
    field("In", "in", FieldShape::List, |q| {
        FieldValue::List(q.in_.as_deref())
    }),
    field("Interactions", "interactions", FieldShape::Text, |q| {
        FieldValue::Text(&q.interactions)
    }),
    field("Involves", "involves", FieldShape::Text, |q| {
        FieldValue::Text(&q.involves)
    }),
    field("Is", "is", FieldShape::List, |q| FieldValue::List(q.is.as_deref())),
    field("Label", "label", FieldShape::List, |q| {
        FieldValue::List(q.label.as_deref())
    }),
    field("Language", "language", FieldShape::Text, |q| {
        FieldValue::Text(&q.language)
    }),
    field("License", "license", FieldShape::List, |q| {
        FieldValue::List(q.license.as_deref())
    }),
    field("Mentions", "mentions", FieldShape::Text, |q| {
        FieldValue::Text(&q.mentions)
    }),
    field("Merged", "merged", FieldShape::Text, |q| {
        FieldValue::Text(&q.merged)
    }),
    field("Milestone", "milestone", FieldShape::Text, |q| {
        FieldValue::Text(&q.milestone)
    }),
    field("No", "no", FieldShape::List, |q| FieldValue::List(q.no.as_deref())),
    field("Org", "org", FieldShape::Text, |q| FieldValue::Text(&q.org)),
    field("Project", "project", FieldShape::Text, |q| {
        FieldValue::Text(&q.project)
    }),
    field("Pushed", "pushed", FieldShape::Text, |q| {
        FieldValue::Text(&q.pushed)
    }),
    field("Reactions", "reactions", FieldShape::Text, |q| {
        FieldValue::Text(&q.reactions)
    }),
    field("Repo", "repo", FieldShape::List, |q| {
        FieldValue::List(q.repo.as_deref())
    }),
    field("Review", "review", FieldShape::Text, |q| {
        FieldValue::Text(&q.review)
    }),
    field("ReviewRequested", "review-requested", FieldShape::Text, |q| {
        FieldValue::Text(&q.review_requested)
    }),
    field("ReviewedBy", "reviewed-by", FieldShape::Text, |q| {
        FieldValue::Text(&q.reviewed_by)
    }),
    field("Size", "size", FieldShape::Text, |q| FieldValue::Text(&q.size)),
    field("Stars", "stars", FieldShape::Text, |q| FieldValue::Text(&q.stars)),
    field("State", "state", FieldShape::Text, |q| FieldValue::Text(&q.state)),
    field("Status", "status", FieldShape::Text, |q| {
        FieldValue::Text(&q.status)
    }),
    field("Team", "team", FieldShape::Text, |q| FieldValue::Text(&q.team)),
    field("Topic", "topic", FieldShape::List, |q| {
        FieldValue::List(q.topic.as_deref())
    }),
    field("Topics", "topics", FieldShape::Text, |q| {
        FieldValue::Text(&q.topics)
    }),
    field("Type", "type", FieldShape::Text, |q| FieldValue::Text(&q.type_)),
    field("Updated", "updated", FieldShape::Text, |q| {
        FieldValue::Text(&q.updated)
    }),
];

/// Looks up a table entry by its query key.
pub fn field_by_key(key: &str) -> Option<&'static QualifierField> {
    QUALIFIER_FIELDS.iter().find(|f| f.key == key)
}

impl Qualifiers {
    /// Returns the static field table.
    pub fn fields() -> &'static [QualifierField] {
        QUALIFIER_FIELDS
    }

    /// Returns the set fields as a key-ordered map of rendered values.
    ///
    /// A present but empty list maps to an empty vector.
    pub fn to_map(&self) -> BTreeMap<&'static str, Vec<String>> {
        QUALIFIER_FIELDS
            .iter()
            .filter_map(|field| {
                let value = field.read(self);
                value.is_set().then(|| (field.key, value.values()))
            })
            .collect()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        QUALIFIER_FIELDS.iter().all(|f| !f.read(self).is_set())
    }

    /// Renders every `key:value` token, sorted lexicographically.
    ///
    /// Values are quoted where needed; keys never are.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = QUALIFIER_FIELDS
            .iter()
            .flat_map(|field| {
                field
                    .read(self)
                    .values()
                    .into_iter()
                    .map(move |v| format!("{}:{}", field.key, quote(&v)))
            })
            .collect();
        tokens.sort_unstable();
        tokens
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Mirrors the identifier-to-key rule used to build the table: every uppercase letter
    /// starts a new hyphen-separated segment.
    fn kebab(name: &str) -> String {
        let mut out = String::new();
        for (i, c) in name.chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        }
        out
    }

    #[test]
    fn table_is_exhaustive() {
        // Destructuring fails to compile when a field is added without a table entry update.
        let Qualifiers {
            archived: _,
            assignee: _,
            author: _,
            base: _,
            closed: _,
            commenter: _,
            comments: _,
            created: _,
            draft: _,
            followers: _,
            fork: _,
            forks: _,
            good_first_issues: _,
            head: _,
            help_wanted_issues: _,
            in_: _,
            interactions: _,
            involves: _,
            is: _,
            label: _,
            language: _,
            license: _,
            mentions: _,
            merged: _,
            milestone: _,
            no: _,
            org: _,
            project: _,
            pushed: _,
            reactions: _,
            repo: _,
            review: _,
            review_requested: _,
            reviewed_by: _,
            size: _,
            stars: _,
            state: _,
            status: _,
            team: _,
            topic: _,
            topics: _,
            type_: _,
            updated: _,
        } = Qualifiers::default();
        assert_eq!(QUALIFIER_FIELDS.len(), 43);
    }

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = QUALIFIER_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), QUALIFIER_FIELDS.len());
    }

    #[test]
    fn keys_follow_field_names() {
        for field in QUALIFIER_FIELDS {
            assert_eq!(field.key, kebab(field.name), "key for {}", field.name);
        }
    }

    #[test]
    fn multi_word_keys() {
        let keys: Vec<_> = QUALIFIER_FIELDS
            .iter()
            .map(|f| f.key)
            .filter(|k| k.contains('-'))
            .collect();
        assert_eq!(
            keys,
            vec![
                "good-first-issues",
                "help-wanted-issues",
                "review-requested",
                "reviewed-by"
            ]
        );
    }

    #[test]
    fn declared_shape_matches_accessor() {
        let q = Qualifiers::default();
        for field in QUALIFIER_FIELDS {
            let actual = match field.read(&q) {
                FieldValue::Flag(_) => FieldShape::Flag,
                FieldValue::List(_) => FieldShape::List,
                FieldValue::Text(_) => FieldShape::Text,
            };
            assert_eq!(actual, field.shape, "shape for {}", field.name);
        }
    }

    #[test]
    fn default_has_nothing_set() {
        let q = Qualifiers::default();
        assert!(q.is_empty());
        assert!(q.to_map().is_empty());
        assert!(q.tokens().is_empty());
    }

    #[test]
    fn accessors_read_their_own_field() {
        let q = Qualifiers {
            review_requested: "octocat".into(),
            ..Default::default()
        };
        let set: Vec<_> = QUALIFIER_FIELDS
            .iter()
            .filter(|f| f.read(&q).is_set())
            .map(|f| f.key)
            .collect();
        assert_eq!(set, vec!["review-requested"]);
    }

    #[test]
    fn empty_list_is_set_but_renders_nothing() {
        let q = Qualifiers {
            label: Some(vec![]),
            ..Default::default()
        };
        assert!(!q.is_empty());
        assert_eq!(q.to_map().get("label"), Some(&Vec::new()));
        assert!(q.tokens().is_empty());
    }

    #[test]
    fn flags_render_as_literals() {
        let q = Qualifiers {
            archived: Some(false),
            draft: Some(true),
            ..Default::default()
        };
        assert_eq!(q.tokens(), vec!["archived:false", "draft:true"]);
    }

    #[test]
    fn tokens_quote_values_not_keys() {
        let q = Qualifiers {
            label: Some(vec!["help wanted".into()]),
            review_requested: "@me".into(),
            ..Default::default()
        };
        assert_eq!(
            q.tokens(),
            vec!["label:\"help wanted\"", "review-requested:@me"]
        );
    }

    #[test]
    fn to_map_lists_rendered_values() {
        let q = Qualifiers {
            repo: Some(vec!["cli/cli".into(), "rust-lang/rust".into()]),
            archived: Some(true),
            state: "open".into(),
            ..Default::default()
        };
        let map = q.to_map();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["archived", "repo", "state"]);
        assert_eq!(map["archived"], vec!["true"]);
        assert_eq!(map["repo"], vec!["cli/cli", "rust-lang/rust"]);
    }

    #[test]
    fn field_lookup_by_key() {
        let field = field_by_key("reviewed-by").unwrap();
        assert_eq!(field.name, "ReviewedBy");
        assert_eq!(field.shape, FieldShape::Text);
        assert!(field_by_key("reviewed_by").is_none());
    }

    #[test]
    fn deserializes_from_keys() {
        let q: Qualifiers = serde_json::from_str(
            r#"{"in": ["title"], "type": "pr", "review-requested": "octocat", "draft": false}"#,
        )
        .unwrap();
        assert_eq!(q.in_, Some(vec!["title".to_string()]));
        assert_eq!(q.type_, "pr");
        assert_eq!(q.review_requested, "octocat");
        assert_eq!(q.draft, Some(false));
    }
}
