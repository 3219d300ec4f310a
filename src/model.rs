use serde::Serialize;

/// One row of the function index table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub syntax: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxVariable {
    pub name: String,
    pub description: String,
}

/// Fields scraped from a single function's help page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDetail {
    pub sample_usage: Vec<String>,
    pub syntax_variables: Vec<SyntaxVariable>,
    pub notes: Vec<String>,
    pub related: Vec<String>,
    pub other_related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub syntax: String,
    pub description: String,
    pub link: String,
    pub sample_usage: Vec<String>,
    pub syntax_variables: Vec<SyntaxVariable>,
    pub notes: Vec<String>,
    pub related: Vec<String>,
}

impl FunctionRecord {
    /// Index fields win; `related` is the in-text links followed by the
    /// trailing "see also" list, duplicates kept.
    pub fn merge(descriptor: FunctionDescriptor, detail: FunctionDetail) -> Self {
        let FunctionDetail {
            sample_usage,
            syntax_variables,
            notes,
            mut related,
            other_related,
        } = detail;
        related.extend(other_related);

        FunctionRecord {
            kind: descriptor.kind,
            name: descriptor.name,
            syntax: descriptor.syntax,
            description: descriptor.description,
            link: descriptor.link,
            sample_usage,
            syntax_variables,
            notes,
            related,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> FunctionDescriptor {
        FunctionDescriptor {
            kind: "Math".into(),
            name: "SUM".into(),
            syntax: "SUM(value1, [value2, ...])".into(),
            description: "Returns the sum of a series of numbers and/or cells.".into(),
            link: "https://support.google.com/docs/answer/3093669".into(),
        }
    }

    #[test]
    fn merge_concatenates_related_without_dedup() {
        let detail = FunctionDetail {
            related: vec!["SUM".into()],
            other_related: vec!["SUM".into(), "AVERAGE".into()],
            ..Default::default()
        };
        let record = FunctionRecord::merge(descriptor(), detail);
        assert_eq!(record.related, vec!["SUM", "SUM", "AVERAGE"]);
    }

    #[test]
    fn merge_keeps_descriptor_fields() {
        let record = FunctionRecord::merge(descriptor(), FunctionDetail::default());
        assert_eq!(record.kind, "Math");
        assert_eq!(record.name, "SUM");
        assert_eq!(record.link, "https://support.google.com/docs/answer/3093669");
        assert!(record.related.is_empty());
    }

    #[test]
    fn serializes_with_catalog_keys_in_order() {
        let detail = FunctionDetail {
            sample_usage: vec!["SUM(A2:A100)".into()],
            syntax_variables: vec![SyntaxVariable {
                name: "value1".into(),
                description: "The first number or range to add together.".into(),
            }],
            notes: vec!["Non-numeric values are ignored.".into()],
            ..Default::default()
        };
        let record = FunctionRecord::merge(descriptor(), detail);
        let json = serde_json::to_string(&record).unwrap();

        let keys = [
            "\"type\"",
            "\"name\"",
            "\"syntax\"",
            "\"description\"",
            "\"link\"",
            "\"sampleUsage\"",
            "\"syntaxVariables\"",
            "\"notes\"",
            "\"related\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
        assert!(json.contains(
            r#""syntaxVariables":[{"name":"value1","description":"The first number or range to add together."}]"#
        ));
    }
}
