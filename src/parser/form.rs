/// Heading marker that GitHub issue forms put before every answer
pub const HEADING_MARKER: &str = "### ";

/// Field values of a submitted issue form, in the order their headings appear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedForm {
    fields: Vec<(String, String)>,
}

impl ParsedForm {
    /// Look up a field value by heading name (exact match)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|(k, _)| k.as_str()).collect()
    }

    // A repeated heading keeps its first position but takes the later value.
    // GitHub forms never repeat a heading, so a repeat means a hand-edited
    // body and the earlier answer is silently lost.
    fn insert(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }
}

/// Parses an issue form body into heading/value pairs.
///
/// A line starting with `### ` opens a field named by the rest of the line
/// (trimmed). Every following line up to the next heading is part of its
/// value, joined with `\n` and trimmed. Text before the first heading is
/// ignored.
///
/// Returns an empty form when the body has no headings at all, which callers
/// treat as "not a form submission".
///
/// # Example
/// ```
/// use issueguard::parser::parse_issue_body;
/// let form = parse_issue_body("### Version\n\n1.2.3\n\n### Email\n\na@b.co");
/// assert_eq!(form.get("Version"), Some("1.2.3"));
/// assert_eq!(form.get("Email"), Some("a@b.co"));
/// ```
pub fn parse_issue_body(body: &str) -> ParsedForm {
    let mut form = ParsedForm::default();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in body.lines() {
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            if let Some((name, lines)) = current.take() {
                form.insert(name, join_value(&lines));
            }
            current = Some((heading.trim().to_string(), Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((name, lines)) = current {
        form.insert(name, join_value(&lines));
    }

    form
}

fn join_value(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
