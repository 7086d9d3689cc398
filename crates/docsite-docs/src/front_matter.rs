//! YAML front matter and title extraction.

use serde::Deserialize;

/// Front matter fields that affect navigation. Other keys are ignored.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub sidebar_label: Option<String>,
}

/// Split a `---` fenced YAML block off the start of `content`.
///
/// Returns the YAML text (if any) and the remaining body. An opening fence
/// without a closing one is treated as plain body text.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse the front matter block of a document.
///
/// Returns defaults when the document has no front matter.
pub(crate) fn parse(content: &str) -> Result<(FrontMatter, &str), serde_yaml::Error> {
    match split(content) {
        (Some(yaml), body) if !yaml.trim().is_empty() => Ok((serde_yaml::from_str(yaml)?, body)),
        (_, body) => Ok((FrontMatter::default(), body)),
    }
}

/// First level-one ATX heading of a markdown body.
pub(crate) fn first_heading(body: &str) -> Option<&str> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(heading) = trimmed.strip_prefix("# ") {
            let heading = heading.trim().trim_end_matches('#').trim_end();
            if !heading.is_empty() {
                return Some(heading);
            }
        }
    }
    None
}
