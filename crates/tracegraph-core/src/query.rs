// Rust guideline compliant 2026-10-16

//! Tracker query construction.

/// Builds the issue search query for the tracked issue types.
///
/// One project renders as `project = P`, several as `project IN (P1,P2)`.
/// Type names are quoted with single quotes and are not escaped, so a name
/// containing `'` yields an invalid query.
pub fn build_jql<P, T>(projects: &[P], issue_types: &[T]) -> String
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let project = match projects {
        [single] => format!("project = {}", single.as_ref()),
        many => format!(
            "project IN ({})",
            many.iter().map(|p| p.as_ref()).collect::<Vec<&str>>().join(",")
        ),
    };
    let types = issue_types
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<&str>>()
        .join("','");
    format!("{} AND issuetype in ('{}')", project, types)
}

/// Recovers the issue-type names from a query made by [`build_jql`].
///
/// Returns `None` when the query has no `issuetype in (...)` clause.
pub fn issue_types_in(jql: &str) -> Option<Vec<String>> {
    const CLAUSE: &str = "issuetype in ('";
    let start = jql.find(CLAUSE)? + CLAUSE.len();
    let end = jql.rfind("')")?;
    if end < start {
        return None;
    }
    Some(jql[start..end].split("','").map(str::to_string).collect())
}
