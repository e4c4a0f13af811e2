use crate::artifacts::objects::commit_id::CommitId;

/// What a checkout argument refers to.
///
/// An argument spelled as a full identifier (40 symbols over `{A, B, C}`) is
/// always a literal commit, even if a branch of the same name were registered.
/// Everything else is a branch name. The root sentinel is not a literal and
/// therefore falls through to the branch case.
///
/// # Examples
///
/// ```
/// use tern::artifacts::branch::revision::Revision;
///
/// assert!(matches!(Revision::parse("feature"), Revision::Branch(_)));
/// assert!(matches!(Revision::parse(&"A".repeat(40)), Revision::Commit(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Commit(CommitId),
    Branch(String),
}

impl Revision {
    pub fn parse(target: &str) -> Self {
        if CommitId::is_literal(target)
            && let Ok(id) = CommitId::try_parse(target)
        {
            return Revision::Commit(id);
        }

        Revision::Branch(target.to_string())
    }
}
