//! Branch registry and HEAD
//!
//! This module keeps track of where the repository currently stands and which
//! branches exist:
//!
//! - Branches are registered once and numbered by registration order. The
//!   number is permanent, since it is encoded into every commit identifier
//!   created on that branch. Branches are never deleted or renamed.
//! - Each branch has a head pointer, kept as a single name-to-identifier
//!   mapping.
//! - HEAD is either attached to a branch or detached, plus the identifier of
//!   the commit it points at.
//!
//! ## File Format
//!
//! Under the control directory:
//! ```text
//! branches         one branch name per line, line number = branch number
//! heads            "<name> <commit-id>" per line
//! current_branch   attached branch name, empty when detached
//! HEAD             commit identifier (root sentinel before the first commit)
//! ```

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::core::fs;
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

pub const BRANCHES_FILE: &str = "branches";
pub const HEADS_FILE: &str = "heads";
pub const CURRENT_BRANCH_FILE: &str = "current_branch";
pub const HEAD_FILE: &str = "HEAD";

/// Where HEAD stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Attached(BranchName),
    Detached,
}

impl Head {
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached)
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Attached(branch) => Some(branch),
            Head::Detached => None,
        }
    }
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.tern`)
    path: Box<Path>,
}

impl Refs {
    /// Write the registry of a fresh repository: `default_branch` registered as
    /// number 0 and current, HEAD at the root sentinel.
    pub fn initialize(&self, default_branch: &BranchName) -> anyhow::Result<()> {
        fs::replace_file(&self.branches_path(), &format!("{default_branch}\n"))?;
        self.write_heads(&BTreeMap::from([(
            default_branch.as_ref().to_string(),
            CommitId::Root,
        )]))?;
        self.set_current_branch(Some(default_branch))?;
        self.update_head(&CommitId::Root)
    }

    /// Registered branches in registration order
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let content = fs::read_string(&self.branches_path(), fs::LIST_READ_LIMIT)?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(BranchName::try_parse)
            .collect()
    }

    /// Registration index of `name`, which is the number encoded into the
    /// identifiers of commits made on it.
    pub fn branch_number(&self, name: &str) -> anyhow::Result<usize> {
        self.list_branches()?
            .iter()
            .position(|branch| branch.as_ref() == name)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()).into())
    }

    pub fn is_registered(&self, name: &str) -> anyhow::Result<bool> {
        Ok(self
            .list_branches()?
            .iter()
            .any(|branch| branch.as_ref() == name))
    }

    /// Append `name` at the next free number with its head at `head`.
    pub fn register(&self, name: &BranchName, head: &CommitId) -> anyhow::Result<usize> {
        let mut branches = self.list_branches()?;

        if branches.contains(name) {
            return Err(RepositoryError::BranchExists(name.to_string()).into());
        }

        branches.push(name.clone());
        let number = branches.len() - 1;

        let content = branches
            .iter()
            .map(|branch| format!("{branch}\n"))
            .collect::<String>();
        fs::replace_file(&self.branches_path(), &content)?;
        self.set_head_of(name, head)?;

        info!("registered branch {name} as #{number} at {head}");

        Ok(number)
    }

    pub fn head_of(&self, name: &str) -> anyhow::Result<CommitId> {
        self.read_heads()?
            .remove(name)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()).into())
    }

    pub fn set_head_of(&self, name: &BranchName, id: &CommitId) -> anyhow::Result<()> {
        let mut heads = self.read_heads()?;
        heads.insert(name.as_ref().to_string(), id.clone());

        debug!("branch {name} now at {id}");

        self.write_heads(&heads)
    }

    pub fn current_branch(&self) -> anyhow::Result<Head> {
        let content = fs::read_string(&self.current_branch_path(), fs::VALUE_READ_LIMIT)?;
        let content = content.trim();

        if content.is_empty() {
            Ok(Head::Detached)
        } else {
            Ok(Head::Attached(BranchName::try_parse(content)?))
        }
    }

    /// Attach HEAD to `branch`, or detach it with `None`.
    pub fn set_current_branch(&self, branch: Option<&BranchName>) -> anyhow::Result<()> {
        let content = branch.map(|branch| branch.to_string()).unwrap_or_default();

        fs::replace_file(&self.current_branch_path(), &content)
    }

    pub fn read_head(&self) -> anyhow::Result<CommitId> {
        let content = fs::read_string(&self.head_path(), fs::VALUE_READ_LIMIT)?;

        CommitId::try_parse(content.trim())
    }

    pub fn update_head(&self, id: &CommitId) -> anyhow::Result<()> {
        debug!("HEAD now at {id}");

        fs::replace_file(&self.head_path(), &id.to_string())
    }

    fn read_heads(&self) -> anyhow::Result<BTreeMap<String, CommitId>> {
        let path = self.heads_path();
        let content = fs::read_string(&path, fs::LIST_READ_LIMIT)?;

        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (name, id) = line
                    .split_once(' ')
                    .with_context(|| format!("malformed line in {}: {line}", path.display()))?;

                Ok((name.to_string(), CommitId::try_parse(id)?))
            })
            .collect()
    }

    fn write_heads(&self, heads: &BTreeMap<String, CommitId>) -> anyhow::Result<()> {
        let content = heads
            .iter()
            .map(|(name, id)| format!("{name} {id}\n"))
            .collect::<String>();

        fs::replace_file(&self.heads_path(), &content)
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_FILE).into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.path.join(HEADS_FILE).into_boxed_path()
    }

    pub fn current_branch_path(&self) -> Box<Path> {
        self.path.join(CURRENT_BRANCH_FILE).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_FILE).into_boxed_path()
    }
}
