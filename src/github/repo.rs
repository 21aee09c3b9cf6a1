use crate::error::{Error, Result};

/// A GitHub repository coordinate.
#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    /// Builds a repository coordinate from owner and name.
    /// Both parts must be non-empty.
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        if owner.is_empty() || repo.is_empty() {
            return Err(Error::InvalidRepo(format!("'{}/{}'", owner, repo)));
        }
        Ok(GitHubRepo {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let repo = GitHubRepo::new("owner", "repo").unwrap();
        assert_eq!(
            repo,
            GitHubRepo {
                owner: "owner".to_string(),
                repo: "repo".to_string()
            }
        );
    }

    #[test]
    fn test_new_empty_owner_fails() {
        let result = GitHubRepo::new("", "repo");
        assert!(matches!(result, Err(Error::InvalidRepo(_))));
    }

    #[test]
    fn test_new_empty_repo_fails() {
        let result = GitHubRepo::new("owner", "");
        assert!(matches!(result, Err(Error::InvalidRepo(_))));
    }

    #[test]
    fn test_display() {
        let repo = GitHubRepo::new("owner", "repo").unwrap();
        assert_eq!(format!("{}", repo), "owner/repo");
    }
}
