//! First-boot seeding of users from a CSV file.
//!
//! Runs as an explicit startup step, before the listener is bound, whenever
//! the users surface is mounted. The seed file has a header row naming the
//! fields (typically `id,name,password`); each following row becomes one user
//! hash plus its `users` set membership.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use crate::domain::entities::{Record, User};
use crate::domain::repositories::UserRepository;

/// What a seeding attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The `users` set already exists; nothing was read.
    AlreadySeeded,
    /// The seed file does not exist; nothing was written.
    NoSeedFile,
    /// Rows were loaded. `skipped` counts rows without an `id`.
    Seeded { users: usize, skipped: usize },
}

/// Seeds users from `path` unless the `users` set already exists.
///
/// A missing seed file is not an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or on store errors.
pub async fn seed_users_if_empty<R: UserRepository>(
    repository: &R,
    path: &Path,
) -> Result<SeedOutcome> {
    if repository
        .is_populated()
        .await
        .context("Failed to check whether users are already seeded")?
    {
        info!("Users already present, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    load_seed_file(repository, path).await
}

/// Loads every row of the seed file, regardless of existing users.
///
/// Rows whose `id` matches an existing user overwrite its fields.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or on store errors.
pub async fn load_seed_file<R: UserRepository>(
    repository: &R,
    path: &Path,
) -> Result<SeedOutcome> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No seed file, skipping seed");
            return Ok(SeedOutcome::NoSeedFile);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read seed file {}", path.display()));
        }
    };

    let rows =
        parse_seed_rows(&bytes).with_context(|| format!("Invalid seed file {}", path.display()))?;

    let mut users = 0;
    let mut skipped = 0;

    for (line, row) in rows.into_iter().enumerate() {
        let Some(user) = User::from_record(row) else {
            // +2: header row, then 1-based numbering
            warn!(line = line + 2, "Seed row has no id, skipping");
            skipped += 1;
            continue;
        };

        repository
            .save(&user)
            .await
            .with_context(|| format!("Failed to store seeded user {}", user.id))?;
        users += 1;
    }

    info!(users, skipped, "Seeded users from {}", path.display());

    Ok(SeedOutcome::Seeded { users, skipped })
}

/// Parses CSV bytes with a header row into one record per data row.
fn parse_seed_rows(bytes: &[u8]) -> Result<Vec<Record>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes)
        .deserialize::<Record>()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_seed_rows() {
        let rows = parse_seed_rows(b"id,name,password\n1,test_user,test_password\n2,other,pw\n")
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("id").map(String::as_str), Some("1"));
        assert_eq!(rows[0].get("name").map(String::as_str), Some("test_user"));
        assert_eq!(rows[1].get("password").map(String::as_str), Some("pw"));
    }

    #[test]
    fn test_parse_seed_rows_rejects_ragged_rows() {
        assert!(parse_seed_rows(b"id,name\n1,a,extra\n").is_err());
    }

    #[tokio::test]
    async fn test_skips_when_already_populated() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_is_populated().times(1).returning(|| Ok(true));
        mock_repo.expect_save().times(0);

        let file = seed_file("id,name,password\n1,test_user,test_password\n");

        let outcome = seed_users_if_empty(&mock_repo, file.path()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_no_op() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_is_populated().times(1).returning(|| Ok(false));
        mock_repo.expect_save().times(0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("initial_data_users.csv");

        let outcome = seed_users_if_empty(&mock_repo, &path).await.unwrap();

        assert_eq!(outcome, SeedOutcome::NoSeedFile);
    }

    #[tokio::test]
    async fn test_seeds_rows_and_skips_rows_without_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_is_populated().times(1).returning(|| Ok(false));
        mock_repo
            .expect_save()
            .withf(|user| user.id == "1" || user.id == "3")
            .times(2)
            .returning(|_| Ok(()));

        let file = seed_file("id,name,password\n1,test_user,test_password\n,ghost,x\n3,third,pw\n");

        let outcome = seed_users_if_empty(&mock_repo, file.path()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::Seeded { users: 2, skipped: 1 });
    }
}
