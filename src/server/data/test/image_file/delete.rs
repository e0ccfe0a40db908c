use super::*;

/// Tests deleting a stored file.
///
/// Expected: Ok(true) and the file is gone
#[tokio::test]
async fn deletes_stored_file() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());
    let file_name = repo.store(b"png-bytes").await?;

    assert!(repo.delete(&file_name).await?);
    assert!(!dir.path().join(&file_name).exists());

    Ok(())
}

/// Tests deleting a file that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_file() -> Result<(), std::io::Error> {
    let dir = TempDir::new()?;
    let repo = ImageFileRepository::new(dir.path());

    assert!(!repo.delete("abcdefgh.ijk").await?);

    Ok(())
}
